use crux_core::{render::render, Command};

use crate::api_request;
use crate::events::{DeviceEvent, Event, WakeOrigin};
use crate::http_helpers::WAKE_ENDPOINT;
use crate::model::Model;
use crate::types::{Device, DeviceList};
use crate::Effect;

use super::ui::show_success;

/// Handle wake API requests and reconcile their responses.
///
/// The registry only changes once the server has confirmed an operation.
/// Responses are applied in the order they arrive, not the order the
/// requests were issued.
pub fn handle(event: DeviceEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DeviceEvent::Fetch => fetch_devices(model),
        DeviceEvent::Wake { device } => wake(device, WakeOrigin::Registry, model),
        DeviceEvent::Remove { device } => remove(device, model),

        DeviceEvent::FetchResponse(result) => {
            model.finish_request();
            match result {
                Ok(DeviceList { devices }) => {
                    log::debug!("loaded {} devices", devices.len());
                    model.devices.replace_all(devices);
                    model.clear_error();
                    render()
                }
                Err(e) => model.set_error_and_render(e),
            }
        }

        DeviceEvent::WakeResponse {
            device,
            origin,
            result,
        } => {
            model.finish_request();
            match result {
                Ok(()) => {
                    log::info!("woke {}", device.mac_address);
                    model.devices.add(device.clone());
                    model.clear_error();
                    if origin == WakeOrigin::Draft {
                        model.draft.clear();
                    }
                    show_success(device, model)
                }
                Err(e) => model.set_error_and_render(e),
            }
        }

        DeviceEvent::RemoveResponse { device, result } => {
            model.finish_request();
            match result {
                Ok(()) => {
                    model.devices.remove(&device.mac_address);
                    model.clear_error();
                    render()
                }
                Err(e) => model.set_error_and_render(e),
            }
        }
    }
}

pub fn fetch_devices(model: &mut Model) -> Command<Effect, Event> {
    api_request!(model, get, WAKE_ENDPOINT, "Load devices",
        expect_json: DeviceList,
        |result| Event::Devices(DeviceEvent::FetchResponse(result))
    )
}

/// Send a wake signal; on success the device is registered.
pub fn wake(device: Device, origin: WakeOrigin, model: &mut Model) -> Command<Effect, Event> {
    let body = device.clone();
    api_request!(model, post, WAKE_ENDPOINT, "Wake device",
        body_json: &body,
        |result| Event::Devices(DeviceEvent::WakeResponse { device, origin, result })
    )
}

pub fn remove(device: Device, model: &mut Model) -> Command<Effect, Event> {
    let body = device.clone();
    api_request!(model, delete, WAKE_ENDPOINT, "Remove device",
        body_json: &body,
        |result| Event::Devices(DeviceEvent::RemoveResponse { device, result })
    )
}
