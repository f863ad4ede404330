mod devices;
mod draft;
mod ui;

pub use ui::SUCCESS_NOTICE_TIMEOUT_MS;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Initialization: load the device list exactly once
        Event::Initialize => {
            if model.initialized {
                return Command::done();
            }
            model.initialized = true;
            devices::fetch_devices(model)
        }

        Event::Devices(event) => devices::handle(event, model),
        Event::Draft(event) => draft::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
