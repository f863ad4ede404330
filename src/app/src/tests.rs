use super::*;
use crux_core::{App as _, Request};
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};

fn take_http(cmd: &mut Command<Effect, Event>) -> Request<HttpRequest> {
    cmd.effects()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("command should issue an HTTP request")
}

fn take_timer(cmd: &mut Command<Effect, Event>) -> Request<TimerOperation> {
    cmd.effects()
        .find_map(|effect| match effect {
            Effect::Timer(request) => Some(request),
            _ => None,
        })
        .expect("command should start a timer")
}

/// Resolves `request` with `response` and feeds the resulting event back.
fn respond(
    app: &App,
    model: &mut Model,
    cmd: &mut Command<Effect, Event>,
    mut request: Request<HttpRequest>,
    response: HttpResult,
) -> Command<Effect, Event> {
    request.resolve(response).expect("request should resolve");
    let event = cmd.events().next().expect("response should produce an event");
    app.update(event, model)
}

#[test]
fn initialize_fetches_device_list_once() {
    let app = App;
    let mut model = Model::default();

    let mut cmd = app.update(Event::Initialize, &mut model);
    let request = take_http(&mut cmd);
    assert_eq!(request.operation.method, "GET");
    assert_eq!(request.operation.url, "https://relative/api/v1/wake");

    let mut again = app.update(Event::Initialize, &mut model);
    assert!(again.effects().next().is_none());
    assert_eq!(model.pending_requests, 1);
}

#[test]
fn initial_fetch_populates_registry() {
    let app = App;
    let mut model = Model::default();

    let mut cmd = app.update(Event::Initialize, &mut model);
    let request = take_http(&mut cmd);
    let _ = respond(
        &app,
        &mut model,
        &mut cmd,
        request,
        HttpResult::Ok(
            HttpResponse::ok()
                .body(r#"{"devices":[{"name":"nas","macAddress":"aa:bb:cc:dd:ee:01"}]}"#)
                .build(),
        ),
    );

    assert_eq!(
        model.devices.list(),
        &[Device::new("nas", "aa:bb:cc:dd:ee:01")]
    );
    assert!(!model.is_loading());
}

#[test]
fn wake_from_draft_registers_device_and_shows_notice() {
    let app = App;
    let mut model = Model::default();

    let _ = app.update(
        Event::Draft(DraftEvent::SetName {
            name: "pc".to_string(),
        }),
        &mut model,
    );
    let _ = app.update(
        Event::Draft(DraftEvent::SetMacAddress {
            mac_address: "00:11:22:33:44:55".to_string(),
        }),
        &mut model,
    );

    let mut cmd = app.update(Event::Draft(DraftEvent::Wake), &mut model);
    let request = take_http(&mut cmd);
    assert_eq!(request.operation.method, "POST");
    let body: serde_json::Value = serde_json::from_slice(&request.operation.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"name": "pc", "macAddress": "00:11:22:33:44:55"})
    );

    let mut after = respond(
        &app,
        &mut model,
        &mut cmd,
        request,
        HttpResult::Ok(HttpResponse::status(204).build()),
    );

    let pc = Device::new("pc", "00:11:22:33:44:55");
    assert!(model.devices.contains(&pc.mac_address));
    assert_eq!(model.draft, WakeDraft::default());
    assert_eq!(model.feedback.success_notice(), Some(&pc));

    let timer = take_timer(&mut after);
    assert_eq!(
        timer.operation,
        TimerOperation::Start {
            id: model.feedback.success.timer().unwrap(),
            millis: SUCCESS_NOTICE_TIMEOUT_MS,
        }
    );
}

#[test]
fn success_notice_expires_when_timer_fires() {
    let app = App;
    let mut model = Model::default();

    let mut cmd = app.update(
        Event::Devices(DeviceEvent::WakeResponse {
            device: Device::new("pc", "00:11"),
            origin: WakeOrigin::Registry,
            result: Ok(()),
        }),
        &mut model,
    );
    let mut timer = take_timer(&mut cmd);
    let TimerOperation::Start { id, .. } = timer.operation.clone() else {
        panic!("expected a timer start");
    };

    timer.resolve(TimerOutput::Fired { id }).unwrap();
    let event = cmd.events().next().unwrap();
    let _ = app.update(event, &mut model);

    assert_eq!(model.feedback.success_notice(), None);
}

#[test]
fn second_success_cancels_first_timer() {
    let app = App;
    let mut model = Model::default();
    let success = |device: Device| {
        Event::Devices(DeviceEvent::WakeResponse {
            device,
            origin: WakeOrigin::Registry,
            result: Ok(()),
        })
    };

    let _ = app.update(success(Device::new("a", "00:0a")), &mut model);
    let first = model.feedback.success.timer().unwrap();

    let mut cmd = app.update(success(Device::new("b", "00:0b")), &mut model);
    let operations: Vec<TimerOperation> = cmd
        .effects()
        .filter_map(|effect| match effect {
            Effect::Timer(request) => Some(request.operation),
            _ => None,
        })
        .collect();

    let second = model.feedback.success.timer().unwrap();
    assert_eq!(operations.len(), 2);
    assert!(operations.contains(&TimerOperation::Cancel { id: first }));
    assert!(operations.contains(&TimerOperation::Start {
        id: second,
        millis: SUCCESS_NOTICE_TIMEOUT_MS,
    }));
}

#[test]
fn rejected_wake_sets_error_and_keeps_registry() {
    let app = App;
    let mut model = Model::default();

    let mut cmd = app.update(
        Event::Devices(DeviceEvent::Wake {
            device: Device::new("pc", "zz"),
        }),
        &mut model,
    );
    let request = take_http(&mut cmd);
    let _ = respond(
        &app,
        &mut model,
        &mut cmd,
        request,
        HttpResult::Ok(
            HttpResponse::status(400)
                .body(r#"{"message":"bad mac","status":400}"#)
                .build(),
        ),
    );

    assert_eq!(model.feedback.error, Some(ApiError::new("bad mac", 400)));
    assert!(model.devices.list().is_empty());
    assert_eq!(model.feedback.success_notice(), None);
}

#[test]
fn transport_failure_is_normalized() {
    let app = App;
    let mut model = Model {
        devices: DeviceRegistry::from(vec![Device::new("nas", "aa:bb:cc:dd:ee:01")]),
        ..Default::default()
    };

    let mut cmd = app.update(
        Event::Devices(DeviceEvent::Remove {
            device: Device::new("nas", "aa:bb:cc:dd:ee:01"),
        }),
        &mut model,
    );
    let request = take_http(&mut cmd);
    assert_eq!(request.operation.method, "DELETE");

    let _ = respond(
        &app,
        &mut model,
        &mut cmd,
        request,
        HttpResult::Err(crux_http::HttpError::Io("Failed to fetch".to_string())),
    );

    let error = model.feedback.error.clone().unwrap();
    assert_eq!(error.status, TRANSPORT_FAILURE_STATUS);
    assert!(model.devices.contains("aa:bb:cc:dd:ee:01"));
}

#[test]
fn remove_drops_device_after_confirmation() {
    let app = App;
    let mut model = Model {
        devices: DeviceRegistry::from(vec![Device::new("nas", "aa:bb:cc:dd:ee:01")]),
        ..Default::default()
    };

    let mut cmd = app.update(
        Event::Devices(DeviceEvent::Remove {
            device: Device::new("", "aa:bb:cc:dd:ee:01"),
        }),
        &mut model,
    );
    assert!(model.devices.contains("aa:bb:cc:dd:ee:01"));

    let request = take_http(&mut cmd);
    let _ = respond(
        &app,
        &mut model,
        &mut cmd,
        request,
        HttpResult::Ok(HttpResponse::status(204).build()),
    );

    assert!(!model.devices.contains("aa:bb:cc:dd:ee:01"));
}

#[test]
fn clear_error() {
    let app = App;
    let mut model = Model::default();
    model.feedback.set_error(ApiError::new("Some error", 500));

    let _ = app.update(Event::Ui(UiEvent::ClearError), &mut model);

    assert_eq!(model.feedback.error, None);
}

#[test]
fn superseded_timer_start_completes_when_cancelled() {
    let app = App;
    let mut model = Model::default();
    let success = |device: Device| {
        Event::Devices(DeviceEvent::WakeResponse {
            device,
            origin: WakeOrigin::Registry,
            result: Ok(()),
        })
    };

    let mut first_cmd = app.update(success(Device::new("a", "00:0a")), &mut model);
    let mut first_start = take_timer(&mut first_cmd);
    let TimerOperation::Start { id: first, .. } = first_start.operation.clone() else {
        panic!("expected a timer start");
    };

    let mut second_cmd = app.update(success(Device::new("b", "00:0b")), &mut model);
    let mut cancel = second_cmd
        .effects()
        .find_map(|effect| match effect {
            Effect::Timer(request)
                if request.operation == (TimerOperation::Cancel { id: first }) =>
            {
                Some(request)
            }
            _ => None,
        })
        .expect("second success should cancel the first timer");

    // shell stopped timer `first`: both its start and the cancel are answered
    first_start
        .resolve(TimerOutput::Cancelled { id: first })
        .expect("start should resolve");
    cancel
        .resolve(TimerOutput::Cancelled { id: first })
        .expect("cancel should resolve");

    let events: Vec<Event> = first_cmd.events().collect();
    assert_eq!(
        events,
        vec![Event::Ui(UiEvent::SuccessTimer(TimerOutput::Cancelled { id: first }))]
    );
    assert!(first_cmd.is_done());

    for event in events.into_iter().chain(second_cmd.events().collect::<Vec<_>>()) {
        let _ = app.update(event, &mut model);
    }

    assert_eq!(
        model.feedback.success_notice(),
        Some(&Device::new("b", "00:0b"))
    );
    assert_ne!(model.feedback.success.timer(), Some(first));
}
