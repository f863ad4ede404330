/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.draft.name, name)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.draft.name, String::new();
///     model.draft.mac_address, String::new()
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{
    build_url, check_response_status, error_from_body, extract_api_error, is_response_success,
    map_http_error, parse_json_response, process_json_response, process_status_response,
    BASE_URL, WAKE_ENDPOINT,
};

/// Macro for wake API requests with standard bookkeeping.
///
/// Counts the request as pending, renders, and maps the normalized result
/// into the event given by the trailing closure-like block. If the request
/// cannot be built the error is set immediately.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Patterns
///
/// Pattern 1: GET expecting JSON response
/// ```ignore
/// api_request!(model, get, WAKE_ENDPOINT, "Load devices",
///     expect_json: DeviceList,
///     |result| Event::Devices(DeviceEvent::FetchResponse(result))
/// )
/// ```
///
/// Pattern 2: request with JSON body expecting status only
/// ```ignore
/// api_request!(model, post, WAKE_ENDPOINT, "Wake device",
///     body_json: &device,
///     |result| Event::Devices(DeviceEvent::WakeResponse { device, origin, result })
/// )
/// ```
#[macro_export]
macro_rules! api_request {
    // Pattern 1: GET expecting JSON response
    ($model:expr, get, $endpoint:expr, $action:expr, expect_json: $response_type:ty, |$result:ident| $event:expr) => {{
        $model.start_request();
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::get($crate::build_url($endpoint))
                .header("Accept", "application/json")
                .build()
                .then_send(move |result| {
                    let $result: Result<$response_type, $crate::types::ApiError> =
                        $crate::process_json_response($action, result);
                    $event
                }),
        ])
    }};

    // Pattern 2: request with JSON body expecting status only
    ($model:expr, $method:ident, $endpoint:expr, $action:expr, body_json: $body:expr, |$result:ident| $event:expr) => {{
        match $crate::HttpCmd::$method($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => {
                $model.start_request();
                crux_core::Command::all([
                    crux_core::render::render(),
                    builder.build().then_send(move |result| {
                        let $result = $crate::process_status_response($action, result);
                        $event
                    }),
                ])
            }
            Err(e) => $model.set_error_and_render($crate::types::ApiError::transport(format!(
                "Failed to create {} request: {}",
                $action, e
            ))),
        }
    }};
}
