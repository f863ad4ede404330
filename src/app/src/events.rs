use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerOutput;
use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// The UI became active; loads the device list once
    Initialize,

    Devices(DeviceEvent),
    Draft(DraftEvent),
    Ui(UiEvent),
}

/// Where a wake request came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WakeOrigin {
    /// The name/MAC input row
    Draft,
    /// A row of an already registered device
    Registry,
}

/// Requests against the wake API and their responses
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Fetch,
    Wake {
        device: Device,
    },
    Remove {
        device: Device,
    },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    FetchResponse(Result<DeviceList, ApiError>),
    #[serde(skip)]
    WakeResponse {
        device: Device,
        origin: WakeOrigin,
        result: Result<(), ApiError>,
    },
    #[serde(skip)]
    RemoveResponse {
        device: Device,
        result: Result<(), ApiError>,
    },
}

/// Edits of the wake draft
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DraftEvent {
    SetName { name: String },
    SetMacAddress { mac_address: String },
    Wake,
    Clear,
}

/// Feedback banner actions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,

    #[serde(skip)]
    SuccessTimer(TimerOutput),
}
