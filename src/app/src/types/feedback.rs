use std::fmt;

use serde::{Deserialize, Serialize};

use super::device::Device;
use super::expiring::{Expiring, Rearm};
use crate::commands::timer::TimerId;

/// Status used when a request never produced an HTTP response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// Normalized failure of an API request.
///
/// Server rejections carry the HTTP status; transport failures use
/// [`TRANSPORT_FAILURE_STATUS`]. The server sends the same shape as its
/// error body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(message, TRANSPORT_FAILURE_STATUS)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

/// User feedback: the latest error and a self-expiring success notice.
///
/// The two are independent, setting one never touches the other.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    pub error: Option<ApiError>,
    pub success: Expiring<Device>,
}

impl Feedback {
    pub fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_success(&mut self, device: Device) -> Rearm {
        self.success.set(device)
    }

    pub fn clear_success(&mut self) -> Option<TimerId> {
        self.success.clear()
    }

    pub fn success_notice(&self) -> Option<&Device> {
        self.success.value()
    }
}
