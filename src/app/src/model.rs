use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel handed to the render layer
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Devices confirmed by the server
    pub devices: DeviceRegistry,

    /// Input row, not yet submitted
    pub draft: WakeDraft,

    // UI state
    pub feedback: Feedback,
    pub pending_requests: u32,

    /// Set once the initial device list has been requested
    pub initialized: bool,
}

impl Model {
    /// A request was handed to the shell
    pub fn start_request(&mut self) {
        self.pending_requests += 1;
    }

    /// A response arrived, successful or not
    pub fn finish_request(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
    }

    pub fn is_loading(&self) -> bool {
        self.pending_requests > 0
    }

    pub fn set_error(&mut self, error: ApiError) {
        log::warn!("request failed: {error}");
        self.feedback.set_error(error);
    }

    /// Set an error and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: ApiError,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    pub fn clear_error(&mut self) {
        self.feedback.clear_error();
    }
}
