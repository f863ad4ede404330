//! Timer command definitions.
//!
//! The Core has no clock. It asks the Shell to start and cancel one-shot
//! timers and learns about them through [`TimerOutput`].

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Identifies a timer armed by the Core
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Operations that the Shell needs to perform for timers
///
/// Every request must be answered exactly once, otherwise the Core keeps the
/// waiting task alive:
/// - `Start` is answered with `Fired` when the timer elapses, or with
///   `Cancelled` if a later `Cancel` stopped it first.
/// - `Cancel` is answered with `Cancelled` right away, also when the timer
///   already fired or is unknown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOperation {
    Start { id: TimerId, millis: u64 },
    Cancel { id: TimerId },
}

/// The output from timer operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOutput {
    Fired { id: TimerId },
    Cancelled { id: TimerId },
}

impl Operation for TimerOperation {
    type Output = TimerOutput;
}

/// Command-based timer API
pub struct Timer<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Timer<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    /// Start a one-shot timer that fires after `millis` milliseconds
    pub fn start(id: TimerId, millis: u64) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(TimerOperation::Start { id, millis })
    }

    /// Cancel a pending timer; the Shell answers both this request and the
    /// pending `Start` with `Cancelled`
    pub fn cancel(id: TimerId) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(TimerOperation::Cancel { id })
    }
}

/// Request builder for timer operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: TimerOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: TimerOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = TimerOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
