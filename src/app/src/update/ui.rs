use crux_core::{render::render, Command};

use crate::commands::timer::{TimerId, TimerOutput};
use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::types::Device;
use crate::update_field;
use crate::{Effect, TimerCmd};

/// How long a success notice stays visible
pub const SUCCESS_NOTICE_TIMEOUT_MS: u64 = 4000;

/// Handle UI-related events (clear messages, notice timer)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::ClearError => update_field!(model.feedback.error, None),
        UiEvent::ClearSuccess => match model.feedback.clear_success() {
            Some(timer) => Command::all([cancel_timer(timer), render()]),
            None => Command::done(),
        },
        UiEvent::SuccessTimer(TimerOutput::Fired { id }) => {
            if model.feedback.success.expire(id) {
                render()
            } else {
                log::debug!("ignoring superseded success timer {}", id.0);
                Command::done()
            }
        }
        UiEvent::SuccessTimer(TimerOutput::Cancelled { .. }) => Command::done(),
    }
}

/// Show `device` as woken and (re)start the timer that hides the notice.
///
/// A notice that is still visible is replaced and its timer cancelled, so
/// repeated successes extend the visibility instead of stacking timers. The
/// shell resolves the superseded `Start` with `Cancelled`, which is ignored.
pub fn show_success(device: Device, model: &mut Model) -> Command<Effect, Event> {
    let rearm = model.feedback.set_success(device);

    let mut commands = Vec::with_capacity(3);
    if let Some(superseded) = rearm.superseded {
        commands.push(cancel_timer(superseded));
    }
    commands.push(
        TimerCmd::start(rearm.armed, SUCCESS_NOTICE_TIMEOUT_MS)
            .build()
            .then_send(|output| Event::Ui(UiEvent::SuccessTimer(output))),
    );
    commands.push(render());

    Command::all(commands)
}

fn cancel_timer(id: TimerId) -> Command<Effect, Event> {
    TimerCmd::cancel(id)
        .build()
        .then_send(|output| Event::Ui(UiEvent::SuccessTimer(output)))
}
