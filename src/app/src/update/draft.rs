use crux_core::{render::render, Command};

use crate::events::{DraftEvent, Event, WakeOrigin};
use crate::model::Model;
use crate::Effect;

use super::devices;

/// Handle edits of the wake draft
pub fn handle(event: DraftEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DraftEvent::SetName { name } => {
            if model.draft.name == name {
                return Command::done();
            }
            model.draft.set_name(name);
            render()
        }
        DraftEvent::SetMacAddress { mac_address } => {
            if model.draft.mac_address == mac_address {
                return Command::done();
            }
            model.draft.set_mac_address(mac_address);
            render()
        }
        // The request gets its own copy; edits made while it is in flight
        // do not change what is registered.
        DraftEvent::Wake => devices::wake(model.draft.snapshot(), WakeOrigin::Draft, model),
        DraftEvent::Clear => {
            if model.draft.is_empty() {
                return Command::done();
            }
            model.draft.clear();
            render()
        }
    }
}
