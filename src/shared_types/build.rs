use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use wakeup_ui_core::{
    events::{DeviceEvent, DraftEvent, UiEvent, WakeOrigin},
    App, TimerId, TimerOperation, TimerOutput,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<DeviceEvent>()?;
    gen.register_type::<DraftEvent>()?;
    gen.register_type::<UiEvent>()?;
    gen.register_type::<WakeOrigin>()?;

    // Timer protocol spoken with the shell
    gen.register_type::<TimerId>()?;
    gen.register_type::<TimerOperation>()?;
    gen.register_type::<TimerOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
