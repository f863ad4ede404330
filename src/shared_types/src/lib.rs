//! TypeScript bindings for the wakeup UI core are generated by `build.rs`.
