// Library target exists solely for the integration tests in tests/.
// The binary entry point is main.rs; this file re-declares the module tree so
// that tests can import types via `wonderland::app::*` / `wonderland::store::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

pub mod app;
pub mod audio;
pub mod config;
pub mod event;
pub mod store;
pub mod ui;
pub mod unlock;
