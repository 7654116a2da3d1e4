//! Primitive physics sandbox
//!
//! Application layer: configuration, localisation, input mapping, the
//! studio UI and the systems that tie the engine crates to a window.

pub mod config;
pub mod i18n;
pub mod input;
pub mod sandbox;
pub mod systems;
pub mod ui;
