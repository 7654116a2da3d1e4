//! Studio user interface
//!
//! Panel state lives in [`StudioState`]; [`draw`] renders it with egui.

mod state;
mod studio;

pub use state::{StudioState, UiCommand};
pub use studio::{draw, HudInfo};
