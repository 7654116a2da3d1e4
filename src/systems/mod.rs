//! Application systems
//!
//! Window, simulation and rendering, kept out of main.rs so each can be
//! driven and tested on its own.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem, UiFrame};
pub use simulation::{SimulationResult, SimulationSystem};
pub use window::{WindowError, WindowSystem};
