//! The application window
//!
//! Owns the winit window and the parts of its state the sandbox changes at
//! runtime: fullscreen and the mode shown in the title bar.

use std::fmt;
use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window};

use crate::config::WindowConfig;

pub struct WindowSystem {
    window: Arc<Window>,
    title: String,
}

impl WindowSystem {
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, WindowError> {
        let fullscreen = config.fullscreen.then(|| Fullscreen::Borderless(None));
        let attributes = Window::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_fullscreen(fullscreen);

        let window = event_loop
            .create_window(attributes)
            .map_err(|e| WindowError::CreationFailed(e.to_string()))?;
        log::debug!("Created window '{}' at {}x{}", config.title, config.width, config.height);

        Ok(Self {
            window: Arc::new(window),
            title: config.title.clone(),
        })
    }

    /// Shared handle, needed by the GPU surface and egui
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Switch between borderless fullscreen and windowed
    pub fn toggle_fullscreen(&self) {
        match self.window.fullscreen() {
            Some(_) => self.window.set_fullscreen(None),
            None => self.window.set_fullscreen(Some(Fullscreen::Borderless(None))),
        }
    }

    pub fn update_title(&self, mode: &str) {
        self.window.set_title(&format_title(&self.title, mode));
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn format_title(base: &str, mode: &str) -> String {
    if mode.is_empty() {
        base.to_string()
    } else {
        format!("{} - {}", base, mode)
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::CreationFailed(reason) => write!(f, "could not open window: {}", reason),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_shows_mode() {
        assert_eq!(format_title("Sandbox", "STUDIO MODE"), "Sandbox - STUDIO MODE");
        assert_eq!(format_title("Sandbox", ""), "Sandbox");
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "could not open window: no display");
    }
}
