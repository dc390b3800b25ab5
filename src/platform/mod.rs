//! Platform abstraction layer
//!
//! The simulation never talks to a window directly. Everything it needs from
//! the windowing/graphics layer goes through [`Host`]:
//! - Window lifetime (create, close requests, destroy)
//! - Framebuffer size for the projection
//! - Drawing flat squares and presenting the frame
//! - Input polling

pub mod native;

use glam::Vec2;

use crate::renderer::Projection;

pub use native::WinitHost;

/// Input gathered by one `poll_input` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input {
    /// Escape went down since the last poll
    pub escape_pressed: bool,
}

/// Windowing/graphics collaborator driven once per frame
pub trait Host {
    /// True once the window has been asked to close
    fn should_close(&self) -> bool;

    /// Make the next `should_close` return true
    fn request_close(&mut self);

    /// Current framebuffer size in pixels
    fn framebuffer_size(&self) -> (u32, u32);

    /// Start a frame: drop pending geometry and retune the projection
    fn begin_frame(&mut self, projection: Projection);

    /// Queue a filled square centered on `center`
    fn draw_quad(&mut self, center: Vec2, half_size: f32, color: [f32; 4]);

    /// Show everything queued since `begin_frame`
    fn present(&mut self);

    /// Process pending window events
    fn poll_input(&mut self) -> Input;

    /// Tear down the window; called exactly once
    fn destroy(self);
}
