//! Native host: winit window + wgpu surface
//!
//! The event loop is pumped once per frame instead of handed control, which
//! keeps the frame loop in charge of ordering.

use std::mem;
use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use super::{Host, Input};
use crate::error::{Error, Result};
use crate::renderer::{Projection, RenderState, Vertex, quad};

/// Collects window events between pumps
struct WindowEvents {
    attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    creation_error: Option<String>,
    close_requested: bool,
    escape_pressed: bool,
}

impl WindowEvents {
    fn new(attributes: WindowAttributes) -> Self {
        Self {
            attributes,
            window: None,
            creation_error: None,
            close_requested: false,
            escape_pressed: false,
        }
    }
}

impl ApplicationHandler for WindowEvents {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => self.creation_error = Some(e.to_string()),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.close_requested = true,
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.escape_pressed = true,
            _ => {}
        }
    }
}

/// Desktop window drawing through wgpu
pub struct WinitHost {
    event_loop: EventLoop<()>,
    events: WindowEvents,
    window: Arc<Window>,
    render: RenderState,
    vertices: Vec<Vertex>,
}

impl WinitHost {
    /// Open the window and bring up the GPU; any failure is fatal
    pub fn create(width: u32, height: u32, title: &str) -> Result<Self> {
        let mut event_loop = EventLoop::new()
            .map_err(|e| Error::Initialization(format!("failed to create event loop: {e}")))?;

        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(width, height));
        let mut events = WindowEvents::new(attributes);

        // The window is created on the first `resumed`
        if let PumpStatus::Exit(code) =
            event_loop.pump_app_events(Some(Duration::ZERO), &mut events)
        {
            return Err(Error::Initialization(format!(
                "event loop exited during startup (code {code})"
            )));
        }
        if let Some(e) = events.creation_error.take() {
            return Err(Error::WindowCreation(e));
        }
        let window = events
            .window
            .clone()
            .ok_or_else(|| Error::WindowCreation("window was not created".to_string()))?;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| Error::WindowCreation(format!("failed to create surface: {e}")))?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(|e| Error::Initialization(format!("failed to get adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
        ))?;

        Ok(Self {
            event_loop,
            events,
            window,
            render,
            vertices: Vec::with_capacity(12),
        })
    }
}

impl Host for WinitHost {
    fn should_close(&self) -> bool {
        self.events.close_requested
    }

    fn request_close(&mut self) {
        self.events.close_requested = true;
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn begin_frame(&mut self, projection: Projection) {
        let size = self.framebuffer_size();
        if size != self.render.size {
            self.render.resize(size.0, size.1);
        }
        self.render.projection = projection;
        self.vertices.clear();
    }

    fn draw_quad(&mut self, center: Vec2, half_size: f32, color: [f32; 4]) {
        self.vertices.extend(quad(center, half_size, color));
    }

    fn present(&mut self) {
        match self.render.render(&self.vertices) {
            Ok(()) => {}
            // Reconfigure the surface if lost or stale
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.render.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                self.request_close();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    fn poll_input(&mut self) -> Input {
        if let PumpStatus::Exit(code) = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.events)
        {
            log::debug!("Event loop exited with code {code}");
            self.events.close_requested = true;
        }
        Input {
            escape_pressed: mem::take(&mut self.events.escape_pressed),
        }
    }

    fn destroy(self) {
        log::debug!("Destroying window");
        // Surface must go before the window it draws into
        drop(self.render);
        drop(self.window);
        drop(self.events);
        drop(self.event_loop);
    }
}
