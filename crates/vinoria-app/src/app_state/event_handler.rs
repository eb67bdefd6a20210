//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::Key;
use winit::window::WindowId;

use vinoria_renderer::ResizeAction;

use super::core::VinoriaApp;
use super::dispatch::map_key;

impl ApplicationHandler for VinoriaApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.handle_resize(size.width, size.height);
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(ref mut rs) = self.render_state {
                    rs.set_scale_factor(scale_factor);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(ref window) = self.window {
                    let size = window.inner_size();
                    self.vis.pointer_mut().set_target_from_cursor(
                        position.x,
                        position.y,
                        size.width,
                        size.height,
                    );
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.vis.click();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    self.shutdown();
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.request_redraw();
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

impl VinoriaApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let key_name = match &event.logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };
        if let Some(action) = map_key(&key_name) {
            self.dispatch(action);
        }
    }

    /// Resize the renderer, or create it if setup was deferred for a
    /// zero-sized window. A zero-sized region pauses ticking.
    pub(super) fn handle_resize(&mut self, width: u32, height: u32) {
        match self.lifecycle.on_resize(width, height) {
            ResizeAction::Ignore => {}
            ResizeAction::CreateRenderer => {
                if !self.create_render_state() {
                    self.should_exit = true;
                }
            }
            ResizeAction::Pause => {
                tracing::info!("host region is zero-sized, pausing draws");
            }
            ResizeAction::Resume => {
                tracing::info!(width, height, "host region restored");
                self.clock.reset_delta();
                if let Some(ref mut rs) = self.render_state {
                    rs.resize(width, height);
                }
            }
            ResizeAction::Reconfigure => {
                if let Some(ref mut rs) = self.render_state {
                    rs.resize(width, height);
                }
            }
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
