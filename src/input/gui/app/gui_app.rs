use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info};
use std::time::Instant;
use winit::{
    error::EventLoopError,
    event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::controllers::interactive::{InteractiveController, ViewerIntent, ViewerState};
use crate::core::data::screen_size::ScreenSize;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::shading::JuliaShading;
use crate::input::gesture::{GestureTracker, PointerButton, wheel_lines, wheel_pixels};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;

const MAX_ITERATIONS_SLIDER: u32 = 10_000;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: InteractiveController,
    state: ViewerState,
    gestures: GestureTracker,
    animating: bool,
    last_tick: Instant,
    redraw_pending: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        state: ViewerState,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            presenter,
            controller,
            state,
            gestures: GestureTracker::default(),
            animating: false,
            last_tick: Instant::now(),
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Does not return until the window is closed.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), EventLoopError> {
        event_loop.run(move |event, elwt| self.handle_event(event, elwt))
    }

    fn handle_event(&mut self, event: Event<GuiEvent>, elwt: &EventLoopWindowTarget<GuiEvent>) {
        match event {
            Event::UserEvent(GuiEvent::Wake) => {
                if self.presenter.poll() {
                    self.redraw_pending = true;
                }
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == self.window.id() => self.handle_window_event(event, elwt),
            Event::AboutToWait => self.tick(elwt),
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<GuiEvent>) {
        let response = self.egui_state.on_window_event(self.window, event);

        if response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("window closed");
                self.controller.shutdown();
                elwt.exit();
            }
            WindowEvent::RedrawRequested => self.redraw(elwt),
            WindowEvent::Resized(size) => self.resize(size.width, size.height, elwt),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.resize(size.width, size.height, elwt);
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Hover over the panel must not drag the view underneath it
                let intent = if response.consumed {
                    None
                } else {
                    self.gestures
                        .cursor_moved(position.x, position.y, self.state.viewport())
                };
                self.apply(intent);
            }
            WindowEvent::CursorLeft { .. } => self.gestures.cursor_left(),
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = *state == ElementState::Pressed;

                if response.consumed && pressed {
                    return;
                }

                let pointer = match button {
                    MouseButton::Left => PointerButton::Pan,
                    MouseButton::Right => PointerButton::Parameter,
                    _ => return,
                };
                let intent = self.gestures.button(pointer, pressed, self.state.viewport());
                self.apply(intent);
            }
            WindowEvent::MouseWheel { delta, .. } if !response.consumed => {
                let intent = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => wheel_lines(f64::from(*lines)),
                    MouseScrollDelta::PixelDelta(position) => wheel_pixels(position.y),
                };
                self.apply(Some(intent));
            }
            // Animates while Space is held
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Space),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } if !response.consumed => self.set_animating(*state == ElementState::Pressed),
            _ => {}
        }
    }

    fn apply(&mut self, intent: Option<ViewerIntent>) {
        if let Some(intent) = intent {
            self.state.apply(intent);
            self.redraw_pending = true;
        }
    }

    fn set_animating(&mut self, animating: bool) {
        if animating == self.animating {
            return;
        }

        self.animating = animating;
        self.last_tick = Instant::now();
        debug!("animation {}", if animating { "on" } else { "off" });
    }

    /// Runs once per event-loop iteration, after all pending input.
    fn tick(&mut self, elwt: &EventLoopWindowTarget<GuiEvent>) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;

        if self.animating && self.state.selected_fractal() == FractalKinds::Julia {
            self.state.apply(ViewerIntent::Animate { dt });
            self.redraw_pending = true;
        }

        if let Some(request) = self.state.take_render_request() {
            let generation = self.controller.submit_request(request);
            debug!("submitted generation {}", generation);
        }

        if self.redraw_pending {
            self.window.request_redraw();
        }

        elwt.set_control_flow(if self.animating {
            ControlFlow::Poll
        } else {
            ControlFlow::Wait
        });
    }

    fn resize(&mut self, width: u32, height: u32, elwt: &EventLoopWindowTarget<GuiEvent>) {
        if let Err(e) = self.presenter.resize(width, height) {
            error!("failed to resize surface: {e}");
            elwt.exit();
            return;
        }

        // A minimised window reports 0x0; keep the last view until it returns
        if let Ok(size) = ScreenSize::new(width, height) {
            self.apply(Some(ViewerIntent::Resize(size)));
        }
    }

    fn redraw(&mut self, elwt: &EventLoopWindowTarget<GuiEvent>) {
        self.redraw_pending = false;

        let egui_output = self.update_ui();

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        if let Err(e) = self.presenter.render(egui_output, &self.egui_ctx) {
            error!("render error: {e}");
            self.controller.shutdown();
            elwt.exit();
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);

        let state = &self.state;
        let presenter = &self.presenter;
        let latest_generation = self.controller.latest_generation();

        let mut fractal = state.selected_fractal();
        let mut shading = state.shading();
        let mut max_iterations = state.max_iterations();
        let mut animating = self.animating;
        let mut reset = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Controls")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 260.0])
                .show(ctx, |ui| {
                    ui.heading("Fractal Viewer");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Fractal:");
                        egui::ComboBox::from_id_source("fractal_kind")
                            .selected_text(fractal.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in FractalKinds::ALL {
                                    ui.selectable_value(&mut fractal, kind, kind.display_name());
                                }
                            });
                    });

                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        ui.add(
                            egui::Slider::new(&mut max_iterations, 1..=MAX_ITERATIONS_SLIDER)
                                .logarithmic(true),
                        );
                    });

                    if fractal == FractalKinds::Julia {
                        ui.horizontal(|ui| {
                            ui.label("Shading:");
                            egui::ComboBox::from_id_source("julia_shading")
                                .selected_text(shading.display_name())
                                .show_ui(ui, |ui| {
                                    for &kind in JuliaShading::ALL {
                                        ui.selectable_value(&mut shading, kind, kind.display_name());
                                    }
                                });
                        });

                        ui.checkbox(&mut animating, "Animate parameter (hold space)");

                        let coeff = state.coeff();
                        ui.label(format!("c = {:.5} {:+.5}i", coeff.real, coeff.imag));
                    }

                    ui.separator();
                    let viewport = state.viewport();
                    let origin = viewport.origin();
                    ui.label(format!("Centre: {:.6} {:+.6}i", origin.real, origin.imag));
                    ui.label(format!("Height: {:.3e}", viewport.height()));

                    if ui.button("Reset view").clicked() {
                        reset = true;
                    }

                    ui.separator();
                    let size = viewport.screen_size();
                    ui.label(format!("Window size: {}x{}", size.width(), size.height()));
                    ui.label(format!(
                        "Generation: {} shown / {} requested",
                        presenter.last_presented_generation(),
                        latest_generation
                    ));
                    if let Some(render_duration) = presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = presenter.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        if fractal != self.state.selected_fractal() {
            self.state.apply(ViewerIntent::SelectFractal(fractal));
        } else if max_iterations != self.state.max_iterations() {
            // The slider showed the previous fractal's cap when the kind changed
            self.state.apply(ViewerIntent::SetMaxIterations(max_iterations));
        }
        if shading != self.state.shading() {
            self.state.apply(ViewerIntent::SetShading(shading));
        }
        if reset {
            self.state.apply(ViewerIntent::ResetView);
        }
        self.set_animating(animating);

        output
    }
}
