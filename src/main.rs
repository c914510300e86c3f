//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use brick_breaker::consts::*;
    use brick_breaker::renderer::{RenderState, Scene};
    use brick_breaker::sim::{GameSession, InputEvent, autopilot};
    use brick_breaker::surface::ShapeId;
    use brick_breaker::{GameError, Settings};

    /// Longest frame gap fed to the simulation (ms), e.g. after a hidden tab
    const MAX_FRAME_MS: f64 = 250.0;

    /// Game instance holding all state
    struct Game {
        scene: Scene,
        session: GameSession,
        render_state: Option<RenderState>,
        last_time: Option<f64>,
        /// Fractional milliseconds carried to the next frame
        carry_ms: f64,
        /// Idle/demo mode - autopilot plays the game
        idle_mode: bool,
        /// Container the text labels are positioned in
        overlay: HtmlElement,
        labels: HashMap<ShapeId, HtmlElement>,
    }

    impl Game {
        fn new(settings: Settings, overlay: HtmlElement) -> Result<Self, GameError> {
            let mut scene = Scene::new(Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT));
            let session = GameSession::new(&mut scene, settings)?;
            Ok(Self {
                scene,
                session,
                render_state: None,
                last_time: None,
                carry_ms: 0.0,
                idle_mode: false,
                overlay,
                labels: HashMap::new(),
            })
        }

        fn input(&mut self, input: InputEvent) {
            self.session.handle_input(&mut self.scene, input);
        }

        /// Feed elapsed wall time to the session clock
        fn update(&mut self, time: f64) {
            let dt = match self.last_time {
                Some(last) => (time - last).clamp(0.0, MAX_FRAME_MS),
                None => 0.0,
            };
            self.last_time = Some(time);

            if self.idle_mode {
                if let Some(input) = autopilot::steer(&self.session) {
                    self.input(input);
                }
            }

            let total = dt + self.carry_ms;
            let whole = total.floor();
            self.carry_ms = total - whole;
            self.session.advance(&mut self.scene, whole as u64);

            for event in self.session.drain_events() {
                log::debug!("Game event: {:?}", event);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = self.scene.tessellate();
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
            self.sync_labels();
        }

        /// Mirror the scene's text items as DOM labels over the canvas
        fn sync_labels(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let scale = self.overlay.client_width() as f32 / SURFACE_WIDTH;

            let mut seen = Vec::new();
            for text in self.scene.texts() {
                seen.push(text.id);
                let label = match self.labels.get(&text.id) {
                    Some(label) => label.clone(),
                    None => {
                        let Some(label) = document
                            .create_element("div")
                            .ok()
                            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                        else {
                            continue;
                        };
                        let _ = label.set_attribute("class", "label");
                        let _ = self.overlay.append_child(&label);
                        self.labels.insert(text.id, label.clone());
                        label
                    }
                };

                label.set_text_content(Some(text.text));
                let style = label.style();
                let left = text.anchor.x / SURFACE_WIDTH * 100.0;
                let top = text.anchor.y / SURFACE_HEIGHT * 100.0;
                let _ = style.set_property("left", &format!("{}%", left));
                let _ = style.set_property("top", &format!("{}%", top));
                let _ = style.set_property("font-size", &format!("{}px", text.size * scale));
                let [r, g, b, a] = text.color;
                let _ = style.set_property(
                    "color",
                    &format!(
                        "rgba({}, {}, {}, {})",
                        (r * 255.0) as u8,
                        (g * 255.0) as u8,
                        (b * 255.0) as u8,
                        a
                    ),
                );
            }

            self.labels.retain(|id, label| {
                let keep = seen.contains(id);
                if !keep {
                    label.remove();
                }
                keep
            });
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let overlay: HtmlElement = document
            .get_element_by_id("overlay")
            .expect("no overlay")
            .dyn_into()
            .expect("overlay is not an HTML element");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings {
            seed: js_sys::Date::now() as u64,
            ..Default::default()
        };
        log::info!("Game initialized with seed: {}", settings.seed);
        let game = Game::new(settings, overlay).expect("default settings are valid");
        let game = Rc::new(RefCell::new(game));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT),
        )
        .await
        .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - paddle tracks the pointer's x in surface coordinates
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let client_w = canvas_clone.client_width() as f32;
                if client_w <= 0.0 {
                    return;
                }
                let x = event.offset_x() as f32 * SURFACE_WIDTH / client_w;
                game.borrow_mut().input(InputEvent::PointerMoved { x });
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => {
                        event.prevent_default();
                        g.input(InputEvent::Left);
                    }
                    "ArrowRight" => {
                        event.prevent_default();
                        g.input(InputEvent::Right);
                    }
                    " " => {
                        event.prevent_default();
                        g.input(InputEvent::Launch);
                    }
                    "i" | "I" => {
                        g.idle_mode = !g.idle_mode;
                        log::info!("Idle mode: {}", g.idle_mode);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot game - run with `trunk serve` to play");

    let settings = match std::env::args().nth(1) {
        Some(path) => match native::load_settings(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Could not load settings from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => brick_breaker::Settings::default(),
    };

    if let Err(e) = native::run_demo(settings) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use glam::Vec2;

    use brick_breaker::consts::*;
    use brick_breaker::renderer::Scene;
    use brick_breaker::sim::{GameSession, autopilot};
    use brick_breaker::{GameError, Settings};

    /// Give up on the demo after ten minutes of game time
    const DEMO_LIMIT_MS: u64 = 10 * 60 * 1000;

    pub fn load_settings(path: &str) -> Result<Settings, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        Ok(Settings::from_json(&json)?)
    }

    /// Let the autopilot play one game and report how it went
    pub fn run_demo(settings: Settings) -> Result<(), GameError> {
        let mut scene = Scene::new(Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT));
        let step = settings.tick_interval_ms;
        let mut session = GameSession::new(&mut scene, settings)?;

        let mut elapsed: u64 = 0;
        while elapsed < DEMO_LIMIT_MS && !session.phase().is_terminal() {
            if let Some(input) = autopilot::steer(&session) {
                session.handle_input(&mut scene, input);
            }
            session.advance(&mut scene, step);
            elapsed = elapsed.saturating_add(step);

            for event in session.drain_events() {
                log::debug!("[{:>7} ms] {:?}", session.now(), event);
            }
        }

        log::info!(
            "Finished after {} ms: {:?}, score {}, lives {}, {} ticks, {} bricks left",
            elapsed,
            session.phase(),
            session.score(),
            session.lives(),
            session.ticks(),
            session.brick_count()
        );
        log::debug!("Final frame: {} vertices", scene.tessellate().len());
        println!(
            "{:?} - score {} ({} bricks left)",
            session.phase(),
            session.score(),
            session.brick_count()
        );
        Ok(())
    }
}
