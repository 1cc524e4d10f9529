//! Hoop Shot entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use hoop_shot::persistence::BEST_SCORE_KEY;
    use hoop_shot::platform::web::{
        DomScoreDisplay, LocalStorageStore, mouse_position, touch_position,
    };
    use hoop_shot::renderer::{RenderState, tessellate};
    use hoop_shot::{Game, Settings};

    type WebGame = Game<DomScoreDisplay, LocalStorageStore>;

    /// Everything the browser callbacks share. Only ever touched from the
    /// main thread, through `Rc<RefCell<_>>`.
    struct App {
        game: WebGame,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
    }

    /// Logical (CSS pixel) and physical canvas sizes for the current window
    fn window_sizes() -> (Vec2, (u32, u32)) {
        let window = web_sys::window().unwrap();
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        let dpr = window.device_pixel_ratio();
        (
            Vec2::new(w as f32, h as f32),
            ((w * dpr) as u32, (h * dpr) as u32),
        )
    }

    impl App {
        /// Step the simulation and draw the result
        fn frame(&mut self, time: f64) {
            let commands = self.game.frame(time);
            let segments = self.game.settings.quality.circle_segments();

            if let Some(ref mut render_state) = self.render_state {
                let mesh = tessellate(&commands, segments);
                match render_state.render(&mesh) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let logical = render_state.logical_size;
                        render_state.resize(w, h, logical);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn update_fps(&self) {
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("fps") {
                if self.game.settings.show_fps {
                    let _ = el.set_attribute("class", "");
                    el.set_text_content(Some(&format!("{} fps", self.game.fps())));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        fn resize(&mut self) {
            let (logical, (width, height)) = window_sizes();
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.game.resize(logical.x, logical.y);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height, logical);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hoop Shot starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (logical, (width, height)) = window_sizes();
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let game = Game::new(
            logical.x,
            logical.y,
            settings,
            DomScoreDisplay::new(document.clone()),
            LocalStorageStore::new(BEST_SCORE_KEY),
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
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

        let render_state = RenderState::new(surface, &adapter, width, height, logical).await;

        let app = Rc::new(RefCell::new(App {
            game,
            render_state: Some(render_state),
            canvas: canvas.clone(),
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(app.clone());
        setup_settings_keys(app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Hoop Shot running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse down - try to grab the ball
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                let input = mouse_position(&event, &canvas_clone);
                app.borrow_mut().game.pointer_down(input);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - aim
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                if a.game.state.drag.is_dragging() {
                    event.prevent_default();
                    let input = mouse_position(&event, &canvas_clone);
                    a.game.pointer_move(input);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - throw
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                if a.game.state.drag.is_dragging() {
                    event.prevent_default();
                    let input = mouse_position(&event, &canvas_clone);
                    a.game.pointer_up(input);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(input) = touch_position(&event, &canvas_clone) {
                    app.borrow_mut().game.pointer_down(input);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let mut a = app.borrow_mut();
                if a.game.state.drag.is_dragging() {
                    event.prevent_default();
                    if let Some(input) = touch_position(&event, &canvas_clone) {
                        a.game.pointer_move(input);
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let mut a = app.borrow_mut();
                if a.game.state.drag.is_dragging() {
                    event.prevent_default();
                    if let Some(input) = touch_position(&event, &canvas_clone) {
                        a.game.pointer_up(input);
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_settings_keys(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut a = app.borrow_mut();
            let settings = &mut a.game.settings;
            match event.key().as_str() {
                "f" | "F" => settings.show_fps = !settings.show_fps,
                "g" | "G" => settings.aim_guide = !settings.aim_guide,
                "q" | "Q" => {
                    settings.quality = match settings.quality {
                        hoop_shot::QualityPreset::Low => hoop_shot::QualityPreset::Medium,
                        hoop_shot::QualityPreset::Medium => hoop_shot::QualityPreset::High,
                        hoop_shot::QualityPreset::High => hoop_shot::QualityPreset::Low,
                    };
                    log::info!("Quality: {}", settings.quality.as_str());
                }
                _ => return,
            }
            settings.save();
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.frame(time);
            a.update_fps();
        }

        request_animation_frame(app);
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
    log::info!("Hoop Shot (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    demo_throws();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a few scripted throws and report how they went
#[cfg(not(target_arch = "wasm32"))]
fn demo_throws() {
    use hoop_shot::platform::{LogScoreDisplay, MemoryStore};
    use hoop_shot::sim::{BallState, PointerInput};
    use hoop_shot::{Game, Settings};

    const MAX_FRAMES: u32 = 600;

    let mut game = Game::new(
        800.0,
        600.0,
        Settings::default(),
        LogScoreDisplay,
        MemoryStore::default(),
    );

    // Pull distances from the ball center, slingshot style
    let pulls = [(0.0, 150.0), (-30.0, 200.0), (40.0, 120.0), (0.0, 0.0)];

    for (i, (dx, dy)) in pulls.into_iter().enumerate() {
        let start = game.state.ball.pos;
        game.pointer_down(PointerInput::mouse(start.x, start.y));
        let vel = game.pointer_up(PointerInput::mouse(start.x + dx, start.y + dy));

        let mut frames = 0;
        let mut time = 0.0;
        while game.state.ball.state == BallState::Flying && frames < MAX_FRAMES {
            time += 1000.0 / 60.0;
            game.frame(time);
            frames += 1;
        }

        let board = game.scoreboard();
        println!(
            "Throw {} with velocity {:?}: {} frames, score {} (best {})",
            i + 1,
            vel,
            frames,
            board.current,
            board.best
        );
    }
}
