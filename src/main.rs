//! Rope Hop entry point
//!
//! Handles platform-specific initialization and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Event, HtmlCanvasElement, HtmlInputElement, KeyboardEvent,
    };

    use rope_hop::consts::*;
    use rope_hop::renderer::{draw, surface::Canvas2dSurface};
    use rope_hop::settings::{RopeVariant, Settings};
    use rope_hop::sim::{Clock, SimState, TickInput, tick};

    /// Application instance: simulation context plus the platform pieces
    struct App {
        state: SimState,
        surface: Canvas2dSurface,
        clock: Clock,
        settings: Settings,
    }

    impl App {
        /// One frame: bounded delta, simulate, render
        fn frame(&mut self, time_ms: f64) {
            let dt = self.clock.step(time_ms);
            tick(&mut self.state, &TickInput::default(), dt);
            draw(&self.state, &mut self.surface);
        }

        /// Apply an input event immediately (zero-delta tick)
        fn apply(&mut self, input: TickInput) {
            tick(&mut self.state, &input, 0.0);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rope Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("scene")
            .expect("no scene canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Preferences: persisted settings, with a session-only variant
        // override from the URL (?rope=strand)
        let mut settings = Settings::load();
        if let Some(variant) = window
            .location()
            .search()
            .ok()
            .and_then(|s| RopeVariant::from_query(&s))
        {
            settings.rope_variant = variant;
        }

        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());

        let (width, height) = canvas_layout_size(&canvas);
        let dpr = window.device_pixel_ratio() as f32;
        let seed = js_sys::Date::now() as u64;

        let state = SimState::new(&settings, reduced_motion, width, height, dpr, seed);
        let initial_speed = state.config.rope_speed;

        let surface = Canvas2dSurface::new(ctx);
        let app = Rc::new(RefCell::new(App {
            state,
            surface,
            clock: Clock::new(),
            settings,
        }));

        fit_canvas(&app, &canvas);
        setup_speed_control(&document, app.clone(), initial_speed);
        setup_toggle(&document, app.clone());
        setup_resize(&window, app.clone(), &canvas);

        request_frame(app);

        log::info!("Rope Hop running!");
    }

    /// Logical (CSS) size of the canvas's container
    fn canvas_layout_size(canvas: &HtmlCanvasElement) -> (f32, f32) {
        match canvas.parent_element() {
            Some(parent) => {
                let rect = parent.get_bounding_client_rect();
                (rect.width() as f32, rect.height() as f32)
            }
            None => (canvas.client_width() as f32, canvas.client_height() as f32),
        }
    }

    /// Match the backing store to the container at device resolution and
    /// re-derive every viewport-relative baseline
    fn fit_canvas(app: &Rc<RefCell<App>>, canvas: &HtmlCanvasElement) {
        let window = web_sys::window().expect("no window");
        let dpr = window.device_pixel_ratio() as f32;
        let (width, height) = canvas_layout_size(canvas);

        canvas.set_width((width * dpr) as u32);
        canvas.set_height((height * dpr) as u32);

        let mut app = app.borrow_mut();
        app.state.resize(width, height, dpr);
        app.surface.apply_pixel_ratio(dpr);
    }

    fn setup_speed_control(document: &web_sys::Document, app: Rc<RefCell<App>>, initial: f32) {
        let Some(input) = document.get_element_by_id("speed") else {
            log::warn!("no #speed control; speed is fixed");
            return;
        };
        let input: HtmlInputElement = input.dyn_into().expect("#speed is not an input");

        input.set_min(&SPEED_MIN.to_string());
        input.set_max(&SPEED_MAX.to_string());
        input.set_step("0.1");
        input.set_value(&initial.to_string());
        update_speed_readout(document, initial);

        let listener = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            let Ok(value) = listener.value().parse::<f32>() else {
                return;
            };
            let mut a = app.borrow_mut();
            a.apply(TickInput {
                set_speed: Some(value),
                ..Default::default()
            });
            let clamped = a.state.config.rope_speed;
            a.settings.speed = clamped;
            a.settings.save();
            drop(a);

            let document = web_sys::window().unwrap().document().unwrap();
            update_speed_readout(&document, clamped);
        });
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn update_speed_readout(document: &web_sys::Document, speed: f32) {
        if let Some(el) = document.get_element_by_id("speedValue") {
            el.set_text_content(Some(&format!("{speed:.1}x")));
        }
    }

    fn setup_toggle(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        // Button click
        if let Some(btn) = document.get_element_by_id("toggle") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                toggle_run(&app);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Spacebar
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.code() == "Space" {
                event.prevent_default();
                toggle_run(&app);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Flip running. Pausing lets the in-flight frame notice and stop
    /// rescheduling; resuming resets the clock reference so the paused
    /// interval never reaches the physics, then restarts the loop.
    fn toggle_run(app: &Rc<RefCell<App>>) {
        let running = {
            let mut a = app.borrow_mut();
            a.apply(TickInput {
                toggle_run: true,
                ..Default::default()
            });
            if a.state.running {
                a.clock.reset();
            }
            a.state.running
        };

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(btn) = document.get_element_by_id("toggle") {
                btn.set_text_content(Some(if running { "Pause" } else { "Resume" }));
            }
        }

        if running {
            request_frame(app.clone());
        }
    }

    fn setup_resize(window: &web_sys::Window, app: Rc<RefCell<App>>, canvas: &HtmlCanvasElement) {
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            fit_canvas(&app, &canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        let running = {
            let mut a = app.borrow_mut();
            a.frame(time);
            a.state.running
        };

        // No background scheduling while paused
        if running {
            request_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rope Hop (native) starting...");
    log::info!("The animation targets the browser; build the wasm library and host it with `rope-hop-serve`");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
