//! Banner Pong entry point
//!
//! Handles canvas/context acquisition and runs the frame loop. The loop is
//! activity-gated: it only schedules frames while the document is visible and
//! the canvas intersects the viewport, and any frame error halts it in favor
//! of a static fallback element.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_banner {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use banner_pong::consts::{MIN_CANVAS_WIDTH, RESIZE_DEBOUNCE_MS};
    use banner_pong::render::CanvasRenderer;
    use banner_pong::sim::{SimState, tick};
    use banner_pong::viewport::Viewport;

    /// Banner instance holding all mutable loop state
    struct Banner {
        canvas: HtmlCanvasElement,
        renderer: CanvasRenderer,
        /// None until the first successful layout
        state: Option<SimState>,
        /// Set on any caught error; cleared only by an external re-init trigger
        halted: bool,
        /// Mirrors document visibility
        doc_visible: bool,
        /// Mirrors the IntersectionObserver signal for the canvas
        on_screen: bool,
        /// Pending animation-frame handle, for cancellation
        frame_handle: Option<i32>,
        /// Pending resize-debounce timeout handle
        resize_timer: Option<i32>,
    }

    impl Banner {
        fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                canvas,
                renderer: CanvasRenderer::new(ctx),
                state: None,
                halted: false,
                doc_visible: true,
                on_screen: true,
                frame_handle: None,
                resize_timer: None,
            }
        }

        /// Whether the loop should keep scheduling frames.
        fn active(&self) -> bool {
            !self.halted && self.doc_visible && self.on_screen && self.state.is_some()
        }

        /// Measure the container and rebuild the whole simulation.
        ///
        /// Degenerate sizes skip re-initialization: an existing layout is kept
        /// running, and without one the banner halts into the fallback.
        fn init(&mut self) {
            let window = web_sys::window().expect("no window");

            let container_width = self
                .canvas
                .parent_element()
                .map(|el| el.get_bounding_client_rect().width() as f32)
                .unwrap_or(MIN_CANVAS_WIDTH);
            let window_width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(container_width as f64) as f32;

            match Viewport::measure(container_width, window_width) {
                Ok(viewport) => match SimState::new(&viewport) {
                    Ok(state) => {
                        self.canvas.set_width(viewport.width as u32);
                        self.canvas.set_height(viewport.height as u32);
                        log::info!(
                            "banner laid out: {}x{} ({} tier, {} blocks)",
                            viewport.width,
                            viewport.height,
                            viewport.tier,
                            state.blocks.len()
                        );
                        self.state = Some(state);
                        self.halted = false;
                        hide_fallback();
                    }
                    Err(err) => self.refuse_layout(&err.to_string()),
                },
                Err(err) => self.refuse_layout(&err.to_string()),
            }
        }

        fn refuse_layout(&mut self, reason: &str) {
            if self.state.is_some() {
                // Keep the previous layout running rather than tearing it down
                log::warn!("skipping re-layout: {reason}");
            } else {
                log::error!("cannot lay out banner: {reason}");
                self.halted = true;
                show_fallback();
            }
        }

        /// One supervised frame: update then draw.
        fn frame(&mut self) -> Result<(), JsValue> {
            if let Some(state) = self.state.as_mut() {
                tick(state);
                self.renderer.draw(state)?;
            }
            Ok(())
        }

        /// Synchronously cancel a pending frame request.
        fn cancel_pending_frame(&mut self) {
            if let Some(handle) = self.frame_handle.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(handle);
                }
            }
        }
    }

    fn fallback_element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id("banner-fallback")
    }

    /// Swap the animation out for the static heading.
    fn show_fallback() {
        if let Some(el) = fallback_element() {
            let _ = el.set_attribute("class", "");
        }
    }

    fn hide_fallback() {
        if let Some(el) = fallback_element() {
            let _ = el.set_attribute("class", "hidden");
        }
    }

    fn schedule_frame(banner: Rc<RefCell<Banner>>) {
        let window = web_sys::window().expect("no window");
        let banner_ref = banner.clone();
        let closure = Closure::once(move |time: f64| {
            banner_loop(banner_ref, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => banner.borrow_mut().frame_handle = Some(handle),
            Err(err) => {
                log::error!("failed to schedule frame: {err:?}");
                banner.borrow_mut().halted = true;
                show_fallback();
            }
        }
        closure.forget();
    }

    fn banner_loop(banner: Rc<RefCell<Banner>>, _time: f64) {
        {
            let mut b = banner.borrow_mut();
            b.frame_handle = None;

            // Inert when hidden, off-screen or halted: just stop scheduling.
            // External triggers (visibility, intersection, resize) restart us.
            if !b.active() {
                return;
            }

            if let Err(err) = b.frame() {
                log::error!("frame failed, halting banner: {err:?}");
                b.halted = true;
                show_fallback();
                return;
            }
        }

        schedule_frame(banner);
    }

    /// Re-run initialization and restart the frame chain if possible.
    fn reinit_and_restart(banner: &Rc<RefCell<Banner>>) {
        {
            let mut b = banner.borrow_mut();
            if !b.doc_visible || !b.on_screen {
                return;
            }
            b.halted = false;
            b.init();
            if !b.active() || b.frame_handle.is_some() {
                return;
            }
        }
        schedule_frame(banner.clone());
    }

    /// Debounced resize/orientation-change trigger.
    fn setup_resize_handler(banner: Rc<RefCell<Banner>>) {
        let window = web_sys::window().expect("no window");

        let on_event = {
            let banner = banner.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                let window = web_sys::window().expect("no window");

                // Coalesce bursts: drop the previous pending timer
                if let Some(timer) = banner.borrow_mut().resize_timer.take() {
                    window.clear_timeout_with_handle(timer);
                }

                let fire = {
                    let banner = banner.clone();
                    Closure::once_into_js(move || {
                        banner.borrow_mut().resize_timer = None;
                        reinit_and_restart(&banner);
                    })
                };
                match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    fire.unchecked_ref(),
                    RESIZE_DEBOUNCE_MS,
                ) {
                    Ok(timer) => banner.borrow_mut().resize_timer = Some(timer),
                    Err(err) => log::warn!("failed to debounce resize: {err:?}"),
                }
            })
        };

        for event in ["resize", "orientationchange"] {
            let _ = window
                .add_event_listener_with_callback(event, on_event.as_ref().unchecked_ref());
        }
        on_event.forget();
    }

    fn setup_visibility_handler(banner: Rc<RefCell<Banner>>) {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let document = web_sys::window().unwrap().document().unwrap();
            let visible = document.visibility_state() == web_sys::VisibilityState::Visible;

            banner.borrow_mut().doc_visible = visible;
            if visible {
                log::info!("document visible, restarting banner");
                reinit_and_restart(&banner);
            } else {
                banner.borrow_mut().cancel_pending_frame();
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_intersection_observer(banner: Rc<RefCell<Banner>>) {
        let canvas = banner.borrow().canvas.clone();

        let closure = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let Some(entry) = entries
                    .get(0)
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .ok()
                else {
                    return;
                };

                let intersecting = entry.is_intersecting();
                banner.borrow_mut().on_screen = intersecting;
                if intersecting {
                    reinit_and_restart(&banner);
                } else {
                    banner.borrow_mut().cancel_pending_frame();
                }
            },
        );

        match web_sys::IntersectionObserver::new(closure.as_ref().unchecked_ref()) {
            Ok(observer) => observer.observe(&canvas),
            Err(err) => {
                // No observer support: leave the banner always-on
                log::warn!("IntersectionObserver unavailable: {err:?}");
            }
        }
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Banner Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("banner")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("no #banner canvas element");
                show_fallback();
                return;
            }
        };

        // A missing 2D context is an environment-capability error: degrade to
        // the static fallback instead of throwing into the page.
        let ctx: CanvasRenderingContext2d = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into().ok())
        {
            Some(ctx) => ctx,
            None => {
                log::error!("2d context unavailable");
                show_fallback();
                return;
            }
        };

        let banner = Rc::new(RefCell::new(Banner::new(canvas, ctx)));
        banner.borrow_mut().init();

        setup_resize_handler(banner.clone());
        setup_visibility_handler(banner.clone());
        setup_intersection_observer(banner.clone());

        if banner.borrow().active() {
            schedule_frame(banner);
            log::info!("Banner Pong running!");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_banner::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Banner Pong (native) starting...");
    log::info!("Rendering needs a browser canvas - run with `trunk serve` for the web version");

    // Headless sanity run
    run_headless_frames();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless_frames() {
    use banner_pong::sim::{SimState, tick};
    use banner_pong::viewport::Viewport;

    let viewport = Viewport::measure(1000.0, 1280.0).expect("viewport");
    let mut state = SimState::new(&viewport).expect("layout");

    println!("\nRunning 600 headless frames...");
    for _ in 0..600 {
        tick(&mut state);
    }
    println!(
        "✓ ball at ({:.1}, {:.1}), {} of {} blocks hit",
        state.ball.pos.x,
        state.ball.pos.y,
        state.hit_count(),
        state.blocks.len()
    );
}
