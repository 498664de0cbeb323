use crate::core::{AnimationLoop, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` as a `FrameScheduler`, bound to one callback.
struct RafScheduler<'a> {
    callback: &'a Closure<dyn FnMut()>,
}

impl FrameScheduler for RafScheduler<'_> {
    type Handle = i32;

    fn schedule(&mut self) -> Option<i32> {
        let window = web::window()?;
        window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle);
        }
    }
}

struct Shared {
    ticks: RefCell<AnimationLoop<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Shared {
    fn with_scheduler(&self, f: impl FnOnce(&mut AnimationLoop<i32>, &mut RafScheduler<'_>)) {
        let callback = self.callback.borrow();
        if let Some(callback) = callback.as_ref() {
            let mut scheduler = RafScheduler { callback };
            f(&mut self.ticks.borrow_mut(), &mut scheduler);
        }
    }
}

/// One effect's redraw chain. `frame` runs once per display refresh while the
/// loop is started; returning `false` ends the chain.
///
/// The callback keeps the loop alive for the lifetime of the page.
pub struct FrameLoop {
    shared: Rc<Shared>,
}

impl FrameLoop {
    pub fn new(mut frame: impl FnMut() -> bool + 'static) -> Self {
        let shared = Rc::new(Shared {
            ticks: RefCell::new(AnimationLoop::new()),
            callback: RefCell::new(None),
        });
        let shared_tick = shared.clone();
        let closure = Closure::wrap(Box::new(move || {
            if !shared_tick.ticks.borrow_mut().begin_frame() {
                return;
            }
            let keep_going = frame();
            shared_tick.with_scheduler(|ticks, raf| ticks.end_frame(raf, keep_going));
        }) as Box<dyn FnMut()>);
        *shared.callback.borrow_mut() = Some(closure);
        Self { shared }
    }

    pub fn start(&self) {
        self.shared.with_scheduler(|ticks, raf| {
            ticks.start(raf);
        });
    }

    pub fn stop(&self) {
        self.shared.with_scheduler(|ticks, raf| ticks.stop(raf));
    }

    pub fn is_running(&self) -> bool {
        self.shared.ticks.borrow().is_active()
    }
}
