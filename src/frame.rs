use crate::core::CounterAnimation;
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Drive `frame` once per animation frame for as long as it returns `true`.
pub fn start_loop(mut frame: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                dom::request_animation_frame(cb);
            }
            return;
        }
        // A closure cannot free itself mid-call; hand it to a later task.
        if let Some(done) = tick_clone.borrow_mut().take() {
            dom::set_timeout(0, move || drop(done));
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        dom::request_animation_frame(cb);
    }
}

#[inline]
fn render_value(element: &web::Element, value: u64) {
    element.set_text_content(Some(&value.to_string()));
}

/// Count `element`'s text up from 0 to the animation's target.
///
/// The first value is written immediately, the rest once per frame. A frame
/// that finds the element detached ends the loop without touching it.
pub fn animate_counter(element: web::Element, animation: CounterAnimation) {
    let started = Instant::now();
    render_value(&element, animation.value_at(Duration::ZERO));
    if animation.is_finished(Duration::ZERO) {
        return;
    }
    start_loop(move || {
        if !element.is_connected() {
            return false;
        }
        let elapsed = started.elapsed();
        render_value(&element, animation.value_at(elapsed));
        !animation.is_finished(elapsed)
    });
}
