use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Window resize listener that fires `callback` once resizing has been quiet
/// for `delay_ms`. Returns `None` outside a browser window.
///
/// Keep the listener alive for as long as the callback should fire; dropping
/// it unregisters the handler and cancels any pending call.
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = debounced_resize(Config::RESIZE_DEBOUNCE_MS, move || redraw());
///     move || drop(listener)
/// });
/// ```
pub fn debounced_resize<F>(delay_ms: u32, callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let callback = callback.clone();
        // Replacing the handle drops (and so cancels) the previous timeout
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || callback()));
    }))
}
