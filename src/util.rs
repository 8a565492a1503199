// Browser helpers shared by the pages.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// A pending `setTimeout`. Cleared when dropped.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// Run `f` once after `ms` milliseconds. `None` if there is no window.
pub fn after_ms(ms: i32, f: impl FnOnce() + 'static) -> Option<Timeout> {
    let win = web_sys::window()?;
    let mut f = Some(f);
    let callback = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    match win.set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), ms) {
        Ok(id) => Some(Timeout { id, _callback: callback }),
        Err(e) => {
            log::warn!("setTimeout failed: {e:?}");
            None
        }
    }
}

pub fn alert(msg: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(msg);
    }
}
