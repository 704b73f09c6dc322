// File: src/scheduler.rs
// Purpose: setTimeout-backed scheduler for toast timers

use adw_components::{Scheduler, TaskHandle};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

#[derive(Debug, Clone)]
pub struct TimeoutScheduler {
    window: Window,
}

impl TimeoutScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref::<js_sys::Function>(),
                millis,
            )
        {
            Ok(handle) => {
                let window = self.window.clone();
                TaskHandle::new(move || window.clear_timeout_with_handle(handle))
            }
            Err(err) => {
                tracing::error!("setTimeout failed: {:?}", err);
                TaskHandle::detached()
            }
        }
    }
}
