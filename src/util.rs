//! Small helpers exposed for page scripts; the controller does not use them.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Debouncer` is the timer-free core of debouncing: it is driven by explicit
//! timestamps so the coalescing rule can be tested without a clock. In the
//! browser, [`debounce`] wraps a callback with a real cancellable timer.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

use chrono::Datelike;

/// Current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Coalesces bursts of calls into one, carrying the last call's arguments.
///
/// Each [`call`](Self::call) replaces any pending invocation and pushes the
/// deadline to `now + wait`. [`poll`](Self::poll) hands back the arguments
/// once the deadline has passed.
#[derive(Debug, Clone)]
pub struct Debouncer<A> {
    wait_ms: f64,
    pending: Option<(A, f64)>,
}

impl<A> Debouncer<A> {
    #[must_use]
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms: f64::from(wait_ms), pending: None }
    }

    pub fn call(&mut self, args: A, now_ms: f64) {
        self.pending = Some((args, now_ms + self.wait_ms));
    }

    /// Take the pending arguments if their deadline is at or before `now_ms`.
    pub fn poll(&mut self, now_ms: f64) -> Option<A> {
        match self.pending.take() {
            Some((args, due)) if due <= now_ms => Some(args),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending invocation.
    #[must_use]
    pub fn due_at(&self) -> Option<f64> {
        self.pending.as_ref().map(|(_, due)| *due)
    }
}

/// Wrap `f` so it runs `wait_ms` after the most recent call, with that call's
/// arguments. Earlier pending calls are cancelled.
///
/// Calls are recorded in a [`Debouncer`] stamped with `Date.now()`; the timer
/// only decides when to poll it.
#[cfg(feature = "browser")]
pub fn debounce<A, F>(f: F, wait_ms: u32) -> impl FnMut(A)
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    let f = Rc::new(RefCell::new(f));
    let state = Rc::new(RefCell::new(Debouncer::new(wait_ms)));
    let mut timer: Option<Timeout> = None;
    move |args: A| {
        state.borrow_mut().call(args, js_sys::Date::now());
        let f = Rc::clone(&f);
        let state = Rc::clone(&state);
        // Dropping the previous `Timeout` clears it.
        timer = Some(Timeout::new(wait_ms, move || {
            let ready = state.borrow_mut().poll(js_sys::Date::now());
            match ready {
                Some(args) => (*f.borrow_mut())(args),
                None => log::debug!("debounce timer fired before deadline"),
            }
        }));
    }
}
