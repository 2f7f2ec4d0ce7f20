//! Panic containment for transformer calls.
//!
//! A panic raised inside [`isolate`] is caught and reported as `None`. The
//! thread-local flag lets a global panic hook tell a contained panic apart
//! from a real crash (see `ui::terminal_guard`).

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

thread_local! {
    static ISOLATED: Cell<bool> = const { Cell::new(false) };
}

/// True while the current thread is running inside [`isolate`].
pub fn in_isolated_call() -> bool {
    ISOLATED.with(Cell::get)
}

/// Run `f`, converting a panic into `Err` with the panic message.
pub fn isolate<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    let previous = ISOLATED.with(|flag| flag.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    ISOLATED.with(|flag| flag.set(previous));
    result.map_err(|payload| panic_message(&*payload))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_value_when_no_panic() {
        assert_eq!(isolate(|| 42), Ok(42));
        assert!(!in_isolated_call());
    }

    #[test]
    fn captures_panic_message() {
        let result: Result<(), String> = isolate(|| panic!("broken transformer"));
        assert_eq!(result, Err("broken transformer".to_string()));
        assert!(!in_isolated_call());
    }

    #[test]
    fn flag_is_set_inside_call() {
        assert_eq!(isolate(in_isolated_call), Ok(true));
    }
}
