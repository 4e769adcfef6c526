//! Signal-backed state cells for the `saves` drivers.
//!
//! A page's `RwSignal` may be disposed while a save or remove is in flight.
//! `try_update` returns `None` in that case, which the drivers treat as a
//! torn-down view.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use leptos::prelude::*;
use saves::StateCell;

/// [`StateCell`] over a Leptos `RwSignal`.
pub struct SignalCell<T: Send + Sync + 'static>(RwSignal<T>);

impl<T: Send + Sync + 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for SignalCell<T> {}

impl<T: Send + Sync + 'static> SignalCell<T> {
    pub fn new(signal: RwSignal<T>) -> Self {
        Self(signal)
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for SignalCell<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
