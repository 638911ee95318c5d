//! Shared single-slot result cell
//!
//! A [`Cell`] is a handle to one heap-allocated `Result<T, E>` slot. Cloning
//! the handle aliases the slot, so a write made through one handle is seen
//! by every other handle.
//!
//! ## States
//!
//! - **Unset**: the slot holds `Err(sentinel)`. Every cell starts here.
//! - **Set**: the slot holds `Ok(value)` from the most recent write.
//!
//! Writes always overwrite. There is no terminal state.
//!
//! ## Threading
//!
//! The handle wraps `Rc<RefCell<_>>` and is neither `Send` nor `Sync`. Each
//! operation holds the borrow only for the length of the call.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::Unset;

/// Mutable single-slot container for a `Result<T, E>`
pub struct Cell<T, E = Unset> {
    slot: Rc<RefCell<Result<T, E>>>,
}

impl<T, E: Default> Cell<T, E> {
    /// Create an unset cell holding `Err(E::default())`
    pub fn new() -> Self {
        Self::with_error(E::default())
    }
}

impl<T, E> Cell<T, E> {
    /// Create an unset cell holding `Err(error)`
    ///
    /// Use this when `E` has no sensible default.
    pub fn with_error(error: E) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Err(error))),
        }
    }

    /// Replace the slot with `Ok(value)`
    ///
    /// Unconditional: overwrites whatever the cell held before.
    pub fn set(&self, value: T) {
        let previous = self.slot.replace(Ok(value));
        tracing::trace!(overwrite = previous.is_ok(), "cell written");
    }

    /// Whether the cell has been written at least once
    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_ok()
    }

    /// Whether two handles refer to the same slot
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.slot, &other.slot)
    }
}

impl<T: Clone, E: Clone> Cell<T, E> {
    /// Copy out the current slot
    ///
    /// Returns `Err(sentinel)` if the cell was never written, otherwise
    /// `Ok` with the last written value. The returned value is detached from
    /// the cell; later writes do not affect it.
    pub fn get(&self) -> Result<T, E> {
        self.slot.borrow().clone()
    }
}

impl<T, E> Clone for Cell<T, E> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T, E: Default> Default for Cell<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Cell<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cell").field(&*self.slot.borrow()).finish()
    }
}

/// Create an unset cell. Same as [`Cell::new`].
pub fn new_cell<T, E: Default>() -> Cell<T, E> {
    Cell::new()
}

/// Write `value` into `cell`. Same as [`Cell::set`].
pub fn set_cell<T, E>(cell: &Cell<T, E>, value: T) {
    cell.set(value)
}

/// Read the current slot of `cell`. Same as [`Cell::get`].
pub fn get_cell<T: Clone, E: Clone>(cell: &Cell<T, E>) -> Result<T, E> {
    cell.get()
}
