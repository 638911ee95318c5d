//! # result-cell
//!
//! A shared, mutable single-slot cell holding a `Result<T, E>`.
//!
//! Code that only passes values around can still observe state that changes
//! over time: hand one [`Cell`] handle to an effectful test harness and keep
//! a clone for the assertions afterwards.
//!
//! ## Quick Start
//!
//! ```
//! use result_cell::prelude::*;
//!
//! let cell: Cell<i32> = new_cell();
//! assert_eq!(get_cell(&cell), Err(Unset));
//!
//! let observer = cell.clone();
//! set_cell(&cell, 42);
//! assert_eq!(get_cell(&observer), Ok(42));
//! ```
//!
//! ## States
//!
//! A fresh cell is **unset** and reads as `Err(sentinel)`. After any write it
//! is **set** and reads as `Ok` with the last value written.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cell;
mod error;

pub mod prelude;

pub use cell::{get_cell, new_cell, set_cell, Cell};
pub use error::Unset;
