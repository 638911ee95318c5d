//! Convenient imports for result-cell.
//!
//! ```
//! use result_cell::prelude::*;
//!
//! let cell: Cell<&str> = new_cell();
//! set_cell(&cell, "x");
//! assert_eq!(get_cell(&cell), Ok("x"));
//! ```

// Cell and its operations
pub use crate::cell::{get_cell, new_cell, set_cell, Cell};

// Sentinel
pub use crate::error::Unset;
