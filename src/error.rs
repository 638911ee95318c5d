//! Error types for result-cell.
//!
//! None of the cell operations can fail. The only error value in this crate
//! is the sentinel a cell holds before it has been written.

use thiserror::Error;

/// Sentinel held by a cell that has never been written.
///
/// This is the default error payload for [`Cell`](crate::Cell). It carries no
/// fields; callers only ever inspect the `Err` tag.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("cell has not been written")]
pub struct Unset;
