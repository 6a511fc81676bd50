//! Error kinds raised by the allocator's capacity- and argument-dependent
//! operations.
//!
//! Allocation failure itself is *not* an error here: per the allocator's
//! C-style ergonomics, a failed `allocate`/`reallocate` returns `None`,
//! not an `Err`. Only misuse (bad capacity, bad pointer, bad argument)
//! is raised.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
  #[error("arena capacity {0} is smaller than the minimum of a header plus one word")]
  ArenaTooSmall(usize),

  #[error("heap has not been initialized")]
  NotInitialized,

  #[error("pointer does not reference a live block")]
  InvalidPointer,

  #[error("percent must be in 1..=100, got {0}")]
  InvalidArgument(u8),
}
