//! Machine-word alignment arithmetic.
//!
//! A single pure function: given a byte count, how much padding does it
//! need so that whatever follows starts on a machine-word boundary.

use std::mem;

/// Padding (in bytes) needed after `size` bytes so the next item starts on
/// a machine-word boundary. Zero when `size` is already a multiple of the
/// word size.
///
/// # Examples
///
/// ```
/// use arenaheap::align::padding;
///
/// match std::mem::size_of::<usize>() {
///     8 => assert_eq!(padding(13), 3), // 64-bit: 13 -> 16
///     4 => assert_eq!(padding(11), 1), // 32-bit: 11 -> 12
///     _ => {}
/// }
/// ```
pub const fn padding(size: usize) -> usize {
  let word = mem::size_of::<usize>();
  let rem = size % word;
  if rem == 0 { 0 } else { word - rem }
}

/// Rounds `size` up to the next multiple of the machine word.
pub const fn round_up(size: usize) -> usize {
  size + padding(size)
}
