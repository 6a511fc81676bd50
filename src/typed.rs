//! The type tag carried on each header, plus the two ambient operations
//! that read and write blocks through it: the debug dump and the typed
//! writer. Neither is interpreted by the allocator core — they exist for
//! a human driving the allocator through [`crate::bin`]'s CLI.

use std::fmt::Write as _;

use crate::error::HeapError;
use crate::header::Header;

/// How a live block's bytes should be reinterpreted by the debug dump and
/// the typed writer. The core never reads this tag; it only stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockType {
  /// Default for freshly split or allocated headers.
  #[default]
  Char,
  Int,
  Double,
}

/// Copies `values`, each converted from `f64` to the block's declared
/// type, into the live block's payload.
///
/// `values.len() * size_of::<T>()` must not exceed the block's `size`;
/// this is checked explicitly and rejected with `InvalidArgument` otherwise.
pub(crate) unsafe fn write_typed(
  header: &mut Header,
  block_type: BlockType,
  values: &[f64],
) -> Result<(), HeapError> {
  let elem_size = match block_type {
    BlockType::Char => size_of::<u8>(),
    BlockType::Int => size_of::<i32>(),
    BlockType::Double => size_of::<f64>(),
  };
  let needed = values.len() * elem_size;
  if needed > header.size {
    return Err(HeapError::InvalidArgument(0));
  }

  unsafe {
    match block_type {
      BlockType::Char => {
        for (i, v) in values.iter().enumerate() {
          header.addr.as_ptr().add(i).write(*v as u8);
        }
      }
      BlockType::Int => {
        let base = header.addr.as_ptr() as *mut i32;
        for (i, v) in values.iter().enumerate() {
          base.add(i).write(*v as i32);
        }
      }
      BlockType::Double => {
        let base = header.addr.as_ptr() as *mut f64;
        for (i, v) in values.iter().enumerate() {
          base.add(i).write(*v);
        }
      }
    }
  }

  header.block_type = block_type;
  Ok(())
}

/// Renders one block's typed payload as a human-readable value list,
/// matching `Heap::PrintValue` in the implementation this is grounded on:
/// a single value prints bare, more than one prints as a bracketed list.
pub(crate) fn format_payload(header: &Header) -> String {
  let mut out = String::new();
  unsafe {
    match header.block_type {
      BlockType::Char => {
        let n = header.size;
        let slice = std::slice::from_raw_parts(header.addr.as_ptr(), n);
        render(&mut out, slice.iter().map(|b| format!("'{}'", *b as char)));
      }
      BlockType::Int => {
        let n = header.size / size_of::<i32>();
        let base = header.addr.as_ptr() as *const i32;
        let slice = std::slice::from_raw_parts(base, n);
        render(&mut out, slice.iter().map(|v| v.to_string()));
      }
      BlockType::Double => {
        let n = header.size / size_of::<f64>();
        let base = header.addr.as_ptr() as *const f64;
        let slice = std::slice::from_raw_parts(base, n);
        render(&mut out, slice.iter().map(|v| v.to_string()));
      }
    }
  }
  out
}

fn render(out: &mut String, items: impl ExactSizeIterator<Item = String>) {
  let many = items.len() > 1;
  if many {
    out.push('[');
  }
  let len = items.len();
  for (i, item) in items.enumerate() {
    let _ = write!(out, "{item}");
    if i + 1 != len {
      out.push_str(", ");
    }
  }
  if many {
    out.push(']');
  }
}
