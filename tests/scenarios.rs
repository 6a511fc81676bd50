//! Black-box end-to-end scenarios, one test per case, no shared fixture.

use std::mem;
use std::ptr;

use arenaheap::Heap;

const INT_SIZE: usize = mem::size_of::<i32>();
const HEADER_SIZE: usize = std::mem::size_of::<arenaheap::header::Header>();

/// Bytes a single `payload_size`-byte allocation actually occupies once
/// split leaves its trailing alignment padding in place —
/// `HEADER_SIZE + payload_size` alone undercounts it.
fn per_block_footprint(payload_size: usize) -> usize {
  HEADER_SIZE + payload_size + arenaheap::align::padding(payload_size + HEADER_SIZE)
}

#[test]
fn exhaustion() {
  let footprint = per_block_footprint(INT_SIZE);
  let mut heap = Heap::new();
  heap.init(footprint * 128 - HEADER_SIZE).unwrap();

  for _ in 0..128 {
    assert!(heap.allocate(INT_SIZE).unwrap().is_some());
  }

  let mut current = Some(heap.first_header().unwrap());
  let mut count = 0;
  while let Some(h) = current {
    assert!(h.is_live());
    count += 1;
    current = h.next();
  }
  assert_eq!(count, 128);
}

#[test]
fn under_exhaustion_tail() {
  let footprint = per_block_footprint(INT_SIZE);
  let mut heap = Heap::new();
  heap.init(footprint * 128 - HEADER_SIZE).unwrap();

  for _ in 0..127 {
    assert!(heap.allocate(INT_SIZE).unwrap().is_some());
  }

  let mut current = Some(heap.first_header().unwrap());
  let mut live = 0;
  let mut trailing_free = 0;
  while let Some(h) = current {
    if h.is_live() {
      live += 1;
    } else {
      trailing_free += 1;
    }
    current = h.next();
  }
  assert_eq!(live, 127);
  assert_eq!(trailing_free, 1);
}

#[test]
fn grow_in_place() {
  let mut heap = Heap::new();
  heap.init(128).unwrap();

  let ptr = heap.allocate(INT_SIZE).unwrap().unwrap();
  let grown = heap.reallocate(ptr.as_ptr(), 3 * INT_SIZE).unwrap().unwrap();
  assert_eq!(ptr, grown);

  let first = heap.first_header().unwrap();
  assert_eq!(first.size(), 3 * INT_SIZE);
  assert!(first.is_live());
}

#[test]
fn grow_by_relocation() {
  let mut heap = Heap::new();
  heap.init(256).unwrap();

  let x = heap.allocate(INT_SIZE).unwrap().unwrap();
  let _second = heap.allocate(INT_SIZE).unwrap().unwrap();
  let grown = heap.reallocate(x.as_ptr(), 3 * INT_SIZE).unwrap().unwrap();
  assert_ne!(x, grown);

  let first = heap.first_header().unwrap();
  assert!(!first.is_live());
  let second = first.next().unwrap();
  assert!(second.is_live());
  let third = second.next().unwrap();
  assert!(third.is_live());
  assert_eq!(third.size(), 3 * INT_SIZE);
}

#[test]
fn release_of_null() {
  let mut heap = Heap::new();
  heap.init(128).unwrap();
  heap.release(ptr::null_mut()).unwrap();

  let first = heap.first_header().unwrap();
  assert!(!first.is_live());
  assert!(first.next().is_none());
}

#[test]
fn compact_with_holes() {
  let per_block = 2 * INT_SIZE;
  let count = 10;
  let capacity = count * (per_block + HEADER_SIZE) - HEADER_SIZE;
  let mut heap = Heap::new();
  heap.init(capacity).unwrap();

  let mut ptrs = Vec::new();
  for i in 0..count {
    let p = heap.allocate(per_block).unwrap().unwrap();
    unsafe { ptr::write_bytes(p.as_ptr(), i as u8, per_block) };
    ptrs.push(p);
  }

  // A fixed interleaved pattern stands in for "at random" so this test
  // stays deterministic while still leaving holes for compact to close.
  for (i, p) in ptrs.iter().enumerate() {
    if i % 2 == 1 {
      heap.release(p.as_ptr()).unwrap();
    }
  }

  heap.compact().unwrap();

  let arena_total = arenaheap::align::round_up(capacity + HEADER_SIZE);
  let live_span = (count / 2) * (HEADER_SIZE + per_block);
  let expected_trailing_payload = arena_total - live_span - HEADER_SIZE;

  let mut current = Some(heap.first_header().unwrap());
  let mut i = 0;
  while let Some(h) = current {
    if i < count / 2 {
      assert!(h.is_live());
      assert_eq!(h.size(), per_block);
      assert_eq!(h.alignment(), 0);
    } else {
      assert!(!h.is_live());
      assert_eq!(h.size() + h.alignment(), expected_trailing_payload);
    }
    i += 1;
    current = h.next();
  }
  assert_eq!(i, count / 2 + 1);
}
