//! # arenaheap — a fixed-capacity arena allocator with two search strategies
//!
//! This crate manages one contiguous byte arena and services allocation
//! requests from it through a doubly-linked chain of inline block
//! headers. Every primitive (allocate, zero-allocate, reallocate,
//! release) comes in two flavors:
//!
//! - a **scan-all** variant that walks every header on the chain, and
//! - a **free-registry** variant that consults only an auxiliary index
//!   of currently-free headers,
//!
//! so the cost difference between "search everything" and "search only
//! what could possibly match" can be measured directly — see
//! [`Heap::benchmark`].
//!
//! ```text
//!   Arena layout:
//!
//!   ┌────────┬─────────┬─────┬────────┬─────────┬─────┬─────────────────┐
//!   │ Header │ payload │ pad │ Header │ payload │ pad │   free tail     │
//!   │ (live) │         │     │ (free) │         │     │  (one header)   │
//!   └────────┴─────────┴─────┴────────┴─────────┴─────┴─────────────────┘
//! ```
//!
//! It additionally supports **in-place compaction**: sliding every live
//! block to the arena's start and folding the reclaimed space into a
//! single trailing free block.
//!
//! ## Crate structure
//!
//! ```text
//!   arenaheap
//!   ├── align    - machine-word padding arithmetic
//!   ├── header   - the inline per-block header and its chain links
//!   ├── registry - the free registry (flat, unordered, first-fit)
//!   ├── typed    - type tags for the debug dump and typed writer
//!   ├── error    - the allocator's raised (non-allocation) errors
//!   └── heap     - the allocator itself: init, alloc, release, realloc, compact
//! ```
//!
//! ## Quick start
//!
//! ```
//! use arenaheap::Heap;
//!
//! let mut heap = Heap::new();
//! heap.init(4096).unwrap();
//!
//! let ptr = heap.allocate(64).unwrap().unwrap();
//! heap.release(ptr.as_ptr()).unwrap();
//! ```
//!
//! ## Safety
//!
//! The header chain lives inline in the arena the allocator owns, so
//! address arithmetic over raw pointers is unavoidable. That arithmetic
//! is confined to [`heap`] and [`header`]; everything else speaks in
//! terms of [`header::Header`] values and payload pointers.
//!
//! ## Concurrency
//!
//! Single-threaded, synchronous, not reentrant. Wrap a `Heap` in a
//! `Mutex` for multi-threaded use; no internal locking is provided.

pub mod align;
pub mod error;
pub mod header;
pub mod heap;
pub mod registry;
pub mod typed;

pub use error::HeapError;
pub use header::BlockState;
pub use heap::{Heap, HeaderRef, SearchMode};
pub use typed::BlockType;
