#![no_std]

//! `DynamicArray`: an owning, growable array with explicit capacity management.
//!
//! The array owns one contiguous block of slots. `len()` slots hold the
//! elements; the rest are allocated but unused. Copies are deep and
//! size-tight: a copy's capacity equals the source's length. All element
//! access is bounds-checked and reports errors instead of panicking, except
//! for the `Index`/`IndexMut` operators and `pop_back`.
//!
//! This crate is `no_std` compatible; it needs `alloc` only.
//!
//! # Storage Discipline
//!
//! - `new()` allocates nothing; `capacity() == 0` always means no buffer.
//! - `with_size()`, `filled()` and `from_slice()` allocate exactly as many
//!   slots as elements.
//! - `push_back()` on a full array grows it through the growth policy.
//! - `reserve(n)` reallocates to exactly `n` slots, but only when the array
//!   is full. An array with spare capacity ignores `reserve`.
//! - `clear()` and `Drop` release the buffer.
//!
//! ```
//! # use dynarray::DynamicArray;
//! let mut array: DynamicArray<f64> = DynamicArray::from_slice(&[1.0, 2.0]).unwrap();
//! assert_eq!(array.capacity(), 2);
//!
//! array.push_back(3.0).unwrap();
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.capacity(), 4);
//!
//! // spare capacity: reserve is a no-op
//! array.reserve(100).unwrap();
//! assert_eq!(array.capacity(), 4);
//!
//! assert_eq!(array.front(), Ok(&1.0));
//! assert_eq!(array.back(), Ok(&3.0));
//! assert!(array.get(3).is_err());
//! ```
//!
//! # Growth Policies
//!
//! The second type parameter picks how a full array grows. `Doubling` is
//! the default. `Linear<STEP>` adds a fixed number of slots each time;
//! `Linear<5>` (just `Linear`) reallocates at capacities 5, 10, 15, ...
//! for callers that depend on that exact reallocation count.
//!
//! ```
//! # use dynarray::{DynamicArray, Linear};
//! let mut array: DynamicArray<u32, Linear> = DynamicArray::new();
//! for i in 0..6 {
//!     array.push_back(i).unwrap();
//! }
//! assert_eq!(array.capacity(), 10);
//! ```
//!
//! # Copies
//!
//! ```
//! # use dynarray::DynamicArray;
//! let mut original: DynamicArray<i32> = DynamicArray::new();
//! for i in 0..5 {
//!     original.push_back(i).unwrap();
//! }
//! assert_eq!(original.capacity(), 8);
//!
//! let mut copy = original.clone();
//! assert_eq!(copy.capacity(), 5);
//!
//! copy[0] = 42;
//! assert_eq!(original[0], 0);
//! ```
//!
//! # Element-wise Addition
//!
//! ```
//! # use dynarray::{DynArrayError, DynamicArray};
//! let x: DynamicArray<f64> = DynamicArray::from_slice(&[1.0, 2.0]).unwrap();
//! let doubled = (&x + &x).unwrap();
//! assert_eq!(doubled.as_slice(), &[2.0, 4.0]);
//!
//! let y: DynamicArray<f64> = DynamicArray::from_slice(&[1.0]).unwrap();
//! assert_eq!(
//!     x.try_add(&y),
//!     Err(DynArrayError::LengthMismatch { left: 2, right: 1 })
//! );
//! ```
//!
//! # Tracing
//!
//! Operations can be reported to an injected `Observer`. `EventLog`
//! collects events in memory; with the `std` feature, `PrintObserver`
//! prints them.
//!
//! ```
//! # use std::rc::Rc;
//! # use dynarray::{DynamicArray, Event, EventLog};
//! let log = Rc::new(EventLog::new());
//! {
//!     let mut array: DynamicArray<u8> = DynamicArray::with_observer(log.clone());
//!     array.push_back(7).unwrap();
//! }
//! assert_eq!(log.allocations(), 1);
//! assert_eq!(log.releases(), 1);
//! assert_eq!(log.events()[0], Event::Allocated { capacity: 4 });
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod core;
mod error;
mod growth;
mod observer;
mod ops;

// Re-export public types and traits
pub use crate::core::DynamicArray;
pub use error::DynArrayError;
pub use growth::{Doubling, GrowthPolicy, Linear};
#[cfg(feature = "std")]
pub use observer::PrintObserver;
pub use observer::{Event, EventLog, Observer};
