//! # GrowVec: a growable contiguous array built on raw allocation
//!
//! `GrowVec<T>` is the classic dynamic array: elements of one type stored
//! contiguously on the heap, with a length tracking how many slots are in
//! use and a capacity tracking how many slots are allocated. It manages its
//! own memory through `std::alloc` and reports allocation failure to the
//! caller instead of aborting, which makes the usual "hidden" lifecycle of
//! a vector visible in the API.
//!
//! ## Behavior
//!
//! - Random access by index is O(1); out-of-range reads return `None`.
//! - `push` appends in amortized O(1). When the vector is full, the
//!   allocation grows in place where possible to `floor(capacity * 1.5)`.
//! - `insert` and `remove` shift the tail of the vector by one slot and
//!   keep the elements contiguous.
//! - `pop` moves the last element out and shrinks only the length; the
//!   capacity never decreases.
//! - Fallible operations return `Result`; on any error the vector is left
//!   exactly as it was.
//!
//! ## Quick Start
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::new().unwrap();
//! v.push(10).unwrap();
//! v.push(20).unwrap();
//! v.push(30).unwrap();
//! assert_eq!(v.as_slice(), &[10, 20, 30]);
//!
//! v.insert(1, 15).unwrap();
//! assert_eq!(v.as_slice(), &[10, 15, 20, 30]);
//!
//! v.set(2, 25).unwrap();
//! assert_eq!(v.remove(1).unwrap(), 15);
//! assert_eq!(v.pop(), Some(30));
//! assert_eq!(v.as_slice(), &[10, 25]);
//! ```
//!
//! ## Growth
//!
//! A fresh vector from [`GrowVec::new`] has room for 10 elements. Each time
//! an append or insertion finds the vector full, the capacity becomes
//! `floor(capacity * 1.5)`:
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v: GrowVec<u8> = GrowVec::new().unwrap();
//! assert_eq!(v.capacity(), 10);
//! for b in 0..11u8 {
//!     v.push(b).unwrap();
//! }
//! assert_eq!(v.capacity(), 15);
//! ```
//!
//! [`GrowVec::with_capacity`] picks a different starting point when the
//! final size is roughly known up front, avoiding the intermediate
//! reallocation and copying steps.
//!
//! ## Error Handling
//!
//! All fallible operations return a [`GrowVecError`]:
//!
//! ```
//! use growvec::{GrowVec, GrowVecError};
//!
//! let mut v: GrowVec<i32> = GrowVec::new().unwrap();
//! assert_eq!(
//!     v.set(0, 1).unwrap_err(),
//!     GrowVecError::IndexOutOfBounds { index: 0, length: 0 }
//! );
//! ```
//!
//! Zero-sized element types are rejected at construction: a vector of
//! nothing has no meaningful allocation to manage.

mod error;
mod iter;
mod vec;

pub use error::GrowVecError;
pub use iter::Iter;
pub use vec::GrowVec;
