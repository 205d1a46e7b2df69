//! # StrMap: a string-keyed hash table with separate chaining
//!
//! `StrMap` maps string keys to integer values. Keys are hashed with the
//! classic multiply-by-31 polynomial and placed into a fixed array of
//! buckets; keys that land in the same bucket form a singly linked chain,
//! newest entry first. All of the machinery a production hash map hides is
//! laid out plainly here: the hash, the bucket array, the chains, and the
//! collisions.
//!
//! ## Behavior
//!
//! - `set` updates an existing key in place, or prepends a new entry that
//!   owns a copy of the key.
//! - `get` and `remove` return `Option<i64>`; an absent key is never an
//!   error.
//! - The bucket count is chosen at construction and never changes. There is
//!   no rehashing.
//! - Entry placement is deterministic: the same key lands in the same
//!   bucket on every run and platform.
//!
//! ## Quick Start
//!
//! ```
//! use strmap::StrMap;
//!
//! let mut inventory = StrMap::new(10).unwrap();
//! inventory.set("apple", 3);
//! inventory.set("banana", 7);
//! inventory.set("banana", 10); // update in place
//!
//! assert_eq!(inventory.get("banana"), Some(10));
//! assert_eq!(inventory.remove("apple"), Some(3));
//! assert_eq!(inventory.get("apple"), None);
//! assert_eq!(inventory.len(), 1);
//! ```
//!
//! ## Choosing a bucket count
//!
//! Because the table never rehashes, lookups degrade from O(1) toward O(n)
//! as the entry count outgrows the bucket count and chains lengthen. That
//! makes load visible instead of hidden: a table with one bucket is a plain
//! linked list, and a generously sized table keeps chains short. Pick the
//! bucket count for the expected population, or start from
//! [`StrMap::with_default_buckets`] (16 buckets).
//!
//! ```
//! use strmap::StrMap;
//!
//! // "Aa" and "BB" collide under the multiply-by-31 hash, so they always
//! // share a bucket and chain together.
//! let mut map = StrMap::new(10).unwrap();
//! assert_eq!(map.bucket_index("Aa"), map.bucket_index("BB"));
//!
//! map.set("Aa", 1);
//! map.set("BB", 2);
//! assert_eq!(map.get("Aa"), Some(1));
//! assert_eq!(map.get("BB"), Some(2));
//! ```

mod error;
mod iter;
mod map;

pub use error::StrMapError;
pub use iter::Iter;
pub use map::{hash_key, StrMap};
