use std::fmt;

use crate::error::StrMapError;
use crate::iter::Iter;

/// Bucket count used by [`StrMap::with_default_buckets`].
const DEFAULT_BUCKETS: usize = 16;

/// Computes the raw multiply-by-31 hash of a key.
///
/// The accumulator starts at zero and folds in each byte of the key's UTF-8
/// encoding as `hash * 31 + byte`, wrapping on overflow. The same key always
/// produces the same hash, so entry placement is deterministic across runs
/// and platforms.
#[must_use]
pub fn hash_key(key: &str) -> u64 {
    let mut hash = 0_u64;
    for &byte in key.as_bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(u64::from(byte));
    }
    hash
}

/// A chain node. Each entry exclusively owns a copy of its key.
pub(crate) struct Entry {
    pub(crate) key: String,
    pub(crate) value: i64,
    pub(crate) next: Option<Box<Entry>>,
}

/// A string-keyed hash table using separate chaining.
///
/// Keys hash to a bucket with [`hash_key`] modulo the bucket count; keys that
/// share a bucket form a singly linked chain with the newest entry at the
/// head. The bucket count is fixed at construction and the table never
/// rehashes, so chains simply grow as entries outnumber buckets.
pub struct StrMap {
    buckets: Box<[Option<Box<Entry>>]>,
    len: usize,
}

impl StrMap {
    /// Creates an empty table with the specified number of buckets.
    ///
    /// The bucket count is fixed for the table's lifetime.
    ///
    /// # Errors
    ///
    /// Returns `StrMapError::ZeroBuckets` if `bucket_count` is 0, or
    /// `StrMapError::AllocationFailed` if the bucket array cannot be
    /// reserved.
    pub fn new(bucket_count: usize) -> Result<Self, StrMapError> {
        if bucket_count == 0 {
            return Err(StrMapError::ZeroBuckets);
        }
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(bucket_count)
            .map_err(|_| StrMapError::AllocationFailed {
                buckets: bucket_count,
            })?;
        buckets.resize_with(bucket_count, || None);
        Ok(Self {
            buckets: buckets.into_boxed_slice(),
            len: 0,
        })
    }

    /// Creates an empty table with the default bucket count (16).
    ///
    /// # Errors
    ///
    /// Returns `StrMapError::AllocationFailed` if the bucket array cannot be
    /// reserved.
    pub fn with_default_buckets() -> Result<Self, StrMapError> {
        Self::new(DEFAULT_BUCKETS)
    }

    /// Returns the bucket a key belongs to: its hash modulo the bucket
    /// count.
    #[must_use]
    pub fn bucket_index(&self, key: &str) -> usize {
        // bucket_count >= 1 is guaranteed at construction.
        (hash_key(key) % self.buckets.len() as u64) as usize
    }

    /// Maps a key to a value.
    ///
    /// If the key is already present its value is updated in place and the
    /// entry count does not change. Otherwise a new entry owning a copy of
    /// the key is prepended to the key's bucket chain.
    pub fn set(&mut self, key: &str, value: i64) {
        let idx = self.bucket_index(key);

        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key == key {
                entry.value = value;
                return;
            }
            cursor = entry.next.as_deref_mut();
        }

        let next = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(Entry {
            key: key.to_owned(),
            value,
            next,
        }));
        self.len += 1;
    }

    /// Looks up the value mapped to a key.
    ///
    /// Returns `None` if the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        let idx = self.bucket_index(key);
        let mut cursor = self.buckets[idx].as_deref();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Checks whether a key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key, returning the value it mapped to.
    ///
    /// The entry is unlinked from its chain and freed. Removing an absent
    /// key is a no-op and returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<i64> {
        let idx = self.bucket_index(key);

        // Walk the cursor to the link that owns the matching entry; on an
        // absent key it comes to rest on the chain's trailing None.
        let mut slot = &mut self.buckets[idx];
        while slot.as_ref().is_some_and(|entry| entry.key != key) {
            slot = &mut slot.as_mut()?.next;
        }

        let entry = slot.take()?;
        let Entry { value, next, .. } = *entry;
        *slot = next;
        self.len -= 1;
        Some(value)
    }

    /// Drops every entry. The bucket array is retained.
    pub fn clear(&mut self) {
        for slot in self.buckets.iter_mut() {
            // Detach link by link so dropping a long chain cannot recurse
            // deeply enough to overflow the stack.
            let mut chain = slot.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
            }
        }
        self.len = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns an iterator over `(key, value)` pairs.
    ///
    /// Entries within one bucket are yielded newest first; there is no order
    /// guarantee across buckets.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    pub(crate) fn buckets(&self) -> &[Option<Box<Entry>>] {
        &self.buckets
    }
}

impl Drop for StrMap {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for StrMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
