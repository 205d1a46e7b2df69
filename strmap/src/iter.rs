use std::slice;

use crate::map::{Entry, StrMap};

/// Iterator over the `(key, value)` pairs of a [`StrMap`].
///
/// Buckets are visited in index order; within one bucket the chain is walked
/// from its head, so the newest entry in a bucket comes out first. Reports
/// an exact size.
pub struct Iter<'a> {
    buckets: slice::Iter<'a, Option<Box<Entry>>>,
    chain: Option<&'a Entry>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                self.remaining -= 1;
                return Some((entry.key.as_str(), entry.value));
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            chain: self.chain,
            remaining: self.remaining,
        }
    }
}

impl<'a> IntoIterator for &'a StrMap {
    type Item = (&'a str, i64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets().iter(),
            chain: None,
            remaining: self.len(),
        }
    }
}
