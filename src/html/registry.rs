//! Header identifier registry.
//!
//! Keeps every header text seen so far in one document so that repeated
//! headers get distinct `id` attributes. Entries are kept in insertion order
//! and searched linearly; ids are case-sensitive.
//!
//! A literal header `foo-1` written after two headers named `foo` collides
//! with the generated `foo-1`. Tracking generated ids as well would fix this;
//! the registry accepts the collision.

use bstr::ByteSlice;

/// A previously seen header text and how many times it has been used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    /// Raw (unescaped) header content.
    pub slug: Vec<u8>,
    /// Number of headers rendered with this text so far.
    pub count: usize,
}

/// Per-document set of header slugs with reference counts.
#[derive(Debug, Clone, Default)]
pub struct HeaderRegistry {
    entries: Vec<HeaderEntry>,
}

impl HeaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one use of `raw` and return the numeric suffix its id needs.
    ///
    /// The first use returns `None`; the n-th repeat returns `Some(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quire::html::HeaderRegistry;
    ///
    /// let mut headers = HeaderRegistry::new();
    /// assert_eq!(headers.register(b"Intro"), None);
    /// assert_eq!(headers.register(b"Intro"), Some(1));
    /// assert_eq!(headers.register(b"Intro"), Some(2));
    /// assert_eq!(headers.register(b"intro"), None);
    /// ```
    pub fn register(&mut self, raw: &[u8]) -> Option<usize> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.slug == raw) {
            let suffix = entry.count;
            entry.count += 1;
            tracing::trace!(slug = %raw.as_bstr(), suffix, "repeated header id");
            return Some(suffix);
        }

        self.entries.push(HeaderEntry {
            slug: raw.to_vec(),
            count: 1,
        });
        None
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
