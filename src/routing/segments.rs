//! Path segment cursor.
//!
//! # Responsibilities
//! - Split a request target into lower-cased `/`-delimited tokens
//! - Hand tokens out front-first while the router walks them
//! - Accept popped tokens back so a step can be retried
//!
//! # Design Decisions
//! - Backed by a `VecDeque`: pop and push-back are both O(1) at the front
//! - Exhaustion is `None`, never a panic

use std::collections::VecDeque;

/// Ordered queue of path segments, front = next to consume.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments {
    inner: VecDeque<String>,
}

impl Segments {
    /// Create a cursor over already-split segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokenize a request target such as `/users/123/profile`.
    ///
    /// The empty token in front of the leading `/` is discarded, so `/`
    /// yields a single empty segment (the root resource).
    pub fn from_request_target(target: &str) -> Self {
        let path = target.strip_prefix('/').unwrap_or(target);
        Self::new(path.split('/').map(str::to_lowercase))
    }

    pub fn has_next(&self) -> bool {
        !self.inner.is_empty()
    }

    /// Look at the next segment without consuming it.
    pub fn peek(&self) -> Option<&str> {
        self.inner.front().map(String::as_str)
    }

    /// Remove and return the next segment.
    pub fn pop(&mut self) -> Option<String> {
        self.inner.pop_front()
    }

    /// Put a segment back in front of the cursor.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.inner.push_front(segment.into());
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Consume every remaining segment in order.
    pub fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.inner.drain(..)
    }
}
