//! Chunk and template assembly.
//!
//! [`detect`] splits the annotated diff stream on its `ANY` markers and
//! slides a width-3, step-2 window over the result. Every window is
//! `(run, ANY, run)`, so each one becomes a [`Chunk`] holding the context
//! before and after a single gap. Neighbouring chunks share a run: the
//! right side of chunk *i* is the left side of chunk *i + 1*.

use std::hash::Hash;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::{fmt, slice, vec};

use log::{debug, warn};
use serde::Serialize;

use crate::diff::{DiffOptions, diff_with};
use crate::render;
use crate::symbol::Element;
use crate::window::{Part, Windows, partition_by_separator};

const CHUNK_WIDTH: NonZeroUsize = NonZeroUsize::new(3).expect("chunk width is non-zero");
const CHUNK_STEP: usize = 2;

/// Context around one gap: the run right before it and the run right
/// after it. Either side may hold sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Chunk<T> {
    pub left: Vec<Element<T>>,
    pub right: Vec<Element<T>>,
}

impl<T> Chunk<T> {
    #[must_use]
    pub const fn new(left: Vec<Element<T>>, right: Vec<Element<T>>) -> Self {
        Self { left, right }
    }

    /// Build a chunk from a `(run, separator, run)` window. Any other
    /// shape yields `None`.
    #[must_use]
    pub fn from_window(window: Vec<Part<Element<T>>>) -> Option<Self> {
        let mut parts = window.into_iter();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Part::Run(left)), Some(Part::Separator(_)), Some(Part::Run(right)), None) => {
                Some(Self { left, right })
            }
            _ => None,
        }
    }

    /// Literal tokens of the left run, sentinels removed.
    pub fn left_literals(&self) -> impl Iterator<Item = &T> {
        self.left.iter().filter_map(Element::as_literal)
    }

    /// Literal tokens of the right run, sentinels removed.
    pub fn right_literals(&self) -> impl Iterator<Item = &T> {
        self.right.iter().filter_map(Element::as_literal)
    }
}

impl<T: fmt::Display> fmt::Display for Chunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_chunk(self, " "))
    }
}

/// An ordered chain of chunks extracted from one pair of sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Template<T> {
    chunks: Vec<Chunk<T>>,
}

impl<T> Template<T> {
    /// Create an empty template.
    #[must_use]
    pub const fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    #[must_use]
    pub const fn from_chunks(chunks: Vec<Chunk<T>>) -> Self {
        Self { chunks }
    }

    /// Append a chunk.
    #[must_use]
    pub fn chunk(mut self, chunk: Chunk<T>) -> Self {
        self.chunks.push(chunk);
        self
    }

    #[must_use]
    pub fn chunks(&self) -> &[Chunk<T>] {
        &self.chunks
    }

    #[must_use]
    pub fn into_chunks(self) -> Vec<Chunk<T>> {
        self.chunks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Chunk<T>> {
        self.chunks.iter()
    }
}

impl<T> Default for Template<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Chunk<T>> for Template<T> {
    fn from_iter<I: IntoIterator<Item = Chunk<T>>>(iter: I) -> Self {
        Self {
            chunks: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Template<T> {
    type Item = Chunk<T>;
    type IntoIter = vec::IntoIter<Chunk<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Template<T> {
    type Item = &'a Chunk<T>;
    type IntoIter = slice::Iter<'a, Chunk<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Template<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self))
    }
}

/// Detect the chunks describing how `a` became `b`, with default
/// diff options.
///
/// ```
/// use tmplrev::{Template, detect};
///
/// let before = "Hello there, I was been there aaa";
/// let after = "Hello there, he was in there khs";
/// let template: Template<_> =
///     detect(before.split_whitespace(), after.split_whitespace()).collect();
/// assert_eq!(template.to_string(), "Hello there, ... was, was ... there, there ... ");
/// ```
#[must_use]
pub fn detect<A, B, T>(a: A, b: B) -> Detect<T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Clone + Eq + Hash + Ord,
{
    detect_with(a, b, &DiffOptions::new())
}

/// Detect chunks between two strings compared character by character.
#[must_use]
pub fn detect_text(a: &str, b: &str) -> Detect<char> {
    detect(a.chars(), b.chars())
}

/// Detect chunks with explicit diff options.
#[must_use]
pub fn detect_with<A, B, T>(a: A, b: B, options: &DiffOptions) -> Detect<T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Clone + Eq + Hash + Ord,
{
    let parts: Vec<_> = partition_by_separator(diff_with(a, b, options), Element::ANY).collect();
    let part_count = parts.len();
    let windows = Windows::new(parts, CHUNK_WIDTH, Some(CHUNK_STEP));
    debug!("split diff into {part_count} parts, {} windows", windows.len());

    Detect { windows }
}

/// Iterator over the chunks produced by [`detect`].
#[derive(Debug, Clone)]
pub struct Detect<T> {
    windows: Windows<Part<Element<T>>>,
}

impl<T: Clone> Iterator for Detect<T> {
    type Item = Chunk<T>;

    fn next(&mut self) -> Option<Self::Item> {
        for window in self.windows.by_ref() {
            let width = window.len();
            if let Some(chunk) = Chunk::from_window(window) {
                return Some(chunk);
            }
            warn!("skipping malformed window of {width} parts");
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.windows.len()))
    }
}

impl<T: Clone> FusedIterator for Detect<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    fn lit(token: &str) -> Element<&str> {
        Element::Literal(token)
    }

    #[test]
    fn identical_inputs_have_no_chunks() {
        let template: Template<_> = detect(["a", "b"], ["a", "b"]).collect();
        assert!(template.is_empty());
        assert_eq!(template.to_string(), "");
    }

    #[test]
    fn empty_inputs_have_no_chunks() {
        assert_eq!(detect(Vec::<&str>::new(), Vec::new()).count(), 0);
    }

    #[test]
    fn single_gap() {
        let chunks: Vec<_> = detect(["a", "b", "c"], ["a", "d", "c"]).collect();
        assert_eq!(
            chunks,
            vec![Chunk::new(
                vec![Element::Symbol(Symbol::BeginOfSequence), lit("a")],
                vec![lit("c"), Element::Symbol(Symbol::EndOfSequence)],
            )]
        );
        assert_eq!(chunks[0].to_string(), "a ... c");
    }

    #[test]
    fn from_window_rejects_other_shapes() {
        let run = || Part::Run(vec![lit("x")]);
        assert!(Chunk::from_window(vec![run(), Part::Separator(Element::ANY)]).is_none());
        assert!(Chunk::from_window(vec![run(), run(), run()]).is_none());
        assert!(
            Chunk::from_window(vec![
                run(),
                Part::Separator(Element::ANY),
                run(),
                Part::Separator(Element::ANY)
            ])
            .is_none()
        );
    }

    #[test]
    fn literals_skip_sentinels() {
        let chunk = Chunk::new(
            vec![Element::Symbol(Symbol::BeginOfSequence), lit("a")],
            vec![Element::Symbol(Symbol::EndOfSequence)],
        );
        assert_eq!(chunk.left_literals().copied().collect::<Vec<_>>(), ["a"]);
        assert_eq!(chunk.right_literals().count(), 0);
    }

    #[test]
    fn builder_and_iteration() {
        let chunk = Chunk::new(vec![lit("a")], vec![lit("b")]);
        let template = Template::new().chunk(chunk.clone()).chunk(chunk.clone());
        assert_eq!(template.len(), 2);
        assert_eq!((&template).into_iter().count(), 2);
        assert_eq!(template.chunks()[1], chunk);
        assert_eq!(template.into_chunks().len(), 2);
    }
}
