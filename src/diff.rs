//! Symbolic diff: align two token sequences and annotate the result.
//!
//! The output stream keeps every token both sides agree on, replaces each
//! maximal run of deleted tokens by a single [`Symbol::Any`] marker, and is
//! framed by [`Symbol::BeginOfSequence`] / [`Symbol::EndOfSequence`].

use std::hash::Hash;
use std::iter::FusedIterator;

use log::{debug, trace};
use similar::{DiffOp, DiffTag, capture_diff_slices};

use crate::symbol::{Element, Symbol};

/// Alignment algorithm used to compute the edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Myers' O(ND) difference algorithm.
    #[default]
    Myers,
    /// Patience diff (anchors on unique common tokens).
    Patience,
    /// Classic longest-common-subsequence table.
    Lcs,
}

impl Algorithm {
    const fn to_similar(self) -> similar::Algorithm {
        match self {
            Self::Myers => similar::Algorithm::Myers,
            Self::Patience => similar::Algorithm::Patience,
            Self::Lcs => similar::Algorithm::Lcs,
        }
    }
}

/// What to do with tokens that only exist in the second sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Insertions {
    /// Drop inserted tokens. A gap stays a single `ANY` even when
    /// insertions are interleaved with the deletions.
    #[default]
    Skip,
    /// Emit inserted tokens as literals; they close the current gap.
    Emit,
}

/// Options controlling [`diff_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffOptions {
    pub algorithm: Algorithm,
    pub insertions: Insertions,
}

impl DiffOptions {
    /// Default options: Myers alignment, insertions skipped.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            algorithm: Algorithm::Myers,
            insertions: Insertions::Skip,
        }
    }

    /// Set the alignment algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the insertion policy.
    #[must_use]
    pub const fn insertions(mut self, insertions: Insertions) -> Self {
        self.insertions = insertions;
        self
    }
}

/// Diff two token sequences with default options.
///
/// ```
/// use tmplrev::{Element, Symbol, diff};
///
/// let stream: Vec<_> = diff(["a", "b", "c"], ["a", "d", "c"]).collect();
/// assert_eq!(
///     stream,
///     vec![
///         Element::Symbol(Symbol::BeginOfSequence),
///         Element::Literal("a"),
///         Element::Symbol(Symbol::Any),
///         Element::Literal("c"),
///         Element::Symbol(Symbol::EndOfSequence),
///     ]
/// );
/// ```
#[must_use]
pub fn diff<A, B, T>(a: A, b: B) -> SymbolicDiff<T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Clone + Eq + Hash + Ord,
{
    diff_with(a, b, &DiffOptions::new())
}

/// Diff two strings character by character.
#[must_use]
pub fn diff_text(a: &str, b: &str) -> SymbolicDiff<char> {
    diff(a.chars(), b.chars())
}

/// Diff two token sequences with explicit options.
///
/// Both inputs are materialized and aligned up front; the annotated
/// stream is then produced lazily. Iterating again requires calling
/// this function again.
#[must_use]
pub fn diff_with<A, B, T>(a: A, b: B, options: &DiffOptions) -> SymbolicDiff<T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Clone + Eq + Hash + Ord,
{
    let old: Vec<T> = a.into_iter().collect();
    let new: Vec<T> = b.into_iter().collect();
    let ops = capture_diff_slices(options.algorithm.to_similar(), &old, &new);
    debug!(
        "aligned {} old and {} new tokens into {} ops ({:?})",
        old.len(),
        new.len(),
        ops.len(),
        options.algorithm
    );

    SymbolicDiff {
        edits: flatten(&ops).into_iter(),
        old,
        new,
        insertions: options.insertions,
        in_gap: false,
        stage: Stage::Start,
    }
}

/// Per-token edit, indexing into the old or new sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Keep(usize),
    Remove(usize),
    Add(usize),
}

/// Expand alignment ops into per-token edits. Within each changed
/// region all removals come before all additions.
fn flatten(ops: &[DiffOp]) -> Vec<Edit> {
    let mut edits = Vec::new();
    let mut added = Vec::new();

    for op in ops {
        let (tag, old, new) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                edits.append(&mut added);
                edits.extend(old.map(Edit::Keep));
            }
            DiffTag::Delete => edits.extend(old.map(Edit::Remove)),
            DiffTag::Insert => added.extend(new.map(Edit::Add)),
            DiffTag::Replace => {
                edits.extend(old.map(Edit::Remove));
                added.extend(new.map(Edit::Add));
            }
        }
    }
    edits.append(&mut added);

    edits
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    Body,
    Done,
}

/// Iterator over the annotated stream produced by [`diff`].
#[derive(Debug, Clone)]
pub struct SymbolicDiff<T> {
    edits: std::vec::IntoIter<Edit>,
    old: Vec<T>,
    new: Vec<T>,
    insertions: Insertions,
    in_gap: bool,
    stage: Stage,
}

impl<T: Clone> Iterator for SymbolicDiff<T> {
    type Item = Element<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stage {
            Stage::Start => {
                self.stage = Stage::Body;
                Some(Element::Symbol(Symbol::BeginOfSequence))
            }
            Stage::Body => {
                for edit in self.edits.by_ref() {
                    match edit {
                        Edit::Keep(i) => {
                            self.in_gap = false;
                            return Some(Element::Literal(self.old[i].clone()));
                        }
                        Edit::Remove(i) => {
                            if !self.in_gap {
                                trace!("gap opens at old index {i}");
                                self.in_gap = true;
                                return Some(Element::Symbol(Symbol::Any));
                            }
                        }
                        Edit::Add(j) => {
                            if self.insertions == Insertions::Emit {
                                self.in_gap = false;
                                return Some(Element::Literal(self.new[j].clone()));
                            }
                        }
                    }
                }
                self.stage = Stage::Done;
                Some(Element::Symbol(Symbol::EndOfSequence))
            }
            Stage::Done => None,
        }
    }
}

impl<T: Clone> FusedIterator for SymbolicDiff<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags<T: std::fmt::Display>(stream: impl Iterator<Item = Element<T>>) -> Vec<String> {
        stream.map(|element| element.to_string()).collect()
    }

    #[test]
    fn flatten_orders_removals_first() {
        let old = ["x", "a", "y"];
        let new = ["p", "a", "q"];
        let ops = capture_diff_slices(similar::Algorithm::Myers, &old, &new);
        let edits = flatten(&ops);
        let keep = edits
            .iter()
            .position(|e| *e == Edit::Keep(1))
            .expect("common token kept");
        assert!(matches!(edits[0], Edit::Remove(0)));
        assert!(matches!(edits[keep - 1], Edit::Add(0)));
        assert!(matches!(edits[keep + 1], Edit::Remove(2)));
        assert!(matches!(edits[keep + 2], Edit::Add(2)));
    }

    #[test]
    fn empty_inputs() {
        let stream = diff(Vec::<u8>::new(), Vec::new());
        assert_eq!(tags(stream), ["BOF", "EOF"]);
    }

    #[test]
    fn single_token_changed() {
        assert_eq!(tags(diff(["x"], ["y"])), ["BOF", "ANY", "EOF"]);
        let options = DiffOptions::new().insertions(Insertions::Emit);
        assert_eq!(tags(diff_with(["x"], ["y"], &options)), ["BOF", "ANY", "y", "EOF"]);
    }

    #[test]
    fn single_token_equal() {
        assert_eq!(tags(diff(["x"], ["x"])), ["BOF", "x", "EOF"]);
    }

    #[test]
    fn deletion_run_collapses() {
        assert_eq!(
            tags(diff(["a", "b", "c", "d"], ["a", "d"])),
            ["BOF", "a", "ANY", "d", "EOF"]
        );
    }

    #[test]
    fn fused_after_end() {
        let mut stream = diff(["a"], ["a"]);
        assert_eq!(stream.by_ref().count(), 3);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn text_is_exploded_into_chars() {
        assert_eq!(tags(diff_text("abc", "adc")), ["BOF", "a", "ANY", "c", "EOF"]);
    }

    #[test]
    fn options_builder() {
        let options = DiffOptions::new()
            .algorithm(Algorithm::Patience)
            .insertions(Insertions::Emit);
        assert_eq!(options.algorithm, Algorithm::Patience);
        assert_eq!(options.insertions, Insertions::Emit);
        assert_eq!(DiffOptions::default(), DiffOptions::new());
    }
}
