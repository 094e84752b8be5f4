//! Sequence windowing primitives.
//!
//! Two structural helpers with no knowledge of diffs:
//! [`overlapping_windows`] slides a fixed-size frame over a sequence and
//! [`partition_by_separator`] groups items into runs split on a marker.

use std::iter::{Fuse, FusedIterator};
use std::mem;
use std::num::NonZeroUsize;

/// Invalid argument passed to a windowing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// `length` was zero.
    #[error("window length must be at least 1")]
    ZeroLength,
}

/// Split a sequence into fixed-size windows starting every `step` items.
///
/// A `step` of `None` or `Some(0)` means `length` (non-overlapping).
/// Windows start at `0, step, 2 * step, ...` while
/// `start < len - length + step`; the last window may be shorter than
/// `length`, and is empty when its start falls past the end.
///
/// ```
/// use tmplrev::overlapping_windows;
///
/// let pairs: Vec<_> = overlapping_windows(1..=7, 2, None).unwrap().collect();
/// assert_eq!(pairs, vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7]]);
/// ```
///
/// # Errors
///
/// Returns [`WindowError::ZeroLength`] when `length` is zero.
pub fn overlapping_windows<I>(
    seq: I,
    length: usize,
    step: Option<usize>,
) -> Result<Windows<I::Item>, WindowError>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let length = NonZeroUsize::new(length).ok_or(WindowError::ZeroLength)?;
    Ok(Windows::new(seq.into_iter().collect(), length, step))
}

/// Iterator returned by [`overlapping_windows`].
#[derive(Debug, Clone)]
pub struct Windows<T> {
    items: Vec<T>,
    length: usize,
    step: usize,
    start: usize,
    remaining: usize,
}

impl<T: Clone> Windows<T> {
    pub(crate) fn new(items: Vec<T>, length: NonZeroUsize, step: Option<usize>) -> Self {
        let length = length.get();
        let step = match step {
            Some(step) if step > 0 => step,
            _ => length,
        };
        let remaining = window_count(items.len(), length, step);
        Self {
            items,
            length,
            step,
            start: 0,
            remaining,
        }
    }
}

/// Number of starts `0, step, 2 * step, ...` below `len - length + step`.
fn window_count(len: usize, length: usize, step: usize) -> usize {
    match len.checked_sub(length) {
        Some(spare) => 1 + spare.div_ceil(step),
        None => usize::from(step > length - len),
    }
}

impl<T: Clone> Iterator for Windows<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let len = self.items.len();
        let start = self.start.min(len);
        let end = self.start.saturating_add(self.length).min(len);
        let window = self.items[start..end].to_vec();
        self.start = self.start.saturating_add(self.step);
        self.remaining -= 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Windows<T> {}

impl<T: Clone> FusedIterator for Windows<T> {}

/// One item produced by [`partition_by_separator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part<T> {
    /// Consecutive non-separator items; never empty.
    Run(Vec<T>),
    /// A separator item.
    Separator(T),
}

impl<T> Part<T> {
    /// Return the run, if this is one.
    #[must_use]
    pub fn as_run(&self) -> Option<&[T]> {
        match self {
            Self::Run(items) => Some(items.as_slice()),
            Self::Separator(_) => None,
        }
    }

    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Separator(_))
    }
}

/// Group a sequence into runs of non-separator items, keeping each
/// separator as its own item.
///
/// Empty runs are never produced: a separator at the start, at the end,
/// or right after another separator stands alone.
///
/// ```
/// use tmplrev::{Part, partition_by_separator};
///
/// let parts: Vec<_> = partition_by_separator([1, 2, 3], 2).collect();
/// assert_eq!(parts, vec![Part::Run(vec![1]), Part::Separator(2), Part::Run(vec![3])]);
/// ```
pub fn partition_by_separator<I>(seq: I, marker: I::Item) -> PartitionBySeparator<I::IntoIter>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    PartitionBySeparator {
        iter: seq.into_iter().fuse(),
        marker,
        run: Vec::new(),
        pending: None,
    }
}

/// Iterator returned by [`partition_by_separator`].
#[derive(Debug, Clone)]
pub struct PartitionBySeparator<I: Iterator> {
    iter: Fuse<I>,
    marker: I::Item,
    run: Vec<I::Item>,
    pending: Option<I::Item>,
}

impl<I> Iterator for PartitionBySeparator<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Item = Part<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(separator) = self.pending.take() {
            return Some(Part::Separator(separator));
        }

        for item in self.iter.by_ref() {
            if item != self.marker {
                self.run.push(item);
            } else if self.run.is_empty() {
                return Some(Part::Separator(item));
            } else {
                self.pending = Some(item);
                return Some(Part::Run(mem::take(&mut self.run)));
            }
        }

        if self.run.is_empty() {
            None
        } else {
            Some(Part::Run(mem::take(&mut self.run)))
        }
    }
}

impl<I> FusedIterator for PartitionBySeparator<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
}
