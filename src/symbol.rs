use std::fmt;

use serde::Serialize;

/// Marker values that appear in an annotated diff stream next to
/// literal tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    /// Start of the stream (`BOF`).
    #[serde(rename = "BOF")]
    BeginOfSequence,
    /// End of the stream (`EOF`).
    #[serde(rename = "EOF")]
    EndOfSequence,
    /// A gap: one or more deleted source tokens (`ANY`).
    #[serde(rename = "ANY")]
    Any,
}

impl Symbol {
    /// Display tag of the marker.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::BeginOfSequence => "BOF",
            Self::EndOfSequence => "EOF",
            Self::Any => "ANY",
        }
    }

    /// Whether this marker is one of the two stream sentinels.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::BeginOfSequence | Self::EndOfSequence)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One element of an annotated diff stream.
///
/// Literals and markers are distinguished by variant, so a literal
/// whose text happens to be `"ANY"` never compares equal to
/// [`Symbol::Any`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element<T> {
    /// A caller-supplied token.
    Literal(T),
    /// A sentinel or wildcard marker.
    Symbol(Symbol),
}

impl<T> Element<T> {
    /// The wildcard element used as the gap separator.
    pub const ANY: Self = Self::Symbol(Symbol::Any);

    /// Return the literal token, if this is one.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&T> {
        match self {
            Self::Literal(token) => Some(token),
            Self::Symbol(_) => None,
        }
    }

    /// Return the marker, if this is one.
    #[must_use]
    pub const fn as_symbol(&self) -> Option<Symbol> {
        match self {
            Self::Literal(_) => None,
            Self::Symbol(symbol) => Some(*symbol),
        }
    }

    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Symbol(Symbol::Any))
    }
}

impl<T> From<Symbol> for Element<T> {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl<T: fmt::Display> fmt::Display for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(token) => fmt::Display::fmt(token, f),
            Self::Symbol(symbol) => fmt::Display::fmt(symbol, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags() {
        assert_eq!(Symbol::BeginOfSequence.tag(), "BOF");
        assert_eq!(Symbol::EndOfSequence.tag(), "EOF");
        assert_eq!(Symbol::Any.to_string(), "ANY");
    }

    #[test]
    fn same_variant_is_equal() {
        assert_eq!(Symbol::Any, Symbol::Any);
        assert_ne!(Symbol::Any, Symbol::EndOfSequence);
    }

    #[test]
    fn literal_never_equals_symbol() {
        let literal: Element<&str> = Element::Literal("ANY");
        assert_ne!(literal, Element::ANY);
        assert_eq!(literal.to_string(), Element::<&str>::ANY.to_string());
    }

    #[test]
    fn sentinels() {
        assert!(Symbol::BeginOfSequence.is_sentinel());
        assert!(Symbol::EndOfSequence.is_sentinel());
        assert!(!Symbol::Any.is_sentinel());
    }
}
