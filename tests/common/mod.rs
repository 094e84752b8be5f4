#![allow(dead_code)]

use tmplrev::{Chunk, Element, Symbol, Template, detect};

pub const BEFORE: &str = "Hello there, I was been there aaa";
pub const BEFORE_BANG: &str = "Hello! there, I was been there aaa";
pub const AFTER: &str = "Hello there, he was in there khs";

pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Build a template from two whitespace-split texts.
pub fn template<'a>(before: &'a str, after: &'a str) -> Template<&'a str> {
    detect(words(before), words(after)).collect()
}

pub fn count_any<T>(stream: &[Element<T>]) -> usize {
    stream.iter().filter(|e| e.is_any()).count()
}

/// Assert the chaining law: each chunk's right run is the next
/// chunk's left run.
pub fn assert_chained<T: PartialEq + std::fmt::Debug>(chunks: &[Chunk<T>]) {
    for pair in chunks.windows(2) {
        assert_eq!(pair[0].right, pair[1].left, "chunks do not chain");
    }
}

pub const BOF: Element<&str> = Element::Symbol(Symbol::BeginOfSequence);
pub const EOF: Element<&str> = Element::Symbol(Symbol::EndOfSequence);
pub const ANY: Element<&str> = Element::Symbol(Symbol::Any);
