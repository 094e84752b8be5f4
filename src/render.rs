//! Text rendering for templates.
//!
//! Sentinels are dropped, each side of a chunk is printed as its literal
//! tokens, and the gap between them is shown as ` ... `.

use std::fmt::{Display, Write as _};

use crate::symbol::Element;
use crate::template::{Chunk, Template};

/// Separator between the two sides of a chunk.
pub const GAP: &str = " ... ";
/// Separator between consecutive chunks.
pub const CHUNK_SEPARATOR: &str = ", ";

/// Render a template with tokens joined by a single space.
#[must_use]
pub fn render<T: Display>(template: &Template<T>) -> String {
    render_with(template, " ")
}

/// Render a template, joining the tokens of each run with
/// `token_separator` (use `""` for character templates).
#[must_use]
pub fn render_with<T: Display>(template: &Template<T>, token_separator: &str) -> String {
    let mut out = String::new();

    for (i, chunk) in template.iter().enumerate() {
        if i > 0 {
            out.push_str(CHUNK_SEPARATOR);
        }
        format_chunk(&mut out, chunk, token_separator);
    }

    out
}

/// Render a single chunk.
#[must_use]
pub fn render_chunk<T: Display>(chunk: &Chunk<T>, token_separator: &str) -> String {
    let mut out = String::new();
    format_chunk(&mut out, chunk, token_separator);
    out
}

fn format_chunk<T: Display>(out: &mut String, chunk: &Chunk<T>, token_separator: &str) {
    format_run(out, &chunk.left, token_separator);
    out.push_str(GAP);
    format_run(out, &chunk.right, token_separator);
}

fn format_run<T: Display>(out: &mut String, run: &[Element<T>], token_separator: &str) {
    for (i, token) in run.iter().filter_map(Element::as_literal).enumerate() {
        if i > 0 {
            out.push_str(token_separator);
        }
        let _ = write!(out, "{token}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    fn chunk(left: &[&'static str], right: &[&'static str]) -> Chunk<&'static str> {
        let run = |tokens: &[&'static str]| tokens.iter().copied().map(Element::Literal).collect();
        Chunk::new(run(left), run(right))
    }

    #[test]
    fn empty_template() {
        assert_eq!(render(&Template::<&str>::new()), "");
    }

    #[test]
    fn chunks_are_comma_separated() {
        let template =
            Template::from_chunks(vec![chunk(&["a", "b"], &["c"]), chunk(&["c"], &["d"])]);
        assert_eq!(render(&template), "a b ... c, c ... d");
    }

    #[test]
    fn sentinels_are_stripped() {
        let template = Template::new().chunk(Chunk::new(
            vec![Element::Symbol(Symbol::BeginOfSequence)],
            vec![Element::Literal('x'), Element::Symbol(Symbol::EndOfSequence)],
        ));
        assert_eq!(render(&template), " ... x");
    }

    #[test]
    fn custom_token_separator() {
        let template = Template::new().chunk(chunk(&["a", "b"], &["c", "d"]));
        assert_eq!(render_with(&template, ""), "ab ... cd");
    }
}
