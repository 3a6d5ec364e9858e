//! Lexer for preset names and user-supplied tokens using logos
//!
//! A preset token is a sequence of words separated by runs of whitespace,
//! underscores, or hyphens. Normalizing a token lowercases each word and
//! joins them with a single hyphen, so `"NeurIPS_1col  line"` becomes
//! `"neurips-1col-line"`.

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum NameToken<'a> {
    /// Any run of whitespace, underscores, or hyphens. The ASCII
    /// information separators count as whitespace.
    #[regex(r"[\s\x1c-\x1f_-]+")]
    Separator,

    #[regex(r"[^\s\x1c-\x1f_-]+", |lex| lex.slice())]
    Word(&'a str),
}

/// Tokenize input into separators and words with their spans
pub fn lex(input: &str) -> impl Iterator<Item = (NameToken<'_>, Span)> + '_ {
    NameToken::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

/// Iterate over the words of the input, skipping separators
pub fn words(input: &str) -> impl Iterator<Item = (&str, Span)> + '_ {
    lex(input).filter_map(|(tok, span)| match tok {
        NameToken::Word(word) => Some((word, span)),
        NameToken::Separator => None,
    })
}

/// Normalize a user-supplied token.
///
/// Lowercases, collapses whitespace/underscore/hyphen runs to a single
/// hyphen and strips leading and trailing hyphens. Never fails.
pub fn normalize_token(value: &str) -> String {
    words(value)
        .map(|(word, _)| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
