//! # redfa parser
//! This module contains the regular expression parser: an LL(1) recursive
//! descent over the pattern that validates the syntax and constructs the
//! resulting [Nfa] in the same pass, one Thompson combinator call per
//! recognised production.
//!
//! ## Pattern syntax
//! Patterns are ASCII text over the printable characters. There are seven
//! special characters: `(`, `)`, `[`, `]`, `*`, `|` and `\`. All other
//! printable characters stand for themselves.
//!
//! - Concatenation is implicit: `ab` matches the two-character string "ab".
//! - `|` is alternation and has the lowest precedence: `ab|cd` matches "ab"
//!   or "cd".
//! - `*` is the Kleene closure of the factor it follows: `ab*` matches "a",
//!   "ab", "abb", … A double star (`a**`) is a syntax error.
//! - `(`/`)` group: `a(b|c)*d` matches "ad", "abd", "acbd", …
//! - `\x` denotes the literal `x` for each special `x`, and `\s` denotes a
//!   literal space. Unescaped spaces in the pattern are ignored, and any
//!   other escape is an error.
//!
//! Bracket expressions denote a set of characters from `!` through `~`:
//!
//! - `[abc]` matches "a", "b" or "c"; `[a-zJKL]` matches any lowercase letter
//!   or `J`, `K`, `L`. Range ends must not be reversed.
//! - If the first character of the body is `^`, the set is complemented:
//!   `[^abc]` matches every printable character except "a", "b", "c" (and
//!   except space).
//! - Special characters lose their meaning inside the brackets. To include a
//!   literal `]`, place it first in the body; to include a literal `-`, place
//!   it last; to include a literal `^`, place it anywhere except first.
//! - A class that ends up denoting no characters at all is an error.
//!
//! ## Errors
//! Parsing stops at the first (leftmost unrecoverable, i.e. rightmost
//! reached) position where no production applies, and reports a [ParseError]
//! carrying the character offset of the failure. Nothing of the partially
//! built automaton survives a failed parse.
//!
//! ```
//! use redfa::parser;
//!
//! let nfa = parser::regex("a(b|c)*d").unwrap();
//! assert!(nfa.accepts("ad"));
//! assert!(nfa.accepts("abcbd"));
//! assert!(!nfa.accepts("abc"));
//!
//! // Offsets point at the offending character
//! let err = parser::regex("ab|*c").unwrap_err();
//! assert_eq!(err, parser::ParseError::UnexpectedChar('*', 3));
//! ```

mod regex;

use crate::nfa::Nfa;
use thiserror::Error;

/// The reasons a pattern can be rejected. Offsets are character positions
/// into the pattern as given, counting ignored spaces.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No grammar production allows this character at this position. Also
    /// covers characters outside printable ASCII, which are valid nowhere.
    #[error("unexpected character {0:?} at offset {1}")]
    UnexpectedChar(char, usize),
    /// The pattern ended in the middle of a production.
    #[error("unexpected end of pattern")]
    UnexpectedEnd,
    /// A `(` without its `)`, or a stray `)`.
    #[error("unbalanced parenthesis at offset {0}")]
    UnbalancedParenthesis(usize),
    /// `\` followed by a character that is neither special nor `s`.
    #[error("bad escape '\\{0}' at offset {1}")]
    BadEscape(char, usize),
    /// A bracket class denoting no characters, such as `[^!-~]`.
    #[error("empty bracket class starting at offset {0}")]
    EmptyClass(usize),
    /// A bracket range `a-b` with `b < a`.
    #[error("reversed range '{0}-{1}' at offset {2}")]
    ReversedRange(char, char, usize),
}

/// Parses a regular expression according to the format above, constructing
/// the equivalent [Nfa]. The whole pattern must be consumed, otherwise this
/// function errors.
pub fn regex(pattern: &str) -> Result<Nfa, ParseError> {
    regex::Parser::new(pattern).parse()
}
