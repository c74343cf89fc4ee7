//!# redfa
//!
//! `redfa` compiles regular expressions over printable ASCII into minimal
//! deterministic finite automata, and runs those automata over input strings
//! to decide language membership.
//!
//! ## Usage
//!
//! ```rust
//! fn main() {
//!     let dfa = redfa::compile("(a|b)*abb").unwrap();
//!     assert!(dfa.accepts("abb"));
//!     assert!(dfa.accepts("babaabb"));
//!     assert!(!dfa.accepts("abba"));
//!
//!     // Parse failures carry the offset the parser stopped at
//!     let err = redfa::compile("a(b").unwrap_err();
//!     eprintln!("invalid pattern: {err}");
//! }
//! ```
//!
//! ## Pipeline
//!
//! Compilation is a four-stage pipeline, each stage exposed on its own:
//!
//! 1. [Parsing](parser::regex): an LL(1) recursive descent over the pattern
//!    which validates the syntax and emits the automaton in one pass,
//! 2. [Thompson construction](nfa::Nfa): the parser builds the NFA with the
//!    algebraic combinators [literal](nfa::Nfa::literal),
//!    [concatenate](nfa::Nfa::concatenate), [alternate](nfa::Nfa::alternate)
//!    and [close](nfa::Nfa::close),
//! 3. [Subset construction](nfa::Nfa::to_dfa): the NFA is converted to a DFA
//!    whose states are the reachable ε-closure subsets,
//! 4. [Minimization](dfa::Dfa::minimize): partition refinement merges all
//!    behaviourally equivalent DFA states.
//!
//! [compile] runs all four stages. The stages can just as well be driven
//! separately, e.g. to compare the [NFA](nfa::Nfa::accepts) and
//! [DFA](dfa::Dfa::accepts) acceptors or to inspect the unminimized DFA.
//!
//! ## Pattern syntax
//!
//! See the [parser module documentation](parser) for the full syntax:
//! alternation `|`, Kleene closure `*`, grouping parentheses, bracket
//! classes like `[a-z]` and `[^abc]`, and backslash escapes for the special
//! characters and `\s` for a literal space.
//!
//! ## Scope
//!
//! The alphabet is fixed to printable ASCII. There are no capture groups,
//! anchors, backreferences, lookaround or counted repetitions, and matching
//! is whole-string: `accepts` answers whether the entire input is in the
//! language, not whether some substring matches.

pub mod dfa;
pub mod nfa;
pub mod parser;

mod alphabet;

use dfa::Dfa;
pub use parser::ParseError;

/// Compiles a regular expression into a minimal DFA, running the parser, the
/// subset construction and the minimizer. The resulting automaton decides
/// whole-string membership via [Dfa::accepts].
///
/// ```
/// let dfa = redfa::compile("a[0-9]*").unwrap();
/// assert!(dfa.accepts("a"));
/// assert!(dfa.accepts("a42"));
/// assert!(!dfa.accepts("4a2"));
/// ```
pub fn compile(pattern: &str) -> Result<Dfa, ParseError> {
    let nfa = parser::regex(pattern)?;
    let mut dfa = nfa.to_dfa();
    dfa.minimize();
    Ok(dfa)
}
