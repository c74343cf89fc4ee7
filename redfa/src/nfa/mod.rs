//! # Nondeterministic Finite Automaton, in Thompson form
//! The NFA module includes the [Nfa] struct, the intermediate representation
//! of a compiled regular expression. An [Nfa] is produced either by
//! [parsing a pattern](crate::parser::regex) or by combining smaller NFAs with
//! the Thompson combinators defined here, and is usually converted onwards to
//! a [Dfa] with [Nfa::to_dfa].
//!
//! Every NFA in this crate is kept in *Thompson form*: there is exactly one
//! start state and exactly one accept state, and the accept state has no
//! outgoing transitions. The four combinators all preserve this shape:
//!
//! * [Nfa::literal] builds the two-state NFA accepting one symbol,
//! * [Nfa::concatenate] chains another NFA after this one,
//! * [Nfa::alternate] accepts either this NFA's language or another's,
//! * [Nfa::close] accepts zero or more repetitions (Kleene closure).
//!
//! The combinators work in place on the receiver and consume their right
//! operand: its state table is appended to the receiver's with all state ids
//! rewritten by a fixed offset, so no state id is ever shared between two
//! automata.
//!
//! ## Example
//! ```
//! use redfa::nfa::Nfa;
//!
//! // Build (a|b)* by hand rather than through the parser
//! let mut nfa = Nfa::literal('a');
//! nfa.alternate(Nfa::literal('b'));
//! nfa.close();
//!
//! assert!(nfa.accepts(""));
//! assert!(nfa.accepts("abba"));
//! assert!(!nfa.accepts("abc"));
//!
//! // The subset construction gives an equivalent DFA
//! let dfa = nfa.to_dfa();
//! assert!(dfa.accepts("abba"));
//! assert!(!dfa.accepts("abc"));
//! ```
//!
//! States are identified by dense indices into the automaton's own state
//! table, and transitions carry target indices rather than references, so the
//! inherently cyclic automaton graph lives in plainly owned `Vec`s.

use crate::alphabet;
use crate::dfa::{Dfa, DfaState};
pub use eval::NfaEvaluator;
use std::collections::{HashMap, HashSet};

pub mod eval;

/// A transition label: either a concrete symbol of the alphabet, or ε, which
/// consumes no input. ε is its own variant rather than a reserved character
/// value, so every printable character remains usable as a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Char(char),
    Epsilon,
}

/// A single outgoing transition of an NFA state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NfaTransition {
    pub(crate) symbol: Symbol,
    pub(crate) target: usize,
}

impl NfaTransition {
    /// The label of this transition.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The index of the state this transition leads to.
    pub fn target(&self) -> usize {
        self.target
    }
}

/// A nondeterministic finite automaton in Thompson form, denoted by its state
/// table, its start state and its single accept state. See the
/// [module-level documentation](crate::nfa) for more info.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nfa {
    pub(crate) states: Vec<NfaState>,
    pub(crate) start: usize,
    pub(crate) accept: usize,
}

/// A state of an [Nfa], which consists of its outgoing transitions in
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NfaState {
    pub(crate) transitions: Vec<NfaTransition>,
}

impl NfaState {
    /// The outgoing transitions of this state.
    pub fn transitions(&self) -> &[NfaTransition] {
        self.transitions.as_slice()
    }

    fn push(&mut self, symbol: Symbol, target: usize) {
        self.transitions.push(NfaTransition { symbol, target });
    }
}

impl Nfa {
    /// Constructs the primitive NFA accepting exactly the one-symbol string
    /// `symbol`: two states with a single transition between them.
    pub fn literal(symbol: char) -> Self {
        let mut states = vec![NfaState::default(), NfaState::default()];
        states[0].push(Symbol::Char(symbol), 1);
        Nfa {
            states,
            start: 0,
            accept: 1,
        }
    }

    /// Rewrites `other`'s state ids by the current table size and appends its
    /// states, returning the offset that was applied. `other`'s start and
    /// accept ids must be adjusted by the same offset by the caller.
    fn absorb(&mut self, other: Nfa) -> usize {
        let offset = self.states.len();
        self.states
            .extend(other.states.into_iter().map(|mut state| {
                for transition in &mut state.transitions {
                    transition.target += offset;
                }
                state
            }));
        offset
    }

    /// Makes this NFA accept the concatenation of its language and `other`'s.
    /// An ε-transition connects this NFA's accept state to `other`'s start
    /// state, and `other`'s accept state becomes the accept state.
    ///
    /// ```
    /// use redfa::nfa::Nfa;
    ///
    /// let mut nfa = Nfa::literal('a');
    /// nfa.concatenate(Nfa::literal('b'));
    /// assert!(nfa.accepts("ab"));
    /// assert!(!nfa.accepts("a"));
    /// assert!(!nfa.accepts("abb"));
    /// ```
    pub fn concatenate(&mut self, other: Nfa) {
        let (other_start, other_accept) = (other.start, other.accept);
        let offset = self.absorb(other);
        let accept = self.accept;
        self.states[accept].push(Symbol::Epsilon, other_start + offset);
        self.accept = other_accept + offset;
    }

    /// Makes this NFA accept the union of its language and `other`'s. A new
    /// start state branches by ε to both operands' start states, and both
    /// operands' accept states reach a new accept state by ε.
    ///
    /// ```
    /// use redfa::nfa::Nfa;
    ///
    /// let mut nfa = Nfa::literal('a');
    /// nfa.alternate(Nfa::literal('b'));
    /// assert!(nfa.accepts("a"));
    /// assert!(nfa.accepts("b"));
    /// assert!(!nfa.accepts("ab"));
    /// ```
    pub fn alternate(&mut self, other: Nfa) {
        let (other_start, other_accept) = (other.start, other.accept);
        let offset = self.absorb(other);

        let new_start = self.states.len();
        let new_accept = new_start + 1;
        self.states.push(NfaState::default());
        self.states.push(NfaState::default());

        let (start, accept) = (self.start, self.accept);
        self.states[new_start].push(Symbol::Epsilon, start);
        self.states[new_start].push(Symbol::Epsilon, other_start + offset);
        self.states[accept].push(Symbol::Epsilon, new_accept);
        self.states[other_accept + offset].push(Symbol::Epsilon, new_accept);

        self.start = new_start;
        self.accept = new_accept;
    }

    /// Makes this NFA accept the Kleene closure of its language, i.e. zero or
    /// more repetitions. A loop edge connects the old accept state back to the
    /// old start state, and a skip edge connects the new start state directly
    /// to the new accept state for the empty repetition.
    ///
    /// ```
    /// use redfa::nfa::Nfa;
    ///
    /// let mut nfa = Nfa::literal('a');
    /// nfa.close();
    /// assert!(nfa.accepts(""));
    /// assert!(nfa.accepts("aaaa"));
    /// assert!(!nfa.accepts("ab"));
    /// ```
    pub fn close(&mut self) {
        let new_start = self.states.len();
        let new_accept = new_start + 1;
        self.states.push(NfaState::default());
        self.states.push(NfaState::default());

        let (start, accept) = (self.start, self.accept);
        self.states[accept].push(Symbol::Epsilon, start);
        self.states[accept].push(Symbol::Epsilon, new_accept);
        self.states[new_start].push(Symbol::Epsilon, start);
        self.states[new_start].push(Symbol::Epsilon, new_accept);

        self.start = new_start;
        self.accept = new_accept;
    }

    /// The transition function: the target of the first transition out of
    /// `state` labelled `symbol`, if any. Thompson form guarantees at most one
    /// non-ε transition per state, so "first" is never ambiguous here.
    pub fn delta(&self, state: usize, symbol: char) -> Option<usize> {
        self.states[state]
            .transitions
            .iter()
            .find(|t| t.symbol == Symbol::Char(symbol))
            .map(|t| t.target)
    }

    /// Gives the ε-closure of a state: all states reachable from `start` by
    /// zero or more ε-transitions, computed by a worklist search.
    pub fn epsilon_closure(&self, start: usize) -> HashSet<usize> {
        let mut all = HashSet::from([start]);
        let mut work_list = vec![start];
        while let Some(state) = work_list.pop() {
            for transition in &self.states[state].transitions {
                if transition.symbol == Symbol::Epsilon && all.insert(transition.target) {
                    work_list.push(transition.target);
                }
            }
        }
        all
    }

    /// Converts this NFA to a DFA using the subset construction. Each DFA
    /// state corresponds to one reachable set of NFA states; only reachable
    /// sets are enumerated, and the empty set (the reject trap) is never
    /// materialised, so a missing DFA transition means rejection. The start
    /// subset is guaranteed to become DFA state 0.
    ///
    /// Subsets are keyed by their sorted element sequence, which gives the
    /// order-insensitive equality the construction needs without relying on
    /// hash-iteration order.
    pub fn to_dfa(&self) -> Dfa {
        // Generator handing out dense ids to subsets in discovery order
        let mut gen = 0usize..;
        // Maps each discovered subset to its id
        let mut map: HashMap<Vec<usize>, usize> = HashMap::new();
        // Ids of subsets containing the NFA accept state
        let mut accepting: HashSet<usize> = HashSet::new();
        // Transition rows, keyed by source subset
        let mut transitions: HashMap<Vec<usize>, Vec<(char, usize)>> = HashMap::new();

        let start_key = Self::set_to_vec(&self.epsilon_closure(self.start));
        let n = gen.next().unwrap(); // 0
        if start_key.binary_search(&self.accept).is_ok() {
            accepting.insert(n);
        }
        map.insert(start_key.clone(), n);
        let mut to_explore = vec![start_key];

        while let Some(key) = to_explore.pop() {
            let mut row = Vec::new();
            for symbol in alphabet::symbols() {
                let mut subset = HashSet::new();
                for &q in &key {
                    if let Some(target) = self.delta(q, symbol) {
                        subset.extend(self.epsilon_closure(target));
                    }
                }
                if subset.is_empty() {
                    continue;
                }
                let is_accepting = subset.contains(&self.accept);
                let dst_key = Self::set_to_vec(&subset);
                if !map.contains_key(&dst_key) {
                    to_explore.push(dst_key.clone());
                }
                let id = *map.entry(dst_key).or_insert_with(|| gen.next().unwrap());
                if is_accepting {
                    accepting.insert(id);
                }
                row.push((symbol, id));
            }
            transitions.insert(key, row);
        }

        let mut states = vec![DfaState::default(); map.len()];
        for (key, id) in map {
            states[id] = DfaState {
                accepting: accepting.contains(&id),
                transitions: transitions
                    .remove(&key)
                    .expect("every discovered subset is explored exactly once"),
            };
        }

        Dfa { states, start: 0 }
    }

    /// Checks if this automaton accepts the given string, by direct NFA
    /// simulation. This is equivalent to getting the evaluator, stepping it
    /// over the whole string and checking if it is accepting.
    pub fn accepts(&self, input: &str) -> bool {
        let mut eval = self.evaluator();
        eval.step_multiple(input);
        eval.is_accepting()
    }

    /// Gets an evaluator, a struct used to run input strings through the
    /// automaton one state set at a time.
    pub fn evaluator(&self) -> NfaEvaluator<'_> {
        self.into()
    }

    /// Converts a HashSet (which is not hashable) to a sorted Vec (which is)
    /// in a deterministic way
    fn set_to_vec(set: &HashSet<usize>) -> Vec<usize> {
        let mut vec: Vec<usize> = set.iter().copied().collect();
        vec.sort_unstable();
        vec
    }

    /// Gets the states of this NFA
    pub fn states(&self) -> &[NfaState] {
        self.states.as_slice()
    }

    /// Gets the index of the start state
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Gets the index of the accept state
    pub fn accept_index(&self) -> usize {
        self.accept
    }
}
