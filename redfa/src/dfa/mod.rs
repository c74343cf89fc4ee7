//! # Deterministic Finite Automaton
//! The DFA module includes the [Dfa] struct, the final form of a compiled
//! regular expression. A [Dfa] is created from an [Nfa](crate::nfa::Nfa) by
//! the [subset construction](crate::nfa::Nfa::to_dfa) and is usually
//! [minimized](Dfa::minimize) before use.
//!
//! A DFA here has at most one transition per state and symbol; a symbol with
//! no transition leads to the implicit reject trap, which is never stored.
//! Accepting states carry a flag rather than living in a separate set, so the
//! whole automaton is one dense state table that evaluation walks by index.
//!
//! ## Example
//! ```
//! use redfa::parser;
//!
//! let nfa = parser::regex("(a|b)*abb").unwrap();
//! let mut dfa = nfa.to_dfa();
//! let unminimized = dfa.states().len();
//! dfa.minimize();
//! assert!(dfa.states().len() <= unminimized);
//!
//! assert!(dfa.accepts("abb"));
//! assert!(dfa.accepts("ababb"));
//! assert!(!dfa.accepts("ab"));
//! ```
//!
//! After minimization the automaton is not mutated again; a `&Dfa` may be
//! shared freely (also across threads) for evaluation.

use crate::alphabet;
pub use eval::DfaEvaluator;
use std::collections::HashSet;

pub mod eval;

/// A deterministic finite automaton, denoted by its state table and its start
/// state. Missing transitions are the implicit reject trap. See the
/// [module-level documentation](crate::dfa) for more info.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa {
    pub(crate) states: Vec<DfaState>,
    pub(crate) start: usize,
}

/// A state in a [Dfa]: whether it is accepting, and its outgoing transitions
/// as `(symbol, target)` pairs with at most one entry per symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DfaState {
    pub(crate) accepting: bool,
    pub(crate) transitions: Vec<(char, usize)>,
}

impl DfaState {
    /// Checks if this state is accepting
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Gets the outgoing transitions of this state
    pub fn transitions(&self) -> &[(char, usize)] {
        self.transitions.as_slice()
    }
}

impl Dfa {
    /// The transition function: the target of the transition out of `state`
    /// labelled `symbol`, or `None` for the implicit reject trap.
    pub fn delta(&self, state: usize, symbol: char) -> Option<usize> {
        self.states[state]
            .transitions
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, target)| target)
    }

    /// Checks if this automaton accepts the given string: the empty string is
    /// accepted iff the start state is accepting, and reaching the trap on any
    /// character rejects immediately.
    pub fn accepts(&self, input: &str) -> bool {
        let mut eval = self.evaluator();
        eval.step_multiple(input);
        eval.is_accepting()
    }

    /// Gets an evaluator, a struct used to run input strings through the
    /// automaton one state at a time.
    pub fn evaluator(&self) -> DfaEvaluator<'_> {
        self.into()
    }

    /// Minimizes this DFA in place by partition refinement, so that no two
    /// remaining states are behaviourally equivalent. The subset construction
    /// only produces reachable states, so refinement alone suffices; the
    /// result accepts exactly the same language.
    ///
    /// ```
    /// use redfa::parser;
    ///
    /// let mut dfa = parser::regex("a*").unwrap().to_dfa();
    /// assert_eq!(dfa.states().len(), 2);
    /// dfa.minimize();
    /// assert_eq!(dfa.states().len(), 1);
    /// assert!(dfa.accepts("aaa"));
    /// assert!(!dfa.accepts("b"));
    /// ```
    pub fn minimize(&mut self) {
        let partition = self.equivalence_classes();
        let block_of = Self::block_index(&partition, self.states.len());

        // Rebuild: one new state per block, numbered by position in the
        // partition. Duplicate transitions from several old states of the same
        // block are coalesced by keeping the first.
        let mut states = vec![DfaState::default(); partition.len()];
        for (b, block) in partition.iter().enumerate() {
            for &old in block {
                if self.states[old].accepting {
                    states[b].accepting = true;
                }
                for &(symbol, target) in &self.states[old].transitions {
                    if states[b].transitions.iter().all(|&(s, _)| s != symbol) {
                        states[b].transitions.push((symbol, block_of[target]));
                    }
                }
            }
        }

        self.start = block_of[self.start];
        self.states = states;
    }

    /// Computes the partition of this DFA's states into equivalence classes
    /// of behaviourally indistinguishable states. Starts from the
    /// accepting/non-accepting split (dropping an empty side) and repeatedly
    /// splits blocks whose members disagree, for some symbol, on which block
    /// their successor lies in, where "no successor" (the trap) is its own
    /// signature. The loop ends when a full pass performs no split.
    pub fn equivalence_classes(&self) -> Vec<Vec<usize>> {
        let (finals, nonfinals): (Vec<usize>, Vec<usize>) =
            (0..self.states.len()).partition(|&idx| self.states[idx].accepting);

        let mut partition = Vec::new();
        if !finals.is_empty() {
            partition.push(finals);
        }
        if !nonfinals.is_empty() {
            partition.push(nonfinals);
        }

        loop {
            let mut changed = false;
            let mut b = 0;
            // New blocks appended during the pass are scanned in the same
            // pass, against the partition as it then stands
            while b < partition.len() {
                if partition[b].len() > 1 {
                    let block_of = Self::block_index(&partition, self.states.len());
                    if let Some((moved, kept)) = self.split_block(&partition[b], &block_of) {
                        partition[b] = kept;
                        partition.push(moved);
                        changed = true;
                    }
                }
                b += 1;
            }
            if !changed {
                break;
            }
        }
        partition
    }

    /// Finds the first symbol on which two states of `block` disagree and
    /// splits the block around it: the states whose signature matches the
    /// first differing state move to a new block. Returns `None` if the block
    /// is uniform over the whole alphabet.
    fn split_block(
        &self,
        block: &[usize],
        block_of: &[usize],
    ) -> Option<(Vec<usize>, Vec<usize>)> {
        for symbol in alphabet::symbols() {
            let signature = |q: usize| self.delta(q, symbol).map(|target| block_of[target]);
            let reference = signature(block[0]);
            if let Some(&differing) = block.iter().find(|&&q| signature(q) != reference) {
                let wanted = signature(differing);
                let (moved, kept) = block.iter().copied().partition(|&q| signature(q) == wanted);
                return Some((moved, kept));
            }
        }
        None
    }

    /// Maps every state id to the index of the partition block holding it.
    fn block_index(partition: &[Vec<usize>], state_count: usize) -> Vec<usize> {
        let mut block_of = vec![0; state_count];
        for (b, block) in partition.iter().enumerate() {
            for &q in block {
                block_of[q] = b;
            }
        }
        block_of
    }

    /// Checks if this DFA accepts the same language as another DFA, by
    /// exploring pairs of states reachable on the same input. The implicit
    /// trap takes part as `None`, so two automata with differently shaped
    /// trap behaviour still compare correctly.
    ///
    /// ```
    /// let a = redfa::compile("(a|b)*").unwrap();
    /// let b = redfa::compile("(b|a)*").unwrap();
    /// let c = redfa::compile("a*").unwrap();
    /// assert!(a.equivalent_to(&b));
    /// assert!(!a.equivalent_to(&c));
    /// ```
    pub fn equivalent_to(&self, other: &Dfa) -> bool {
        let initial = (Some(self.start), Some(other.start));
        let mut explored = HashSet::from([initial]);
        let mut to_explore = vec![initial];

        while let Some((s1, s2)) = to_explore.pop() {
            let a1 = s1.map_or(false, |s| self.states[s].accepting);
            let a2 = s2.map_or(false, |s| other.states[s].accepting);
            if a1 != a2 {
                return false;
            }
            for symbol in alphabet::symbols() {
                let pair = (
                    s1.and_then(|s| self.delta(s, symbol)),
                    s2.and_then(|s| other.delta(s, symbol)),
                );
                if pair == (None, None) {
                    continue; // both trapped, nothing left to distinguish
                }
                if explored.insert(pair) {
                    to_explore.push(pair);
                }
            }
        }
        true
    }

    /// Finds the reachable states, that is, all states that can be reached by
    /// some input to the automaton, and returns them as indices
    pub fn reachable_state_idx(&self) -> HashSet<usize> {
        let mut reachables = HashSet::from([self.start]);
        let mut new_states = reachables.clone();
        while !new_states.is_empty() {
            new_states = new_states
                .drain()
                .flat_map(|state| self.states[state].transitions.iter().map(|&(_, t)| t))
                .filter(|&state| reachables.insert(state))
                .collect();
        }
        reachables
    }

    /// Gets the states of this DFA
    pub fn states(&self) -> &[DfaState] {
        self.states.as_slice()
    }

    /// Gets the index of the start state
    pub fn start_index(&self) -> usize {
        self.start
    }
}
