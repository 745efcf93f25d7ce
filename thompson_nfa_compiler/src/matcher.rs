use crate::nfa::{NFA, StateSet};

/// A matcher that simulates a Thompson NFA against whole words
///
/// The set of live states is recomputed for every character; no DFA is ever
/// built, so a step costs at most the number of states.
pub struct Matcher<'a> {
    nfa: &'a NFA,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: &'a NFA) -> Self {
        Self { nfa }
    }

    /// States live before any input is read
    pub fn start_states(&self) -> StateSet {
        let mut start = StateSet::new();
        start.insert(self.nfa.start);
        self.nfa.epsilon_closure(&start)
    }

    /// Advance a set of live states by one character
    pub fn step_states(&self, current_states: &StateSet, symbol: char) -> StateSet {
        let next_states = self.nfa.step(current_states, symbol);
        self.nfa.epsilon_closure(&next_states)
    }

    /// Check if the entire input matches
    pub fn is_match(&self, input: &str) -> bool {
        let mut current_states = self.start_states();

        for symbol in input.chars() {
            current_states = self.step_states(&current_states, symbol);
            if current_states.is_empty() {
                return false;
            }
        }

        self.nfa.is_accepting(&current_states)
    }
}
