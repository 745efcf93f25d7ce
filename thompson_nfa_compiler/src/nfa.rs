use std::collections::HashSet;

/// A state ID in the NFA
pub type StateId = usize;

/// A set of NFA states, used for epsilon closures and simulation steps
pub type StateSet = HashSet<StateId>;

/// A transition that consumes exactly one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The character that must be read
    pub symbol: char,
    /// The state reached after reading it
    pub target: StateId,
}

/// A Thompson NFA state
///
/// Thompson's construction only ever gives a state one labelled transition,
/// but any number of epsilon edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Whether the automaton accepts when it ends up here
    pub accepting: bool,
    /// Edges followed without consuming input. May form cycles.
    pub epsilons: Vec<StateId>,
    /// The single labelled transition, if any
    pub transition: Option<Transition>,
}

/// Fragment of an NFA with start and end states
///
/// Fragments are consumed by every composition step. The end state of a
/// fragment that is absorbed into a larger one loses its acceptance flag.
#[derive(Debug, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub end: StateId,
}

/// A Thompson NFA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA {
    /// All states in the NFA, indexed by [`StateId`]
    pub states: Vec<State>,
    /// Starting state
    pub start: StateId,
}

impl NFA {
    /// Create a new empty NFA
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            start: 0,
        }
    }

    /// Number of states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Add a new state and return its ID. Every state of the automaton is
    /// created here.
    pub fn add_state(&mut self, accepting: bool) -> StateId {
        let id = self.states.len();
        self.states.push(State {
            accepting,
            ..State::default()
        });
        id
    }

    /// Add an epsilon edge between two states
    pub fn connect(&mut self, from: StateId, to: StateId) {
        if let Some(state) = self.states.get_mut(from) {
            state.epsilons.push(to);
        }
    }

    /// Set the labelled transition of `from`, replacing any previous one
    pub fn set_transition(&mut self, from: StateId, symbol: char, to: StateId) {
        if let Some(state) = self.states.get_mut(from) {
            state.transition = Some(Transition { symbol, target: to });
        }
    }

    /// Clear the acceptance flag of a state that becomes an inner junction
    pub fn absorb(&mut self, state: StateId) {
        if let Some(state) = self.states.get_mut(state) {
            state.accepting = false;
        }
    }

    /// Get epsilon closure of a set of states
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().cloned().collect();

        while let Some(state_id) = stack.pop() {
            let Some(state) = self.states.get(state_id) else {
                continue;
            };

            for &next in &state.epsilons {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }

        closure
    }

    /// States reached by reading `symbol` from any state of the set, before
    /// taking the epsilon closure
    pub fn step(&self, states: &StateSet, symbol: char) -> StateSet {
        states
            .iter()
            .filter_map(|&id| self.states.get(id)?.transition)
            .filter(|transition| transition.symbol == symbol)
            .map(|transition| transition.target)
            .collect()
    }

    /// Check if any state in the set is accepting
    pub fn is_accepting(&self, states: &StateSet) -> bool {
        states
            .iter()
            .any(|&id| self.states.get(id).map_or(false, |state| state.accepting))
    }

    /// IDs of all states whose acceptance flag is set
    pub fn accepting_states(&self) -> Vec<StateId> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.accepting)
            .map(|(id, _)| id)
            .collect()
    }
}

impl Default for NFA {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NFA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "start: {}", self.start)?;
        for (id, state) in self.states.iter().enumerate() {
            write!(f, "{:>4}{}", id, if state.accepting { " MATCH" } else { "" })?;
            if let Some(transition) = state.transition {
                write!(f, " '{}' -> {}", transition.symbol, transition.target)?;
            }
            if !state.epsilons.is_empty() {
                write!(f, " ε -> {:?}", state.epsilons)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
