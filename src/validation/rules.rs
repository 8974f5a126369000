//! Audit rules over a machine's transition graph.

use crate::core::StateId;
use crate::machine::StateMachine;
use crate::validation::violations::ConfigViolation;
use std::collections::{HashMap, HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single audit rule.
pub type AuditResult = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Snapshot of the wiring of a machine, independent of its context type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineGraph {
    pub names: Vec<String>,
    pub edges: Vec<(StateId, StateId)>,
}

impl MachineGraph {
    pub fn of<C>(machine: &StateMachine<C>) -> Self {
        let names = (0..machine.state_count())
            .map(|i| {
                machine
                    .state_name(StateId::new(i))
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
        Self {
            names,
            edges: machine.edges(),
        }
    }

    fn is_registered(&self, state: StateId) -> bool {
        state.index() < self.names.len()
    }
}

/// Every transition endpoint must be a registered state.
pub fn registered_endpoints(graph: &MachineGraph) -> AuditResult {
    let mut checks = vec![Validation::success(())];

    for &(from, to) in &graph.edges {
        if !graph.is_registered(from) {
            checks.push(Validation::fail(ConfigViolation::UnregisteredSource {
                from,
                to,
            }));
        }
        if !graph.is_registered(to) {
            checks.push(Validation::fail(ConfigViolation::UnregisteredDestination {
                from,
                to,
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Every registered state must be reachable from the initial state.
///
/// Unregistered states still count as stepping stones: once active, their
/// outgoing transitions are evaluated like any other.
pub fn reachable_states(graph: &MachineGraph) -> AuditResult {
    let mut checks = vec![Validation::success(())];
    let reached = reachable_from(graph, StateId::new(0));

    for (index, name) in graph.names.iter().enumerate() {
        let state = StateId::new(index);
        if !reached.contains(&state) {
            checks.push(Validation::fail(ConfigViolation::UnreachableState {
                state,
                name: name.clone(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn reachable_from(graph: &MachineGraph, initial: StateId) -> HashSet<StateId> {
    let mut reached = HashSet::new();
    if graph.names.is_empty() {
        return reached;
    }

    let mut outgoing: HashMap<StateId, Vec<StateId>> = HashMap::new();
    for &(from, to) in &graph.edges {
        outgoing.entry(from).or_default().push(to);
    }

    let mut queue = VecDeque::from([initial]);
    reached.insert(initial);
    while let Some(state) = queue.pop_front() {
        for &next in outgoing.get(&state).into_iter().flatten() {
            if reached.insert(next) {
                queue.push_back(next);
            }
        }
    }
    reached
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(states: &[&str], edges: &[(usize, usize)]) -> MachineGraph {
        MachineGraph {
            names: states.iter().map(|s| s.to_string()).collect(),
            edges: edges
                .iter()
                .map(|&(from, to)| (StateId::new(from), StateId::new(to)))
                .collect(),
        }
    }

    #[test]
    fn well_formed_graph_passes() {
        let g = graph(&["A", "B"], &[(0, 1), (1, 0)]);
        assert!(registered_endpoints(&g).is_success());
        assert!(reachable_states(&g).is_success());
    }

    #[test]
    fn empty_graph_passes() {
        let g = graph(&[], &[]);
        assert!(registered_endpoints(&g).is_success());
        assert!(reachable_states(&g).is_success());
    }

    #[test]
    fn reports_both_unregistered_endpoints() {
        let g = graph(&["A"], &[(4, 5)]);

        match registered_endpoints(&g) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::UnregisteredSource { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::UnregisteredDestination { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn reports_every_unreachable_state() {
        let g = graph(&["A", "B", "C", "D"], &[(0, 1), (2, 3)]);

        match reachable_states(&g) {
            Validation::Failure(errors) => {
                let mut unreachable: Vec<&str> = errors
                    .iter()
                    .filter_map(|e| match e {
                        ConfigViolation::UnreachableState { name, .. } => Some(name.as_str()),
                        _ => None,
                    })
                    .collect();
                unreachable.sort_unstable();
                assert_eq!(unreachable, vec!["C", "D"]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn unregistered_states_relay_reachability() {
        let g = graph(&["A", "B"], &[(0, 9), (9, 1)]);
        assert!(reachable_states(&g).is_success());
        assert!(registered_endpoints(&g).is_failure());
    }

    #[test]
    fn single_state_is_reachable() {
        let g = graph(&["Only"], &[]);
        assert!(reachable_states(&g).is_success());
    }
}
