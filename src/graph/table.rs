//! Serializable transition tables.
//!
//! A table is the interchange form of a [`RuleGraph`]: a list of
//! `(from, to, rule)` rows plus any isolated states. Rows keep their order,
//! so a graph rebuilt from a table dispatches exactly like the original.

use super::RuleGraph;
use crate::core::{Action, Rule, State};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while encoding or decoding a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to parse transition table: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to encode transition table: {0}")]
    Encode(#[source] serde_json::Error),
}

/// One row of a transition table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TableTransition<S: State, A: Action> {
    pub from: S,
    pub to: S,
    pub rule: Rule<A>,
}

/// Transition table from which rule graphs are built.
///
/// # Example
///
/// ```rust
/// use rulegraph::graph::TransitionTable;
/// use rulegraph::{action_enum, state_enum};
///
/// state_enum! {
///     enum Turnstile { Locked, Unlocked }
/// }
/// action_enum! {
///     enum Input { Coin, Pass }
/// }
///
/// let json = r#"{
///     "transitions": [
///         { "from": "Locked", "to": "Unlocked", "rule": { "on": "Coin" } },
///         { "from": "Unlocked", "to": "Locked", "rule": { "on": "Pass" } }
///     ]
/// }"#;
///
/// let graph = TransitionTable::<Turnstile, Input>::from_json(json)
///     .unwrap()
///     .into_graph();
/// assert_eq!(graph.next_state(&Turnstile::Locked, &Input::Coin).unwrap(), Turnstile::Unlocked);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionTable<S: State, A: Action> {
    /// States to register before any row, including isolated ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<S>,

    /// Rows in precedence order.
    #[serde(default)]
    pub transitions: Vec<TableTransition<S, A>>,
}

impl<S: State, A: Action> Default for TransitionTable<S, A> {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }
}

impl<S: State, A: Action> TransitionTable<S, A> {
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        serde_json::from_str(json).map_err(TableError::Parse)
    }

    pub fn to_json(&self) -> Result<String, TableError> {
        serde_json::to_string_pretty(self).map_err(TableError::Encode)
    }

    /// Capture a graph as a table. Every node is listed in `states` so that
    /// node order and isolated nodes survive the round trip.
    pub fn from_graph(graph: &RuleGraph<S, A>) -> Self {
        Self {
            states: graph.nodes().cloned().collect(),
            transitions: graph
                .edges()
                .map(|edge| TableTransition {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    rule: edge.rule.clone(),
                })
                .collect(),
        }
    }

    pub fn into_graph(self) -> RuleGraph<S, A> {
        let mut graph = RuleGraph::new();
        for state in self.states {
            graph.add_node(state);
        }
        for row in self.transitions {
            graph.add_edge(row.from, row.to, row.rule);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum TestState {
            Locked,
            Unlocked,
            Alarm,
        }
    }

    crate::action_enum! {
        enum TestAction {
            Coin,
            Pass,
            Cheat,
        }
    }

    #[test]
    fn parses_rows_in_order() {
        let json = r#"{
            "transitions": [
                { "from": "Locked", "to": "Unlocked", "rule": { "on": "Coin" } },
                { "from": "Locked", "to": "Alarm", "rule": { "any_of": ["Cheat", "Pass"] } },
                { "from": "Alarm", "to": "Alarm", "rule": "any" }
            ]
        }"#;

        let table: TransitionTable<TestState, TestAction> = TransitionTable::from_json(json).unwrap();

        assert!(table.states.is_empty());
        assert_eq!(table.transitions.len(), 3);
        assert_eq!(
            table.transitions[1].rule,
            Rule::AnyOf(vec![TestAction::Cheat, TestAction::Pass])
        );
    }

    #[test]
    fn isolated_states_become_nodes() {
        let json = r#"{ "states": ["Alarm"], "transitions": [] }"#;
        let graph = TransitionTable::<TestState, TestAction>::from_json(json)
            .unwrap()
            .into_graph();

        assert!(graph.contains(&TestState::Alarm));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn unknown_state_is_a_parse_error() {
        let json = r#"{ "transitions": [ { "from": "Open", "to": "Locked", "rule": "any" } ] }"#;
        let result = TransitionTable::<TestState, TestAction>::from_json(json);

        assert!(matches!(result, Err(TableError::Parse(_))));
    }

    #[test]
    fn graph_survives_table_round_trip() {
        let mut graph = RuleGraph::new();
        graph.add_edge(TestState::Locked, TestState::Unlocked, TestAction::Coin);
        graph.add_edge(TestState::Unlocked, TestState::Locked, Rule::AnyExcept(vec![TestAction::Coin]));
        graph.add_node(TestState::Alarm);

        let json = graph.to_table().to_json().unwrap();
        let rebuilt = RuleGraph::from_table(TransitionTable::from_json(&json).unwrap());

        assert!(rebuilt.nodes().eq(graph.nodes()));
        assert!(rebuilt.edges().eq(graph.edges()));
    }
}
