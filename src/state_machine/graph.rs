use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{Bfs, EdgeRef};
use serde::Serialize;
use std::collections::HashMap;

use crate::state_machine::{TransitionKind, View};

/// A labelled navigation edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEdge {
    pub action: TransitionKind,
    /// Argument that selects this edge, e.g. "owner" or "wizard"
    pub argument: Option<&'static str>,
}

impl NavEdge {
    fn new(action: TransitionKind) -> Self {
        Self {
            action,
            argument: None,
        }
    }

    fn with_argument(action: TransitionKind, argument: &'static str) -> Self {
        Self {
            action,
            argument: Some(argument),
        }
    }

    pub fn display_label(&self) -> String {
        match self.argument {
            Some(arg) => format!("{}({})", self.action, arg),
            None => self.action.to_string(),
        }
    }
}

/// Directed graph of the view-changing transitions.
///
/// Nodes are views and edges are the transitions that move between them.
/// Profile updates never change the view and are left out.
pub struct NavigationGraph {
    pub graph: StableGraph<View, NavEdge>,

    /// Lookup from view to its node
    pub view_index: HashMap<View, NodeIndex>,
}

impl NavigationGraph {
    pub fn build() -> Self {
        let mut nav = Self {
            graph: StableGraph::new(),
            view_index: HashMap::new(),
        };

        for view in View::ALL {
            let idx = nav.graph.add_node(*view);
            nav.view_index.insert(*view, idx);
        }

        let edges = [
            (
                View::PlatformSelection,
                View::Login,
                NavEdge::with_argument(TransitionKind::SelectPlatform, "owner"),
            ),
            (
                View::PlatformSelection,
                View::BuyerRegistration,
                NavEdge::with_argument(TransitionKind::SelectPlatform, "buyer"),
            ),
            (View::Login, View::Questionnaire, NavEdge::new(TransitionKind::Login)),
            (
                View::BuyerRegistration,
                View::BuyerPlatformChoice,
                NavEdge::new(TransitionKind::CompleteBuyerRegistration),
            ),
            (
                View::Questionnaire,
                View::Dashboard,
                NavEdge::new(TransitionKind::CompleteOnboarding),
            ),
            (
                View::BuyerPlatformChoice,
                View::Wizard,
                NavEdge::with_argument(TransitionKind::SelectBuyerPath, "wizard"),
            ),
            (
                View::BuyerPlatformChoice,
                View::VehicleBrowser,
                NavEdge::with_argument(TransitionKind::SelectBuyerPath, "database"),
            ),
            (
                View::Wizard,
                View::Recommendations,
                NavEdge::new(TransitionKind::CompleteWizard),
            ),
        ];

        for (from, to, edge) in edges {
            nav.add_edge(from, to, edge);
        }

        for view in View::ALL {
            if *view != View::PlatformSelection {
                nav.add_edge(
                    *view,
                    View::PlatformSelection,
                    NavEdge::new(TransitionKind::Logout),
                );
            }
        }

        nav
    }

    fn add_edge(&mut self, from: View, to: View, edge: NavEdge) {
        let (a, b) = (self.view_index[&from], self.view_index[&to]);
        self.graph.add_edge(a, b, edge);
    }

    pub fn initial_view(&self) -> View {
        View::PlatformSelection
    }

    /// Views whose only way out is logout
    pub fn steady_state_views(&self) -> Vec<View> {
        let mut views: Vec<View> = self
            .graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Outgoing)
                    .all(|e| e.weight().action == TransitionKind::Logout)
            })
            .filter_map(|idx| self.graph.node_weight(idx).copied())
            .collect();
        views.sort();
        views
    }

    /// Views reachable from `start`, including itself, in breadth-first order
    pub fn reachable_from(&self, start: View) -> Vec<View> {
        let mut bfs = Bfs::new(&self.graph, self.view_index[&start]);
        let mut views = Vec::new();
        while let Some(idx) = bfs.next(&self.graph) {
            if let Some(view) = self.graph.node_weight(idx) {
                views.push(*view);
            }
        }
        views
    }

    /// Outgoing edges of `view` as (label, target) pairs
    pub fn exits(&self, view: View) -> Vec<(String, View)> {
        let mut exits: Vec<(String, View)> = self
            .graph
            .edges_directed(self.view_index[&view], Direction::Outgoing)
            .filter_map(|e| {
                self.graph
                    .node_weight(e.target())
                    .map(|to| (e.weight().display_label(), *to))
            })
            .collect();
        exits.sort();
        exits
    }

    /// All edges as (from, label, to), sorted for stable output
    pub fn edges(&self) -> Vec<(View, String, View)> {
        let mut edges: Vec<(View, String, View)> = self
            .graph
            .edge_indices()
            .filter_map(|idx| {
                let (a, b) = self.graph.edge_endpoints(idx)?;
                Some((
                    *self.graph.node_weight(a)?,
                    self.graph.edge_weight(idx)?.display_label(),
                    *self.graph.node_weight(b)?,
                ))
            })
            .collect();
        edges.sort();
        edges
    }

    /// Export to DOT format for Graphviz
    pub fn to_dot(&self) -> String {
        let mut dot = "digraph Navigation {\n".to_string();
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=box, style=filled];\n\n");

        for view in View::ALL {
            let color = if *view == self.initial_view() {
                "lightblue"
            } else if view.is_steady_state() {
                "lightgreen"
            } else {
                "white"
            };
            dot.push_str(&format!(
                "  \"{}\" [fillcolor=\"{}\"];\n",
                view, color
            ));
        }

        dot.push('\n');

        for (from, label, to) in self.edges() {
            let style = if label == TransitionKind::Logout.as_str() {
                ", style=dashed"
            } else {
                ""
            };
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"{}];\n",
                from, to, label, style
            ));
        }

        dot.push_str("}\n");
        dot
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_views: self.graph.node_count(),
            total_transitions: self.graph.edge_count(),
            steady_state_views: self.steady_state_views().len(),
            reachable_views: self.reachable_from(self.initial_view()).len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub total_views: usize,
    pub total_transitions: usize,
    pub steady_state_views: usize,
    pub reachable_views: usize,
}
