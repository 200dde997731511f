//! Dependency graph over a fragment set, for diagnostics.
//!
//! The resolver itself never consults this graph for ordering; it is used to
//! explain a resolution: which dependencies are unresolved, whether a cycle
//! keeps the resolver from settling, whether a given order violates any
//! dependency, and what a fragment's dependency tree looks like.

use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::fragment::Fragment;

/// Color states for cycle detection using DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Node has not been visited.
    White,
    /// Node is currently being visited (in the DFS stack).
    Gray,
    /// Node has been fully visited.
    Black,
}

/// A dependent placed before one of its providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderingViolation {
    /// The fragment declaring the dependency
    pub dependent: String,
    /// The fragment exposing the dependency, found later in the order
    pub provider: String,
}

impl fmt::Display for OrderingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' appears before its dependency '{}'", self.dependent, self.provider)
    }
}

/// Directed graph with an edge `dependent → provider` per resolvable dependency.
///
/// Nodes are fragments, labelled by effective name, in input order. Each
/// dependency token links to the first fragment exposing it; tokens that no
/// fragment exposes are recorded as unresolved. Self-references add no edge.
pub struct FragmentGraph {
    /// The underlying directed graph.
    graph: DiGraph<String, ()>,
    /// Map from effective names to graph indices (first fragment wins).
    node_map: HashMap<String, NodeIndex>,
    /// (dependent, token) pairs with no provider, in input order.
    unresolved: Vec<(String, String)>,
}

impl FragmentGraph {
    /// Build the graph for a fragment sequence.
    pub fn build(fragments: &[Fragment]) -> Self {
        let mut graph = DiGraph::with_capacity(fragments.len(), fragments.len());
        let mut node_map = HashMap::new();
        let mut unresolved = Vec::new();

        let indices: Vec<NodeIndex> = fragments
            .iter()
            .map(|fragment| {
                let name = fragment.effective_name().to_string();
                let index = graph.add_node(name.clone());
                node_map.entry(name).or_insert(index);
                index
            })
            .collect();

        for (from, fragment) in fragments.iter().enumerate() {
            for dependency in &fragment.dependencies {
                match fragments.iter().position(|candidate| candidate.exposes(dependency)) {
                    Some(to) if to == from => {}
                    Some(to) => {
                        let (from_idx, to_idx) = (indices[from], indices[to]);
                        if !graph.contains_edge(from_idx, to_idx) {
                            graph.add_edge(from_idx, to_idx, ());
                        }
                    }
                    None => unresolved
                        .push((fragment.effective_name().to_string(), dependency.clone())),
                }
            }
        }

        Self {
            graph,
            node_map,
            unresolved,
        }
    }

    /// Dependencies that no fragment exposes, as `(dependent, token)` pairs.
    pub fn unresolved(&self) -> &[(String, String)] {
        &self.unresolved
    }

    /// Detect a cycle using DFS with colors.
    ///
    /// Returns the cycle as a closed path of names (`[a, b, a]`), or `None`
    /// if the graph is acyclic.
    pub fn detect_cycle(&self) -> Option<Vec<String>> {
        let mut colors: HashMap<NodeIndex, Color> =
            self.graph.node_indices().map(|node| (node, Color::White)).collect();
        let mut path: Vec<NodeIndex> = Vec::new();

        for node in self.graph.node_indices() {
            if matches!(colors.get(&node), Some(Color::White))
                && let Some(cycle) = self.dfs_visit(node, &mut colors, &mut path)
            {
                return Some(cycle.into_iter().map(|idx| self.graph[idx].clone()).collect());
            }
        }

        None
    }

    /// DFS visit for cycle detection.
    fn dfs_visit(
        &self,
        node: NodeIndex,
        colors: &mut HashMap<NodeIndex, Color>,
        path: &mut Vec<NodeIndex>,
    ) -> Option<Vec<NodeIndex>> {
        colors.insert(node, Color::Gray);
        path.push(node);

        for neighbor in self.graph.neighbors(node) {
            match colors.get(&neighbor) {
                Some(Color::Gray) => {
                    let start = path.iter().position(|n| *n == neighbor).unwrap_or(0);
                    let mut cycle = path[start..].to_vec();
                    // Add the node again to show the cycle closes
                    cycle.push(neighbor);
                    return Some(cycle);
                }
                Some(Color::White) => {
                    if let Some(cycle) = self.dfs_visit(neighbor, colors, path) {
                        return Some(cycle);
                    }
                }
                _ => {}
            }
        }

        path.pop();
        colors.insert(node, Color::Black);
        None
    }

    /// Names of every fragment `name` depends on, directly or indirectly.
    pub fn transitive_dependencies(&self, name: &str) -> HashSet<String> {
        let mut deps = HashSet::new();
        let mut queue = VecDeque::new();

        if let Some(&start) = self.node_map.get(name) {
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                for neighbor in self.graph.neighbors(current) {
                    if deps.insert(self.graph[neighbor].clone()) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        deps
    }

    /// Direct dependencies of `name`, in declaration order.
    pub fn direct_dependencies(&self, name: &str) -> Vec<String> {
        let Some(&index) = self.node_map.get(name) else {
            return Vec::new();
        };
        // petgraph yields the most recently added edge first
        let mut deps: Vec<String> =
            self.graph.neighbors(index).map(|idx| self.graph[idx].clone()).collect();
        deps.reverse();
        deps
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Build a human-readable dependency tree rooted at `root`.
    pub fn to_tree_string(&self, root: &str) -> String {
        let mut result = String::new();
        let mut visited = HashSet::new();
        self.build_tree_string(root, &mut result, "", true, &mut visited);
        result
    }

    fn build_tree_string(
        &self,
        node: &str,
        result: &mut String,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<String>,
    ) {
        let connector = if is_last {
            "└── "
        } else {
            "├── "
        };
        result.push_str(&format!("{prefix}{connector}{node}\n"));

        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };

        if !visited.insert(node.to_string()) {
            result.push_str(&format!("{child_prefix}└── (circular reference)\n"));
            return;
        }

        let deps = self.direct_dependencies(node);
        for (i, dep) in deps.iter().enumerate() {
            let is_last_child = i == deps.len() - 1;
            self.build_tree_string(dep, result, &child_prefix, is_last_child, visited);
        }

        visited.remove(node);
    }
}

/// Every place in `order` where a dependent precedes a provider.
///
/// This is the ordering invariant check: an empty result means each
/// fragment comes after every fragment exposing one of its dependencies.
pub fn ordering_violations(order: &[Fragment]) -> Vec<OrderingViolation> {
    let mut violations = Vec::new();

    for (position, dependent) in order.iter().enumerate() {
        for provider in &order[position + 1..] {
            if dependent.depends_on(provider) {
                violations.push(OrderingViolation {
                    dependent: dependent.effective_name().to_string(),
                    provider: provider.effective_name().to_string(),
                });
            }
        }
    }

    violations
}
