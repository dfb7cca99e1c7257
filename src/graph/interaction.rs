use fxhash::{FxHashMap, FxHashSet};
use serde::Serialize;

use super::*;

/// Category a vertex was inserted with. Left vertices are the "users" of an
/// interaction dataset, Right vertices the "items".
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

/// Undirected interaction graph over two conceptual vertex categories.
///
/// Identifiers are interned to dense [`Node`] indices in first-appearance
/// order; all iteration is deterministic in that order. Parallel edges are
/// stored as-is and only show up in degree statistics. Reusing an identifier
/// in both argument positions of [`InteractionGraph::add_edge`] is a caller
/// error and is not detected.
#[derive(Clone, Default)]
pub struct InteractionGraph {
    adj: Vec<Vec<Node>>,
    names: Vec<String>,
    index: FxHashMap<String, Node>,
    left: FxHashSet<Node>,
    right: FxHashSet<Node>,
    number_of_edges: NumEdges,
}

/// Degree statistics of an [`InteractionGraph`]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stats {
    pub number_of_vertices: usize,
    pub number_of_left: usize,
    pub number_of_right: usize,
    pub number_of_edges: NumEdges,
    pub mean_left_degree: f64,
}

impl InteractionGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds the undirected edge between `left` and `right`, interning both
    /// identifiers if they are new. Duplicate edges are kept.
    /// ** Panics if either identifier is empty **
    pub fn add_edge(&mut self, left: &str, right: &str) {
        assert!(!left.is_empty() && !right.is_empty());

        let u = self.intern(left, Side::Left);
        let v = self.intern(right, Side::Right);

        self.adj[u as usize].push(v);
        self.adj[v as usize].push(u);
        self.number_of_edges += 1;
    }

    fn intern(&mut self, name: &str, side: Side) -> Node {
        let node = match self.index.get(name) {
            Some(&node) => node,
            None => {
                let node = self.names.len() as Node;
                self.index.insert(name.to_string(), node);
                self.names.push(name.to_string());
                self.adj.push(Vec::new());
                node
            }
        };

        match side {
            Side::Left => self.left.insert(node),
            Side::Right => self.right.insert(node),
        };

        node
    }

    /// Returns the interned id of `name` if known
    pub fn node_of(&self, name: &str) -> Option<Node> {
        self.index.get(name).copied()
    }

    /// Returns the identifier of `u`.
    /// ** Panics if u >= n **
    pub fn name_of(&self, u: Node) -> &str {
        &self.names[u as usize]
    }

    pub fn is_left(&self, u: Node) -> bool {
        self.left.contains(&u)
    }

    pub fn is_right(&self, u: Node) -> bool {
        self.right.contains(&u)
    }

    pub fn number_of_left(&self) -> usize {
        self.left.len()
    }

    pub fn number_of_right(&self) -> usize {
        self.right.len()
    }

    /// Returns all directed arcs, i.e. every undirected edge twice
    pub fn unordered_edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.vertices()
            .flat_map(|u| self.neighbors_of(u).iter().map(move |&v| (u, v)))
    }

    /// Degree statistics over the current adjacency structure
    pub fn stats(&self) -> Stats {
        let left_degree_sum: usize = self
            .left
            .iter()
            .map(|&u| self.neighbors_of(u).len())
            .sum();

        Stats {
            number_of_vertices: self.len(),
            number_of_left: self.left.len(),
            number_of_right: self.right.len(),
            number_of_edges: self.number_of_edges,
            mean_left_degree: if self.left.is_empty() {
                0.0
            } else {
                left_degree_sum as f64 / self.left.len() as f64
            },
        }
    }
}

impl GraphNodeOrder for InteractionGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.names.len() as NumNodes
    }
}

impl GraphEdgeOrder for InteractionGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl AdjacencyList for InteractionGraph {
    fn neighbors_of(&self, u: Node) -> &[Node] {
        &self.adj[u as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_edge_registers_both_endpoints() {
        let mut graph = InteractionGraph::new();
        graph.add_edge("alice", "matrix");

        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 1);

        let alice = graph.node_of("alice").unwrap();
        let matrix = graph.node_of("matrix").unwrap();

        assert!(graph.is_left(alice));
        assert!(graph.is_right(matrix));
        assert_eq!(graph.neighbors_of(alice), [matrix]);
        assert_eq!(graph.neighbors_of(matrix), [alice]);
    }

    #[test]
    fn interning_is_first_appearance_order() {
        let mut graph = InteractionGraph::new();
        graph.add_edge("u2", "f1");
        graph.add_edge("u1", "f1");

        assert_eq!(graph.name_of(0), "u2");
        assert_eq!(graph.name_of(1), "f1");
        assert_eq!(graph.name_of(2), "u1");
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut graph = InteractionGraph::new();
        graph.add_edge("u", "f");
        graph.add_edge("u", "f");

        let u = graph.node_of("u").unwrap();
        assert_eq!(graph.degree_of(u), 2);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.number_of_nodes(), 2);
    }

    #[test]
    #[should_panic]
    fn empty_identifier_panics() {
        let mut graph = InteractionGraph::new();
        graph.add_edge("", "f");
    }

    #[test]
    fn stats_count_parallel_edges() {
        let mut graph = InteractionGraph::new();
        graph.add_edge("u1", "f1");
        graph.add_edge("u1", "f1");
        graph.add_edge("u1", "f2");
        graph.add_edge("u2", "f2");

        let stats = graph.stats();
        assert_eq!(stats.number_of_vertices, 4);
        assert_eq!(stats.number_of_left, 2);
        assert_eq!(stats.number_of_right, 2);
        assert_eq!(stats.number_of_edges, 4);
        assert_eq!(stats.mean_left_degree, 2.0);
    }
}
