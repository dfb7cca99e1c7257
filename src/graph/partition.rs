use fxhash::FxHashSet;

use super::*;

/// Groups vertices by their assigned color.
///
/// Vertices still [`Color::Unvisited`] (possible when the producing check
/// aborted on a conflict) belong to neither set.
pub fn partition(colors: &ColorMap) -> (FxHashSet<Node>, FxHashSet<Node>) {
    let mut class_a = FxHashSet::default();
    let mut class_b = FxHashSet::default();

    for (u, color) in colors.iter() {
        match color {
            Color::A => class_a.insert(u),
            Color::B => class_b.insert(u),
            Color::Unvisited => false,
        };
    }

    (class_a, class_b)
}

impl InteractionGraph {
    /// Same grouping as [`partition`] with ids resolved back to identifiers
    pub fn partition_names(&self, colors: &ColorMap) -> (FxHashSet<&str>, FxHashSet<&str>) {
        let (class_a, class_b) = partition(colors);
        let resolve =
            |class: FxHashSet<Node>| class.into_iter().map(|u| self.name_of(u)).collect();
        (resolve(class_a), resolve(class_b))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn movie_graph() -> InteractionGraph {
        let mut graph = InteractionGraph::new();
        graph.add_edge("Alice", "Matrix");
        graph.add_edge("Alice", "Inception");
        graph.add_edge("Bob", "Matrix");
        graph.add_edge("Bob", "Avatar");
        graph.add_edge("Carlos", "Inception");
        graph.add_edge("Carlos", "Avatar");
        graph
    }

    #[test]
    fn users_and_movies_end_up_in_different_classes() {
        let graph = movie_graph();
        let (bipartite, colors) = graph.is_bipartite();
        assert!(bipartite);

        let (class_a, class_b) = graph.partition_names(&colors);

        let users: FxHashSet<&str> = ["Alice", "Bob", "Carlos"].into_iter().collect();
        let movies: FxHashSet<&str> = ["Matrix", "Inception", "Avatar"].into_iter().collect();

        if class_a.contains("Alice") {
            assert_eq!(class_a, users);
            assert_eq!(class_b, movies);
        } else {
            assert_eq!(class_a, movies);
            assert_eq!(class_b, users);
        }
    }

    #[test]
    fn every_edge_crosses_the_partition() {
        let graph = movie_graph();
        let (bipartite, colors) = graph.is_bipartite();
        assert!(bipartite);

        let (class_a, class_b) = partition(&colors);
        for (u, v) in graph.unordered_edges() {
            assert_ne!(class_a.contains(&u), class_a.contains(&v));
            assert_ne!(class_b.contains(&u), class_b.contains(&v));
        }
    }

    #[test]
    fn unvisited_vertices_are_excluded() {
        let mut graph = InteractionGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");
        graph.add_edge("c", "a");
        graph.add_edge("x", "y");

        let (bipartite, colors) = graph.is_bipartite();
        assert!(!bipartite);

        let (class_a, class_b) = partition(&colors);
        let x = graph.node_of("x").unwrap();
        assert!(!class_a.contains(&x) && !class_b.contains(&x));
    }

    #[test]
    fn partition_of_disconnected_components_is_their_union() {
        let mut graph = InteractionGraph::new();
        graph.add_edge("u1", "f1");
        graph.add_edge("u2", "f2");

        let (bipartite, colors) = graph.is_bipartite();
        assert!(bipartite);

        let (class_a, class_b) = graph.partition_names(&colors);
        assert_eq!(
            class_a.iter().copied().sorted().collect_vec(),
            vec!["u1", "u2"]
        );
        assert_eq!(
            class_b.iter().copied().sorted().collect_vec(),
            vec!["f1", "f2"]
        );
    }
}
