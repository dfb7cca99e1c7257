use std::collections::VecDeque;
use std::ops::Index;

use log::{debug, trace};

use super::*;

/// State of a vertex during and after a two-coloring pass
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Unvisited,
    A,
    B,
}

impl Color {
    /// ** Panics on [`Color::Unvisited`] **
    pub fn opposite(self) -> Self {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
            Color::Unvisited => panic!("unvisited vertices have no opposite color"),
        }
    }
}

/// Color of every known vertex, indexed by [`Node`].
///
/// Recomputed from scratch by each [`BipartiteCheck::is_bipartite`] call and
/// never stored on the graph. After a negative verdict the map is partial:
/// vertices the aborted search never reached stay [`Color::Unvisited`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorMap(Vec<Color>);

impl ColorMap {
    fn new(n: NumNodes) -> Self {
        Self(vec![Color::Unvisited; n as usize])
    }

    fn set(&mut self, u: Node, color: Color) {
        self.0[u as usize] = color;
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Node, Color)> + '_ {
        self.0.iter().enumerate().map(|(u, &c)| (u as Node, c))
    }
}

impl Index<Node> for ColorMap {
    type Output = Color;

    fn index(&self, u: Node) -> &Color {
        &self.0[u as usize]
    }
}

pub trait BipartiteCheck {
    /// Verifies bipartiteness by BFS two-coloring.
    ///
    /// Every still-unvisited vertex (in interning order) seeds its own BFS
    /// colored [`Color::A`], so disconnected components each get an
    /// independent, only locally meaningful coloring. The first edge joining
    /// two same-colored vertices proves an odd cycle; the whole check stops
    /// there and returns the coloring as far as it got. A negative verdict is
    /// a normal result, not an error.
    fn is_bipartite(&self) -> (bool, ColorMap);

    /// Returns true iff no edge joins two vertices of the same color
    fn is_proper_two_coloring(&self, colors: &ColorMap) -> bool;
}

impl<G: AdjacencyList> BipartiteCheck for G {
    fn is_bipartite(&self) -> (bool, ColorMap) {
        let mut colors = ColorMap::new(self.number_of_nodes());
        let mut queue = VecDeque::new();

        for seed in self.vertices() {
            if colors[seed] != Color::Unvisited {
                continue;
            }

            debug!("starting BFS at vertex {seed}");
            colors.set(seed, Color::A);
            queue.push_back(seed);

            while let Some(u) = queue.pop_front() {
                let u_color = colors[u];

                for &v in self.neighbors_of(u) {
                    if colors[v] == Color::Unvisited {
                        colors.set(v, u_color.opposite());
                        trace!("coloring vertex {v} {:?}", colors[v]);
                        queue.push_back(v);
                    } else if colors[v] == u_color {
                        debug!("odd-cycle conflict at edge ({u}, {v})");
                        return (false, colors);
                    }
                }
            }
        }

        (true, colors)
    }

    fn is_proper_two_coloring(&self, colors: &ColorMap) -> bool {
        self.vertices()
            .all(|u| self.neighbors_of(u).iter().all(|&v| colors[v] != colors[u]))
    }
}
