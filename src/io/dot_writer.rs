use std::io::Write;

use super::super::graph::*;

/// produces a minimalistic DOT representation of the graph with the two
/// color classes rendered as filled node groups
pub trait DotWriter {
    fn try_write_dot<W: Write>(&self, writer: W, colors: &ColorMap) -> Result<(), std::io::Error>;
}

impl DotWriter for InteractionGraph {
    fn try_write_dot<W: Write>(
        &self,
        mut writer: W,
        colors: &ColorMap,
    ) -> Result<(), std::io::Error> {
        writeln!(writer, "graph G {{")?;

        for u in self.vertices() {
            let style = match colors[u] {
                Color::A => " fillcolor=lightblue style=filled",
                Color::B => " fillcolor=lightyellow style=filled",
                Color::Unvisited => "",
            };
            writeln!(writer, "  v{u} [label={:?}{style}];", self.name_of(u))?;
        }

        for (u, v) in self.unordered_edges() {
            if u < v {
                writeln!(writer, "  v{u} -- v{v};")?;
            }
        }

        writeln!(writer, "}}")
    }
}
