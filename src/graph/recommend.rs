use fxhash::FxHashSet;

use super::*;

impl InteractionGraph {
    /// Two-hop co-occurrence recommendation.
    ///
    /// Collects every Right vertex adjacent to some peer of `vertex` (a peer
    /// is another Left vertex sharing at least one neighbor) that `vertex` is
    /// not itself adjacent to. Pure set membership, no scoring or ranking.
    /// Unknown and non-Left identifiers yield an empty set.
    pub fn recommend(&self, vertex: &str) -> FxHashSet<&str> {
        let Some(u) = self.node_of(vertex) else {
            return FxHashSet::default();
        };

        if !self.is_left(u) {
            return FxHashSet::default();
        }

        let visited: FxHashSet<Node> = self.neighbors_of(u).iter().copied().collect();

        let mut peers: FxHashSet<Node> = FxHashSet::default();
        for &item in self.neighbors_of(u) {
            for &other in self.neighbors_of(item) {
                if other != u && self.is_left(other) {
                    peers.insert(other);
                }
            }
        }

        let mut candidates = FxHashSet::default();
        for &peer in &peers {
            for &item in self.neighbors_of(peer) {
                if self.is_right(item) && !visited.contains(&item) {
                    candidates.insert(self.name_of(item));
                }
            }
        }

        candidates
    }
}
