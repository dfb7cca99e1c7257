use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub use crate::graph::*;

pub fn rng(seed: u64) -> Pcg64Mcg {
    Pcg64Mcg::seed_from_u64(seed)
}

/// Random user-item interaction graph; bipartite by construction since every
/// edge joins a `user*` with an `item*` identifier
pub fn random_interactions(
    rng: &mut impl Rng,
    users: u32,
    items: u32,
    edges: usize,
) -> InteractionGraph {
    let mut graph = InteractionGraph::new();

    for _ in 0..edges {
        let user = rng.gen_range(0..users);
        let item = rng.gen_range(0..items);
        graph.add_edge(&format!("user{user}"), &format!("item{item}"));
    }

    graph
}
