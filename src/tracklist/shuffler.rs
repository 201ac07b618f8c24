use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::tracklist::graph::Graph;

/// Randomly reorder the outgoing edges of every node with more than one edge.
///
/// Node visiting order does not matter, each edge list is shuffled on its own.
pub fn shuffle_edges<R: Rng + ?Sized>(graph: &mut Graph, rng: &mut R) {
    let mut shuffled = 0;
    for edges in graph.edge_lists_mut() {
        if edges.len() > 1 {
            edges.shuffle(rng);
            shuffled += 1;
        }
    }
    debug!("Shuffled edges of {shuffled} tracks");
}

/// Random source for [`shuffle_edges`]. Without an explicit seed the wall clock is used.
/// Returns the seed as well so a run can be reproduced.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(clock_seed);
    (StdRng::seed_from_u64(seed), seed)
}

#[allow(clippy::cast_possible_truncation)]
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
