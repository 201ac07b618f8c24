/// Track pairs and graph keys
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Transition graph between tracks
pub mod graph;
/// Reader for "Artist - Track" drop lists
pub mod parser;
/// Random reordering of graph edges
pub mod shuffler;
/// Depth-first walk producing the tracklist
pub mod traverser;
/// Tracklist output
pub mod writer;

pub use entities::{TrackKey, TrackPair};
pub use graph::Graph;
pub use parser::{PairParser, parse_pairs, read_pairs};
pub use shuffler::{seeded_rng, shuffle_edges};
pub use traverser::find_tracklist;
pub use writer::{save_tracklist, write_tracklist};
