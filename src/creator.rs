use log::{debug, info};
use std::path::PathBuf;
use tracklister::tracklist::{
    Graph, TrackKey, TrackPair,
    errors::{Error, Result},
    find_tracklist, read_pairs, save_tracklist, seeded_rng, shuffle_edges,
};

const DEFAULT_INPUT: &str = "drops.txt";
const DEFAULT_OUTPUT: &str = "tracklist.txt";

// Configuration for the Creator struct
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

pub struct ConfigBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    seed: Option<u64>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            seed: None, // Seeded from the wall clock when not set
        }
    }

    pub fn input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input;
        self
    }

    pub fn output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Config {
        Config {
            input: self.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: self.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            seed: self.seed,
        }
    }
}

// Runs the whole pipeline: parse, build graph, shuffle, walk, write
pub struct Creator {
    config: Config,
}

impl Creator {
    pub fn new(config: Config) -> Self {
        Creator { config }
    }

    pub fn create(&self) -> Result<Vec<TrackKey>> {
        debug!("Reading drops from {:?} ...", self.config.input);
        let pairs = read_pairs(&self.config.input)?;

        let mut graph = Graph::from_pairs(&pairs);
        debug!(
            "Built graph with {} tracks and {} transitions",
            graph.node_count(),
            graph.edge_count()
        );

        let (mut rng, seed) = seeded_rng(self.config.seed);
        debug!("Shuffling transitions with seed {seed}");
        shuffle_edges(&mut graph, &mut rng);

        let start = pairs
            .first()
            .map(TrackPair::key)
            .ok_or_else(|| Error::EmptyInput(self.config.input.clone()))?;
        let tracklist = find_tracklist(&graph, &start);

        save_tracklist(&tracklist, &self.config.output)?;
        info!(
            "Tracklist of {} tracks generated and written to {:?}",
            tracklist.len(),
            self.config.output
        );
        Ok(tracklist)
    }
}
