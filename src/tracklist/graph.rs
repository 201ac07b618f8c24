use rustc_hash::FxHashMap;

use crate::tracklist::entities::{TrackKey, TrackPair};

/// Directed graph of transitions between tracks.
///
/// Every key seen in the input is a node, even without outgoing edges. Edges
/// keep input order until shuffled, and repeated transitions stay as
/// separate edges.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: FxHashMap<TrackKey, Vec<TrackKey>>,
}

impl Graph {
    /// Build the graph from pairs in input order. Each pair gets an edge to the one after it.
    pub fn from_pairs(pairs: &[TrackPair]) -> Self {
        let keys: Vec<TrackKey> = pairs.iter().map(TrackPair::key).collect();

        let mut adjacency: FxHashMap<TrackKey, Vec<TrackKey>> = FxHashMap::default();
        for key in &keys {
            adjacency.entry(key.clone()).or_default();
        }

        for window in keys.windows(2) {
            if let Some(edges) = adjacency.get_mut(&window[0]) {
                edges.push(window[1].clone());
            }
        }

        Graph { adjacency }
    }

    /// Outgoing edges of a node, empty for unknown keys
    pub fn neighbors(&self, key: &TrackKey) -> &[TrackKey] {
        self.adjacency
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the key is a node of the graph
    #[cfg(test)]
    pub(crate) fn contains(&self, key: &TrackKey) -> bool {
        self.adjacency.contains_key(key)
    }

    /// Number of distinct tracks
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of transitions, duplicates included
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Nodes in unspecified order
    #[cfg(test)]
    pub(crate) fn nodes(&self) -> impl Iterator<Item = &TrackKey> {
        self.adjacency.keys()
    }

    pub(crate) fn edge_lists_mut(&mut self) -> impl Iterator<Item = &mut Vec<TrackKey>> {
        self.adjacency.values_mut()
    }
}
