//! Tracklister - Build a tracklist from a list of track drops
//!
//! This library reads "Artist - Track" records, links each record to the one
//! that followed it, shuffles those transitions and walks them depth-first to
//! produce a tracklist without repeats.

/// Parsing, graph building, shuffling, traversal and output of tracklists
pub mod tracklist;
