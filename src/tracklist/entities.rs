use std::fmt;

/// Separator between artist and track in drop lists and graph keys
pub const SEPARATOR: &str = " - ";

/// A single "Artist - Track" record read from the drop list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPair {
    /// Artist name, everything before the first separator
    pub artist: String,
    /// Track title, everything after the first separator
    pub track: String,
}

impl TrackPair {
    /// Create a pair from its two fields
    pub fn new(artist: impl Into<String>, track: impl Into<String>) -> Self {
        TrackPair {
            artist: artist.into(),
            track: track.into(),
        }
    }

    /// Split a line on the first separator. Titles may contain the separator themselves.
    pub fn split(line: &str) -> Option<Self> {
        line.split_once(SEPARATOR)
            .map(|(artist, track)| TrackPair::new(artist, track))
    }

    /// Both artist and track are present
    pub fn is_complete(&self) -> bool {
        !self.artist.is_empty() && !self.track.is_empty()
    }

    /// Graph key of this pair
    pub fn key(&self) -> TrackKey {
        TrackKey::from(self)
    }
}

/// Node identifier in the transition graph, rendered as "Artist - Track"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackKey(String);

impl TrackKey {
    /// Wrap an already formatted key
    pub fn new(key: impl Into<String>) -> Self {
        TrackKey(key.into())
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&TrackPair> for TrackKey {
    fn from(pair: &TrackPair) -> TrackKey {
        TrackKey(format!("{}{SEPARATOR}{}", pair.artist, pair.track))
    }
}

impl fmt::Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_first_separator_only() {
        let pair = TrackPair::split("Artist - Track - Extended Mix").unwrap();
        assert_eq!(pair.artist, "Artist");
        assert_eq!(pair.track, "Track - Extended Mix");
    }

    #[test]
    fn test_split_without_separator() {
        assert!(TrackPair::split("justtext").is_none());
        assert!(TrackPair::split("Artist-Track").is_none());
    }

    #[test]
    fn test_incomplete_pairs() {
        assert!(!TrackPair::split(" - Track").unwrap().is_complete());
        assert!(!TrackPair::split("Artist - ").unwrap().is_complete());
        assert!(TrackPair::split("Artist - Track").unwrap().is_complete());
    }

    #[test]
    fn test_identical_pairs_share_key() {
        let a = TrackPair::new("Burial", "Archangel");
        let b = TrackPair::new("Burial", "Archangel");
        assert_eq!(a.key(), b.key());
        assert_eq!(a.key().as_str(), "Burial - Archangel");
        assert_eq!(a.key().to_string(), "Burial - Archangel");
    }
}
