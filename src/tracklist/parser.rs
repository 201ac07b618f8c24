use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::tracklist::{
    entities::TrackPair,
    errors::{Error, Result},
};

/// Line-by-line reader of a drop list.
///
/// One record is held back as pending. It is committed when the next record
/// arrives, when a blank line follows it, or when the input ends. Blank lines
/// are therefore optional separators between records. Only the next record
/// commits a pending record that has no track title.
#[derive(Debug, Default)]
pub struct PairParser {
    pending: Option<TrackPair>,
    pairs: Vec<TrackPair>,
}

impl PairParser {
    /// Create a parser with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line. A line without the separator is rejected with
    /// [`Error::MalformedLine`] and leaves the parser state untouched.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            // An incomplete record survives a blank line and waits for the next one
            self.commit_complete();
            return Ok(());
        }

        let pair = TrackPair::split(line).ok_or_else(|| Error::MalformedLine(line.to_string()))?;

        // A new record commits the pending one as is, even without a track title
        if let Some(pending) = self.pending.take() {
            self.pairs.push(pending);
        }
        // A record without an artist never becomes pending
        self.pending = (!pair.artist.is_empty()).then_some(pair);
        Ok(())
    }

    /// Pairs committed so far, pending record excluded
    #[cfg(test)]
    pub(crate) fn pairs(&self) -> &[TrackPair] {
        &self.pairs
    }

    /// Commit the pending record if complete and return every pair in input order
    pub fn finish(mut self) -> Vec<TrackPair> {
        self.commit_complete();
        if let Some(pair) = self.pending.take() {
            warn!("Dropping record without a track title: {}", pair.key());
        }
        self.pairs
    }

    fn commit_complete(&mut self) {
        if let Some(pair) = self.pending.take_if(|pair| pair.is_complete()) {
            self.pairs.push(pair);
        }
    }
}

/// Parse a drop list from any buffered reader. `source` names the input in errors.
pub fn parse_pairs<R: BufRead>(reader: R, source: &Path) -> Result<Vec<TrackPair>> {
    let mut parser = PairParser::new();

    for line in reader.split(b'\n') {
        let line = line.map_err(|e| Error::InputRead {
            path: source.to_path_buf(),
            source: e,
        })?;
        // Drop lists are not always UTF-8, undecodable bytes become U+FFFD
        if let Err(e) = parser.push_line(&String::from_utf8_lossy(&line)) {
            warn!("{e}");
        }
    }

    let pairs = parser.finish();
    if pairs.is_empty() {
        return Err(Error::EmptyInput(source.to_path_buf()));
    }
    debug!("Parsed {} track pairs from {source:?}", pairs.len());
    Ok(pairs)
}

/// Open and parse a drop list file
pub fn read_pairs(path: &Path) -> Result<Vec<TrackPair>> {
    let file = File::open(path).map_err(|e| Error::InputOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_pairs(BufReader::new(file), path)
}
