use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::tracklist::{
    entities::TrackKey,
    errors::{Error, Result},
};

/// Write one key per line and flush
pub fn write_tracklist<W: Write>(tracklist: &[TrackKey], mut out: W) -> io::Result<()> {
    for track in tracklist {
        writeln!(out, "{track}")?;
    }
    out.flush()
}

/// Create or truncate `path` and write the tracklist into it
pub fn save_tracklist(tracklist: &[TrackKey], path: &Path) -> Result<()> {
    let output_error = |e: io::Error| Error::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    };
    let file = File::create(path).map_err(output_error)?;
    write_tracklist(tracklist, BufWriter::new(file)).map_err(output_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_one_key_per_line() {
        let tracklist = vec![TrackKey::new("A - X"), TrackKey::new("B - Y - Remix")];
        let mut out = Vec::new();
        write_tracklist(&tracklist, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A - X\nB - Y - Remix\n");
    }

    #[test]
    fn test_write_error_is_surfaced() {
        let tracklist = vec![TrackKey::new("A - X")];
        let err = write_tracklist(&tracklist, BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_flush_error_is_surfaced() {
        let tracklist = vec![TrackKey::new("A - X")];
        let file = BufWriter::new(BrokenPipe);
        assert!(write_tracklist(&tracklist, file).is_err());
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tracklist.txt");
        let result = save_tracklist(&[TrackKey::new("A - X")], &path);
        assert!(matches!(result, Err(Error::OutputWrite { .. })));
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracklist.txt");
        std::fs::write(&path, "old line\nold line\nold line\n").unwrap();

        save_tracklist(&[TrackKey::new("A - X")], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A - X\n");
    }
}
