/// Seed sources for the munge pipeline
///
/// Either a single literal word or a line-oriented stream. Both feed the
/// task channel and close it (by dropping the sender) exactly once, which
/// is the workers' only shutdown signal.
use crossbeam_channel::Sender;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{MungeError, Result};

pub enum SeedSource {
    /// One literal seed word.
    Word(String),
    /// Successive lines of a readable stream.
    Stream(Box<dyn BufRead + Send>),
}

impl SeedSource {
    pub fn word(seed: &str) -> Self {
        SeedSource::Word(seed.to_string())
    }

    /// Open an input file for stream mode. Open failures are fatal and
    /// reported before the pipeline starts.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            MungeError::Io(format!(
                "Failed to open input file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(SeedSource::Stream(Box::new(BufReader::new(file))))
    }

    /// Drain this source into the task channel. Returns the number of
    /// seeds enqueued. The sender is consumed, so the channel closes on
    /// every exit path - normal EOF, read error, or single-word completion.
    ///
    /// Lines are forwarded with the terminator stripped; empty lines are
    /// forwarded as empty seeds (the workers discard their empty output).
    /// A non-EOF read error is logged and stops reading early; seeds
    /// already enqueued still get processed.
    pub fn feed(self, tasks: Sender<String>) -> usize {
        let mut enqueued = 0usize;

        match self {
            SeedSource::Word(word) => {
                if tasks.send(word).is_ok() {
                    enqueued = 1;
                }
            }
            SeedSource::Stream(mut reader) => {
                let mut line = String::new();
                loop {
                    line.clear();
                    match reader.read_line(&mut line) {
                        Ok(0) => break,
                        Ok(_) => {
                            if line.ends_with('\n') {
                                line.pop();
                                if line.ends_with('\r') {
                                    line.pop();
                                }
                            }
                            if tasks.send(line.clone()).is_err() {
                                break;
                            }
                            enqueued += 1;
                        }
                        Err(e) => {
                            crate::warn!("Error reading from input: {}", e);
                            break;
                        }
                    }
                }
            }
        }

        enqueued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::io::Cursor;

    fn collect(source: SeedSource) -> Vec<String> {
        let (tx, rx) = unbounded();
        let count = source.feed(tx);
        let seeds: Vec<String> = rx.iter().collect();
        assert_eq!(seeds.len(), count);
        seeds
    }

    #[test]
    fn test_word_mode_single_seed() {
        let seeds = collect(SeedSource::word("admin"));
        assert_eq!(seeds, vec!["admin"]);
    }

    #[test]
    fn test_stream_strips_line_terminators() {
        let input = Cursor::new("cat\ndog\r\nbird\n");
        let seeds = collect(SeedSource::Stream(Box::new(input)));
        assert_eq!(seeds, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_stream_forwards_empty_lines() {
        let input = Cursor::new("one\n\ntwo\n");
        let seeds = collect(SeedSource::Stream(Box::new(input)));
        assert_eq!(seeds, vec!["one", "", "two"]);
    }

    #[test]
    fn test_stream_without_trailing_newline() {
        let input = Cursor::new("last");
        let seeds = collect(SeedSource::Stream(Box::new(input)));
        assert_eq!(seeds, vec!["last"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(SeedSource::from_file("/nonexistent/seeds.txt").is_err());
    }
}
