/// Output destinations for mutated variants
///
/// One variant per line. `Memory` collects instead of writing and is what
/// library callers and the integration tests drain into.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{MungeError, Result};

pub enum ResultSink {
    File(BufWriter<File>),
    Console(io::Stdout),
    Memory(Vec<String>),
}

impl ResultSink {
    /// Create the output file. Create failures are fatal and reported
    /// before the pipeline starts.
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|e| {
            MungeError::Io(format!(
                "Failed to create output file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(ResultSink::File(BufWriter::new(file)))
    }

    pub fn console() -> Self {
        ResultSink::Console(io::stdout())
    }

    pub fn memory() -> Self {
        ResultSink::Memory(Vec::new())
    }

    /// Write one variant as a line.
    pub fn write_variant(&mut self, variant: &str) -> io::Result<()> {
        match self {
            ResultSink::File(writer) => writeln!(writer, "{}", variant),
            ResultSink::Console(stdout) => writeln!(stdout, "{}", variant),
            ResultSink::Memory(collected) => {
                collected.push(variant.to_string());
                Ok(())
            }
        }
    }

    /// Flush and release the destination.
    pub fn finish(&mut self) -> io::Result<()> {
        match self {
            ResultSink::File(writer) => writer.flush(),
            ResultSink::Console(stdout) => stdout.flush(),
            ResultSink::Memory(_) => Ok(()),
        }
    }

    /// Consume a memory sink. Returns an empty list for other variants.
    pub fn into_collected(self) -> Vec<String> {
        match self {
            ResultSink::Memory(collected) => collected,
            _ => Vec::new(),
        }
    }
}
