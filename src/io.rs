//! File and stream entry points.
//!
//! Thin wrappers that move whole buffers between the filesystem (or any
//! reader/writer) and the in-memory [`Parser`] / [`Generator`]. Files are
//! read as raw bytes, no transcoding.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::export::Generator;
use crate::model::Graph;
use crate::swc::Parser;
use crate::{Error, Result};

fn cannot_open(message: &mut String, path: &Path, source: std::io::Error) -> Error {
    message.clear();
    message.push_str(&format!("Error: Can not open file: {}\n", path.display()));
    Error::CannotOpen { path: path.to_path_buf(), source }
}

impl Parser {
    /// Read the whole file at `path` and parse it into `graph`.
    ///
    /// If the file cannot be read the parser is never run and `graph` is
    /// left as it was.
    pub fn parse_file(&mut self, path: impl AsRef<Path>, graph: &mut Graph) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|e| cannot_open(&mut self.message, path, e))?;
        self.parse(&content, graph)
    }

    /// Drain `reader` into memory and parse it into `graph`.
    pub fn parse_reader<R: Read>(&mut self, mut reader: R, graph: &mut Graph) -> Result<()> {
        let mut content = Vec::new();
        if let Err(e) = reader.read_to_end(&mut content) {
            self.message.clear();
            self.message.push_str(&format!("Error: Can not read input: {}\n", e));
            return Err(Error::Io(e));
        }
        self.parse(&content, graph)
    }
}

impl Generator {
    /// Render `graph` and write it to the file at `path`, replacing it.
    pub fn write_file(&mut self, path: impl AsRef<Path>, graph: &Graph) -> Result<()> {
        let path = path.as_ref();
        let mut file = fs::File::create(path).map_err(|e| cannot_open(&mut self.message, path, e))?;
        self.write(&mut file, graph)
    }
}
