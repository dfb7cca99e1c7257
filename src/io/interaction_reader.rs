use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use log::warn;

use crate::errors::RecordError;
use crate::graph::InteractionGraph;

pub type Result<T> = std::io::Result<T>;

/// Constructs a graph from a line-oriented `LEFT,RIGHT` interaction stream
pub trait GraphInteractionReader: Sized {
    fn try_read_interactions<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_interaction_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl GraphInteractionReader for InteractionGraph {
    fn try_read_interactions<R: BufRead>(reader: R) -> Result<Self> {
        let mut graph = InteractionGraph::new();
        for record in InteractionReader::new(reader) {
            let (left, right) = record?;
            graph.add_edge(&left, &right);
        }
        Ok(graph)
    }

    fn try_read_interaction_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_interactions(buf_reader)
    }
}

/// Iterator over the well-formed records of an interaction stream.
///
/// One `LEFT,RIGHT` record per line; blank lines and lines starting with `#`
/// are ignored, fields are trimmed. Malformed records (wrong field count,
/// empty identifiers) are logged and skipped; only I/O failures surface.
pub struct InteractionReader<R> {
    lines: Lines<R>,
}

impl<R: BufRead> InteractionReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for InteractionReader<R> {
    type Item = Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Err(e) => return Some(Err(e)),
                Ok(line) => match parse_record(&line) {
                    Ok(Some(record)) => return Some(Ok(record)),
                    Ok(None) => continue,
                    Err(e) => {
                        warn!("skipping record: {e}");
                        continue;
                    }
                },
            }
        }
    }
}

fn parse_record(line: &str) -> std::result::Result<Option<(String, String)>, RecordError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split(',');
    let (Some(left), Some(right), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(RecordError::FieldCount {
            line: line.to_string(),
        });
    };

    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        return Err(RecordError::EmptyIdentifier {
            line: line.to_string(),
        });
    }

    Ok(Some((left.to_string(), right.to_string())))
}
