//! Header reporting: read each template in turn and print its header line

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::ReporterConfig;
use crate::headers::{HeaderSet, SourceLabel};
use crate::reader::HeaderSource;

/// One line of report output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Headers(HeaderSet),
    Error(String),
}

impl ReportLine {
    /// Error line carrying the full cause chain of `err`
    ///
    /// Multi-line messages (TOML parse diagnostics, for one) are folded onto a
    /// single line.
    pub fn error(err: &anyhow::Error) -> Self {
        let message = format!("{:#}", err);
        let folded: Vec<&str> = message
            .lines()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        ReportLine::Error(folded.join(" "))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ReportLine::Error(_))
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Headers(set) => write!(f, "{}", set),
            ReportLine::Error(message) => write!(f, "ERROR: {}", message),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every template was read and reported
    Completed,
    /// A read failed; the error line was the last line written
    Aborted,
}

/// Reads the configured templates in order and reports their header rows
///
/// Each header line is written as soon as its template has been read, so a
/// failure on the second template still leaves the first line in the output.
pub struct HeaderReporter<S> {
    source: S,
    targets: Vec<(SourceLabel, PathBuf)>,
}

impl<S: HeaderSource> HeaderReporter<S> {
    pub fn new(source: S, config: &ReporterConfig) -> Self {
        let targets = config
            .targets()
            .into_iter()
            .map(|(label, path)| (label, path.to_path_buf()))
            .collect();
        Self { source, targets }
    }

    #[cfg(test)]
    fn source(&self) -> &S {
        &self.source
    }

    /// Read one template into a header set
    pub fn read(&mut self, label: SourceLabel, path: &Path) -> anyhow::Result<HeaderSet> {
        let columns = self.source.read_headers(path)?;
        Ok(HeaderSet::new(label, columns))
    }

    /// Run the report, writing lines to `out`
    ///
    /// Stops at the first failed read after writing a single error line.
    /// Only failures writing to `out` are returned as errors.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<RunOutcome> {
        let targets = self.targets.clone();
        for (label, path) in targets {
            let line = match self.read(label, &path) {
                Ok(set) => {
                    debug!(label = %label, path = %path.display(), "Reporting headers");
                    ReportLine::Headers(set)
                }
                Err(err) => {
                    warn!(label = %label, path = %path.display(), "Header read failed: {:#}", err);
                    ReportLine::error(&err)
                }
            };

            writeln!(out, "{}", line)?;
            out.flush()?;

            if line.is_error() {
                return Ok(RunOutcome::Aborted);
            }
        }
        Ok(RunOutcome::Completed)
    }
}
