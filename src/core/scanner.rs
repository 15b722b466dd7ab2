//! Directory scanning and per-line event extraction.
//!
//! [`LogScanner`] walks a log directory in file-name order, streams each
//! regular file line by line, and feeds every line through the timestamp
//! extractor and classifier into a caller-owned [`EventStore`].
//!
//! A line ends at `\r\n`, `\n`, or a lone `\r`, so CRLF, LF, and old
//! CR-only files read identically. Bytes are decoded lossily; a stray invalid UTF-8
//! sequence degrades to U+FFFD rather than failing the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::classifier::LineClassifier;
use crate::core::event_record::{EventCategory, EventRecord};
use crate::core::event_store::EventStore;
use crate::core::timestamp::TimestampExtractor;
use crate::util::error::{read_file_err, AuthSleuthError, Result};
use crate::util::time::format_duration;

/// What to do when a single log file cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole run; no report is produced.
    #[default]
    Abort,
    /// Log a warning, skip the file, and continue with the next one.
    SkipFile,
}

/// Per-file counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub lines_read: u64,
    pub events_recorded: u64,
}

/// Totals for a whole directory scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub lines_read: u64,
    pub events_recorded: u64,
}

impl ScanSummary {
    fn absorb(&mut self, stats: FileStats) {
        self.files_scanned += 1;
        self.lines_read += stats.lines_read;
        self.events_recorded += stats.events_recorded;
    }
}

/// Owns the compiled recognisers and the failure policy for a run.
#[derive(Debug, Clone)]
pub struct LogScanner {
    classifier: LineClassifier,
    timestamps: TimestampExtractor,
    policy: FailurePolicy,
}

impl LogScanner {
    /// Compile recognisers and build a scanner with the given policy.
    pub fn new(policy: FailurePolicy) -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new()?,
            timestamps: TimestampExtractor::new()?,
            policy,
        })
    }

    /// Classify one line and record at most one event for it.
    ///
    /// Returns the category recorded, or `None` for a non-event line.
    pub fn process_line(
        &self,
        line: &str,
        source: &str,
        store: &mut EventStore,
    ) -> Option<EventCategory> {
        let hit = self.classifier.classify(line)?;
        let timestamp = self.timestamps.extract(line);
        store.record(hit.category, EventRecord::new(timestamp, hit.username, source));
        Some(hit.category)
    }

    /// Stream every line of `reader` into `store`, tagging records with `source`.
    pub fn scan_reader<R: BufRead>(
        &self,
        mut reader: R,
        source: &str,
        store: &mut EventStore,
    ) -> std::io::Result<FileStats> {
        let mut stats = FileStats::default();
        let mut buf = Vec::with_capacity(512);
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Any `\r` left after trimming is a lone carriage return.
            for segment in trim_line_ending(&buf).split(|&b| b == b'\r') {
                let line = String::from_utf8_lossy(segment);
                stats.lines_read += 1;
                if self.process_line(&line, source, store).is_some() {
                    stats.events_recorded += 1;
                }
            }
        }
        Ok(stats)
    }

    /// Open and scan a single file. Records carry the file's base name.
    pub fn scan_file(&self, path: &Path, store: &mut EventStore) -> Result<FileStats> {
        let source = source_name(path);
        tracing::info!("Processing {source}...");

        let file = File::open(path).map_err(|e| read_file_err(path, e))?;
        let stats = self
            .scan_reader(BufReader::new(file), &source, store)
            .map_err(|e| read_file_err(path, e))?;

        tracing::info!(
            "{source}: {} lines, {} events",
            stats.lines_read,
            stats.events_recorded
        );
        Ok(stats)
    }

    /// Scan every regular file in `dir`, in file-name order.
    ///
    /// # Errors
    /// Fails if the directory cannot be listed, or if a file cannot be read
    /// while the policy is [`FailurePolicy::Abort`].
    pub fn scan_directory(&self, dir: &Path, store: &mut EventStore) -> Result<ScanSummary> {
        let files = list_log_files(dir)?;
        tracing::debug!("{} candidate files in {}", files.len(), dir.display());
        self.scan_paths(&files, store)
    }

    /// Scan `paths` in the given order, applying the failure policy per file.
    pub fn scan_paths(&self, paths: &[PathBuf], store: &mut EventStore) -> Result<ScanSummary> {
        let start = Instant::now();
        let mut summary = ScanSummary::default();
        for path in paths {
            match self.scan_file(path, store) {
                Ok(stats) => summary.absorb(stats),
                Err(e) if self.policy == FailurePolicy::SkipFile => {
                    tracing::warn!("Skipping unreadable file: {e}");
                    summary.files_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Scanned {} files ({} skipped), {} lines, {} events in {}",
            summary.files_scanned,
            summary.files_skipped,
            summary.lines_read,
            summary.events_recorded,
            format_duration(start.elapsed()),
        );
        Ok(summary)
    }
}

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories and other non-file entries are skipped.
pub fn list_log_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source: std::io::Error| AuthSleuthError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        // Follows symlinks, so a link to a regular file is scanned.
        if path.is_file() {
            files.push(path);
        } else {
            tracing::debug!("Skipping non-file entry {}", path.display());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Base name of `path` for the record's `source` field.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Strip one trailing `\n` and then one trailing `\r`.
fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
