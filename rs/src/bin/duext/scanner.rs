// rs/src/bin/duext/scanner.rs
use serde::Serialize;
use std::ffi::OsStr;
use std::fs::{self, ReadDir};
use std::io;
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

use duextrema::util::{Kind, NameCache, stat_row};

use crate::extrema::{self, Extrema};
use crate::record::FileRecord;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot open directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("directory {} has no entries", path.display())]
    EmptyListing { path: PathBuf },
}

/// Emitted while scanning, as soon as it happens.
#[derive(Debug)]
pub enum ScanEvent<'a> {
    SkippedDir(&'a OsStr),
    StatFailed { path: &'a Path, error: &'a io::Error },
    ReadFailed { dir: &'a Path, error: &'a io::Error },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub files: u64,
    pub skipped: u64,
    pub ignored: u64,
    pub errors: u64,
    pub bytes: u64,
    #[serde(skip)]
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct ScanResult {
    pub extrema: Option<Extrema>,
    pub summary: ScanSummary,
}

/// Single pass over the immediate entries of one directory.
pub struct ExtremaScanner {
    dir: PathBuf,
    entries: Peekable<ReadDir>,
}

impl ExtremaScanner {
    pub fn open(dir: &Path) -> Result<Self, ScanError> {
        let rd = fs::read_dir(dir).map_err(|source| ScanError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut entries = rd.peekable();
        if entries.peek().is_none() {
            return Err(ScanError::EmptyListing {
                path: dir.to_path_buf(),
            });
        }
        Ok(ExtremaScanner {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    pub fn scan<F>(self, mut on_event: F) -> ScanResult
    where
        F: FnMut(ScanEvent<'_>),
    {
        let start = Instant::now();
        let ExtremaScanner { dir, entries } = self;
        let mut names = NameCache::new();
        let mut slot: Option<Extrema> = None;
        let mut summary = ScanSummary::default();

        for dent in entries {
            let dent = match dent {
                Ok(d) => d,
                Err(e) => {
                    summary.errors += 1;
                    debug!(dir = %dir.display(), error = %e, "read_dir entry failed");
                    on_event(ScanEvent::ReadFailed {
                        dir: &dir,
                        error: &e,
                    });
                    continue;
                }
            };
            let name = dent.file_name();
            let path = dir.join(&name);

            let row = match stat_row(&path) {
                Ok(row) => row,
                Err(e) => {
                    summary.errors += 1;
                    debug!(path = %path.display(), error = %e, "stat failed");
                    on_event(ScanEvent::StatFailed {
                        path: &path,
                        error: &e,
                    });
                    continue;
                }
            };

            match row.kind {
                Kind::File => {
                    summary.files += 1;
                    summary.bytes = summary.bytes.saturating_add(row.size);
                    let rec = FileRecord::from_row(&name, path, &row, &mut names);
                    extrema::update(&mut slot, rec);
                }
                Kind::Dir => {
                    summary.skipped += 1;
                    on_event(ScanEvent::SkippedDir(&name));
                }
                Kind::Other => {
                    summary.ignored += 1;
                    debug!(path = %path.display(), "not a regular file or directory");
                }
            }
        }

        summary.elapsed = start.elapsed();
        ScanResult {
            extrema: slot,
            summary,
        }
    }
}
