// rs/src/bin/duext/report.rs
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use duextrema::util::{format_duration, format_mtime, human_bytes, serialize_lossy};

use crate::extrema::Extrema;
use crate::record::FileRecord;
use crate::scanner::{ScanEvent, ScanSummary};

pub fn format_record(rec: &FileRecord) -> String {
    format!(
        "{} {} {} {}\t{} bytes\t{}\t{}",
        rec.permissions,
        rec.links,
        rec.owner,
        rec.group,
        rec.size,
        format_mtime(rec.modified),
        rec.path.display()
    )
}

/// Notification line for a failed entry; `None` for other events.
pub fn failure_line(ev: &ScanEvent<'_>) -> Option<String> {
    match ev {
        ScanEvent::StatFailed { path, error } => Some(format!(
            "Error getting file stats for {}: {}",
            path.display(),
            error
        )),
        ScanEvent::ReadFailed { dir, error } => Some(format!(
            "Error reading an entry of {}: {}",
            dir.display(),
            error
        )),
        ScanEvent::SkippedDir(_) => None,
    }
}

pub fn write_report<W: Write>(w: &mut W, ext: &Extrema) -> io::Result<()> {
    let slots = [
        ("Largest file is: ", &ext.largest),
        ("Smallest file is: ", &ext.smallest),
        ("Most recently modified file is: ", &ext.most_recent),
        ("The oldest modified file is: ", &ext.oldest),
    ];
    for (heading, rec) in slots {
        writeln!(w, "{heading}")?;
        writeln!(w, "{}", format_record(rec))?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(w: &mut W, summary: &ScanSummary) -> io::Result<()> {
    writeln!(w, "Total files  : {}", summary.files)?;
    writeln!(w, "Skipped dirs : {}", summary.skipped)?;
    writeln!(w, "Ignored      : {}", summary.ignored)?;
    writeln!(w, "Total errors : {}", summary.errors)?;
    writeln!(w, "Total size   : {}", human_bytes(summary.bytes))?;
    writeln!(w, "Elapsed time : {}", format_duration(summary.elapsed))?;
    writeln!(w, "{}", "-".repeat(44).bright_cyan())?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(serialize_with = "serialize_lossy")]
    directory: &'a Path,
    #[serde(flatten)]
    extrema: Option<&'a Extrema>,
    summary: &'a ScanSummary,
}

pub fn write_json<W: Write>(
    w: &mut W,
    dir: &Path,
    ext: Option<&Extrema>,
    summary: &ScanSummary,
) -> anyhow::Result<()> {
    let report = JsonReport {
        directory: dir,
        extrema: ext,
        summary,
    };
    let mut buf = serde_json::to_vec_pretty(&report)?;
    buf.push(b'\n');
    w.write_all(&buf)?;
    Ok(())
}
