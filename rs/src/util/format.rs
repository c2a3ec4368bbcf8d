// rs/src/util/format.rs
use chrono::{Local, TimeZone};
use colored::Colorize;
use std::time::Duration;

pub fn print_about() {
    println!("{}", "-".repeat(44).bright_cyan());
    println!(
        "{}",
        format!("Duextrema    : Directory extrema finder").bright_cyan()
    );
    println!(
        "{}",
        format!("Version      : {}", env!("CARGO_PKG_VERSION")).bright_cyan()
    );
    println!(
        "{}",
        format!("Built        : {}", env!("BUILD_DATE")).bright_cyan()
    );
    println!("{}", "-".repeat(44).bright_cyan());
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!(
            "{}h {:02}m {:02}s",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    }
}

pub fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{}{}", size as u64, UNITS[unit])
    } else {
        format!("{:.1}{}", size, UNITS[unit])
    }
}

/// Render the low 9 mode bits as `-rwxr-xr-x`.
///
/// The leading character is always `-`; only regular files reach the report.
pub fn permission_string(mode: u32) -> String {
    let mut s = String::with_capacity(10);
    s.push('-');
    for shift in [6, 3, 0] {
        let bits = (mode >> shift) & 7;
        s.push(if bits & 4 != 0 { 'r' } else { '-' });
        s.push(if bits & 2 != 0 { 'w' } else { '-' });
        s.push(if bits & 1 != 0 { 'x' } else { '-' });
    }
    s
}

/// Local time as `YYYY-MM-DD HH:MM:SS`. Out of range values print the raw seconds.
pub fn format_mtime(secs: i64) -> String {
    match Local.timestamp_opt(secs, 0).earliest() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => secs.to_string(),
    }
}
