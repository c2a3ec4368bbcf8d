// rs/src/util/row.rs
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    File,
    Dir,
    Other,
}

impl Kind {
    fn of(ft: fs::FileType) -> Self {
        if ft.is_file() {
            Kind::File
        } else if ft.is_dir() {
            Kind::Dir
        } else {
            Kind::Other
        }
    }
}

/// Stat snapshot of one directory entry, taken once per scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub kind: Kind,
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub mtime: i64,
}

pub fn row_from_metadata(md: &fs::Metadata) -> Row {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        Row {
            kind: Kind::of(md.file_type()),
            mode: md.mode(),
            nlink: md.nlink(),
            uid: md.uid(),
            gid: md.gid(),
            size: md.size(),
            mtime: md.mtime(),
        }
    }
    #[cfg(not(unix))]
    {
        use std::time::SystemTime;

        let mtime = md
            .modified()
            .ok()
            .and_then(|t| t.duration_since(SystemTime::UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        let mode = if md.permissions().readonly() { 0o444 } else { 0o644 };

        Row {
            kind: Kind::of(md.file_type()),
            mode,
            nlink: 1,
            uid: 0,
            gid: 0,
            size: md.len(),
            mtime,
        }
    }
}

/// Stat `path`, following symlinks like `stat(2)`.
pub fn stat_row(path: &Path) -> io::Result<Row> {
    let md = fs::metadata(path)?;
    Ok(row_from_metadata(&md))
}
