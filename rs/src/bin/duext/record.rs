// rs/src/bin/duext/record.rs
use serde::Serialize;
use std::ffi::OsStr;
use std::path::PathBuf;

use duextrema::util::{NameCache, Row, permission_string, serialize_lossy};

/// One regular file as seen during the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub permissions: String,
    pub links: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    pub modified: i64,
    pub name: String,
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
}

impl FileRecord {
    pub fn from_row(name: &OsStr, path: PathBuf, row: &Row, names: &mut NameCache) -> Self {
        FileRecord {
            permissions: permission_string(row.mode),
            links: row.nlink,
            owner: names.user(row.uid).to_string(),
            group: names.group(row.gid).to_string(),
            size: row.size,
            modified: row.mtime,
            name: name.to_string_lossy().into_owned(),
            path,
        }
    }
}
