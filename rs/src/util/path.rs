// rs/src/util/path.rs
use serde::Serializer;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(windows)]
pub fn strip_verbatim_prefix(p: &Path) -> PathBuf {
    let s = match p.to_str() {
        Some(s) => s,
        None => return p.to_path_buf(),
    };

    if let Some(rest) = s.strip_prefix(r"\\?\UNC\") {
        PathBuf::from(format!(r"\\{}", rest))
    } else if let Some(rest) = s.strip_prefix(r"\\?\") {
        PathBuf::from(rest)
    } else {
        p.to_path_buf()
    }
}

#[cfg(not(windows))]
pub fn strip_verbatim_prefix(p: &Path) -> PathBuf {
    p.to_path_buf()
}

/// Directory to scan: the argument as given, or the current working directory.
pub fn resolve_dir(arg: Option<&Path>) -> io::Result<PathBuf> {
    match arg {
        Some(p) => Ok(p.to_path_buf()),
        None => std::env::current_dir().map(|p| strip_verbatim_prefix(&p)),
    }
}

/// Serialize a path as a string, replacing invalid UTF-8 with U+FFFD.
pub fn serialize_lossy<P, S>(path: &P, s: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    s.serialize_str(&path.as_ref().to_string_lossy())
}
