// rs/src/util/mod.rs

mod format;
mod path;
mod platform;
mod row;

pub use format::{format_duration, format_mtime, human_bytes, permission_string, print_about};
pub use path::{resolve_dir, serialize_lossy, strip_verbatim_prefix};
pub use platform::{NameCache, get_groupname_from_gid, get_username_from_uid};
pub use row::{Kind, Row, row_from_metadata, stat_row};
