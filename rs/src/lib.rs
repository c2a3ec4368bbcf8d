// rs/src/lib.rs

pub mod util;
