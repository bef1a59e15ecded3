//! Settings loaded from TOML and `CLEANFRONT_*` environment variables.

pub use cleanfront_conf::*;
