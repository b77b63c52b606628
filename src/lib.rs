pub mod cs;
pub mod error;
pub mod io;
pub mod logger;

pub use cs::hashing;
pub use cs::hashing::{ChainStats, ChainedStringTable, ChainedStringTableBuilder, LongestListPolicy};
pub use error::{Error, Result};
