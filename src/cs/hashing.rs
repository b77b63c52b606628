//! Hashing algorithms and hash-based containers.
//!
//! This module provides:
//! - The rotating byte-sum string hash (`rotate_sum`)
//! - A fixed-capacity separate-chaining string table (`separate`)
//! - Chain statistics and their text reports (`stats`, `report`)
//!
//! # Examples
//!
//! ```rust
//! use chainstat::cs::hashing::ChainedStringTable;
//!
//! let mut table = ChainedStringTable::with_capacity(7).unwrap();
//! table.load_from_reader("to be or not to be".as_bytes());
//! assert!(table.search("not"));
//! assert_eq!(table.len(), 6);
//!
//! let stats = table.update_and_report_stats();
//! assert!(stats.collisions >= 2);
//! ```

pub mod report;
pub mod rotate_sum;
pub mod separate;
pub mod stats;

pub use report::{format_bucket_line, write_stats, write_table};
pub use rotate_sum::{bucket_index, rotate_sum, RotateSumHasher, ROTATION_BITS};
pub use separate::{ChainedStringTable, ChainedStringTableBuilder, LoadSummary, DEFAULT_CAPACITY};
pub use stats::{ChainStats, LongestListPolicy};
