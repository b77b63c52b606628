//! Text listings of a chained string table and its statistics.
//!
//! The same format is used for the console and for files:
//!
//! ```text
//! 1:	apple, avocado
//! 2:
//! 3:	banana
//! Total Collisions: 1
//! Longest List: 2
//! Average List Length: 1.5
//! ```

use std::io::{self, Write};
use std::path::Path;

use log::debug;

use super::separate::ChainedStringTable;
use super::stats::{ChainStats, LongestListPolicy};
use crate::error::Result;
use crate::io::create_output;

/// Formats one bucket as `"<index+1>:\t<a>, <b>, ..."`.
pub fn format_bucket_line<S: AsRef<str>>(index: usize, items: &[S]) -> String {
    let joined = items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ");
    format!("{}:\t{}", index + 1, joined)
}

/// Writes one line per bucket, in bucket order.
pub fn write_table<W: Write>(table: &ChainedStringTable, mut writer: W) -> io::Result<()> {
    for (i, bucket) in table.enumerate() {
        writeln!(writer, "{}", format_bucket_line(i, bucket))?;
    }
    Ok(())
}

/// Writes the three-line statistics report.
pub fn write_stats<W: Write>(
    stats: &ChainStats,
    policy: LongestListPolicy,
    mut writer: W,
) -> io::Result<()> {
    writeln!(writer, "Total Collisions: {}", stats.collisions)?;
    writeln!(writer, "Longest List: {}", stats.longest_list(policy))?;
    writeln!(writer, "Average List Length: {}", stats.running_average)
}

impl ChainedStringTable {
    /// Writes the table listing to `path`, replacing any existing file.
    pub fn output_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = create_output(path)?;
        write_table(self, &mut out)?;
        out.flush()?;
        debug!("wrote {} buckets to {}", self.capacity(), path.display());
        Ok(())
    }

    /// Writes the table listing to `writer`.
    pub fn print_to<W: Write>(&self, writer: W) -> io::Result<()> {
        write_table(self, writer)
    }

    /// Updates the running average and writes the statistics report to `writer`.
    pub fn report_stats_to<W: Write>(&mut self, writer: W) -> io::Result<ChainStats> {
        let stats = self.update_and_report_stats();
        write_stats(&stats, self.longest_list_policy(), writer)?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::hashing::rotate_sum::bucket_index;
    use crate::cs::hashing::separate::ChainedStringTableBuilder;

    #[test]
    fn bucket_lines() {
        assert_eq!(format_bucket_line::<&str>(0, &[]), "1:\t");
        assert_eq!(format_bucket_line(2, &["solo"]), "3:\tsolo");
        assert_eq!(format_bucket_line(6, &["a", "b", "c"]), "7:\ta, b, c");
    }

    #[test]
    fn listing_has_one_line_per_bucket() {
        let mut table = ChainedStringTable::with_capacity(4).unwrap();
        table.insert("hello");
        table.insert("world");

        let mut out = Vec::new();
        table.print_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for (i, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("{}:\t", i + 1)));
        }
        let hello_line = lines[bucket_index("hello", 4)];
        assert!(hello_line.contains("hello"));
        assert!(!hello_line.ends_with(", "));
    }

    #[test]
    fn stats_report_text() {
        let mut table = ChainedStringTable::with_capacity(1).unwrap();
        table.insert("x");
        table.insert("y");

        let mut out = Vec::new();
        let stats = table.report_stats_to(&mut out).unwrap();
        assert_eq!(stats.collisions, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total Collisions: 1\nLongest List: 2\nAverage List Length: 1\n"
        );
    }

    #[test]
    fn legacy_report_prints_legacy_counter() {
        let mut table = ChainedStringTableBuilder::new()
            .with_capacity(1)
            .with_longest_list_policy(LongestListPolicy::Legacy)
            .build()
            .unwrap();
        table.insert("x");
        table.insert("y");

        let mut out = Vec::new();
        table.report_stats_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Longest List: 0\n"));
    }

    #[test]
    fn empty_report_has_no_nan() {
        let mut table = ChainedStringTable::with_capacity(3).unwrap();
        let mut out = Vec::new();
        table.report_stats_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Average List Length: 0\n"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn output_file_matches_console_listing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut table = ChainedStringTable::with_capacity(5).unwrap();
        table.load_from_reader("one two three four".as_bytes());

        table.output_to_file(&path).unwrap();
        let mut console = Vec::new();
        table.print_to(&mut console).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), console);
    }
}
