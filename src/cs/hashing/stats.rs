//! Chain statistics for the separate-chaining string table.

/// Which longest-chain value a report should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LongestListPolicy {
    /// The true maximum chain length observed on insertion.
    #[default]
    Actual,
    /// The legacy counter, which is only bumped when a chain is shorter than the counter itself.
    /// From a fresh table it never moves off zero; kept so old reports can be reproduced.
    Legacy,
}

/// A statistics snapshot of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    /// Insertions that landed in an already occupied bucket.
    pub collisions: u64,
    /// The legacy longest-list counter.
    pub longest_chain_seen: u64,
    /// The longest chain observed on insertion.
    pub max_chain_length: usize,
    /// Mean length over non-empty buckets at the time of the snapshot; 0.0 if all are empty.
    pub snapshot_average: f64,
    /// Smoothed average chain length.
    pub running_average: f64,
    pub non_empty_buckets: usize,
    pub total_items: usize,
}

impl ChainStats {
    /// The longest-list figure selected by `policy`.
    pub fn longest_list(&self, policy: LongestListPolicy) -> u64 {
        match policy {
            LongestListPolicy::Actual => self.max_chain_length as u64,
            LongestListPolicy::Legacy => self.longest_chain_seen,
        }
    }
}

/// Sums the sizes of non-empty chains.
///
/// Returns `(total_items, non_empty_buckets, average)`, with an average of 0.0 when every chain
/// is empty.
pub fn chain_occupancy<I>(chain_lengths: I) -> (usize, usize, f64)
where
    I: IntoIterator<Item = usize>,
{
    let (sum, non_empty) = chain_lengths
        .into_iter()
        .filter(|&len| len != 0)
        .fold((0usize, 0usize), |(sum, n), len| (sum + len, n + 1));

    let average = if non_empty == 0 {
        0.0
    } else {
        sum as f64 / non_empty as f64
    };
    (sum, non_empty, average)
}

/// Blends a fresh snapshot into the running average with a factor of one half.
#[inline]
pub fn smooth(snapshot: f64, running: f64) -> f64 {
    (snapshot + running) / 2.0
}
