//! # Separate Chaining String Table
//!
//! This module implements a **fixed-capacity** string table using **separate chaining**.
//! It supports:
//! - **Insert**, **search**, **remove** and in-order **enumeration** of chains.
//! - **Bulk loading** from any [`TokenSource`], a buffered reader, or a file.
//! - **Chain statistics**: collision count, longest chain, and a smoothed average chain length.
//!
//! The table never resizes, so every string stays in the bucket it hashed to on insertion.
//! Buckets are `Vec<String>` and keep insertion order. Duplicates are stored as separate entries;
//! [`ChainedStringTable::remove`] deletes only the first match.
//!
//! Statistics come in two flavours: [`ChainedStringTable::peek_stats`] is a pure read, while
//! [`ChainedStringTable::update_and_report_stats`] also folds the current average into the
//! running average, so calling it twice in a row reports different running averages.

use std::io::BufRead;
use std::path::Path;

use log::{debug, trace, warn};

use super::rotate_sum::bucket_index;
use super::stats::{chain_occupancy, smooth, ChainStats, LongestListPolicy};
use crate::error::{Error, Result};
use crate::io::{open_tokens, TokenSource, WhitespaceTokens};

/// Default number of buckets.
pub const DEFAULT_CAPACITY: usize = 101;

/// A "bucket" is a vector of strings, in insertion order.
type Bucket = Vec<String>;

/// What a bulk load did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Tokens inserted by this load.
    pub inserted: usize,
    /// Collisions caused by this load.
    pub collisions: u64,
    /// True if a read error ended the load before the source was exhausted.
    pub interrupted: bool,
}

/// A fixed-capacity, separate-chaining table of strings.
#[derive(Debug, Clone)]
pub struct ChainedStringTable {
    buckets: Vec<Bucket>,
    /// Number of stored strings, duplicates included.
    len: usize,
    collisions: u64,
    /// Legacy longest-list counter; see [`LongestListPolicy::Legacy`].
    longest_chain_seen: u64,
    max_chain_length: usize,
    running_average: f64,
    longest_list_policy: LongestListPolicy,
}

/// A builder for the `ChainedStringTable`.
/// Typically you'll call `.with_capacity(...)`, then `.build()`.
#[derive(Debug, Clone)]
pub struct ChainedStringTableBuilder {
    capacity: usize,
    longest_list_policy: LongestListPolicy,
}

impl Default for ChainedStringTableBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            longest_list_policy: LongestListPolicy::default(),
        }
    }
}

impl ChainedStringTableBuilder {
    /// Creates a new builder with the default capacity.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the number of buckets. Each bucket grows without bound.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Chooses which longest-chain figure reports show.
    pub fn with_longest_list_policy(mut self, policy: LongestListPolicy) -> Self {
        self.longest_list_policy = policy;
        self
    }

    /// Build the final `ChainedStringTable`.
    pub fn build(self) -> Result<ChainedStringTable> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        Ok(ChainedStringTable::empty(self.capacity, self.longest_list_policy))
    }
}

impl Default for ChainedStringTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainedStringTable {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::empty(DEFAULT_CAPACITY, LongestListPolicy::default())
    }

    /// An empty table with zeroed counters. `capacity` must be non-zero.
    fn empty(capacity: usize, longest_list_policy: LongestListPolicy) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::new);

        Self {
            buckets,
            len: 0,
            collisions: 0,
            longest_chain_seen: 0,
            max_chain_length: 0,
            running_average: 0.0,
            longest_list_policy,
        }
    }

    /// Creates an empty table with `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        ChainedStringTableBuilder::new()
            .with_capacity(capacity)
            .build()
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored strings, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn longest_list_policy(&self) -> LongestListPolicy {
        self.longest_list_policy
    }

    /// Insertions that landed in an already occupied bucket.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// The legacy longest-list counter.
    ///
    /// It only increments when the chain just appended to is *shorter* than the counter, so
    /// starting from zero it never moves. Use [`Self::actual_max_chain_length`] for the real maximum.
    pub fn legacy_longest_list_counter(&self) -> u64 {
        self.longest_chain_seen
    }

    /// The longest chain produced by any insertion so far.
    pub fn actual_max_chain_length(&self) -> usize {
        self.max_chain_length
    }

    pub fn running_average(&self) -> f64 {
        self.running_average
    }

    /// The bucket a string hashes to.
    pub fn index_of(&self, token: &str) -> usize {
        bucket_index(token, self.buckets.len())
    }

    /// Appends `token` to the end of its chain.
    ///
    /// Counts one collision if the chain was already non-empty, however long it was.
    pub fn insert(&mut self, token: impl Into<String>) {
        let token = token.into();
        let idx = self.index_of(&token);
        let bucket = &mut self.buckets[idx];

        if !bucket.is_empty() {
            self.collisions += 1;
        }
        trace!("insert {:?} into bucket {} (len {})", token, idx, bucket.len());
        bucket.push(token);
        self.len += 1;

        let size = bucket.len();
        if (size as u64) < self.longest_chain_seen {
            self.longest_chain_seen += 1;
        }
        self.max_chain_length = self.max_chain_length.max(size);
    }

    /// Returns true if `token` is stored.
    pub fn search(&self, token: &str) -> bool {
        let idx = self.index_of(token);
        self.buckets[idx].iter().any(|item| item == token)
    }

    /// Removes the first occurrence of `token`, keeping the order of the rest of its chain.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, token: &str) -> bool {
        let idx = self.index_of(token);
        let bucket = &mut self.buckets[idx];
        match bucket.iter().position(|item| item == token) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                true
            }
            None => {
                debug!("remove: {:?} not present in bucket {}", token, idx);
                false
            }
        }
    }

    /// Inserts every token from `source` until it is exhausted.
    ///
    /// A read error stops the load; tokens read before it stay in the table.
    pub fn load_from_source<T: TokenSource + ?Sized>(&mut self, source: &mut T) -> LoadSummary {
        let collisions_before = self.collisions;
        let mut summary = LoadSummary::default();

        loop {
            match source.next_token() {
                Ok(Some(token)) => {
                    self.insert(token);
                    summary.inserted += 1;
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(
                        "stopped reading after {} tokens: {}",
                        summary.inserted, e
                    );
                    summary.interrupted = true;
                    break;
                }
            }
        }

        summary.collisions = self.collisions - collisions_before;
        debug!(
            "loaded {} tokens ({} collisions), table holds {}",
            summary.inserted,
            summary.collisions,
            self.len
        );
        summary
    }

    /// Inserts every whitespace-delimited token from `reader`.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> LoadSummary {
        self.load_from_source(&mut WhitespaceTokens::new(reader))
    }

    /// Opens `path` and inserts every whitespace-delimited token in it.
    ///
    /// Nothing is inserted if the file cannot be opened.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary> {
        let path = path.as_ref();
        debug!("loading {}", path.display());
        let mut tokens = open_tokens(path)?;
        Ok(self.load_from_source(&mut tokens))
    }

    /// The contents of bucket `index`, if it exists.
    pub fn bucket(&self, index: usize) -> Option<&[String]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Every bucket in index order, each paired with its contents in insertion order.
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| (i, bucket.as_slice()))
    }

    /// Returns an iterator over all stored strings, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(String::as_str))
    }

    /// Current statistics without touching the running average.
    pub fn peek_stats(&self) -> ChainStats {
        let (total_items, non_empty_buckets, snapshot_average) =
            chain_occupancy(self.buckets.iter().map(Vec::len));

        ChainStats {
            collisions: self.collisions,
            longest_chain_seen: self.longest_chain_seen,
            max_chain_length: self.max_chain_length,
            snapshot_average,
            running_average: self.running_average,
            non_empty_buckets,
            total_items,
        }
    }

    /// Folds the current average chain length into the running average and returns the result.
    pub fn update_and_report_stats(&mut self) -> ChainStats {
        let mut stats = self.peek_stats();
        self.running_average = smooth(stats.snapshot_average, self.running_average);
        stats.running_average = self.running_average;
        stats
    }

    /// Empties every bucket and resets all counters.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
        self.collisions = 0;
        self.longest_chain_seen = 0;
        self.max_chain_length = 0;
        self.running_average = 0.0;
    }
}
