//! The MapReducer trait and associated types.

use crate::error::Result;
use crate::record_store::RecordStore;
use crate::record_types::{MultiRecord, Record};

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

/// Default sharding function. DefaultHasher uses fixed keys, so a key lands in the same shard for
/// the whole run.
pub fn std_shard(n: usize, key: &str) -> usize {
    let mut h = DefaultHasher::new();
    h.write(key.as_bytes());
    (h.finish() % n as u64) as usize
}

/// A function used to determine the shard a key belongs in.
/// The first argument is the number of shards, the second one the key;
/// the return value should be in [0; n).
pub type SharderF = fn(usize, &str) -> usize;

pub trait MapReducer: Send + Clone {
    /// Takes one <key,value> pair and the output store of the calling map worker.
    /// Results are emitted by appending to `out`.
    ///
    /// Note that this method takes a &mut self; you can use this to cache expensive objects
    /// between records (but not between shards!)
    fn map(&mut self, out: &mut RecordStore, record: Record) -> Result<()>;

    /// Takes one key with all of its records and emits zero or more records to `out`.
    ///
    /// Note that this method takes a &mut self; you can use this to cache expensive objects
    /// between groups (but not between buckets!)
    fn reduce(&mut self, out: &mut RecordStore, group: MultiRecord) -> Result<()>;

    /// Determines how to map keys to reduce buckets.
    /// Returns a number in [0; n) determining the bucket the key belongs in.
    /// The default implementation uses DefaultHasher and modulo.
    fn shard(&self, n: usize, key: &str) -> usize {
        std_shard(n, key)
    }
}
