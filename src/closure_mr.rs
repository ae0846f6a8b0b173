//! A MapReducer that uses supplied map()/reduce() functions.

use crate::error::Result;
use crate::mapreducer::{std_shard, MapReducer, SharderF};
use crate::record_store::RecordStore;
use crate::record_types::{MultiRecord, Record};

/// This type implements the MapReducer trait. You can use it to provide your own functions to a
/// MapReduce process. If you need more flexibility, however, you may want to simply implement your
/// own type that fulfills MapReducer.
#[derive(Clone)]
pub struct ClosureMapReducer<M, R> {
    mapper: M,
    reducer: R,
    sharder: SharderF,
}

impl<M, R> ClosureMapReducer<M, R>
where
    M: Fn(Record, &mut RecordStore) -> Result<()> + Send + Clone,
    R: Fn(MultiRecord, &mut RecordStore) -> Result<()> + Send + Clone,
{
    /// Create a new MapReducer from the supplied functions.
    pub fn new(mapper: M, reducer: R) -> ClosureMapReducer<M, R> {
        ClosureMapReducer {
            mapper,
            reducer,
            sharder: std_shard,
        }
    }
    /// Set the function used for sharding.
    pub fn set_sharder(&mut self, s: SharderF) {
        self.sharder = s;
    }
}

impl<M, R> MapReducer for ClosureMapReducer<M, R>
where
    M: Fn(Record, &mut RecordStore) -> Result<()> + Send + Clone,
    R: Fn(MultiRecord, &mut RecordStore) -> Result<()> + Send + Clone,
{
    fn map(&mut self, out: &mut RecordStore, r: Record) -> Result<()> {
        (self.mapper)(r, out)
    }
    fn reduce(&mut self, out: &mut RecordStore, g: MultiRecord) -> Result<()> {
        (self.reducer)(g, out)
    }
    fn shard(&self, n: usize, k: &str) -> usize {
        (self.sharder)(n, k)
    }
}
