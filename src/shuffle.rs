//! Moves the map output into reduce buckets.

use crate::error::{Error, Result};
use crate::mapreducer::MapReducer;
use crate::record_store::RecordStore;

/// Distributes the records of all map outputs into `reducers` buckets, using
/// `mr.shard(reducers, key)`. Map outputs are visited in mapper order and records in insertion
/// order, so within a bucket records of one mapper keep their relative order.
///
/// Runs on a single thread; a bucket is complete only after every map output has been scanned.
pub fn shuffle<MR: MapReducer>(
    mr: &MR,
    map_outputs: Vec<RecordStore>,
    reducers: usize,
) -> Result<Vec<RecordStore>> {
    let mut buckets: Vec<RecordStore> = (0..reducers).map(|_| RecordStore::new()).collect();

    for output in map_outputs {
        for record in output {
            let shard = mr.shard(reducers, &record.key);
            if shard >= reducers {
                return Err(Error::InvalidShard { shard, reducers });
            }
            buckets[shard].append(record);
        }
    }
    Ok(buckets)
}
