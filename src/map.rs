//! Implements the Map phase.
//!

use crate::error::{Error, Result};
use crate::mapreducer::MapReducer;
use crate::record_store::RecordStore;

use std::sync::atomic::{AtomicBool, Ordering};

/// This is the base of the mapping phase. It owns one input shard and writes to the output
/// store of its mapper; nothing else touches either while the phase runs.
/// Every mapper thread runs exactly one MapPartition.
pub struct MapPartition<'a, MR: MapReducer> {
    shard_id: usize,
    mr: MR,
    input: RecordStore,
    output: &'a mut RecordStore,
    abort: &'a AtomicBool,
}

impl<'a, MR: MapReducer> MapPartition<'a, MR> {
    /// `abort` is shared by all mappers of a run; it is raised by the first failing mapper and
    /// makes the others stop early.
    pub fn new(
        shard_id: usize,
        mr: MR,
        input: RecordStore,
        output: &'a mut RecordStore,
        abort: &'a AtomicBool,
    ) -> MapPartition<'a, MR> {
        MapPartition {
            shard_id,
            mr,
            input,
            output,
            abort,
        }
    }

    /// Calls map() on every record of the shard, in shard order.
    pub fn run(mut self) -> Result<()> {
        let input = std::mem::take(&mut self.input);

        for record in input {
            if self.abort.load(Ordering::Relaxed) {
                debug!("map shard {} stopping early", self.shard_id);
                return Ok(());
            }
            if let Err(e) = self.mr.map(self.output, record) {
                self.abort.store(true, Ordering::Relaxed);
                warn!("map shard {} failed: {}", self.shard_id, e);
                return Err(Error::MapFailed {
                    shard: self.shard_id,
                    source: Box::new(e),
                });
            }
        }
        Ok(())
    }
}
