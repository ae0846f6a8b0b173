//! Controls the execution of a mapreduce instance.

use crate::error::{first_failure, Result};
use crate::map::MapPartition;
use crate::mapreducer::MapReducer;
use crate::parameters::MRParameters;
use crate::partition::partition;
use crate::record_store::RecordStore;
use crate::reduce::ReducePartition;
use crate::shuffle::shuffle;
use crate::util::Stopwatch;

use std::sync::atomic::AtomicBool;

use scoped_threadpool::Pool;

pub struct MRController<MR: MapReducer> {
    params: MRParameters,
    mr: MR,
}

/// Appends the reduce outputs to `output`, in reducer order. Returns the number of records
/// appended.
pub fn merge(output: &mut RecordStore, reduced: Vec<RecordStore>) -> usize {
    let mut appended = 0;
    for r in reduced {
        appended += r.len();
        output.extend(r);
    }
    appended
}

impl<MR: MapReducer> MRController<MR> {
    /// Create a new mapreduce instance and execute it immediately.
    ///
    /// Blocks until the run is complete. The results are appended to `output`; on error, `output`
    /// is left as it was.
    pub fn run(
        mr: MR,
        params: MRParameters,
        input: &RecordStore,
        output: &mut RecordStore,
    ) -> Result<()> {
        params.validate()?;
        let controller = MRController { params, mr };
        let watch = Stopwatch::start();

        let shards = partition(input, controller.params.mappers);
        let mapped = controller.run_map(shards)?;
        let buckets = controller.run_shuffle(mapped)?;
        let reduced = controller.run_reduce(buckets)?;
        let appended = merge(output, reduced);

        info!(
            "mapreduce done: {} input records, {} output records, {} mappers, {} reducers, {} ms",
            input.len(),
            appended,
            controller.params.mappers,
            controller.params.reducers,
            watch.elapsed_ms()
        );
        Ok(())
    }

    /// Runs one MapPartition per shard, in parallel. Returns the map outputs in shard order.
    fn run_map(&self, shards: Vec<RecordStore>) -> Result<Vec<RecordStore>> {
        let watch = Stopwatch::start();
        let mut outputs: Vec<RecordStore> = (0..shards.len()).map(|_| RecordStore::new()).collect();
        let mut results: Vec<Result<()>> = (0..shards.len()).map(|_| Ok(())).collect();
        let abort = AtomicBool::new(false);
        let mut pool = Pool::new(self.params.mappers as u32);

        pool.scoped(|scope| {
            let workers = shards.into_iter().zip(outputs.iter_mut()).zip(results.iter_mut());
            for (i, ((shard, output), result)) in workers.enumerate() {
                debug!("map shard {}: {} records", i, shard.len());
                let mr = self.mr.clone();
                let abort = &abort;

                scope.execute(move || {
                    *result = MapPartition::new(i, mr, shard, output, abort).run();
                });
            }
        });

        first_failure(results)?;
        debug!(
            "map phase: {} records emitted in {} ms",
            outputs.iter().map(|o| o.len()).sum::<usize>(),
            watch.elapsed_ms()
        );
        Ok(outputs)
    }

    fn run_shuffle(&self, mapped: Vec<RecordStore>) -> Result<Vec<RecordStore>> {
        let watch = Stopwatch::start();
        let buckets = shuffle(&self.mr, mapped, self.params.reducers)?;

        for (i, b) in buckets.iter().enumerate() {
            debug!("reduce bucket {}: {} records", i, b.len());
        }
        debug!("shuffle phase: {} ms", watch.elapsed_ms());
        Ok(buckets)
    }

    /// Sorts every bucket, then runs one ReducePartition per bucket, in parallel. Returns the
    /// reduce outputs in bucket order.
    fn run_reduce(&self, mut buckets: Vec<RecordStore>) -> Result<Vec<RecordStore>> {
        let watch = Stopwatch::start();
        for b in buckets.iter_mut() {
            b.sort();
        }

        let mut outputs: Vec<RecordStore> = (0..buckets.len()).map(|_| RecordStore::new()).collect();
        let mut results: Vec<Result<()>> = (0..buckets.len()).map(|_| Ok(())).collect();
        let abort = AtomicBool::new(false);
        let mut pool = Pool::new(self.params.reducers as u32);

        pool.scoped(|scope| {
            let workers = buckets.into_iter().zip(outputs.iter_mut()).zip(results.iter_mut());
            for (i, ((bucket, output), result)) in workers.enumerate() {
                let mr = self.mr.clone();
                let prealloc = self.params.reduce_group_prealloc_size;
                let abort = &abort;

                scope.execute(move || {
                    *result = ReducePartition::new(i, mr, bucket, output, prealloc, abort).run();
                });
            }
        });

        first_failure(results)?;
        debug!(
            "reduce phase: {} records emitted in {} ms",
            outputs.iter().map(|o| o.len()).sum::<usize>(),
            watch.elapsed_ms()
        );
        Ok(outputs)
    }
}
