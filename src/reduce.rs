//! Implements the Reduce phase.
//!

use crate::error::{Error, Result};
use crate::mapreducer::MapReducer;
use crate::record_store::RecordStore;
use crate::record_types::{MultiRecord, Record};

use std::iter::Peekable;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct ReducePartition<'a, MR: MapReducer> {
    bucket_id: usize,
    mr: MR,
    input: RecordStore,
    output: &'a mut RecordStore,
    expected_group_size: usize,
    abort: &'a AtomicBool,
}

impl<'a, MR: MapReducer> ReducePartition<'a, MR> {
    /// Create a new Reduce partition for bucket `bucket_id`.
    /// mr is the map/reduce functions.
    /// input must already be sorted by key (see RecordStore::sort()).
    /// output is the private output store of this reducer.
    /// abort is shared by all reducers of a run, see MapPartition::new().
    pub fn new(
        bucket_id: usize,
        mr: MR,
        input: RecordStore,
        output: &'a mut RecordStore,
        expected_group_size: usize,
        abort: &'a AtomicBool,
    ) -> ReducePartition<'a, MR> {
        ReducePartition {
            bucket_id,
            mr,
            input,
            output,
            expected_group_size,
            abort,
        }
    }

    /// Run the Reduce partition: one reduce() call per distinct key, in key order.
    pub fn run(mut self) -> Result<()> {
        let input = std::mem::take(&mut self.input);
        let groups = Groups::new(input.into_iter(), self.expected_group_size);

        for group in groups {
            if self.abort.load(Ordering::Relaxed) {
                debug!("reduce bucket {} stopping early", self.bucket_id);
                return Ok(());
            }
            if let Err(e) = self.mr.reduce(self.output, group) {
                self.abort.store(true, Ordering::Relaxed);
                warn!("reduce bucket {} failed: {}", self.bucket_id, e);
                return Err(Error::ReduceFailed {
                    bucket: self.bucket_id,
                    source: Box::new(e),
                });
            }
        }
        Ok(())
    }
}

/// Iterator adapter: Converts an Iterator<Item=Record> into an Iterator<Item=MultiRecord> by
/// grouping subsequent records with identical key.
/// The original iterator must yield records in sorted order (or at least in an order where
/// identical keys are adjacent). The last group is yielded like every other one once the
/// underlying iterator is exhausted.
pub struct Groups<It: Iterator<Item = Record>> {
    it: Peekable<It>,
    /// Efficiency knob: How big groups of records are expected to be. Default is 1.
    expected_group_size: usize,
}

impl<It: Iterator<Item = Record>> Groups<It> {
    pub fn new(it: It, egs: usize) -> Groups<It> {
        Groups {
            it: it.peekable(),
            expected_group_size: egs,
        }
    }
}

impl<It: Iterator<Item = Record>> Iterator for Groups<It> {
    type Item = MultiRecord;
    fn next(&mut self) -> Option<Self::Item> {
        let first = self.it.next()?;
        let key = first.key.clone();

        let mut collection = RecordStore::with_capacity(self.expected_group_size);
        collection.append(first);

        while let Some(r) = self.it.next_if(|r| r.key == key) {
            collection.append(r);
        }

        Some(MultiRecord::new(key, collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure_mr::ClosureMapReducer;

    fn sorted(pairs: &[(&str, &str)]) -> RecordStore {
        let mut s: RecordStore = pairs.iter().map(|&(k, v)| Record::new(k, v)).collect();
        s.sort();
        s
    }

    fn identity_map(r: Record, out: &mut RecordStore) -> Result<()> {
        out.append(r);
        Ok(())
    }

    fn count_reduce(g: MultiRecord, out: &mut RecordStore) -> Result<()> {
        if g.key() == "fail" {
            return Err(Error::function("cannot reduce"));
        }
        out.emit(g.key(), g.len().to_string());
        Ok(())
    }

    fn run(input: RecordStore, abort: &AtomicBool) -> (Result<()>, RecordStore) {
        let mr = ClosureMapReducer::new(identity_map, count_reduce);
        let mut out = RecordStore::new();
        let res = ReducePartition::new(0, mr, input, &mut out, 1, abort).run();
        (res, out)
    }

    #[test]
    fn test_groups_include_last_group() {
        let input = sorted(&[("b", "1"), ("a", "1"), ("c", "1"), ("a", "2"), ("c", "2")]);
        let groups: Vec<(String, usize)> = Groups::new(input.into_iter(), 1)
            .map(|g| (g.key().to_string(), g.len()))
            .collect();
        assert_eq!(
            groups,
            vec![
                (String::from("a"), 2),
                (String::from("b"), 1),
                (String::from("c"), 2)
            ]
        );
    }

    #[test]
    fn test_single_record_group() {
        let groups: Vec<MultiRecord> = Groups::new(sorted(&[("x", "1")]).into_iter(), 4).collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key(), "x");
    }

    #[test]
    fn test_group_keeps_insertion_order() {
        let input = sorted(&[("k", "3"), ("j", "0"), ("k", "1"), ("k", "2")]);
        let g = Groups::new(input.into_iter(), 1).nth(1).unwrap();
        assert_eq!(g.values().collect::<Vec<_>>(), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_reduce_partition_counts() {
        let abort = AtomicBool::new(false);
        let (res, out) = run(sorted(&[("a", ""), ("b", ""), ("a", ""), ("z", "")]), &abort);
        res.unwrap();

        let got: Vec<(&str, &str)> = out.iter().map(|r| (&r.key[..], &r.value[..])).collect();
        assert_eq!(got, vec![("a", "2"), ("b", "1"), ("z", "1")]);
    }

    #[test]
    fn test_empty_bucket() {
        let abort = AtomicBool::new(false);
        let (res, out) = run(RecordStore::new(), &abort);
        assert!(res.is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn test_reduce_failure() {
        let abort = AtomicBool::new(false);
        let (res, out) = run(sorted(&[("a", ""), ("fail", ""), ("z", "")]), &abort);
        match res {
            Err(Error::ReduceFailed { bucket: 0, .. }) => (),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(abort.load(Ordering::Relaxed));
        assert_eq!(out.len(), 1);
    }
}
