//! Implements a mapreduce process bounded to one machine and held entirely in memory;
//! map and reduce workers run in parallel on a thread pool.
//!
//! ```
//! use localmr::{map_reduce, MultiRecord, Record, RecordStore};
//!
//! let mut input = RecordStore::new();
//! input.emit("1", "a b a");
//!
//! let mut output = RecordStore::new();
//! map_reduce(
//!     |r: Record, out: &mut RecordStore| {
//!         for w in r.value.split_whitespace() {
//!             out.emit(w, "1");
//!         }
//!         Ok(())
//!     },
//!     2,
//!     |g: MultiRecord, out: &mut RecordStore| {
//!         out.emit(g.key(), g.len().to_string());
//!         Ok(())
//!     },
//!     1,
//!     &input,
//!     &mut output,
//! )
//! .unwrap();
//!
//! assert_eq!(output.len(), 2);
//! ```

#[macro_use]
extern crate log;

pub mod closure_mr;
pub mod controller;
pub mod error;
pub mod map;
pub mod mapreducer;
pub mod parameters;
pub mod partition;
pub mod record_store;
pub mod record_types;
pub mod reduce;
pub mod shuffle;
mod util;

pub use closure_mr::ClosureMapReducer;
pub use controller::MRController;
pub use error::{Error, Result};
pub use mapreducer::MapReducer;
pub use parameters::MRParameters;
pub use record_store::RecordStore;
pub use record_types::{MultiRecord, Record};

/// Runs `mapper` on `num_mappers` threads and `reducer` on `num_reducers` threads over `input`,
/// appending the reduce output to `output`.
///
/// The first failing map() or reduce() call aborts the run; `output` is not touched in that case.
pub fn map_reduce<M, R>(
    mapper: M,
    num_mappers: usize,
    reducer: R,
    num_reducers: usize,
    input: &RecordStore,
    output: &mut RecordStore,
) -> Result<()>
where
    M: Fn(Record, &mut RecordStore) -> Result<()> + Send + Clone,
    R: Fn(MultiRecord, &mut RecordStore) -> Result<()> + Send + Clone,
{
    let mr = ClosureMapReducer::new(mapper, reducer);
    let params = MRParameters::new().set_concurrency(num_mappers, num_reducers);
    MRController::run(mr, params, input, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(r: Record, out: &mut RecordStore) -> Result<()> {
        out.append(r);
        Ok(())
    }

    fn group_size(g: MultiRecord, out: &mut RecordStore) -> Result<()> {
        out.emit(g.key(), g.len().to_string());
        Ok(())
    }

    #[test]
    fn test_map_reduce_single_bucket_groups() {
        let input: RecordStore = vec![
            Record::new("b", "1"),
            Record::new("a", "1"),
            Record::new("c", "1"),
            Record::new("b", "1"),
            Record::new("a", "1"),
            Record::new("c", "1"),
        ]
        .into_iter()
        .collect();
        let mut output = RecordStore::new();

        map_reduce(identity, 3, group_size, 1, &input, &mut output).unwrap();

        let got: Vec<(&str, &str)> = output.iter().map(|r| (&r.key[..], &r.value[..])).collect();
        assert_eq!(got, vec![("a", "2"), ("b", "2"), ("c", "2")]);
    }

    #[test]
    fn test_map_reduce_rejects_zero_reducers() {
        let mut output = RecordStore::new();
        assert!(map_reduce(identity, 1, group_size, 0, &RecordStore::new(), &mut output).is_err());
    }
}
