//! Parameters for a mapreduce process.
//!

use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct MRParameters {
    pub mappers: usize,
    pub reducers: usize,

    pub reduce_group_prealloc_size: usize,
}

impl Default for MRParameters {
    fn default() -> MRParameters {
        MRParameters::new()
    }
}

impl MRParameters {
    pub fn new() -> MRParameters {
        MRParameters {
            mappers: 4,
            reducers: 4,
            reduce_group_prealloc_size: 1,
        }
    }

    /// Determines how many parallel workers will be run. Mappers and reducers never run at the
    /// same time (the reducers need to wait for the complete map output). The number of
    /// reducers also determines the sharding of the map output data.
    ///
    /// Default 4/4
    pub fn set_concurrency(mut self, mappers: usize, reducers: usize) -> MRParameters {
        self.mappers = mappers;
        self.reducers = reducers;
        self
    }

    /// How big are the groups of keys in the reduce phase expected to be? (used for pre-allocating
    /// buffers)
    /// Default 1.
    pub fn set_reduce_group_prealloc(mut self, prealloc_size: usize) -> MRParameters {
        self.reduce_group_prealloc_size = prealloc_size;
        self
    }

    /// Checks that a run can be executed with these parameters.
    pub fn validate(&self) -> Result<()> {
        if self.mappers == 0 {
            return Err(Error::InvalidParameters(String::from(
                "at least one mapper is required",
            )));
        }
        if self.reducers == 0 {
            return Err(Error::InvalidParameters(String::from(
                "at least one reducer is required",
            )));
        }
        Ok(())
    }
}
