//! Error type shared by all phases of a mapreduce run.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The run was configured with values it cannot execute with.
    InvalidParameters(String),
    /// Raised by user-supplied map() or reduce() code.
    Function(String),
    MapFailed { shard: usize, source: Box<Error> },
    ReduceFailed { bucket: usize, source: Box<Error> },
    /// A sharder returned a bucket outside of [0; reducers).
    InvalidShard { shard: usize, reducers: usize },
}

impl Error {
    /// Convenience constructor for map()/reduce() implementations.
    pub fn function<S: Into<String>>(msg: S) -> Error {
        Error::Function(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameters(msg) => write!(f, "Invalid parameters: {}", msg),
            Error::Function(msg) => write!(f, "{}", msg),
            Error::MapFailed { shard, source } => {
                write!(f, "map shard {} failed: {}", shard, source)
            }
            Error::ReduceFailed { bucket, source } => {
                write!(f, "reduce bucket {} failed: {}", bucket, source)
            }
            Error::InvalidShard { shard, reducers } => write!(
                f,
                "sharder returned bucket {} for {} reducers",
                shard, reducers
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MapFailed { source, .. } | Error::ReduceFailed { source, .. } => {
                Some(source.as_ref())
            }
            _ => None,
        }
    }
}

/// Returns the error of the lowest-indexed failed worker, if any.
pub(crate) fn first_failure(results: Vec<Result<()>>) -> Result<()> {
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_display_nests_source() {
        let e = Error::MapFailed {
            shard: 2,
            source: Box::new(Error::function("bad record")),
        };
        assert_eq!(e.to_string(), "map shard 2 failed: bad record");
        assert!(e.source().is_some());
    }

    #[test]
    fn test_first_failure_picks_lowest_index() {
        let results = vec![
            Ok(()),
            Err(Error::function("one")),
            Err(Error::function("two")),
        ];
        match first_failure(results) {
            Err(Error::Function(msg)) => assert_eq!(msg, "one"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(first_failure(vec![Ok(()), Ok(())]).is_ok());
    }
}
