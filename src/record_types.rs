use crate::record_store::RecordStore;

use std::vec;

/// A (key,value) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Record {
        Record {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A (key,[record]) group; the input to one reduce() call.
/// Holds every record of a reduce bucket that shares `key`, in sorted bucket order.
/// Can be easily iterated over, e.g. in a `for` loop.
#[derive(Debug)]
pub struct MultiRecord {
    key: String,
    records: RecordStore,
}

impl MultiRecord {
    pub fn new(key: String, records: RecordStore) -> MultiRecord {
        MultiRecord { key, records }
    }

    /// Retrieves the key of the group.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Iterates over the values of the group.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.value.as_str())
    }

    pub fn into_records(self) -> RecordStore {
        self.records
    }
}

impl IntoIterator for MultiRecord {
    type Item = Record;
    type IntoIter = vec::IntoIter<Record>;
    /// Allows iterating over all the records.
    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
