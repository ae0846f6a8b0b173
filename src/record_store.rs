//! In-memory, ordered storage for records.
//!
//! Every shard, bucket and output in a mapreduce run is a RecordStore. A store is only ever
//! touched by one thread at a time; records move between stores by value.

use crate::record_types::Record;

use std::iter::FromIterator;
use std::slice;
use std::vec;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> RecordStore {
        RecordStore { records: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> RecordStore {
        RecordStore {
            records: Vec::with_capacity(n),
        }
    }

    pub fn append(&mut self, record: Record) {
        self.records.push(record)
    }

    /// Appends a record built from `key` and `value`. This is what map() and reduce()
    /// implementations usually call on their output store.
    pub fn emit<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.append(Record::new(key, value))
    }

    /// Moves all records of `other` to the end of this store.
    pub fn extend(&mut self, other: RecordStore) {
        if self.records.is_empty() {
            self.records = other.records;
        } else {
            self.records.extend(other.records);
        }
    }

    /// Sorts by key only. The sort is stable: records with equal keys keep their insertion order.
    pub fn sort(&mut self) {
        self.records.sort_by(|a, b| a.key.cmp(&b.key));
    }

    /// Returns a cursor starting at the first record; can be called any number of times.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IntoIterator for RecordStore {
    type Item = Record;
    type IntoIter = vec::IntoIter<Record>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(it: I) -> RecordStore {
        RecordStore {
            records: it.into_iter().collect(),
        }
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> RecordStore {
        RecordStore { records }
    }
}
