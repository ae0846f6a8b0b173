//! Splits the input into map shards.

use crate::record_store::RecordStore;

/// Distributes copies of the input records round-robin over `n` shards: record i goes to shard
/// i mod n (n must be positive). Shard sizes differ by at most one; empty shards are returned
/// when n exceeds the input size.
pub fn partition(input: &RecordStore, n: usize) -> Vec<RecordStore> {
    let per_shard = (input.len() + n - 1) / n;
    let mut shards: Vec<RecordStore> = (0..n).map(|_| RecordStore::with_capacity(per_shard)).collect();

    for (i, record) in input.iter().enumerate() {
        shards[i % n].append(record.clone());
    }
    shards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_types::Record;

    fn input(n: usize) -> RecordStore {
        (0..n).map(|i| Record::new(format!("k{}", i), i.to_string())).collect()
    }

    #[test]
    fn test_partition_is_complete_and_balanced() {
        for &size in &[0, 1, 5, 10, 17] {
            for m in 1..7 {
                let inp = input(size);
                let shards = partition(&inp, m);
                assert_eq!(shards.len(), m);

                let lens: Vec<usize> = shards.iter().map(|s| s.len()).collect();
                let (min, max) = (lens.iter().min().unwrap(), lens.iter().max().unwrap());
                assert!(max - min <= 1);
                assert_eq!(lens.iter().sum::<usize>(), size);

                let mut all: Vec<Record> = shards.into_iter().flat_map(|s| s.into_iter()).collect();
                all.sort_by(|a, b| a.key.cmp(&b.key));
                let mut expected: Vec<Record> = inp.into_iter().collect();
                expected.sort_by(|a, b| a.key.cmp(&b.key));
                assert_eq!(all, expected);
            }
        }
    }

    #[test]
    fn test_partition_round_robin() {
        let shards = partition(&input(5), 2);
        let keys: Vec<Vec<&str>> = shards
            .iter()
            .map(|s| s.iter().map(|r| &r.key[..]).collect())
            .collect();
        assert_eq!(keys, vec![vec!["k0", "k2", "k4"], vec!["k1", "k3"]]);
    }

    #[test]
    fn test_more_shards_than_records() {
        let shards = partition(&input(2), 4);
        assert_eq!(shards.iter().filter(|s| s.is_empty()).count(), 2);
    }
}
