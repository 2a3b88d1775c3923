use btree_index::BTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

const SEED: u64 = 42;

/// Multiset model: key -> number of copies.
#[derive(Default)]
struct CountedSet {
    counts: BTreeMap<i32, usize>,
    len: usize,
}

impl CountedSet {
    fn insert(&mut self, key: i32) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.len += 1;
    }

    fn erase(&mut self, key: i32) {
        if let Some(count) = self.counts.get_mut(&key) {
            *count -= 1;
            self.len -= 1;
            if *count == 0 {
                self.counts.remove(&key);
            }
        }
    }

    fn keys(&self) -> Vec<i32> {
        self.counts
            .iter()
            .flat_map(|(key, count)| std::iter::repeat(*key).take(*count))
            .collect()
    }
}

#[test]
fn test_random_operations_match_std() {
    const OPERATIONS: usize = 20_000;
    const KEY_RANGE: i32 = 500;

    for order in [3, 4, 5, 8, 16, 64] {
        let mut rng = StdRng::seed_from_u64(SEED + order as u64);
        let mut tree = BTree::new(order).unwrap();
        let mut model = CountedSet::default();

        for step in 0..OPERATIONS {
            let key = rng.gen_range(0..KEY_RANGE);
            if rng.gen_bool(0.55) {
                tree.insert(key);
                model.insert(key);
            } else {
                tree.erase(&key);
                model.erase(key);
            }

            assert_eq!(tree.len(), model.len, "order {} step {}", order, step);
            if step % 1000 == 0 {
                tree.validate()
                    .unwrap_or_else(|e| panic!("order {} step {}: {}", order, step, e));
            }
        }

        tree.validate().unwrap();
        assert_eq!(tree.keys_in_order(), model.keys(), "order {}", order);
        for key in 0..KEY_RANGE {
            assert_eq!(tree.search(&key), model.counts.contains_key(&key));
        }
    }
}

#[test]
fn test_drain_in_random_order() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut keys: Vec<i32> = (0..5_000).map(|_| rng.gen_range(0..1_000_000)).collect();
    let mut tree = BTree::from_keys(7, keys.iter().copied()).unwrap();

    // Fisher-Yates
    for i in (1..keys.len()).rev() {
        let j = rng.gen_range(0..=i);
        keys.swap(i, j);
    }

    for (i, key) in keys.iter().enumerate() {
        tree.try_erase(key).unwrap();
        if i % 250 == 0 {
            assert!(tree.validate().is_ok(), "after {} erases", i + 1);
        }
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_insertion_vs_btreeset() {
    const TEST_SIZE: usize = 10000;
    const TREE_ORDER: usize = 64;

    let mut rng = StdRng::seed_from_u64(SEED);
    let data: Vec<i32> = (0..TEST_SIZE)
        .map(|_| rng.gen_range(0..TEST_SIZE as i32 * 2))
        .collect();

    let start = Instant::now();
    let mut std_set = BTreeSet::new();
    for key in &data {
        std_set.insert(*key);
    }
    let std_duration = start.elapsed();

    let start = Instant::now();
    let mut tree = BTree::new(TREE_ORDER).unwrap();
    for key in &data {
        tree.insert(*key);
    }
    let tree_duration = start.elapsed();

    println!("=== INSERTION PERFORMANCE vs BTreeSet ===");
    println!("std::collections::BTreeSet: {:?}", std_duration);
    println!("BTree: {:?}", tree_duration);
    println!(
        "BTreeSet vs BTree ratio: {:.2}",
        std_duration.as_nanos() as f64 / tree_duration.as_nanos().max(1) as f64
    );

    // The tree keeps duplicates, the set does not
    assert_eq!(tree.len(), TEST_SIZE);
    let mut unique = tree.keys_in_order();
    unique.dedup();
    assert_eq!(unique, std_set.into_iter().collect::<Vec<_>>());
}

#[test]
fn test_lookup_vs_btreeset() {
    const TEST_SIZE: usize = 10000;
    const LOOKUP_COUNT: usize = 1000;
    const TREE_ORDER: usize = 64;

    let std_set: BTreeSet<i32> = (0..TEST_SIZE as i32).collect();
    let tree = BTree::from_keys(TREE_ORDER, 0..TEST_SIZE as i32).unwrap();
    let lookup_keys: Vec<i32> = (0..LOOKUP_COUNT).map(|i| (i * 10) as i32).collect();

    let start = Instant::now();
    let mut std_found = 0;
    for key in &lookup_keys {
        if std_set.contains(key) {
            std_found += 1;
        }
    }
    let std_duration = start.elapsed();

    let start = Instant::now();
    let mut tree_found = 0;
    for key in &lookup_keys {
        if tree.search(key) {
            tree_found += 1;
        }
    }
    let tree_duration = start.elapsed();

    println!("=== LOOKUP PERFORMANCE vs BTreeSet ===");
    println!("std::collections::BTreeSet: {:?}", std_duration);
    println!("BTree: {:?}", tree_duration);

    assert_eq!(std_found, LOOKUP_COUNT);
    assert_eq!(tree_found, LOOKUP_COUNT);
}
