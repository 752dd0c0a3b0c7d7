#![cfg(test)]

use std::collections::{BTreeMap, HashMap};

use super::*;

fn person(name: &str, age: i32) -> BTreeMap<String, String> {
    BTreeMap::from([
        (String::from("name"), String::from(name)),
        (String::from("age"), format!("{age:03}")),
    ])
}

#[test]
fn test_first_and_last() {
    assert_eq!(first(&[1, 2, 3]), Some(&1));
    assert_eq!(first_n(&[1, 2, 3], 2), [1, 2]);
    assert!(
        first_n::<i32>(&[], 2).is_empty(),
        "Taking from an empty sequence should give nothing."
    );
    assert_eq!(first::<i32>(&[]), None);
    assert_eq!(first_n(&[1, 2, 3], 0), [] as [i32; 0]);

    assert_eq!(last(&[1, 2, 3]), Some(&3));
    assert_eq!(last_n(&[1, 2, 3], 2), [2, 3], "Should return exactly the trailing elements.");
    assert_eq!(
        last_n(&[1, 2, 3], 5),
        [1, 2, 3],
        "Asking for too many elements should clamp to the whole sequence."
    );
    assert_eq!(last_n(&[1, 2, 3], 0), [] as [i32; 0]);
}

#[test]
fn test_each() {
    let mut visited = Vec::new();
    each(&["a", "b", "c"], |value, index, collection| {
        assert_eq!(collection.len(), 3);
        visited.push((index, *value));
    });
    assert_eq!(
        visited,
        [(0, "a"), (1, "b"), (2, "c")],
        "Sequences should be visited in order, keyed by index."
    );

    let map = HashMap::from([("one", 1), ("two", 2), ("three", 3)]);
    let mut visited = Vec::new();
    each(&map, |value, key, _| visited.push((*key, *value)));
    visited.sort();
    assert_eq!(
        visited,
        [("one", 1), ("three", 3), ("two", 2)],
        "Every entry of a mapping should be visited exactly once."
    );
}

#[test]
fn test_index_of() {
    assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1), "Should find the first match.");
    assert_eq!(index_of(&[10, 20, 30], &40), None);
}

#[test]
fn test_filter_and_reject_partition() {
    let seq = [1, 2, 3, 4, 5, 6, 7];
    let is_even = |x: &i32| x % 2 == 0;

    let kept = filter(&seq, is_even);
    let rejected = reject(&seq, is_even);
    assert_eq!(kept, [2, 4, 6]);
    assert_eq!(rejected, [1, 3, 5, 7]);

    let mut rejoined = [kept, rejected].concat();
    rejoined.sort();
    assert_eq!(
        rejoined, seq,
        "Filter and reject should partition the sequence between them."
    );
}

#[test]
fn test_uniq() {
    assert_eq!(
        uniq(&[1, 2, 1, 3, 2]),
        [1, 2, 3],
        "Duplicates should be dropped, keeping first-occurrence order."
    );
    assert_eq!(uniq(&["b", "a", "b"]), ["b", "a"]);
    assert!(uniq::<u8>(&[]).is_empty());
}

#[test]
fn test_contains() {
    assert!(contains(&[1, 2, 3], &3));
    assert!(!contains(&[1, 2, 3], &4));

    let map = HashMap::from([("a", 1), ("b", 2)]);
    assert!(contains(&map, &2), "Mapping values should be searched.");
    assert!(!contains(&map, &3));
}

#[test]
fn test_set_operations() {
    assert_eq!(intersection(&[1, 2, 3], &[&[2, 3, 4]]), [2, 3]);
    assert_eq!(
        intersection(&[1, 2, 3, 4], &[&[2, 3, 4], &[3, 4, 5]]),
        [3, 4],
        "Items must appear in every other sequence."
    );
    assert_eq!(difference(&[1, 2, 3], &[&[2, 3]]), [1]);
    assert_eq!(
        difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10], &[4]]),
        [1, 3],
        "Items in any other sequence should be removed."
    );
    assert_eq!(difference(&[1, 1, 2], &[]), [1, 1, 2]);

    let seq = [1, 2, 3];
    let others: [&[i32]; 1] = [&[3, 1]];
    let mut lazy = intersection_iter(&seq, &others);
    assert_eq!(lazy.next(), Some(&1));
    assert_eq!(lazy.next(), Some(&3));
    assert_eq!(lazy.next(), None);
    assert_eq!(difference_iter(&seq, &others).count(), 1);
}

#[test]
fn test_map_and_pluck() {
    assert_eq!(map(&[1, 2, 3], |x| x * 2), [2, 4, 6]);
    assert!(map(&[] as &[i32], |x| x * 2).is_empty());

    let people = [person("moe", 30), person("curly", 50)];
    assert_eq!(
        pluck(&people, "name"),
        [Some(String::from("moe")), Some(String::from("curly"))]
    );
    assert_eq!(
        pluck(&people, "height"),
        [None, None],
        "Missing properties should be absent."
    );
}

#[test]
fn test_invoke() {
    let table = MethodTable::new()
        .with("sort", |seq: &Vec<i32>, _: &[i32]| {
            let mut sorted = seq.clone();
            sorted.sort();
            sorted
        })
        .with("push", |seq: &Vec<i32>, args: &[i32]| [seq.as_slice(), args].concat());

    let seqs = vec![vec![5, 1, 7], vec![3, 2, 1]];
    assert_eq!(
        invoke(&seqs, &table, "sort", &[]),
        Ok(vec![vec![1, 5, 7], vec![1, 2, 3]])
    );
    assert_eq!(
        invoke(&seqs, &table, "push", &[9]),
        Ok(vec![vec![5, 1, 7, 9], vec![3, 2, 1, 9]]),
        "Arguments should be passed to the method."
    );

    let error = invoke(&seqs, &table, "reverse", &[]).unwrap_err();
    assert_eq!(error.name, "reverse");
    assert!(table.contains("sort"));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_reduce() {
    assert_eq!(
        reduce(&[1, 2, 3], |a, b| a + b, None),
        Some(6),
        "The first element should seed the fold."
    );
    assert_eq!(reduce(&[1, 2, 3], |a, b| a + b, Some(10)), Some(16));
    assert_eq!(reduce(&[2, 3, 4], |a, b| a * b, None), Some(24));
    assert_eq!(
        reduce(&[String::from("a"), String::from("b")], |a, b| a + b, None),
        Some(String::from("ab")),
        "Non-numeric folds shouldn't be seeded with zero."
    );
    assert_eq!(reduce::<[i32], _>(&[], |a, b| a + b, None), None);
    assert_eq!(reduce::<[i32], _>(&[], |a, b| a + b, Some(5)), Some(5));

    let lengths = reduce_with(&["ab", "cde"], |total, s| total + s.len(), 0);
    assert_eq!(lengths, 5);

    let scores = HashMap::from([("moe", 3), ("larry", 4), ("curly", 5)]);
    assert_eq!(
        reduce(&scores, |a, b| a + b, None),
        Some(12),
        "Mapping values should be folded."
    );
    assert_eq!(reduce(&BTreeMap::<u8, i32>::new(), |a, b| a + b, None), None);
}

#[test]
fn test_predicates() {
    let is_even = |x: &i32| x % 2 == 0;

    assert!(every(&[2, 4, 6], Some(is_even)));
    assert!(!every(&[2, 3, 6], Some(is_even)));
    assert!(every(&[] as &[i32; 0], Some(is_even)), "Empty collections pass every test.");
    assert!(every(&[1, 3], None::<fn(&i32) -> bool>), "No predicate should pass.");

    assert!(!some(&[1, 3, 5], Some(is_even)));
    assert!(some(&[1, 4, 5], Some(is_even)));
    assert!(!some(&[] as &[i32; 0], Some(is_even)));
    assert!(some(&[0, 0, 1], None::<fn(&i32) -> bool>));
    assert!(
        !some(&[0, 0], None::<fn(&i32) -> bool>),
        "Without a predicate, values should be tested for truthiness."
    );
    assert!(some_by(&[[1], [2]], |pair| pair[0] == 2));

    let ages = BTreeMap::from([("moe", 40), ("larry", 50)]);
    assert!(every(&ages, Some(|age: &i32| *age >= 40)), "Mapping values should be tested.");
    assert!(!every(&ages, Some(|age: &i32| *age > 40)));
    assert!(some(&ages, Some(|age: &i32| *age == 50)));
    assert!(!some(&HashMap::from([("a", 0)]), None::<fn(&i32) -> bool>));

    let mut calls = 0;
    every(
        &[1, 2, 3, 4],
        Some(|x: &i32| {
            calls += 1;
            *x < 2
        }),
    );
    assert_eq!(calls, 2, "Every should stop at the first failure.");
}

#[test]
fn test_sort_by() {
    assert_eq!(sort_by(&[3, 1, 2], |x| *x), [1, 2, 3]);
    assert_eq!(
        sort_by(&["ccc", "a", "bb", "d"], |s| s.len()),
        ["a", "d", "bb", "ccc"],
        "Equal keys should keep their relative order."
    );

    let ages = HashMap::from([("moe", 40), ("larry", 60), ("curly", 50)]);
    assert_eq!(
        sort_by(&ages, |age| -age),
        [60, 50, 40],
        "Mapping values should be sorted by the derived key."
    );

    let people = [person("moe", 40), person("larry", 50), person("curly", 60)];
    let sorted = sort_by_property(&people, "name");
    assert_eq!(
        pluck(&sorted, "name"),
        [
            Some(String::from("curly")),
            Some(String::from("larry")),
            Some(String::from("moe"))
        ]
    );

    let mut nameless = person("x", 1);
    nameless.remove("name");
    let sorted = sort_by_property(&[person("a", 2), nameless.clone()], "name");
    assert_eq!(sorted[0], nameless, "Records without the property should sort first.");
}

#[test]
fn test_zip() {
    assert_eq!(
        zip2(&["a", "b", "c"], &[1, 2]),
        [(Some("a"), Some(1)), (Some("b"), Some(2)), (Some("c"), None)],
        "Shorter sequences should be padded with absent values."
    );
    assert_eq!(
        zip(&[&[1, 2], &[3], &[4, 5, 6]]),
        [
            vec![Some(1), Some(3), Some(4)],
            vec![Some(2), None, Some(5)],
            vec![None, None, Some(6)],
        ],
        "Output should be as long as the longest sequence."
    );
    assert!(zip::<u8>(&[]).is_empty());
}

#[test]
fn test_flatten() {
    let items = crate::nested![1, [2, [3, [4]], 5]];
    assert_eq!(flatten(&items), [1, 2, 3, 4, 5]);
    assert_eq!(
        Nested::List(items).into_flat(),
        [1, 2, 3, 4, 5],
        "Owned flattening should match borrowed flattening."
    );

    let empty: Vec<Nested<u8>> = crate::nested![[], [[]]];
    assert!(flatten(&empty).is_empty());
    assert!(Nested::<i32>::from(3).is_leaf());
}

#[cfg(feature = "shuffle")]
mod shuffling {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::collections::{shuffle, shuffle_with};

    #[test]
    fn test_shuffle_is_permutation() {
        let seq = (0..50).collect::<Vec<u32>>();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            let mut shuffled = shuffle_with(&seq, &mut rng);
            assert_eq!(shuffled.len(), seq.len());
            shuffled.sort();
            assert_eq!(shuffled, seq, "Every element should appear exactly once.");
        }

        let mut shuffled = shuffle(&[1, 1, 2]);
        shuffled.sort();
        assert_eq!(shuffled, [1, 1, 2], "Duplicates should be preserved.");
        assert!(shuffle::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_shuffle_is_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = HashMap::new();
        let trials = 60_000;

        for _ in 0..trials {
            *counts.entry(shuffle_with(&[1, 2, 3], &mut rng)).or_insert(0_u32) += 1;
        }

        assert_eq!(counts.len(), 6, "Every permutation should be reachable.");
        let expected = trials / 6;
        for (permutation, count) in counts {
            assert!(
                count.abs_diff(expected) < expected / 10,
                "Permutation {permutation:?} came up {count} times, expected about {expected}."
            );
        }
    }
}
