use super::*;
use quickcheck::quickcheck;
use std::collections::BTreeSet;

fn as_set(subsets: &[Vec<i32>]) -> BTreeSet<Vec<i32>> {
    subsets.iter().cloned().collect()
}

fn all_algorithms(input: &[i32]) -> [Vec<Vec<i32>>; 3] {
    [
        subsets_recursive(input),
        subsets_stack(input),
        subsets_doubling(input),
    ]
}

#[test]
fn empty_input() {
    for output in all_algorithms(&[]) {
        /* Exactly one subset: the empty one. */
        assert_eq!(output, vec![Vec::<i32>::new()]);
    }
}

#[test]
fn three_elements_as_set() {
    let expected = as_set(&[
        vec![],
        vec![1],
        vec![2],
        vec![3],
        vec![1, 2],
        vec![1, 3],
        vec![2, 3],
        vec![1, 2, 3],
    ]);

    for output in all_algorithms(&[1, 2, 3]) {
        assert_eq!(output.len(), 8);
        assert_eq!(as_set(&output), expected);
    }
}

#[test]
fn recursive_emission_order() {
    let output = subsets_recursive(&[1, 2, 3]);

    /* Include-branch first: the full sequence leads, the empty subset trails. */
    assert_eq!(output.first(), Some(&vec![1, 2, 3]));
    assert_eq!(output.last(), Some(&vec![]));
    assert_eq!(
        output,
        vec![
            vec![1, 2, 3],
            vec![1, 2],
            vec![1, 3],
            vec![1],
            vec![2, 3],
            vec![2],
            vec![3],
            vec![],
        ]
    );
}

#[test]
fn doubling_emission_order() {
    let output = subsets_doubling(&[1, 2, 3]);

    /* Each element doubles the accumulated block: subsets without it precede their
    extended counterparts. */
    assert_eq!(
        output,
        vec![
            vec![],
            vec![1],
            vec![2],
            vec![1, 2],
            vec![3],
            vec![1, 3],
            vec![2, 3],
            vec![1, 2, 3],
        ]
    );
}

#[test]
fn subsets_preserve_relative_order() {
    for output in all_algorithms(&[10, 20, 30, 40]) {
        for subset in &output {
            let mut sorted = subset.clone();
            sorted.sort();
            /* Input elements are ascending, so order-preserving subsets are too. */
            assert_eq!(subset, &sorted);
        }
    }
}

#[test]
fn exhaustive_small_lengths() {
    for n in 0..=8usize {
        let input = (0..n as i32).collect::<Vec<_>>();
        let [rec, stk, dbl] = all_algorithms(&input);

        assert_eq!(rec.len(), 1 << n);
        assert_eq!(stk.len(), 1 << n);
        assert_eq!(dbl.len(), 1 << n);

        let rec_set = as_set(&rec);
        /* No duplicates, no omissions. */
        assert_eq!(rec_set.len(), 1 << n);
        assert_eq!(rec_set, as_set(&stk));
        assert_eq!(rec_set, as_set(&dbl));
    }
}

/// Caps the length and deduplicates elements, keeping first occurrences.
///
/// Distinctness matters: with repeated elements, distinct include/exclude decisions
/// produce equal subsets, and the `2^n`-distinct-subsets property no longer holds.
fn distinct_prefix(input: Vec<i32>) -> Vec<i32> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for elem in input {
        if seen.insert(elem) {
            out.push(elem);
        }
        if out.len() == 10 {
            break;
        }
    }
    out
}

quickcheck! {
    fn algorithms_agree_as_sets(input: Vec<i32>) -> bool {
        let input = distinct_prefix(input);
        let n = input.len();
        let [rec, stk, dbl] = all_algorithms(&input);

        let rec_set = as_set(&rec);
        let stk_set = as_set(&stk);
        let dbl_set = as_set(&dbl);

        rec.len() == 1 << n
            && stk.len() == 1 << n
            && dbl.len() == 1 << n
            && rec_set.len() == 1 << n
            && rec_set == stk_set
            && rec_set == dbl_set
    }
}
