use std::collections::VecDeque;

use crate::{deque, vector, Element, MergeInsert, SortStats};

fn sort_vec(values: &[Element]) -> Vec<Element> {
    let mut v = values.to_vec();
    vector::sort(&mut v);
    v
}

fn sort_deque(values: &[Element]) -> Vec<Element> {
    let mut d: VecDeque<Element> = values.iter().copied().collect();
    deque::sort(&mut d);
    d.into_iter().collect()
}

// ─── Base cases ─────────────────────────────────────────────────────────

#[test]
fn empty_input() {
    assert_eq!(sort_vec(&[]), Vec::<Element>::new());
    assert_eq!(sort_deque(&[]), Vec::<Element>::new());
}

#[test]
fn single_element() {
    assert_eq!(sort_vec(&[42]), vec![42]);
    assert_eq!(sort_deque(&[42]), vec![42]);
}

#[test]
fn empty_and_single_do_no_work() {
    let mut v: Vec<Element> = vec![];
    assert_eq!(v.merge_insert_sort(), SortStats { comparisons: 0, insertions: 0, depth: 1 });
    let mut d: VecDeque<Element> = VecDeque::from(vec![7]);
    assert_eq!(d.merge_insert_sort(), SortStats { comparisons: 0, insertions: 0, depth: 1 });
}

#[test]
fn two_elements() {
    assert_eq!(sort_vec(&[5, 3]), vec![3, 5]);
    assert_eq!(sort_vec(&[3, 5]), vec![3, 5]);
    assert_eq!(sort_deque(&[5, 3]), vec![3, 5]);
    assert_eq!(sort_deque(&[3, 5]), vec![3, 5]);
}

#[test]
fn two_elements_cost_one_comparison() {
    let mut v: Vec<Element> = vec![5, 3];
    let stats = v.merge_insert_sort();
    assert_eq!(stats.comparisons, 1);
    assert_eq!(stats.insertions, 1);
    assert_eq!(stats.depth, 2);
}

// ─── Reference examples ─────────────────────────────────────────────────

#[test]
fn reference_example() {
    assert_eq!(sort_vec(&[3, 5, 9, 7, 4]), vec![3, 4, 5, 7, 9]);
    assert_eq!(sort_deque(&[3, 5, 9, 7, 4]), vec![3, 4, 5, 7, 9]);
}

#[test]
fn even_length_with_small_tail() {
    assert_eq!(sort_vec(&[3, 5, 9, 7, 4, 1]), vec![1, 3, 4, 5, 7, 9]);
    assert_eq!(sort_deque(&[3, 5, 9, 7, 4, 1]), vec![1, 3, 4, 5, 7, 9]);
}

#[test]
fn odd_leftover_smaller_than_everything() {
    assert_eq!(sort_vec(&[8, 6, 4, 2, 0]), vec![0, 2, 4, 6, 8]);
    assert_eq!(sort_deque(&[8, 6, 4, 2, 0]), vec![0, 2, 4, 6, 8]);
}

#[test]
fn odd_leftover_larger_than_everything() {
    assert_eq!(sort_vec(&[1, 2, 3, 4, 100]), vec![1, 2, 3, 4, 100]);
    assert_eq!(sort_deque(&[1, 2, 3, 4, 100]), vec![1, 2, 3, 4, 100]);
}

#[test]
fn boundary_values() {
    let input = [crate::MAX_ELEMENT, 0, 1, crate::MAX_ELEMENT - 1];
    let expected = vec![0, 1, crate::MAX_ELEMENT - 1, crate::MAX_ELEMENT];
    assert_eq!(sort_vec(&input), expected);
    assert_eq!(sort_deque(&input), expected);
}

// ─── Exhaustive small permutations ──────────────────────────────────────

fn permutations(n: usize) -> Vec<Vec<Element>> {
    fn go(prefix: &mut Vec<Element>, rest: &mut Vec<Element>, out: &mut Vec<Vec<Element>>) {
        if rest.is_empty() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..rest.len() {
            let v = rest.remove(i);
            prefix.push(v);
            go(prefix, rest, out);
            prefix.pop();
            rest.insert(i, v);
        }
    }
    let mut out = Vec::new();
    go(&mut Vec::new(), &mut (0..n as Element).collect(), &mut out);
    out
}

#[test]
fn every_permutation_up_to_seven() {
    for n in 0..=7 {
        let expected: Vec<Element> = (0..n as Element).collect();
        for perm in permutations(n) {
            assert_eq!(sort_vec(&perm), expected, "vec failed on {:?}", perm);
            assert_eq!(sort_deque(&perm), expected, "deque failed on {:?}", perm);
        }
    }
}

// Probe counts may differ between the two searches; the shape of the work may not.
#[test]
fn backings_agree_on_insertions_and_depth() {
    for perm in permutations(6) {
        let mut v = perm.clone();
        let mut d: VecDeque<Element> = perm.iter().copied().collect();
        let (vs, ds) = (v.merge_insert_sort(), d.merge_insert_sort());
        assert_eq!(vs.insertions, ds.insertions, "input {:?}", perm);
        assert_eq!(vs.depth, ds.depth, "input {:?}", perm);
    }
}

// ─── Container names ────────────────────────────────────────────────────

#[test]
fn container_names() {
    assert_eq!(<Vec<Element> as MergeInsert>::CONTAINER, "Vec");
    assert_eq!(<VecDeque<Element> as MergeInsert>::CONTAINER, "VecDeque");
}
