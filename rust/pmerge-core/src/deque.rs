//! Merge-insertion sort backed by `VecDeque`.
//!
//! Same algorithm as [`crate::vector`], written against the ring buffer:
//! the first minor is a `push_front`, and middle insertions move whichever
//! side of the insertion point is shorter.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::jacobsthal;
use crate::pair::{Pair, Slot};
use crate::stats::SortStats;
use crate::Element;

/// Sort `values` ascending in place.
///
/// `values` must hold distinct elements; see the crate docs.
pub fn sort(values: &mut VecDeque<Element>) -> SortStats {
    let mut stats = SortStats::default();
    let slots: VecDeque<Slot> = values
        .iter()
        .enumerate()
        .map(|(tag, &value)| Slot::new(value, tag))
        .collect();

    let chain = merge_insert(slots, 1, &mut stats);

    values.clear();
    values.extend(chain.into_iter().map(|slot| slot.value));

    debug!(
        container = "VecDeque",
        elements = values.len(),
        comparisons = stats.comparisons,
        insertions = stats.insertions,
        depth = stats.depth,
        "merge-insertion sort finished"
    );
    stats
}

fn merge_insert(
    mut items: VecDeque<Slot>,
    depth: usize,
    stats: &mut SortStats,
) -> VecDeque<Slot> {
    stats.enter_level(depth);
    if items.len() <= 1 {
        return items;
    }

    let (pairs, leftover) = build_pairs(&mut items, stats);
    trace!(
        depth,
        pairs = pairs.len(),
        leftover = leftover.is_some(),
        "deque level"
    );

    let mut majors = VecDeque::with_capacity(pairs.len());
    for (index, pair) in pairs.iter().enumerate() {
        majors.push_back(pair.major_for_recursion(index));
    }
    let sorted_majors = merge_insert(majors, depth + 1, stats);

    let mut chain = insert_minors(&sorted_majors, &pairs, stats);
    if let Some(slot) = leftover {
        binary_insert(&mut chain, slot, stats);
    }
    chain
}

fn build_pairs(
    items: &mut VecDeque<Slot>,
    stats: &mut SortStats,
) -> (VecDeque<Pair>, Option<Slot>) {
    let leftover = if items.len() % 2 == 1 {
        items.back().copied()
    } else {
        None
    };

    let mut pairs = VecDeque::with_capacity(items.len() / 2);
    let mut i = 0;
    while i + 1 < items.len() {
        stats.comparisons += 1;
        if items[i].value < items[i + 1].value {
            items.swap(i, i + 1);
        }
        pairs.push_back(Pair::new(items[i], items[i + 1]));
        i += 2;
    }
    (pairs, leftover)
}

fn insert_minors(
    sorted_majors: &VecDeque<Slot>,
    pairs: &VecDeque<Pair>,
    stats: &mut SortStats,
) -> VecDeque<Slot> {
    let snapshot: VecDeque<Pair> = sorted_majors.iter().map(|major| pairs[major.tag]).collect();

    let mut chain: VecDeque<Slot> = VecDeque::with_capacity(snapshot.len() * 2 + 1);
    chain.extend(snapshot.iter().map(|pair| pair.major));

    let Some(first) = snapshot.front() else {
        return chain;
    };
    chain.push_front(first.minor);
    stats.insertions += 1;

    let count = snapshot.len();
    if count == 1 {
        return chain;
    }

    let terms = jacobsthal::schedule(count);
    for k in 1..terms.len() {
        let upper = terms[k];
        let lower = terms[k - 1];
        let mut index = upper;
        while index > lower {
            if index <= count {
                binary_insert(&mut chain, snapshot[index - 1].minor, stats);
            }
            index -= 1;
        }
    }
    chain
}

fn binary_insert(chain: &mut VecDeque<Slot>, slot: Slot, stats: &mut SortStats) {
    let mut low = 0;
    let mut high = chain.len();
    while low < high {
        let mid = low + (high - low) / 2;
        stats.comparisons += 1;
        if chain[mid].value < slot.value {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    chain.insert(low, slot);
    stats.insertions += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(values: &[Element]) -> VecDeque<Slot> {
        values
            .iter()
            .enumerate()
            .map(|(tag, &value)| Slot::new(value, tag))
            .collect()
    }

    fn values(chain: &VecDeque<Slot>) -> Vec<Element> {
        chain.iter().map(|s| s.value).collect()
    }

    #[test]
    fn odd_tail_becomes_leftover() {
        let mut items = slots(&[3, 5, 9, 7, 4, 1, 6]);
        let (pairs, leftover) = build_pairs(&mut items, &mut SortStats::default());
        assert_eq!(pairs.len(), 3);
        assert_eq!(leftover, Some(Slot::new(6, 6)));
        assert_eq!(pairs[2].major.value, 4);
        assert_eq!(pairs[2].minor.value, 1);
    }

    #[test]
    fn even_input_has_no_leftover() {
        let mut items = slots(&[2, 1, 4, 3]);
        let (pairs, leftover) = build_pairs(&mut items, &mut SortStats::default());
        assert_eq!(pairs.len(), 2);
        assert!(leftover.is_none());
        assert_eq!(values(&items), vec![2, 1, 4, 3]);
    }

    #[test]
    fn binary_insert_into_empty_chain() {
        let mut chain = VecDeque::new();
        let mut stats = SortStats::default();
        binary_insert(&mut chain, Slot::new(7, 0), &mut stats);
        assert_eq!(values(&chain), vec![7]);
        assert_eq!(stats.comparisons, 0);
    }

    #[test]
    fn binary_insert_probes_logarithmically() {
        let mut chain = slots(&(0..1024).map(|v| v * 2).collect::<Vec<_>>());
        let mut stats = SortStats::default();
        binary_insert(&mut chain, Slot::new(777, 0), &mut stats);
        assert!(stats.comparisons <= 11);
        let position = chain.iter().position(|s| s.value == 777).unwrap();
        assert_eq!(chain[position - 1].value, 776);
        assert_eq!(chain[position + 1].value, 778);
    }

    #[test]
    fn schedule_order_places_every_minor() {
        // five pairs already in major order
        let pairs: VecDeque<Pair> = (0..5)
            .map(|i| {
                let tag = 2 * i as usize;
                Pair::new(Slot::new(i * 10 + 9, tag), Slot::new(i * 10, tag + 1))
            })
            .collect();
        let sorted_majors: VecDeque<Slot> =
            (0..5).map(|i| Slot::new(i as u32 * 10 + 9, i)).collect();
        let mut stats = SortStats::default();
        let chain = insert_minors(&sorted_majors, &pairs, &mut stats);
        assert_eq!(values(&chain), vec![0, 9, 10, 19, 20, 29, 30, 39, 40, 49]);
        assert_eq!(stats.insertions, 5);
    }
}
