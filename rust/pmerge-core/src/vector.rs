//! Merge-insertion sort backed by `Vec`.
//!
//! Every level works on owned `Vec<Slot>` buffers. Inserting into the middle
//! shifts the tail, so front insertions are the expensive case here.

use tracing::{debug, trace};

use crate::jacobsthal;
use crate::pair::{Pair, Slot};
use crate::stats::SortStats;
use crate::Element;

/// Sort `values` ascending in place.
///
/// `values` must hold distinct elements; see the crate docs.
pub fn sort(values: &mut Vec<Element>) -> SortStats {
    let mut stats = SortStats::default();
    let slots: Vec<Slot> = values
        .iter()
        .enumerate()
        .map(|(tag, &value)| Slot::new(value, tag))
        .collect();

    let chain = merge_insert(slots, 1, &mut stats);

    values.clear();
    values.extend(chain.into_iter().map(|slot| slot.value));

    debug!(
        container = "Vec",
        elements = values.len(),
        comparisons = stats.comparisons,
        insertions = stats.insertions,
        depth = stats.depth,
        "merge-insertion sort finished"
    );
    stats
}

fn merge_insert(mut items: Vec<Slot>, depth: usize, stats: &mut SortStats) -> Vec<Slot> {
    stats.enter_level(depth);
    if items.len() <= 1 {
        return items;
    }

    let (pairs, leftover) = build_pairs(&mut items, stats);
    trace!(
        depth,
        pairs = pairs.len(),
        leftover = leftover.is_some(),
        "vec level"
    );

    let majors: Vec<Slot> = pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| pair.major_for_recursion(index))
        .collect();
    let sorted_majors = merge_insert(majors, depth + 1, stats);

    let mut chain = insert_minors(&sorted_majors, &pairs, stats);
    if let Some(slot) = leftover {
        binary_insert(&mut chain, slot, stats);
    }
    chain
}

/// Order each adjacent pair larger-first in place and split off the odd tail.
fn build_pairs(items: &mut [Slot], stats: &mut SortStats) -> (Vec<Pair>, Option<Slot>) {
    let mut pairs = Vec::with_capacity(items.len() / 2);
    let mut chunks = items.chunks_exact_mut(2);
    for chunk in &mut chunks {
        stats.comparisons += 1;
        if chunk[0].value < chunk[1].value {
            chunk.swap(0, 1);
        }
        pairs.push(Pair::new(chunk[0], chunk[1]));
    }
    let leftover = chunks.into_remainder().first().copied();
    (pairs, leftover)
}

/// Rebuild the chain from the sorted majors and insert every minor.
///
/// `sorted_majors` carry pair indices as tags, so the snapshot taken here is
/// the pair of each major in chain order. It is read-only from here on.
fn insert_minors(sorted_majors: &[Slot], pairs: &[Pair], stats: &mut SortStats) -> Vec<Slot> {
    let snapshot: Vec<Pair> = sorted_majors.iter().map(|major| pairs[major.tag]).collect();

    let mut chain: Vec<Slot> = Vec::with_capacity(snapshot.len() * 2 + 1);
    chain.extend(snapshot.iter().map(|pair| pair.major));

    let Some(first) = snapshot.first() else {
        return chain;
    };
    // Smaller than its own major, which is the smallest major.
    chain.insert(0, first.minor);
    stats.insertions += 1;

    let count = snapshot.len();
    if count == 1 {
        return chain;
    }

    let terms = jacobsthal::schedule(count);
    for window in terms.windows(2) {
        let (lower, upper) = (window[0], window[1]);
        for index in (lower + 1..=upper).rev() {
            if index > count {
                continue;
            }
            binary_insert(&mut chain, snapshot[index - 1].minor, stats);
        }
    }
    chain
}

/// Insert `slot` before the first element not less than it.
fn binary_insert(chain: &mut Vec<Slot>, slot: Slot, stats: &mut SortStats) {
    let position = chain.partition_point(|probe| {
        stats.comparisons += 1;
        probe.value < slot.value
    });
    chain.insert(position, slot);
    stats.insertions += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(values: &[Element]) -> Vec<Slot> {
        values
            .iter()
            .enumerate()
            .map(|(tag, &value)| Slot::new(value, tag))
            .collect()
    }

    #[test]
    fn pairs_are_major_first_and_keep_input_order() {
        let mut items = slots(&[3, 5, 9, 7, 4]);
        let mut stats = SortStats::default();
        let (pairs, leftover) = build_pairs(&mut items, &mut stats);

        let values: Vec<(Element, Element)> =
            pairs.iter().map(|p| (p.major.value, p.minor.value)).collect();
        assert_eq!(values, vec![(5, 3), (9, 7)]);
        assert_eq!(leftover, Some(Slot::new(4, 4)));
        assert_eq!(stats.comparisons, 2);
        // swapped in place
        assert_eq!(items[0].value, 5);
        assert_eq!(items[1].value, 3);
    }

    #[test]
    fn pairs_keep_original_tags() {
        let mut items = slots(&[1, 2]);
        let (pairs, leftover) = build_pairs(&mut items, &mut SortStats::default());
        assert_eq!(pairs[0].major, Slot::new(2, 1));
        assert_eq!(pairs[0].minor, Slot::new(1, 0));
        assert!(leftover.is_none());
    }

    #[test]
    fn first_minor_goes_to_front() {
        let pairs = vec![Pair::new(Slot::new(9, 0), Slot::new(8, 1))];
        let sorted_majors = vec![Slot::new(9, 0)];
        let mut stats = SortStats::default();
        let chain = insert_minors(&sorted_majors, &pairs, &mut stats);
        let values: Vec<Element> = chain.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![8, 9]);
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.insertions, 1);
    }

    #[test]
    fn minors_follow_their_majors_through_the_snapshot() {
        // pairs in input order; majors sorted as 4 < 6 < 10
        let pairs = vec![
            Pair::new(Slot::new(10, 0), Slot::new(2, 1)),
            Pair::new(Slot::new(4, 2), Slot::new(3, 3)),
            Pair::new(Slot::new(6, 4), Slot::new(5, 5)),
        ];
        let sorted_majors = vec![Slot::new(4, 1), Slot::new(6, 2), Slot::new(10, 0)];
        let chain = insert_minors(&sorted_majors, &pairs, &mut SortStats::default());
        let values: Vec<Element> = chain.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![2, 3, 4, 5, 6, 10]);
    }

    #[test]
    fn binary_insert_finds_first_not_less() {
        let mut chain = slots(&[1, 3, 5, 7]);
        binary_insert(&mut chain, Slot::new(4, 9), &mut SortStats::default());
        binary_insert(&mut chain, Slot::new(0, 9), &mut SortStats::default());
        binary_insert(&mut chain, Slot::new(8, 9), &mut SortStats::default());
        let values: Vec<Element> = chain.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![0, 1, 3, 4, 5, 7, 8]);
    }

    #[test]
    fn depth_counts_levels() {
        let mut values = vec![8, 7, 6, 5, 4, 3, 2, 1];
        let stats = sort(&mut values);
        // 8 -> 4 -> 2 -> 1
        assert_eq!(stats.depth, 4);
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
