//! Jacobsthal insertion schedule.
//!
//! The terms used for scheduling start at `J(1) = 1, J(2) = 3` and follow
//! `J(k) = J(k-1) + 2 * J(k-2)`: 1, 3, 5, 11, 21, 43, ...
//!
//! Consecutive terms bound a window of pair indices. Within a window the
//! minors are inserted from the highest index down, which keeps every binary
//! search inside a chain segment whose length is just under a power of two.

/// Iterator over the scheduling terms. Ends rather than overflowing `usize`.
#[derive(Debug, Clone)]
pub struct Jacobsthal {
    current: Option<usize>,
    next: Option<usize>,
}

impl Jacobsthal {
    pub fn new() -> Self {
        Jacobsthal {
            current: Some(1),
            next: Some(3),
        }
    }
}

impl Default for Jacobsthal {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Jacobsthal {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let term = self.current?;
        let following = match self.next {
            Some(next) => term.checked_mul(2).and_then(|double| next.checked_add(double)),
            None => None,
        };
        self.current = self.next;
        self.next = following;
        Some(term)
    }
}

/// Terms up to and including the first one `>= pair_count`.
///
/// The first two terms are always present, so small inputs still get the
/// `(1, 3]` window.
pub fn schedule(pair_count: usize) -> Vec<usize> {
    let mut terms = Vec::new();
    for term in Jacobsthal::new() {
        terms.push(term);
        if terms.len() >= 2 && term >= pair_count {
            break;
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_terms() {
        let terms: Vec<usize> = Jacobsthal::new().take(8).collect();
        assert_eq!(terms, vec![1, 3, 5, 11, 21, 43, 85, 171]);
    }

    #[test]
    fn recurrence_holds() {
        let terms: Vec<usize> = Jacobsthal::new().take(40).collect();
        for k in 2..terms.len() {
            assert_eq!(terms[k], terms[k - 1] + 2 * terms[k - 2]);
        }
    }

    #[test]
    fn strictly_increasing_until_exhausted() {
        let terms: Vec<usize> = Jacobsthal::new().collect();
        assert!(terms.len() > 40);
        assert!(terms.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn schedule_for_small_counts_keeps_first_window() {
        assert_eq!(schedule(0), vec![1, 3]);
        assert_eq!(schedule(1), vec![1, 3]);
        assert_eq!(schedule(2), vec![1, 3]);
        assert_eq!(schedule(3), vec![1, 3]);
    }

    #[test]
    fn schedule_stops_at_first_term_reaching_count() {
        assert_eq!(schedule(4), vec![1, 3, 5]);
        assert_eq!(schedule(5), vec![1, 3, 5]);
        assert_eq!(schedule(6), vec![1, 3, 5, 11]);
        assert_eq!(schedule(11), vec![1, 3, 5, 11]);
        assert_eq!(schedule(12), vec![1, 3, 5, 11, 21]);
        assert_eq!(
            schedule(1500),
            vec![1, 3, 5, 11, 21, 43, 85, 171, 341, 683, 1365, 2731]
        );
    }

    #[test]
    fn schedule_last_term_covers_every_count() {
        for count in 0..2000 {
            let terms = schedule(count);
            let last = *terms.last().unwrap();
            assert!(last >= count);
            if terms.len() > 2 {
                assert!(terms[terms.len() - 2] < count);
            }
        }
    }
}
