//! Lexicographic enumeration of k-element subsets of `0..n`
//!
//! Shared by the exhaustive cut enumeration and token graph construction.

/// Iterator over all k-element subsets of `0..n` in lexicographic order.
///
/// Yields each subset as a sorted `Vec<usize>`. `k = 0` yields the single
/// empty subset; `k > n` yields nothing.
#[derive(Debug, Clone)]
pub struct SubsetIter {
    n: usize,
    k: usize,
    current: Vec<usize>,
    done: bool,
}

impl SubsetIter {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            current: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for SubsetIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let subset = self.current.clone();

        // Advance: find the rightmost position that can still move up.
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.current[i] < self.n - self.k + i {
                self.current[i] += 1;
                for j in (i + 1)..self.k {
                    self.current[j] = self.current[j - 1] + 1;
                }
                break;
            }
        }
        Some(subset)
    }
}

/// Binomial coefficient C(n, k), saturating at `usize::MAX`
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        result = match result.checked_mul(n - i) {
            Some(r) => r / (i + 1),
            None => return usize::MAX,
        };
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsets_of_four_choose_two() {
        let subsets: Vec<_> = SubsetIter::new(4, 2).collect();
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn test_empty_and_degenerate_cases() {
        assert_eq!(
            SubsetIter::new(3, 0).collect::<Vec<_>>(),
            vec![Vec::<usize>::new()]
        );
        assert_eq!(SubsetIter::new(2, 3).count(), 0);
        assert_eq!(SubsetIter::new(0, 0).count(), 1);
    }

    #[test]
    fn test_count_matches_binomial() {
        for n in 0..8 {
            for k in 0..=n {
                assert_eq!(SubsetIter::new(n, k).count(), binomial(n, k), "C({n},{k})");
            }
        }
    }

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(10, 5), 252);
        assert_eq!(binomial(6, 3), 20);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(3, 4), 0);
    }
}
