/*!
# Permutations

Every permutation of `n` elements is described by a counter in the factorial number system:
digit `i` (with radix `n - i`) selects which of the remaining elements is placed at position
`i`. Advancing the counter by one therefore walks through all `n!` permutations.

The counter starts at zero and is advanced *before* a permutation is produced, so the
identity permutation (the all-zero counter) is delivered last.
*/

/// All permutations of the input (elements are treated as distinct, regardless of equality).
///
/// # Example
/// ```
/// use grapher::utils::Permutations;
///
/// let perms: Vec<Vec<u32>> = Permutations::new(vec![0, 1, 2]).collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms.last(), Some(&vec![0, 1, 2]));
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    counter: Vec<usize>,
    delivered_first: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let counter = vec![0; items.len()];
        Self {
            items,
            counter,
            delivered_first: false,
        }
    }

    /// Returns *false* once the identity permutation has been delivered
    pub fn has_next(&self) -> bool {
        !self.delivered_first || self.counter.iter().any(|&d| d != 0)
    }

    fn advance_counter(&mut self) {
        let mut radix = 1;
        for digit in self.counter.iter_mut().rev() {
            *digit = (*digit + 1) % radix;
            if *digit != 0 {
                break;
            }
            radix += 1;
        }
    }

    fn current(&self) -> Vec<T> {
        let mut remaining = self.items.clone();
        self.counter
            .iter()
            .map(|&digit| remaining.remove(digit))
            .collect()
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if !self.has_next() {
            return None;
        }
        self.delivered_first = true;
        self.advance_counter();
        Some(self.current())
    }
}

impl<T: Clone> std::iter::FusedIterator for Permutations<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::checked_factorial;
    use itertools::Itertools;

    #[test]
    fn all_distinct_permutations() {
        for n in 0..7u32 {
            let perms = Permutations::new(0..n).collect_vec();
            assert_eq!(perms.len() as u64, checked_factorial(n as u64).unwrap());
            assert_eq!(perms.iter().unique().count(), perms.len());
            for p in &perms {
                assert_eq!(p.iter().copied().sorted().collect_vec(), (0..n).collect_vec());
            }
            assert_eq!(perms.last(), Some(&(0..n).collect_vec()));
        }
    }

    #[test]
    fn exhausted_after_identity() {
        let mut it = Permutations::new(['x', 'y']);
        assert!(it.has_next());
        assert_eq!(it.next(), Some(vec!['y', 'x']));
        assert!(it.has_next());
        assert_eq!(it.next(), Some(vec!['x', 'y']));
        assert!(!it.has_next());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn equal_elements_are_distinct() {
        assert_eq!(Permutations::new([7, 7, 7]).count(), 6);
    }
}
