/*!
# Subset Enumeration

Subsets of an `n`-element input are encoded as bitmasks where bit `i` selects the `i`-th
element. [`SubsetMasks`] walks all masks with exactly `k` ones in increasing numeric order by
computing the next larger bit pattern with the same number of ones; [`Combinations`] and
[`Powerset`] translate these masks back into element lists.

All iterators are lazy, finite and not restartable: create a new instance to iterate again.
*/

use super::*;

/// Bitmask over at most [`MAX_MASK_ELEMENTS`] elements
pub type SubsetMask = u64;

/// Largest input size supported by mask based enumeration
pub const MAX_MASK_ELEMENTS: usize = 63;

/// Returns the smallest mask larger than `mask` with the same number of ones (or `None` on overflow)
#[inline]
pub fn next_mask_with_same_ones(mask: SubsetMask) -> Option<SubsetMask> {
    if mask == 0 {
        return None;
    }
    let lowest = mask & mask.wrapping_neg();
    let ripple = mask.checked_add(lowest)?;
    Some((((ripple ^ mask) >> 2) / lowest) | ripple)
}

/// Iterates over the set bit positions of a mask in increasing order
#[derive(Debug, Clone, Copy)]
pub struct MaskBits(SubsetMask);

impl MaskBits {
    pub fn new(mask: SubsetMask) -> Self {
        Self(mask)
    }
}

impl Iterator for MaskBits {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let ones = self.0.count_ones() as usize;
        (ones, Some(ones))
    }
}

impl ExactSizeIterator for MaskBits {}

fn check_sizes(n: usize, k: usize) -> Result<()> {
    if k > n {
        return Err(GraphError::invalid_argument(format!(
            "cannot choose {k} out of {n} elements"
        )));
    }
    if n > MAX_MASK_ELEMENTS {
        return Err(GraphError::invalid_argument(format!(
            "subset enumeration supports at most {MAX_MASK_ELEMENTS} elements, got {n}"
        )));
    }
    Ok(())
}

/// All masks over `n` bits with exactly `k` ones, in increasing numeric order.
///
/// # Example
/// ```
/// use grapher::utils::SubsetMasks;
///
/// let masks: Vec<u64> = SubsetMasks::new(4, 2).unwrap().collect();
/// assert_eq!(masks, vec![0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100]);
/// assert!(SubsetMasks::new(2, 3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SubsetMasks {
    next: Option<SubsetMask>,
    limit: SubsetMask,
}

impl SubsetMasks {
    /// Fails with [`GraphError::InvalidArgument`] if `k > n` or `n` exceeds [`MAX_MASK_ELEMENTS`]
    pub fn new(n: usize, k: usize) -> Result<Self> {
        check_sizes(n, k)?;
        Ok(Self {
            next: Some((1 << k) - 1),
            limit: 1 << n,
        })
    }
}

impl Iterator for SubsetMasks {
    type Item = SubsetMask;

    fn next(&mut self) -> Option<SubsetMask> {
        let current = self.next?;
        self.next = next_mask_with_same_ones(current).filter(|&m| m < self.limit);
        Some(current)
    }
}

impl std::iter::FusedIterator for SubsetMasks {}

/// All `k`-element subsets of the input, each as a `Vec` keeping the input order.
///
/// # Example
/// ```
/// use grapher::utils::Combinations;
///
/// let subsets: Vec<Vec<char>> = Combinations::new(vec!['a', 'b', 'c'], 2).unwrap().collect();
/// assert_eq!(subsets, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    items: Vec<T>,
    masks: SubsetMasks,
}

impl<T: Clone> Combinations<T> {
    /// Fails with [`GraphError::InvalidArgument`] if `k` exceeds the number of items
    pub fn new<I>(items: I, k: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let masks = SubsetMasks::new(items.len(), k)?;
        Ok(Self { items, masks })
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let mask = self.masks.next()?;
        Some(MaskBits::new(mask).map(|i| self.items[i].clone()).collect())
    }
}

/// Order in which a [`Powerset`] visits the subset sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeOrder {
    /// Sizes `0, 1, ..., n`
    #[default]
    Ascending,
    /// Sizes `n, n - 1, ..., 0`
    Descending,
}

/// All subsets of the input ordered by their size.
///
/// # Example
/// ```
/// use grapher::utils::Powerset;
///
/// let asc: Vec<Vec<u32>> = Powerset::ascending(vec![1, 2]).unwrap().collect();
/// assert_eq!(asc, vec![vec![], vec![1], vec![2], vec![1, 2]]);
///
/// let desc: Vec<Vec<u32>> = Powerset::descending(vec![1, 2]).unwrap().collect();
/// assert_eq!(desc, vec![vec![1, 2], vec![1], vec![2], vec![]]);
/// ```
#[derive(Debug, Clone)]
pub struct Powerset<T> {
    items: Vec<T>,
    order: SizeOrder,
    size: usize,
    masks: Option<SubsetMasks>,
}

impl<T: Clone> Powerset<T> {
    /// Creates a powerset iterator visiting sizes in the given order
    pub fn new<I>(items: I, order: SizeOrder) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let n = items.len();
        let size = match order {
            SizeOrder::Ascending => 0,
            SizeOrder::Descending => n,
        };
        let masks = Some(SubsetMasks::new(n, size)?);
        Ok(Self {
            items,
            order,
            size,
            masks,
        })
    }

    /// Subsets from the smallest (empty) to the largest (full)
    pub fn ascending<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(items, SizeOrder::Ascending)
    }

    /// Subsets from the largest (full) to the smallest (empty)
    pub fn descending<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(items, SizeOrder::Descending)
    }

    /// Size of the subsets currently produced
    pub fn current_size(&self) -> usize {
        self.size
    }

    /// Number of elements of the input
    pub fn number_of_items(&self) -> usize {
        self.items.len()
    }

    /// Total number of subsets `2^n`
    pub fn number_of_subsets(&self) -> u64 {
        1u64 << self.items.len()
    }

    fn advance_size(&mut self) -> bool {
        let n = self.items.len();
        let next = match self.order {
            SizeOrder::Ascending if self.size < n => self.size + 1,
            SizeOrder::Descending if self.size > 0 => self.size - 1,
            _ => return false,
        };
        self.size = next;
        self.masks = SubsetMasks::new(n, next).ok();
        self.masks.is_some()
    }
}

impl<T: Clone> Iterator for Powerset<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        loop {
            if let Some(mask) = self.masks.as_mut()?.next() {
                return Some(MaskBits::new(mask).map(|i| self.items[i].clone()).collect());
            }
            if !self.advance_size() {
                self.masks = None;
                return None;
            }
        }
    }
}
