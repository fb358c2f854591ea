/// Decides how far a full array grows on `push_back`.
///
/// Only consulted when `len() == capacity()`. Explicit `reserve` calls
/// bypass the policy.
pub trait GrowthPolicy {
    /// Returns the capacity to grow to, or `None` if it overflows `usize`.
    fn next_capacity(current: usize) -> Option<usize>;
}

const MIN_NON_ZERO_CAPACITY: usize = 4;

/// Geometric growth: `max(4, 2 * capacity)`. Amortized O(1) `push_back`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Doubling;

impl GrowthPolicy for Doubling {
    fn next_capacity(current: usize) -> Option<usize> {
        Some(current.checked_mul(2)?.max(MIN_NON_ZERO_CAPACITY))
    }
}

/// Fixed-increment growth: `capacity + STEP`.
///
/// `Linear<5>` (the default) reallocates when the length reaches
/// 0, 5, 10, 15, ...
/// Each reallocation copies the whole array, so `push_back` is O(n)
/// amortized. Use it when the reallocation count matters more than speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Linear<const STEP: usize = 5>;

impl<const STEP: usize> GrowthPolicy for Linear<STEP> {
    fn next_capacity(current: usize) -> Option<usize> {
        current.checked_add(STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubling_sequence() {
        assert_eq!(Doubling::next_capacity(0), Some(4));
        assert_eq!(Doubling::next_capacity(1), Some(4));
        assert_eq!(Doubling::next_capacity(4), Some(8));
        assert_eq!(Doubling::next_capacity(8), Some(16));
    }

    #[test]
    fn test_linear_sequence() {
        assert_eq!(Linear::<5>::next_capacity(0), Some(5));
        assert_eq!(Linear::<5>::next_capacity(5), Some(10));
        assert_eq!(Linear::<5>::next_capacity(10), Some(15));
        assert_eq!(Linear::<1>::next_capacity(3), Some(4));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(Doubling::next_capacity(usize::MAX), None);
        assert_eq!(Linear::<5>::next_capacity(usize::MAX - 2), None);
    }
}
