use core::ops::Add;

use crate::core::DynamicArray;
use crate::error::DynArrayError;
use crate::growth::GrowthPolicy;

impl<T, G> DynamicArray<T, G>
where
    T: Default + Clone + Add<Output = T>,
    G: GrowthPolicy,
{
    /// Element-wise sum of two arrays of the same length.
    ///
    /// The result reports to this array's observer, if any.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::LengthMismatch` if the lengths differ, before
    /// anything is allocated, or `DynArrayError::AllocationError` if the
    /// result cannot be allocated.
    pub fn try_add(&self, other: &Self) -> Result<Self, DynArrayError> {
        if self.len() != other.len() {
            return Err(DynArrayError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        let mut result = Self::new();
        result.set_observer(self.observer());
        for (left, right) in self.as_slice().iter().zip(other.as_slice()) {
            result.push_back(left.clone() + right.clone())?;
        }
        Ok(result)
    }
}

/// `&a + &b` is `a.try_add(&b)`.
impl<'a, T, G> Add<&'a DynamicArray<T, G>> for &'a DynamicArray<T, G>
where
    T: Default + Clone + Add<Output = T>,
    G: GrowthPolicy,
{
    type Output = Result<DynamicArray<T, G>, DynArrayError>;

    fn add(self, other: &'a DynamicArray<T, G>) -> Self::Output {
        self.try_add(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::Linear;

    #[test]
    fn test_add_is_built_by_push_back() {
        let a: DynamicArray<i32, Linear> = DynamicArray::from_slice(&[1, 2, 3]).unwrap();
        let b: DynamicArray<i32, Linear> = DynamicArray::from_slice(&[10, 20, 30]).unwrap();

        let sum = a.try_add(&b).unwrap();

        assert_eq!(sum.as_slice(), &[11, 22, 33]);
        // grown from empty by one step of the policy, not sized up front
        assert_eq!(sum.capacity(), 5);
    }

    #[test]
    fn test_add_of_empty_arrays() {
        let a: DynamicArray<i32> = DynamicArray::new();
        let b: DynamicArray<i32> = DynamicArray::new();

        let sum = (&a + &b).unwrap();

        assert!(sum.is_empty());
        assert_eq!(sum.capacity(), 0);
    }
}
