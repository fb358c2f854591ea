use dynarray::{DynArrayError, DynamicArray, Linear};

#[test]
fn test_new_is_empty() {
    let array: DynamicArray<f64> = DynamicArray::new();

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 0);
    assert!(array.is_empty());
}

#[test]
fn test_default_is_empty() {
    let array: DynamicArray<String> = DynamicArray::default();

    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
}

#[test]
fn test_with_size_default_values() {
    let array: DynamicArray<i32> = DynamicArray::with_size(4).unwrap();

    assert_eq!(array.len(), 4);
    assert_eq!(array.capacity(), 4);
    assert_eq!(array.as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn test_with_size_zero_allocates_nothing() {
    let array: DynamicArray<i32> = DynamicArray::with_size(0).unwrap();

    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
}

#[test]
fn test_filled() {
    let array: DynamicArray<String> = DynamicArray::filled(3, &"abc".to_string()).unwrap();

    assert_eq!(array.len(), 3);
    assert_eq!(array.capacity(), 3);
    for i in 0..3 {
        assert_eq!(array[i], "abc");
    }
}

#[test]
fn test_from_slice_preserves_order() {
    let values = [3.5, -1.0, 0.0, 8.25];
    let array: DynamicArray<f64> = DynamicArray::from_slice(&values).unwrap();

    assert_eq!(array.len(), values.len());
    assert_eq!(array.capacity(), values.len());
    for (i, value) in values.iter().enumerate() {
        assert_eq!(array.get(i).unwrap(), value);
    }
}

#[test]
fn test_from_empty_slice() {
    let array: DynamicArray<u8> = DynamicArray::from_slice(&[]).unwrap();

    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
}

#[test]
fn test_try_from_slice() {
    let array = DynamicArray::<char, Linear>::try_from(&['a', 'b'][..]).unwrap();

    assert_eq!(array.as_slice(), &['a', 'b']);
    assert_eq!(array.capacity(), 2);
}

#[test]
fn test_with_size_impossible_allocation() {
    let result: Result<DynamicArray<u64>, _> = DynamicArray::with_size(usize::MAX);

    assert_eq!(
        result.unwrap_err(),
        DynArrayError::AllocationError {
            requested: usize::MAX
        }
    );
}

#[test]
fn test_filled_impossible_allocation() {
    let result: Result<DynamicArray<u32>, _> = DynamicArray::filled(usize::MAX, &7);

    assert!(matches!(
        result,
        Err(DynArrayError::AllocationError { .. })
    ));
}
