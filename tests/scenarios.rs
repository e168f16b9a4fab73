use bounded_stack::{BoundedStack, StackError, DEFAULT_CAPACITY};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;

#[test]
fn test_integer_pushes_pop_in_reverse() {
    let mut system_under_test = BoundedStack::new();
    for value in [10, 20, 30] {
        system_under_test.push(value).unwrap();
    }
    assert_eq!(system_under_test.size(), 3);

    for (expected_value, expected_size) in [(30, 2), (20, 1), (10, 0)] {
        assert_eq!(system_under_test.pop(), Ok(expected_value));
        assert_eq!(system_under_test.size(), expected_size);
    }
    assert!(system_under_test.is_empty());
}

#[test]
fn test_doubles_fill_default_capacity() {
    let mut system_under_test = BoundedStack::new();
    for i in 0..100 {
        system_under_test.push(i as f64 * 1.1).unwrap();
    }
    assert_eq!(system_under_test.size(), 100);

    assert_eq!(
        system_under_test.push(101.1),
        Err(StackError::CapacityExceeded {
            capacity: DEFAULT_CAPACITY
        })
    );
    assert_eq!(system_under_test.size(), 100);
    assert_eq!(system_under_test.peek(), Ok(&(99.0 * 1.1)));
}

#[test]
fn test_fresh_stack_underflows() {
    let mut system_under_test: BoundedStack<i32> = BoundedStack::new();
    assert!(system_under_test.is_empty());
    assert_eq!(system_under_test.pop(), Err(StackError::EmptyContainer));
    assert_eq!(system_under_test.size(), 0);
}

#[test]
fn test_strings_pop_in_reverse() {
    let mut system_under_test = BoundedStack::new();
    for word in ["Hello", "World", "!"] {
        system_under_test.push(word.to_string()).unwrap();
    }

    let popped: Vec<String> = (0..3).map(|_| system_under_test.pop().unwrap()).collect();
    assert_eq!(popped, ["!", "World", "Hello"]);
}

#[test]
fn test_vector_pop_returns_last_pushed_unmodified() {
    let mut system_under_test = BoundedStack::new();
    system_under_test.push(vec![1, 2, 3]).unwrap();
    system_under_test.push(vec![4, 5, 6]).unwrap();

    assert_eq!(system_under_test.pop(), Ok(vec![4, 5, 6]));
    assert_eq!(system_under_test.peek(), Ok(&vec![1, 2, 3]));
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(100)]
fn test_lifo_order(#[case] count: u32) {
    let mut system_under_test = BoundedStack::new();
    for value in 0..count {
        system_under_test.push(value).unwrap();
    }

    let popped: Vec<u32> = (0..count).map(|_| system_under_test.pop().unwrap()).collect();
    let expected: Vec<u32> = (0..count).rev().collect();
    assert_eq!(popped, expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn test_peek_repeats_without_mutating(#[case] depth: usize) {
    let mut system_under_test = BoundedStack::new();
    for value in 0..=depth {
        system_under_test.push(value).unwrap();
    }

    for _ in 0..10 {
        assert_eq!(system_under_test.peek(), Ok(&depth));
        assert_eq!(system_under_test.size(), depth + 1);
    }
}

/// Random pushes and pops against a small capacity, checked against a `Vec`.
#[rstest]
#[case(0)]
#[case(1)]
#[case(8)]
fn test_random_operations_match_model(#[case] capacity: usize) {
    let mut rng = StdRng::seed_from_u64(0x5eed + capacity as u64);
    let mut system_under_test = BoundedStack::with_capacity(capacity);
    let mut model: Vec<i64> = vec![];

    for _ in 0..2_000 {
        if rng.gen_bool(0.55) {
            let value: i64 = rng.gen();
            let outcome = system_under_test.push(value);
            if model.len() < capacity {
                assert_eq!(outcome, Ok(()));
                model.push(value);
            } else {
                assert_eq!(outcome, Err(StackError::CapacityExceeded { capacity }));
            }
        } else {
            let expected = model.pop().ok_or(StackError::EmptyContainer);
            assert_eq!(system_under_test.pop(), expected);
        }

        assert!(system_under_test.size() <= capacity);
        assert_eq!(system_under_test.size(), model.len());
        assert_eq!(system_under_test.is_empty(), model.is_empty());
        assert_eq!(system_under_test.is_full(), model.len() == capacity);
        assert_eq!(system_under_test.peek().ok(), model.last());
    }
}

#[test]
fn test_push_then_pop_restores_state() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut system_under_test = BoundedStack::with_capacity(32);
    for _ in 0..rng.gen_range(0..32) {
        system_under_test.push(rng.gen::<u16>()).unwrap();
    }
    let size_before = system_under_test.size();
    let top_before = system_under_test.peek().ok().copied();

    system_under_test.push(4242).unwrap();
    assert_eq!(system_under_test.pop(), Ok(4242));

    assert_eq!(system_under_test.size(), size_before);
    assert_eq!(system_under_test.peek().ok().copied(), top_before);
}
