//! Integration tests for the criteria crate.
//!
//! These tests verify that criteria, combinators and the sequence filter
//! work together through the public API only.

use criteria::{from_fn, AllOf, AnyOf, BoxedCriteria, Criteria, ParallelCriteriaExt, SequenceExt};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    total_cents: u64,
    country: &'static str,
}

fn create_test_orders() -> Vec<Order> {
    vec![
        Order { id: 1, total_cents: 1_500, country: "NL" },
        Order { id: 2, total_cents: 12_000, country: "DE" },
        Order { id: 3, total_cents: 250, country: "NL" },
        Order { id: 4, total_cents: 99_000, country: "FR" },
        Order { id: 5, total_cents: 7_500, country: "DE" },
    ]
}

fn ids<'a>(orders: impl Iterator<Item = &'a Order>) -> Vec<u32> {
    orders.map(|o| o.id).collect()
}

#[test]
fn test_every_result_satisfies_and_every_dropped_fails() {
    let orders = create_test_orders();
    let large = from_fn(|o: &Order| o.total_cents >= 5_000);

    let kept: HashSet<u32> = ids(orders.iter().that_satisfy(&large)).into_iter().collect();

    for order in &orders {
        assert_eq!(kept.contains(&order.id), large.is_satisfied_by(order));
    }
}

#[test]
fn test_stored_criteria_are_reusable() {
    let orders = create_test_orders();
    let rules: Vec<BoxedCriteria<Order>> = vec![
        from_fn(|o: &Order| o.country == "NL").boxed(),
        from_fn(|o: &Order| o.total_cents > 10_000).boxed(),
    ];

    assert_eq!(ids(orders.iter().that_satisfy(&rules[0])), vec![1, 3]);
    assert_eq!(ids(orders.iter().that_satisfy(&rules[1])), vec![2, 4]);
    // Same instance, second pass, same answer
    assert_eq!(ids(orders.iter().that_satisfy(&rules[0])), vec![1, 3]);
}

#[test]
fn test_sets_and_combinators_nest() {
    let orders = create_test_orders();

    let german_or_french = AnyOf::new()
        .with(from_fn(|o: &Order| o.country == "DE"))
        .with(from_fn(|o: &Order| o.country == "FR"));
    let mid_sized = AllOf::new()
        .with(from_fn(|o: &Order| o.total_cents >= 1_000))
        .with(from_fn(|o: &Order| o.total_cents <= 50_000));

    let picked = ids(orders.iter().that_satisfy(german_or_french.and(mid_sized)));
    assert_eq!(picked, vec![2, 5]);
}

#[test]
fn test_shared_across_threads() {
    let orders = Arc::new(create_test_orders());
    let cheap = Arc::new(from_fn(|o: &Order| o.total_cents < 2_000));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let orders = Arc::clone(&orders);
            let cheap = Arc::clone(&cheap);
            thread::spawn(move || ids(orders.iter().that_satisfy(cheap)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![1, 3]);
    }
}

#[test]
fn test_parallel_agrees_with_lazy() {
    let orders = create_test_orders();
    let domestic = from_fn(|o: &Order| o.country == "NL").not();

    let lazy: Vec<&Order> = orders.iter().that_satisfy(&domestic).collect();
    assert_eq!(orders.par_that_satisfy(&domestic), lazy);
}
