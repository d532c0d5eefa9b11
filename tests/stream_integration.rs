//! Infinite and finite stream scenarios.

use std::cell::Cell;
use std::rc::Rc;

use sumkit::testing::{head_prefix, take_prefix};
use sumkit::{Maybe, Stream};

fn naturals_from(n: u64) -> Stream<u64> {
    Stream::cons(n, move || naturals_from(n + 1))
}

#[test]
fn naturals_first_five_nodes() {
    let heads = head_prefix(&naturals_from(0), 5);
    assert_eq!(
        heads,
        (0u64..5).map(Maybe::just).collect::<Vec<_>>()
    );
}

#[test]
fn naturals_are_unbounded_until_bounded_by_caller() {
    let s = naturals_from(0);
    assert_eq!(s.iter().take(1000).last(), Some(999));
    assert_eq!(s.iter().nth(10_000), Some(10_000));
}

#[test]
fn empty_stream_is_fixpoint_under_repeated_forcing() {
    let empty = Stream::<String>::empty();
    assert_eq!(empty.tail().head_option(), &Maybe::Nothing);
    assert_eq!(empty.tail().tail().tail().head_option(), &Maybe::Nothing);
    assert!(empty.iter().next().is_none());
}

#[test]
fn derived_stream_built_by_hand() {
    // squares of the naturals, built from cons/tail only
    fn squares(source: Stream<u64>) -> Stream<u64> {
        let head = *source.head_option();
        match head {
            Maybe::Just(n) => Stream::cons(n * n, move || squares(source.tail())),
            Maybe::Nothing => Stream::empty(),
        }
    }

    assert_eq!(take_prefix(&squares(naturals_from(1)), 5), vec![1, 4, 9, 16, 25]);
}

#[test]
fn each_tail_access_reruns_the_computation() {
    let evaluations = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&evaluations);
    let s = Stream::cons(0u64, move || {
        counter.set(counter.get() + 1);
        naturals_from(1)
    });

    for _ in 0..3 {
        assert_eq!(s.tail().head_option(), &Maybe::just(1));
    }
    assert_eq!(evaluations.get(), 3);

    let cached = s.tail();
    let _ = cached.head_option();
    let _ = cached.head_option();
    assert_eq!(evaluations.get(), 4);
}
