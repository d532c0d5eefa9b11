//! Functor and monad laws shared by `Maybe`, `Either` and `Try`.

use proptest::prelude::*;
use sumkit::{to_maybe, Either, Maybe, Try};

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(to_maybe)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Either::<String, i32>::left),
        any::<i32>().prop_map(Either::<String, i32>::right),
    ]
}

fn inc(v: i32) -> i32 {
    v.wrapping_add(1)
}

fn double(v: i32) -> i32 {
    v.wrapping_mul(2)
}

proptest! {
    #[test]
    fn maybe_functor_identity(m in maybe_strategy()) {
        prop_assert_eq!(m.map(|x| x), m);
    }

    #[test]
    fn maybe_functor_composition(m in maybe_strategy()) {
        prop_assert_eq!(m.map(inc).map(double), m.map(|x| double(inc(x))));
    }

    #[test]
    fn maybe_monad_associativity(m in maybe_strategy()) {
        let f = |x: i32| if x % 3 == 0 { Maybe::nothing() } else { Maybe::just(inc(x)) };
        let g = |x: i32| if x < 0 { Maybe::nothing() } else { Maybe::just(double(x)) };
        prop_assert_eq!(m.flat_map(f).flat_map(g), m.flat_map(|x| f(x).flat_map(g)));
    }

    #[test]
    fn either_functor_identity(e in either_strategy()) {
        prop_assert_eq!(e.clone().map(|x| x), e.clone());
        prop_assert_eq!(e.clone().map_left(|s| s), e);
    }

    #[test]
    fn either_functor_composition(e in either_strategy()) {
        prop_assert_eq!(e.clone().map(inc).map(double), e.map(|x| double(inc(x))));
    }

    #[test]
    fn either_map_and_map_left_commute(e in either_strategy()) {
        let left_fn = |s: String| s.len();
        prop_assert_eq!(
            e.clone().map(inc).map_left(left_fn),
            e.map_left(left_fn).map(inc)
        );
    }

    #[test]
    fn either_monad_left_identity(v: i32) {
        let e: Either<String, i32> = Either::right(v);
        prop_assert_eq!(e.flat_map(Either::right), Either::<String, i32>::right(v));
    }

    #[test]
    fn either_left_is_inert_under_right_ops(s in "[a-z]{0,8}") {
        let e: Either<String, i32> = Either::left(s.clone());
        prop_assert_eq!(e.clone().map(inc), Either::left(s.clone()));
        prop_assert_eq!(e.flat_map(|x| Either::right(double(x))), Either::left(s));
    }

    #[test]
    fn either_right_is_inert_under_left_ops(v: i32) {
        let e: Either<String, i32> = Either::right(v);
        prop_assert_eq!(e.clone().map_left(|s| s.len()), Either::<usize, i32>::right(v));
        prop_assert_eq!(
            e.flat_map_left(|s| Either::<usize, i32>::left(s.len())),
            Either::right(v)
        );
    }

    #[test]
    fn try_functor_composition(v: i32) {
        prop_assert_eq!(
            Try::new(|| v).map(inc).map(double).into_maybe(),
            Try::new(|| v).map(|x| double(inc(x))).into_maybe()
        );
    }

    #[test]
    fn try_monad_left_identity(v: i32) {
        let f = |x: i32| Try::new(move || x.checked_div(x % 5).unwrap_or_else(|| panic!("div by zero")));
        let lhs = Try::new(|| v).flat_map(f);
        let rhs = f(v);
        prop_assert_eq!(lhs.is_success(), rhs.is_success());
        prop_assert_eq!(lhs.into_maybe(), rhs.into_maybe());
    }

    #[test]
    fn try_monad_right_identity(v: i32) {
        let t = Try::new(|| v).flat_map(|x| Try::new(move || x));
        prop_assert_eq!(t.into_maybe(), Maybe::just(v));
    }
}

#[test]
fn try_division_and_parse_examples() {
    assert_eq!(Try::new(|| 42).fold(|s| s, |_| -1), 42);
    assert_eq!(
        Try::<i32>::new(|| panic!("boom")).fold(|s| s, |_| -1),
        -1
    );
}

#[test]
fn get_or_else_does_not_run_default_for_just() {
    assert_eq!(Maybe::just(5).get_or_else(|| panic!("should not run")), 5);
}
