//! Testing utilities for code built on `Maybe`, `Either`, `Try` and `Stream`.
//!
//! This module provides assertion macros that report the unexpected variant
//! with its payload, a helper for forcing a bounded prefix of a stream, and
//! (behind the `proptest` feature) `Arbitrary` impls for property-based tests.
//!
//! # Examples
//!
//! ```rust
//! use sumkit::{assert_just, assert_right, Either, Maybe};
//!
//! assert_just!(Maybe::just(1));
//! assert_right!(Either::<&str, i32>::right(2));
//! ```

use crate::maybe::Maybe;
use crate::stream::Stream;

/// Assert that a maybe holds a value.
///
/// # Example
///
/// ```rust
/// use sumkit::{assert_just, Maybe};
///
/// assert_just!(Maybe::just(42));
/// ```
#[macro_export]
macro_rules! assert_just {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Just(_) => {}
            $crate::Maybe::Nothing => {
                panic!("Expected Just, got Nothing");
            }
        }
    };
}

/// Assert that a maybe is empty.
#[macro_export]
macro_rules! assert_nothing {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Nothing => {}
            $crate::Maybe::Just(v) => {
                panic!("Expected Nothing, got Just: {:?}", v);
            }
        }
    };
}

/// Assert that an either is a `Left`.
///
/// # Example
///
/// ```rust
/// use sumkit::{assert_left, Either};
///
/// assert_left!(Either::<&str, i32>::left("no"));
/// ```
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(_) => {}
            $crate::Either::Right(v) => {
                panic!("Expected Left, got Right: {:?}", v);
            }
        }
    };
}

/// Assert that an either is a `Right`.
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(_) => {}
            $crate::Either::Left(e) => {
                panic!("Expected Right, got Left: {:?}", e);
            }
        }
    };
}

/// Assert that a try succeeded.
///
/// # Example
///
/// ```rust
/// use sumkit::{assert_success, Try};
///
/// assert_success!(Try::new(|| 1 + 1));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($attempt:expr) => {
        if let ::std::result::Result::Err(e) = $attempt.into_result() {
            panic!("Expected Success, got Failure: {}", e);
        }
    };
}

/// Assert that a try failed.
///
/// # Example
///
/// ```rust
/// use sumkit::{assert_failure, Try};
///
/// assert_failure!(Try::<i32>::from_fallible(|| Err("nope")));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($attempt:expr) => {
        if let ::std::result::Result::Ok(v) = $attempt.into_result() {
            panic!("Expected Failure, got Success: {:?}", v);
        }
    };
}

/// Force at most `n` nodes of a stream and collect their elements.
///
/// Stops early at the first empty node, so it terminates for finite and
/// infinite streams alike.
///
/// # Example
///
/// ```rust
/// use sumkit::testing::take_prefix;
/// use sumkit::Stream;
///
/// let evens = Stream::iterate(0, |n| n + 2);
/// assert_eq!(take_prefix(&evens, 3), vec![0, 2, 4]);
/// ```
pub fn take_prefix<A: Clone>(stream: &Stream<A>, n: usize) -> Vec<A> {
    stream.iter().take(n).collect()
}

/// Heads of the first `n` nodes of a stream, `Nothing` past its end.
pub fn head_prefix<A: Clone>(stream: &Stream<A>, n: usize) -> Vec<Maybe<A>> {
    let mut heads = Vec::with_capacity(n);
    let mut node = stream.clone();
    for _ in 0..n {
        heads.push(node.head_option().clone());
        node = node.tail();
    }
    heads
}

#[cfg(feature = "proptest")]
use crate::either::Either;

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use proptest::strategy::LazyJust;

#[cfg(feature = "proptest")]
impl<A> Arbitrary for Maybe<A>
where
    A: Arbitrary + 'static,
{
    type Parameters = A::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<A>(args).prop_map(Maybe::just),
            LazyJust::new(Maybe::nothing),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<A, B> Arbitrary for Either<A, B>
where
    A: Arbitrary + 'static,
    B: Arbitrary + 'static,
{
    type Parameters = (A::Parameters, B::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (a_params, b_params) = args;
        prop_oneof![
            any_with::<A>(a_params).prop_map(Either::left),
            any_with::<B>(b_params).prop_map(Either::right),
        ]
        .boxed()
    }
}
