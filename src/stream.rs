//! Lazy, possibly infinite, singly linked sequences.
//!
//! A [`Stream<A>`] node holds its head eagerly, as a [`Maybe<A>`], and its
//! tail as a deferred computation. The tail is produced only when
//! [`Stream::tail`] is called, so a stream can describe an infinite sequence
//! as long as only a finite prefix is ever forced.
//!
//! # Re-evaluation
//!
//! Tails are not memoized. Every call to `tail()` runs the deferred closure
//! again and builds a fresh node. Tail closures are expected to be pure; a
//! caller that wants to share a forced tail keeps the returned `Stream`.
//!
//! # Examples
//!
//! ```rust
//! use sumkit::{Maybe, Stream};
//!
//! fn naturals_from(n: u64) -> Stream<u64> {
//!     Stream::cons(n, move || naturals_from(n + 1))
//! }
//!
//! let s = naturals_from(0);
//! assert_eq!(s.head_option(), &Maybe::just(0));
//! assert_eq!(s.tail().tail().head_option(), &Maybe::just(2));
//!
//! let first: Vec<u64> = s.into_iter().take(5).collect();
//! assert_eq!(first, vec![0, 1, 2, 3, 4]);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::maybe::Maybe;

type Thunk<A> = Rc<dyn Fn() -> Stream<A>>;

/// A lazily evaluated sequence of values of type `A`.
///
/// Built from [`Stream::empty`] and [`Stream::cons`]. An empty stream is its
/// own tail: forcing it yields another empty stream, never a panic or a loop.
pub struct Stream<A> {
    head: Maybe<A>,
    tail: Thunk<A>,
}

impl<A: 'static> Stream<A> {
    /// The empty stream.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Stream;
    ///
    /// let empty = Stream::<i32>::empty();
    /// assert!(empty.is_empty());
    /// assert!(empty.tail().is_empty());
    /// ```
    pub fn empty() -> Self {
        Stream {
            head: Maybe::Nothing,
            tail: Rc::new(Stream::empty),
        }
    }

    /// Prepend `head` to the stream produced by `tail`.
    ///
    /// `tail` is not called here; it runs each time [`Stream::tail`] is
    /// called on the new node.
    pub fn cons<F>(head: A, tail: F) -> Self
    where
        F: Fn() -> Stream<A> + 'static,
    {
        Stream {
            head: Maybe::Just(head),
            tail: Rc::new(tail),
        }
    }

    /// The infinite stream `seed, step(&seed), step(&step(&seed)), ...`.
    ///
    /// Each element is computed only when the node holding it is forced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Stream;
    ///
    /// let powers: Vec<u32> = Stream::iterate(1, |n| n * 2).into_iter().take(6).collect();
    /// assert_eq!(powers, vec![1, 2, 4, 8, 16, 32]);
    /// ```
    pub fn iterate<F>(seed: A, step: F) -> Self
    where
        A: Clone,
        F: Fn(&A) -> A + 'static,
    {
        Self::unfold_from(seed, Rc::new(step))
    }

    fn unfold_from(seed: A, step: Rc<dyn Fn(&A) -> A>) -> Self
    where
        A: Clone,
    {
        let current = seed.clone();
        Stream::cons(seed, move || {
            Self::unfold_from(step(&current), Rc::clone(&step))
        })
    }
}

impl<A> Stream<A> {
    /// The current element, `Nothing` for an empty stream.
    #[inline]
    pub fn head_option(&self) -> &Maybe<A> {
        &self.head
    }

    /// Force the deferred tail.
    ///
    /// Runs the tail computation and returns its result. Calling `tail`
    /// twice runs the computation twice.
    #[inline]
    pub fn tail(&self) -> Stream<A> {
        (self.tail)()
    }

    /// Returns `true` if this node has no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_nothing()
    }

    /// Split the node into its head and a forced tail.
    pub fn uncons(self) -> Maybe<(A, Stream<A>)> {
        let Stream { head, tail } = self;
        head.map(|a| (a, tail()))
    }

    /// Iterate over clones of the elements.
    ///
    /// The iterator forces one tail per element it yields, after the
    /// previous element has been returned. Bound it with `take` when the
    /// stream is infinite.
    pub fn iter(&self) -> IntoIter<A>
    where
        A: Clone,
    {
        self.clone().into_iter()
    }
}

impl<A: Clone> Clone for Stream<A> {
    /// Shares the tail computation; no tail is forced.
    fn clone(&self) -> Self {
        Stream {
            head: self.head.clone(),
            tail: Rc::clone(&self.tail),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Stream<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("head", &self.head)
            .finish_non_exhaustive()
    }
}

impl<A: 'static> Default for Stream<A> {
    fn default() -> Self {
        Stream::empty()
    }
}

/// Owning iterator over a [`Stream`].
pub struct IntoIter<A> {
    state: State<A>,
}

enum State<A> {
    Node(Stream<A>),
    Pending(Thunk<A>),
    Done,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let node = match std::mem::replace(&mut self.state, State::Done) {
            State::Node(node) => node,
            State::Pending(tail) => tail(),
            State::Done => return None,
        };
        let Stream { head, tail } = node;
        head.fold(
            |a| {
                self.state = State::Pending(tail);
                Some(a)
            },
            || None,
        )
    }
}

impl<A> fmt::Debug for IntoIter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Node(_) => "node",
            State::Pending(_) => "pending",
            State::Done => "done",
        };
        f.debug_struct("IntoIter").field("state", &state).finish()
    }
}

impl<A> IntoIterator for Stream<A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            state: State::Node(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn naturals_from(n: u64) -> Stream<u64> {
        Stream::cons(n, move || naturals_from(n + 1))
    }

    #[test]
    fn test_naturals_first_five_heads() {
        let mut node = naturals_from(0);
        let mut heads = Vec::new();
        for _ in 0..5 {
            heads.push(*node.head_option());
            node = node.tail();
        }
        assert_eq!(
            heads,
            vec![
                Maybe::just(0),
                Maybe::just(1),
                Maybe::just(2),
                Maybe::just(3),
                Maybe::just(4)
            ]
        );
    }

    #[test]
    fn test_empty_tail_is_empty() {
        let empty = Stream::<i32>::empty();
        assert_eq!(empty.tail().head_option(), &Maybe::Nothing);
    }

    #[test]
    fn test_empty_tail_is_idempotent() {
        let mut node = Stream::<i32>::empty();
        for _ in 0..100 {
            node = node.tail();
            assert!(node.is_empty());
        }
    }

    #[test]
    fn test_cons_does_not_force_tail() {
        let forced = Rc::new(Cell::new(0));
        let counter = Rc::clone(&forced);
        let s = Stream::cons(1, move || {
            counter.set(counter.get() + 1);
            Stream::empty()
        });
        assert_eq!(forced.get(), 0);
        assert_eq!(s.head_option(), &Maybe::just(1));
        assert_eq!(forced.get(), 0);
    }

    #[test]
    fn test_tail_is_not_memoized() {
        let forced = Rc::new(Cell::new(0));
        let counter = Rc::clone(&forced);
        let s = Stream::cons(1, move || {
            counter.set(counter.get() + 1);
            Stream::cons(2, Stream::empty)
        });

        let first = s.tail();
        let second = s.tail();
        assert_eq!(forced.get(), 2);
        assert_eq!(first.head_option(), second.head_option());
    }

    #[test]
    fn test_clone_shares_tail_computation() {
        let forced = Rc::new(Cell::new(0));
        let counter = Rc::clone(&forced);
        let s = Stream::cons("a", move || {
            counter.set(counter.get() + 1);
            Stream::empty()
        });
        let copy = s.clone();
        assert_eq!(forced.get(), 0);
        let _ = copy.tail();
        let _ = s.tail();
        assert_eq!(forced.get(), 2);
    }

    #[test]
    fn test_finite_stream_iterates_to_end() {
        let s = Stream::cons(1, || Stream::cons(2, || Stream::cons(3, Stream::empty)));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(s.into_iter().count(), 3);
    }

    #[test]
    fn test_iterator_forces_lazily() {
        let forced = Rc::new(Cell::new(0));
        let counter = Rc::clone(&forced);
        let s = Stream::cons(0, move || {
            counter.set(counter.get() + 1);
            naturals_from(1)
        });

        let mut it = s.into_iter();
        assert_eq!(it.next(), Some(0));
        assert_eq!(forced.get(), 0);
        assert_eq!(it.next(), Some(1));
        assert_eq!(forced.get(), 1);
    }

    #[test]
    fn test_iterator_after_end_stays_done() {
        let mut it = Stream::cons(1, Stream::empty).into_iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_uncons() {
        let (head, rest) = naturals_from(7).uncons().get_or_else(|| unreachable!());
        assert_eq!(head, 7);
        assert_eq!(rest.head_option(), &Maybe::just(8));
        assert!(Stream::<u64>::empty().uncons().is_nothing());
    }

    #[test]
    fn test_iterate() {
        let odds: Vec<u64> = Stream::iterate(1, |n| n + 2).into_iter().take(4).collect();
        assert_eq!(odds, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_debug_does_not_force() {
        let s = Stream::cons(5, || -> Stream<i32> { panic!("forced by Debug") });
        assert_eq!(format!("{:?}", s), "Stream { head: Just(5), .. }");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn from_vec(items: Vec<i32>) -> Stream<i32> {
        let items = Rc::new(items);
        build(items, 0)
    }

    fn build(items: Rc<Vec<i32>>, index: usize) -> Stream<i32> {
        let next = items.get(index).copied();
        match next {
            Some(x) => Stream::cons(x, move || build(Rc::clone(&items), index + 1)),
            None => Stream::empty(),
        }
    }

    proptest! {
        #[test]
        fn prop_iteration_preserves_order(items in prop::collection::vec(any::<i32>(), 0..50)) {
            let collected: Vec<i32> = from_vec(items.clone()).into_iter().collect();
            prop_assert_eq!(collected, items);
        }

        #[test]
        fn prop_repeated_tail_is_stable(items in prop::collection::vec(any::<i32>(), 1..20)) {
            let s = from_vec(items);
            prop_assert_eq!(*s.tail().head_option(), *s.tail().head_option());
        }

        #[test]
        fn prop_forcing_past_end_stays_empty(items in prop::collection::vec(any::<i32>(), 0..10), extra in 1usize..10) {
            let mut node = from_vec(items.clone());
            for _ in 0..items.len() + extra {
                node = node.tail();
            }
            prop_assert!(node.is_empty());
        }
    }
}
