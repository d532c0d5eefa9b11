//! A disjoint union of two values, biased toward the right side.
//!
//! # Right-Biased Convention
//!
//! `Either<A, B>` holds exactly one of a left value `A` or a right value `B`.
//! By convention `Right` is the success path: the unqualified `map` and
//! `flat_map` operate on `Right`. The mirror operations `map_left` and
//! `flat_map_left` operate on `Left`. Each pair leaves the other side
//! untouched, so a `map` and a `map_left` commute.
//!
//! A `Left` is a deliberately chosen alternative outcome. It is plain data,
//! never a raised fault.
//!
//! # Examples
//!
//! ```rust
//! use sumkit::Either;
//!
//! fn parse_port(raw: &str) -> Either<String, u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Either::right(port),
//!         Err(e) => Either::left(format!("bad port {:?}: {}", raw, e)),
//!     }
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1);
//! assert_eq!(port, Either::right(8081));
//!
//! let message = parse_port("eighty").fold(|err| err, |p| p.to_string());
//! assert!(message.starts_with("bad port"));
//! ```

use crate::maybe::Maybe;

/// A value that is either `Left(A)` or `Right(B)`.
///
/// `A` is the left (alternative / failure) type and `B` the right (success)
/// type.
///
/// # Example
///
/// ```rust
/// use sumkit::Either;
///
/// let left: Either<i32, &str> = Either::left(42);
/// let right: Either<i32, &str> = Either::right("hello");
///
/// let result = right.fold(
///     |n| format!("number: {}", n),
///     |s| format!("string: {}", s),
/// );
/// assert_eq!(result, "string: hello");
/// assert!(left.is_left());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<A, B> {
    /// The left variant
    Left(A),
    /// The right variant
    Right(B),
}

impl<A, B> Either<A, B> {
    // ========== Constructors ==========

    /// Create a Left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert!(e.is_left());
    /// ```
    #[inline]
    pub fn left(value: A) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert!(e.is_right());
    /// ```
    #[inline]
    pub fn right(value: B) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Elimination ==========

    /// Dispatch on the variant, invoking exactly one of the two branches.
    ///
    /// This is the universal elimination form; every other operation on
    /// `Either` is defined through it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s.to_string()), "42");
    /// assert_eq!(right.fold(|x| x.to_string(), |s| s.to_string()), "hello");
    /// ```
    #[inline]
    pub fn fold<C, F, G>(self, on_left: F, on_right: G) -> C
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> C,
    {
        match self {
            Either::Left(a) => on_left(a),
            Either::Right(b) => on_right(b),
        }
    }

    // ========== Extractors ==========

    /// Returns the left value if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::{Either, Maybe};
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.into_left(), Maybe::just(42));
    /// assert_eq!(right.into_left(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn into_left(self) -> Maybe<A> {
        self.fold(Maybe::just, |_| Maybe::nothing())
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Maybe<B> {
        self.fold(|_| Maybe::nothing(), Maybe::just)
    }

    /// Convert to `Either<&A, &B>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let e: Either<i32, String> = Either::left(42);
    /// let e_ref: Either<&i32, &String> = e.as_ref();
    /// assert_eq!(e_ref, Either::left(&42));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Either<&A, &B> {
        match self {
            Either::Left(a) => Either::Left(a),
            Either::Right(b) => Either::Right(b),
        }
    }

    /// Extract the left value, panicking if Right.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Right`.
    #[inline]
    pub fn unwrap_left(self) -> A {
        match self {
            Either::Left(a) => a,
            Either::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Extract the right value, panicking if Left.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Left`.
    #[inline]
    pub fn unwrap_right(self) -> B {
        match self {
            Either::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Either::Right(b) => b,
        }
    }

    // ========== Right-Biased Operations ==========

    /// Transform the right value, passing left values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("hello");
    /// let right: Either<&str, i32> = Either::right(21);
    ///
    /// assert_eq!(left.map(|x| x * 2), Either::left("hello"));
    /// assert_eq!(right.map(|x| x * 2), Either::right(42));
    /// ```
    #[inline]
    pub fn map<C, F>(self, f: F) -> Either<A, C>
    where
        F: FnOnce(B) -> C,
    {
        self.fold(Either::Left, |b| Either::Right(f(b)))
    }

    /// Chain a computation on the right value.
    ///
    /// If this is a `Right`, the result is entirely `f(b)`, which decides the
    /// new variant. A `Left` passes through unchanged and `f` is not called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let halve = |x: i32| {
    ///     if x % 2 == 0 { Either::right(x / 2) } else { Either::left("odd") }
    /// };
    ///
    /// assert_eq!(Either::<&str, i32>::right(84).flat_map(halve), Either::right(42));
    /// assert_eq!(Either::<&str, i32>::right(3).flat_map(halve), Either::left("odd"));
    /// assert_eq!(Either::<&str, i32>::left("error").flat_map(halve), Either::left("error"));
    /// ```
    #[inline]
    pub fn flat_map<C, F>(self, f: F) -> Either<A, C>
    where
        F: FnOnce(B) -> Either<A, C>,
    {
        self.fold(Either::Left, f)
    }

    // ========== Left-Biased Operations ==========

    /// Transform the left value, passing right values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(21);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.map_left(|x| x * 2), Either::left(42));
    /// assert_eq!(right.map_left(|x| x * 2), Either::right("hello"));
    /// ```
    #[inline]
    pub fn map_left<C, F>(self, f: F) -> Either<C, B>
    where
        F: FnOnce(A) -> C,
    {
        self.fold(|a| Either::Left(f(a)), Either::Right)
    }

    /// Chain a computation on the left value.
    ///
    /// If this is a `Left`, applies `f` to the value. If this is a `Right`,
    /// passes the right value through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(1);
    /// let right: Either<i32, &str> = Either::right("ok");
    ///
    /// assert_eq!(
    ///     left.flat_map_left(|_| Either::<i32, &str>::right("recovered")),
    ///     Either::right("recovered")
    /// );
    /// assert_eq!(right.flat_map_left(|x| Either::<i32, &str>::left(x * 2)), Either::right("ok"));
    /// ```
    #[inline]
    pub fn flat_map_left<C, F>(self, f: F) -> Either<C, B>
    where
        F: FnOnce(A) -> Either<C, B>,
    {
        self.fold(f, Either::Right)
    }

    // ========== Both Sides ==========

    /// Transform both variants.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(1);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.bimap(|x| x + 1, |s| s.len()), Either::left(2));
    /// assert_eq!(right.bimap(|x| x + 1, |s| s.len()), Either::right(5));
    /// ```
    #[inline]
    pub fn bimap<C, D, F, G>(self, f: F, g: G) -> Either<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        self.fold(|a| Either::Left(f(a)), |b| Either::Right(g(b)))
    }

    /// Swap Left and Right.
    #[inline]
    pub fn swap(self) -> Either<B, A> {
        self.fold(Either::Right, Either::Left)
    }

    // ========== Conversions ==========

    /// Convert to Result (Right becomes Ok, Left becomes Err).
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(42);
    /// let left: Either<&str, i32> = Either::left("error");
    ///
    /// assert_eq!(right.into_result(), Ok(42));
    /// assert_eq!(left.into_result(), Err("error"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<B, A> {
        self.fold(Err, Ok)
    }

    /// Create from Result (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<B, A>) -> Self {
        match result {
            Ok(b) => Either::Right(b),
            Err(a) => Either::Left(a),
        }
    }
}

// Flatten for nested Either
impl<A, B> Either<A, Either<A, B>> {
    /// Flatten a nested Either.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::right(Either::right(42));
    /// assert_eq!(nested.flatten(), Either::right(42));
    ///
    /// let outer_left: Either<&str, Either<&str, i32>> = Either::left("outer");
    /// assert_eq!(outer_left.flatten(), Either::left("outer"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<A, B> {
        self.flat_map(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<A, B> From<Result<B, A>> for Either<A, B> {
    fn from(result: Result<B, A>) -> Self {
        Either::from_result(result)
    }
}

impl<A, B> From<Either<A, B>> for Result<B, A> {
    fn from(either: Either<A, B>) -> Self {
        either.into_result()
    }
}
