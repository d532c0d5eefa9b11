//! An optional value that is either `Just(A)` or `Nothing`.
//!
//! # Maybe vs Option
//!
//! `Maybe<A>` carries the same information as `Option<A>`, but its whole
//! interface is derived from a single elimination form, [`Maybe::fold`].
//! `map`, `flat_map` and `get_or_else` are all written in terms of `fold`, so
//! they behave exactly like the other sum types in this crate.
//!
//! Absence is always represented in-band. No operation on `Maybe` panics.
//!
//! # Examples
//!
//! ```rust
//! use sumkit::maybe::{to_maybe, Maybe};
//!
//! fn find_port(name: &str) -> Option<u16> {
//!     match name {
//!         "http" => Some(80),
//!         "https" => Some(443),
//!         _ => None,
//!     }
//! }
//!
//! let port = to_maybe(find_port("https")).map(|p| p + 1);
//! assert_eq!(port, Maybe::just(444));
//!
//! let missing = to_maybe(find_port("gopher")).get_or_else(|| 0);
//! assert_eq!(missing, 0);
//! ```

/// A value that may be present (`Just`) or absent (`Nothing`).
///
/// Values enter the type through [`to_maybe`] (or `From<Option<A>>`), which
/// maps `None` to `Nothing` and `Some(a)` to `Just(a)`.
///
/// # Example
///
/// ```rust
/// use sumkit::Maybe;
///
/// let present = Maybe::just(21);
/// let absent: Maybe<i32> = Maybe::nothing();
///
/// let describe = |m: Maybe<i32>| m.fold(|n| format!("got {}", n * 2), || "none".to_string());
/// assert_eq!(describe(present), "got 42");
/// assert_eq!(describe(absent), "none");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<A> {
    /// A present value
    Just(A),
    /// No value
    Nothing,
}

/// Lift an optional value into `Maybe`.
///
/// This is the entry point from a raw optional value into the type: `None`
/// becomes `Nothing`, `Some(a)` becomes `Just(a)`.
///
/// # Example
///
/// ```rust
/// use sumkit::maybe::{to_maybe, Maybe};
///
/// assert_eq!(to_maybe(Some("x")), Maybe::just("x"));
/// assert_eq!(to_maybe::<&str>(None), Maybe::nothing());
/// ```
#[inline]
pub fn to_maybe<A>(value: Option<A>) -> Maybe<A> {
    match value {
        Some(a) => Maybe::Just(a),
        None => Maybe::Nothing,
    }
}

impl<A> Maybe<A> {
    // ========== Constructors ==========

    /// Wrap a present value.
    #[inline]
    pub fn just(value: A) -> Self {
        Maybe::Just(value)
    }

    /// The absent value.
    #[inline]
    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    /// Same as [`to_maybe`].
    #[inline]
    pub fn from_option(value: Option<A>) -> Self {
        to_maybe(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Convert to `Maybe<&A>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Maybe;
    ///
    /// let m = Maybe::just(String::from("hello"));
    /// assert_eq!(m.as_ref().map(|s| s.len()), Maybe::just(5));
    /// assert!(m.is_just());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Maybe<&A> {
        match self {
            Maybe::Just(a) => Maybe::Just(a),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    // ========== Elimination ==========

    /// Dispatch on the variant, invoking exactly one of the two branches.
    ///
    /// `just` receives the wrapped value; `nothing` is called when no value is
    /// present. Every other operation on `Maybe` is defined through `fold`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Maybe;
    ///
    /// assert_eq!(Maybe::just(3).fold(|n| n * 2, || 0), 6);
    /// assert_eq!(Maybe::<i32>::nothing().fold(|n| n * 2, || 0), 0);
    /// ```
    #[inline]
    pub fn fold<B, F, G>(self, just: F, nothing: G) -> B
    where
        F: FnOnce(A) -> B,
        G: FnOnce() -> B,
    {
        match self {
            Maybe::Just(a) => just(a),
            Maybe::Nothing => nothing(),
        }
    }

    // ========== Functor / Monad ==========

    /// Transform the present value, leaving `Nothing` untouched.
    ///
    /// `f` is never invoked on `Nothing`. To map with a function that may
    /// itself produce an absent value, use `flat_map` together with
    /// [`to_maybe`]: `m.flat_map(|a| to_maybe(f(a)))`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Maybe;
    ///
    /// assert_eq!(Maybe::just(20).map(|n| n + 1), Maybe::just(21));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n + 1), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.fold(|a| Maybe::Just(f(a)), Maybe::nothing)
    }

    /// Chain a computation that itself may produce no value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::maybe::{to_maybe, Maybe};
    ///
    /// let parse = |s: &str| to_maybe(s.parse::<i32>().ok());
    ///
    /// assert_eq!(Maybe::just("42").flat_map(parse), Maybe::just(42));
    /// assert_eq!(Maybe::just("x").flat_map(parse), Maybe::nothing());
    /// assert_eq!(Maybe::<&str>::nothing().flat_map(parse), Maybe::nothing());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.fold(f, Maybe::nothing)
    }

    /// Return the present value, or compute one from `default`.
    ///
    /// `default` is evaluated only on the `Nothing` path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).get_or_else(|| unreachable!()), 5);
    /// assert_eq!(Maybe::nothing().get_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        self.fold(|a| a, default)
    }

    // ========== Conversions ==========

    /// Convert back to `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.fold(Some, || None)
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Remove one level of nesting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Maybe;
    ///
    /// assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
    /// assert_eq!(Maybe::just(Maybe::<i32>::nothing()).flatten(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.flat_map(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        to_maybe(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A> Default for Maybe<A> {
    /// Returns `Maybe::Nothing`.
    fn default() -> Self {
        Maybe::Nothing
    }
}
