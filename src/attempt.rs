//! The result of a computation that was attempted and may have failed.
//!
//! A [`Try<A>`] is either a success holding an `A` or a failure holding a
//! [`TryError`]. The only way to obtain one is to run a computation through
//! [`Try::new`] (or [`Try::from_fallible`]): the body is invoked immediately
//! and any panic escaping it is caught and stored. There is no constructor
//! that lifts a plain value, so every `Try` originates from an actual attempt.
//!
//! Once built, a failure is inert data. `map` and `flat_map` pass it through
//! without calling user code, and [`Try::fold`] is where it surfaces.
//!
//! # Panics inside `map` and `flat_map`
//!
//! Only the construction site captures faults. A panic raised by the function
//! given to `map` or `flat_map` propagates to the caller like any other panic.
//! To capture it, run the step through a fresh `Try`:
//!
//! ```rust
//! use sumkit::Try;
//!
//! let parsed = Try::new(|| "12")
//!     .flat_map(|s| Try::new(move || s.parse::<i32>().expect("not a number")));
//! assert_eq!(parsed.fold(|n| n, |_| -1), 12);
//! ```
//!
//! # Panic hook and `panic = "abort"`
//!
//! Capture relies on unwinding. The process panic hook still runs before a
//! panic is caught, so the default hook prints the panic message (and a
//! backtrace when `RUST_BACKTRACE` is set) to stderr even though the `Try`
//! ends up holding the failure. Applications that want silence install their
//! own hook with [`std::panic::set_hook`]. In a build with `panic = "abort"`
//! nothing is caught: a panicking body aborts the process.
//!
//! # Examples
//!
//! ```rust
//! use sumkit::Try;
//!
//! assert_eq!(Try::new(|| 42).fold(|s| s, |_| -1), 42);
//!
//! let boom: Try<i32> = Try::new(|| panic!("boom"));
//! assert_eq!(boom.fold(|s| s, |_| -1), -1);
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::either::Either;
use crate::maybe::Maybe;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The failure captured by a [`Try`].
///
/// Opaque: it records either a caught panic (with its message when the
/// payload was a string) or an error value returned by a fallible body.
pub struct TryError {
    kind: Kind,
}

enum Kind {
    Panic(String),
    Error(BoxError),
}

impl TryError {
    /// Wrap an error value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::TryError;
    ///
    /// let err = TryError::new("disk full");
    /// assert_eq!(err.to_string(), "disk full");
    /// assert!(!err.is_panic());
    /// ```
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        TryError {
            kind: Kind::Error(error.into()),
        }
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        TryError {
            kind: Kind::Panic(message),
        }
    }

    /// Returns `true` if this failure was a caught panic.
    pub fn is_panic(&self) -> bool {
        matches!(self.kind, Kind::Panic(_))
    }

    /// A human-readable description of the failure.
    pub fn message(&self) -> String {
        match &self.kind {
            Kind::Panic(msg) => msg.clone(),
            Kind::Error(e) => e.to_string(),
        }
    }
}

impl fmt::Debug for TryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Panic(msg) => f.debug_tuple("Panic").field(msg).finish(),
            Kind::Error(e) => f.debug_tuple("Error").field(e).finish(),
        }
    }
}

impl fmt::Display for TryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Panic(msg) => write!(f, "panicked: {}", msg),
            Kind::Error(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for TryError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            Kind::Panic(_) => None,
            Kind::Error(e) => e.source(),
        }
    }
}

/// A computation result: success with an `A`, or a captured [`TryError`].
///
/// See the [module documentation](self) for how failures are captured.
#[derive(Debug)]
pub struct Try<A> {
    outcome: Outcome<A>,
}

#[derive(Debug)]
enum Outcome<A> {
    Success(A),
    Failure(TryError),
}

impl<A> Try<A> {
    fn success(value: A) -> Self {
        Try {
            outcome: Outcome::Success(value),
        }
    }

    fn failure(error: TryError) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!("Try captured failure: {}", error);
        Try {
            outcome: Outcome::Failure(error),
        }
    }

    // ========== Constructors ==========

    /// Run `body` now, capturing a panic as a failure.
    ///
    /// `body` is invoked before `new` returns. A normal return becomes a
    /// success; a panic is caught and becomes a failure. The body is run
    /// under `AssertUnwindSafe`: state it shares with the caller may be left
    /// half-updated if it panics.
    ///
    /// The panic hook runs before the panic is caught, so the default hook
    /// still reports it on stderr. Under `panic = "abort"` the process aborts
    /// instead of producing a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Try;
    ///
    /// let ok = Try::new(|| 6 * 7);
    /// assert!(ok.is_success());
    ///
    /// let items: Vec<i32> = Vec::new();
    /// let failed = Try::new(|| items[3]);
    /// assert!(failed.is_failure());
    /// ```
    pub fn new<F>(body: F) -> Self
    where
        F: FnOnce() -> A,
    {
        match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(value) => Try::success(value),
            Err(payload) => Try::failure(TryError::from_panic(payload)),
        }
    }

    /// Run a fallible `body` now, capturing both panics and returned errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Try;
    ///
    /// let parsed = Try::from_fallible(|| "17".parse::<u8>());
    /// assert_eq!(parsed.fold(|n| n, |_| 0), 17);
    ///
    /// let failed = Try::from_fallible(|| "x".parse::<u8>());
    /// assert!(failed.fold(|_| String::new(), |e| e.to_string()).contains("invalid digit"));
    /// ```
    pub fn from_fallible<F, E>(body: F) -> Self
    where
        F: FnOnce() -> Result<A, E>,
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(Ok(value)) => Try::success(value),
            Ok(Err(error)) => Try::failure(TryError::new(error)),
            Err(payload) => Try::failure(TryError::from_panic(payload)),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if the computation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// Returns `true` if the computation failed.
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failure(_))
    }

    /// Borrow the captured failure, if any.
    pub fn error(&self) -> Maybe<&TryError> {
        match &self.outcome {
            Outcome::Success(_) => Maybe::Nothing,
            Outcome::Failure(e) => Maybe::Just(e),
        }
    }

    // ========== Elimination ==========

    /// Dispatch on the outcome, invoking exactly one of the two branches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Try;
    ///
    /// let report = Try::new(|| -> u32 { panic!("sensor offline") })
    ///     .fold(|v| format!("reading {}", v), |e| format!("error: {}", e));
    /// assert_eq!(report, "error: panicked: sensor offline");
    /// ```
    #[inline]
    pub fn fold<B, F, G>(self, on_success: F, on_failure: G) -> B
    where
        F: FnOnce(A) -> B,
        G: FnOnce(TryError) -> B,
    {
        match self.outcome {
            Outcome::Success(a) => on_success(a),
            Outcome::Failure(e) => on_failure(e),
        }
    }

    // ========== Functor / Monad ==========

    /// Transform a successful value. A failure passes through unchanged and
    /// `f` is not invoked. A panic inside `f` is not captured.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        self.fold(|a| Try::success(f(a)), Try::passthrough)
    }

    /// Chain another attempted computation on a successful value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Try;
    ///
    /// let checked_div = |n: i32| Try::new(move || 100 / n);
    ///
    /// assert_eq!(Try::new(|| 4).flat_map(checked_div).fold(|v| v, |_| -1), 25);
    /// assert!(Try::new(|| 0).flat_map(checked_div).is_failure());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, f: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        self.fold(f, Try::passthrough)
    }

    // Re-wrap an existing failure without logging it a second time.
    fn passthrough(error: TryError) -> Self {
        Try {
            outcome: Outcome::Failure(error),
        }
    }

    /// Return the successful value, or compute one from `default`.
    ///
    /// `default` is evaluated only on the failure path.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        self.fold(|a| a, |_| default())
    }

    // ========== Conversions ==========

    /// Convert to `Result`.
    pub fn into_result(self) -> Result<A, TryError> {
        self.fold(Ok, Err)
    }

    /// Convert to `Either`, with the failure on the left.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sumkit::Try;
    ///
    /// let e = Try::new(|| 1).into_either();
    /// assert!(e.is_right());
    /// ```
    pub fn into_either(self) -> Either<TryError, A> {
        self.fold(Either::right, Either::left)
    }

    /// Convert to `Maybe`, discarding the failure.
    pub fn into_maybe(self) -> Maybe<A> {
        self.fold(Maybe::just, |_| Maybe::nothing())
    }
}

/// Shorthand for [`Try::new`].
///
/// # Example
///
/// ```rust
/// use sumkit::attempt;
///
/// let result = attempt(|| "7".parse::<i32>().unwrap());
/// assert!(result.is_success());
/// ```
pub fn attempt<A, F>(body: F) -> Try<A>
where
    F: FnOnce() -> A,
{
    Try::new(body)
}
