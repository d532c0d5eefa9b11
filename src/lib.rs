//! # Sumkit
//!
//! Four small sum types with one shared shape:
//!
//! - [`Maybe<A>`]: an optional value, `Just(a)` or `Nothing`
//! - [`Either<A, B>`]: a right-biased disjoint union, `Left(a)` or `Right(b)`
//! - [`Try<A>`]: the outcome of an attempted computation, success or captured failure
//! - [`Stream<A>`]: a lazy, possibly infinite sequence whose tail is forced on demand
//!
//! Each type has a single elimination form, `fold`, that invokes exactly one
//! branch. The derived operations (`map`, `flat_map`, `get_or_else`,
//! `map_left`, `flat_map_left`) are written in terms of `fold` and the
//! constructors, so they obey the same functor and monad laws everywhere.
//!
//! ## Quick Example
//!
//! ```rust
//! use sumkit::{maybe::to_maybe, Either, Maybe, Stream, Try};
//!
//! // Absence is data, not an error
//! let port = to_maybe(std::env::var("NO_SUCH_VAR_SET").ok())
//!     .flat_map(|raw| to_maybe(raw.parse::<u16>().ok()))
//!     .get_or_else(|| 8080);
//! assert_eq!(port, 8080);
//!
//! // A chosen alternative outcome
//! let checked: Either<&str, u16> = if port > 1024 {
//!     Either::right(port)
//! } else {
//!     Either::left("privileged")
//! };
//! assert_eq!(checked.map(|p| p + 1), Either::right(8081));
//!
//! // A computation that may fail
//! let divided = Try::new(|| 10 / port as i32);
//! assert_eq!(divided.fold(|v| v, |_| -1), 0);
//!
//! // An infinite sequence, only a prefix of which is ever forced
//! let ports = Stream::iterate(port, |p| p + 1);
//! assert_eq!(ports.tail().head_option(), &Maybe::just(8081));
//! ```
//!
//! ## Features
//!
//! - `tracing`: log captured `Try` failures at debug level
//! - `proptest`: `Arbitrary` impls for `Maybe` and `Either`

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod attempt;
pub mod either;
pub mod maybe;
pub mod stream;
pub mod testing;

// Re-exports
pub use attempt::{attempt, Try, TryError};
pub use either::Either;
pub use maybe::{to_maybe, Maybe};
pub use stream::Stream;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::attempt::{attempt, Try, TryError};
    pub use crate::either::Either;
    pub use crate::maybe::{to_maybe, Maybe};
    pub use crate::stream::Stream;
}
