//! String tokenization utilities.
//!
//! This crate splits strings into tokens according to a separator predicate,
//! a literal pattern, or a set of separator characters.
//!
//! ## Separators
//!
//! - [`Whitespace`] - spaces, tabs, newlines (the default)
//! - [`Comma`], [`Ampersand`] - single-character separators
//! - [`Arithmetic`] - `+`, `-`, `*` and `/`
//! - [`AnyOf`] - any character from a given set
//! - any `Fn(char) -> bool` closure
//!
//! ## Usage
//!
//! ```
//! use simple_tokenize::{tokenize, Comma, Whitespace};
//!
//! assert_eq!(tokenize("sum\tsum\ngoes   home", &Whitespace), ["sum", "sum", "goes", "home"]);
//! assert_eq!(tokenize("a,,b,c", &Comma), ["a", "b", "c"]);
//! ```

mod separator;
mod split;

pub use separator::{Ampersand, AnyOf, Arithmetic, Comma, Separator, Whitespace};
pub use split::{
    between, multi_tokenize, nth_token, split_keep_separators, split_on_pattern, tokenize,
    tokenize_each,
};
