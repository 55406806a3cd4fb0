//! Compose null-safe predicates which match if any of a set of string fields contains, or equals,
//! any of a set of terms.
//!
//! ```
//! use termfold::prelude::*;
//!
//! struct Person {
//!     first_name: Option<String>,
//!     last_name: Option<String>,
//! }
//!
//! let fields = [
//!     Accessor::new("firstName", |p: &Person| p.first_name.as_deref()),
//!     Accessor::new("lastName", |p: &Person| p.last_name.as_deref()),
//! ];
//!
//! let predicate =
//!     equals::enumerable::terms(&fields, &["ann", "bob"], ComparisonMode::OrdinalIgnoreCase)?;
//!
//! assert!(predicate.evaluate(&Person {
//!     first_name: None,
//!     last_name: Some("Bob".into()),
//! }));
//! # Ok::<(), termfold::Error>(())
//! ```

pub mod accessor;
pub mod contains;
pub mod equals;
pub mod error;
pub mod expr;
pub mod mode;
pub mod null_safety;
pub mod translate;

pub mod prelude {
    pub use crate::accessor::{Accessor, Fields};
    pub use crate::error::Error;
    pub use crate::expr::{Expr, Node, Operand};
    pub use crate::mode::ComparisonMode;
    pub use crate::translate::{translate, Translator};
    pub use crate::{contains, equals};
    pub use termfold_macros::Fields;
}

pub use error::Error;
pub use termfold_macros::Fields;
