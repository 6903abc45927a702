//! # lenses
//!
//! Composable lenses for reading and updating immutable nested data.
//!
//! ## Overview
//!
//! A lens pairs a getter with a persistent setter for one field of a larger
//! value. Lenses compose: a lens from `Person` to `Address` and a lens from
//! `Address` to `u32` combine into a lens from `Person` straight to the
//! house number, without writing a bespoke deep update for that path.
//!
//! - **Optics**: the [`Lens`](optics::Lens) trait, [`FunctionLens`](optics::FunctionLens),
//!   composition and the `lens!` macro
//! - **Laws**: reusable checks for the three lens laws and for composition
//!
//! ## Feature Flags
//!
//! - `optics`: the lens core
//! - `laws`: law checks for lens authors' tests (implies `optics`)
//!
//! ## Example
//!
//! ```rust
//! use lenses::prelude::*;
//! use lenses::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { number: u32, street: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_number = lens!(Person, address).and(lens!(Address, number));
//!
//! let person = Person {
//!     name: "Toto".to_string(),
//!     address: Address { number: 10, street: "street".to_string() },
//! };
//!
//! assert_eq!(*person_number.get(&person), 10);
//! let moved = person_number.update(15, person.clone());
//! assert_eq!(moved.address.number, 15);
//! assert_eq!(person.address.number, 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lenses::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "laws")]
    pub use crate::laws::*;
}

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "laws")]
pub mod laws;
