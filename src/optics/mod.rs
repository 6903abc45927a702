//! Lenses for immutable data manipulation.
//!
//! This module provides lenses - composable accessors for immutable
//! data structures. A lens focuses on one part of a structure, enabling
//! type-safe reading and updating of deeply nested fields.
//!
//! # Available Items
//!
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`FunctionLens`]: A lens built from a getter and a setter closure
//! - [`ComposedLens`]: The result of chaining two lenses with [`Lens::and`]
//! - [`compose`]: Free-function form of [`Lens::and`]
//! - [`identity_lens`], [`first_lens`], [`second_lens`]: Ready-made lenses
//!
//! # Example
//!
//! ```
//! use lenses::optics::{Lens, FunctionLens};
//! use lenses::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! // Create lenses using the macro
//! let address_lens = lens!(Person, address);
//! let street_lens = lens!(Address, street);
//!
//! // Compose lenses to focus on nested fields
//! let person_street = address_lens.and(street_lens);
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! // Get nested field
//! assert_eq!(*person_street.get(&person), "Main St");
//!
//! // Set nested field (returns new structure)
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo"); // Other fields unchanged
//! ```
//!
//! # Lens Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetSet Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source).clone()) == source
//!    ```
//!
//! 2. **SetGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == &value
//!    ```
//!
//! 3. **SetSet Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! A composition of two lawful lenses is itself lawful, and composition is
//! associative:
//!
//! ```text
//! a.and(b).and(c) ~ a.and(b.and(c))
//! ```

mod lens;
mod standard_optics;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::compose;

// Re-export standard optics
pub use standard_optics::first_lens;
pub use standard_optics::identity_lens;
pub use standard_optics::second_lens;
