//! Injectable Type Registry
//!
//! Types register their definitions at compile time through the `linkme`
//! crate and are discovered at runtime by [`TypeCatalog::discover`](crate::TypeCatalog::discover).
//!
//! ```text
//! 1. Type defines:      #[linkme::distributed_slice(INJECTABLE_TYPES)]
//!                       static ENTRY: InjectableEntry = ...
//!                             ↓
//! 2. Registry declares: #[linkme::distributed_slice]
//!                       pub static INJECTABLE_TYPES: [InjectableEntry] = [..]
//!                             ↓
//! 3. Catalog queries:   INJECTABLE_TYPES.iter()
//! ```
//!
//! ### Registering a type
//!
//! ```ignore
//! use autowire_application::registry::{INJECTABLE_TYPES, InjectableEntry};
//!
//! #[linkme::distributed_slice(INJECTABLE_TYPES)]
//! static DEPS_A: InjectableEntry = InjectableEntry {
//!     description: "Depends on SimpleA",
//!     definition: <DepsA as Injectable>::definition,
//! };
//! ```

pub mod injectable;

pub use injectable::{INJECTABLE_TYPES, InjectableEntry, list_injectable_types};
