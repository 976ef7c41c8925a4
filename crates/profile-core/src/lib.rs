//! # profile-core - Core Domain Types
//!
//! Foundation crate for the profile editor. Provides the account record,
//! the field-validation schema layer, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Account (`account`)
//! - [`AccountRecord`] - The profile data being viewed and edited
//! - [`STANDARD_PRONOUNS`] - Fixed pronoun options, with [`OTHER_PRONOUNS`] as the custom sentinel
//!
//! ### Validation (`validation`)
//! - [`Rule`] - A single field constraint (required, max length)
//! - [`FieldRules`] - Ordered rules for one field; reports the first violation
//! - [`FieldErrors`] - Neutral `field -> message` mapping consumed by the presentation layer
//! - [`ValidationLimits`] - Configurable length bounds
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use profile_core::prelude::*;
//! ```

pub mod account;
pub mod error;
pub mod logging;
pub mod validation;

/// Prelude for common imports used throughout all profile editor crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use account::{is_standard_pronoun, AccountRecord, OTHER_PRONOUNS, STANDARD_PRONOUNS};
pub use error::{Error, Result, ResultExt};
pub use validation::{FieldErrors, FieldRules, Rule, ValidationLimits};
