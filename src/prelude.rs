//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use field_rail::prelude::*;
//!
//! let rules: Rules<'_, str> = Rules::new().with(presence(|s: &str| s, "presence", "required"));
//! assert!(!rules.validate("x").has_error());
//! ```

// Core types
pub use crate::rules::{validate_all, Rules};
pub use crate::types::{Errors, FieldError, Validated};

// Validator trait and factories
pub use crate::validator::{
    avoid_normal_html_tag, avoid_script_tag, custom, dynamic_message, limitation,
    message_switcher, presence, prohibition, regexp, regexp_pattern, Validator,
};
