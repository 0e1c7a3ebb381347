//! Field sanitizers for tabular records.
//!
//! Every sanitizer is total: it takes one raw field value and returns the
//! cleaned value together with any diagnostics, wrapped in [`Sanitized`].
//! Nothing here panics or returns an error; a bad value yields a safe
//! default plus a message.
//!
//! # Example
//!
//! ```
//! use tabsan_sanitize::{parse_entity_id, sanitize_gender};
//!
//! let id = parse_entity_id("42");
//! assert_eq!(id.value, 42);
//! assert!(id.is_clean());
//!
//! assert_eq!(sanitize_gender("m").value.as_deref(), Some("Male"));
//! ```

mod address;
mod boolean;
mod date;
mod gender;
mod identifier;
mod name;
mod sanitized;
pub mod tables;
mod text;

pub use address::{MAX_ADDRESS_LENGTH, sanitize_address};
pub use boolean::parse_boolean;
pub use date::{DateBounds, parse_date_of_birth};
pub use gender::{MAX_GENDER_LENGTH, sanitize_gender};
pub use identifier::parse_entity_id;
pub use name::{MAX_NAME_LENGTH, sanitize_name};
pub use sanitized::Sanitized;
