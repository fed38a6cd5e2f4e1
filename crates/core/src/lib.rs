//! `jobboard-core` — domain primitives and small pure helpers.
//!
//! No IO and no framework types live here.

pub mod error;
pub mod files;
pub mod format;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use files::{fallback_file_name, sanitize_file_name, sanitize_file_name_value};
pub use format::{format_readable_date, format_readable_datetime, format_readable_timestamp_millis};
pub use id::UserId;
