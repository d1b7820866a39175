//! Converters from service error payloads into messages.
//!
//! Two payload shapes are supported: a JSON body attached to a failed call
//! ([`exception`]) and a raw XML error document ([`xml`]). Both converters
//! are pure and never fail; a payload that cannot be read in its structured
//! form becomes a single error message carrying the raw text, so the user
//! always sees something.
//!
//! The `parse_*` functions expose the structured result (or the
//! [`ConvertError`] explaining why it is unavailable) for callers that want
//! to branch on it themselves.

pub mod error;
pub mod exception;
pub mod xml;

pub use crate::error::ConvertError;
pub use crate::exception::{ServiceException, convert_exception, parse_exception_body};
pub use crate::xml::{XmlOptions, convert_xml, parse_xml};
