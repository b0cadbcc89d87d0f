//! Request middleware.
//!
//! - [`locale::locale_middleware`] -- redirects malformed page paths and tags
//!   responses with the inferred locale.

pub mod locale;
