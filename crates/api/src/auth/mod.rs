//! Credential utilities.
//!
//! Only password hashing lives here: session and token management are
//! outside this service's scope.

pub mod password;
