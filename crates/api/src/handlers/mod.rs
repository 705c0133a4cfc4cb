//! HTTP handler implementations, one module per resource.

pub mod accounts;
pub mod onboarding;
