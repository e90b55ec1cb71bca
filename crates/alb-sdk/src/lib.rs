/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public load-balancer controller SDK surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Typed models and an async REST client for the load-balancer controller API.

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, SessionStore, SessionToken};

// Re-export commonly used types from http
pub use http::{ApiOptions, AviClient, AviError, ClientConfig, ResourceClient, Result};

// Re-export all types
pub use types::*;
