/*
[INPUT]:  HTTP client configuration and controller API paths
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new verbs or changing client behavior
*/

pub mod client;
pub mod error;
pub mod options;
pub mod resource;
pub mod rest;

pub use error::{AviError, Result};
pub use options::ApiOptions;
pub use resource::ResourceClient;

pub use client::{AviClient, ClientConfig};
