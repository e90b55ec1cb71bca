/*
[INPUT]:  Controller API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with wire-exact serialization
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

//! Model types for the controller REST API.
//!
//! Wire conventions shared by every record:
//! - unset `Option` fields and empty lists are left out of the JSON;
//! - fields that are not `Option`/`Vec` are required and always emitted,
//!   decoding fails when they are missing;
//! - `*_ref` / `*_refs` fields are reference strings (see [`ObjectRef`]),
//!   everything else nested is embedded.

pub mod common;
pub mod enums;
pub mod opaque;
pub mod reference;
pub mod resource;
pub mod responses;

pub mod admin;
pub mod alerts;
pub mod analytics;
pub mod application;
pub mod bot;
pub mod cloud;
pub mod debug;
pub mod events;
pub mod gslb;
pub mod journal;
pub mod licensing;
pub mod logs;
pub mod network;
pub mod policy;
pub mod pool;
pub mod reports;
pub mod security;
pub mod service_engine;
pub mod system;
pub mod tech_support;
pub mod upgrade;
pub mod waf;

pub use common::*;
pub use enums::*;
pub use opaque::*;
pub use reference::*;
pub use resource::*;
pub use responses::*;

pub use admin::*;
pub use alerts::*;
pub use analytics::*;
pub use application::*;
pub use bot::*;
pub use cloud::*;
pub use debug::*;
pub use events::*;
pub use gslb::*;
pub use journal::*;
pub use licensing::*;
pub use logs::*;
pub use network::*;
pub use policy::*;
pub use pool::*;
pub use reports::*;
pub use security::*;
pub use service_engine::*;
pub use system::*;
pub use tech_support::*;
pub use upgrade::*;
pub use waf::*;
