/*
[INPUT]:  Controller credentials (password or auth token)
[OUTPUT]: Logged-in sessions and their CSRF tokens
[POS]:    Auth layer - handles controller session authentication
[UPDATE]: When the login flow or session handling changes
*/

pub mod login;
pub mod session;

pub use login::CSRF_COOKIE;
pub use session::{Credentials, SessionStore, SessionToken};
