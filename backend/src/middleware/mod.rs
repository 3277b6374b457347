//! Middleware for the household inventory server

pub mod auth;

pub use auth::{auth_middleware, removal_cookie, session_cookie, SESSION_COOKIE};
