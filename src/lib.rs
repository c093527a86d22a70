//! # Billet
//!
//! `billet` is a small event-listing platform: an HTTP backend exposing
//! signup/login and event-listing endpoints, plus a typed client that issues
//! those requests and keeps track of the signed-in session.
//!
//! ## Modules
//!
//! - [`cli`] — command line parsing, tracing/OTLP setup, and the server action.
//! - [`billet`] — the axum server: router, middleware stack, and handlers over
//!   a `PostgreSQL` user/event store.
//! - [`client`] — the `AuthClient` (credential validation, signup/login
//!   requests, session context) used by frontends and tooling.
//! - [`events`] — the event record domain type and the card renderer that
//!   turns a record into a display-ready structure.

pub mod billet;
pub mod cli;
pub mod client;
pub mod events;
