// Composition root for the TimeTrack API.
//
// - Read config from the environment.
// - Instantiate the in-memory adapters and wire them into the use case handlers.
// - Expose the HTTP router, authenticated by bearer token.

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod state;
