// Composition root for the tour service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate concrete infrastructure (templates, upstream client, credentials).
// - Wire handlers and middleware into one router.
// - Run the listener and shut it down on an OS signal.

pub mod config;
pub mod http;
pub mod logging;
pub mod server;
pub mod state;
