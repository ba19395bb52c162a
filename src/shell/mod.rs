// Composition root for the time tracking service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the entry store and wire it into the use case handlers.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
