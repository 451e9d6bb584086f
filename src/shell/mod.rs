// Composition root for the accounts bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP router and the GraphQL schema to the binary.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
