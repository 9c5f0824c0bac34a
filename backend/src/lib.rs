//! Employee management backend.
//!
//! Layers follow a hexagonal layout: [`domain`] holds the employee types,
//! ports, and service; [`inbound`] adapts HTTP onto the service; [`outbound`]
//! implements the repository port. The binary wires them together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
