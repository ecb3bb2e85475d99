//! ScanFood backend library.
//!
//! Users declare the food contents they are sensitive to; scanning a food
//! checks its contents against those sensitivities and appends the outcome
//! to a confirmation log.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
