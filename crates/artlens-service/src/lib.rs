//! ArtLens Analysis Service
//!
//! Stateless HTTP service wrapping the ArtLens scoring pipeline:
//! - fetches content-addressed objects from an IPFS gateway, degrading to a
//!   synthetic blob when the gateway is unreachable
//! - runs the scoring pipeline and returns the verdict envelope
//! - never fails an analysis request past input validation; scoring errors
//!   collapse to a fixed moderate verdict
//!
//! ## API Endpoints
//!
//! - `GET /health` - Service status
//! - `POST /analyze-artwork` - Analyze an artwork object
//! - `GET /analysis/{hash}` - Recompute a verdict for an identifier

pub mod api;
pub mod config;
pub mod fetch;

pub use api::create_router;
pub use api::handlers::AppState;
pub use config::ServiceConfig;
pub use fetch::{fetch_object, synthetic_blob, FetchedObject, GatewayError, HttpGateway, ObjectGateway};
