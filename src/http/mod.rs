//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, JSON payload extraction)
//!     → handlers.rs (method + path → store operation)
//!     → response.rs (JSON bodies, error → status mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UserId, UserJson, UuidRequestId, X_REQUEST_ID};
pub use response::{ApiError, ErrorBody, MessageBody};
pub use server::{build_router, AppState, HttpServer};
