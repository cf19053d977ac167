//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, catch-all dispatch)
//!     → routing (prefix table picks the endpoint)
//!     → path.rs (trailing id decode)
//!     → handlers.rs (one store operation each)
//!     → response.rs (closed payload set → JSON)
//!     → Send to client
//! ```

pub mod handlers;
pub mod path;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
