//! In-memory user CRUD HTTP service.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────┐
//!                    │               USER SERVICE                 │
//!                    │                                            │
//!   Client Request   │  ┌─────────┐   ┌─────────┐   ┌─────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ routing │──▶│  store  │  │
//!                    │  │ server  │   │ (prefix │   │ (Mutex  │  │
//!                    │  └─────────┘   │  table) │   │  <Vec>) │  │
//!                    │                └─────────┘   └────┬────┘  │
//!                    │                                   │       │
//!   Client Response  │  ┌──────────┐                     │       │
//!   ◀────────────────┼──│ response │◀────────────────────┘       │
//!                    │  │ encoder  │                             │
//!                    │  └──────────┘                             │
//!                    │                                            │
//!                    │  ┌──────────────────────────────────────┐ │
//!                    │  │       Cross-Cutting Concerns          │ │
//!                    │  │  ┌────────┐  ┌──────────────────┐    │ │
//!                    │  │  │ config │  │  observability   │    │ │
//!                    │  │  └────────┘  └──────────────────┘    │ │
//!                    │  └──────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;
pub mod store;

// Cross-cutting concerns
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use store::{StoreError, User, UserStore};
