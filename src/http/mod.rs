//! HTTP surface for both services.
//!
//! # Data Flow
//! ```text
//! POST /summ or /multi
//!     → server.rs (Axum router, trace + timeout layers)
//!     → handlers.rs (parse body, span parenting, delegate to Reducer)
//!     → model.rs (wire types)
//!     → JSON response
//! ```

pub mod handlers;
pub mod model;
pub mod server;

pub use handlers::AppState;
pub use model::{CalcRequest, CalcResponse};
pub use server::{proxy_router, serve, worker_router};
