//! In-memory high score service for the browser snake game.
//!
//! The service keeps exactly one number: the best score any game has
//! reported since the process started. The game reads it on load and
//! reports its score after every game over; the stored value only ever
//! moves up.
//!
//! ```text
//! GET  /health       -> {"status": "ok"}
//! GET  /high-score   -> {"highScore": 42}
//! POST /high-score   {"score": 50} -> {"highScore": 50}
//! POST /high-score   {"score": -1} -> 400 {"detail": "Score must be 0 or higher."}
//! ```
//!
//! Nothing is persisted. Restarting the process resets the score to zero.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: The atomic high score store
//! - [`api`]: HTTP routes, handlers and CORS
//! - [`metrics`]: Prometheus counters for submissions
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{Result, ScoreError, ServiceError};
pub use store::ScoreStore;
