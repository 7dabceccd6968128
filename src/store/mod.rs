//! In-memory high score storage.

pub mod high_score;

pub use high_score::{ScoreStore, Submission};
