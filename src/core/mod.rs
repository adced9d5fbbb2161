//! Core types shared by both engines: agent IDs, RNG, errors.

pub mod agent;
pub mod error;
pub mod rng;

pub use agent::AgentId;
pub use error::{Result, SearchError};
pub use rng::{GameRng, GameRngState};
