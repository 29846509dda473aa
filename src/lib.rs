pub mod engine;
pub mod instance;
pub mod models;
pub mod render;

pub use engine::{Engine, EngineError, Report};
