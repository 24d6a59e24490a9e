// Data models for plan generation and performance analysis

pub mod adaptation;
pub mod exercise;
pub mod performance;
pub mod plan;
pub mod session;
pub mod training_request;

pub use adaptation::*;
pub use exercise::*;
pub use performance::*;
pub use plan::*;
pub use session::*;
pub use training_request::*;
