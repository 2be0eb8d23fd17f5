pub mod engine;
pub mod pipeline;
pub mod sink;
pub mod source;

pub use engine::{MungeLevel, Mutator};
pub use pipeline::{RunStats, Signal};
pub use sink::ResultSink;
pub use source::SeedSource;
