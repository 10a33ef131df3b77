pub mod types;
pub mod payload_processor;

pub use types::*;
pub use payload_processor::PayloadProcessor;
