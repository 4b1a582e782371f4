// event module — trigger event normalization

pub mod context;
mod error;
mod normalize;
pub mod payload;

pub use context::EventContext;
pub use error::EventError;
pub use normalize::parse_event_data;
pub use payload::TriggerEvent;
