pub mod event;
pub mod media;

pub use event::EventId;
