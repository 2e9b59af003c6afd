pub mod data;
pub mod source;

pub use data::Participant;
pub use source::{JsonRoster, RosterSource};
