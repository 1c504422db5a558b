pub mod geocode;
pub mod store;

pub use geocode::reverse_geocode;
pub use store::{IdSequence, InMemoryStore};
