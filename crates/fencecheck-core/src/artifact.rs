pub mod fetch;
pub mod persist;
pub mod version;
