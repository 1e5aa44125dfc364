pub mod collection;
pub mod domain;
pub mod repo;
pub mod store;
