//! SeaORM entity and connection helpers for the student table.

pub mod db;
pub mod errors;
pub mod student;
