//! Student record store: validation, id minting, lookup and name search over
//! a pluggable document collection.
//! - `student::store::StudentStore` is the entry point for callers.
//! - `student::collection::StudentCollection` is the backing-store seam, with
//!   Postgres (SeaORM) and JSON-file implementations under `student::repo`.

pub mod errors;
pub mod storage;
pub mod student;

pub use errors::StoreError;
pub use student::{
    collection::StudentCollection,
    domain::{NewStudent, NewStudentInput, StudentId, StudentRecord},
    store::{Clock, StudentStore, SystemClock},
};
