//! Pure domain layer: typed values, extraction rules and the store-agnostic
//! predicate.

pub mod category;
pub mod department;
pub mod extract;
pub mod query;
pub mod record;
pub mod types;
