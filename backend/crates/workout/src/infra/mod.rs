//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryWorkoutRepository;
pub use postgres::PgWorkoutRepository;
