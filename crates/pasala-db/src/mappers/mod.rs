//! Model to entity mappers
//!
//! `From<Model> for Entity` converts database rows to domain objects. Text columns
//! carrying enums are guarded by CHECK constraints, so unknown values fall back to
//! the default variant instead of failing the read.

mod club;
mod match_mapper;
mod player;
mod result;

pub use match_mapper::team_from_db;
