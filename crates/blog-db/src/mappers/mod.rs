//! Model to entity mappers
//!
//! `From<Model> for Entity` converts database rows to domain objects. Reaction rows carry
//! their status as text and go through `TryFrom` so a bad value surfaces as an error.

mod blog;
mod comment;
mod post;
mod reaction;
mod user;
