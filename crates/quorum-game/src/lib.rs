//! Game-log data model and derived context for hidden-role game analysis.
//!
//! This crate owns the two inputs everything downstream consumes:
//!
//! - [`record`]: the wire-faithful record of one finished game (players,
//!   missions, proposals, votes, outcome and role reveal), serialized as
//!   camelCase JSON by the external game-log store.
//! - [`context`]: [`GameContext`], a read-only view derived once per game
//!   answering role, alignment and visibility queries for the predicate
//!   library.
//!
//! Construction never fails on well-formed input; records missing the role
//! reveal produce a context that answers "unknown" instead of erroring.

pub use self::{context::*, record::*};

pub mod context;
pub mod record;
