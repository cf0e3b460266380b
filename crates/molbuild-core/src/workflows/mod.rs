//! # Workflows Module
//!
//! The user-facing layer of the crate. It ties the [`core`](crate::core)
//! models and the [`engine`](crate::engine) computations together into the
//! two flows the builder application drives:
//!
//! - [`builder`] - an incremental builder session that appends atoms and
//!   bonds one at a time, records each append on an undo log, and finalizes
//!   into a named molecule with a derived formula
//! - [`library`] - the persistent collection of finalized molecules,
//!   including the canonical default set used to seed an empty store

pub mod builder;
pub mod library;
