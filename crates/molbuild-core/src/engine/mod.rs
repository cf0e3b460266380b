//! # Engine Module
//!
//! Pure, deterministic computations over a molecule graph. Nothing in this
//! layer mutates its input or performs I/O, and every function here is total:
//! any molecule, however malformed, produces a result.
//!
//! - **Formula Derivation** ([`formula`]) - Canonical formula strings with a
//!   simplified Hill-system ordering and Unicode subscript digits
//! - **Geometry Resolution** ([`geometry`]) - 3D layout generation from the
//!   bond graph, via a named catalog, a VSEPR-style direction table, or a
//!   generic 2D-to-3D projection

pub mod formula;
pub mod geometry;
