//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent
//! molecules in Molbuild, providing the foundation for formula derivation
//! and geometry resolution.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation and its 2D canvas placement
//! - [`bond`] - Undirected bonds between placed atoms
//! - [`molecule`] - The molecule graph with insertion-ordered atoms, bonds,
//!   and cached connectivity
//! - [`ids`] - Unique identifier types for atoms and molecules

pub mod atom;
pub mod bond;
pub mod ids;
pub mod molecule;
