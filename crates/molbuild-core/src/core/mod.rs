//! # Core Module
//!
//! This module provides the fundamental building blocks for representing
//! molecules in Molbuild, serving as the data foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and static lookup tables
//! required to describe a molecule assembled on a 2D builder canvas: atoms
//! with display properties, undirected bonds, and the molecule graph that
//! ties them together.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Data structures for atoms,
//!   placements, bonds, and molecules
//! - **Element Knowledge** ([`elements`]) - Static per-element display and
//!   classification data
//! - **Persistence Format** ([`io`]) - The serialization document consumed
//!   by the enclosing application's storage layer

pub mod elements;
pub mod io;
pub mod models;
