//! # Molbuild Core Library
//!
//! The chemistry core behind an interactive molecule builder: it turns an
//! abstract graph of atoms and bonds into a canonical chemical formula and a
//! renderable 3D layout. It is pure, deterministic, and UI-independent — the
//! enclosing application owns all rendering, gesture, and storage concerns.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`Molecule`, `Atom`, `Bond`), the static element catalog, and the
//!   persistence document format.
//!
//! - **[`engine`]: The Logic Core.** Pure computations over a molecule: the
//!   formula deriver (Hill-like ordering with subscript digits) and the
//!   geometry resolver (named catalog, VSEPR-style single-center layout, and
//!   a generic 2D-to-3D projection fallback).
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer:
//!   the incremental builder session with its undo log, and the molecule
//!   library with its canonical default set.

pub mod core;
pub mod engine;
pub mod workflows;
