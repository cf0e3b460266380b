//! # Geometry Module
//!
//! Converts a molecule's bond graph into 3D positions for rendering. The
//! resolver tries three strategies in a fixed priority order:
//!
//! 1. [`catalog`] - hand-authored layouts for a small set of known molecule
//!    names (exact-match, overrides structural analysis)
//! 2. [`vsepr`] - ideal substituent directions around a unique
//!    highest-degree center atom, keyed by neighbor count
//! 3. generic projection - the 2D builder-canvas coordinates projected onto
//!    the z = 0 plane
//!
//! The produced [`MoleculeLayout`] only carries positions, sizes, and colors;
//! turning those into drawable primitives (spheres, cylinders) is the
//! rendering layer's job.

pub mod catalog;
pub mod resolver;
pub mod vsepr;

use nalgebra::Point3;

pub use resolver::resolve_layout;

/// Distance between a center atom and its substituents, in scene units.
/// Catalog and VSEPR directions are unit vectors scaled by this constant.
pub const BOND_LENGTH: f64 = 1.0;

/// Which resolver branch produced a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSource {
    /// Exact-match entry from the named-geometry catalog.
    NamedCatalog,
    /// Computed around a unique highest-degree center atom.
    VseprCenter,
    /// 2D builder coordinates projected onto the z = 0 plane.
    Projection,
}

/// A positioned atom in a resolved layout, carrying everything the rendering
/// layer needs to draw its sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub symbol: String,
    pub color: [u8; 3],
    pub radius: f64,
    pub position: Point3<f64>,
}

/// A straight edge between two layout nodes, as indices into
/// [`MoleculeLayout::nodes`]. The rendering layer orients a cylinder between
/// the endpoint positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEdge {
    pub node1: usize,
    pub node2: usize,
}

/// The fully materialized result of geometry resolution: a renderable tree
/// of positioned atoms with connecting edges.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeLayout {
    pub source: LayoutSource,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

impl MoleculeLayout {
    /// Returns `true` if the layout contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
