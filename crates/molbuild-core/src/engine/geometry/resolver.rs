use super::catalog::{self, NamedGeometry};
use super::vsepr;
use super::{BOND_LENGTH, LayoutEdge, LayoutNode, LayoutSource, MoleculeLayout};
use crate::core::elements;
use crate::core::models::ids::AtomId;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Canvas point that maps to the scene origin on the projection path.
const CANVAS_REFERENCE: [f64; 2] = [0.5, 0.5];
/// Uniform scale from canvas units to scene units on the projection path.
const PROJECTION_SCALE: f64 = 4.0;

/// Resolves a molecule into a renderable 3D layout.
///
/// The function is total: it never panics or errors, and every molecule,
/// however malformed, produces *some* layout (possibly empty when there are
/// no atoms). The molecule itself is never mutated.
///
/// Strategies are tried in a fixed priority order, and the chosen branch is
/// recorded in [`MoleculeLayout::source`]:
///
/// 1. An exact-name match in the named-geometry catalog. This overrides
///    structural analysis entirely, including the molecule's own atom list.
/// 2. A VSEPR-style layout around the unique highest-degree atom. Ties for
///    the maximum degree disqualify this branch rather than picking an
///    arbitrary winner, keeping the output deterministic.
/// 3. A generic projection of the 2D builder-canvas coordinates onto the
///    z = 0 plane.
pub fn resolve_layout(molecule: &Molecule) -> MoleculeLayout {
    if let Some(entry) = catalog::named_geometry(&molecule.name) {
        debug!(name = %molecule.name, "Resolving geometry from the named catalog.");
        return layout_from_catalog(entry);
    }

    if let Some(center) = unique_max_degree_center(molecule) {
        debug!(name = %molecule.name, "Resolving geometry around a unique center atom.");
        return layout_around_center(molecule, center);
    }

    debug!(
        name = %molecule.name,
        atoms = molecule.atom_count(),
        "No named entry or unique center; projecting canvas coordinates."
    );
    layout_from_projection(molecule)
}

/// Finds the atom with the strictly highest degree, if one exists.
///
/// Returns `None` for an empty molecule and whenever two or more atoms tie
/// for the maximum.
fn unique_max_degree_center(molecule: &Molecule) -> Option<AtomId> {
    let degrees = molecule.degrees();
    let max = *degrees.values().max()?;
    let mut at_max = degrees
        .iter()
        .filter(|&(_, &degree)| degree == max)
        .map(|(&id, _)| id);
    let center = at_max.next()?;
    match at_max.next() {
        Some(_) => None,
        None => Some(center),
    }
}

fn layout_from_catalog(entry: &NamedGeometry) -> MoleculeLayout {
    let mut nodes = vec![node_for_symbol(entry.center, Point3::origin())];
    let mut edges = Vec::with_capacity(entry.sites.len());

    for site in entry.sites {
        let [x, y, z] = site.direction;
        let position = Point3::new(x, y, z) * BOND_LENGTH;
        nodes.push(node_for_symbol(site.symbol, position));
        edges.push(LayoutEdge {
            node1: 0,
            node2: nodes.len() - 1,
        });
    }

    MoleculeLayout {
        source: LayoutSource::NamedCatalog,
        nodes,
        edges,
    }
}

fn layout_around_center(molecule: &Molecule, center: AtomId) -> MoleculeLayout {
    // Neighbors in bond-list order; each consumes the next unused direction.
    let neighbors: Vec<AtomId> = molecule
        .bonds()
        .iter()
        .filter_map(|bond| bond.other(center))
        .collect();
    let directions = vsepr::ideal_directions(neighbors.len());

    let mut nodes = Vec::with_capacity(neighbors.len() + 1);
    let mut edges = Vec::with_capacity(neighbors.len());

    nodes.push(node_for_atom(molecule, center, Point3::origin()));
    for (&neighbor, direction) in neighbors.iter().zip(directions.iter()) {
        let position = Point3::origin() + direction * BOND_LENGTH;
        nodes.push(node_for_atom(molecule, neighbor, position));
        edges.push(LayoutEdge {
            node1: 0,
            node2: nodes.len() - 1,
        });
    }

    MoleculeLayout {
        source: LayoutSource::VseprCenter,
        nodes,
        edges,
    }
}

fn layout_from_projection(molecule: &Molecule) -> MoleculeLayout {
    let mut nodes = Vec::with_capacity(molecule.atom_count());
    let mut node_index: HashMap<AtomId, usize> = HashMap::with_capacity(molecule.atom_count());

    for (id, placement) in molecule.placements_iter() {
        // Screen y grows downward, scene y grows upward.
        let position = Point3::new(
            (placement.position.x - CANVAS_REFERENCE[0]) * PROJECTION_SCALE,
            -(placement.position.y - CANVAS_REFERENCE[1]) * PROJECTION_SCALE,
            0.0,
        );
        node_index.insert(id, nodes.len());
        nodes.push(LayoutNode {
            symbol: placement.atom.symbol.clone(),
            color: placement.atom.color,
            radius: placement.atom.radius,
            position,
        });
    }

    let mut edges = Vec::with_capacity(molecule.bonds().len());
    for bond in molecule.bonds() {
        match (node_index.get(&bond.atom1_id), node_index.get(&bond.atom2_id)) {
            (Some(&node1), Some(&node2)) => edges.push(LayoutEdge { node1, node2 }),
            _ => trace!(?bond, "Skipping bond with unresolvable endpoint."),
        }
    }

    MoleculeLayout {
        source: LayoutSource::Projection,
        nodes,
        edges,
    }
}

fn node_for_symbol(symbol: &str, position: Point3<f64>) -> LayoutNode {
    LayoutNode {
        symbol: symbol.to_string(),
        color: elements::display_color(symbol),
        radius: elements::display_radius(symbol),
        position,
    }
}

fn node_for_atom(molecule: &Molecule, id: AtomId, position: Point3<f64>) -> LayoutNode {
    match molecule.placement(id) {
        Some(placement) => LayoutNode {
            symbol: placement.atom.symbol.clone(),
            color: placement.atom.color,
            radius: placement.atom.radius,
            position,
        },
        // Unreachable through the public API; kept total rather than panicking.
        None => node_for_symbol("", position),
    }
}
