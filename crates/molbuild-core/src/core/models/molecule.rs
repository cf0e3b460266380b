use super::atom::{Atom, AtomPlacement};
use super::bond::Bond;
use super::ids::AtomId;
use nalgebra::Point2;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised when a bond cannot be added to a molecule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BondError {
    #[error("Bond endpoint references an atom not present in the molecule")]
    MissingEndpoint,

    #[error("A bond cannot connect an atom to itself")]
    SelfLoop,
}

/// Represents a molecule as assembled on the builder canvas.
///
/// This struct is the central data structure of the crate: an
/// insertion-ordered collection of atom placements plus a set of undirected
/// bonds, with a cached adjacency list for connectivity queries. The name
/// and formula start empty and are stamped at finalization (or overwritten
/// directly afterwards).
///
/// Every bond's endpoints are guaranteed to reference atoms present in the
/// molecule: [`Molecule::add_bond`] rejects unknown endpoints and
/// [`Molecule::remove_atom`] cascades bond removal.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Display name (e.g., "Water"). Also the key into the named-geometry catalog.
    pub name: String,
    /// Chemical formula, derived at finalization or user-overridden.
    pub formula: String,
    /// Primary storage for atom placements.
    atoms: SlotMap<AtomId, AtomPlacement>,
    /// Atom ids in insertion order; iteration order is significant for
    /// rendering but carries no chemical meaning.
    order: Vec<AtomId>,
    /// All bonds, in the order they were declared.
    bonds: Vec<Bond>,
    /// Cached adjacency list, indexed by atom id.
    adjacency: SecondaryMap<AtomId, Vec<AtomId>>,
}

impl PartialEq for Molecule {
    // `SlotMap`/`SecondaryMap` don't implement `PartialEq`, so the derive is
    // unavailable; `adjacency` is fully determined by `atoms` and `bonds`, so
    // comparing the primary fields is equivalent.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.formula == other.formula
            && self.order == other.order
            && self.bonds == other.bonds
            && self.atoms.len() == other.atoms.len()
            && self
                .atoms
                .iter()
                .all(|(id, placement)| other.atoms.get(id) == Some(placement))
    }
}

impl Molecule {
    /// Creates a new, empty molecule with no name or formula.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an atom placement by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&AtomPlacement)` if the atom exists, otherwise `None`.
    pub fn placement(&self, id: AtomId) -> Option<&AtomPlacement> {
        self.atoms.get(id)
    }

    /// Returns `true` if the molecule contains an atom with the given ID.
    pub fn contains_atom(&self, id: AtomId) -> bool {
        self.atoms.contains_key(id)
    }

    /// Returns the number of atoms in the molecule.
    pub fn atom_count(&self) -> usize {
        self.order.len()
    }

    /// Returns an iterator over atom placements in insertion order.
    ///
    /// # Return
    ///
    /// An iterator yielding `(AtomId, &AtomPlacement)` pairs.
    pub fn placements_iter(&self) -> impl Iterator<Item = (AtomId, &AtomPlacement)> {
        self.order.iter().filter_map(|&id| self.atoms.get(id).map(|p| (id, p)))
    }

    /// Returns a slice of all bonds, in declaration order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Adds an atom of the given element at a 2D canvas position.
    ///
    /// Unknown element symbols are tolerated; they receive neutral display
    /// defaults from the element catalog.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The element symbol.
    /// * `position` - The 2D builder-canvas position.
    ///
    /// # Return
    ///
    /// The ID of the newly added atom.
    pub fn add_atom(&mut self, symbol: &str, position: Point2<f64>) -> AtomId {
        let placement = AtomPlacement::new(Atom::new(symbol), position);
        let id = self.atoms.insert(placement);
        self.order.push(id);
        self.adjacency.insert(id, Vec::new());
        id
    }

    /// Adds an undirected bond between two atoms.
    ///
    /// This method is idempotent; adding a bond that already exists (in
    /// either direction) succeeds without creating a duplicate.
    ///
    /// # Arguments
    ///
    /// * `atom1_id` - ID of the first endpoint.
    /// * `atom2_id` - ID of the second endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::MissingEndpoint`] if either atom is not in the
    /// molecule, or [`BondError::SelfLoop`] if both endpoints are the same
    /// atom.
    pub fn add_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId) -> Result<(), BondError> {
        if !self.atoms.contains_key(atom1_id) || !self.atoms.contains_key(atom2_id) {
            return Err(BondError::MissingEndpoint);
        }
        if atom1_id == atom2_id {
            return Err(BondError::SelfLoop);
        }

        if let Some(neighbors) = self.adjacency.get(atom1_id) {
            if neighbors.contains(&atom2_id) {
                // Bond already exists, operation is successful (idempotent)
                return Ok(());
            }
        }

        self.bonds.push(Bond::new(atom1_id, atom2_id));
        self.adjacency[atom1_id].push(atom2_id);
        self.adjacency[atom2_id].push(atom1_id);
        Ok(())
    }

    /// Removes an atom from the molecule.
    ///
    /// Every bond referencing the atom is removed as well, and the adjacency
    /// cache is cleaned up, so no dangling reference survives the removal.
    ///
    /// # Arguments
    ///
    /// * `atom_id` - The ID of the atom to remove.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomPlacement)` if the atom existed, otherwise `None`.
    pub fn remove_atom(&mut self, atom_id: AtomId) -> Option<AtomPlacement> {
        let placement = self.atoms.remove(atom_id)?;

        self.order.retain(|&id| id != atom_id);

        let original_bonds = std::mem::take(&mut self.bonds);
        self.bonds = original_bonds
            .into_iter()
            .filter(|bond| !bond.contains(atom_id))
            .collect();

        let neighbors = self.adjacency.remove(atom_id).unwrap_or_default();
        for neighbor_id in neighbors {
            if let Some(adjacency) = self.adjacency.get_mut(neighbor_id) {
                adjacency.retain(|&id| id != atom_id);
            }
        }

        Some(placement)
    }

    /// Removes the bond between two atoms, if present.
    ///
    /// # Return
    ///
    /// Returns `true` if a bond was removed.
    pub fn remove_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId) -> bool {
        let before = self.bonds.len();
        self.bonds.retain(|bond| !bond.is_between(atom1_id, atom2_id));
        if self.bonds.len() == before {
            return false;
        }

        if let Some(adjacency) = self.adjacency.get_mut(atom1_id) {
            adjacency.retain(|&id| id != atom2_id);
        }
        if let Some(adjacency) = self.adjacency.get_mut(atom2_id) {
            adjacency.retain(|&id| id != atom1_id);
        }
        true
    }

    /// Retrieves the bonded neighbors of an atom from the adjacency cache.
    ///
    /// # Return
    ///
    /// Returns `Some(&[AtomId])` if the atom exists, otherwise `None`.
    pub fn bonded_neighbors(&self, atom_id: AtomId) -> Option<&[AtomId]> {
        self.adjacency.get(atom_id).map(|v| v.as_slice())
    }

    /// Computes the degree (bond count) of every atom in the molecule.
    ///
    /// Each bond increments both endpoints' counters exactly once. Atoms with
    /// no bonds are present in the mapping with degree 0, not absent.
    ///
    /// # Return
    ///
    /// A mapping from atom ID to degree.
    pub fn degrees(&self) -> HashMap<AtomId, usize> {
        let mut degrees: HashMap<AtomId, usize> =
            self.order.iter().map(|&id| (id, 0)).collect();
        for bond in &self.bonds {
            if let Some(count) = degrees.get_mut(&bond.atom1_id) {
                *count += 1;
            }
            if let Some(count) = degrees.get_mut(&bond.atom2_id) {
                *count += 1;
            }
        }
        degrees
    }
}
