use crate::core::models::bond::Bond;
use crate::core::models::ids::AtomId;
use crate::core::models::molecule::{BondError, Molecule};
use crate::engine::formula;
use nalgebra::Point2;
use tracing::debug;

/// One reversible step recorded on the builder's undo log.
///
/// Each variant carries exactly the data needed to reverse it: undoing an
/// atom append removes the atom and cascades removal of every bond touching
/// it; undoing a bond append removes that bond (a no-op if a cascade already
/// removed it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderAction {
    AtomAdded { id: AtomId },
    BondAdded { bond: Bond },
}

/// An incremental molecule-building session.
///
/// Atoms and bonds are appended one at a time as the user works on the 2D
/// canvas, each append recorded on a LIFO action log so it can be undone.
/// Calling [`BuilderSession::finalize`] ends the session: the formula is
/// derived, the name stamped, and the finished [`Molecule`] handed to the
/// caller (typically for insertion into a
/// [`MoleculeLibrary`](crate::workflows::library::MoleculeLibrary)).
#[derive(Debug, Clone, Default)]
pub struct BuilderSession {
    molecule: Molecule,
    actions: Vec<BuilderAction>,
}

impl BuilderSession {
    /// Starts a new, empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The molecule as built so far, for live preview rendering.
    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    /// Returns `true` if there is at least one action left to undo.
    pub fn can_undo(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Places an atom of the given element on the canvas and records the
    /// append on the undo log.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The element symbol (unknown symbols are tolerated).
    /// * `position` - The 2D canvas position.
    ///
    /// # Return
    ///
    /// The ID of the newly placed atom.
    pub fn place_atom(&mut self, symbol: &str, position: Point2<f64>) -> AtomId {
        let id = self.molecule.add_atom(symbol, position);
        self.actions.push(BuilderAction::AtomAdded { id });
        id
    }

    /// Connects two placed atoms with a bond and records the append on the
    /// undo log.
    ///
    /// Connecting an already-bonded pair succeeds without recording a new
    /// action, so one undo never removes a bond the user added earlier.
    ///
    /// # Errors
    ///
    /// Returns [`BondError`] if either endpoint is missing or both endpoints
    /// are the same atom.
    pub fn connect(&mut self, atom1_id: AtomId, atom2_id: AtomId) -> Result<(), BondError> {
        if let Some(neighbors) = self.molecule.bonded_neighbors(atom1_id) {
            if neighbors.contains(&atom2_id) {
                return Ok(());
            }
        }
        self.molecule.add_bond(atom1_id, atom2_id)?;
        self.actions
            .push(BuilderAction::BondAdded { bond: Bond::new(atom1_id, atom2_id) });
        Ok(())
    }

    /// Undoes the most recent action.
    ///
    /// # Return
    ///
    /// The reversed action, or `None` if the log is empty.
    pub fn undo(&mut self) -> Option<BuilderAction> {
        let action = self.actions.pop()?;
        match action {
            BuilderAction::AtomAdded { id } => {
                // Cascades: every bond referencing the atom goes with it.
                self.molecule.remove_atom(id);
            }
            BuilderAction::BondAdded { bond } => {
                self.molecule.remove_bond(bond.atom1_id, bond.atom2_id);
            }
        }
        Some(action)
    }

    /// Finalizes the session into a named molecule.
    ///
    /// The formula is derived from the atom multiset and the name stamped;
    /// both may still be overwritten directly on the returned molecule.
    pub fn finalize(mut self, name: &str) -> Molecule {
        self.molecule.name = name.to_string();
        self.molecule.formula = formula::derive_formula(&self.molecule);
        debug!(
            name = %self.molecule.name,
            formula = %self.molecule.formula,
            atoms = self.molecule.atom_count(),
            bonds = self.molecule.bonds().len(),
            "Finalized builder session."
        );
        self.molecule
    }
}
