use super::builder::BuilderSession;
use crate::core::io::{LibraryDocument, StoreError};
use crate::core::models::ids::MoleculeId;
use crate::core::models::molecule::Molecule;
use nalgebra::Point2;
use slotmap::SlotMap;
use tracing::debug;

/// The persistent collection of finalized molecules, in insertion order.
///
/// The library itself never touches storage; the enclosing application
/// shuttles it to and from a [`LibraryDocument`] through
/// [`MoleculeLibrary::to_document`] / [`MoleculeLibrary::from_document`],
/// and seeds [`MoleculeLibrary::with_default_set`] when the store is empty
/// or unreadable.
#[derive(Debug, Clone, Default)]
pub struct MoleculeLibrary {
    molecules: SlotMap<MoleculeId, Molecule>,
    order: Vec<MoleculeId>,
}

impl MoleculeLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library seeded with the canonical default set: Water,
    /// Carbon Dioxide, Methane, Ammonia, and Hydrogen Chloride, each with
    /// its full atom/bond graph and derived formula. Every one of these has
    /// a named-geometry catalog entry, so the demo set always renders with
    /// a hand-tuned shape.
    pub fn with_default_set() -> Self {
        let mut library = Self::new();

        let mut water = BuilderSession::new();
        let o = water.place_atom("O", Point2::new(0.5, 0.4));
        let h1 = water.place_atom("H", Point2::new(0.35, 0.6));
        let h2 = water.place_atom("H", Point2::new(0.65, 0.6));
        water.connect(o, h1).expect("endpoints just placed");
        water.connect(o, h2).expect("endpoints just placed");
        library.add(water.finalize("Water"));

        let mut carbon_dioxide = BuilderSession::new();
        let c = carbon_dioxide.place_atom("C", Point2::new(0.5, 0.5));
        let o1 = carbon_dioxide.place_atom("O", Point2::new(0.3, 0.5));
        let o2 = carbon_dioxide.place_atom("O", Point2::new(0.7, 0.5));
        carbon_dioxide.connect(c, o1).expect("endpoints just placed");
        carbon_dioxide.connect(c, o2).expect("endpoints just placed");
        library.add(carbon_dioxide.finalize("Carbon Dioxide"));

        let mut methane = BuilderSession::new();
        let c = methane.place_atom("C", Point2::new(0.5, 0.5));
        for position in [(0.5, 0.3), (0.7, 0.5), (0.5, 0.7), (0.3, 0.5)] {
            let h = methane.place_atom("H", Point2::new(position.0, position.1));
            methane.connect(c, h).expect("endpoints just placed");
        }
        library.add(methane.finalize("Methane"));

        let mut ammonia = BuilderSession::new();
        let n = ammonia.place_atom("N", Point2::new(0.5, 0.4));
        for position in [(0.3, 0.6), (0.5, 0.7), (0.7, 0.6)] {
            let h = ammonia.place_atom("H", Point2::new(position.0, position.1));
            ammonia.connect(n, h).expect("endpoints just placed");
        }
        library.add(ammonia.finalize("Ammonia"));

        let mut hydrogen_chloride = BuilderSession::new();
        let cl = hydrogen_chloride.place_atom("Cl", Point2::new(0.4, 0.5));
        let h = hydrogen_chloride.place_atom("H", Point2::new(0.6, 0.5));
        hydrogen_chloride.connect(cl, h).expect("endpoints just placed");
        library.add(hydrogen_chloride.finalize("Hydrogen Chloride"));

        debug!(count = library.len(), "Seeded default molecule set.");
        library
    }

    /// Appends a finalized molecule to the library.
    ///
    /// # Return
    ///
    /// The ID of the stored molecule.
    pub fn add(&mut self, molecule: Molecule) -> MoleculeId {
        let id = self.molecules.insert(molecule);
        self.order.push(id);
        id
    }

    /// Removes a molecule from the library.
    ///
    /// # Return
    ///
    /// Returns `Some(Molecule)` if it existed, otherwise `None`.
    pub fn remove(&mut self, id: MoleculeId) -> Option<Molecule> {
        let molecule = self.molecules.remove(id)?;
        self.order.retain(|&existing| existing != id);
        Some(molecule)
    }

    /// Retrieves a molecule by its ID.
    pub fn get(&self, id: MoleculeId) -> Option<&Molecule> {
        self.molecules.get(id)
    }

    /// Retrieves a mutable molecule by its ID, for post-finalization edits
    /// (renaming, overriding the formula).
    pub fn get_mut(&mut self, id: MoleculeId) -> Option<&mut Molecule> {
        self.molecules.get_mut(id)
    }

    /// Returns the number of molecules in the library.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the library holds no molecules.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns an iterator over molecules in insertion order.
    ///
    /// # Return
    ///
    /// An iterator yielding `(MoleculeId, &Molecule)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (MoleculeId, &Molecule)> {
        self.order
            .iter()
            .filter_map(|&id| self.molecules.get(id).map(|molecule| (id, molecule)))
    }

    /// Encodes the library into its persistence document, preserving order.
    pub fn to_document(&self) -> LibraryDocument {
        LibraryDocument::from_molecules(self.iter().map(|(_, molecule)| molecule))
    }

    /// Rebuilds a library from its persistence document.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError`] on the first malformed record; the caller
    /// falls back to [`MoleculeLibrary::with_default_set`].
    pub fn from_document(document: &LibraryDocument) -> Result<Self, StoreError> {
        let mut library = Self::new();
        for molecule in document.into_molecules()? {
            library.add(molecule);
        }
        Ok(library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::formula::derive_formula;
    use crate::engine::geometry::{self, LayoutSource};

    #[test]
    fn default_set_contains_the_five_canonical_molecules_in_order() {
        let library = MoleculeLibrary::with_default_set();
        let names: Vec<&str> = library.iter().map(|(_, m)| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Water", "Carbon Dioxide", "Methane", "Ammonia", "Hydrogen Chloride"]
        );
    }

    #[test]
    fn default_set_formulas_match_their_graphs() {
        let library = MoleculeLibrary::with_default_set();
        for (_, molecule) in library.iter() {
            assert_eq!(molecule.formula, derive_formula(molecule));
        }

        let formulas: Vec<&str> = library.iter().map(|(_, m)| m.formula.as_str()).collect();
        assert_eq!(
            formulas,
            vec!["H\u{2082}O", "CO\u{2082}", "CH\u{2084}", "H\u{2083}N", "ClH"]
        );
    }

    #[test]
    fn every_default_molecule_has_a_named_geometry() {
        let library = MoleculeLibrary::with_default_set();
        for (_, molecule) in library.iter() {
            assert!(
                geometry::catalog::named_geometry(&molecule.name).is_some(),
                "{} lacks a catalog entry",
                molecule.name
            );
            let layout = geometry::resolve_layout(molecule);
            assert_eq!(layout.source, LayoutSource::NamedCatalog);
        }
    }

    #[test]
    fn add_remove_and_lookup_preserve_order() {
        let mut library = MoleculeLibrary::new();
        assert!(library.is_empty());

        let first = library.add(Molecule::new());
        let second = library.add(Molecule::new());
        let third = library.add(Molecule::new());
        assert_eq!(library.len(), 3);

        library.remove(second).unwrap();
        assert_eq!(library.remove(second), None);

        let remaining: Vec<MoleculeId> = library.iter().map(|(id, _)| id).collect();
        assert_eq!(remaining, vec![first, third]);
    }

    #[test]
    fn molecules_can_be_edited_after_finalization() {
        let mut library = MoleculeLibrary::with_default_set();
        let (id, _) = library.iter().next().unwrap();

        let molecule = library.get_mut(id).unwrap();
        molecule.name = "Dihydrogen Monoxide".to_string();
        molecule.formula = "HOH".to_string();

        assert_eq!(library.get(id).unwrap().name, "Dihydrogen Monoxide");
        assert_eq!(library.get(id).unwrap().formula, "HOH");
    }

    #[test]
    fn library_round_trips_through_its_document() {
        let library = MoleculeLibrary::with_default_set();
        let document = library.to_document();
        let rebuilt = MoleculeLibrary::from_document(&document).unwrap();

        assert_eq!(rebuilt.len(), library.len());
        for ((_, original), (_, reloaded)) in library.iter().zip(rebuilt.iter()) {
            assert_eq!(original.name, reloaded.name);
            assert_eq!(original.formula, reloaded.formula);
            assert_eq!(original.atom_count(), reloaded.atom_count());
            assert_eq!(original.bonds().len(), reloaded.bonds().len());
        }
    }
}
