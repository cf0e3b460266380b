use super::models::ids::AtomId;
use super::models::molecule::{BondError, Molecule};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while encoding, decoding, or persisting a library document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Malformed molecule '{name}': bond {from}-{to} ({source})")]
    MalformedBond {
        name: String,
        from: usize,
        to: usize,
        source: BondError,
    },
}

/// One atom of a serialized molecule: element symbol plus 2D canvas position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    pub symbol: String,
    pub x: f64,
    pub y: f64,
}

/// One bond of a serialized molecule, as positional indices into the atom
/// list of its [`MoleculeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRecord {
    pub from: usize,
    pub to: usize,
}

/// A molecule in wire form. Atom order is the molecule's insertion order and
/// bond indices refer into it, so the document has no dependence on runtime
/// slotmap keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeRecord {
    pub name: String,
    pub formula: String,
    pub atoms: Vec<AtomRecord>,
    pub bonds: Vec<BondRecord>,
}

/// The persistence document: every molecule of a library, in library order.
/// This is the serialization contract with the enclosing application's
/// storage layer; the crate itself never decides when to save or load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LibraryDocument {
    pub molecules: Vec<MoleculeRecord>,
}

impl MoleculeRecord {
    /// Encodes a molecule into wire form.
    pub fn from_molecule(molecule: &Molecule) -> Self {
        let mut index_of: HashMap<AtomId, usize> = HashMap::with_capacity(molecule.atom_count());
        let mut atoms = Vec::with_capacity(molecule.atom_count());
        for (id, placement) in molecule.placements_iter() {
            index_of.insert(id, atoms.len());
            atoms.push(AtomRecord {
                symbol: placement.symbol().to_string(),
                x: placement.position.x,
                y: placement.position.y,
            });
        }

        let bonds = molecule
            .bonds()
            .iter()
            .filter_map(|bond| {
                Some(BondRecord {
                    from: *index_of.get(&bond.atom1_id)?,
                    to: *index_of.get(&bond.atom2_id)?,
                })
            })
            .collect();

        Self {
            name: molecule.name.clone(),
            formula: molecule.formula.clone(),
            atoms,
            bonds,
        }
    }

    /// Decodes the record back into a [`Molecule`].
    ///
    /// Reconstruction goes through [`Molecule::add_atom`] and
    /// [`Molecule::add_bond`], so the molecule's referential invariant is
    /// re-established on load.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MalformedBond`] if a bond references an atom
    /// index outside the atom list or connects an atom to itself.
    pub fn into_molecule(&self) -> Result<Molecule, StoreError> {
        let mut molecule = Molecule::new();
        molecule.name = self.name.clone();
        molecule.formula = self.formula.clone();

        let ids: Vec<AtomId> = self
            .atoms
            .iter()
            .map(|record| molecule.add_atom(&record.symbol, Point2::new(record.x, record.y)))
            .collect();

        for bond in &self.bonds {
            let malformed = |source| StoreError::MalformedBond {
                name: self.name.clone(),
                from: bond.from,
                to: bond.to,
                source,
            };
            let (&from_id, &to_id) = ids
                .get(bond.from)
                .zip(ids.get(bond.to))
                .ok_or_else(|| malformed(BondError::MissingEndpoint))?;
            molecule.add_bond(from_id, to_id).map_err(malformed)?;
        }

        Ok(molecule)
    }
}

impl LibraryDocument {
    /// Encodes a sequence of molecules, preserving order.
    pub fn from_molecules<'a, I>(molecules: I) -> Self
    where
        I: IntoIterator<Item = &'a Molecule>,
    {
        Self {
            molecules: molecules
                .into_iter()
                .map(MoleculeRecord::from_molecule)
                .collect(),
        }
    }

    /// Decodes every record back into a molecule, preserving order.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed record.
    pub fn into_molecules(&self) -> Result<Vec<Molecule>, StoreError> {
        self.molecules
            .iter()
            .map(MoleculeRecord::into_molecule)
            .collect()
    }

    /// Serializes the document to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, StoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parses a document from a TOML string.
    ///
    /// The `path` is only used to label errors.
    pub fn from_toml_str(content: &str, path: &str) -> Result<Self, StoreError> {
        toml::from_str(content).map_err(|e| StoreError::Toml {
            path: path.to_string(),
            source: e,
        })
    }

    /// Writes the document to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| StoreError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Reads a document from a TOML file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content, &path.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_water() -> Molecule {
        let mut molecule = Molecule::new();
        molecule.name = "Water".to_string();
        molecule.formula = "H\u{2082}O".to_string();
        let o = molecule.add_atom("O", Point2::new(0.5, 0.4));
        let h1 = molecule.add_atom("H", Point2::new(0.3, 0.6));
        let h2 = molecule.add_atom("H", Point2::new(0.7, 0.6));
        molecule.add_bond(o, h1).unwrap();
        molecule.add_bond(o, h2).unwrap();
        molecule
    }

    #[test]
    fn molecule_round_trips_through_wire_form() {
        let water = create_water();
        let record = MoleculeRecord::from_molecule(&water);
        assert_eq!(record.atoms.len(), 3);
        assert_eq!(record.bonds, vec![
            BondRecord { from: 0, to: 1 },
            BondRecord { from: 0, to: 2 },
        ]);

        let rebuilt = record.into_molecule().unwrap();
        assert_eq!(rebuilt.name, "Water");
        assert_eq!(rebuilt.formula, "H\u{2082}O");
        assert_eq!(rebuilt.atom_count(), 3);
        assert_eq!(rebuilt.bonds().len(), 2);

        let symbols: Vec<&str> = rebuilt
            .placements_iter()
            .map(|(_, p)| p.symbol())
            .collect();
        assert_eq!(symbols, vec!["O", "H", "H"]);
    }

    #[test]
    fn decode_rejects_out_of_range_bond_index() {
        let record = MoleculeRecord {
            name: "Broken".to_string(),
            formula: String::new(),
            atoms: vec![AtomRecord { symbol: "H".to_string(), x: 0.0, y: 0.0 }],
            bonds: vec![BondRecord { from: 0, to: 7 }],
        };
        let err = record.into_molecule().unwrap_err();
        assert!(matches!(
            err,
            StoreError::MalformedBond { source: BondError::MissingEndpoint, .. }
        ));
    }

    #[test]
    fn decode_rejects_self_loop() {
        let record = MoleculeRecord {
            name: "Loop".to_string(),
            formula: String::new(),
            atoms: vec![AtomRecord { symbol: "O".to_string(), x: 0.5, y: 0.5 }],
            bonds: vec![BondRecord { from: 0, to: 0 }],
        };
        let err = record.into_molecule().unwrap_err();
        assert!(matches!(
            err,
            StoreError::MalformedBond { source: BondError::SelfLoop, .. }
        ));
    }

    #[test]
    fn document_round_trips_through_toml() {
        let document = LibraryDocument::from_molecules([&create_water()]);
        let toml_text = document.to_toml_string().unwrap();
        let parsed = LibraryDocument::from_toml_str(&toml_text, "in-memory").unwrap();
        assert_eq!(parsed, document);

        let molecules = parsed.into_molecules().unwrap();
        assert_eq!(molecules.len(), 1);
        assert_eq!(molecules[0].name, "Water");
    }

    #[test]
    fn empty_document_round_trips() {
        let document = LibraryDocument::default();
        let toml_text = document.to_toml_string().unwrap();
        let parsed = LibraryDocument::from_toml_str(&toml_text, "in-memory").unwrap();
        assert!(parsed.molecules.is_empty());
    }

    #[test]
    fn save_and_load_round_trip_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.toml");

        let document = LibraryDocument::from_molecules([&create_water()]);
        document.save(&path).unwrap();
        let loaded = LibraryDocument::load(&path).unwrap();
        assert_eq!(loaded, document);
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let err = LibraryDocument::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn load_reports_invalid_toml() {
        let err = LibraryDocument::from_toml_str("molecules = 3", "bad.toml").unwrap_err();
        assert!(matches!(err, StoreError::Toml { .. }));
    }
}
