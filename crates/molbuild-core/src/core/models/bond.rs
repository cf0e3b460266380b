use super::ids::AtomId;

/// An undirected bond between two placed atoms.
///
/// `(a, b)` and `(b, a)` are the same bond for every graph algorithm in this
/// crate; no bond order or multiplicity is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_id: AtomId,
    pub atom2_id: AtomId,
}

impl Bond {
    pub fn new(atom1_id: AtomId, atom2_id: AtomId) -> Self {
        Self { atom1_id, atom2_id }
    }

    /// Returns `true` if either endpoint is `atom_id`.
    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.atom1_id == atom_id || self.atom2_id == atom_id
    }

    /// Returns `true` if this bond connects `a` and `b`, in either direction.
    pub fn is_between(&self, a: AtomId, b: AtomId) -> bool {
        (self.atom1_id == a && self.atom2_id == b) || (self.atom1_id == b && self.atom2_id == a)
    }

    /// Given one endpoint, returns the other; `None` if `atom_id` is not an
    /// endpoint of this bond.
    pub fn other(&self, atom_id: AtomId) -> Option<AtomId> {
        if self.atom1_id == atom_id {
            Some(self.atom2_id)
        } else if self.atom2_id == atom_id {
            Some(self.atom1_id)
        } else {
            None
        }
    }
}
