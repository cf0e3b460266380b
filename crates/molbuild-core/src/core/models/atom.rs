use crate::core::elements;
use nalgebra::Point2;

/// Represents a single atom as placed by the builder.
///
/// This struct carries the element symbol plus the display properties the
/// rendering layer needs (CPK color and a covalent-radius-derived sphere
/// size). The color is purely cosmetic: two atoms are considered equal when
/// their symbol and radius match, regardless of color.
#[derive(Debug, Clone)]
pub struct Atom {
    /// The element symbol (e.g., "C", "O", "Cl").
    pub symbol: String,
    /// The display color as RGB components (cosmetic, excluded from equality).
    pub color: [u8; 3],
    /// The display radius in scene units.
    pub radius: f64,
}

impl Atom {
    /// Creates a new `Atom` for the given element symbol.
    ///
    /// Display color and radius are looked up in the element catalog; symbols
    /// outside the catalog receive the neutral defaults, so unknown elements
    /// are tolerated rather than rejected.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The element symbol.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            color: elements::display_color(symbol),
            radius: elements::display_radius(symbol),
        }
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.radius == other.radius
    }
}

/// An [`Atom`] together with its 2D position on the builder canvas.
///
/// The 2D coordinate is builder-UI state, not chemistry: the geometry
/// resolver only consults it on the generic projection fallback path, when
/// no canonical 3D layout applies.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomPlacement {
    /// The atom being placed.
    pub atom: Atom,
    /// The position on the 2D builder canvas (normalized coordinates,
    /// y grows downward).
    pub position: Point2<f64>,
}

impl AtomPlacement {
    /// Creates a new placement of `atom` at `position`.
    pub fn new(atom: Atom, position: Point2<f64>) -> Self {
        Self { atom, position }
    }

    /// Returns the element symbol of the placed atom.
    pub fn symbol(&self) -> &str {
        &self.atom.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_pulls_display_properties_from_catalog() {
        let atom = Atom::new("O");
        assert_eq!(atom.symbol, "O");
        assert_eq!(atom.color, elements::display_color("O"));
        assert_eq!(atom.radius, elements::display_radius("O"));
    }

    #[test]
    fn new_atom_with_unknown_symbol_gets_neutral_defaults() {
        let atom = Atom::new("Xx");
        assert_eq!(atom.symbol, "Xx");
        assert_eq!(atom.color, elements::DEFAULT_COLOR);
        assert_eq!(atom.radius, elements::DEFAULT_RADIUS);
    }

    #[test]
    fn atom_equality_ignores_color() {
        let mut a = Atom::new("C");
        let b = Atom::new("C");
        a.color = [1, 2, 3];
        assert_eq!(a, b);
    }

    #[test]
    fn atom_equality_respects_symbol_and_radius() {
        assert_ne!(Atom::new("C"), Atom::new("N"));

        let mut a = Atom::new("C");
        a.radius = 9.0;
        assert_ne!(a, Atom::new("C"));
    }

    #[test]
    fn placement_exposes_symbol() {
        let placement = AtomPlacement::new(Atom::new("H"), Point2::new(0.25, 0.75));
        assert_eq!(placement.symbol(), "H");
        assert_eq!(placement.position, Point2::new(0.25, 0.75));
    }
}
