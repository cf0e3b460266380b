use phf::{Map, phf_map};

/// Broad periodic-table classification, used by the builder UI to group the
/// element picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    Nonmetal,
    Halogen,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    TransitionMetal,
}

/// Static display and classification data for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementInfo {
    /// Full element name (e.g., "Oxygen").
    pub name: &'static str,
    /// CPK display color as RGB components.
    pub color: [u8; 3],
    /// Covalent radius in Angstroms, used to size display spheres.
    pub covalent_radius: f64,
    pub category: ElementCategory,
}

/// Display color for symbols outside the catalog: neutral gray.
pub const DEFAULT_COLOR: [u8; 3] = [204, 204, 204];
/// Display radius for symbols outside the catalog.
pub const DEFAULT_RADIUS: f64 = 0.75;

#[rustfmt::skip]
static ELEMENTS: Map<&'static str, ElementInfo> = phf_map! {
    "H"  => ElementInfo { name: "Hydrogen",   color: [255, 255, 255], covalent_radius: 0.31, category: ElementCategory::Nonmetal },
    "He" => ElementInfo { name: "Helium",     color: [217, 255, 255], covalent_radius: 0.28, category: ElementCategory::NobleGas },
    "Li" => ElementInfo { name: "Lithium",    color: [204, 128, 255], covalent_radius: 1.28, category: ElementCategory::AlkaliMetal },
    "B"  => ElementInfo { name: "Boron",      color: [255, 181, 181], covalent_radius: 0.84, category: ElementCategory::Metalloid },
    "C"  => ElementInfo { name: "Carbon",     color: [144, 144, 144], covalent_radius: 0.76, category: ElementCategory::Nonmetal },
    "N"  => ElementInfo { name: "Nitrogen",   color: [48, 80, 248],   covalent_radius: 0.71, category: ElementCategory::Nonmetal },
    "O"  => ElementInfo { name: "Oxygen",     color: [255, 13, 13],   covalent_radius: 0.66, category: ElementCategory::Nonmetal },
    "F"  => ElementInfo { name: "Fluorine",   color: [144, 224, 80],  covalent_radius: 0.57, category: ElementCategory::Halogen },
    "Ne" => ElementInfo { name: "Neon",       color: [179, 227, 245], covalent_radius: 0.58, category: ElementCategory::NobleGas },
    "Na" => ElementInfo { name: "Sodium",     color: [171, 92, 242],  covalent_radius: 1.66, category: ElementCategory::AlkaliMetal },
    "Mg" => ElementInfo { name: "Magnesium",  color: [138, 255, 0],   covalent_radius: 1.41, category: ElementCategory::AlkalineEarthMetal },
    "Si" => ElementInfo { name: "Silicon",    color: [240, 200, 160], covalent_radius: 1.11, category: ElementCategory::Metalloid },
    "P"  => ElementInfo { name: "Phosphorus", color: [255, 128, 0],   covalent_radius: 1.07, category: ElementCategory::Nonmetal },
    "S"  => ElementInfo { name: "Sulfur",     color: [255, 255, 48],  covalent_radius: 1.05, category: ElementCategory::Nonmetal },
    "Cl" => ElementInfo { name: "Chlorine",   color: [31, 240, 31],   covalent_radius: 1.02, category: ElementCategory::Halogen },
    "K"  => ElementInfo { name: "Potassium",  color: [143, 64, 212],  covalent_radius: 2.03, category: ElementCategory::AlkaliMetal },
    "Ca" => ElementInfo { name: "Calcium",    color: [61, 255, 0],    covalent_radius: 1.76, category: ElementCategory::AlkalineEarthMetal },
    "Fe" => ElementInfo { name: "Iron",       color: [224, 102, 51],  covalent_radius: 1.32, category: ElementCategory::TransitionMetal },
    "Br" => ElementInfo { name: "Bromine",    color: [166, 41, 41],   covalent_radius: 1.20, category: ElementCategory::Halogen },
    "I"  => ElementInfo { name: "Iodine",     color: [148, 0, 148],   covalent_radius: 1.39, category: ElementCategory::Halogen },
};

/// Looks up the catalog entry for an element symbol.
///
/// # Return
///
/// Returns `Some(&ElementInfo)` for cataloged symbols, otherwise `None`.
pub fn element(symbol: &str) -> Option<&'static ElementInfo> {
    ELEMENTS.get(symbol.trim())
}

/// The display color for a symbol, falling back to [`DEFAULT_COLOR`] for
/// symbols outside the catalog.
pub fn display_color(symbol: &str) -> [u8; 3] {
    element(symbol).map(|info| info.color).unwrap_or(DEFAULT_COLOR)
}

/// The display radius for a symbol, falling back to [`DEFAULT_RADIUS`] for
/// symbols outside the catalog.
pub fn display_radius(symbol: &str) -> f64 {
    element(symbol)
        .map(|info| info.covalent_radius)
        .unwrap_or(DEFAULT_RADIUS)
}
