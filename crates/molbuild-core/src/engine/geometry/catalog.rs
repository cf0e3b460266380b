use phf::{Map, phf_map};

/// One substituent site of a named geometry: which element sits there and the
/// unit direction from the center atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub symbol: &'static str,
    pub direction: [f64; 3],
}

/// A hand-authored layout for one known molecule: the center element plus its
/// substituent sites. Directions are unit vectors; the resolver scales them
/// by the bond-length constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedGeometry {
    pub center: &'static str,
    pub sites: &'static [Site],
}

// Hand-tuned shapes for the demo set. Keyed by exact molecule name, not by
// structural analysis, so a renamed molecule falls through to the computed
// branches.
#[rustfmt::skip]
static NAMED_GEOMETRIES: Map<&'static str, NamedGeometry> = phf_map! {
    // Bent, 104.5 degrees between the O-H directions.
    "Water" => NamedGeometry {
        center: "O",
        sites: &[
            Site { symbol: "H", direction: [ 0.7908, -0.6122, 0.0] },
            Site { symbol: "H", direction: [-0.7908, -0.6122, 0.0] },
        ],
    },
    // Linear triatomic.
    "Carbon Dioxide" => NamedGeometry {
        center: "C",
        sites: &[
            Site { symbol: "O", direction: [ 1.0, 0.0, 0.0] },
            Site { symbol: "O", direction: [-1.0, 0.0, 0.0] },
        ],
    },
    // Regular tetrahedron: normalized (+-1, +-1, +-1) with an even number of
    // minus signs.
    "Methane" => NamedGeometry {
        center: "C",
        sites: &[
            Site { symbol: "H", direction: [ 0.5774,  0.5774,  0.5774] },
            Site { symbol: "H", direction: [ 0.5774, -0.5774, -0.5774] },
            Site { symbol: "H", direction: [-0.5774,  0.5774, -0.5774] },
            Site { symbol: "H", direction: [-0.5774, -0.5774,  0.5774] },
        ],
    },
    // Trigonal pyramid, hydrogens below the nitrogen apex.
    "Ammonia" => NamedGeometry {
        center: "N",
        sites: &[
            Site { symbol: "H", direction: [ 0.9428, -0.3333,  0.0] },
            Site { symbol: "H", direction: [-0.4714, -0.3333,  0.8165] },
            Site { symbol: "H", direction: [-0.4714, -0.3333, -0.8165] },
        ],
    },
    // Diatomic.
    "Hydrogen Chloride" => NamedGeometry {
        center: "Cl",
        sites: &[
            Site { symbol: "H", direction: [1.0, 0.0, 0.0] },
        ],
    },
};

/// Looks up the hand-authored geometry for a molecule name (exact match).
pub fn named_geometry(name: &str) -> Option<&'static NamedGeometry> {
    NAMED_GEOMETRIES.get(name)
}
