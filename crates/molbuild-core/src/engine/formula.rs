use crate::core::models::molecule::Molecule;
use std::collections::HashMap;

const CARBON: &str = "C";
const HYDROGEN: &str = "H";

/// Derives the canonical chemical formula string for a molecule.
///
/// Element ordering follows a simplified Hill system: when carbon is
/// present, carbon comes first, then hydrogen (if present), then all
/// remaining elements alphabetically by symbol; without carbon, every
/// element is ordered alphabetically. Counts greater than one are rendered
/// as Unicode subscript digits (e.g., "H₂O", "C₂H₆"). Callers compare
/// formulas by string equality, so this ordering is load-bearing.
///
/// The result depends only on the multiset of element symbols, never on the
/// order atoms were placed. An empty molecule yields an empty string, and
/// unknown symbols count and sort like any other.
pub fn derive_formula(molecule: &Molecule) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (_, placement) in molecule.placements_iter() {
        *counts.entry(placement.symbol()).or_insert(0) += 1;
    }

    let mut rest: Vec<&str> = counts
        .keys()
        .copied()
        .filter(|&symbol| {
            !(counts.contains_key(CARBON) && (symbol == CARBON || symbol == HYDROGEN))
        })
        .collect();
    rest.sort_unstable();

    let mut ordered: Vec<&str> = Vec::with_capacity(counts.len());
    if counts.contains_key(CARBON) {
        ordered.push(CARBON);
        if counts.contains_key(HYDROGEN) {
            ordered.push(HYDROGEN);
        }
    }
    ordered.extend(rest);

    let mut formula = String::new();
    for symbol in ordered {
        formula.push_str(symbol);
        let count = counts[symbol];
        if count > 1 {
            formula.push_str(&subscript(count));
        }
    }
    formula
}

/// Renders a count as a string of Unicode subscript digits (U+2080..U+2089),
/// digit by digit in decimal order.
fn subscript(count: usize) -> String {
    count
        .to_string()
        .chars()
        .map(|digit| {
            let value = digit.to_digit(10).unwrap_or(0);
            char::from_u32(0x2080 + value).unwrap_or(digit)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn molecule_of(symbols: &[&str]) -> Molecule {
        let mut molecule = Molecule::new();
        for symbol in symbols {
            molecule.add_atom(symbol, Point2::origin());
        }
        molecule
    }

    #[test]
    fn empty_molecule_yields_empty_formula() {
        assert_eq!(derive_formula(&Molecule::new()), "");
    }

    #[test]
    fn water_formula_orders_alphabetically_without_carbon() {
        let molecule = molecule_of(&["O", "H", "H"]);
        assert_eq!(derive_formula(&molecule), "H\u{2082}O");
    }

    #[test]
    fn carbon_comes_first_then_hydrogen_then_alphabetical() {
        let molecule = molecule_of(&["O", "H", "C", "H", "H", "Cl", "H"]);
        assert_eq!(derive_formula(&molecule), "CH\u{2084}ClO");
    }

    #[test]
    fn carbon_without_hydrogen_still_leads() {
        let molecule = molecule_of(&["O", "C", "O"]);
        assert_eq!(derive_formula(&molecule), "CO\u{2082}");
    }

    #[test]
    fn formula_is_invariant_under_atom_order() {
        let forward = molecule_of(&["N", "H", "H", "H"]);
        let shuffled = molecule_of(&["H", "N", "H", "H"]);
        assert_eq!(derive_formula(&forward), derive_formula(&shuffled));
        assert_eq!(derive_formula(&forward), "H\u{2083}N");
    }

    #[test]
    fn unknown_symbols_sort_alphabetically() {
        let molecule = molecule_of(&["Zz", "H", "Ar"]);
        assert_eq!(derive_formula(&molecule), "ArHZz");
    }

    #[test]
    fn count_of_one_renders_no_digit() {
        let molecule = molecule_of(&["Cl", "H"]);
        assert_eq!(derive_formula(&molecule), "ClH");
    }

    #[test]
    fn multi_digit_counts_render_digit_by_digit() {
        let mut symbols = vec!["C"];
        symbols.extend(std::iter::repeat_n("H", 11));
        let molecule = molecule_of(&symbols);
        assert_eq!(derive_formula(&molecule), "CH\u{2081}\u{2081}");
    }

    #[test]
    fn subscript_maps_every_decimal_digit() {
        assert_eq!(subscript(1234567890), "₁₂₃₄₅₆₇₈₉₀");
    }
}
