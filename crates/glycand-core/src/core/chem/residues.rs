use phf::{Map, phf_map};

/// Monoisotopic mass of one water molecule, in Daltons. Added to the residue
/// sum to account for the peptide's terminal H and OH.
pub const WATER_MASS: f64 = 18.010565;

/// Monoisotopic residue masses for the 20 standard amino acids, in Daltons.
static RESIDUE_MASSES: Map<char, f64> = phf_map! {
    'G' => 57.02146,
    'A' => 71.03711,
    'S' => 87.03203,
    'P' => 97.05276,
    'V' => 99.06841,
    'T' => 101.04768,
    'C' => 103.00919,
    'L' => 113.08406,
    'I' => 113.08406,
    'N' => 114.04293,
    'D' => 115.02694,
    'Q' => 128.05858,
    'K' => 128.09496,
    'E' => 129.04259,
    'M' => 131.04049,
    'H' => 137.05891,
    'F' => 147.06841,
    'R' => 156.10111,
    'Y' => 163.06333,
    'W' => 186.07931,
};

/// Returns whether `symbol` belongs to the recognized amino-acid alphabet.
pub fn is_residue(symbol: char) -> bool {
    RESIDUE_MASSES.contains_key(&symbol)
}

/// Looks up the monoisotopic mass of a single residue.
pub fn residue_mass(symbol: char) -> Option<f64> {
    RESIDUE_MASSES.get(&symbol).copied()
}

/// The recognized alphabet in a fixed (alphabetical) order, for error
/// messages and discovery.
pub fn alphabet() -> Vec<char> {
    let mut symbols: Vec<char> = RESIDUE_MASSES.keys().copied().collect();
    symbols.sort_unstable();
    symbols
}
