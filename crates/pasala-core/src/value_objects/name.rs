//! Name normalization and similarity
//!
//! Player and club names are compared in a folded form: lowercase, Latin accents
//! stripped, punctuation dropped and whitespace collapsed. "José  Pérez-Díaz" and
//! "jose perezdiaz" normalize to the same string.

use strsim::jaro_winkler;

/// Fold a single character to its unaccented lowercase ASCII form when it is a
/// Latin letter with a diacritic.
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Normalize a name for comparison and storage in `normalized_name` columns
pub fn normalize_name(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(fold_char)
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when either normalized name contains the other.
///
/// Empty names never overlap.
pub fn names_overlap(a: &str, b: &str) -> bool {
    let a = normalize_name(a);
    let b = normalize_name(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Similarity score in `0.0..=1.0` between two names after normalization
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let a = normalize_name(a);
    let b = normalize_name(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    jaro_winkler(&a, &b)
}
