//! Label normalization tables for raw gallery exports.
//!
//! The raw CSV exports carry English labels; the cleaned datasets and
//! all published tables use the canonical Estonian ones.

use crate::catalog::Category;
use artindex_data::Relabel;

/// English-to-canonical technique labels as they appear in raw exports.
const TECHNIQUE_LABELS: &[(&str, &str)] = &[
    ("Oil on canvas", "Õli lõuendil"),
    ("Oil on cardboard", "Õli papil"),
    ("Oil on wood", "Õli vineeril"),
    ("Aquatint", "Akvatinta"),
    ("Linoleum", "Linool"),
    ("Drawing", "Joonistus"),
    ("Gouache", "Guašš"),
    ("Watercolour", "Akvarell"),
    ("Tempera", "Tempera"),
    ("Acrylic", "Akrüül"),
    ("Etching", "Etsing"),
    ("Graphics", "Graafika"),
    ("Mixed tech", "Segatehnika"),
    ("Mixed technique", "Segatehnika"),
    ("Silk print", "Siiditrükk"),
    ("Vitrography", "Vitrograafia"),
    ("Wood cut", "Puugravüür"),
];

/// Relabel rules for the `technique` column.
pub fn technique_relabels() -> Vec<Relabel> {
    TECHNIQUE_LABELS
        .iter()
        .map(|(from, to)| Relabel::new("technique", *from, *to))
        .collect()
}

/// The full default rule set: category labels from the catalog plus the
/// technique table, in the order they are applied at load time.
pub fn default_relabels() -> Vec<Relabel> {
    let mut rules: Vec<Relabel> = Category::all()
        .into_iter()
        .map(|c| Relabel::new("category", c.label_en(), c.label()))
        .collect();
    rules.extend(technique_relabels());
    rules
}
