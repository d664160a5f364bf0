//! # Ingredient Normalizer
//!
//! Maps raw ingredient names to canonical display names and groups duplicate
//! ingredients across a list. Normalization is title-casing plus a fixed
//! synonym table; equivalence additionally consults a fixed list of synonym
//! groups ("baking soda" / "bicarbonate of soda" / "sodium bicarbonate").

use crate::ingredient_parser::{parse_ingredient_line, ParsedIngredient};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Synonym table: lowercase spelling to canonical display name.
///
/// Canonical names must normalize to themselves so that
/// [`normalize_ingredient_name`] stays idempotent.
static SYNONYM_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("bicarbonate of soda", "Baking Soda");
    map.insert("sodium bicarbonate", "Baking Soda");
    map.insert("bicarb", "Baking Soda");
    map.insert("icing sugar", "Powdered Sugar");
    map.insert("confectioners sugar", "Powdered Sugar");
    map.insert("confectioners' sugar", "Powdered Sugar");
    map.insert("caster sugar", "Superfine Sugar");
    map.insert("all-purpose flour", "All-Purpose Flour");
    map.insert("plain flour", "All-Purpose Flour");
    map.insert("corn starch", "Cornstarch");
    map.insert("cornflour", "Cornstarch");
    map.insert("garbanzo beans", "Chickpeas");
    map.insert("chick peas", "Chickpeas");
    map.insert("scallions", "Green Onions");
    map.insert("spring onions", "Green Onions");
    map.insert("scallion", "Green Onion");
    map.insert("spring onion", "Green Onion");
    map.insert("fresh coriander", "Cilantro");
    map.insert("coriander leaves", "Cilantro");
    map.insert("aubergine", "Eggplant");
    map.insert("courgette", "Zucchini");
    map.insert("capsicum", "Bell Pepper");
    map.insert("rocket", "Arugula");
    map.insert("heavy whipping cream", "Heavy Cream");
    map.insert("double cream", "Heavy Cream");

    map
});

/// Synonym groups for equivalence checks. Two names are the same ingredient
/// when both belong to one group; membership is per-group, not a transitive
/// closure across groups.
static SYNONYM_GROUPS: LazyLock<Vec<Vec<&'static str>>> = LazyLock::new(|| {
    vec![
        vec!["baking soda", "bicarbonate of soda", "sodium bicarbonate", "bicarb"],
        vec!["vanilla", "vanilla extract", "vanilla essence"],
        vec![
            "powdered sugar",
            "icing sugar",
            "confectioners sugar",
            "confectioners' sugar",
        ],
        vec![
            "green onions",
            "green onion",
            "scallions",
            "scallion",
            "spring onions",
            "spring onion",
        ],
        vec!["chickpeas", "garbanzo beans", "chick peas"],
        vec!["cilantro", "fresh coriander", "coriander leaves"],
        vec!["zucchini", "courgette"],
        vec!["eggplant", "aubergine"],
        vec!["bell pepper", "capsicum"],
        vec!["heavy cream", "heavy whipping cream", "double cream"],
        vec!["all-purpose flour", "plain flour", "white flour"],
    ]
});

/// A set of ingredient occurrences that normalize to the same canonical name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientGroup {
    /// The canonical display name shared by all occurrences
    pub name: String,
    /// The parsed ingredients that folded into this group, in input order
    pub occurrences: Vec<ParsedIngredient>,
    /// Number of occurrences; always equals `occurrences.len()`
    pub count: usize,
}

/// Normalize an ingredient name to its canonical display form.
///
/// Lowercases, collapses whitespace, title-cases each word, then checks the
/// synonym table for an exact case-insensitive match. Idempotent: normalizing
/// an already-normalized name returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use catering_import::ingredient_normalizer::normalize_ingredient_name;
///
/// assert_eq!(normalize_ingredient_name("bicarbonate of soda"), "Baking Soda");
/// assert_eq!(normalize_ingredient_name("  brown   SUGAR "), "Brown Sugar");
/// ```
pub fn normalize_ingredient_name(name: &str) -> String {
    let collapsed = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if collapsed.is_empty() {
        return String::new();
    }
    if let Some(canonical) = SYNONYM_TABLE.get(collapsed.as_str()) {
        return (*canonical).to_string();
    }
    title_case(&collapsed)
}

/// Check whether two raw names refer to the same ingredient.
///
/// True when the names are equal after normalization, or when both belong to
/// the same synonym group.
///
/// # Examples
///
/// ```rust
/// use catering_import::ingredient_normalizer::is_same_ingredient;
///
/// assert!(is_same_ingredient("Vanilla", "vanilla extract"));
/// assert!(!is_same_ingredient("flour", "sugar"));
/// ```
pub fn is_same_ingredient(a: &str, b: &str) -> bool {
    let norm_a = normalize_ingredient_name(a);
    let norm_b = normalize_ingredient_name(b);
    if norm_a.is_empty() || norm_b.is_empty() {
        return false;
    }
    if norm_a == norm_b {
        return true;
    }

    let key_a = norm_a.to_lowercase();
    let key_b = norm_b.to_lowercase();
    SYNONYM_GROUPS
        .iter()
        .any(|group| group.contains(&key_a.as_str()) && group.contains(&key_b.as_str()))
}

/// Parse and group a list of raw ingredient lines by canonical name.
///
/// Each line is parsed with the ingredient line parser, its name normalized,
/// and the result folded into a group keyed by that canonical name. Groups
/// keep the insertion order of their first occurrence; duplicates append to
/// `occurrences`. Lines with no extractable name are skipped.
pub fn group_ingredients(lines: &[String]) -> Vec<IngredientGroup> {
    let mut groups: Vec<IngredientGroup> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for line in lines {
        let parsed = parse_ingredient_line(line);
        let canonical = normalize_ingredient_name(&parsed.name);
        if canonical.is_empty() {
            continue;
        }
        match index_by_name.get(&canonical) {
            Some(&i) => {
                groups[i].occurrences.push(parsed);
                groups[i].count += 1;
            }
            None => {
                index_by_name.insert(canonical.clone(), groups.len());
                groups.push(IngredientGroup {
                    name: canonical,
                    occurrences: vec![parsed],
                    count: 1,
                });
            }
        }
    }

    groups
}

/// Uppercase the first letter of each whitespace-separated word
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
