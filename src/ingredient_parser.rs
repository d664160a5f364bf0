//! # Ingredient Line Parser
//!
//! This module splits raw ingredient lines into amount, unit, and name parts.
//! It handles various formats including mixed numbers, fractions, ranges, and
//! parenthetical annotations.
//!
//! ## Features
//!
//! - Parse common ingredient formats from recipe text
//! - Handle fractions (1/2, 2 1/4, ½) and ranges (2-3)
//! - Extract units against a fixed vocabulary, longest name first
//! - Preserve parenthetical annotations at the end of the name
//! - Never fails: unparseable lines become name-only ingredients
//!
//! ## Usage
//!
//! ```rust
//! use catering_import::ingredient_parser::parse_ingredient_line;
//!
//! let parsed = parse_ingredient_line("1 1/2 cups all-purpose flour");
//! assert_eq!(parsed.amount, "1 1/2");
//! assert_eq!(parsed.unit, "cups");
//! assert_eq!(parsed.name, "all-purpose flour");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Regex patterns for the supported amount formats
static AMOUNT_PATTERNS: LazyLock<AmountPatterns> = LazyLock::new(AmountPatterns::new);

/// Matches a parenthetical annotation such as "(packed)" or "(about 200g)"
static PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthetical pattern should be valid"));

/// Matches bullet and numbering prefixes on list lines
static LIST_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*•▢☐]\s*|\d+[.)]\s+)").expect("list prefix pattern should be valid")
});

/// Unit vocabulary, ordered longest-name-first so that "tablespoon" is tried
/// before short forms and a partial match never wins.
static UNIT_VOCABULARY: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut units = vec![
        // Volume units
        "tablespoons",
        "tablespoon",
        "teaspoons",
        "teaspoon",
        "fluid ounces",
        "fluid ounce",
        "milliliters",
        "milliliter",
        "millilitres",
        "millilitre",
        "gallons",
        "gallon",
        "quarts",
        "quart",
        "liters",
        "liter",
        "litres",
        "litre",
        "pints",
        "pint",
        "cups",
        "cup",
        "tbsp",
        "tsp",
        "ml",
        "l",
        // Weight units
        "kilograms",
        "kilogram",
        "ounces",
        "ounce",
        "pounds",
        "pound",
        "grams",
        "gram",
        "lbs",
        "lb",
        "oz",
        "kg",
        "g",
        // Count and kitchen units
        "packages",
        "package",
        "handfuls",
        "handful",
        "pinches",
        "pinch",
        "bunches",
        "bunch",
        "cloves",
        "clove",
        "slices",
        "slice",
        "sticks",
        "stick",
        "pieces",
        "piece",
        "sprigs",
        "sprig",
        "stalks",
        "stalk",
        "dashes",
        "dash",
        "heads",
        "head",
        "drops",
        "drop",
        "cans",
        "can",
        "jars",
        "jar",
        "bags",
        "bag",
    ];
    units.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    units
});

/// A single ingredient line split into its parts.
///
/// `amount` and `unit` are empty strings when no match was found. `name` is
/// never empty as long as the input line (trimmed) is non-empty: when amount
/// and unit consume the whole line, the name falls back to the full line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// The amount as written (e.g., "1 1/2", "2-3", "½")
    pub amount: String,
    /// The unit as written (e.g., "cups", "tbsp", "g")
    pub unit: String,
    /// The ingredient name, with any parenthetical annotation restored
    pub name: String,
    /// The raw input line, unmodified
    pub original: String,
}

/// Compiled regex patterns for the amount formats, in priority order
struct AmountPatterns {
    /// Mixed numbers: "1 1/2"
    mixed: Regex,
    /// ASCII and vulgar fractions: "1/2", "½"
    fraction: Regex,
    /// Numeric ranges: "2-3"
    range: Regex,
    /// Plain decimals and integers: "2", "2.5"
    plain: Regex,
}

impl AmountPatterns {
    fn new() -> Self {
        Self {
            mixed: Regex::new(r"^\d+\s+\d+\s*/\s*\d+")
                .expect("mixed number pattern should be valid"),
            fraction: Regex::new(r"^(?:\d+\s*/\s*\d+|[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])")
                .expect("fraction pattern should be valid"),
            range: Regex::new(r"^\d+(?:\.\d+)?\s*[-–—]\s*\d+(?:\.\d+)?")
                .expect("range pattern should be valid"),
            plain: Regex::new(r"^\d+(?:\.\d+)?").expect("plain number pattern should be valid"),
        }
    }
}

/// Parse a single free-text ingredient line into amount, unit, and name.
///
/// The amount formats are tried in strict priority order (mixed number,
/// fraction, range, plain number); the first match wins and consumes that
/// prefix. The unit is then matched against a fixed vocabulary, and whatever
/// remains, minus a leading comma or "of", becomes the name.
///
/// This function never fails; it only under- or over-extracts.
///
/// # Examples
///
/// ```rust
/// use catering_import::ingredient_parser::parse_ingredient_line;
///
/// let parsed = parse_ingredient_line("2-3 tbsp olive oil");
/// assert_eq!(parsed.amount, "2-3");
/// assert_eq!(parsed.unit, "tbsp");
/// assert_eq!(parsed.name, "olive oil");
///
/// let parsed = parse_ingredient_line("1 cup brown sugar (packed)");
/// assert_eq!(parsed.name, "brown sugar (packed)");
///
/// let parsed = parse_ingredient_line("salt to taste");
/// assert_eq!(parsed.amount, "");
/// assert_eq!(parsed.name, "salt to taste");
/// ```
pub fn parse_ingredient_line(line: &str) -> ParsedIngredient {
    let original = line.to_string();
    if line.trim().is_empty() {
        return ParsedIngredient {
            amount: String::new(),
            unit: String::new(),
            name: String::new(),
            original,
        };
    }

    let (working, annotation) = strip_annotation(line.trim());
    let working = working.trim().to_string();

    let (amount, rest) = match_amount(&working);
    let (unit, rest) = match_unit(rest);

    let mut name = rest.trim();
    if let Some(stripped) = name.strip_prefix(',') {
        name = stripped.trim_start();
    }
    if name.get(..3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("of ")) {
        name = name[3..].trim_start();
    }

    let mut name = if name.is_empty() {
        // Amount and unit consumed everything; keep the whole line as the name.
        working.clone()
    } else {
        name.to_string()
    };

    if let Some(note) = annotation {
        if name.is_empty() {
            name = format!("({})", note);
        } else {
            name = format!("{} ({})", name, note);
        }
    }

    ParsedIngredient {
        amount,
        unit,
        name,
        original,
    }
}

/// Parse a multi-line ingredient block line by line.
///
/// Blank lines are skipped and bullet or numbering prefixes are stripped
/// before each line is handed to [`parse_ingredient_line`].
///
/// # Examples
///
/// ```rust
/// use catering_import::ingredient_parser::parse_ingredient_block;
///
/// let parsed = parse_ingredient_block("- 2 cups flour\n- 1 tbsp salt\n\n- 1/2 tsp pepper");
/// assert_eq!(parsed.len(), 3);
/// assert_eq!(parsed[0].name, "flour");
/// assert_eq!(parsed[2].amount, "1/2");
/// ```
pub fn parse_ingredient_block(text: &str) -> Vec<ParsedIngredient> {
    text.lines()
        .map(strip_list_prefix)
        .filter(|line| !line.trim().is_empty())
        .map(parse_ingredient_line)
        .collect()
}

/// Check whether a line carries a measurement-like shape.
///
/// True when the line starts with an amount followed by either a recognized
/// unit or an item word ("2 cups flour", "6 eggs"); false for prose lines and
/// bare numbers.
///
/// # Examples
///
/// ```rust
/// use catering_import::ingredient_parser::has_measurement;
///
/// assert!(has_measurement("2 cups flour"));
/// assert!(has_measurement("6 eggs"));
/// assert!(!has_measurement("some flour"));
/// assert!(!has_measurement("350"));
/// ```
pub fn has_measurement(line: &str) -> bool {
    let parsed = parse_ingredient_line(line);
    if parsed.amount.is_empty() {
        return false;
    }
    if !parsed.unit.is_empty() {
        return true;
    }
    // Quantity-only lines ("6 eggs") keep a name distinct from the full line;
    // a bare number falls back to the full line as its name.
    parsed.name != line.trim()
}

/// Strip a bullet or numbering prefix from a list line
pub(crate) fn strip_list_prefix(line: &str) -> &str {
    match LIST_PREFIX_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Remove the first parenthetical annotation, returning the cleaned line and
/// the annotation text (if any)
fn strip_annotation(line: &str) -> (String, Option<String>) {
    match PAREN_RE.find(line) {
        Some(m) => {
            let inner = line[m.start() + 1..m.end() - 1].trim().to_string();
            let mut working = String::with_capacity(line.len());
            working.push_str(&line[..m.start()]);
            working.push_str(&line[m.end()..]);
            let annotation = if inner.is_empty() { None } else { Some(inner) };
            (working, annotation)
        }
        None => (line.to_string(), None),
    }
}

/// Try the amount patterns in priority order; first match wins and consumes
/// that prefix
fn match_amount(working: &str) -> (String, &str) {
    let patterns = [
        &AMOUNT_PATTERNS.mixed,
        &AMOUNT_PATTERNS.fraction,
        &AMOUNT_PATTERNS.range,
        &AMOUNT_PATTERNS.plain,
    ];
    for pattern in patterns {
        if let Some(m) = pattern.find(working) {
            return (m.as_str().to_string(), working[m.end()..].trim_start());
        }
    }
    (String::new(), working)
}

/// Match a leading unit against the vocabulary, longest name first.
///
/// A match must end at a word boundary; an optional trailing period (as in
/// "tbsp.") is consumed but not kept.
fn match_unit(rest: &str) -> (String, &str) {
    for unit in UNIT_VOCABULARY.iter() {
        let Some(prefix) = rest.get(..unit.len()) else {
            continue;
        };
        if !prefix.eq_ignore_ascii_case(unit) {
            continue;
        }
        let mut end = unit.len();
        match rest.as_bytes().get(end) {
            Some(b'.') => match rest.as_bytes().get(end + 1) {
                Some(b) if b.is_ascii_alphanumeric() => continue,
                _ => end += 1,
            },
            Some(b) if b.is_ascii_alphanumeric() => continue,
            _ => {}
        }
        return (prefix.to_string(), rest[end..].trim_start());
    }
    (String::new(), rest)
}
