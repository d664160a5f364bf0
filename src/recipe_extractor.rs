//! # Recipe Text Extractor
//!
//! Extracts a structured recipe (name, servings, ingredients, instructions,
//! notes) from unstructured text such as pasted chat output or uploaded file
//! content. Extraction is best-effort: fields that cannot be found come back
//! empty, and the caller is expected to let the user correct the result.
//!
//! ## Usage
//!
//! ```rust
//! use catering_import::recipe_extractor::extract_recipe_from_text;
//!
//! let text = "Classic Pancakes\n\nIngredients:\n- 2 cups flour\n- 2 eggs\n\nInstructions:\n1. Mix.\n2. Cook.";
//! let recipe = extract_recipe_from_text(text);
//! assert_eq!(recipe.name, "Classic Pancakes");
//! assert_eq!(recipe.ingredients.len(), 2);
//! assert_eq!(recipe.instructions.len(), 2);
//! assert_eq!(recipe.servings, 4);
//! ```

use crate::allergen_detector::analyze_recipe;
use crate::ingredient_parser::{has_measurement, strip_list_prefix};
use crate::recipe_model::{ParsedRecipe, RecipeDetails};
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

/// Shortest chat message that can plausibly carry a full recipe
const MIN_RECIPE_TEXT_LEN: usize = 200;

/// Placeholder name when ingredients were found but no name was
const UNTITLED_RECIPE_NAME: &str = "Untitled Recipe";

lazy_static! {
    /// Start of an ingredients section, tolerant of curly apostrophes
    static ref INGREDIENTS_LABEL_RE: Regex =
        Regex::new(r"(?i)\b(?:ingredients|you['’]ll need|what you need)\b\s*:?")
            .expect("ingredients label pattern should be valid");

    /// Start of an instructions section
    static ref INSTRUCTIONS_LABEL_RE: Regex =
        Regex::new(r"(?i)\b(?:instructions|directions|steps|method)\b\s*:?")
            .expect("instructions label pattern should be valid");

    /// A line that is nothing but a section header
    static ref SECTION_HEADER_RE: Regex = Regex::new(
        r"(?i)^\s*(?:ingredients|instructions|directions|steps|method|notes|tips|you['’]ll need|what you need)\b\s*:?\s*$"
    )
    .expect("section header pattern should be valid");

    /// Assistant acknowledgment phrasing ("Sure, I'll save that recipe...")
    static ref ACKNOWLEDGMENT_RE: Regex = Regex::new(
        r"(?i)^\s*(?:sure|okay|ok|got it|great|no problem|of course|absolutely|alright|done|i['’]ll|i will|i['’]ve|i have)\b.{0,80}\b(?:save[ds]?|saving|add(?:ed|ing)?)\b"
    )
    .expect("acknowledgment pattern should be valid");

    /// Labeled servings: "Serves: 6", "makes 12"
    static ref SERVINGS_LABEL_RE: Regex =
        Regex::new(r"(?i)\b(?:serves|servings?|yields?|makes)\s*:?\s*(\d{1,3})\b")
            .expect("servings label pattern should be valid");

    /// Count-first servings: "12 portions"
    static ref SERVINGS_COUNT_RE: Regex =
        Regex::new(r"(?i)\b(\d{1,3})\s*(?:pieces|servings|portions)\b")
            .expect("servings count pattern should be valid");

    /// Dish-type words used to recognize recipe names
    static ref FOOD_KEYWORD_RE: Regex = Regex::new(
        r"(?i)\b(?:cake|bread|soup|stew|salad|pasta|pizza|chicken|beef|pork|fish|curry|pie|tart|cookie|cookies|brownies|muffins|pancakes|waffles|tacos|burger|burgers|sandwich|casserole|risotto|lasagna|chili|sauce|dip|smoothie|roast|salsa|bowl|wrap|bars|loaf)\b"
    )
    .expect("food keyword pattern should be valid");

    /// A double-quoted phrase, straight or curly
    static ref QUOTED_NAME_RE: Regex =
        Regex::new(r#"["“]([^"”\n]{3,80})["”]"#).expect("quoted name pattern should be valid");

    /// "my 'Grandma's Apple Pie'" style possessive naming
    static ref MY_NAME_RE: Regex =
        Regex::new(r"(?i)\bmy\s+['‘]([^'’\n]{3,80})['’]").expect("my-name pattern should be valid");

    /// Explicit "recipe:"/"called:" label
    static ref LABELED_NAME_RE: Regex =
        Regex::new(r#"(?im)\b(?:recipe|called)\s*:\s*["'“‘]?([^"'”’\n]{3,80})"#)
            .expect("labeled name pattern should be valid");

    /// Markdown header line
    static ref MARKDOWN_HEADER_RE: Regex =
        Regex::new(r"(?m)^\s*#{1,6}\s+([^\n]{3,80})").expect("markdown header pattern should be valid");

    /// A "1. "/"2) " step marker
    static ref NUMBERED_STEP_RE: Regex =
        Regex::new(r"\b\d{1,2}[.)]\s").expect("numbered step pattern should be valid");

    /// Leading step numbering or bullet on a line
    static ref STEP_PREFIX_RE: Regex =
        Regex::new(r"^\s*(?:\d{1,2}[.)]|[-*•])\s*").expect("step prefix pattern should be valid");

    /// Notes section up to a blank line or end of text
    static ref NOTES_RE: Regex = Regex::new(r"(?is)\b(?:notes?|tips?)\s*:\s*(.+?)(?:\n\s*\n|\z)")
        .expect("notes pattern should be valid");

    /// A line opening the notes section
    static ref NOTES_LABEL_LINE_RE: Regex = Regex::new(r"(?i)^\s*(?:notes?|tips?)\s*:")
        .expect("notes label line pattern should be valid");

    /// Inline "<amount> <unit> <item>" shapes for single-line ingredient blocks
    static ref INLINE_INGREDIENT_RE: Regex = Regex::new(
        r"(?i)\b(\d+(?:\s+\d+\s*/\s*\d+|\s*/\s*\d+|\.\d+)?|one|two|three|four|five|six|half|a|an)\s+(cups?|tablespoons?|tbsp\.?|teaspoons?|tsp\.?|ounces?|oz\.?|pounds?|lbs?\.?|grams?|kilograms?|kg|g|ml|liters?|litres?|cloves?|pinch(?:es)?|dash(?:es)?|cans?|sticks?|slices?|pieces?|bunch(?:es)?|sprigs?|heads?|stalks?)\s+(?:of\s+)?([a-z][a-z \-']{1,40}?)(?:[,;.\n]|\s+and\b|$)"
    )
    .expect("inline ingredient pattern should be valid");

    /// Phrasings that ask to save the current recipe
    static ref SAVE_INTENT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\bsave\s+(?:this|that|it)\b")
            .expect("save intent pattern should be valid"),
        Regex::new(r"(?i)\bsave\s+(?:the|this|that|my)?\s*recipe\b")
            .expect("save intent pattern should be valid"),
        Regex::new(r"(?i)\badd\s+(?:this|that|it)\s+to\s+my\s+(?:recipes?|collection|cookbook)\b")
            .expect("save intent pattern should be valid"),
        Regex::new(r"(?i)\bkeep\s+(?:this|that)\s+recipe\b")
            .expect("save intent pattern should be valid"),
        Regex::new(r"(?i)\b(?:store|remember)\s+(?:this|that)\s+(?:recipe|one)\b")
            .expect("save intent pattern should be valid"),
    ];
}

/// Extract a structured recipe from free-form text.
///
/// Every field is best-effort: the name falls through an ordered list of
/// matchers, servings default to 4, and the ingredient/instruction sections
/// are located by their labels. The returned recipe also carries allergen
/// categories and suggested tags computed from the extracted fields.
///
/// Never fails on any input; an unrecognizable text yields a mostly-empty
/// recipe.
pub fn extract_recipe_from_text(text: &str) -> ParsedRecipe {
    let mut recipe = ParsedRecipe::default();
    if text.trim().is_empty() {
        return recipe;
    }

    let (ingredients_block, instructions_block) = split_sections(text);
    recipe.ingredients = split_ingredient_block(&ingredients_block);
    recipe.instructions = split_instruction_block(&instructions_block);
    recipe.servings = extract_servings(text);
    recipe.notes = extract_notes(text);
    recipe.name = extract_name(text, !recipe.ingredients.is_empty());

    let report = analyze_recipe(&RecipeDetails::from(&recipe));
    recipe.allergens = report.allergens;
    recipe.tags = report.tags;

    debug!(
        "extracted recipe '{}': {} ingredients, {} instructions",
        recipe.name,
        recipe.ingredients.len(),
        recipe.instructions.len()
    );
    recipe
}

/// Decide whether a chat message looks like a full recipe.
///
/// Short texts (under 200 characters) and assistant acknowledgments are never
/// recipes. Otherwise the text must carry both an ingredients-type header and
/// an instructions-type header.
pub fn detect_recipe_in_text(text: &str) -> bool {
    if text.chars().count() < MIN_RECIPE_TEXT_LEN {
        return false;
    }
    if ACKNOWLEDGMENT_RE.is_match(text) {
        return false;
    }

    let has_ingredients_header = INGREDIENTS_LABEL_RE.is_match(text);
    let has_instructions_header = INSTRUCTIONS_LABEL_RE.is_match(text);
    // Measurement/step signals are logged for diagnostics only; the headers
    // alone gate the result.
    let has_measurements = text.lines().any(has_measurement);
    let has_steps = NUMBERED_STEP_RE.is_match(text);
    trace!(
        "recipe detection signals: headers={}/{} measurements={} steps={}",
        has_ingredients_header,
        has_instructions_header,
        has_measurements,
        has_steps
    );

    has_ingredients_header && has_instructions_header
}

/// Check whether a chat message asks to save the current recipe.
///
/// # Examples
///
/// ```rust
/// use catering_import::recipe_extractor::detect_save_intent;
///
/// assert!(detect_save_intent("Please save this recipe!"));
/// assert!(detect_save_intent("could you add that to my collection?"));
/// assert!(!detect_save_intent("What wine goes with this?"));
/// ```
pub fn detect_save_intent(text: &str) -> bool {
    SAVE_INTENT_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

/// Split the text into an ingredients block and an instructions block by
/// their section labels. Neither label found means both blocks are empty.
fn split_sections(text: &str) -> (String, String) {
    let Some(ingredients_label) = INGREDIENTS_LABEL_RE.find(text) else {
        return match INSTRUCTIONS_LABEL_RE.find(text) {
            Some(instructions_label) => {
                (String::new(), text[instructions_label.end()..].to_string())
            }
            None => (String::new(), String::new()),
        };
    };

    let after = &text[ingredients_label.end()..];
    match INSTRUCTIONS_LABEL_RE.find(after) {
        Some(instructions_label) => (
            after[..instructions_label.start()].to_string(),
            after[instructions_label.end()..].to_string(),
        ),
        None => (after.to_string(), String::new()),
    }
}

/// Split an ingredients block into individual ingredient lines.
fn split_ingredient_block(block: &str) -> Vec<String> {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    // Chat output often separates inline items with " - ".
    if trimmed.contains(" - ") {
        return trimmed
            .split(" - ")
            .flat_map(str::lines)
            .map(strip_list_prefix)
            .map(str::trim)
            .filter(|piece| !piece.is_empty() && !SECTION_HEADER_RE.is_match(piece))
            .map(str::to_string)
            .collect();
    }

    let first_newline = trimmed.find('\n');
    if first_newline.is_none() || first_newline.is_some_and(|i| i > 100) {
        let mut items: Vec<String> = Vec::new();
        for caps in INLINE_INGREDIENT_RE.captures_iter(trimmed) {
            let unit = caps[2].trim_end_matches('.');
            items.push(format!("{} {} {}", caps[1].trim(), unit, caps[3].trim()));
        }
        if !items.is_empty() {
            return items;
        }
        // Last resort: comma/semicolon-separated short food tokens.
        return trimmed
            .split([',', ';'])
            .map(str::trim)
            .filter(|token| {
                let count = token.chars().count();
                (2..=60).contains(&count)
                    && token.chars().any(char::is_alphabetic)
                    && token.split_whitespace().count() <= 5
            })
            .map(str::to_string)
            .collect();
    }

    trimmed
        .lines()
        .map(strip_list_prefix)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !SECTION_HEADER_RE.is_match(line))
        .map(str::to_string)
        .collect()
}

/// Split an instructions block into individual steps.
fn split_instruction_block(block: &str) -> Vec<String> {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    // A single line carrying several "N. " markers splits before each marker.
    if !trimmed.contains('\n') {
        let marker_starts: Vec<usize> = NUMBERED_STEP_RE
            .find_iter(trimmed)
            .map(|m| m.start())
            .collect();
        if marker_starts.len() >= 2 {
            let mut boundaries = marker_starts;
            boundaries.push(trimmed.len());
            return boundaries
                .windows(2)
                .filter_map(|pair| {
                    let segment = trimmed[pair[0]..pair[1]].trim();
                    let step = STEP_PREFIX_RE.replace(segment, "").trim().to_string();
                    if step.is_empty() {
                        None
                    } else {
                        Some(step)
                    }
                })
                .collect();
        }
    }

    // Line by line: numbered/bulleted or substantial lines start a new step,
    // short lines continue the current one.
    let mut steps: Vec<String> = Vec::new();
    let mut current = String::new();
    for line in trimmed.lines() {
        let raw = line.trim();
        if raw.is_empty() || SECTION_HEADER_RE.is_match(raw) {
            continue;
        }
        if NOTES_LABEL_LINE_RE.is_match(raw) {
            // The notes section ends the instructions.
            break;
        }
        let stripped = STEP_PREFIX_RE.replace(raw, "").trim().to_string();
        if stripped.is_empty() {
            continue;
        }
        if STEP_PREFIX_RE.is_match(raw) || stripped.chars().count() > 5 {
            if !current.is_empty() {
                steps.push(std::mem::take(&mut current));
            }
            current = stripped;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&stripped);
        }
    }
    if !current.is_empty() {
        steps.push(current);
    }
    steps
}

/// Extract the recipe name through an ordered list of matchers; the first
/// candidate that is not an acknowledgment phrase wins.
fn extract_name(text: &str, has_ingredients: bool) -> String {
    let matchers: [fn(&str) -> Option<String>; 7] = [
        quoted_food_name,
        my_quoted_name,
        all_caps_line,
        capitalized_food_line,
        labeled_name,
        markdown_header_name,
        line_before_ingredients,
    ];

    for matcher in matchers {
        if let Some(candidate) = matcher(text) {
            let candidate = clean_name(&candidate);
            if !candidate.is_empty() && !ACKNOWLEDGMENT_RE.is_match(&candidate) {
                trace!("recipe name candidate accepted: '{}'", candidate);
                return candidate;
            }
        }
    }

    if let Some(candidate) = first_substantial_line(text) {
        return candidate;
    }
    if has_ingredients {
        return UNTITLED_RECIPE_NAME.to_string();
    }
    String::new()
}

/// A double-quoted phrase naming a dish ("Midnight Chocolate Cake")
fn quoted_food_name(text: &str) -> Option<String> {
    QUOTED_NAME_RE
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .find(|candidate| FOOD_KEYWORD_RE.is_match(candidate))
}

/// A single-quoted name after "my"
fn my_quoted_name(text: &str) -> Option<String> {
    MY_NAME_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// A standalone all-caps line near the top of the text
fn all_caps_line(text: &str) -> Option<String> {
    for line in text.lines().take(20) {
        let t = line.trim();
        let count = t.chars().count();
        if !(4..=60).contains(&count) || t.ends_with(':') || SECTION_HEADER_RE.is_match(t) {
            continue;
        }
        let letters: Vec<char> = t.chars().filter(|c| c.is_alphabetic()).collect();
        if letters.len() < 3 || !letters.iter().all(|c| c.is_uppercase()) {
            continue;
        }
        if t.split_whitespace().count() < 2 {
            continue;
        }
        return Some(t.to_string());
    }
    None
}

/// A capitalized line mentioning a dish-type keyword
fn capitalized_food_line(text: &str) -> Option<String> {
    for line in text.lines().take(20) {
        let t = line.trim();
        let count = t.chars().count();
        if !(5..100).contains(&count) || t.ends_with(':') || SECTION_HEADER_RE.is_match(t) {
            continue;
        }
        if !t.chars().next().is_some_and(|c| c.is_uppercase()) {
            continue;
        }
        if FOOD_KEYWORD_RE.is_match(t) {
            return Some(t.to_string());
        }
    }
    None
}

/// An explicit "recipe:"/"called:" label
fn labeled_name(text: &str) -> Option<String> {
    LABELED_NAME_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// The first markdown header line
fn markdown_header_name(text: &str) -> Option<String> {
    MARKDOWN_HEADER_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// The non-empty line immediately preceding the ingredients label
fn line_before_ingredients(text: &str) -> Option<String> {
    let label = INGREDIENTS_LABEL_RE.find(text)?;
    let before = &text[..label.start()];
    for line in before.lines().rev() {
        let t = line.trim();
        if t.is_empty() {
            continue;
        }
        let count = t.chars().count();
        if !(3..=100).contains(&count) || SECTION_HEADER_RE.is_match(t) {
            return None;
        }
        return Some(t.to_string());
    }
    None
}

/// Fallback: the first substantial line that is neither a section header, a
/// list item, nor an acknowledgment
fn first_substantial_line(text: &str) -> Option<String> {
    for line in text.lines() {
        let t = line.trim();
        if t.is_empty() || strip_list_prefix(t) != t {
            continue;
        }
        if t.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            continue;
        }
        let count = t.chars().count();
        if !(5..=100).contains(&count) || t.ends_with(':') || SECTION_HEADER_RE.is_match(t) {
            continue;
        }
        if ACKNOWLEDGMENT_RE.is_match(t) {
            continue;
        }
        return Some(clean_name(t));
    }
    None
}

/// Strip surrounding quotes and trailing punctuation from a name candidate
fn clean_name(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| matches!(c, '"' | '“' | '”' | '\'' | '‘' | '’'))
        .trim()
        .trim_end_matches(&[':', '.', ','][..])
        .trim()
        .to_string()
}

/// Find a servings count; a stated zero counts as undetected and the default
/// is 4.
fn extract_servings(text: &str) -> u32 {
    for pattern in [&*SERVINGS_LABEL_RE, &*SERVINGS_COUNT_RE] {
        for caps in pattern.captures_iter(text) {
            if let Ok(n) = caps[1].parse::<u32>() {
                if n >= 1 {
                    return n;
                }
            }
        }
    }
    4
}

/// Capture notes text after a "Notes:"/"Tips:" label
fn extract_notes(text: &str) -> String {
    NOTES_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANCAKES: &str = "Classic Pancakes\n\nServes: 6\n\nIngredients:\n- 2 cups flour\n- 2 eggs\n- 1 1/2 cups milk\n\nInstructions:\n1. Whisk the dry ingredients.\n2. Add eggs and milk.\n3. Cook on a hot griddle.\n\nNotes: Rest the batter for ten minutes.";

    #[test]
    fn test_extract_full_recipe() {
        let recipe = extract_recipe_from_text(PANCAKES);
        assert_eq!(recipe.name, "Classic Pancakes");
        assert_eq!(recipe.servings, 6);
        assert_eq!(
            recipe.ingredients,
            vec!["2 cups flour", "2 eggs", "1 1/2 cups milk"]
        );
        assert_eq!(recipe.instructions.len(), 3);
        assert_eq!(recipe.instructions[0], "Whisk the dry ingredients.");
        assert_eq!(recipe.notes, "Rest the batter for ten minutes.");
    }

    #[test]
    fn test_extracted_recipe_carries_allergens_and_tags() {
        let recipe = extract_recipe_from_text(PANCAKES);
        assert!(recipe.allergens.contains(&"Dairy".to_string()));
        assert!(recipe.allergens.contains(&"Eggs".to_string()));
        assert!(recipe.allergens.contains(&"Gluten".to_string()));
        assert!(recipe.tags.contains(&"Breakfast".to_string()));
    }

    #[test]
    fn test_servings_default_is_four() {
        let recipe = extract_recipe_from_text(
            "Simple Salad\n\nIngredients:\n- 1 head lettuce\n\nInstructions:\n1. Toss.",
        );
        assert_eq!(recipe.servings, 4);
    }

    #[test]
    fn test_servings_zero_is_ignored() {
        let recipe = extract_recipe_from_text(
            "Odd Bread\n\nServes: 0\n\nIngredients:\n- 1 cup flour\n\nInstructions:\n1. Bake.",
        );
        assert_eq!(recipe.servings, 4);
    }

    #[test]
    fn test_no_labels_means_no_sections() {
        let recipe = extract_recipe_from_text(
            "Just some chatter about dinner plans without any structure at all.",
        );
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_inline_dash_separated_ingredients() {
        let recipe = extract_recipe_from_text(
            "Quick Pasta\nIngredients: - 2 cups pasta - 1 cup sauce - 1 tbsp oil\nInstructions: 1. Boil. 2. Combine.",
        );
        assert_eq!(
            recipe.ingredients,
            vec!["2 cups pasta", "1 cup sauce", "1 tbsp oil"]
        );
        assert_eq!(recipe.instructions, vec!["Boil.", "Combine."]);
    }

    #[test]
    fn test_inline_sentence_ingredients() {
        let recipe = extract_recipe_from_text(
            "Simple Cake\nIngredients: 2 cups flour, 1 cup sugar, 3 tbsp butter.\nInstructions: 1. Mix everything. 2. Bake until golden.",
        );
        assert_eq!(
            recipe.ingredients,
            vec!["2 cups flour", "1 cup sugar", "3 tbsp butter"]
        );
    }

    #[test]
    fn test_quoted_name_wins_over_later_lines() {
        let text = "Here is the \"Midnight Chocolate Cake\" you asked about.\n\nIngredients:\n- 1 cup cocoa\n\nInstructions:\n1. Bake.";
        let recipe = extract_recipe_from_text(text);
        assert_eq!(recipe.name, "Midnight Chocolate Cake");
    }

    #[test]
    fn test_my_quoted_name() {
        let text = "Let me share my 'Harvest Stew'.\n\nIngredients:\n- 2 carrots\n\nInstructions:\n1. Simmer.";
        let recipe = extract_recipe_from_text(text);
        assert_eq!(recipe.name, "Harvest Stew");
    }

    #[test]
    fn test_all_caps_name() {
        let text = "LEMON HERB CHICKEN\n\nIngredients:\n- 1 whole chicken\n\nInstructions:\n1. Roast.";
        let recipe = extract_recipe_from_text(text);
        assert_eq!(recipe.name, "LEMON HERB CHICKEN");
    }

    #[test]
    fn test_markdown_header_name() {
        let text = "# Garden Minestrone\n\nIngredients:\n- 1 zucchini\n\nInstructions:\n1. Simmer.";
        let recipe = extract_recipe_from_text(text);
        assert_eq!(recipe.name, "Garden Minestrone");
    }

    #[test]
    fn test_untitled_fallback_when_only_ingredients() {
        let text = "ingredients:\n- 2 cups rice\n- 1 onion\n\ninstructions:\n1. Cook.";
        let recipe = extract_recipe_from_text(text);
        assert_eq!(recipe.name, UNTITLED_RECIPE_NAME);
        assert!(!recipe.ingredients.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let recipe = extract_recipe_from_text("");
        assert_eq!(recipe, ParsedRecipe::default());
    }

    #[test]
    fn test_detect_recipe_too_short() {
        assert!(!detect_recipe_in_text("Ingredients: flour. Instructions: bake."));
        assert!(!detect_recipe_in_text(""));
    }

    #[test]
    fn test_detect_recipe_acknowledgment() {
        let padded = format!(
            "Sure, I'll save that recipe for you! {}",
            "It will be right there in your collection whenever you need it. ".repeat(5)
        );
        assert!(padded.chars().count() >= 200);
        assert!(!detect_recipe_in_text(&padded));
    }

    #[test]
    fn test_detect_recipe_requires_both_headers() {
        let filler = "2 cups flour and a pinch of salt with plenty of patience. ".repeat(5);
        let without_instructions = format!("Ingredients:\n{}", filler);
        assert!(!detect_recipe_in_text(&without_instructions));

        let with_both = format!("Ingredients:\n{}\nInstructions:\n1. Mix.", filler);
        assert!(detect_recipe_in_text(&with_both));
    }

    #[test]
    fn test_detect_recipe_tolerates_curly_apostrophe() {
        let filler = "flour, sugar, butter, eggs, and a little vanilla to finish. ".repeat(4);
        let text = format!("You’ll need:\n{}\nSteps:\n1. Mix.", filler);
        assert!(detect_recipe_in_text(&text));
    }

    #[test]
    fn test_detect_save_intent_phrasings() {
        assert!(detect_save_intent("Save this recipe please"));
        assert!(detect_save_intent("can you save it for later?"));
        assert!(detect_save_intent("Add that to my recipes"));
        assert!(detect_save_intent("keep this recipe around"));
        assert!(!detect_save_intent("That looks delicious"));
        assert!(!detect_save_intent(""));
    }

    #[test]
    fn test_instruction_continuation_lines() {
        let text = "Slow Bread\n\nIngredients:\n- 3 cups flour\n\nInstructions:\nKnead the dough until smooth.\nwait\nShape into a loaf and bake.";
        let recipe = extract_recipe_from_text(text);
        assert_eq!(
            recipe.instructions,
            vec![
                "Knead the dough until smooth. wait",
                "Shape into a loaf and bake."
            ]
        );
    }

    #[test]
    fn test_notes_stop_at_blank_line() {
        let text = "Herb Focaccia\n\nIngredients:\n- 4 cups flour\n\nInstructions:\n1. Bake.\n\nNotes: Use good olive oil.\n\nUnrelated trailing chatter.";
        let recipe = extract_recipe_from_text(text);
        assert_eq!(recipe.notes, "Use good olive oil.");
    }
}
