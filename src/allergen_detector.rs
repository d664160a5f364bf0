//! # Allergen and Tag Detector
//!
//! Scans ingredient lists against fixed keyword/exclusion tables to flag
//! allergen categories and suggest recipe tags. Detection is single-pass,
//! case-insensitive, and keyword-table driven; results are recomputed on
//! every call.
//!
//! A category is flagged only when at least one of its keywords matches as a
//! whole word AND none of its exclusion keywords do, so "almond milk" does
//! not flag Dairy even though "milk" is a Dairy keyword.

use crate::recipe_model::{AllergenReport, RecipeDetails};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// One allergen category with its keyword and exclusion patterns
struct AllergenCategory {
    name: &'static str,
    keywords: Regex,
    exclusions: Regex,
}

/// A tag that fires when any of its keywords match
struct KeywordTag {
    name: &'static str,
    keywords: Regex,
}

/// A dietary tag that fires when none of its exclusion keywords match
struct DietaryTag {
    name: &'static str,
    exclusions: Regex,
}

/// Build a case-insensitive whole-word alternation over a fixed word list
fn word_pattern(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
        .expect("keyword table pattern should be valid")
}

/// Ingredients that rule out the Vegetarian tag
const MEAT_WORDS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "bacon",
    "ham",
    "turkey",
    "lamb",
    "veal",
    "duck",
    "sausage",
    "chorizo",
    "prosciutto",
    "salami",
    "pepperoni",
    "meat",
    "meatball",
    "meatballs",
    "steak",
    "fish",
    "salmon",
    "tuna",
    "anchovy",
    "anchovies",
    "shrimp",
    "prawn",
    "crab",
    "lobster",
    "gelatin",
];

/// Ingredients that additionally rule out the Vegan tag
const ANIMAL_PRODUCT_WORDS: &[&str] = &[
    "milk",
    "butter",
    "cream",
    "cheese",
    "yogurt",
    "yoghurt",
    "ghee",
    "buttermilk",
    "custard",
    "egg",
    "eggs",
    "honey",
    "mayonnaise",
    "whey",
];

lazy_static! {
    /// Fixed allergen categories in canonical (alphabetical) order
    static ref ALLERGEN_CATEGORIES: Vec<AllergenCategory> = vec![
        AllergenCategory {
            name: "Dairy",
            keywords: word_pattern(&[
                "milk", "butter", "cream", "cheese", "yogurt", "yoghurt", "ghee", "custard",
                "buttermilk", "whey", "casein", "half-and-half", "ice cream", "sour cream",
                "mascarpone", "ricotta", "mozzarella", "parmesan", "cheddar",
            ]),
            exclusions: word_pattern(&[
                "almond milk", "coconut milk", "soy milk", "oat milk", "rice milk",
                "cashew milk", "hemp milk", "nut milk", "peanut butter", "almond butter",
                "cashew butter", "sunflower butter", "cocoa butter", "shea butter",
                "cream of tartar", "coconut cream", "vegan butter", "vegan cheese",
                "dairy-free", "non-dairy",
            ]),
        },
        AllergenCategory {
            name: "Eggs",
            keywords: word_pattern(&[
                "egg", "eggs", "egg white", "egg whites", "egg yolk", "egg yolks",
                "mayonnaise", "mayo", "meringue", "aioli", "albumen", "frittata",
                "omelet", "omelette", "quiche", "hollandaise",
            ]),
            exclusions: word_pattern(&["egg-free", "eggless", "flax egg", "egg replacer"]),
        },
        AllergenCategory {
            name: "Fish",
            keywords: word_pattern(&[
                "fish", "salmon", "tuna", "cod", "halibut", "tilapia", "trout", "anchovy",
                "anchovies", "sardine", "sardines", "mackerel", "snapper", "fish sauce",
                "worcestershire",
            ]),
            exclusions: word_pattern(&["fish-free"]),
        },
        AllergenCategory {
            name: "Gluten",
            keywords: word_pattern(&[
                "flour", "wheat", "barley", "rye", "malt", "bread", "breadcrumbs", "panko",
                "pasta", "spaghetti", "noodles", "macaroni", "couscous", "semolina", "farro",
                "bulgur", "seitan", "cracker", "crackers", "tortilla", "tortillas",
                "soy sauce", "pita", "croutons", "orzo", "udon", "ramen",
            ]),
            exclusions: word_pattern(&[
                "gluten-free", "gluten free", "almond flour", "coconut flour", "rice flour",
                "chickpea flour", "tapioca flour", "buckwheat flour", "rice noodles",
            ]),
        },
        AllergenCategory {
            name: "Peanuts",
            keywords: word_pattern(&[
                "peanut", "peanuts", "peanut butter", "groundnut", "groundnuts",
            ]),
            exclusions: word_pattern(&["peanut-free", "peanut free"]),
        },
        AllergenCategory {
            name: "Sesame",
            keywords: word_pattern(&[
                "sesame", "sesame oil", "sesame seeds", "tahini", "benne", "halvah", "hummus",
            ]),
            exclusions: word_pattern(&["sesame-free"]),
        },
        AllergenCategory {
            name: "Shellfish",
            keywords: word_pattern(&[
                "shrimp", "prawn", "prawns", "crab", "lobster", "scallop", "scallops",
                "clam", "clams", "mussel", "mussels", "oyster", "oysters", "crawfish",
                "crayfish", "squid", "calamari", "octopus",
            ]),
            exclusions: word_pattern(&["oyster mushroom", "oyster mushrooms"]),
        },
        AllergenCategory {
            name: "Soy",
            keywords: word_pattern(&[
                "soy", "soya", "soybean", "soybeans", "tofu", "tempeh", "edamame", "miso",
                "soy sauce", "tamari",
            ]),
            exclusions: word_pattern(&["soy-free"]),
        },
        AllergenCategory {
            name: "Tree Nuts",
            keywords: word_pattern(&[
                "almond", "almonds", "cashew", "cashews", "walnut", "walnuts", "pecan",
                "pecans", "pistachio", "pistachios", "hazelnut", "hazelnuts", "macadamia",
                "brazil nut", "brazil nuts", "pine nut", "pine nuts", "praline", "marzipan",
                "frangipane",
            ]),
            exclusions: word_pattern(&["nut-free"]),
        },
    ];

    /// Tags suggested on keyword presence
    static ref KEYWORD_TAGS: Vec<KeywordTag> = vec![
        KeywordTag {
            name: "Breakfast",
            keywords: word_pattern(&[
                "breakfast", "brunch", "pancake", "pancakes", "waffle", "waffles", "oatmeal",
                "granola", "omelet", "omelette", "french toast", "scrambled",
            ]),
        },
        KeywordTag {
            name: "Dessert",
            keywords: word_pattern(&[
                "dessert", "cake", "cookie", "cookies", "brownie", "brownies", "pudding",
                "ice cream", "pie", "tart", "cheesecake", "frosting", "fudge",
            ]),
        },
        KeywordTag {
            name: "Appetizer",
            keywords: word_pattern(&[
                "appetizer", "starter", "dip", "bruschetta", "crostini", "finger food",
                "hors d'oeuvre",
            ]),
        },
        KeywordTag {
            name: "Soup",
            keywords: word_pattern(&["soup", "stew", "chowder", "bisque", "broth", "gumbo"]),
        },
        KeywordTag {
            name: "Salad",
            keywords: word_pattern(&["salad", "slaw", "vinaigrette"]),
        },
        KeywordTag {
            name: "Seafood",
            keywords: word_pattern(&[
                "fish", "salmon", "tuna", "shrimp", "crab", "lobster", "scallop", "scallops",
            ]),
        },
        KeywordTag {
            name: "Baking",
            keywords: word_pattern(&["bake", "baked", "baking", "dough", "batter", "knead", "yeast"]),
        },
        KeywordTag {
            name: "Grilling",
            keywords: word_pattern(&[
                "grill", "grilled", "grilling", "barbecue", "bbq", "skewer", "skewers",
            ]),
        },
    ];

    /// Dietary tags suggested when no excluded ingredient appears
    static ref DIETARY_TAGS: Vec<DietaryTag> = vec![
        DietaryTag {
            name: "Vegetarian",
            exclusions: word_pattern(MEAT_WORDS),
        },
        DietaryTag {
            name: "Vegan",
            exclusions: word_pattern(
                &MEAT_WORDS
                    .iter()
                    .chain(ANIMAL_PRODUCT_WORDS.iter())
                    .copied()
                    .collect::<Vec<_>>(),
            ),
        },
        DietaryTag {
            name: "Gluten-Free",
            exclusions: word_pattern(&[
                "flour", "wheat", "bread", "breadcrumbs", "panko", "pasta", "noodles",
                "barley", "rye", "couscous", "semolina", "cracker", "crackers", "tortilla",
                "soy sauce",
            ]),
        },
        DietaryTag {
            name: "Dairy-Free",
            exclusions: word_pattern(&[
                "milk", "butter", "cream", "cheese", "yogurt", "yoghurt", "ghee",
                "buttermilk", "whey", "custard",
            ]),
        },
    ];
}

/// Longest total time (minutes) still tagged "Quick & Easy"
const QUICK_TIME_LIMIT: u32 = 30;

/// Detect allergen categories across a list of raw ingredient strings.
///
/// All ingredients are joined into one text blob; a category is flagged iff
/// at least one of its keywords matches as a whole word and none of its
/// exclusion keywords do. Returns the flagged category names sorted
/// alphabetically. Empty input yields an empty list.
///
/// # Examples
///
/// ```rust
/// use catering_import::allergen_detector::detect_allergens;
///
/// let allergens = detect_allergens(&["2 cups milk".to_string(), "1 cup flour".to_string()]);
/// assert_eq!(allergens, vec!["Dairy".to_string(), "Gluten".to_string()]);
///
/// let allergens = detect_allergens(&["1 cup almond milk".to_string()]);
/// assert!(!allergens.contains(&"Dairy".to_string()));
/// assert!(allergens.contains(&"Tree Nuts".to_string()));
/// ```
pub fn detect_allergens(ingredients: &[String]) -> Vec<String> {
    if ingredients.is_empty() {
        return Vec::new();
    }
    let blob = ingredients.join("\n");
    if blob.trim().is_empty() {
        return Vec::new();
    }

    let mut found: Vec<String> = ALLERGEN_CATEGORIES
        .iter()
        .filter(|category| {
            category.keywords.is_match(&blob) && !category.exclusions.is_match(&blob)
        })
        .map(|category| category.name.to_string())
        .collect();
    found.sort();
    found
}

/// Suggest tags for a recipe from its name, ingredients, instructions, and
/// notes.
///
/// Keyword tags fire when any keyword matches as a whole word; dietary tags
/// fire when none of their exclusion keywords match; "Quick & Easy" fires
/// when `total_time` is 30 minutes or less. "Vegan" implies "Vegetarian", so
/// the latter is dropped when both fire. Returns a sorted, deduplicated list.
pub fn suggest_tags(recipe: &RecipeDetails) -> Vec<String> {
    let mut parts: Vec<&str> = vec![recipe.name.as_str()];
    parts.extend(recipe.ingredients.iter().map(String::as_str));
    for section in &recipe.sections {
        parts.extend(section.ingredients.iter().map(String::as_str));
    }
    parts.extend(recipe.instructions.iter().map(String::as_str));
    parts.push(recipe.notes.as_str());
    let blob = parts.join("\n");

    let mut tags: Vec<String> = Vec::new();
    if !blob.trim().is_empty() {
        for tag in KEYWORD_TAGS.iter() {
            if tag.keywords.is_match(&blob) {
                tags.push(tag.name.to_string());
            }
        }
        for tag in DIETARY_TAGS.iter() {
            if !tag.exclusions.is_match(&blob) {
                tags.push(tag.name.to_string());
            }
        }
    }
    if let Some(total_time) = recipe.total_time {
        if total_time > 0 && total_time <= QUICK_TIME_LIMIT {
            tags.push("Quick & Easy".to_string());
        }
    }

    // Vegan implies Vegetarian; keep only the stronger tag.
    if tags.iter().any(|tag| tag == "Vegan") {
        tags.retain(|tag| tag != "Vegetarian");
    }

    tags.sort();
    tags.dedup();
    tags
}

/// Analyze a recipe and return its allergen categories and suggested tags.
///
/// Ingredients stored flat and ingredients nested under sections are both
/// flattened before delegating to [`detect_allergens`] and [`suggest_tags`].
pub fn analyze_recipe(recipe: &RecipeDetails) -> AllergenReport {
    let mut ingredients = recipe.ingredients.clone();
    for section in &recipe.sections {
        ingredients.extend(section.ingredients.iter().cloned());
    }

    let allergens = detect_allergens(&ingredients);
    let tags = suggest_tags(recipe);
    debug!(
        "analyzed recipe '{}': {} allergens, {} tags",
        recipe.name,
        allergens.len(),
        tags.len()
    );

    AllergenReport { allergens, tags }
}
