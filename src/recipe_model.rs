//! # Recipe Data Model
//!
//! Structured records produced by the extractors and consumed by the
//! allergen/tag analyzer. All types serialize cleanly for the document-store
//! boundary the surrounding application persists through.
//!
//! ## Core Concepts
//!
//! - **ParsedRecipe**: best-effort extraction result; empty fields mean
//!   "not found", and `servings` defaults to 4
//! - **RecipeDetails**: the flat-or-sectioned shape the analyzer accepts
//! - **AllergenReport**: sorted, deduplicated allergen and tag lists

use serde::{Deserialize, Serialize};

/// A recipe extracted from unstructured text.
///
/// Built once per extraction call and never mutated by the extractor; the
/// caller may edit any field before saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    /// Recipe display name; empty when no candidate line was found
    pub name: String,
    /// Number of servings; at least 1, defaulting to 4 when undetected
    pub servings: u32,
    /// Raw ingredient lines in input order
    pub ingredients: Vec<String>,
    /// Instruction steps in input order
    pub instructions: Vec<String>,
    /// Free-text notes captured after a "Notes:"/"Tips:" label
    pub notes: String,
    /// Suggested tags derived from the extracted fields
    pub tags: Vec<String>,
    /// Detected allergen categories derived from the ingredients
    pub allergens: Vec<String>,
}

impl Default for ParsedRecipe {
    fn default() -> Self {
        Self {
            name: String::new(),
            servings: 4,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            notes: String::new(),
            tags: Vec::new(),
            allergens: Vec::new(),
        }
    }
}

/// A named sub-component of a recipe (e.g., "Dressing") with its own
/// ingredient list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeSection {
    /// Section display name
    #[serde(default)]
    pub name: String,
    /// Raw ingredient lines belonging to this section
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// The recipe shape accepted by the allergen/tag analyzer.
///
/// Ingredients may be stored flat in `ingredients`, nested under
/// `sections[].ingredients`, or both; the analyzer flattens them before
/// scanning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeDetails {
    /// Recipe display name
    #[serde(default)]
    pub name: String,
    /// Flat ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Sectioned ingredient lines
    #[serde(default)]
    pub sections: Vec<RecipeSection>,
    /// Instruction steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
    /// Total preparation plus cooking time in minutes, when known
    #[serde(default)]
    pub total_time: Option<u32>,
}

impl From<&ParsedRecipe> for RecipeDetails {
    fn from(recipe: &ParsedRecipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            sections: Vec::new(),
            instructions: recipe.instructions.clone(),
            notes: recipe.notes.clone(),
            total_time: None,
        }
    }
}

/// Allergen categories and suggested tags for one recipe.
///
/// Both lists are sorted alphabetically and deduplicated; the report is
/// recomputed on every call, never cached.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AllergenReport {
    /// Canonical allergen category names
    pub allergens: Vec<String>,
    /// Suggested recipe tags
    pub tags: Vec<String>,
}
