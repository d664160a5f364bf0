//! # Recipe Import Example
//!
//! Walks a pasted chat message through recipe detection, extraction, and
//! allergen analysis, then prints the document-store-shaped JSON a caller
//! would persist.

use anyhow::Result;
use catering_import::ingredient_normalizer::group_ingredients;
use catering_import::recipe_extractor::{
    detect_recipe_in_text, detect_save_intent, extract_recipe_from_text,
};
use log::info;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let chat_message = r#"Here's the "Sunday Morning Pancakes" recipe you asked for!

Serves: 6

Ingredients:
- 2 cups all-purpose flour
- 2 eggs
- 1 1/2 cups milk
- 2 tbsp melted butter
- 1 tbsp sugar

Instructions:
1. Whisk the dry mix together.
2. Beat in the eggs, milk, and butter.
3. Cook on a hot griddle until golden.

Notes: Leftover batter keeps overnight."#;

    info!("Checking whether the message carries a recipe");
    println!(
        "Looks like a recipe: {}",
        detect_recipe_in_text(chat_message)
    );
    println!(
        "User asked to save:  {}",
        detect_save_intent("please save this recipe!")
    );

    let recipe = extract_recipe_from_text(chat_message);
    println!("\nExtracted recipe as JSON:");
    println!("{}", serde_json::to_string_pretty(&recipe)?);

    println!("\nGrouped ingredients:");
    for group in group_ingredients(&recipe.ingredients) {
        println!("  {} x{}", group.name, group.count);
    }

    Ok(())
}
