#[cfg(test)]
mod tests {
    use catering_import::recipe_extractor::{
        detect_recipe_in_text, detect_save_intent, extract_recipe_from_text,
    };
    use catering_import::recipe_model::ParsedRecipe;

    const CHAT_RECIPE: &str = "Here's the \"Sunday Morning Pancakes\" recipe you asked for!\n\nServes: 6\n\nIngredients:\n- 2 cups all-purpose flour\n- 2 eggs\n- 1 1/2 cups milk\n- 2 tbsp melted butter\n\nInstructions:\n1. Whisk the dry mix together.\n2. Beat in the eggs, milk, and butter.\n3. Cook on a hot griddle until golden.\n\nNotes: Leftover batter keeps overnight.";

    #[test]
    fn test_full_extraction_from_chat_text() {
        let recipe = extract_recipe_from_text(CHAT_RECIPE);
        assert_eq!(recipe.name, "Sunday Morning Pancakes");
        assert_eq!(recipe.servings, 6);
        assert_eq!(recipe.ingredients.len(), 4);
        assert_eq!(recipe.ingredients[0], "2 cups all-purpose flour");
        assert_eq!(recipe.instructions.len(), 3);
        assert_eq!(recipe.notes, "Leftover batter keeps overnight.");
    }

    #[test]
    fn test_labeled_sections_yield_nonempty_fields() {
        let text = "Weeknight Soup\n\nIngredients:\n- 1 onion\n- 4 cups broth\n\nInstructions:\n1. Saute the onion.\n2. Add broth and simmer.";
        let recipe = extract_recipe_from_text(text);
        assert!(!recipe.ingredients.is_empty());
        assert!(!recipe.instructions.is_empty());
    }

    #[test]
    fn test_servings_defaults_to_four() {
        let text = "Weeknight Soup\n\nIngredients:\n- 1 onion\n\nInstructions:\n1. Simmer.";
        let recipe = extract_recipe_from_text(text);
        assert_eq!(recipe.servings, 4);
    }

    #[test]
    fn test_extraction_never_fails_on_garbage() {
        for text in ["", "   \n\n  ", "?????", "1", &"x".repeat(5000)] {
            let recipe = extract_recipe_from_text(text);
            assert!(recipe.servings >= 1);
        }
    }

    #[test]
    fn test_allergens_and_tags_filled_from_extraction() {
        let recipe = extract_recipe_from_text(CHAT_RECIPE);
        assert!(recipe.allergens.contains(&"Dairy".to_string()));
        assert!(recipe.allergens.contains(&"Eggs".to_string()));
        assert!(recipe.allergens.contains(&"Gluten".to_string()));
        assert!(recipe.tags.contains(&"Breakfast".to_string()));
    }

    #[test]
    fn test_detect_recipe_short_text_is_never_a_recipe() {
        assert!(!detect_recipe_in_text("Ingredients: flour\nInstructions: bake"));
        let just_under: String = "a".repeat(199);
        assert!(!detect_recipe_in_text(&just_under));
    }

    #[test]
    fn test_detect_recipe_acknowledgment_is_never_a_recipe() {
        let padding = "I kept the format exactly as you wrote it down last week. ".repeat(5);
        let text = format!("Sure, I'll save that recipe for you! {}", padding);
        assert!(text.chars().count() >= 200);
        assert!(!detect_recipe_in_text(&text));
    }

    #[test]
    fn test_detect_recipe_requires_both_headers() {
        assert!(detect_recipe_in_text(CHAT_RECIPE));

        let ingredients_only = CHAT_RECIPE.replace("Instructions:", "");
        assert!(!detect_recipe_in_text(&ingredients_only));

        let instructions_only = CHAT_RECIPE.replace("Ingredients:", "");
        assert!(!detect_recipe_in_text(&instructions_only));
    }

    #[test]
    fn test_save_intent_phrasings() {
        assert!(detect_save_intent("save this recipe"));
        assert!(detect_save_intent("Can you save that for me?"));
        assert!(detect_save_intent("add it to my collection"));
        assert!(detect_save_intent("Please add this to my recipes."));
        assert!(!detect_save_intent("this recipe looks great"));
        assert!(!detect_save_intent("how long does it keep?"));
    }

    #[test]
    fn test_parsed_recipe_round_trips_through_json() {
        let recipe = extract_recipe_from_text(CHAT_RECIPE);
        let json = serde_json::to_string(&recipe).unwrap();
        let restored: ParsedRecipe = serde_json::from_str(&json).unwrap();
        assert_eq!(recipe, restored);
    }
}
