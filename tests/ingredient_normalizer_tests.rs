#[cfg(test)]
mod tests {
    use catering_import::ingredient_normalizer::{
        group_ingredients, is_same_ingredient, normalize_ingredient_name,
    };

    #[test]
    fn test_synonym_table_lookup() {
        assert_eq!(normalize_ingredient_name("bicarbonate of soda"), "Baking Soda");
        assert_eq!(normalize_ingredient_name("BICARBONATE OF SODA"), "Baking Soda");
        assert_eq!(normalize_ingredient_name("icing sugar"), "Powdered Sugar");
    }

    #[test]
    fn test_title_casing_without_synonym() {
        assert_eq!(normalize_ingredient_name("extra virgin olive oil"), "Extra Virgin Olive Oil");
        assert_eq!(normalize_ingredient_name("  fresh   basil "), "Fresh Basil");
    }

    #[test]
    fn test_normalization_idempotent() {
        let inputs = [
            "bicarbonate of soda",
            "scallions",
            "Extra Virgin Olive Oil",
            "plain flour",
            "tomatoes",
        ];
        for input in inputs {
            let once = normalize_ingredient_name(input);
            assert_eq!(
                normalize_ingredient_name(&once),
                once,
                "double normalization changed {:?}",
                input
            );
        }
    }

    #[test]
    fn test_same_ingredient_via_group() {
        assert!(is_same_ingredient("Vanilla", "vanilla extract"));
        assert!(is_same_ingredient("bicarbonate of soda", "baking soda"));
        assert!(is_same_ingredient("courgette", "zucchini"));
    }

    #[test]
    fn test_same_ingredient_exact_match() {
        assert!(is_same_ingredient("Sea Salt", "sea   salt"));
    }

    #[test]
    fn test_not_same_ingredient() {
        assert!(!is_same_ingredient("flour", "sugar"));
        // Group membership is not transitive across groups.
        assert!(!is_same_ingredient("vanilla", "powdered sugar"));
    }

    #[test]
    fn test_grouping_counts_and_order() {
        let lines = vec![
            "2 cups flour".to_string(),
            "1 tsp vanilla extract".to_string(),
            "1 cup flour (sifted)".to_string(),
            "3 eggs".to_string(),
            "1/2 cup Flour".to_string(),
        ];
        let groups = group_ingredients(&lines);

        assert_eq!(groups[0].name, "Flour");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].occurrences.len(), groups[0].count);
        assert_eq!(groups[1].name, "Vanilla Extract");
        assert_eq!(groups[2].name, "Flour (sifted)");
        assert_eq!(groups[3].name, "Eggs");
    }

    #[test]
    fn test_group_invariant_occurrences_normalize_to_name() {
        let lines = vec![
            "1 tsp bicarbonate of soda".to_string(),
            "2 tsp sodium bicarbonate".to_string(),
            "1 cup sugar".to_string(),
        ];
        let groups = group_ingredients(&lines);
        assert_eq!(groups.len(), 2);
        for group in &groups {
            for occurrence in &group.occurrences {
                assert_eq!(normalize_ingredient_name(&occurrence.name), group.name);
            }
        }
    }
}
