use recipe_lens::parser::clean_line;
use recipe_lens::{parse, Recipe, Section};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_round_trip_through_template() {
    let recipe = Recipe {
        name: "Lentil Soup".to_string(),
        ingredients: strings(&["1 cup red lentils", "2 carrots, diced", "1.5 l stock"]),
        instructions: strings(&["Rinse the lentils", "Simmer everything for 25 minutes"]),
        equipment_needed: strings(&["Large pot", "Immersion blender"]),
        nutritional_information: strings(&["Calories: 320", "Fiber: 12g"]),
        notes: strings(&["Freezes well"]),
    };

    assert_eq!(parse(&recipe.to_template_text()), recipe);
}

#[test]
fn test_round_trip_with_empty_sections() {
    let recipe = Recipe {
        name: "Toast".to_string(),
        ingredients: strings(&["bread"]),
        ..Default::default()
    };

    assert_eq!(parse(&recipe.to_string()), recipe);
}

#[test]
fn test_round_trip_normalizes_markers() {
    let messy = Recipe {
        name: "Salsa".to_string(),
        ingredients: strings(&["- 3 tomatoes", "* 1 onion"]),
        ..Default::default()
    };

    let reparsed = parse(&messy.to_template_text());
    assert_eq!(reparsed.ingredients, strings(&["3 tomatoes", "1 onion"]));
}

#[test]
fn test_typical_model_answer() {
    let answer = "\
Creamy Garlic Parmesan Pasta

Ingredients:
* 8 oz fettuccine
* 2 tablespoons butter
* 4 cloves garlic, minced

Instructions:
1. Cook the pasta according to package directions.
2. Melt butter and sauté the garlic.
3. Toss with the pasta.

Equipment Needed:
* Large pot
* Skillet

Nutritional Information:
* Calories: approximately 550 per serving

Notes:
* Add grilled chicken for extra protein.
";
    let recipe = parse(answer);

    assert_eq!(recipe.name, "Creamy Garlic Parmesan Pasta");
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.ingredients[2], "4 cloves garlic, minced");
    assert_eq!(recipe.instructions[1], "Melt butter and sauté the garlic.");
    assert_eq!(recipe.equipment_needed, strings(&["Large pot", "Skillet"]));
    assert_eq!(recipe.nutritional_information.len(), 1);
    assert_eq!(recipe.notes, strings(&["Add grilled chicken for extra protein."]));
}

#[test]
fn test_bold_headings_fall_back_to_name() {
    let answer = "**Shrimp Tacos**\n\n**Ingredients:**\n* 1 lb shrimp\n\n**Instructions:**\n1. Grill the shrimp";
    let recipe = parse(answer);

    assert_eq!(recipe.name, "Shrimp Tacos**");
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.instructions.is_empty());
}

#[test]
fn test_mixed_markers_in_sections() {
    let answer = "Focaccia\n\nIngredients:\n#1. flour\n#2. olive oil\n1.5 tsp salt\n\nInstructions:\n*1. Knead\n*2. Proof";
    let recipe = parse(answer);

    assert_eq!(recipe.ingredients, strings(&["flour", "olive oil", "1.5 tsp salt"]));
    assert_eq!(recipe.instructions, strings(&["Knead", "Proof"]));
}

#[test]
fn test_chatty_preamble_becomes_name() {
    // Models sometimes ignore "do not add any extra text"; the first
    // unrecognized block wins the name slot regardless.
    let answer = "Sure! Here's a recipe based on your photo:\n\nBanana Bread\n\nIngredients:\n- 3 bananas";
    let recipe = parse(answer);

    assert_eq!(recipe.name, "Sure! Here's a recipe based on your photo:");
    assert_eq!(recipe.ingredients, strings(&["3 bananas"]));
}

#[test]
fn test_every_field_defined_for_unstructured_text() {
    let recipe = parse("I'm sorry, I can't identify any food in this image.");

    assert_eq!(recipe.name, "I'm sorry, I can't identify any food in this image.");
    for section in Section::ALL {
        assert!(recipe.section(section).is_empty());
    }
}

#[test]
fn test_cleaned_lines_are_fixpoints() {
    let answer = "Ingredients:\n1. - 2 eggs\n## 3) ### 1 cup milk\n•  pinch of salt";
    for line in parse(answer).ingredients {
        assert_eq!(clean_line(&line), line);
    }
}

#[test]
fn test_json_shape_for_presentation() {
    let recipe = parse("Pancakes\n\nIngredients:\n- flour");
    let json = serde_json::to_value(&recipe).unwrap();

    for key in [
        "name",
        "ingredients",
        "instructions",
        "equipmentNeeded",
        "nutritionalInformation",
        "notes",
    ] {
        assert!(!json[key].is_null(), "{} should never be null", key);
    }
}
