/// Output-format instructions appended to every generation prompt.
///
/// The section titles listed here are the ones the recipe parser
/// recognizes, so the two must stay in sync. The text lives in
/// `recipe_format.txt` and is embedded at compile time.
pub const RECIPE_FORMAT_PROMPT: &str = include_str!("recipe_format.txt");

const DISH_PROMPT: &str =
    "Analyze the following image and provide a detailed recipe based on the food shown.";

const INGREDIENTS_IMAGE_PROMPT: &str = "I have the ingredients in the image. Not sure what to cook or make, create a recipe for me from the ingredients in the image.";

const INGREDIENTS_LIST_PROMPT: &str =
    "I have the following ingredients. Not sure what to cook or make, create a recipe for me from these ingredients:";

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Prompt for a photo of a finished dish.
pub fn build_dish_prompt(characteristics: Option<&str>) -> String {
    let mut prompt = DISH_PROMPT.to_string();

    if let Some(characteristics) = non_blank(characteristics) {
        prompt.push_str(&format!(
            " Consider these additional characteristics or flavors: {}.",
            characteristics
        ));
    }

    prompt.push(' ');
    prompt.push_str(RECIPE_FORMAT_PROMPT);
    prompt
}

/// Prompt for cooking with what's on hand.
///
/// With an image the listed ingredients are extras on top of what the photo
/// shows; without one they are the whole pantry.
pub fn build_ingredients_prompt(has_image: bool, ingredients: &[String]) -> String {
    let listed = ingredients
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let mut prompt = if has_image {
        let mut prompt = INGREDIENTS_IMAGE_PROMPT.to_string();
        if !listed.is_empty() {
            prompt.push_str(&format!(
                " Also consider these additional ingredients: {}.",
                listed
            ));
        }
        prompt
    } else {
        format!("{} {}.", INGREDIENTS_LIST_PROMPT, listed)
    };

    prompt.push(' ');
    prompt.push_str(RECIPE_FORMAT_PROMPT);
    prompt
}

/// Split a comma-separated ingredient list as typed by a user.
pub fn split_ingredient_list(data: &str) -> Vec<String> {
    data.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
