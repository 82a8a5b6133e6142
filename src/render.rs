//! Plain-text and printable HTML recipe cards.

use crate::enrichment::Enrichment;
use crate::model::Recipe;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// Put a single space between a leading quantity and the rest of the line.
///
/// Quantities may be whole numbers, decimals, fractions (`1/2`, `1 / 2`)
/// and ranges (`1-2`, `1/2 - 3/4`).
pub fn format_ingredient(ingredient: &str) -> String {
    let Some(end) = quantity_end(ingredient) else {
        return ingredient.to_string();
    };

    let (number, rest) = ingredient.split_at(end);
    let rest = rest.trim();
    if rest.is_empty() {
        number.to_string()
    } else {
        format!("{} {}", number, rest)
    }
}

/// Render a card for terminals and logs.
pub fn render_text(recipe: &Recipe, enrichment: Option<&Enrichment>) -> String {
    let mut out = String::new();

    if !recipe.name.is_empty() {
        let _ = writeln!(out, "{}", recipe.name);
        let _ = writeln!(out, "{}", "=".repeat(recipe.name.chars().count()));
    }

    if !recipe.ingredients.is_empty() {
        let _ = writeln!(out, "\nIngredients");
        for ingredient in &recipe.ingredients {
            let _ = writeln!(out, "  • {}", format_ingredient(ingredient));
        }
    }

    let links = enrichment.map(|e| e.equipment_links.as_slice()).unwrap_or_default();
    if !recipe.equipment_needed.is_empty() {
        let _ = writeln!(out, "\nEquipment Needed");
        for item in &recipe.equipment_needed {
            match links.iter().find(|link| &link.item == item) {
                Some(link) => {
                    let _ = writeln!(out, "  {} <{}>", item, link.url);
                }
                None => {
                    let _ = writeln!(out, "  {}", item);
                }
            }
        }
    }

    if !recipe.instructions.is_empty() {
        let _ = writeln!(out, "\nInstructions");
        for (index, step) in recipe.instructions.iter().enumerate() {
            let _ = writeln!(out, "  Step {}: {}", index + 1, step);
        }
    }

    if !recipe.nutritional_information.is_empty() {
        let _ = writeln!(out, "\nNutritional Information");
        for line in &recipe.nutritional_information {
            let _ = writeln!(out, "  {}", line);
        }
    }

    if !recipe.notes.is_empty() {
        let _ = writeln!(out, "\nNotes");
        for note in &recipe.notes {
            let _ = writeln!(out, "  • {}", note);
        }
    }

    if let Some(video) = enrichment.and_then(|e| e.video_url.as_deref()) {
        let _ = writeln!(out, "\nVideo: {}", video);
    }

    out
}

/// Render a standalone printable HTML page. All recipe text is escaped.
pub fn render_html(recipe: &Recipe, enrichment: Option<&Enrichment>) -> String {
    let title = if recipe.name.is_empty() {
        "Recipe"
    } else {
        recipe.name.as_str()
    };

    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", encode_text(title));

    let ingredients: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|i| encode_text(&format_ingredient(i)).into_owned())
        .collect();
    html_list(&mut body, "Ingredients", "ul", &ingredients);

    let links = enrichment.map(|e| e.equipment_links.as_slice()).unwrap_or_default();
    let equipment: Vec<String> = recipe
        .equipment_needed
        .iter()
        .map(|item| match links.iter().find(|link| &link.item == item) {
            Some(link) => format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                encode_double_quoted_attribute(&link.url),
                encode_text(item)
            ),
            None => encode_text(item).into_owned(),
        })
        .collect();
    html_list(&mut body, "Equipment Needed", "ul", &equipment);

    let steps: Vec<String> = recipe
        .instructions
        .iter()
        .map(|s| encode_text(s).into_owned())
        .collect();
    html_list(&mut body, "Instructions", "ol", &steps);

    let nutrition: Vec<String> = recipe
        .nutritional_information
        .iter()
        .map(|s| encode_text(s).into_owned())
        .collect();
    html_list(&mut body, "Nutritional Information", "ul", &nutrition);

    let notes: Vec<String> = recipe
        .notes
        .iter()
        .map(|s| encode_text(s).into_owned())
        .collect();
    html_list(&mut body, "Notes", "ul", &notes);

    if let Some(video) = enrichment.and_then(|e| e.video_url.as_deref()) {
        let _ = writeln!(
            body,
            "<p><a href=\"{}\">Watch the video tutorial</a></p>",
            encode_double_quoted_attribute(video)
        );
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        encode_text(title),
        PRINT_STYLE,
        body
    )
}

const PRINT_STYLE: &str = "body { font-family: Arial, sans-serif; line-height: 1.6; }
h1 { font-size: 24px; text-align: center; }
h2 { font-size: 20px; margin-top: 20px; }
ul, ol { padding-left: 20px; }
li { margin-bottom: 5px; }
";

// Items must already be escaped
fn html_list(out: &mut String, heading: &str, tag: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "<h2>{}</h2>\n<{}>", heading, tag);
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", item);
    }
    let _ = writeln!(out, "</{}>", tag);
}

fn quantity_end(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut end = number_end(bytes, 0)?;

    if let Some(fraction) = fraction_end(bytes, end) {
        end = fraction;
    }

    // Range: "1-2", "1/2 - 3/4"
    if let Some(dash) = symbol_end(bytes, end, b'-') {
        if let Some(upper) = number_end(bytes, skip_spaces(bytes, dash)) {
            end = fraction_end(bytes, upper).unwrap_or(upper);
        }
    }

    Some(end)
}

fn number_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return None;
    }
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    Some(end)
}

fn fraction_end(bytes: &[u8], start: usize) -> Option<usize> {
    let slash = symbol_end(bytes, start, b'/')?;
    number_end(bytes, skip_spaces(bytes, slash))
}

// Position just past `symbol` if it follows `start` after optional spaces
fn symbol_end(bytes: &[u8], start: usize, symbol: u8) -> Option<usize> {
    let at = skip_spaces(bytes, start);
    (at < bytes.len() && bytes[at] == symbol).then_some(at + 1)
}

fn skip_spaces(bytes: &[u8], mut at: usize) -> usize {
    while at < bytes.len() && bytes[at].is_ascii_whitespace() {
        at += 1;
    }
    at
}
