//! Turns the free-form answer of a text generation model into a [`Recipe`].
//!
//! The answer is expected to loosely follow the template the prompt asks
//! for: a title block followed by blocks headed `Ingredients:`,
//! `Instructions:`, `Equipment Needed:`, `Nutritional Information:` and
//! `Notes:`, separated by blank lines. Nothing about that shape is
//! guaranteed, so [`parse`] is total: missing or unrecognized content
//! simply leaves the corresponding fields empty.

use crate::model::{Recipe, Section};

/// Characters that can make up a bullet marker at the start of a line
const BULLET_CHARS: [char; 4] = ['#', '*', '-', '•'];

/// Parse raw model text into a recipe.
///
/// Blocks are separated by blank lines. The first line of each block is its
/// heading. A block headed by a known section replaces that section's
/// contents; the first block with any other heading names the recipe and
/// the rest of that block is dropped.
pub fn parse(raw_text: &str) -> Recipe {
    let mut recipe = Recipe::default();

    for block in split_blocks(raw_text) {
        let Some((heading, content)) = block.split_first() else {
            continue;
        };

        match Section::from_normalized(&normalize_heading(heading)) {
            Some(section) => {
                let lines = content
                    .iter()
                    .map(|line| clean_line(line))
                    .filter(|line| !line.is_empty())
                    .collect();
                recipe.set_section(section, lines);
            }
            None if recipe.name.is_empty() => {
                recipe.name = clean_line(heading);
            }
            None => {}
        }
    }

    recipe
}

/// Strip leading list markers (`1.`, `2)`, `-`, `*`, `###`, `•`, `#1.`) and
/// surrounding whitespace from a line.
///
/// A marker is a run of `#`, `*`, `-`, `•` and digits. A run containing
/// digits only counts when followed by `.` or `)` and whitespace, so
/// quantities such as `2 cups flour` or `1.5 oz` are left alone. Markers are
/// stripped repeatedly, which makes the function idempotent.
pub fn clean_line(line: &str) -> String {
    let mut rest = line.trim();
    while let Some(stripped) = strip_list_marker(rest) {
        rest = stripped;
    }
    rest.to_string()
}

/// Match a heading against the section vocabulary.
pub fn section_for_heading(heading: &str) -> Option<Section> {
    Section::from_normalized(&normalize_heading(heading))
}

fn strip_list_marker(line: &str) -> Option<&str> {
    let run = line.len() - line.trim_start_matches(is_marker_char).len();
    if run == 0 {
        return None;
    }

    let marker = &line[..run];
    let rest = &line[run..];

    // Digits only form a marker as "1." or "2)", keeping "2 cups" and "1.5 oz"
    if marker.contains(|c: char| c.is_ascii_digit()) {
        let rest = rest.strip_prefix(['.', ')'])?;
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Some(rest.trim_start());
        }
        return None;
    }

    let rest = rest.strip_prefix('.').unwrap_or(rest);
    Some(rest.trim_start())
}

fn is_marker_char(c: char) -> bool {
    c.is_ascii_digit() || BULLET_CHARS.contains(&c)
}

fn normalize_heading(heading: &str) -> String {
    let lowered = heading.trim().to_lowercase();
    lowered.strip_suffix(':').unwrap_or(&lowered).trim().to_string()
}

fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
