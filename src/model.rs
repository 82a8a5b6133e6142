use serde::{Deserialize, Serialize};
use std::fmt;

/// A recipe reconstructed from model output.
///
/// Every collection is always present (possibly empty) and `name` is the
/// empty string when no title could be recovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub equipment_needed: Vec<String>,
    pub nutritional_information: Vec<String>,
    pub notes: Vec<String>,
}

/// The closed set of section headings a recipe answer may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Ingredients,
    Instructions,
    EquipmentNeeded,
    NutritionalInformation,
    Notes,
}

impl Section {
    /// Sections in the order the prompt asks the model to emit them
    pub const ALL: [Section; 5] = [
        Section::Ingredients,
        Section::Instructions,
        Section::EquipmentNeeded,
        Section::NutritionalInformation,
        Section::Notes,
    ];

    /// Canonical heading text, without the trailing colon
    pub fn title(self) -> &'static str {
        match self {
            Section::Ingredients => "Ingredients",
            Section::Instructions => "Instructions",
            Section::EquipmentNeeded => "Equipment Needed",
            Section::NutritionalInformation => "Nutritional Information",
            Section::Notes => "Notes",
        }
    }

    /// Match an already-normalized (lower-cased, colon-stripped) heading.
    pub fn from_normalized(heading: &str) -> Option<Section> {
        Self::ALL
            .into_iter()
            .find(|section| section.title().eq_ignore_ascii_case(heading))
    }

    fn numbered(self) -> bool {
        matches!(self, Section::Instructions)
    }
}

impl Recipe {
    /// Lines assigned to `section`
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Ingredients => &self.ingredients,
            Section::Instructions => &self.instructions,
            Section::EquipmentNeeded => &self.equipment_needed,
            Section::NutritionalInformation => &self.nutritional_information,
            Section::Notes => &self.notes,
        }
    }

    /// Replace the lines of `section`.
    pub fn set_section(&mut self, section: Section, lines: Vec<String>) {
        let slot = match section {
            Section::Ingredients => &mut self.ingredients,
            Section::Instructions => &mut self.instructions,
            Section::EquipmentNeeded => &mut self.equipment_needed,
            Section::NutritionalInformation => &mut self.nutritional_information,
            Section::Notes => &mut self.notes,
        };
        *slot = lines;
    }

    /// True when nothing at all was recovered from the model answer.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && Section::ALL.iter().all(|s| self.section(*s).is_empty())
    }

    /// Format the recipe using the five-section template the prompt requests.
    ///
    /// Ingredients, equipment, nutrition and notes are bulleted with `- `;
    /// instructions are numbered. Feeding the output back through
    /// [`crate::parser::parse`] reproduces the recipe.
    pub fn to_template_text(&self) -> String {
        let mut blocks = Vec::with_capacity(Section::ALL.len() + 1);

        if !self.name.is_empty() {
            blocks.push(self.name.clone());
        }

        for section in Section::ALL {
            let mut block = format!("{}:", section.title());
            for (index, line) in self.section(section).iter().enumerate() {
                if section.numbered() {
                    block.push_str(&format!("\n{}. {}", index + 1, line));
                } else {
                    block.push_str(&format!("\n- {}", line));
                }
            }
            blocks.push(block);
        }

        blocks.join("\n\n")
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_template_text())
    }
}
