//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use petz_domain::{Pedigree, PedigreeEntry, PetLink, PetProfile, Sibling};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a pet profile.
    pub fn format_profile(&self, profile: &PetProfile) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&profile_json(profile))?),
            OutputFormat::Table => Ok(self.format_profile_table(profile)),
        }
    }

    /// Format a pedigree.
    pub fn format_pedigree(&self, pedigree: &Pedigree) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&pedigree_json(pedigree))?),
            OutputFormat::Table => Ok(self.format_pedigree_table(pedigree)),
        }
    }

    fn format_profile_table(&self, profile: &PetProfile) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        builder.push_record(["ID".to_string(), profile.id.to_string()]);
        builder.push_record(["Show name".to_string(), profile.show_name.clone()]);
        builder.push_record(["Affix".to_string(), named(profile.affix_name.as_deref(), profile.affix_id)]);
        builder.push_record(["Pedigree #".to_string(), or_dash(profile.pedigree_number.as_deref())]);
        builder.push_record([
            "Registered".to_string(),
            profile
                .registration_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
        builder.push_record(["Age".to_string(), profile.age.to_string()]);
        builder.push_record(["Sex".to_string(), profile.sex.as_str().to_string()]);
        builder.push_record(["Game".to_string(), profile.game_version.as_str().to_string()]);
        builder.push_record(["Breed".to_string(), named(profile.breed_name.as_deref(), Some(profile.breed_id))]);
        builder.push_record(["Owner".to_string(), named(profile.owner_name.as_deref(), Some(profile.owner_id))]);
        builder.push_record(["Breeder".to_string(), named(profile.breeder_name.as_deref(), profile.breeder_id)]);

        let mut sections = vec![finish(builder)];

        sections.push(self.colorize("Offspring", "bold"));
        sections.push(self.format_links(&profile.offspring));

        sections.push(self.colorize("Siblings", "bold"));
        sections.push(self.format_siblings(&profile.siblings));

        sections.push(self.colorize("Pedigree", "bold"));
        sections.push(self.format_pedigree_table(&profile.pedigree));

        sections.join("\n")
    }

    fn format_links(&self, links: &[PetLink]) -> String {
        if links.is_empty() {
            return self.colorize("None recorded.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Show name", "Sex"]);
        for link in links {
            builder.push_record([link.id.to_string(), link.show_name.clone(), link.sex.as_str().to_string()]);
        }
        finish(builder)
    }

    fn format_siblings(&self, siblings: &[Sibling]) -> String {
        if siblings.is_empty() {
            return self.colorize("None recorded.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Show name", "Sex", "Kinship"]);
        for sibling in siblings {
            let kinship = if sibling.is_full() { "full" } else { "half" };
            builder.push_record([
                sibling.link.id.to_string(),
                sibling.link.show_name.clone(),
                sibling.link.sex.as_str().to_string(),
                kinship.to_string(),
            ]);
        }
        finish(builder)
    }

    fn format_pedigree_table(&self, pedigree: &Pedigree) -> String {
        if pedigree.known_ancestors() == 0 {
            return self.colorize("No ancestors recorded.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Gen", "Slot", "Line", "ID", "Pedigree #", "Show name"]);

        for (generation, slots) in pedigree.entries.iter().enumerate() {
            for (slot, entry) in slots.iter().enumerate() {
                let line = slot_path(generation, slot);
                let row = match entry {
                    Some(PedigreeEntry {
                        id,
                        pedigree_number,
                        show_name,
                    }) => [
                        (generation + 1).to_string(),
                        slot.to_string(),
                        line,
                        id.to_string(),
                        or_dash(pedigree_number.as_deref()),
                        show_name.clone(),
                    ],
                    None => [
                        (generation + 1).to_string(),
                        slot.to_string(),
                        line,
                        "-".to_string(),
                        "-".to_string(),
                        self.colorize("unknown", "dimmed"),
                    ],
                };
                builder.push_record(row);
            }
        }

        finish(builder)
    }

    /// Summary line for a pedigree: known ancestors out of all slots.
    pub fn pedigree_summary(&self, pedigree: &Pedigree) -> String {
        let slots: usize = pedigree.entries.iter().map(Vec::len).sum();
        self.colorize(
            &format!(
                "ℹ {} of {} ancestors known across {} generations",
                pedigree.known_ancestors(),
                slots,
                pedigree.generations()
            ),
            "blue",
        )
    }

    /// Colorize text if colors are enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "yellow" => text.yellow().to_string(),
            "blue" => text.blue().to_string(),
            "bold" => text.bold().to_string(),
            "dimmed" => text.dimmed().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Sire/dam path from the subject to a pedigree slot, nearest parent first.
///
/// Generation 0 slot 1 is the dam (`D`); generation 1 slot 2 is the dam's
/// sire (`DS`).
pub fn slot_path(generation: usize, slot: usize) -> String {
    (0..=generation)
        .rev()
        .map(|bit| if (slot >> bit) & 1 == 0 { 'S' } else { 'D' })
        .collect()
}

fn finish(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn named(name: Option<&str>, id: Option<i64>) -> String {
    match (name, id) {
        (Some(name), _) => name.to_string(),
        (None, Some(id)) => format!("#{}", id),
        (None, None) => "-".to_string(),
    }
}

fn link_json(link: &PetLink) -> serde_json::Value {
    serde_json::json!({
        "id": link.id.value(),
        "showName": link.show_name,
        "sex": link.sex.as_str(),
    })
}

fn pedigree_json(pedigree: &Pedigree) -> serde_json::Value {
    let entries: Vec<Vec<serde_json::Value>> = pedigree
        .entries
        .iter()
        .map(|generation| {
            generation
                .iter()
                .map(|slot| match slot {
                    Some(entry) => serde_json::json!({
                        "id": entry.id.value(),
                        "pedigreeNumber": entry.pedigree_number,
                        "showName": entry.show_name,
                    }),
                    None => serde_json::Value::Null,
                })
                .collect()
        })
        .collect();

    serde_json::json!({ "entries": entries })
}

fn profile_json(profile: &PetProfile) -> serde_json::Value {
    let offspring: Vec<serde_json::Value> = profile.offspring.iter().map(link_json).collect();
    let siblings: Vec<serde_json::Value> = profile
        .siblings
        .iter()
        .map(|s| {
            let mut value = link_json(&s.link);
            value["full"] = serde_json::Value::Bool(s.is_full());
            value
        })
        .collect();

    serde_json::json!({
        "id": profile.id.value(),
        "showName": profile.show_name,
        "affixId": profile.affix_id,
        "affixName": profile.affix_name,
        "pedigreeNumber": profile.pedigree_number,
        "registrationDate": profile.registration_date,
        "age": profile.age,
        "sex": profile.sex.as_str(),
        "gameVersion": profile.game_version.as_str(),
        "breedId": profile.breed_id,
        "breedName": profile.breed_name,
        "ownerId": profile.owner_id,
        "ownerName": profile.owner_name,
        "breederId": profile.breeder_id,
        "breederName": profile.breeder_name,
        "offspring": offspring,
        "siblings": siblings,
        "pedigree": pedigree_json(&profile.pedigree),
    })
}
