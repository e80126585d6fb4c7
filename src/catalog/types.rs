use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Wire format of `GET {base}/pokemon/{name}`, reduced to the fields we use.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatureResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    pub height: u32,
    pub weight: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Normalized record shown on the result panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    /// High-resolution artwork when the catalog has it, the default sprite
    /// otherwise, empty when neither exists.
    pub image_url: String,
    /// Elemental type names, catalog order.
    pub types: Vec<String>,
    /// Decimeters, as served by the catalog.
    pub height: u32,
    /// Hectograms, as served by the catalog.
    pub weight: u32,
    /// Ability names, catalog order.
    pub abilities: Vec<String>,
}

impl From<CreatureResponse> for Creature {
    fn from(raw: CreatureResponse) -> Self {
        let image_url = raw
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default)
            .or(raw.sprites.front_default)
            .unwrap_or_default();

        Self {
            id: raw.id,
            name: raw.name,
            image_url,
            types: raw.types.into_iter().map(|slot| slot.kind.name).collect(),
            height: raw.height,
            weight: raw.weight,
            abilities: raw
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
        }
    }
}

impl Creature {
    /// Catalog id the way the dex prints it, e.g. `#025`.
    pub fn id_display(&self) -> String {
        format!("#{:03}", self.id)
    }

    /// Height in meters with one decimal, e.g. `0.4 m`.
    pub fn height_display(&self) -> String {
        format!("{:.1} m", f64::from(self.height) / 10.0)
    }

    /// Weight in kilograms with one decimal, e.g. `6.0 kg`.
    pub fn weight_display(&self) -> String {
        format!("{:.1} kg", f64::from(self.weight) / 10.0)
    }

    /// Catalog names are lowercase slugs; capitalize for display.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Plain-text rendering for one-shot lookups.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.display_name(), self.id_display());
        let _ = writeln!(out, "Types:     {}", self.types.join(", "));
        let _ = writeln!(out, "Height:    {}", self.height_display());
        let _ = writeln!(out, "Weight:    {}", self.weight_display());
        let _ = writeln!(out, "Abilities: {}", self.abilities.join(", "));
        if !self.image_url.is_empty() {
            let _ = writeln!(out, "Sprite:    {}", self.image_url);
        }
        out
    }
}
