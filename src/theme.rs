//! Type color table, passed into the state at construction instead of
//! being looked up through ambient context.

use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::PokemonType;

const NEUTRAL: Rgb = Rgb(0x8a, 0x8a, 0x8a);

/// A resolved card color. Kept as raw channels so the state stays
/// serializable for the debug session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }

    /// Scale all channels toward black; `factor` in 0.0..=1.0.
    pub fn shade(self, factor: f32) -> Rgb {
        let scale = |channel: u8| (channel as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Rgb(scale(self.0), scale(self.1), scale(self.2))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        NEUTRAL
    }
}

/// Card colors for all 18 type tags plus the neutral fallback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Theme {
    card: Vec<(PokemonType, Rgb)>,
    neutral: Rgb,
}

impl Theme {
    pub fn color_for(&self, kind: PokemonType) -> Rgb {
        self.card
            .iter()
            .find(|(entry, _)| *entry == kind)
            .map(|(_, color)| *color)
            .unwrap_or(self.neutral)
    }

    /// Primary type wins; neutral when the list is empty.
    pub fn accent_for(&self, types: &[PokemonType]) -> Rgb {
        types
            .first()
            .map(|kind| self.color_for(*kind))
            .unwrap_or(self.neutral)
    }

    pub fn neutral(&self) -> Rgb {
        self.neutral
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            card: vec![
                (PokemonType::Grass, Rgb(0x7a, 0xc7, 0x4c)),
                (PokemonType::Fire, Rgb(0xee, 0x81, 0x30)),
                (PokemonType::Water, Rgb(0x63, 0x90, 0xf0)),
                (PokemonType::Poison, Rgb(0xa3, 0x3e, 0xa1)),
                (PokemonType::Normal, Rgb(0xa8, 0xa7, 0x7a)),
                (PokemonType::Bug, Rgb(0xa6, 0xb9, 0x1a)),
                (PokemonType::Flying, Rgb(0xa9, 0x8f, 0xf3)),
                (PokemonType::Electric, Rgb(0xf7, 0xd0, 0x2c)),
                (PokemonType::Ground, Rgb(0xe2, 0xbf, 0x65)),
                (PokemonType::Fairy, Rgb(0xd6, 0x85, 0xad)),
                (PokemonType::Fighting, Rgb(0xc2, 0x2e, 0x28)),
                (PokemonType::Psychic, Rgb(0xf9, 0x55, 0x87)),
                (PokemonType::Rock, Rgb(0xb6, 0xa1, 0x36)),
                (PokemonType::Ghost, Rgb(0x73, 0x57, 0x97)),
                (PokemonType::Ice, Rgb(0x96, 0xd9, 0xd6)),
                (PokemonType::Dragon, Rgb(0x6f, 0x35, 0xfc)),
                (PokemonType::Dark, Rgb(0x70, 0x57, 0x46)),
                (PokemonType::Steel, Rgb(0xb7, 0xb7, 0xce)),
            ],
            neutral: NEUTRAL,
        }
    }
}
