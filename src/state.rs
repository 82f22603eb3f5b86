//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::theme::{Rgb, Theme};

/// Closed set of type categories served by the catalog; doubles as the
/// lookup key into the theme's color table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Grass,
    Fire,
    Water,
    Poison,
    Normal,
    Bug,
    Flying,
    Electric,
    Ground,
    Fairy,
    Fighting,
    Psychic,
    Rock,
    Ghost,
    Ice,
    Dragon,
    Dark,
    Steel,
}

impl PokemonType {
    pub fn label(self) -> &'static str {
        match self {
            PokemonType::Grass => "grass",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Poison => "poison",
            PokemonType::Normal => "normal",
            PokemonType::Bug => "bug",
            PokemonType::Flying => "flying",
            PokemonType::Electric => "electric",
            PokemonType::Ground => "ground",
            PokemonType::Fairy => "fairy",
            PokemonType::Fighting => "fighting",
            PokemonType::Psychic => "psychic",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Ice => "ice",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
        }
    }
}

/// One fetched detail record, view-local and rebuilt on every fetch.
///
/// `types` keeps the service order; the first entry drives the derived
/// `color`. `artwork` is the official-artwork URI derived from `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PokemonDetail {
    pub id: u16,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub stats: Vec<PokemonStat>,
    pub abilities: Vec<String>,
    pub artwork: String,
    pub color: Rgb,
}

impl PokemonDetail {
    pub fn primary_type(&self) -> Option<PokemonType> {
        self.types.first().copied()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PokemonStat {
    pub name: String,
    pub value: u16,
}

/// Fixed alert raised once per failed fetch.
pub const FETCH_ALERT: &str = "Oops, something went wrong!";

/// Animation timing for the loading placeholder.
pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Identifier supplied by the hosting navigation layer
    #[debug(section = "Detail", label = "Id")]
    pub pokemon_id: u16,

    /// Detail lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Detail", label = "Data", debug_fmt)]
    pub detail: DataResource<PokemonDetail>,

    /// Alert raised by the most recent failed fetch
    #[debug(section = "Detail", label = "Alert", debug_fmt)]
    pub message: Option<String>,

    /// Type color table, injected at construction
    #[debug(skip)]
    pub theme: Theme,

    /// Animation frame counter for the loading placeholder
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    /// Create state for the given identifier with an explicit color table
    pub fn new(pokemon_id: u16, theme: Theme) -> Self {
        Self {
            pokemon_id,
            detail: DataResource::Empty,
            message: None,
            theme,
            tick_count: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(25, Theme::default())
    }
}
