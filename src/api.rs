//! PokeAPI client

use std::sync::OnceLock;

use serde::Deserialize;

use crate::state::{PokemonDetail, PokemonStat, PokemonType};
use crate::theme::Rgb;

const API_BASE: &str = "https://pokeapi.co/api/v2";
const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    id: u16,
    name: String,
    stats: Vec<PokemonStatSlot>,
    abilities: Vec<PokemonAbilitySlot>,
    types: Vec<PokemonTypeSlot>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonStatSlot {
    base_stat: u16,
    stat: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonAbilitySlot {
    ability: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: TypeResource,
}

#[derive(Clone, Debug, Deserialize)]
struct TypeResource {
    name: PokemonType,
}

/// Fetch error type
#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    Malformed(serde_json::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "Request failed: {}", e),
            FetchError::Malformed(e) => write!(f, "Unexpected response: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Official-artwork URI for the given Pokedex number
pub fn artwork_url(id: u16) -> String {
    format!("{ARTWORK_BASE}/{id}.png")
}

/// Fetch one Pokemon and transform the payload into the view's record
pub async fn fetch_pokemon(id: u16) -> Result<PokemonDetail, FetchError> {
    let url = format!("{API_BASE}/pokemon/{id}");
    let response = http_client()
        .get(&url)
        .send()
        .await
        .map_err(FetchError::Request)?;
    let response = response.error_for_status().map_err(FetchError::Request)?;
    let bytes = response.bytes().await.map_err(FetchError::Request)?;
    let payload: PokemonResponse =
        serde_json::from_slice(&bytes).map_err(FetchError::Malformed)?;
    Ok(detail_from_response(payload))
}

fn detail_from_response(response: PokemonResponse) -> PokemonDetail {
    let artwork = artwork_url(response.id);
    PokemonDetail {
        id: response.id,
        name: response.name,
        types: response
            .types
            .into_iter()
            .map(|slot| slot.type_info.name)
            .collect(),
        stats: response
            .stats
            .into_iter()
            .map(|slot| PokemonStat {
                name: slot.stat.name,
                value: slot.base_stat,
            })
            .collect(),
        abilities: response
            .abilities
            .into_iter()
            .map(|slot| slot.ability.name)
            .collect(),
        artwork,
        // Accent stays neutral until the reducer resolves it against the theme
        color: Rgb::default(),
    }
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}
