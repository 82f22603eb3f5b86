//! Actions for the detail view lifecycle

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::PokemonDetail;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Detail category =====
    /// Intent: fetch the record for the current identifier (triggers async task)
    DetailFetch,

    /// Result: record loaded for the identifier it was fetched with
    DetailDidLoad { id: u16, detail: PokemonDetail },

    /// Result: fetch failed
    DetailDidError { id: u16, error: String },

    // ===== Pokemon category =====
    /// Browse to the next identifier; re-keys the fetch
    PokemonNext,

    /// Browse to the previous identifier
    PokemonPrev,

    // ===== Uncategorized (global) =====
    /// Delegate to the hosting navigation layer: pop this view
    NavigateBack,

    /// Periodic tick for the loading placeholder
    Tick,

    /// Exit the application
    Quit,
}
