//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, FETCH_ALERT};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Detail actions =====
        Action::DetailFetch => {
            state.detail = DataResource::Loading;
            state.message = None;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::FetchDetail {
                id: state.pokemon_id,
            })
        }

        Action::DetailDidLoad { id, mut detail } => {
            // Completions for a superseded identifier are a benign no-op
            if id != state.pokemon_id {
                return DispatchResult::unchanged();
            }
            detail.color = state.theme.accent_for(&detail.types);
            state.detail = DataResource::Loaded(detail);
            state.message = None;
            DispatchResult::changed()
        }

        Action::DetailDidError { id, error } => {
            if id != state.pokemon_id {
                return DispatchResult::unchanged();
            }
            state.detail = DataResource::Failed(error);
            state.message = Some(FETCH_ALERT.to_string());
            DispatchResult::changed()
        }

        // ===== Pokemon actions =====
        Action::PokemonNext => select_pokemon(state, state.pokemon_id.saturating_add(1)),

        Action::PokemonPrev => {
            if state.pokemon_id <= 1 {
                return DispatchResult::unchanged();
            }
            select_pokemon(state, state.pokemon_id - 1)
        }

        // ===== Global actions =====
        Action::NavigateBack => DispatchResult::unchanged(),

        Action::Tick => {
            if state.detail.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn select_pokemon(state: &mut AppState, id: u16) -> DispatchResult<Effect> {
    state.pokemon_id = id;
    state.detail = DataResource::Loading;
    state.message = None;
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::FetchDetail { id })
}
