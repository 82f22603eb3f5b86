//! Render snapshot tests using RenderHarness
//!
//! FRAMEWORK PATTERN: RenderHarness
//! - Create harness with terminal dimensions
//! - Render component to test buffer
//! - Convert to string for snapshot testing

use pokedex::{
    api,
    components::{Component, DetailScreen, DetailScreenProps},
    state::{AppState, FETCH_ALERT, PokemonDetail, PokemonStat, PokemonType},
    theme::Theme,
};
use tui_dispatch::{DataResource, testing::*};

fn charizard() -> PokemonDetail {
    let theme = Theme::default();
    PokemonDetail {
        id: 6,
        name: "charizard".into(),
        types: vec![PokemonType::Fire, PokemonType::Flying],
        stats: vec![
            PokemonStat {
                name: "hp".into(),
                value: 78,
            },
            PokemonStat {
                name: "attack".into(),
                value: 84,
            },
            PokemonStat {
                name: "special-attack".into(),
                value: 109,
            },
        ],
        abilities: vec!["blaze".into(), "solar-power".into()],
        artwork: api::artwork_url(6),
        color: theme.color_for(PokemonType::Fire),
    }
}

fn state_with(detail: PokemonDetail) -> AppState {
    let mut state = AppState::new(detail.id, Theme::default());
    state.detail = DataResource::Loaded(detail);
    state
}

#[test]
fn test_render_loading_state() {
    let mut render = RenderHarness::new(60, 24);
    let mut component = DetailScreen;

    let mut state = AppState::default();
    state.detail = DataResource::Loading;

    let output = render.render_to_string_plain(|frame| {
        let props = DetailScreenProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Loading"), "Should show loading label");
}

#[test]
fn test_render_detail_header() {
    let mut render = RenderHarness::new(60, 24);
    let mut component = DetailScreen;
    let state = state_with(charizard());

    let output = render.render_to_string_plain(|frame| {
        let props = DetailScreenProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    // Name renders as FIGlet ASCII art; the id line is plain text
    assert!(output.contains("#6"), "Should show the prefixed id");
    assert!(output.contains("back"), "Should show the back control");
}

#[test]
fn test_render_one_badge_per_type() {
    let mut render = RenderHarness::new(60, 24);
    let mut component = DetailScreen;
    let state = state_with(charizard());

    let output = render.render_to_string_plain(|frame| {
        let props = DetailScreenProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("fire"), "Should show the fire badge");
    assert!(output.contains("flying"), "Should show the flying badge");
    assert_eq!(
        output.matches("flying").count(),
        1,
        "Exactly one badge per type entry"
    );
}

#[test]
fn test_render_stats_and_abilities() {
    let mut render = RenderHarness::new(60, 24);
    let mut component = DetailScreen;
    let state = state_with(charizard());

    let output = render.render_to_string_plain(|frame| {
        let props = DetailScreenProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Base Stats"), "Should show stats heading");
    assert!(output.contains("ATK"), "Should show the attack row");
    assert!(output.contains("109"), "Value above 100 prints uncapped");
    assert!(output.contains("Abilities"), "Should show abilities heading");
    assert!(output.contains("Solar Power"), "Should list abilities");
}

#[test]
fn test_render_is_idempotent() {
    let mut render = RenderHarness::new(60, 24);
    let mut component = DetailScreen;
    let state = state_with(charizard());

    let first = render.render_to_string_plain(|frame| {
        let props = DetailScreenProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });
    let second = render.render_to_string_plain(|frame| {
        let props = DetailScreenProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert_eq!(first, second, "Same state must render the same frame");
}

#[test]
fn test_render_error_state() {
    let mut render = RenderHarness::new(60, 24);
    let mut component = DetailScreen;

    let mut state = AppState::default();
    state.detail = DataResource::Failed("Request failed: network down".into());
    state.message = Some(FETCH_ALERT.to_string());

    let output = render.render_to_string_plain(|frame| {
        let props = DetailScreenProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains(FETCH_ALERT), "Should show the alert");
    assert!(
        output.contains("network down"),
        "Should show the underlying error"
    );
    assert!(output.contains("go back"), "Should show the back hint");
}

#[test]
fn test_render_empty_types_without_badges() {
    let mut render = RenderHarness::new(60, 24);
    let mut component = DetailScreen;

    let mut detail = charizard();
    detail.types.clear();
    detail.color = Theme::default().neutral();
    let state = state_with(detail);

    let output = render.render_to_string_plain(|frame| {
        let props = DetailScreenProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(!output.contains("fire"), "No badges without type entries");
    assert!(output.contains("Base Stats"), "Body still renders");
}

#[test]
fn test_render_help_bar() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = DetailScreen;
    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = DetailScreenProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("back"), "Should show back hint");
    assert!(output.contains("next"), "Should show next hint");
    assert!(output.contains("quit"), "Should show quit hint");
}
