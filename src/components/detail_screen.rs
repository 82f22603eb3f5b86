use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::{DataResource, EventKind};
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::detail_header::HEADER_OVERHEAD;
use super::{Component, DetailBody, DetailBodyProps, DetailHeader, DetailHeaderProps};
use crate::action::Action;
use crate::state::{AppState, PokemonDetail};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Loading placeholder frames, advanced by the tick subscription.
const LOADING_FRAMES: [&str; 4] = ["\u{25d0}", "\u{25d3}", "\u{25d1}", "\u{25d2}"];

/// FIGlet name rows plus header chrome.
const HEADER_HEIGHT: u16 = 6 + HEADER_OVERHEAD;

/// Props for DetailScreen - read-only view of state
pub struct DetailScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The detail screen: pure mapping from view-state to a frame
#[derive(Default)]
pub struct DetailScreen;

impl Component<Action> for DetailScreen {
    type Props<'a> = DetailScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::NavigateBack),
                KeyCode::Char('n') => Some(Action::PokemonNext),
                KeyCode::Char('p') => Some(Action::PokemonPrev),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DetailScreenProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        match DetailView::from_state(props.state) {
            DetailView::Ready(detail) => render_ready(frame, chunks[0], props.state, detail),
            DetailView::Error(error) => render_error(frame, chunks[0], props.state, error),
            DetailView::Loading => render_loading(frame, chunks[0], props.state),
        }

        render_help_bar(frame, chunks[1], props.state);
    }
}

enum DetailView<'a> {
    Ready(&'a PokemonDetail),
    Error(&'a str),
    Loading,
}

impl<'a> DetailView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.detail {
            DataResource::Loaded(detail) => DetailView::Ready(detail),
            DataResource::Failed(error) => DetailView::Error(error),
            DataResource::Loading | DataResource::Empty => DetailView::Loading,
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, detail: &PokemonDetail) {
    let chunks = Layout::vertical([
        Constraint::Max(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut header = DetailHeader;
    header.render(
        frame,
        chunks[0],
        DetailHeaderProps {
            detail,
            theme: &state.theme,
        },
    );

    let mut body = DetailBody;
    body.render(frame, chunks[2], DetailBodyProps { detail });
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Animated placeholder
        Constraint::Length(1), // blank
        Constraint::Length(1), // Label
    ])
    .flex(Flex::Center)
    .split(area);

    let spinner = LOADING_FRAMES[state.tick_count as usize % LOADING_FRAMES.len()];
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(spinner, Style::default().fg(Color::Yellow))).centered(),
        ),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                "Loading ...",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ),
        chunks[2],
    );
}

fn render_error(frame: &mut Frame, area: Rect, state: &AppState, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // alert
        Constraint::Length(1), // detail
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(Paragraph::new(Line::from(ERROR_ICON).centered()), chunks[0]);

    let alert = state.message.as_deref().unwrap_or("Error");
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                alert.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            ))
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "esc",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to go back", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[4],
    );
}

fn render_help_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let alert = state.message.clone().unwrap_or_default();
    let alert_span = Span::styled(alert, Style::default().fg(Color::Rgb(228, 176, 88)));
    let alert_items = [StatusBarItem::span(alert_span)];

    let mut status_bar = StatusBar::new();
    <StatusBar as Component<Action>>::render(
        &mut status_bar,
        frame,
        area,
        StatusBarProps {
            left: StatusBarSection::items(&alert_items),
            center: StatusBarSection::hints(&[
                StatusBarHint::new("esc", "back"),
                StatusBarHint::new("n", "next"),
                StatusBarHint::new("p", "prev"),
                StatusBarHint::new("q", "quit"),
            ]),
            right: StatusBarSection::empty(),
            style: StatusBarStyle::default(),
            is_focused: false,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PokemonStat, PokemonType};
    use crate::theme::Theme;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn loaded_state() -> AppState {
        let theme = Theme::default();
        let detail = PokemonDetail {
            id: 25,
            name: "pikachu".into(),
            types: vec![PokemonType::Electric],
            stats: vec![PokemonStat {
                name: "speed".into(),
                value: 90,
            }],
            abilities: vec!["static".into()],
            artwork: crate::api::artwork_url(25),
            color: theme.color_for(PokemonType::Electric),
        };
        let mut state = AppState::new(25, theme);
        state.detail = DataResource::Loaded(detail);
        state
    }

    #[test]
    fn test_handle_event_back() {
        let mut component = DetailScreen;
        let state = AppState::default();
        let props = DetailScreenProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(
                &EventKind::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
                props,
            )
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::NavigateBack);
    }

    #[test]
    fn test_handle_event_browse() {
        let mut component = DetailScreen;
        let state = AppState::default();

        let actions: Vec<_> = component
            .handle_event(
                &EventKind::Key(key("n")),
                DetailScreenProps {
                    state: &state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.assert_first(Action::PokemonNext);

        let actions: Vec<_> = component
            .handle_event(
                &EventKind::Key(key("p")),
                DetailScreenProps {
                    state: &state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.assert_first(Action::PokemonPrev);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = DetailScreen;
        let state = AppState::default();
        let props = DetailScreenProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("q")), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_loading() {
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
    fn test_render_loaded() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = DetailScreen;
        let state = loaded_state();

        let output = render.render_to_string_plain(|frame| {
            let props = DetailScreenProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("#25"), "Should show the id");
        assert!(output.contains("electric"), "Should show the type badge");
        assert!(output.contains("Base Stats"), "Should show stats heading");
        assert!(output.contains("Abilities"), "Should show abilities heading");
    }
}
