use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::{Component, format_name};
use crate::action::Action;
use crate::state::PokemonDetail;
use crate::theme::{Rgb, Theme};

pub struct DetailHeader;

pub struct DetailHeaderProps<'a> {
    pub detail: &'a PokemonDetail,
    pub theme: &'a Theme,
}

/// Rows besides the FIGlet name: chrome line + id line + badge line.
pub const HEADER_OVERHEAD: u16 = 3;

/// Card backdrop brightness relative to the accent.
const BACKDROP_SHADE: f32 = 0.25;

fn name_gradient(accent: Rgb) -> Fill {
    let base = ArtColor::rgb(accent.0, accent.1, accent.2);
    let tint = base.interpolate(ArtColor::rgb(255, 255, 255), 0.45);
    Fill::Linear(LinearGradient::horizontal(base, tint))
}

impl Component<Action> for DetailHeader {
    type Props<'a> = DetailHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let accent = props.detail.color;

        let backdrop = Block::default().style(Style::default().bg(accent.shade(BACKDROP_SHADE).color()));
        frame.render_widget(backdrop, area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Back control + circle motif
            Constraint::Fill(1),   // FIGlet name
            Constraint::Length(1), // #id
            Constraint::Length(1), // Type badges
        ])
        .split(area);

        let chrome = Layout::horizontal([
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Length(8),
        ])
        .split(chunks[0]);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "\u{2039} back",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))),
            chrome[0],
        );
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(
                    "\u{00b7}\u{00b7}\u{00b7} \u{25ef} \u{00b7}\u{00b7}\u{00b7}",
                    Style::default().fg(accent.color()),
                ))
                .centered(),
            ),
            chrome[1],
        );

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(name_gradient(accent));
        let formatted_name = format_name(&props.detail.name);
        let name_widget = ArtBox::new(&renderer, &formatted_name);
        frame.render_widget(name_widget, chunks[1]);

        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(
                    format!("#{}", props.detail.id),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ))
                .centered(),
            ),
            chunks[2],
        );

        // One badge per type entry, each colored by its own tag
        let mut spans = Vec::new();
        for kind in &props.detail.types {
            spans.push(Span::styled(
                format!(" {} ", kind.label()),
                Style::default()
                    .bg(props.theme.color_for(*kind).color())
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), chunks[3]);
    }
}
