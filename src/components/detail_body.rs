use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::{Component, format_name};
use crate::action::Action;
use crate::state::PokemonDetail;

pub struct DetailBody;

pub struct DetailBodyProps<'a> {
    pub detail: &'a PokemonDetail,
}

const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
const TRACK: Color = Color::Rgb(58, 66, 76);

/// Bar track width in cells.
const BAR_WIDTH: u16 = 20;

/// Values render capped at this magnitude; the printed number is not capped.
const BAR_CAP: u16 = 100;

/// Filled cells for a stat value. Monotonically non-decreasing in `value`.
pub fn stat_bar_cells(value: u16, track: u16) -> u16 {
    (value.min(BAR_CAP) as u32 * track as u32 / BAR_CAP as u32) as u16
}

fn short_label(name: &str) -> String {
    match name {
        "hp" => " HP".to_string(),
        "attack" => "ATK".to_string(),
        "defense" => "DEF".to_string(),
        "special-attack" => "SAT".to_string(),
        "special-defense" => "SDF".to_string(),
        "speed" => "SPD".to_string(),
        _ => name.to_ascii_uppercase(),
    }
}

impl Component<Action> for DetailBody {
    type Props<'a> = DetailBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let accent = props.detail.color.color();
        let heading = Style::default().fg(accent).add_modifier(Modifier::BOLD);

        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled("Base Stats", heading)));
        lines.push(Line::from(" "));
        for stat in &props.detail.stats {
            let filled = stat_bar_cells(stat.value, BAR_WIDTH);
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:>4} ", short_label(&stat.name)),
                    Style::default().fg(TEXT_DIM),
                ),
                Span::styled(format!("{:>3} ", stat.value), Style::default().fg(TEXT_MAIN)),
                Span::styled(
                    "\u{2588}".repeat(filled as usize),
                    Style::default().fg(accent),
                ),
                Span::styled(
                    "\u{2591}".repeat((BAR_WIDTH - filled) as usize),
                    Style::default().fg(TRACK),
                ),
            ]));
        }
        lines.push(Line::from(" "));
        lines.push(Line::from(Span::styled("Abilities", heading)));
        lines.push(Line::from(" "));
        for ability in &props.detail.abilities {
            lines.push(Line::from(Span::styled(
                format!(" {}", format_name(ability)),
                Style::default().fg(TEXT_MAIN),
            )));
        }

        frame.render_widget(Paragraph::new(Text::from(lines)), area);
    }
}
