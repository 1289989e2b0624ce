use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::input::{InputField, PredictionInput};
use crate::ui::theme::Theme;

/// The four slider controls.
pub struct InputPanel<'a> {
    input: &'a PredictionInput,
    selected: InputField,
    theme: &'a Theme,
}

impl<'a> InputPanel<'a> {
    pub fn new(input: &'a PredictionInput, selected: InputField, theme: &'a Theme) -> Self {
        Self {
            input,
            selected,
            theme,
        }
    }
}

impl Widget for InputPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Your Details ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 10 || inner.height == 0 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                InputField::ALL
                    .iter()
                    .map(|_| Constraint::Length(3))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (field, row) in InputField::ALL.iter().zip(rows.iter()) {
            let is_selected = *field == self.selected;
            let indicator = if is_selected { ">" } else { " " };
            let value = self.input.get(*field);

            let label_style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(if is_selected { Modifier::BOLD } else { Modifier::empty() });
            let label = Line::from(vec![
                Span::styled(format!(" {indicator} {}: ", field.label()), label_style),
                Span::styled(
                    format!("{value}"),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({}-{})", field.min(), field.max()),
                    Style::default().fg(colors.text_pending()),
                ),
            ]);
            Paragraph::new(label).render(Rect { height: 1, ..*row }, buf);

            if row.height < 2 {
                continue;
            }
            let track = Rect::new(row.x + 3, row.y + 1, row.width.saturating_sub(6), 1);
            render_track(buf, track, self.input.ratio(*field), is_selected, self.theme);
        }
    }
}

fn render_track(buf: &mut Buffer, track: Rect, ratio: f64, selected: bool, theme: &Theme) {
    let colors = &theme.colors;
    if track.width == 0 {
        return;
    }

    let filled = (ratio.clamp(0.0, 1.0) * f64::from(track.width)).round() as u16;
    let fill_color = if selected { colors.accent() } else { colors.accent_dim() };
    for x in track.x..track.x + track.width {
        let (symbol, style) = if x < track.x + filled {
            ("\u{2501}", Style::default().fg(fill_color))
        } else {
            ("\u{2500}", Style::default().fg(colors.bar_empty()))
        };
        buf[(x, track.y)].set_symbol(symbol).set_style(style);
    }

    let knob_x = (track.x + filled).min(track.x + track.width - 1);
    buf[(knob_x, track.y)]
        .set_symbol("\u{25cf}")
        .set_style(Style::default().fg(if selected { colors.accent() } else { colors.fg() }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_labels_and_values() {
        let theme = Theme::default();
        let input = PredictionInput::default();
        let area = Rect::new(0, 0, 50, 14);
        let mut buf = Buffer::empty(area);
        InputPanel::new(&input, InputField::Attendance, &theme).render(area, &mut buf);

        let all: String = (0..area.height).map(|y| row_text(&buf, y)).collect();
        assert!(all.contains("Hours Studied Daily: 5"));
        assert!(all.contains("Past Score (%): 60"));
        assert!(all.contains("> Attendance (%): 80"));
        assert!(all.contains("Sleep Hours Daily: 7"));
        assert!(all.contains("(0-12)"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let theme = Theme::default();
        let input = PredictionInput::default();
        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        InputPanel::new(&input, InputField::StudyHours, &theme).render(area, &mut buf);
    }
}
