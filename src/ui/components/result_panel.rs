use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::engine::predictor::PredictionResult;
use crate::ui::theme::Theme;

pub struct ResultPanel<'a> {
    result: Option<&'a PredictionResult>,
    stale: bool,
    theme: &'a Theme,
}

impl<'a> ResultPanel<'a> {
    pub fn new(result: Option<&'a PredictionResult>, stale: bool, theme: &'a Theme) -> Self {
        Self {
            result,
            stale,
            theme,
        }
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Prediction ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.result {
            None => vec![Line::from(Span::styled(
                " Adjust your details, then press Enter.",
                Style::default().fg(colors.text_pending()),
            ))],
            Some(result) => {
                let letter_color = colors.letter(result.letter);
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(" Predicted Final Grade: ", Style::default().fg(colors.fg())),
                        Span::styled(
                            result.grade_text(),
                            Style::default()
                                .fg(letter_color)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(" ({})", result.letter),
                            Style::default()
                                .fg(letter_color)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled(" Feedback: ", Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD)),
                        Span::styled(
                            format!("{} {}", result.letter.icon(), result.feedback),
                            Style::default().fg(colors.fg()),
                        ),
                    ]),
                ];
                if self.stale {
                    lines.push(Line::from(Span::styled(
                        " Inputs changed since this prediction. Press Enter to update.",
                        Style::default().fg(colors.warning()),
                    )));
                }
                lines
            }
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
