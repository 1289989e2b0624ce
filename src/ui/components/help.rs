use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::theme::Theme;

const BINDINGS: &[(&str, &str)] = &[
    ("Up/k, Down/j", "Select a control"),
    ("Left/h, Right/l", "Adjust by 1"),
    ("PgUp, PgDn", "Adjust by a larger step"),
    ("Home, End", "Jump to minimum / maximum"),
    ("Enter, p", "Predict grade"),
    ("r", "Reset controls to defaults"),
    ("t", "Cycle theme"),
    ("?", "Toggle this help"),
    ("q, Esc", "Quit"),
];

pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" Keys ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from("")];
        lines.extend(BINDINGS.iter().map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {keys:<18}"),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(colors.fg())),
            ])
        }));
        Paragraph::new(lines).render(inner, buf);
    }
}
