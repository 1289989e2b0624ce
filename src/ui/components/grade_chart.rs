use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::chart_data::{AXIS_BOUNDS, ChartData};
use crate::ui::theme::Theme;

const AXIS_WIDTH: u16 = 5;

/// Vertical bars on a fixed 0-100 axis, each annotated with its rounded
/// percentage.
pub struct GradeChart<'a> {
    data: Option<&'a ChartData>,
    stale: bool,
    theme: &'a Theme,
}

impl<'a> GradeChart<'a> {
    pub fn new(data: Option<&'a ChartData>, theme: &'a Theme) -> Self {
        Self {
            data,
            stale: false,
            theme,
        }
    }

    pub fn stale(mut self, stale: bool) -> Self {
        self.stale = stale;
        self
    }

    fn bar_color(&self, index: usize) -> Color {
        let colors = &self.theme.colors;
        match index {
            0 => colors.bar_predicted(),
            1 => colors.bar_past(),
            _ => colors.bar_target(),
        }
    }
}

impl Widget for GradeChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let title = if self.stale {
            " Comparison (inputs changed) "
        } else {
            " Comparison "
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(if self.stale {
                colors.text_pending()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(data) = self.data else {
            if inner.height > 0 {
                let y = inner.y + inner.height / 2;
                Paragraph::new("Press Enter to predict")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(colors.text_pending()))
                    .render(Rect::new(inner.x, y, inner.width, 1), buf);
            }
            return;
        };

        // axis + annotation row + label row + at least a few plot rows
        if inner.width < AXIS_WIDTH + 9 || inner.height < 6 {
            return;
        }

        let plot_height = inner.height - 2;
        let plot_top = inner.y + 1;
        let baseline = plot_top + plot_height; // row for the category labels
        let plot_x = inner.x + AXIS_WIDTH;
        let plot_width = inner.width - AXIS_WIDTH;
        let [lo, hi] = AXIS_BOUNDS;

        let axis_style = Style::default().fg(colors.text_pending());
        for (tick, row) in [(hi, plot_top), ((lo + hi) / 2.0, plot_top + plot_height / 2), (lo, baseline - 1)] {
            buf.set_string(inner.x, row, format!("{tick:>3.0} "), axis_style);
        }
        for y in plot_top..baseline {
            buf[(plot_x - 1, y)].set_symbol("\u{2502}").set_style(axis_style);
        }

        let slot_width = plot_width / data.bars.len() as u16;
        let bar_width = (slot_width / 2).max(1);

        for (i, bar) in data.bars.iter().enumerate() {
            let slot_x = plot_x + slot_width * i as u16;
            let bar_x = slot_x + (slot_width - bar_width) / 2;
            let ratio = ((bar.value - lo) / (hi - lo)).clamp(0.0, 1.0);
            let bar_rows = (ratio * f64::from(plot_height)).round() as u16;
            let color = self.bar_color(i);

            for dy in 0..bar_rows {
                let y = baseline - 1 - dy;
                for x in bar_x..bar_x + bar_width {
                    buf[(x, y)].set_symbol("\u{2588}").set_style(Style::default().fg(color));
                }
            }

            // annotation sits one row above the bar top
            let annotation = bar.annotation();
            let ann_y = baseline - 1 - bar_rows;
            let ann_x = slot_x + slot_width.saturating_sub(annotation.len() as u16) / 2;
            buf.set_string(ann_x, ann_y, &annotation, Style::default().fg(colors.fg()));

            let label: String = bar.label.chars().take(slot_width as usize).collect();
            let label_x = slot_x + slot_width.saturating_sub(label.chars().count() as u16) / 2;
            buf.set_string(label_x, baseline, &label, Style::default().fg(colors.fg()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(chart: GradeChart<'_>, area: Rect) -> Vec<String> {
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_renders_annotations_and_labels() {
        let theme = Theme::default();
        let data = ChartData::assemble(81.8, 70.0);
        let rows = render_to_string(GradeChart::new(Some(&data), &theme), Rect::new(0, 0, 70, 20));
        let all = rows.join("\n");
        assert!(all.contains("82%"));
        assert!(all.contains("70%"));
        assert!(all.contains("90%"));
        assert!(all.contains("Predicted Grade"));
        assert!(all.contains("Past Score"));
        assert!(all.contains("Ideal Target"));
        assert!(all.contains("100"));
    }

    #[test]
    fn test_full_bar_annotation_stays_inside() {
        let theme = Theme::default();
        let data = ChartData::assemble(100.0, 0.0);
        let rows = render_to_string(GradeChart::new(Some(&data), &theme), Rect::new(0, 0, 50, 12));
        // row 1 is the first inner row, reserved for annotations of full bars
        assert!(rows[1].contains("100%"));
        assert!(rows.iter().any(|r| r.contains("0%")));
    }

    #[test]
    fn test_placeholder_without_data() {
        let theme = Theme::default();
        let rows = render_to_string(GradeChart::new(None, &theme), Rect::new(0, 0, 40, 8));
        assert!(rows.join("\n").contains("Press Enter to predict"));
    }

    #[test]
    fn test_stale_title() {
        let theme = Theme::default();
        let data = ChartData::assemble(50.0, 50.0);
        let rows = render_to_string(
            GradeChart::new(Some(&data), &theme).stale(true),
            Rect::new(0, 0, 60, 12),
        );
        assert!(rows[0].contains("inputs changed"));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let theme = Theme::default();
        let data = ChartData::assemble(50.0, 50.0);
        render_to_string(GradeChart::new(Some(&data), &theme), Rect::new(0, 0, 10, 4));
    }
}
