use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥90 cols: controls and chart side by side
    Narrow, // <90 cols: controls stacked above the chart
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 90 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub controls: Rect,
    pub result: Rect,
    pub chart: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

const CONTROLS_HEIGHT: u16 = 14;
const RESULT_HEIGHT: u16 = 5;

impl AppLayout {
    pub fn new(area: Rect, footer_lines: u16) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(footer_lines.max(1)),
            ])
            .split(area);

        match tier {
            LayoutTier::Wide => {
                let horizontal = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                    .split(vertical[1]);
                let left = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(CONTROLS_HEIGHT), Constraint::Min(RESULT_HEIGHT)])
                    .split(horizontal[0]);

                Self {
                    header: vertical[0],
                    controls: left[0],
                    result: left[1],
                    chart: horizontal[1],
                    footer: vertical[2],
                    tier,
                }
            }
            LayoutTier::Narrow => {
                let stacked = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(CONTROLS_HEIGHT),
                        Constraint::Length(RESULT_HEIGHT),
                        Constraint::Min(8),
                    ])
                    .split(vertical[1]);

                Self {
                    header: vertical[0],
                    controls: stacked[0],
                    result: stacked[1],
                    chart: stacked[2],
                    footer: vertical[2],
                    tier,
                }
            }
        }
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 44;
    const MIN_POPUP_HEIGHT: u16 = 14;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
