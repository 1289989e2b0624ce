mod app;
mod config;
mod engine;
mod event;
mod logging;
mod session;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing::{info, warn};

use app::App;
use config::Config;
use engine::predictor::GradePredictor;
use event::{AppEvent, EventHandler};
use session::input::PredictionInput;
use session::report::{ModelSummary, PredictionReport, model_text};
use ui::components::grade_chart::GradeChart;
use ui::components::help::HelpOverlay;
use ui::components::input_panel::InputPanel;
use ui::components::result_panel::ResultPanel;
use ui::layout::{AppLayout, pack_hint_lines};
use ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "gradeopt",
    version,
    about = "Predict a final exam grade from study habits"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Print one prediction and exit instead of opening the UI")]
    once: bool,

    #[arg(long, help = "With --once, print the prediction as JSON")]
    json: bool,

    #[arg(long, help = "Print the fitted model coefficients and exit")]
    show_model: bool,

    #[arg(long, allow_negative_numbers = true, help = "Hours studied daily (0-10)")]
    hours: Option<i64>,

    #[arg(long, allow_negative_numbers = true, help = "Past score in percent (0-100)")]
    past: Option<i64>,

    #[arg(long, allow_negative_numbers = true, help = "Attendance in percent (0-100)")]
    attendance: Option<i64>,

    #[arg(long, allow_negative_numbers = true, help = "Sleep hours daily (0-12)")]
    sleep: Option<i64>,
}

impl Cli {
    /// Flags override the configured starting values; both are pinned to the
    /// control bounds.
    fn input(&self, config: &Config) -> PredictionInput {
        PredictionInput::bounded(
            self.hours.unwrap_or(config.default_study_hours),
            self.past.unwrap_or(config.default_past_score),
            self.attendance.unwrap_or(config.default_attendance),
            self.sleep.unwrap_or(config.default_sleep_hours),
        )
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = logging::init();
    info!(log = ?log_path, "starting gradeopt");

    let mut config = Config::load().unwrap_or_else(|err| {
        warn!(%err, "config unreadable, using defaults");
        Config::default()
    });
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }

    let predictor = GradePredictor::from_training_set().context("failed to fit the grade model")?;

    if cli.show_model {
        print!("{}", model_text(&ModelSummary::from(predictor.model())));
        return Ok(());
    }

    if cli.once || cli.json {
        return run_once(&cli, &config, &predictor);
    }

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!(theme = %config.theme, "unknown theme, using default");
        Theme::default()
    });
    let mut app = App::new(config, theme, predictor);
    app.input = cli.input(&app.config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }
    info!("exiting");

    Ok(())
}

fn run_once(cli: &Cli, config: &Config, predictor: &GradePredictor) -> Result<()> {
    let prediction = predictor.evaluate(&cli.input(config));
    let report = PredictionReport::new(&prediction, predictor.model());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        match key.code {
            KeyCode::Char('q') => app.should_quit = true,
            _ => app.show_help = false,
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.adjust(-1),
        KeyCode::Right | KeyCode::Char('l') => app.adjust(1),
        KeyCode::PageUp => app.page(true),
        KeyCode::PageDown => app.page(false),
        KeyCode::Home => app.jump_to_min(),
        KeyCode::End => app.jump_to_max(),
        KeyCode::Enter | KeyCode::Char('p') => app.predict(),
        KeyCode::Char('r') => app.reset_inputs(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let hints = [
        "[\u{2191}\u{2193}] Select",
        "[\u{2190}\u{2192}] Adjust",
        "[Enter] Predict",
        "[r] Reset",
        "[t] Theme",
        "[?] Help",
        "[q] Quit",
    ];
    let footer_lines = pack_hint_lines(&hints, area.width as usize);
    let layout = AppLayout::new(area, footer_lines.len() as u16);

    let model = app.predictor.model();
    let mut header_spans = vec![
        Span::styled(
            " Academic Grade Optimizer ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" R\u{b2} {:.3} on {} samples ", model.r_squared, model.sample_count),
            Style::default().fg(colors.text_pending()).bg(colors.header_bg()),
        ),
    ];
    if let Some(ref status) = app.status {
        header_spans.push(Span::styled(
            format!("| {status}"),
            Style::default().fg(colors.accent()).bg(colors.header_bg()),
        ));
    }
    let header = Paragraph::new(Line::from(header_spans))
        .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    frame.render_widget(
        InputPanel::new(&app.input, app.selected, &app.theme),
        layout.controls,
    );

    let stale = app.is_stale();
    let prediction = app.last_prediction.as_ref();
    frame.render_widget(
        ResultPanel::new(prediction.map(|p| &p.result), stale, &app.theme),
        layout.result,
    );
    frame.render_widget(
        GradeChart::new(prediction.map(|p| &p.chart), &app.theme).stale(stale),
        layout.chart,
    );

    let footer = Paragraph::new(
        footer_lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.text_pending()))))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(footer, layout.footer);

    if app.show_help {
        let popup = ui::layout::centered_rect(50, 60, area);
        frame.render_widget(HelpOverlay::new(&app.theme), popup);
    }
}
