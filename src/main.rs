mod app;
mod audio;
mod config;
mod event;
mod store;
mod ui;
mod unlock;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::{App, Screen};
use audio::DoorChime;
use config::Config;
use event::{AppEvent, EventHandler};
use store::json_store::JsonStore;
use ui::components::confirm_dialog::ConfirmDialog;
use ui::components::entrance::EntranceScreen;
use ui::components::fade_overlay::FadeOverlay;
use ui::components::soon::SoonScreen;
use ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "wonderland",
    version,
    about = "Terminal escape-room entrance with a password-gated prologue"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Screen-swap fade duration in milliseconds")]
    fade_ms: Option<u64>,

    #[arg(long, help = "Disable the door chime")]
    muted: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(theme_name) = cli.theme {
        config.theme = theme_name;
    }
    if let Some(fade_ms) = cli.fade_ms {
        config.fade_ms = fade_ms;
    }
    if cli.muted {
        config.sound_enabled = false;
    }
    config.normalize();

    let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
    let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(50));

    let result = run_session_loop(&mut terminal, &events, &config, theme);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Each pass builds a fresh App from a fresh store load; a reset exits the
/// inner loop with `should_restart` set so the whole session re-initializes,
/// the terminal equivalent of reloading the page.
fn run_session_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    events: &EventHandler,
    config: &Config,
    theme: &'static Theme,
) -> Result<()> {
    loop {
        let store = JsonStore::new().ok();
        let chime = DoorChime::new(PathBuf::from(&config.sound_file), config.sound_enabled);
        let mut app = App::new(config.clone(), store, chime, theme);

        run_app(terminal, &mut app, events)?;

        if !app.should_restart {
            return Ok(());
        }
    }
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
            AppEvent::Tick => {}
        }

        // Advance the fade on every pass so a held key can't starve the swap
        app.tick();

        if app.should_quit || app.should_restart {
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

    // The confirmation prompt is modal
    if app.confirm_reset {
        match key.code {
            KeyCode::Char('y') => app.accept_reset(),
            KeyCode::Char('n') | KeyCode::Esc => app.decline_reset(),
            _ => {}
        }
        return;
    }

    // No input lands while the fade covers the screen
    if app.fading() {
        return;
    }

    match app.screen {
        Screen::Entrance => handle_entrance_key(app, key),
        Screen::Soon => handle_soon_key(app, key),
    }
}

fn handle_entrance_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => app.submit_code(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::F(1) => app.toggle_hint1(),
        KeyCode::F(2) => app.toggle_hint2(),
        KeyCode::Char('r') => app.request_reset(),
        // The field itself drops anything that is not a digit
        KeyCode::Char(ch) => app.type_char(ch),
        _ => {}
    }
}

fn handle_soon_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('r') => app.request_reset(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        " wonderland ",
        Style::default()
            .fg(colors.header_fg())
            .bg(colors.header_bg())
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout[0]);

    let main_area = ui::layout::centered_rect(70, 90, layout[1]);
    match app.screen {
        Screen::Entrance => {
            frame.render_widget(
                EntranceScreen {
                    code: app.code.value(),
                    message: app.message.as_deref(),
                    hint1_open: app.progress.hint1_opened,
                    hint2_open: app.progress.hint2_opened,
                    theme: app.theme,
                },
                main_area,
            );
        }
        Screen::Soon => {
            frame.render_widget(SoonScreen { theme: app.theme }, main_area);
        }
    }

    let footer_text = match app.screen {
        Screen::Entrance => " [0-9] Code  [Enter] Unlock  [F1/F2] Hints  [r] Reset  [Esc] Quit ",
        Screen::Soon => " [r] Reset  [Esc] Quit ",
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        footer_text,
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, layout[2]);

    if app.fading() {
        frame.render_widget(FadeOverlay { theme: app.theme }, area);
    }

    if app.confirm_reset {
        frame.render_widget(
            ConfirmDialog {
                message: "Reset all progress?",
                theme: app.theme,
            },
            area,
        );
    }
}
