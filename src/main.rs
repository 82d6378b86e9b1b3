use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

mod app;
mod cli;
mod models;
mod presenter;
mod theme;
mod ui;

use app::{App, Screen};
use theme::{BG_PRIMARY, SKY_PRIMARY};

fn main() -> io::Result<()> {
    cli::parse_args()?;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let mut app = App::new();
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: content area + bottom bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),    // Main content area
                    Constraint::Length(1), // Bottom bar (single line)
                ])
                .split(area);

            let content_area = main_layout[0];
            let bottom_bar_area = main_layout[1];

            match app.screen {
                Screen::List => ui::render_list(content_area, app, frame),
                Screen::Detail => {
                    // detail_cloud is Some whenever screen is Detail; fall
                    // back to the list if the state ever disagrees.
                    if let Some(cloud) = app.detail_cloud() {
                        ui::render_detail(content_area, cloud, frame);
                    } else {
                        ui::render_list(content_area, app, frame);
                    }
                }
            }

            // Bottom bar with keybinding hints
            let hints = match app.screen {
                Screen::List => " q: Quit | ↑/↓: Move | Enter: Details ",
                Screen::Detail => " q: Quit | Esc: Back to list ",
            };
            let keybindings =
                Paragraph::new(hints).style(Style::default().fg(BG_PRIMARY).bg(SKY_PRIMARY));
            frame.render_widget(keybindings, bottom_bar_area);
        })?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (app.screen, key.code) {
                    (_, KeyCode::Char('q')) => break,
                    (Screen::List, KeyCode::Up | KeyCode::Char('k')) => app.select_prev(),
                    (Screen::List, KeyCode::Down | KeyCode::Char('j')) => app.select_next(),
                    (Screen::List, KeyCode::Enter) => app.open_detail(),
                    (Screen::Detail, KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter) => {
                        app.close_detail()
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
