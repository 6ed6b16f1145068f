//! Terminal lifecycle and the poll/draw loop.

use crate::domain::service::Analytics;
use crate::error::Result;
use crate::settings::Dashboard as DashboardOptions;
use crate::ui::app::DashboardApp;
use crate::ui::tabs;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

pub fn run_dashboard(analytics: Analytics, options: &DashboardOptions) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_loop(
        &mut terminal,
        DashboardApp::new(analytics, options),
        Duration::from_millis(options.tick_ms),
    );

    // restore the terminal no matter how the loop ended
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show).ok();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: DashboardApp,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| tabs::draw(f, &mut app))?;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if app.handle_key(key.code, key.modifiers) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }
    Ok(())
}
