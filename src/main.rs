use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use intelligent_tutor::app::LOG_FILE;
use intelligent_tutor::{App, AppState, logger, ui};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::Duration;

const SPLASH_TICK: Duration = Duration::from_millis(20);

fn main() -> io::Result<()> {
    let work_dir = std::env::current_dir()?;
    logger::init(&work_dir.join(LOG_FILE));
    log::info!("starting in {}", work_dir.display());

    let mut app = App::bootstrap(&work_dir).map_err(io::Error::other)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    log::info!("exiting");
    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.state == AppState::Splash {
            if event::poll(SPLASH_TICK)? {
                if let Event::Key(key) = event::read()? {
                    app.handle_key(key);
                }
            } else {
                app.on_tick();
            }
        } else if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
