//! Chatshell TUI (Terminal User Interface)
//!
//! A terminal-based chat shell with tabbed navigation.

use chatshell::settings::{Settings, DEFAULT_SETTINGS_PATH};
use chatshell::tui::{App, ScreenKind, ui::ui};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load everything before touching the terminal so errors print normally
    let settings = Settings::load(DEFAULT_SETTINGS_PATH)?;
    chatshell::init_logging(&settings)?;
    tracing::info!("Starting chatshell");
    let mut app = App::from_settings(settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Event loop failed: {}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.current_kind() {
                    Some(ScreenKind::NotFound) | None => {
                        match key.code {
                            KeyCode::Char('q') => {
                                app.should_quit = true;
                            }
                            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Enter => {
                                app.go_back();
                            }
                            _ => {}
                        }
                    }
                    Some(kind) => {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => {
                                app.should_quit = true;
                            }
                            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                                app.next_tab();
                            }
                            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                                app.previous_tab();
                            }
                            KeyCode::Char(c @ '1'..='9') => {
                                app.select_tab(c as usize - '1' as usize);
                            }
                            code if kind == ScreenKind::Chats => {
                                handle_chat_list_key(app, code);
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_chat_list_key(app: &mut App, code: KeyCode) {
    let screen = &mut app.chats_screen;
    match code {
        KeyCode::Down | KeyCode::Char('j') => screen.next(),
        KeyCode::Up | KeyCode::Char('k') => screen.previous(),
        KeyCode::PageDown => screen.page_down(),
        KeyCode::PageUp => screen.page_up(),
        KeyCode::Home | KeyCode::Char('g') => screen.first(),
        KeyCode::End | KeyCode::Char('G') => screen.last(),
        _ => {}
    }
}
