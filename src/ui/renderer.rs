use crate::ui::app_component::AppComponent;
use crate::ui::core::{Action, Component, EventHandler, EventType};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Take over the terminal and run `app` until it quits
pub async fn run_app(mut app: AppComponent) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;
    let mut was_busy = false;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Tick => {
                // Results from background operations are applied on tick
                for action in app.process_background_actions() {
                    let processed_action = app.update(action);
                    if let Action::Quit = app.handle_app_action(processed_action).await {
                        return Ok(());
                    }
                    needs_render = true;
                }

                // Redraw when the status bar's busy indicator changes
                let busy = app.is_busy();
                if busy != was_busy {
                    was_busy = busy;
                    needs_render = true;
                }
            }
            EventType::Other => {}
            event => {
                app.handle_event(event).await?;
                needs_render = true;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
