use std::panic;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::model::SelectionModel;
use crate::ui::{tui_events, tui_render, tui_state};

/// Opens the selection TUI over `model`.
///
/// Returns the edited model on submit; `None` when the user quits, discarding
/// the session's overrides.
pub fn select_paths_tui(model: SelectionModel) -> Result<Option<SelectionModel>> {
    // Setup panic hook to restore terminal state on panic
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Initialize UI state
    let mut state = tui_state::UiState::new(model);
    let mut recycler = tui_render::RowRecycler::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    loop {
        terminal.draw(|f| tui_render::render(f, &mut state, &mut recycler))?;

        let evt = event::read()?;
        if let Some(msg) = tui_events::handle_event(&mut state, evt) {
            disable_raw_mode()?;
            execute!(
                terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            )?;
            terminal.show_cursor()?;
            return match msg {
                tui_events::UiMsg::Quit => Ok(None),
                tui_events::UiMsg::Submit => Ok(Some(state.model)),
            };
        }
    }
}
