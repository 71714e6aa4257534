use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::ui::tui_state::{Mode, UiState};

/// Loop-level outcomes of an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    Quit,
    Submit,
}

/// Applies one terminal event to the UI state; returns a message only when
/// the event loop has to act.
pub fn handle_event(
    state: &mut UiState,
    evt: Event,
) -> Option<UiMsg> {
    let Event::Key(KeyEvent {
        code, modifiers, ..
    }) = evt
    else {
        return None;
    };

    state.ensure_filtered();

    if state.mode == Mode::EditPath {
        match (code, modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => return Some(UiMsg::Quit),
            (KeyCode::Esc, _) => {
                state.mode = Mode::Browse;
                state.edit_input.clear();
            }
            // Commit the replacement path for the selected entry
            (KeyCode::Enter, _) => {
                if let Some(entry) = state.selected_entry() {
                    let path = state.edit_input.trim().to_string();
                    if !path.is_empty() {
                        state.model.set_path_at(entry, path);
                    }
                }
                state.mode = Mode::Browse;
                state.edit_input.clear();
            }
            (KeyCode::Backspace, _) => {
                state.edit_input.pop();
            }
            (KeyCode::Char(c), _) => {
                state.edit_input.push(c);
            }
            _ => {}
        }
        return None;
    }

    match (code, modifiers) {
        // Quit without keeping this session's overrides (requires Ctrl+Q)
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => return Some(UiMsg::Quit),
        // Ctrl+E opens the path editor seeded with the current path
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            if let Some(entry) = state.selected_entry() {
                state.mode = Mode::EditPath;
                state.edit_input = state.model.path_at(entry).to_string();
            }
        }
        // Ctrl+R resets the selected entry back to its default path
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            if let Some(entry) = state.selected_entry() {
                state.model.reset_path_at(entry);
            }
        }
        // Ctrl+D resets every entry back to its default path
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            let defaults = (0..state.model.names().len())
                .map(|i| state.model.default_path_at(i))
                .collect();
            state.model.set_paths(defaults);
        }
        (KeyCode::Enter, _) => return Some(UiMsg::Submit),
        (KeyCode::Up, _) => {
            state.selected_idx = state.selected_idx.saturating_sub(1);
        }
        (KeyCode::Down, _) => {
            let len = state.filtered().len();
            if len > 0 && state.selected_idx < len - 1 {
                state.selected_idx += 1;
            }
        }
        // Anything typed feeds the fuzzy search
        (KeyCode::Backspace, _) => {
            state.search_input.pop();
        }
        (KeyCode::Char(c), _) => {
            state.search_input.push(c);
        }
        _ => {}
    }
    None
}
