use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::model::ListSource;
use crate::row::{Row, RowCache, RowFactory, RowTemplate, TextRowFactory};
use crate::ui::tui_state::{Mode, UiState, adjust_scroll_and_slice};

/// Rows recycled across frames. Owned by the render layer: the model never
/// sees where its rows are cached.
#[derive(Debug, Default)]
pub struct RowRecycler {
    factory: TextRowFactory,
    cache: RowCache,
}

impl RowRecycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces the bound row for `entry` in viewport `slot`, recycling the
    /// slot's previous row object when there is one.
    pub fn row_for(
        &mut self,
        source: &dyn ListSource,
        slot: usize,
        entry: usize,
    ) -> &Row {
        let mut row = match self.cache.take(slot) {
            Some(row) => row,
            None => self.factory.inflate(RowTemplate::EntrySelect),
        };
        source.bind_row(entry, &mut row);
        self.cache.put(slot, row)
    }
}

/// Renders the TUI given the current state, updating scroll offsets.
pub fn render(
    frame: &mut Frame,
    state: &mut UiState,
    recycler: &mut RowRecycler,
) {
    state.ensure_filtered();

    // Layout: search/edit bar (3 lines), list area, then help bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    // Input bar doubles as the path editor
    let (title, input) = if state.mode == Mode::EditPath {
        let name = state
            .selected_entry()
            .map(|i| state.model.name_at(i).to_string())
            .unwrap_or_default();
        (
            format!("Set path for {name} (Enter to apply, Esc to cancel)"),
            &state.edit_input,
        )
    } else {
        (
            format!("Fuzzy Search ({} overridden)", state.model.overridden_count()),
            &state.search_input,
        )
    };
    let search =
        Paragraph::new(input.as_str()).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(search, chunks[0]);

    let area = chunks[1];
    let max_lines = area.height.saturating_sub(2) as usize;
    let filtered_len = state.filtered().len();

    // Adjust scroll and get visible window
    let (offset, end) = adjust_scroll_and_slice(
        &mut state.selected_idx,
        &mut state.scroll_offset,
        max_lines,
        filtered_len,
    );
    let window = &state.filtered()[offset..end];

    // Build ListItems through the row recycler
    let mut items: Vec<ListItem> = Vec::with_capacity(window.len());
    for (slot, &entry) in window.iter().enumerate() {
        let row = recycler.row_for(&state.model, slot, entry);
        let mark = if row.location.is_visible() {
            "[*]"
        } else {
            "[ ]"
        };
        let mut spans = vec![
            Span::styled(mark, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::raw(row.name.text().to_string()),
        ];
        if row.location.is_visible() {
            spans.push(Span::raw("  -> "));
            spans.push(Span::styled(
                row.location.text().to_string(),
                Style::default().fg(Color::Cyan),
            ));
        }
        items.push(ListItem::new(Line::from(spans)));
    }

    // Render the entry list with highlighting
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_idx.saturating_sub(offset)));
    let widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Framework files"))
        .highlight_style(Style::default().bg(Color::Blue));
    frame.render_stateful_widget(widget, area, &mut list_state);

    // Help bar at bottom
    let help_text = vec![
        Span::styled("↑/↓: Navigate  ", Style::default().fg(Color::Yellow)),
        Span::styled("Ctrl+E: Edit path  ", Style::default().fg(Color::Yellow)),
        Span::styled("Ctrl+R: Reset  ", Style::default().fg(Color::Yellow)),
        Span::styled("Ctrl+D: Reset all  ", Style::default().fg(Color::Yellow)),
        Span::styled("Enter: Submit  ", Style::default().fg(Color::Yellow)),
        Span::styled("Ctrl+Q: Quit", Style::default().fg(Color::Yellow)),
    ];
    let help_bar = Paragraph::new(Line::from(help_text));
    frame.render_widget(help_bar, chunks[2]);
}
