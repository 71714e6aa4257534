use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};

use crate::model::SelectionModel;

/// Input focus of the selection TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the list; typed characters feed the fuzzy search.
    Browse,
    /// Editing a replacement path for the selected entry.
    EditPath,
}

/// Shared UI state for the path selection TUI
pub struct UiState {
    pub model: SelectionModel,
    pub search_input: String,
    pub mode: Mode,
    pub edit_input: String,
    pub selected_idx: usize,
    pub scroll_offset: usize,
    filtered: Vec<usize>,
    filtered_search: String,
    filtered_generation: u64,
}

impl UiState {
    /// Initialize state over a freshly built model
    pub fn new(model: SelectionModel) -> Self {
        let filtered = (0..model.names().len()).collect();
        let filtered_generation = model.generation();
        UiState {
            model,
            search_input: String::new(),
            mode: Mode::Browse,
            edit_input: String::new(),
            selected_idx: 0,
            scroll_offset: 0,
            filtered,
            filtered_search: String::new(),
            filtered_generation,
        }
    }

    /// Recomputes the filtered list when the search text changed or the model
    /// notified a change, then clamps the cursor into range.
    pub fn ensure_filtered(&mut self) {
        let generation = self.model.generation();
        if self.search_input != self.filtered_search || generation != self.filtered_generation {
            self.filtered = self.compute_filtered();
            self.filtered_search = self.search_input.clone();
            self.filtered_generation = generation;
        }
        if self.filtered.is_empty() {
            self.selected_idx = 0;
        } else if self.selected_idx >= self.filtered.len() {
            self.selected_idx = self.filtered.len() - 1;
        }
    }

    /// Entry indices matching the fuzzy search, best score first; original
    /// order when the search is empty.
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    /// Model index currently under the cursor.
    pub fn selected_entry(&self) -> Option<usize> {
        self.filtered.get(self.selected_idx).copied()
    }

    fn compute_filtered(&self) -> Vec<usize> {
        if self.search_input.is_empty() {
            return (0..self.model.names().len()).collect();
        }

        // Match against the name and the chosen path, keeping the better score
        let matcher = SkimMatcherV2::default();
        let mut results = Vec::new();
        for (i, name) in self.model.names().iter().enumerate() {
            let name_score = matcher.fuzzy_match(name, &self.search_input);
            let path_score = matcher.fuzzy_match(self.model.path_at(i), &self.search_input);
            let score = match (name_score, path_score) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (a, None) => a,
                (None, b) => b,
            };
            if let Some(score) = score {
                results.push((i, score));
            }
        }

        // Sort by score (descending)
        results.sort_by_key(|&(_, score)| -score);
        results.into_iter().map(|(i, _)| i).collect()
    }
}

/// Adjust scroll offset and compute visible range
pub fn adjust_scroll_and_slice(
    selected_idx: &mut usize,
    scroll_offset: &mut usize,
    max_lines: usize,
    data_len: usize,
) -> (usize, usize) {
    if *selected_idx < *scroll_offset {
        *scroll_offset = *selected_idx;
    } else if *selected_idx >= *scroll_offset + max_lines {
        *scroll_offset = selected_idx.saturating_sub(max_lines).saturating_add(1);
    }
    let end_idx = (*scroll_offset + max_lines).min(data_len);
    (*scroll_offset, end_idx)
}
