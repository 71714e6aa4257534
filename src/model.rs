use anyhow::{Result, anyhow};

use crate::constants::DEFAULT_FRAMEWORK_DIR;
use crate::row::{Row, RowFactory, RowTemplate};

/// List data source consumed by the rendering layer: item count, stable
/// per-entry identity, and row binding.
pub trait ListSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identity that survives re-renders. Entries are never inserted or
    /// removed, so positions themselves are stable.
    fn stable_id(
        &self,
        index: usize,
    ) -> u64;

    /// Binds entry `index` into `row`, reusing its label handles.
    fn bind_row(
        &self,
        index: usize,
        row: &mut Row,
    );
}

/// Pairs each framework file name with the path it should be sourced from.
///
/// Names are fixed at construction; each path starts as `base_dir + name`
/// (plain concatenation, no separator handling) and can be overwritten per
/// entry or in bulk. Both sequences stay index-aligned for the lifetime of
/// the model.
#[derive(Debug, Clone)]
pub struct SelectionModel {
    base_dir: String,
    names: Vec<String>,
    paths: Vec<String>,
    generation: u64,
}

impl SelectionModel {
    /// Builds a model over the system framework directory.
    pub fn new(names: Vec<String>) -> Self {
        Self::with_base_dir(DEFAULT_FRAMEWORK_DIR, names)
    }

    /// Builds a model whose default paths are `base_dir + name`, concatenated
    /// as-is.
    pub fn with_base_dir(
        base_dir: impl Into<String>,
        names: Vec<String>,
    ) -> Self {
        let base_dir = base_dir.into();
        let paths = names.iter().map(|n| format!("{base_dir}{n}")).collect();
        SelectionModel {
            base_dir,
            names,
            paths,
            generation: 0,
        }
    }

    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    /// The file names, in list order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The user-selected paths, in the same order as the names. This is the
    /// live sequence: later mutation writes through the same storage.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// The path currently selected for entry `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn path_at(
        &self,
        index: usize,
    ) -> &str {
        &self.paths[index]
    }

    /// Panics if `index` is out of range.
    pub fn name_at(
        &self,
        index: usize,
    ) -> &str {
        &self.names[index]
    }

    /// The unmodified default for entry `index`.
    pub fn default_path_at(
        &self,
        index: usize,
    ) -> String {
        format!("{}{}", self.base_dir, self.names[index])
    }

    /// True while entry `index` still points at its default path.
    pub fn is_default_at(
        &self,
        index: usize,
    ) -> bool {
        self.paths[index] == self.default_path_at(index)
    }

    /// Number of entries no longer pointing at their default path.
    pub fn overridden_count(&self) -> usize {
        (0..self.names.len())
            .filter(|&i| !self.is_default_at(i))
            .count()
    }

    /// Sets entry `index` to `path`, to be applied later.
    ///
    /// Panics if `index` is out of range.
    pub fn set_path_at(
        &mut self,
        index: usize,
        path: impl Into<String>,
    ) {
        self.paths[index] = path.into();
        self.generation += 1;
    }

    /// Restores entry `index` to its default path.
    pub fn reset_path_at(
        &mut self,
        index: usize,
    ) {
        let default = self.default_path_at(index);
        self.set_path_at(index, default);
    }

    /// Replaces every path at once, to be applied later.
    ///
    /// A wrong-length `paths` is ignored apart from a diagnostic; callers
    /// that want a hard failure use `try_set_paths`.
    pub fn set_paths(
        &mut self,
        paths: Vec<String>,
    ) {
        if paths.len() != self.paths.len() {
            tracing::info!(
                "Not resetting paths: got {}, expected {}",
                paths.len(),
                self.paths.len()
            );
        } else {
            self.paths = paths;
            self.generation += 1;
        }
    }

    /// Strict variant of `set_paths`: a length mismatch is an error and
    /// leaves the model untouched.
    pub fn try_set_paths(
        &mut self,
        paths: Vec<String>,
    ) -> Result<()> {
        if paths.len() != self.paths.len() {
            return Err(anyhow!(
                "expected {} paths, got {}",
                self.paths.len(),
                paths.len()
            ));
        }
        self.paths = paths;
        self.generation += 1;
        Ok(())
    }

    /// Bumped by every successful mutation; observers compare generations to
    /// decide when to re-render.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Produces a display row for entry `index`, reusing `recycled` when
    /// given instead of inflating a new template.
    ///
    /// The location label is hidden while the entry still has its default
    /// path and shows the literal path otherwise.
    pub fn render_row(
        &self,
        index: usize,
        factory: &dyn RowFactory,
        recycled: Option<Row>,
    ) -> Row {
        let mut row = recycled.unwrap_or_else(|| factory.inflate(RowTemplate::EntrySelect));
        self.bind_row(index, &mut row);
        row
    }
}

impl ListSource for SelectionModel {
    fn len(&self) -> usize {
        self.names.len()
    }

    fn stable_id(
        &self,
        index: usize,
    ) -> u64 {
        index as u64
    }

    fn bind_row(
        &self,
        index: usize,
        row: &mut Row,
    ) {
        row.name.set_text(&self.names[index]);
        // don't display the path if it's still the system default
        if self.is_default_at(index) {
            row.location.set_visible(false);
        } else {
            row.location.set_text(&self.paths[index]);
            row.location.set_visible(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_bulk_write_is_a_noop() {
        let mut model = SelectionModel::new(vec!["services.jar".into(), "framework.jar".into()]);
        let before = model.paths().to_vec();

        model.set_paths(vec!["/sdcard/services.jar".into()]);

        assert_eq!(model.paths().to_vec(), before);
        assert_eq!(model.generation(), 0, "rejected write must not notify");
    }

    #[test]
    fn generation_moves_on_every_successful_write() {
        let mut model = SelectionModel::new(vec!["services.jar".into(), "framework.jar".into()]);
        model.set_path_at(0, "/sdcard/services.jar");
        assert_eq!(model.generation(), 1);

        model.set_paths(vec![
            "/sdcard/services.jar".into(),
            "/sdcard/framework.jar".into(),
        ]);
        assert_eq!(model.generation(), 2);

        model.reset_path_at(1);
        assert_eq!(model.generation(), 3);
    }
}
