use std::cell::Cell;
use std::collections::HashMap;

/// Identity of an inflated row, assigned by its factory and unchanged across
/// rebinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(pub u64);

/// Row template identifiers a factory knows how to inflate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTemplate {
    EntrySelect,
}

/// A mutable text label inside a row: content plus visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
    visible: bool,
}

impl Label {
    fn new() -> Self {
        Label {
            text: String::new(),
            visible: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rewrites the content in place, keeping the handle itself alive.
    pub fn set_text(
        &mut self,
        text: &str,
    ) {
        self.text.clear();
        self.text.push_str(text);
    }

    pub fn set_visible(
        &mut self,
        visible: bool,
    ) {
        self.visible = visible;
    }
}

/// One renderable list row: a primary name label and a secondary location
/// label. Rows are rebound to different entries as the list scrolls; their
/// label handles are never recreated for a rebind.
#[derive(Debug, Clone)]
pub struct Row {
    id: RowId,
    pub name: Label,
    pub location: Label,
}

impl Row {
    pub fn id(&self) -> RowId {
        self.id
    }
}

/// Inflates visual row templates. The rendering layer obtains fresh rows only
/// through a factory; everything else is recycling.
pub trait RowFactory {
    fn inflate(
        &self,
        template: RowTemplate,
    ) -> Row;
}

/// Factory for plain text rows.
#[derive(Debug, Default)]
pub struct TextRowFactory {
    next_id: Cell<u64>,
}

impl TextRowFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RowFactory for TextRowFactory {
    fn inflate(
        &self,
        _template: RowTemplate,
    ) -> Row {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Row {
            id: RowId(id),
            name: Label::new(),
            location: Label::new(),
        }
    }
}

/// Side table of recycled rows keyed by viewport slot, owned by the rendering
/// layer. Replaces stashing cached label handles on the views themselves: a
/// slot's row object is taken out, rebound to whatever entry scrolled into
/// that slot, and put back.
#[derive(Debug, Default)]
pub struct RowCache {
    rows: HashMap<usize, Row>,
}

impl RowCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the row previously bound at `slot`, if any.
    pub fn take(
        &mut self,
        slot: usize,
    ) -> Option<Row> {
        self.rows.remove(&slot)
    }

    /// Stores `row` as the recycled row for `slot` and returns a handle to it.
    pub fn put(
        &mut self,
        slot: usize,
        row: Row,
    ) -> &Row {
        self.rows.insert(slot, row);
        &self.rows[&slot]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
