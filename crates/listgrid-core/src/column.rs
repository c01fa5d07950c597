//! List column descriptors.
//!
//! A `ListColumn` is the per-column configuration the resolution pipeline
//! dispatches on. Descriptors are immutable per request; places that need a
//! locally tweaked column (the inline-edit control strips one option and may
//! force a form UI) use the explicit derived-copy constructors instead of
//! mutating shared configuration.

use crate::association::AssociationInfo;
use crate::error::{Error, Result};
use crate::link::{ActionLink, LinkAction};

/// Display-type hint for a column's list cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListUi {
    /// Truncated, escaped text (the default text UI).
    Text,
    /// Boolean rendered as a live or disabled checkbox.
    Checkbox,
    /// A custom UI resolved through the override registry.
    Custom(&'static str),
}

/// Underlying field type hint, used as the last dispatch step before
/// generic formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
}

/// Form widget used by the hidden inline-edit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormUi {
    /// Plain text input.
    TextField,
    /// Select element (association pick-list).
    Select,
    /// Heavyweight record-picker widget. The inline-edit control downgrades
    /// this to `Select`.
    RecordSelect,
    /// Checkbox input.
    Checkbox,
}

/// Formatting options for a column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnOptions {
    /// Truncation length applied by the text UI.
    pub truncate: Option<usize>,

    /// Date/datetime format override (chrono format string).
    pub format: Option<String>,

    /// Preview limit for plural associations. `None` lists every label and
    /// disables the bounded cache load.
    pub associated_limit: Option<usize>,

    /// Whether to show the total count of a truncated plural association.
    pub associated_number: bool,

    /// Form widget for the inline-edit control.
    pub form_ui: Option<FormUi>,

    /// Extra options passed through to the in-place editor, as key/value
    /// pairs (e.g., `("rows", "4")`).
    pub params: Vec<(String, String)>,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            truncate: None,
            format: None,
            associated_limit: Some(3),
            associated_number: true,
            form_ui: None,
            params: Vec::new(),
        }
    }
}

/// Descriptor for one list column.
#[derive(Debug, Clone, PartialEq)]
pub struct ListColumn {
    /// Column / field name. A trailing `?` (predicate-style accessors) is
    /// tolerated; override registration strips it.
    pub name: String,

    /// Display-type hint.
    pub list_ui: Option<ListUi>,

    /// Underlying field type hint.
    pub column_type: Option<ColumnType>,

    /// Association backing this column, if any.
    pub association: Option<AssociationInfo>,

    /// Link wrapped around the cell value, if any.
    pub link: Option<ActionLink>,

    /// Whether the link was generated automatically (as opposed to
    /// dev-specified). Only automatic links on singular associations go
    /// through autolink inference.
    pub autolink: bool,

    /// Whether this column is inline-editable (subject to authorization).
    pub inplace_edit: bool,

    /// Allow-list of actions autolink inference may pick.
    pub association_link_actions: Vec<LinkAction>,

    /// Projection used by the bounded association fetch: the fields needed
    /// for label display.
    pub select_columns: Vec<String>,

    /// Formatting options.
    pub options: ColumnOptions,
}

impl ListColumn {
    /// Create a column with defaults: no UI hint, no association, no link.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            list_ui: None,
            column_type: None,
            association: None,
            link: None,
            autolink: false,
            inplace_edit: false,
            association_link_actions: vec![LinkAction::New, LinkAction::Edit, LinkAction::Show],
            select_columns: Vec::new(),
            options: ColumnOptions::default(),
        }
    }

    /// Set the display-type hint.
    #[must_use]
    pub fn list_ui(mut self, ui: ListUi) -> Self {
        self.list_ui = Some(ui);
        self
    }

    /// Set the underlying field type hint.
    #[must_use]
    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    /// Back this column with an association.
    #[must_use]
    pub fn association(mut self, info: AssociationInfo) -> Self {
        self.association = Some(info);
        self
    }

    /// Attach a dev-specified link.
    #[must_use]
    pub fn link(mut self, link: ActionLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Attach an automatically generated link, subject to autolink inference.
    #[must_use]
    pub fn autolink(mut self, link: ActionLink) -> Self {
        self.link = Some(link);
        self.autolink = true;
        self
    }

    /// Enable inline editing.
    #[must_use]
    pub fn inplace_edit(mut self, value: bool) -> Self {
        self.inplace_edit = value;
        self
    }

    /// Restrict the actions autolink inference may pick.
    #[must_use]
    pub fn association_link_actions(mut self, actions: Vec<LinkAction>) -> Self {
        self.association_link_actions = actions;
        self
    }

    /// Set the projection for the bounded association fetch.
    #[must_use]
    pub fn select_columns(mut self, columns: Vec<String>) -> Self {
        self.select_columns = columns;
        self
    }

    /// Replace the formatting options wholesale.
    #[must_use]
    pub fn options(mut self, options: ColumnOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the truncation length.
    #[must_use]
    pub fn truncate(mut self, length: usize) -> Self {
        self.options.truncate = Some(length);
        self
    }

    /// Set the plural-association preview limit (`None` lists everything).
    #[must_use]
    pub fn associated_limit(mut self, limit: Option<usize>) -> Self {
        self.options.associated_limit = limit;
        self
    }

    /// Enable or disable the truncated-association count suffix.
    #[must_use]
    pub fn associated_number(mut self, value: bool) -> Self {
        self.options.associated_number = value;
        self
    }

    /// Set the form widget for the inline-edit control.
    #[must_use]
    pub fn form_ui(mut self, ui: FormUi) -> Self {
        self.options.form_ui = Some(ui);
        self
    }

    /// Whether this column is backed by a singular association.
    #[must_use]
    pub fn singular_association(&self) -> bool {
        self.association.as_ref().is_some_and(AssociationInfo::is_singular)
    }

    /// Whether this column is backed by a plural association.
    #[must_use]
    pub fn plural_association(&self) -> bool {
        self.association.as_ref().is_some_and(AssociationInfo::is_plural)
    }

    /// Derived copy with one extra option removed.
    #[must_use]
    pub fn without_param(&self, key: &str) -> Self {
        let mut copy = self.clone();
        copy.options.params.retain(|(k, _)| k != key);
        copy
    }

    /// Derived copy with the form UI overridden.
    #[must_use]
    pub fn with_form_ui(&self, ui: FormUi) -> Self {
        let mut copy = self.clone();
        copy.options.form_ui = Some(ui);
        copy
    }
}

/// Ordered set of the columns a list renders, looked up by name.
#[derive(Debug, Default)]
pub struct ColumnSet {
    columns: Vec<ListColumn>,
}

impl ColumnSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Order is render order.
    pub fn add(&mut self, column: ListColumn) {
        self.columns.push(column);
    }

    /// Look up a column by name. A trailing `?` on either side is ignored,
    /// matching override registration.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ListColumn> {
        let key = name.trim_end_matches('?');
        self.columns
            .iter()
            .find(|column| column.name.trim_end_matches('?') == key)
    }

    /// Look up a column by name, erroring when no configured column matches.
    pub fn require(&self, name: &str) -> Result<&ListColumn> {
        self.get(name).ok_or_else(|| Error::UnknownColumn {
            name: name.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListColumn> {
        self.columns.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<ListColumn> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = ListColumn>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
