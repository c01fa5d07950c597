//! Action links and CRUD kinds.

/// The CRUD kind of an action, used for authorization checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudType {
    /// Create a new record (`new` action).
    Create,
    /// Read / display a record (`show` action).
    Read,
    /// Update an existing record (`edit` action).
    Update,
    /// Delete a record.
    Delete,
}

/// Actions a column may auto-link to for singular associations.
///
/// This is the per-column allow-list consulted by autolink inference:
/// an empty association may link to `New`, a populated one to `Edit`,
/// with `Show` as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// Link to the create form.
    New,
    /// Link to the edit form.
    Edit,
    /// Link to the read-only view.
    Show,
}

/// A link rendered around a cell value.
///
/// Immutable: autolink inference derives a copy via [`ActionLink::with_action`]
/// instead of mutating the shared column configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    /// Target controller. `None` targets the current controller.
    pub controller: Option<String>,

    /// Target action (e.g., `"show"`).
    pub action: String,

    /// CRUD kind of the target action, used for authorization. Autolink
    /// base links start with `None`; inference fills it in.
    pub crud_type: Option<CrudType>,
}

impl ActionLink {
    /// Create a link to an action on the current controller.
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            controller: None,
            action: action.into(),
            crud_type: None,
        }
    }

    /// Set the target controller.
    #[must_use]
    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    /// Set the CRUD kind.
    #[must_use]
    pub fn crud_type(mut self, crud_type: CrudType) -> Self {
        self.crud_type = Some(crud_type);
        self
    }

    /// Derived copy targeting a different action and CRUD kind.
    #[must_use]
    pub fn with_action(&self, action: impl Into<String>, crud_type: CrudType) -> Self {
        Self {
            controller: self.controller.clone(),
            action: action.into(),
            crud_type: Some(crud_type),
        }
    }
}
