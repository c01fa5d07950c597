//! Per-request list configuration.

/// Configuration for one list render pass.
///
/// Bundles the scaffold identity (controller + entity kind), presentation
/// defaults, and the request-scoped bits the inline editor needs (editor
/// session id, CSRF token).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Current controller name (e.g., `"heroes"`).
    pub controller: String,

    /// Entity kind managed by the current controller (e.g., `"Hero"`).
    pub entity: String,

    /// Text shown for empty field values before the placeholder post-step.
    pub empty_field_text: String,

    /// Editor session id (`eid`) carried by in-place editor requests, when
    /// the list is rendered inside an embedded scaffold.
    pub eid: Option<String>,

    /// CSRF token, present when the host framework's forgery protection is
    /// enabled. Its presence switches the editor callback to append an
    /// `authenticity_token` parameter.
    pub csrf_token: Option<String>,
}

impl ListConfig {
    /// Create a config for a controller and its entity kind.
    #[must_use]
    pub fn new(controller: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            entity: entity.into(),
            empty_field_text: "-".to_string(),
            eid: None,
            csrf_token: None,
        }
    }

    /// Set the empty-field text.
    #[must_use]
    pub fn empty_field_text(mut self, text: impl Into<String>) -> Self {
        self.empty_field_text = text.into();
        self
    }

    /// Set the editor session id.
    #[must_use]
    pub fn eid(mut self, eid: impl Into<String>) -> Self {
        self.eid = Some(eid.into());
        self
    }

    /// Set the CSRF token (enables forgery protection in editor scripts).
    #[must_use]
    pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }
}
