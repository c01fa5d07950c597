//! Per-request render context.

use listgrid_core::{AuthorizationGate, ListConfig, Localizer};

use crate::overrides::OverrideRegistry;

/// Everything one render pass needs: configuration, the authorization and
/// localization collaborators, and the override registry.
///
/// The context borrows its parts; it is assembled per request and handed by
/// reference through the pipeline.
pub struct RenderContext<'a> {
    /// List configuration for the current controller.
    pub config: &'a ListConfig,
    /// Authorization collaborator.
    pub auth: &'a dyn AuthorizationGate,
    /// Localization collaborator.
    pub locale: &'a dyn Localizer,
    /// Override registry, resolved at configuration time.
    pub overrides: &'a OverrideRegistry,
}

impl<'a> RenderContext<'a> {
    /// Assemble a context for one render pass.
    #[must_use]
    pub fn new(
        config: &'a ListConfig,
        auth: &'a dyn AuthorizationGate,
        locale: &'a dyn Localizer,
        overrides: &'a OverrideRegistry,
    ) -> Self {
        Self {
            config,
            auth,
            locale,
            overrides,
        }
    }
}
