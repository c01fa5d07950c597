//! Authorization collaborator contract.
//!
//! The scaffold never implements authorization itself; it asks the host
//! application through this gate. Denial is a normal branch (inert markup,
//! no inline editor), never an error.

use crate::link::CrudType;
use crate::record::Record;

/// Allow/deny oracle for records and entity kinds.
pub trait AuthorizationGate {
    /// Whether `action` is allowed on `record`, optionally scoped to one
    /// column (used for inline-edit and create-through-association checks).
    fn record_allows(&self, record: &dyn Record, action: CrudType, column: Option<&str>) -> bool;

    /// Whether `action` is allowed at the entity-kind level. Used when an
    /// association is empty and there is no record to ask.
    fn entity_allows(&self, entity: &str, action: CrudType, column: Option<&str>) -> bool;
}

/// Gate that allows everything. Useful as a default and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermitAll;

impl AuthorizationGate for PermitAll {
    fn record_allows(&self, _record: &dyn Record, _action: CrudType, _column: Option<&str>) -> bool {
        true
    }

    fn entity_allows(&self, _entity: &str, _action: CrudType, _column: Option<&str>) -> bool {
        true
    }
}
