//! Core types and collaborator traits for listgrid.
//!
//! This crate provides the foundational abstractions the rendering pipeline
//! dispatches on:
//!
//! - `Record` trait for the ORM collaborator contract
//! - `ListColumn` descriptors and formatting options
//! - association metadata and the bounded preview collection handle
//! - `AuthorizationGate` and `Localizer` collaborator traits
//! - per-request `ListConfig`

pub mod association;
pub mod authorize;
pub mod column;
pub mod config;
pub mod error;
pub mod ident;
pub mod link;
pub mod locale;
pub mod record;
pub mod value;

pub use association::{AssociationInfo, AssociationKind};
pub use authorize::{AuthorizationGate, PermitAll};
pub use column::{ColumnOptions, ColumnSet, ColumnType, FormUi, ListColumn, ListUi};
pub use config::ListConfig;
pub use error::{Error, Result};
pub use ident::{foreign_key_param, snake_case};
pub use link::{ActionLink, CrudType, LinkAction};
pub use locale::{DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT, DefaultLocale, Localizer};
pub use record::{AssociationCollection, AssociationValue, CollectionSource, Record};
pub use value::Value;
