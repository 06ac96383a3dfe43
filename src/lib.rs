//! API documentation type resolution
//!
//! Resolves the type tokens found in an API service schema (field types,
//! array element types, raw strings) against the service itself and the
//! services it imports, and builds navigation hrefs into the documentation
//! site.
//!
//! # Example
//!
//! ```
//! use apidoc_resolver::{find_model, is_known, load_service_str, simplify_name, NavHref};
//!
//! let service = load_service_str(r#"{
//!     "name": "api",
//!     "models": [{ "name": "user", "fields": [{ "name": "id", "type": "uuid" }] }]
//! }"#).unwrap();
//! let common = load_service_str(r#"{
//!     "name": "common",
//!     "enums": [{ "name": "io.acme.common.v1.enums.status", "values": [{ "name": "active" }] }]
//! }"#).unwrap();
//! let imports = vec![common];
//!
//! assert_eq!(find_model("[user]", &service, &imports).unwrap().fields.len(), 1);
//! assert!(is_known("io.acme.common.v1.enums.status", &service, &imports));
//! assert!(!is_known("address", &service, &imports));
//! assert_eq!(simplify_name("io.acme.common.v1.enums.status"), "i.a.c.v1.status");
//! assert_eq!(NavHref::new().model("user").field("id").build(), "/m/user#id");
//! ```
//!
//! # Resolution order
//!
//! | Name defined by | Source searched |
//! |-----------------|-----------------|
//! | Any import (model or enum) | Imports only, in list order; first import holding the requested kind wins |
//! | No import | Home service only |
//!
//! Unknown or unparseable tokens resolve to `None`; only operation lookup
//! and enum example values fail with a [`ResolveError`].

mod error;
mod loader;
mod nav;
mod resolver;
mod token;
mod types;

pub use error::{LoadError, ResolveError};
pub use loader::{load_service, load_service_str};
pub use nav::{follow_href, NavEvent, NavHref, Navigator};
pub use resolver::{
    enum_example_value, find_enum, find_model, find_operation, is_enum, is_imported,
    is_in_service, is_known, is_model, locate_type,
};
pub use token::{bare_name, clean_path, is_array, is_iso_date_time, simplify_name, ISO_DATE_TIME};
pub use types::{
    Enum, EnumValue, Field, Model, Operation, ResolvedType, Resource, Service, TypeKind,
    TypeSource,
};
