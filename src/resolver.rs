//! Type-reference resolution across a home service and its imports.
//!
//! Every lookup works on the bare name of the token (see [`bare_name`]) and
//! matches names exactly. If any import defines the name, the imports alone
//! are searched in list order and the first one holding the name as the
//! requested kind wins; otherwise the home service is searched.

use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::token::{bare_name, clean_path};
use crate::types::{Enum, Model, Operation, ResolvedType, Service, TypeKind, TypeSource};

trait Named {
    fn name(&self) -> &str;
}

impl Named for Model {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Enum {
    fn name(&self) -> &str {
        &self.name
    }
}

fn find_by_name<'a, T: Named>(name: &str, values: &'a [T]) -> Option<&'a T> {
    values.iter().find(|v| v.name() == name)
}

fn defined_in(name: &str, service: &Service) -> bool {
    find_by_name(name, &service.models).is_some() || find_by_name(name, &service.enums).is_some()
}

/// Resolve `name` in the collection picked by `select`.
///
/// When any import defines the name (as either kind), only the imports are
/// searched and the first one whose `select` set holds it wins. Otherwise
/// only `service` is searched.
fn lookup<'a, T: Named>(
    name: &str,
    service: &'a Service,
    imports: &'a [Service],
    select: fn(&Service) -> &[T],
) -> Option<(&'a T, TypeSource<'a>)> {
    if imports.iter().any(|import| defined_in(name, import)) {
        return imports.iter().enumerate().find_map(|(index, import)| {
            find_by_name(name, select(import))
                .map(|found| (found, TypeSource::Import { index, service: import }))
        });
    }
    find_by_name(name, select(service)).map(|found| (found, TypeSource::Local))
}

fn log_lookup<T>(kind: TypeKind, name: &str, service: &Service, found: &Option<(&T, TypeSource<'_>)>) {
    match found {
        Some((_, TypeSource::Local)) => {
            debug!(kind = kind.as_str(), type_name = name, service = %service.name, "resolved locally")
        }
        Some((_, TypeSource::Import { index, service: import })) => debug!(
            kind = kind.as_str(),
            type_name = name,
            import = %import.name,
            index,
            "resolved through import"
        ),
        None => debug!(kind = kind.as_str(), type_name = name, service = %service.name, "not found"),
    }
}

/// Find the enum a type token refers to.
///
/// Returns `None` when the token is unparseable or no reachable service
/// defines an enum with that name.
pub fn find_enum<'a>(name: &str, service: &'a Service, imports: &'a [Service]) -> Option<&'a Enum> {
    let bare = bare_name(name)?;
    let found = lookup(bare, service, imports, |s| s.enums.as_slice());
    log_lookup(TypeKind::Enum, bare, service, &found);
    found.map(|(e, _)| e)
}

/// Find the model a type token refers to. See [`find_enum`].
pub fn find_model<'a>(
    name: &str,
    service: &'a Service,
    imports: &'a [Service],
) -> Option<&'a Model> {
    let bare = bare_name(name)?;
    let found = lookup(bare, service, imports, |s| s.models.as_slice());
    log_lookup(TypeKind::Model, bare, service, &found);
    found.map(|(m, _)| m)
}

/// True if the token resolves to an enum. See [`find_enum`].
pub fn is_enum(name: &str, service: &Service, imports: &[Service]) -> bool {
    find_enum(name, service, imports).is_some()
}

/// True if the token resolves to a model. See [`find_model`].
pub fn is_model(name: &str, service: &Service, imports: &[Service]) -> bool {
    find_model(name, service, imports).is_some()
}

/// True if `service` alone defines a model or enum with the token's bare name.
pub fn is_in_service(name: &str, service: &Service) -> bool {
    bare_name(name).map_or(false, |bare| defined_in(bare, service))
}

/// True if at least one import defines a model or enum with the token's bare name.
pub fn is_imported(name: &str, imports: &[Service]) -> bool {
    imports.iter().any(|import| is_in_service(name, import))
}

/// True if the token resolves anywhere reachable from `service`.
///
/// Renderers use this to choose between a structured value and the raw
/// type string.
pub fn is_known(name: &str, service: &Service, imports: &[Service]) -> bool {
    is_in_service(name, service) || is_imported(name, imports)
}

/// Classify a type token and report where it is defined.
///
/// Models take precedence over enums when a source defines both. Follows
/// the same import gate as [`find_model`] and [`find_enum`].
pub fn locate_type<'a>(
    name: &'a str,
    service: &'a Service,
    imports: &'a [Service],
) -> Option<ResolvedType<'a>> {
    let bare = bare_name(name)?;
    let model = lookup(bare, service, imports, |s| s.models.as_slice());
    log_lookup(TypeKind::Model, bare, service, &model);
    if let Some((_, source)) = model {
        return Some(ResolvedType {
            kind: TypeKind::Model,
            name: bare,
            source,
        });
    }

    let enumeration = lookup(bare, service, imports, |s| s.enums.as_slice());
    log_lookup(TypeKind::Enum, bare, service, &enumeration);
    enumeration.map(|(_, source)| ResolvedType {
        kind: TypeKind::Enum,
        name: bare,
        source,
    })
}

/// Locate an operation by resource type, method and path.
///
/// Methods match case-insensitively; paths match after [`clean_path`] on
/// both sides, so `usersid` finds `/users/{id}`.
///
/// # Errors
///
/// Returns `ResolveError::ResourceNotFound` if no resource has the given
/// type, or `ResolveError::OperationNotFound` if the resource has no
/// matching operation.
pub fn find_operation<'a>(
    resource_type: &str,
    method: &str,
    path: &str,
    service: &'a Service,
) -> Result<&'a Operation, ResolveError> {
    let resource = service
        .resources
        .iter()
        .find(|r| r.resource_type == resource_type)
        .ok_or_else(|| {
            warn!(resource_type, service = %service.name, "resource not found");
            ResolveError::ResourceNotFound {
                resource_type: resource_type.to_string(),
            }
        })?;

    let wanted = clean_path(path);
    resource
        .operations
        .iter()
        .find(|o| o.method.eq_ignore_ascii_case(method) && clean_path(&o.path) == wanted)
        .ok_or_else(|| {
            warn!(resource_type, method, path, "operation not found");
            ResolveError::OperationNotFound {
                resource_type: resource_type.to_string(),
                method: method.to_string(),
                path: path.to_string(),
            }
        })
}

/// Example value shown for an enum-typed field: its first value's name.
///
/// # Errors
///
/// Returns `ResolveError::EmptyEnum` if the enum declares no values.
pub fn enum_example_value(enumeration: &Enum) -> Result<&str, ResolveError> {
    enumeration
        .values
        .first()
        .map(|v| v.name.as_str())
        .ok_or_else(|| ResolveError::EmptyEnum {
            name: enumeration.name.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EnumValue, Field, Resource};

    fn model(name: &str) -> Model {
        Model {
            name: name.into(),
            plural: None,
            description: None,
            fields: vec![Field {
                name: "id".into(),
                field_type: "string".into(),
                required: true,
                default: None,
                description: None,
                example: None,
            }],
        }
    }

    fn enumeration(name: &str, values: &[&str]) -> Enum {
        Enum {
            name: name.into(),
            plural: None,
            description: None,
            values: values
                .iter()
                .map(|v| EnumValue {
                    name: (*v).into(),
                    description: None,
                })
                .collect(),
        }
    }

    fn service(name: &str, models: &[&str], enums: &[&str]) -> Service {
        Service {
            name: name.into(),
            models: models.iter().map(|m| model(m)).collect(),
            enums: enums.iter().map(|e| enumeration(e, &["first", "second"])).collect(),
            ..Service::default()
        }
    }

    #[test]
    fn find_model_local() {
        let home = service("home", &["user"], &[]);
        let found = find_model("user", &home, &[]).unwrap();
        assert_eq!(found.name, "user");
        assert!(find_model("[user]", &home, &[]).is_some());
    }

    #[test]
    fn find_model_through_import() {
        let home = service("home", &["user"], &[]);
        let imports = vec![service("common", &["address"], &[])];
        assert!(find_model("address", &home, &[]).is_none());
        assert_eq!(find_model("address", &home, &imports).unwrap().name, "address");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let home = service("home", &["user"], &["status"]);
        assert!(find_model("User", &home, &[]).is_none());
        assert!(find_enum("STATUS", &home, &[]).is_none());
    }

    #[test]
    fn kinds_do_not_cross() {
        let home = service("home", &["user"], &["status"]);
        assert!(is_model("user", &home, &[]));
        assert!(!is_enum("user", &home, &[]));
        assert!(is_enum("status", &home, &[]));
        assert!(!is_model("status", &home, &[]));
    }

    #[test]
    fn unparseable_token_is_unknown() {
        let home = service("home", &["user"], &["status"]);
        assert!(find_model("", &home, &[]).is_none());
        assert!(find_enum("[]", &home, &[]).is_none());
        assert!(!is_in_service("", &home));
        assert!(!is_known("[]", &home, &[]));
    }

    #[test]
    fn imported_name_shadows_home_definition() {
        let home = service("home", &["status"], &[]);
        let imports = vec![service("common", &["status"], &[])];
        let (_, source) = lookup("status", &home, &imports, |s| s.models.as_slice()).unwrap();
        assert_eq!(source, TypeSource::Import { index: 0, service: &imports[0] });
    }

    #[test]
    fn imported_enum_hides_home_model_of_same_name() {
        let home = service("home", &["status"], &[]);
        let imports = vec![service("common", &[], &["status"])];
        assert!(!is_model("status", &home, &imports));
        assert!(is_enum("status", &home, &imports));
        assert!(is_model("status", &home, &[]));
    }

    #[test]
    fn enum_import_skips_imports_with_only_models() {
        let home = service("home", &[], &[]);
        let imports = vec![
            service("models_only", &["status"], &[]),
            service("enums", &[], &["status"]),
        ];
        let located = lookup("status", &home, &imports, |s| s.enums.as_slice()).unwrap();
        assert_eq!(located.1, TypeSource::Import { index: 1, service: &imports[1] });
    }

    #[test]
    fn locate_prefers_models() {
        let home = service("home", &["thing"], &["thing"]);
        let located = locate_type("[thing]", &home, &[]).unwrap();
        assert_eq!(located.kind, TypeKind::Model);
        assert_eq!(located.name, "thing");
        assert!(located.source.is_local());
    }

    #[test]
    fn enum_example_value_errors_on_empty() {
        let empty = enumeration("nothing", &[]);
        assert!(matches!(
            enum_example_value(&empty),
            Err(ResolveError::EmptyEnum { .. })
        ));
    }

    #[test]
    fn find_operation_matches_cleaned_paths() {
        let mut home = service("home", &["user"], &[]);
        home.resources.push(Resource {
            resource_type: "user".into(),
            plural: None,
            description: None,
            operations: vec![
                Operation {
                    method: "GET".into(),
                    path: "/users".into(),
                    description: None,
                },
                Operation {
                    method: "GET".into(),
                    path: "/users/:id".into(),
                    description: None,
                },
            ],
        });

        let op = find_operation("user", "get", "/users/{id}", &home).unwrap();
        assert_eq!(op.path, "/users/:id");
        let op = find_operation("user", "Get", "users", &home).unwrap();
        assert_eq!(op.path, "/users");
    }
}
