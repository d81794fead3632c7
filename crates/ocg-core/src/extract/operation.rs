use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use log::debug;
use serde_json::{Map, Value};

use super::name::path_to_name;
use super::parameter::normalize_parameter;
use super::response::normalize_response;
use super::schema::validate_schema;
use crate::config::NameCollisionPolicy;
use crate::error::ExtractError;
use crate::model::{
    HttpMethod, Operation, OperationResponse, Parameter, ParameterLocation, TypeSchema,
};

/// Tag given to operations that declare none.
pub const DEFAULT_TAG: &str = "default";

/// Options for the extraction pass.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub collisions: NameCollisionPolicy,
}

/// Extract every operation from a raw `paths` mapping with default options.
pub fn extract_operations(paths: &Map<String, Value>) -> Result<Vec<Operation>, ExtractError> {
    extract_operations_with_options(paths, &ExtractOptions::default())
}

/// Extract every `get`, `post`, `put`, `delete` and `patch` operation, paths in
/// document order and methods in document order within each path.
///
/// The first invalid parameter, response or schema aborts the whole run.
pub fn extract_operations_with_options(
    paths: &Map<String, Value>,
    options: &ExtractOptions,
) -> Result<Vec<Operation>, ExtractError> {
    let mut operations = Vec::new();

    for (path, item) in paths {
        let item = match item {
            Value::Object(item) => item,
            Value::Null => continue,
            _ => return Err(Context::path_item(path).shape("path item must be a mapping")),
        };

        let inherited = collect_parameters(&Context::path_item(path), item.get("parameters"))?;

        for (key, raw_op) in item {
            let Some(method) = HttpMethod::from_keyword(key) else {
                continue;
            };
            if !method.is_extracted() {
                debug!("skipping {} {path}", method.as_str().to_uppercase());
                continue;
            }
            let operation = build_operation(path, method, raw_op, &inherited)?;
            debug!(
                "extracted {} {path} as '{}'",
                method.as_str().to_uppercase(),
                operation.name
            );
            operations.push(operation);
        }
    }

    resolve_name_collisions(&mut operations, options.collisions)?;
    Ok(operations)
}

/// Where an error happened, for error messages.
struct Context<'a> {
    path: &'a str,
    method: String,
}

impl<'a> Context<'a> {
    fn operation(path: &'a str, method: HttpMethod) -> Self {
        Self {
            path,
            method: method.as_str().to_uppercase(),
        }
    }

    fn path_item(path: &'a str) -> Self {
        Self {
            path,
            method: "*".to_string(),
        }
    }

    fn shape(&self, reason: impl Into<String>) -> ExtractError {
        ExtractError::OperationShape {
            path: self.path.to_string(),
            method: self.method.clone(),
            reason: reason.into(),
        }
    }
}

fn build_operation(
    path: &str,
    method: HttpMethod,
    raw: &Value,
    inherited: &[Parameter],
) -> Result<Operation, ExtractError> {
    let ctx = Context::operation(path, method);
    let Value::Object(fields) = raw else {
        return Err(ctx.shape("operation must be a mapping"));
    };

    let own = collect_parameters(&ctx, fields.get("parameters"))?;
    let (path_parameters, query_parameters) = partition_parameters(inherited, own);

    let (body_required, body_schema) = request_body(&ctx, fields.get("requestBody"))?;

    Ok(Operation {
        method,
        path: path.to_string(),
        operation_id: optional_string(&ctx, fields, "operationId")?,
        tags: tags(&ctx, fields.get("tags"))?,
        summary: optional_string(&ctx, fields, "summary")?.unwrap_or_default(),
        description: optional_string(&ctx, fields, "description")?.unwrap_or_default(),
        name: path_to_name(path),
        path_parameters,
        query_parameters,
        body_required,
        body_schema,
        responses: responses(&ctx, fields.get("responses"))?,
        deprecated: match fields.get("deprecated") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => return Err(ctx.shape("'deprecated' must be a boolean")),
        },
    })
}

fn optional_string(
    ctx: &Context<'_>,
    fields: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, ExtractError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ctx.shape(format!("'{key}' must be a string"))),
    }
}

fn tags(ctx: &Context<'_>, raw: Option<&Value>) -> Result<Vec<String>, ExtractError> {
    let tags = match raw {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|tag| {
                tag.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ctx.shape("'tags' must contain only strings"))
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ctx.shape("'tags' must be a sequence")),
    };

    if tags.is_empty() {
        Ok(vec![DEFAULT_TAG.to_string()])
    } else {
        Ok(tags)
    }
}

/// A bare `{"$ref": ...}` object. References are not resolved.
fn is_reference(raw: &Value) -> bool {
    raw.as_object().is_some_and(|m| m.contains_key("$ref"))
}

fn collect_parameters(
    ctx: &Context<'_>,
    raw: Option<&Value>,
) -> Result<Vec<Parameter>, ExtractError> {
    let entries = match raw {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(ctx.shape("'parameters' must be a sequence")),
    };

    let mut params = Vec::with_capacity(entries.len());
    for entry in entries {
        if is_reference(entry) && entry.get("name").is_none() {
            debug!(
                "{} {}: skipping unresolved parameter reference {}",
                ctx.method, ctx.path, entry["$ref"]
            );
            continue;
        }
        params.push(normalize_parameter(entry)?);
    }
    Ok(params)
}

/// Route parameters to the path and query sequences. Path-level parameters come
/// first unless the operation redeclares the same name and location. Header and
/// cookie parameters have no destination and are dropped.
fn partition_parameters(
    inherited: &[Parameter],
    own: Vec<Parameter>,
) -> (Vec<Parameter>, Vec<Parameter>) {
    let overridden = |p: &Parameter| {
        own.iter()
            .any(|o| o.name == p.name && o.location == p.location)
    };
    let merged: Vec<Parameter> = inherited
        .iter()
        .filter(|p| !overridden(*p))
        .cloned()
        .chain(own.iter().cloned())
        .collect();

    let mut path_params = Vec::new();
    let mut query_params = Vec::new();
    for param in merged {
        match param.location {
            ParameterLocation::Path => path_params.push(param),
            ParameterLocation::Query => query_params.push(param),
            ParameterLocation::Header | ParameterLocation::Cookie => {
                debug!("dropping {} parameter '{}'", param.location, param.name);
            }
        }
    }
    (path_params, query_params)
}

fn responses(
    ctx: &Context<'_>,
    raw: Option<&Value>,
) -> Result<IndexMap<String, OperationResponse>, ExtractError> {
    let entries = match raw {
        None | Some(Value::Null) => return Ok(IndexMap::new()),
        Some(Value::Object(entries)) => entries,
        Some(_) => return Err(ctx.shape("'responses' must be a mapping")),
    };

    let empty = Map::new();
    let mut responses = IndexMap::with_capacity(entries.len());
    for (status, raw_response) in entries {
        let fields = match raw_response {
            Value::Object(fields) => fields,
            Value::Null => &empty,
            _ => {
                return Err(ctx.shape(format!("response '{status}' must be a mapping")));
            }
        };
        responses.insert(status.clone(), normalize_response(status, fields)?);
    }
    Ok(responses)
}

/// `(required, schema)` of the request body. Only the `application/json`
/// entry contributes a schema.
fn request_body(
    ctx: &Context<'_>,
    raw: Option<&Value>,
) -> Result<(bool, Option<TypeSchema>), ExtractError> {
    let body = match raw {
        None | Some(Value::Null) => return Ok((false, None)),
        Some(Value::Object(body)) => body,
        Some(_) => return Err(ctx.shape("'requestBody' must be a mapping")),
    };

    let required = body.get("required").and_then(Value::as_bool).unwrap_or(false);
    let schema = match body
        .get("content")
        .and_then(|content| content.get("application/json"))
        .and_then(|media| media.get("schema"))
    {
        None | Some(Value::Null) => None,
        Some(raw_schema) => Some(validate_schema(raw_schema)?),
    };

    Ok((required, schema))
}

fn label(op: &Operation) -> String {
    format!("{} {}", op.method.as_str().to_uppercase(), op.path)
}

fn resolve_name_collisions(
    operations: &mut [Operation],
    policy: NameCollisionPolicy,
) -> Result<(), ExtractError> {
    match policy {
        NameCollisionPolicy::Allow => Ok(()),
        NameCollisionPolicy::Reject => {
            let mut seen: HashMap<&str, String> = HashMap::new();
            for op in operations.iter() {
                if let Some(first) = seen.get(op.name.as_str()) {
                    return Err(ExtractError::NameCollision {
                        name: op.name.clone(),
                        first: first.clone(),
                        second: label(op),
                    });
                }
                seen.insert(&op.name, label(op));
            }
            Ok(())
        }
        NameCollisionPolicy::Suffix => {
            let mut used: HashSet<String> = HashSet::new();
            for op in operations.iter_mut() {
                if used.insert(op.name.clone()) {
                    continue;
                }
                let mut n = 2;
                let renamed = loop {
                    let candidate = format!("{}_{n}", op.name);
                    if used.insert(candidate.clone()) {
                        break candidate;
                    }
                    n += 1;
                };
                debug!("renamed {} to '{renamed}'", label(op));
                op.name = renamed;
            }
            Ok(())
        }
    }
}
