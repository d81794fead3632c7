use std::collections::HashSet;

use heck::{ToKebabCase, ToSnakeCase};
use indexmap::IndexMap;
use minijinja::{Environment, context};
use ocg_core::extract::DEFAULT_TAG;
use ocg_core::model::{Document, Operation, Parameter};
use serde::Serialize;

use crate::type_mapper::{
    option_name, parameter_type_to_click, python_identifier, python_literal, python_string,
};

/// Escape backslashes and double quotes so the value reads back verbatim
/// inside a `"""` docstring.
fn escape_docstring(value: String) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Hands out names unique within one operation, appending a counter to
/// repeats.
struct UniqueNames {
    used: HashSet<String>,
    separator: &'static str,
}

impl UniqueNames {
    fn new(separator: &'static str, reserved: &[&str]) -> Self {
        Self {
            used: reserved.iter().map(|name| name.to_string()).collect(),
            separator,
        }
    }

    fn claim(&mut self, base: String) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}{}{n}", self.separator);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[derive(Debug, Serialize)]
struct ParamContext {
    name: String,
    py_name: String,
    option: String,
    click_type: &'static str,
    required: bool,
    default: Option<String>,
    help: String,
}

#[derive(Debug, Serialize)]
struct OperationContext {
    name: String,
    function: String,
    command: String,
    method: &'static str,
    path: String,
    tag: String,
    module: String,
    import_alias: String,
    import_statement: String,
    help: String,
    deprecated: bool,
    path_params: Vec<ParamContext>,
    query_params: Vec<ParamContext>,
    has_body: bool,
    body_required: bool,
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_filter("escape_docstring", escape_docstring);
    env
}

/// Emit `cli.py` from the built-in template, or from `custom_template` when
/// given. Custom templates see the same context as the built-in one.
pub fn emit_cli(
    doc: &Document,
    client_module: &str,
    custom_template: Option<&str>,
) -> Result<String, minijinja::Error> {
    let mut env = environment();

    let operations: Vec<OperationContext> = doc
        .operations()
        .iter()
        .map(|op| build_operation_context(op, client_module))
        .collect();

    let endpoint_imports: Vec<&str> = operations
        .iter()
        .map(|op| op.import_statement.as_str())
        .collect();
    let function_mappings: IndexMap<&str, &str> = operations
        .iter()
        .map(|op| (op.function.as_str(), op.import_alias.as_str()))
        .collect();

    let ctx = context! {
        title => doc.title(),
        api_version => doc.api_version(),
        client_module => client_module,
        paths => doc.raw_paths(),
        operations => &operations,
        endpoint_imports => &endpoint_imports,
        function_mappings => &function_mappings,
    };

    match custom_template {
        Some(source) => env.render_str(source, ctx),
        None => {
            env.add_template("cli.py.j2", include_str!("../../templates/cli.py.j2"))?;
            env.get_template("cli.py.j2")?.render(ctx)
        }
    }
}

fn build_operation_context(op: &Operation, client_module: &str) -> OperationContext {
    let method = op.method().as_str();
    let function = format!("{method}_{}", op.name());

    // The client generator lays endpoints out as api/<tag>/<operation_id>.py
    let tag = op
        .tags()
        .first()
        .map(|t| t.to_snake_case())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TAG.to_string());
    let module = op
        .operation_id()
        .map(|id| id.replace("__", "_").to_snake_case())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| function.clone());
    let import_alias = format!("{module}_import");
    let import_statement =
        format!("from {client_module}.api.{tag}.{module} import sync_detailed as {import_alias}");

    let help = [op.summary(), op.description()]
        .into_iter()
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} {}", method.to_uppercase(), op.path()));

    let body_schema = op.body_schema();

    // Click owns --help, and --body is the request body option
    let mut py_names = UniqueNames::new("_", &[]);
    let mut options = UniqueNames::new("-", &["help", "body"]);
    let path_params = op
        .path_parameters()
        .iter()
        .map(|p| {
            let py_name = py_names.claim(python_identifier(p.name()));
            build_param_context(p, py_name, option_name(p.name()))
        })
        .collect();
    let query_params = op
        .query_parameters()
        .iter()
        .map(|p| {
            let py_name = py_names.claim(python_identifier(p.name()));
            build_param_context(p, py_name, options.claim(option_name(p.name())))
        })
        .collect();

    OperationContext {
        name: op.name().to_string(),
        command: function.to_kebab_case(),
        function,
        method,
        path: op.path().to_string(),
        tag,
        module,
        import_alias,
        import_statement,
        help,
        deprecated: op.deprecated(),
        path_params,
        query_params,
        has_body: body_schema.is_some(),
        body_required: body_schema.is_some() && op.body_required(),
    }
}

fn build_param_context(param: &Parameter, py_name: String, option: String) -> ParamContext {
    ParamContext {
        name: param.name().to_string(),
        py_name,
        option,
        click_type: parameter_type_to_click(param.param_type()),
        required: param.required(),
        default: param
            .default_value()
            .filter(|v| !v.is_null())
            .and_then(python_literal),
        help: python_string(param.description()),
    }
}
