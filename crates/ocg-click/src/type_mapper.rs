use heck::{ToKebabCase, ToSnakeCase};
use ocg_core::model::ParameterType;
use serde_json::Value;

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Names the generated command functions already bind or reference.
const RESERVED_NAMES: &[&str] = &["body", "click", "client", "json", "kwargs", "response"];

/// Map a parameter type to the Click parameter type used to parse it.
pub fn parameter_type_to_click(param_type: ParameterType) -> &'static str {
    match param_type {
        ParameterType::String => "str",
        ParameterType::Integer => "int",
        ParameterType::Number => "float",
        ParameterType::Boolean => "bool",
        // Structured values are passed through as raw strings
        ParameterType::Array | ParameterType::Object => "str",
    }
}

/// A snake_case Python identifier for an arbitrary name. Keywords, names the
/// generated code already uses and leading digits get an extra `_`.
pub fn python_identifier(name: &str) -> String {
    let snake = name.to_snake_case();
    if snake.is_empty() {
        return "value".to_string();
    }
    if PYTHON_KEYWORDS.contains(&snake.as_str()) || RESERVED_NAMES.contains(&snake.as_str()) {
        return format!("{snake}_");
    }
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{snake}");
    }
    snake
}

/// The `--option-name` spelling of a parameter name.
pub fn option_name(name: &str) -> String {
    name.to_kebab_case()
}

/// Render a JSON value as a Python literal. Arrays and objects have no Click
/// default representation and yield `None`.
pub fn python_literal(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("None".to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(python_string(s)),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// A double-quoted Python string literal.
pub fn python_string(s: &str) -> String {
    // JSON string escapes are valid Python escapes
    Value::String(s.to_string()).to_string()
}
