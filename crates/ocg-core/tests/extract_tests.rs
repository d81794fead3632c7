use ocg_core::config::NameCollisionPolicy;
use ocg_core::error::{CoreError, ExtractError, SchemaError};
use ocg_core::extract::{self, ExtractOptions};
use ocg_core::model::{
    Document, HttpMethod, Operation, ParameterLocation, ParameterType, SchemaType,
};
use ocg_core::parse::{self, SourceFormat};

const ITEMS: &str = include_str!("fixtures/items.yaml");
const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const BAD_STATUS: &str = include_str!("fixtures/bad-status.yaml");
const BAD_FORMAT: &str = include_str!("fixtures/bad-format.yaml");

fn load(yaml: &str) -> Document {
    ocg_core::load(yaml, SourceFormat::Yaml, &ExtractOptions::default()).unwrap()
}

fn find<'a>(doc: &'a Document, method: HttpMethod, path: &str) -> &'a Operation {
    doc.operations()
        .iter()
        .find(|op| op.method() == method && op.path() == path)
        .unwrap_or_else(|| panic!("missing {method} {path}"))
}

#[test]
fn extract_items_scenario() {
    let doc = load(ITEMS);
    assert_eq!(doc.operations().len(), 1);

    let op = &doc.operations()[0];
    assert_eq!(op.method(), HttpMethod::Get);
    assert_eq!(op.path(), "/items/{itemId}");
    assert_eq!(op.name(), "items_item_id");
    assert_eq!(op.tags(), ["default".to_string()]);
    assert_eq!(op.summary(), "");
    assert!(!op.deprecated());

    assert_eq!(op.path_parameters().len(), 1);
    let item_id = &op.path_parameters()[0];
    assert_eq!(item_id.name(), "itemId");
    assert!(item_id.required());
    assert_eq!(item_id.param_type(), ParameterType::String);
    assert_eq!(item_id.location(), ParameterLocation::Path);
    assert!(op.query_parameters().is_empty());

    assert_eq!(op.responses().len(), 1);
    let ok = &op.responses()["200"];
    assert_eq!(ok.status_code(), "200");
    assert_eq!(ok.content_type(), Some("application/json"));
    assert_eq!(ok.schema().unwrap().schema_type(), SchemaType::Array);
    assert!(op.has_json_response());
    assert!(!op.body_required());
    assert!(op.body_schema().is_none());
}

#[test]
fn extract_petstore_operations_in_document_order() {
    let doc = load(PETSTORE);
    let listed: Vec<String> = doc
        .operations()
        .iter()
        .map(|op| format!("{} {}", op.method(), op.path()))
        .collect();
    assert_eq!(
        listed,
        vec![
            "get /pets",
            "post /pets",
            "get /pets/{petId}",
            "delete /pets/{petId}",
            "get /store/inventoryStatus",
        ]
    );
}

#[test]
fn extract_petstore_names() {
    let doc = load(PETSTORE);
    let names: Vec<&str> = doc.operations().iter().map(Operation::name).collect();
    insta::assert_snapshot!(
        names.join(","),
        @"pets,pets,pets_pet_id,pets_pet_id,store_inventory_status"
    );
}

#[test]
fn extract_query_parameters_and_dropped_locations() {
    let doc = load(PETSTORE);
    let list = find(&doc, HttpMethod::Get, "/pets");

    assert_eq!(list.operation_id(), Some("listPets"));
    assert_eq!(list.summary(), "List all pets");
    assert!(list.path_parameters().is_empty());

    let names: Vec<&str> = list.query_parameters().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["limit", "status"]);

    let limit = &list.query_parameters()[0];
    assert_eq!(limit.param_type(), ParameterType::Integer);
    assert_eq!(limit.default_value(), Some(&serde_json::json!(20)));
    assert_eq!(limit.schema().unwrap().format(), Some("int32"));
    assert!(!limit.required());

    let status = &list.query_parameters()[1];
    assert_eq!(
        status.schema().unwrap().enum_values().unwrap().len(),
        3
    );

    let required: Vec<&str> = list
        .required_parameters()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(required, vec!["status"]);
}

#[test]
fn extract_request_body() {
    let doc = load(PETSTORE);

    let create = find(&doc, HttpMethod::Post, "/pets");
    assert!(create.body_required());
    assert_eq!(
        create.body_schema().unwrap().schema_type(),
        SchemaType::Object
    );
    assert_eq!(create.tags(), ["pets".to_string(), "admin".to_string()]);
    assert_eq!(create.successful_response().unwrap().status_code(), "201");
    assert!(!create.has_json_response());

    // Only application/json bodies produce a schema
    let inventory = find(&doc, HttpMethod::Get, "/store/inventoryStatus");
    assert!(!inventory.body_required());
    assert!(inventory.body_schema().is_none());
}

#[test]
fn extract_inherits_path_level_parameters() {
    let doc = load(PETSTORE);
    for method in [HttpMethod::Get, HttpMethod::Delete] {
        let op = find(&doc, method, "/pets/{petId}");
        assert_eq!(op.path_parameters().len(), 1);
        let pet_id = &op.path_parameters()[0];
        assert_eq!(pet_id.name(), "petId");
        assert_eq!(pet_id.schema().unwrap().format(), Some("uuid"));
    }
}

#[test]
fn extract_first_content_type_and_json_detection() {
    let doc = load(PETSTORE);
    let inventory = find(&doc, HttpMethod::Get, "/store/inventoryStatus");
    let ok = inventory.successful_response().unwrap();
    assert_eq!(ok.content_type(), Some("application/json; charset=utf-8"));
    assert!(inventory.has_json_response());
}

#[test]
fn extract_skips_head_and_options() {
    let doc = load(PETSTORE);
    assert!(
        doc.operations()
            .iter()
            .all(|op| op.method().is_extracted())
    );
}

#[test]
fn extract_deprecated_flag() {
    let doc = load(PETSTORE);
    assert!(find(&doc, HttpMethod::Delete, "/pets/{petId}").deprecated());
    assert!(!find(&doc, HttpMethod::Get, "/pets/{petId}").deprecated());
}

#[test]
fn operations_by_tag() {
    let doc = load(PETSTORE);
    let pets: Vec<&str> = doc
        .operations_by_tag("pets")
        .iter()
        .map(|op| op.operation_id().unwrap())
        .collect();
    assert_eq!(pets, vec!["listPets", "createPet", "showPetById"]);

    let admin: Vec<&str> = doc
        .operations_by_tag("admin")
        .iter()
        .map(|op| op.operation_id().unwrap())
        .collect();
    assert_eq!(admin, vec!["createPet", "deletePet"]);

    assert_eq!(doc.operations_by_tag("default").len(), 1);
    assert!(doc.operations_by_tag("missing").is_empty());
}

#[test]
fn path_and_query_parameters_partitioned_exactly_once() {
    let doc = load(PETSTORE);
    for op in doc.operations() {
        for p in op.path_parameters() {
            assert_eq!(p.location(), ParameterLocation::Path);
            assert!(!op.query_parameters().contains(p));
        }
        for p in op.query_parameters() {
            assert_eq!(p.location(), ParameterLocation::Query);
        }
    }
}

#[test]
fn extraction_is_idempotent() {
    let raw = parse::from_yaml(PETSTORE).unwrap();
    let doc = Document::from_value(raw).unwrap();
    let first = extract::extract_operations(doc.raw_paths()).unwrap();
    let second = extract::extract_operations(doc.raw_paths()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn document_starts_without_operations() {
    let raw = parse::from_yaml(PETSTORE).unwrap();
    let doc = Document::from_value(raw).unwrap();
    assert!(doc.operations().is_empty());

    let operations = extract::extract_operations(doc.raw_paths()).unwrap();
    let count = operations.len();
    let doc = doc.with_operations(operations);
    assert_eq!(doc.operations().len(), count);
}

#[test]
fn invalid_status_code_aborts_extraction() {
    let err = ocg_core::load(BAD_STATUS, SourceFormat::Yaml, &ExtractOptions::default())
        .unwrap_err();
    match err {
        CoreError::Extract(ExtractError::InvalidStatusCode(code)) => assert_eq!(code, "999"),
        other => panic!("expected InvalidStatusCode, got {other:?}"),
    }
}

#[test]
fn default_response_key_is_rejected() {
    let yaml = r#"
openapi: 3.0.0
info: { title: T }
paths:
  /a:
    get:
      responses:
        default:
          description: error
"#;
    let err = ocg_core::load(yaml, SourceFormat::Yaml, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Extract(ExtractError::InvalidStatusCode(_))
    ));
}

#[test]
fn string_with_int32_format_is_rejected() {
    let err = ocg_core::load(BAD_FORMAT, SourceFormat::Yaml, &ExtractOptions::default())
        .unwrap_err();
    match err {
        CoreError::Extract(ExtractError::Schema(SchemaError::Format {
            format,
            schema_type,
        })) => {
            assert_eq!(format, "int32");
            assert_eq!(schema_type, "string");
        }
        other => panic!("expected SchemaFormatError, got {other:?}"),
    }
}

#[test]
fn missing_parameter_name_aborts_extraction() {
    let yaml = r#"
openapi: 3.0.0
info: { title: T }
paths:
  /a:
    get:
      parameters:
        - in: query
"#;
    let err = ocg_core::load(yaml, SourceFormat::Yaml, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Extract(ExtractError::ParameterShape(_))
    ));
}

#[test]
fn method_keys_are_case_insensitive() {
    let yaml = r#"
openapi: 3.0.0
info: { title: T }
paths:
  /a:
    GET: {}
    Trace: {}
    summary: ignored
"#;
    let doc = load(yaml);
    assert_eq!(doc.operations().len(), 1);
    assert_eq!(doc.operations()[0].method(), HttpMethod::Get);
}

#[test]
fn suffix_policy_makes_names_unique() {
    let options = ExtractOptions {
        collisions: NameCollisionPolicy::Suffix,
    };
    let doc = ocg_core::load(PETSTORE, SourceFormat::Yaml, &options).unwrap();
    let names: Vec<&str> = doc.operations().iter().map(Operation::name).collect();
    assert_eq!(
        names,
        vec![
            "pets",
            "pets_2",
            "pets_pet_id",
            "pets_pet_id_2",
            "store_inventory_status"
        ]
    );
}

#[test]
fn reject_policy_reports_both_operations() {
    let options = ExtractOptions {
        collisions: NameCollisionPolicy::Reject,
    };
    let err = ocg_core::load(PETSTORE, SourceFormat::Yaml, &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "extraction failed: operation name 'pets' of POST /pets collides with GET /pets"
    );
}
