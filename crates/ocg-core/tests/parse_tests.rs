use ocg_core::error::{DocumentShapeError, ParseError};
use ocg_core::model::Document;
use ocg_core::parse::{self, SourceFormat};

const ITEMS: &str = include_str!("fixtures/items.yaml");
const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const TEST_JSON: &str = include_str!("fixtures/openapi.json");

#[test]
fn parse_items_yaml() {
    let raw = parse::from_yaml(ITEMS).expect("should parse items.yaml");
    let doc = Document::from_value(raw).expect("should be a valid document");
    assert_eq!(doc.version(), "3.0.3");
    assert_eq!(doc.title(), "Items API");
    assert_eq!(doc.raw_paths().len(), 1);

    // Unquoted status keys decode as strings
    let responses = doc.raw_paths()["/items/{itemId}"]["get"]["responses"]
        .as_object()
        .unwrap();
    assert!(responses.contains_key("200"));
}

#[test]
fn parse_petstore_yaml() {
    let raw = parse::from_yaml(PETSTORE).expect("should parse petstore");
    let doc = Document::from_value(raw).unwrap();
    assert_eq!(doc.version(), "3.1.0");
    assert_eq!(doc.title(), "Petstore");
    assert_eq!(doc.api_version(), Some("2.4.0"));
    let paths: Vec<&String> = doc.raw_paths().keys().collect();
    assert_eq!(paths, vec!["/pets", "/pets/{petId}", "/store/inventoryStatus"]);
}

#[test]
fn parse_json_document() {
    let raw = SourceFormat::Json.parse(TEST_JSON).unwrap();
    let doc = Document::from_value(raw).unwrap();
    assert_eq!(doc.version(), "3.0.0");
    assert_eq!(doc.info()["title"], "Test API");
    assert!(doc.raw_paths().contains_key("/test"));
}

#[test]
fn raw_paths_are_untouched() {
    let raw = parse::from_yaml(PETSTORE).unwrap();
    let expected_paths = raw["paths"].clone();
    let doc = Document::from_value(raw).unwrap();
    assert_eq!(
        serde_json::Value::Object(doc.raw_paths().clone()),
        expected_paths
    );
}

#[test]
fn parse_invalid_version() {
    let yaml = r#"
openapi: "2.0.0"
info:
  title: Test
  version: "1.0"
paths: {}
"#;
    let raw = parse::from_yaml(yaml).unwrap();
    let err = Document::from_value(raw).unwrap_err();
    assert_eq!(
        err,
        DocumentShapeError::UnsupportedVersion("2.0.0".to_string())
    );
    assert!(
        err.to_string()
            .contains("only OpenAPI 3.x specifications are supported")
    );
}

#[test]
fn parse_swagger_key_is_missing_openapi() {
    let yaml = r#"
swagger: "2.0"
info:
  title: Test
  version: "1.0"
paths: {}
"#;
    let raw = parse::from_yaml(yaml).unwrap();
    assert_eq!(
        Document::from_value(raw).unwrap_err(),
        DocumentShapeError::MissingField("openapi")
    );
}

#[test]
fn parse_unquoted_float_version_is_wrong_type() {
    let yaml = "openapi: 3.0\ninfo:\n  title: T\npaths: {}\n";
    let raw = parse::from_yaml(yaml).unwrap();
    assert!(matches!(
        Document::from_value(raw),
        Err(DocumentShapeError::WrongType { field: "openapi", .. })
    ));
}

#[test]
fn parse_rejects_scalar_root() {
    assert!(matches!(
        parse::from_yaml("just a string"),
        Err(ParseError::NotAMapping)
    ));
}
