use openapi_from_descriptors::{
    descriptor::{ApiResponseDescriptor, DescriptorSet},
    document::Schema,
    error::Error,
    resolver::{SchemaRegistry, SchemaResolver},
    schema_generator::SourceSchemaResolver,
    serializer::{serialize_json, serialize_yaml},
    translator::Translator,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Helper function to create a temporary source project
fn create_test_project(files: Vec<(&str, &str)>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for (path, content) in files {
        let file_path = temp_dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&file_path, content).expect("Failed to write test file");
    }

    temp_dir
}

const MODELS: &str = r#"
use serde::Serialize;

#[derive(Serialize)]
pub struct Widget {
    pub id: i64,
    pub label: String,
    pub dimensions: Option<Dimensions>,
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
}

#[derive(Serialize)]
pub enum Unit {
    Millimetre,
    Inch,
}

#[derive(Serialize)]
pub struct ApiError {
    #[serde(rename = "errorCode")]
    pub code: u16,
    pub message: String,
}
"#;

const DESCRIPTORS: &str = r#"
responses:
  - responseCode: "200"
    description: The widget
    headers:
      - name: X-Rate-Limit
        description: Calls per hour
        required: true
      - name: X-Trace
        ref: TraceHeader
    content:
      - mediaType: application/json
        schema:
          implementation: Widget
        examples:
          - name: small
            summary: A small widget
            value: '{"id": 1}'
      - mediaType: application/x-ndjson
        array:
          schema:
            implementation: Widget
          arraySchema:
            description: Stream of widgets
          minItems: 1
    links:
      - name: owner
        operationId: getOwner
        parameters:
          - name: widgetId
            expression: $response.body#/id
  - responseCode: "404"
    description: Not found
    content:
      - mediaType: application/json
        schema:
          implementation: ApiError
  - ref: ServerError
tags:
  - name: widgets
    description: Widget operations
    externalDocs:
      url: https://docs.example.com/widgets
security:
  - name: oauth
    scopes: ["widgets:read"]
servers:
  - url: https://{region}.example.com
    description: Regional endpoint
    variables:
      - name: region
        description: Deployment region
        default: eu
        allowableValues: [eu, us]
externalDocs:
  description: Handbook
  url: https://docs.example.com
"#;

fn translate(descriptors: &str, resolver: &dyn SchemaResolver) -> serde_json::Value {
    let set: DescriptorSet = serde_yaml::from_str(descriptors).expect("Failed to decode descriptors");
    let document = Translator::new(resolver)
        .descriptor_set(&set)
        .expect("Failed to translate descriptors");
    let json = serialize_json(&document).expect("Failed to serialize document");
    serde_json::from_str(&json).expect("Output should be valid JSON")
}

#[test]
fn test_descriptor_file_end_to_end() {
    let project = create_test_project(vec![("src/models.rs", MODELS)]);
    let resolver = SourceSchemaResolver::from_project(project.path()).expect("Failed to index project");

    let doc = translate(DESCRIPTORS, &resolver);

    // Responses
    let ok = &doc["responses"]["200"];
    assert_eq!(ok["description"], "The widget");
    assert_eq!(ok["headers"]["X-Rate-Limit"]["required"], true);
    assert_eq!(ok["headers"]["X-Rate-Limit"]["deprecated"], false);
    assert_eq!(
        ok["headers"]["X-Trace"]["$ref"],
        "#/components/headers/TraceHeader"
    );

    let widget = &ok["content"]["application/json"]["schema"];
    assert_eq!(widget["type"], "object");
    assert_eq!(widget["properties"]["id"]["format"], "int64");
    assert_eq!(
        widget["properties"]["dimensions"]["$ref"],
        "#/components/schemas/Dimensions"
    );
    assert_eq!(widget["properties"]["tags"]["type"], "array");
    assert_eq!(
        ok["content"]["application/json"]["examples"]["small"]["value"],
        "{\"id\": 1}"
    );

    let stream = &ok["content"]["application/x-ndjson"]["schema"];
    assert_eq!(stream["type"], "array");
    assert_eq!(stream["description"], "Stream of widgets");
    assert_eq!(stream["items"]["type"], "object");
    assert!(stream.get("minItems").is_none());

    assert_eq!(ok["links"]["owner"]["operationId"], "getOwner");
    assert_eq!(
        ok["links"]["owner"]["parameters"]["widgetId"],
        "$response.body#/id"
    );

    let not_found = &doc["responses"]["404"]["content"]["application/json"]["schema"];
    assert!(not_found["properties"].get("errorCode").is_some());
    assert!(not_found["properties"].get("code").is_none());

    assert_eq!(
        doc["responses"]["default"]["$ref"],
        "#/components/responses/ServerError"
    );

    // Tags, security, servers, external docs
    assert_eq!(doc["tags"][0]["name"], "widgets");
    assert_eq!(
        doc["tags"][0]["externalDocs"]["url"],
        "https://docs.example.com/widgets"
    );
    assert_eq!(doc["security"][0]["oauth"][0], "widgets:read");

    let region = &doc["servers"][0]["variables"]["region"];
    assert_eq!(region["description"], "Deployment region");
    assert!(region.get("default").is_none());
    assert!(region.get("enum").is_none());

    assert_eq!(doc["externalDocs"]["description"], "Handbook");
}

#[test]
fn test_unknown_implementation_type_fails() {
    let project = create_test_project(vec![("src/models.rs", MODELS)]);
    let resolver = SourceSchemaResolver::from_project(project.path()).expect("Failed to index project");
    let set: DescriptorSet = serde_yaml::from_str(
        r#"
responses:
  - responseCode: "200"
    content:
      - schema:
          implementation: Gadget
"#,
    )
    .unwrap();

    let result = Translator::new(&resolver).descriptor_set(&set);

    match result {
        Err(Error::UnresolvedType { type_name }) => assert_eq!(type_name, "Gadget"),
        other => panic!("Expected unresolved type error, got {:?}", other),
    }
}

#[test]
fn test_registry_resolver_end_to_end() {
    let registry = SchemaRegistry::new().with_schema(
        "Widget",
        Schema {
            description: Some("Registered widget".to_string()),
            ..Schema::of_type("object", None)
        },
    );

    let doc = translate(
        r#"
responses:
  - responseCode: "201"
    description: Created
    content:
      - schema:
          implementation: Widget
          name: CreatedWidget
"#,
        &registry,
    );

    let schema = &doc["responses"]["201"]["content"]["*/*"]["schema"];
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["description"], "Registered widget");
    // The schema name is not part of the serialized node
    assert!(schema.get("name").is_none());
}

#[test]
fn test_empty_descriptor_file() {
    let registry = SchemaRegistry::new();

    let doc = translate("{}", &registry);

    assert_eq!(doc, serde_json::json!({}));
}

#[test]
fn test_yaml_output_is_readable_back() {
    let registry = SchemaRegistry::new();
    let document = Translator::new(&registry)
        .descriptor_set(&DescriptorSet {
            responses: vec![ApiResponseDescriptor::new("204", "No Content")],
            ..DescriptorSet::default()
        })
        .unwrap();

    let yaml = serialize_yaml(&document).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(
        value["responses"]["204"]["description"],
        serde_yaml::Value::String("No Content".to_string())
    );
}

#[test]
fn test_translator_is_shareable_across_threads() {
    let project = create_test_project(vec![("src/models.rs", MODELS)]);
    let resolver = SourceSchemaResolver::from_project(project.path()).expect("Failed to index project");
    let set: DescriptorSet = serde_yaml::from_str(DESCRIPTORS).unwrap();

    let documents: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| Translator::new(&resolver).descriptor_set(&set).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for document in &documents[1..] {
        assert_eq!(document, &documents[0]);
    }
}
