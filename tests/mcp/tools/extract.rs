use i18nize::mcp::{I18nizeMcpServer, types::ExtractStringsParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_two_packages};

// ============================================================================
// extract_strings tests
// ============================================================================

#[tokio::test]
async fn test_extract_strings_lists_without_writing() {
    let fixture = fixture_two_packages().unwrap();
    let server = I18nizeMcpServer::new();

    let params = Parameters(ExtractStringsParams {
        project_root_path: fixture.root(),
        ..Default::default()
    });

    let result = server.extract_strings(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["written"], false);
    // main.go, greet.go, greet_test.go
    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["fileCount"], 3);
    assert_eq!(json_result["items"][0]["value"], "Starting");
    assert_eq!(json_result["items"][0]["line"], 6);
    assert_eq!(json_result["items"][0]["column"], 14);
    assert_eq!(json_result["items"][1]["value"], "Hello, ");
    assert_eq!(json_result["pagination"]["hasMore"], false);
    assert_eq!(json_result["errors"], json!([]));

    assert!(!fixture.root_path().join("main.go.en.json").exists());
}

#[tokio::test]
async fn test_extract_strings_pagination() {
    let fixture = fixture_two_packages().unwrap();
    let server = I18nizeMcpServer::new();

    let params = Parameters(ExtractStringsParams {
        project_root_path: fixture.root(),
        limit: Some(1),
        offset: Some(1),
        ..Default::default()
    });

    let result = server.extract_strings(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_eq!(json_result["items"][0]["value"], "Hello, ");
    assert_eq!(json_result["pagination"]["hasMore"], true);
}

#[tokio::test]
async fn test_extract_strings_write_catalogs() {
    let fixture = fixture_two_packages().unwrap();
    let server = I18nizeMcpServer::new();

    let params = Parameters(ExtractStringsParams {
        project_root_path: fixture.root(),
        write: Some(true),
        locale: Some("de".to_string()),
        ..Default::default()
    });

    let result = server.extract_strings(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["written"], true);

    let catalog: serde_json::Value =
        serde_json::from_str(&fixture.read_file("greet/greet.go.de.json").unwrap()).unwrap();
    assert_eq!(
        catalog,
        json!([{"id": "Hello, ", "translation": "Hello, "}])
    );
}

#[tokio::test]
async fn test_extract_strings_non_recursive() {
    let fixture = fixture_two_packages().unwrap();
    let server = I18nizeMcpServer::new();

    let params = Parameters(ExtractStringsParams {
        project_root_path: fixture.root(),
        recursive: Some(false),
        ..Default::default()
    });

    let result = server.extract_strings(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 1);
}

#[tokio::test]
async fn test_extract_strings_reports_parse_errors() {
    let fixture = McpTestFixture::with_go_files(vec![
        ("broken.go", "package main\n\nfunc main( {\n"),
        ("ok.go", "package main\n\nvar s = \"fine\"\n"),
    ])
    .unwrap();
    let server = I18nizeMcpServer::new();

    let params = Parameters(ExtractStringsParams {
        project_root_path: fixture.root(),
        ..Default::default()
    });

    let result = server.extract_strings(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["errors"][0]["kind"], "parse");
    assert!(
        json_result["errors"][0]["filePath"]
            .as_str()
            .is_some_and(|path| path.ends_with("broken.go"))
    );
}

#[tokio::test]
async fn test_extract_strings_missing_root_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nizeMcpServer::new();

    let params = Parameters(ExtractStringsParams {
        project_root_path: fixture.root_path().join("missing").to_string_lossy().to_string(),
        ..Default::default()
    });

    assert!(server.extract_strings(params).await.is_err());
}
