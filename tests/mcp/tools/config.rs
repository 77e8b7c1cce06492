use i18nize::mcp::{I18nizeMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nizeMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    // Check default config values
    assert_eq!(json_result["config"]["locale"], "en");
    assert_eq!(json_result["config"]["wrapperSymbol"], "T");
    assert_eq!(json_result["config"]["extractTestFiles"], true);
    assert!(json_result["config"]["ignores"].is_array());
    assert_eq!(json_result["fromFile"], false);
    assert!(json_result["configPath"].is_null());
}

#[tokio::test]
async fn test_get_config_from_rc_file() {
    let fixture = McpTestFixture::new().unwrap();

    // Write custom config
    fixture
        .write_config(&json!({
            "locale": "ja",
            "wrapperSymbol": "Tr",
            "ignores": ["vendor/**"]
        }))
        .unwrap();

    let server = I18nizeMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    // Should use custom config
    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["locale"], "ja");
    assert_eq!(json_result["config"]["wrapperSymbol"], "Tr");
    assert_eq!(json_result["config"]["ignores"], json!(["vendor/**"]));
    assert!(
        json_result["configPath"]
            .as_str()
            .is_some_and(|path| path.ends_with(".i18nizerc.json"))
    );
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_file(".i18nizerc.json", "{ not json").unwrap();

    let server = I18nizeMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
