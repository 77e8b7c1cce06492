use i18nize::mcp::{I18nizeMcpServer, types::RewritePackageParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{extract_tool_result_json, fixture_two_packages};

// ============================================================================
// rewrite_package tests
// ============================================================================

#[tokio::test]
async fn test_rewrite_package_dry_run() {
    let fixture = fixture_two_packages().unwrap();
    let server = I18nizeMcpServer::new();

    let params = Parameters(RewritePackageParams {
        project_root_path: fixture.root(),
        dry_run: Some(true),
        ..Default::default()
    });

    let result = server.rewrite_package(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["dryRun"], true);
    assert_eq!(json_result["wrappedCount"], 2);
    assert_eq!(json_result["rewrittenFileCount"], 2);
    assert_eq!(json_result["initArtifactCount"], 2);
    assert_eq!(json_result["packages"].as_array().unwrap().len(), 2);

    assert!(!fixture.read_file("main.go").unwrap().contains("T(\""));
    assert!(!fixture.root_path().join("i18n_init.go").exists());
}

#[tokio::test]
async fn test_rewrite_package_writes_sources() {
    let fixture = fixture_two_packages().unwrap();
    let server = I18nizeMcpServer::new();

    let params = Parameters(RewritePackageParams {
        project_root_path: fixture.root(),
        ..Default::default()
    });

    let result = server.rewrite_package(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["wrappedCount"], 2);

    let greet = fixture.read_file("greet/greet.go").unwrap();
    assert!(greet.contains("return T(\"Hello, \") + name"));
    assert!(greet.contains("import . \"github.com/i18nize/i18nize/i18n\""));
    assert_eq!(
        fixture.read_file("greet/greet_test.go").unwrap(),
        "package greet\n\nvar want = \"Hello, Gopher\"\n"
    );
    assert!(
        fixture
            .read_file("greet/i18n_init.go")
            .unwrap()
            .contains("package greet\n")
    );

    // Second run finds nothing left to wrap.
    let params = Parameters(RewritePackageParams {
        project_root_path: fixture.root(),
        ..Default::default()
    });
    let result = server.rewrite_package(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["wrappedCount"], 0);
    assert_eq!(json_result["packages"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_rewrite_package_custom_wrapper() {
    let fixture = fixture_two_packages().unwrap();
    let server = I18nizeMcpServer::new();

    let params = Parameters(RewritePackageParams {
        project_root_path: fixture.root(),
        recursive: Some(false),
        wrapper_symbol: Some("Tr".to_string()),
        runtime_package: Some("example.com/app/i18n".to_string()),
        ..Default::default()
    });

    let result = server.rewrite_package(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["wrappedCount"], 1);

    let main = fixture.read_file("main.go").unwrap();
    assert!(main.contains("fmt.Println(Tr(\"Starting\"))"));
    assert!(main.contains("import . \"example.com/app/i18n\""));
    assert!(!fixture.root_path().join("greet/i18n_init.go").exists());
}
