use gqlvars::mcp::{GqlvarsMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = GqlvarsMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["hooks"], json!(["useQuery"]));
    assert_eq!(json_result["config"]["resultSuffix"], "Query");
    assert_eq!(json_result["config"]["variablesSuffix"], "Variables");
    assert_eq!(json_result["config"]["targetExtension"], ".ts");
    assert_eq!(json_result["config"]["exportLookup"], "textual");
    assert_eq!(json_result["config"]["ignoreTestFiles"], true);
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "hooks": ["useQuery", "useSuspenseQuery"],
            "exportLookup": "structural"
        }))
        .unwrap();

    let server = GqlvarsMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(
        json_result["config"]["hooks"],
        json!(["useQuery", "useSuspenseQuery"])
    );
    assert_eq!(json_result["config"]["exportLookup"], "structural");
    // Unset fields keep their defaults
    assert_eq!(json_result["config"]["variablesSuffix"], "Variables");
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "hooks": [] })).unwrap();

    let server = GqlvarsMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await;
    assert!(result.is_err());
}
