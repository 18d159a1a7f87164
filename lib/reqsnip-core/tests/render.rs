use reqsnip_core::{
    CurlSnippet, Operation, PythonSnippet, RenderSnippet, SnippetConfig, SnippetError,
};
use serde_json::json;

fn petstore_config() -> SnippetConfig {
    SnippetConfig::from_url("https://petstore.example.com/docs/").expect("valid page url")
}

fn find_pets_by_status() -> Operation {
    serde_json::from_value(json!({
        "method": "get",
        "path": "/pet/findByStatus",
        "serverUrl": "/api/v3",
        "parameters": [
            {
                "name": "status",
                "in": "query",
                "schema": {
                    "type": "string",
                    "default": "available",
                    "enum": ["available", "pending", "sold"]
                }
            },
            {
                "name": "tags",
                "in": "query",
                "example": ["tag1", "tag2"]
            }
        ],
        "apiKeys": [
            { "name": "api_key", "in": "header", "displayName": "<api-key>" }
        ]
    }))
    .expect("valid operation")
}

fn update_pet_with_form() -> Operation {
    serde_json::from_value(json!({
        "method": "post",
        "path": "/pet/{petId}",
        "serverUrl": "https://petstore.example.com/api/v3/",
        "parameters": [
            { "name": "petId", "in": "path", "example": 10 }
        ],
        "requestBody": {
            "mediaTypes": [
                {
                    "name": "application/x-www-form-urlencoded",
                    "examples": {
                        "name": { "mime": "text/plain", "value": "doggie" },
                        "status": { "mime": "text/plain", "value": "sold" }
                    }
                }
            ]
        }
    }))
    .expect("valid operation")
}

#[test]
fn should_render_curl_for_relative_server() -> anyhow::Result<()> {
    let snippet = CurlSnippet::new(petstore_config()).render_operation(&find_pets_by_status())?;

    insta::assert_snapshot!(snippet, @r#"
    curl -i -X GET "https://petstore.example.com/api/v3/pet/findByStatus?status=available&tags=tag1&tags=tag2" \
     -H "api_key: <api-key>" \
     -H "Accept: application/json" \
    "#);
    Ok(())
}

#[test]
fn should_render_python_for_relative_server() -> anyhow::Result<()> {
    let snippet = PythonSnippet::new(petstore_config()).render_operation(&find_pets_by_status())?;

    insta::assert_snapshot!(snippet, @r#"
    import requests

    url = "https://petstore.example.com/api/v3/pet/findByStatus"

    headers = {
      "api_key": "<api-key>",
      "Accept": "application/json"
    }

    params = {
      "status": "available",
      "tags": [
        "tag1",
        "tag2"
      ]
    }

    response = requests.request("GET", url, headers=headers, params=params)

    print(response.status_code)
    print(response.json())
    "#);
    Ok(())
}

#[test]
fn should_render_form_request() -> anyhow::Result<()> {
    let operation = update_pet_with_form();

    let curl = CurlSnippet::default().render_operation(&operation)?;
    insta::assert_snapshot!(curl, @r#"
    curl -i -X POST "https://petstore.example.com/api/v3/pet/10" \
     -H "Content-Type: application/x-www-form-urlencoded" \
     -H "Accept: application/json" \
     -d name=doggie&status=sold \
    "#);

    let python = PythonSnippet::default().render_operation(&operation)?;
    assert!(python.contains("payload = name=doggie&status=sold"));
    assert!(python.contains(r#"requests.request("POST", url, data=payload, headers=headers)"#));
    Ok(())
}

#[test]
fn should_report_malformed_multipart_example() {
    let operation: Operation = serde_json::from_value(json!({
        "method": "post",
        "path": "/pet/upload",
        "serverUrl": "https://petstore.example.com",
        "requestBody": {
            "mediaTypes": [
                {
                    "name": "multipart/form-data",
                    "examples": { "default": { "mime": "multipart/form-data", "value": [1, 2] } }
                }
            ]
        }
    }))
    .expect("valid operation");

    let result = CurlSnippet::default().render_operation(&operation);

    assert!(matches!(
        result,
        Err(SnippetError::ExampleNotAnObject { .. })
    ));
}
