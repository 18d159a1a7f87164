use reqsnip_core::{Operation, SnippetConfig, SnippetTarget};
use tracing::info;

const ADD_PET: &str = r"
method: post
path: /pet
serverUrl: /api/v3
parameters:
  - name: X-Request-ID
    in: header
    example: 6f1c2a
  - name: dryRun
    in: query
    schema:
      type: boolean
      default: false
security:
  - name: api_key
    in: header
    displayName: <api-key>
requestBody:
  mediaTypes:
    - name: application/json
      examples:
        default:
          mime: application/json
          value:
            id: 10
            name: doggie
            status: available
";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let config = SnippetConfig::from_url("https://petstore.example.com/docs/")?;
    let operation = Operation::from_yaml(ADD_PET)?;
    info!(method = %operation.method, path = %operation.path, "operation loaded");

    for target in SnippetTarget::ALL {
        let snippet = target.render_operation(&operation, &config)?;
        println!("# {target}\n{snippet}\n");
    }

    Ok(())
}
