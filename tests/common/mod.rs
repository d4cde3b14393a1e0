#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

use catalog_api_rust::auth::{generate_jwt, Claims, Role};

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Cargo points at the compiled server binary for us
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_catalog-api-rust"));
        cmd.env("CATALOG_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server resolves the same JWT secret the
        // token helpers below use
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            port,
            base_url,
            child,
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

fn mint(subject: &str, roles: Vec<Role>) -> String {
    generate_jwt(Claims::new(subject.to_string(), roles)).expect("failed to mint test token")
}

/// Read-only caller.
pub fn user_token() -> String {
    mint("test-user", vec![Role::User])
}

/// Normal admin: carries both roles, as issued accounts do.
pub fn admin_token() -> String {
    mint("test-admin", vec![Role::User, Role::Admin])
}

/// ADMIN without USER, for proving USER is necessary on reads.
pub fn admin_only_token() -> String {
    mint("test-admin-only", vec![Role::Admin])
}
