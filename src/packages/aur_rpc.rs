//! AUR search over the RPC interface, used when no helper is installed.

use crate::core::types::{Candidate, Source};
use crate::error::{PacwiseError, Result};
use crate::packages::search_parsing::AUR_REPO;
use crate::packages::traits::PackageSource;
use crate::project_identity;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

const REQUEST_TIMEOUT_SECONDS: u64 = 15;

/// The AUR refuses search terms shorter than this.
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    results: Vec<RpcPackage>,
}

#[derive(Debug, Deserialize)]
struct RpcPackage {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Version")]
    version: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "OutOfDate")]
    out_of_date: Option<i64>,
}

pub struct AurRpcSource {
    base_url: String,
    enabled: bool,
}

impl AurRpcSource {
    pub fn new(enabled: bool) -> Self {
        Self {
            base_url: project_identity::AUR_BASE_URL.to_string(),
            enabled,
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/rpc/v5/search/{}?by=name", self.base_url, urlencoding::encode(query))
    }
}

impl PackageSource for AurRpcSource {
    fn name(&self) -> &str {
        "aur-rpc"
    }

    fn is_available(&self) -> bool {
        self.enabled
    }

    fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        if query.trim().chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let url = self.search_url(query.trim());
        tracing::debug!(%url, "querying AUR RPC");

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| PacwiseError::RemoteFetchError(e.to_string()))?;

        let resp = client
            .get(&url)
            .header("User-Agent", project_identity::BINARY_NAME)
            .send()
            .map_err(|e| PacwiseError::RemoteFetchError(format!("Network error: {}", e)))?;

        if !resp.status().is_success() {
            return Err(PacwiseError::RemoteFetchError(format!(
                "AUR RPC returned HTTP {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .map_err(|e| PacwiseError::RemoteFetchError(e.to_string()))?;
        parse_rpc_response(&body)
    }
}

/// Map an RPC JSON body to AUR candidates.
pub fn parse_rpc_response(body: &str) -> Result<Vec<Candidate>> {
    let response: RpcResponse = serde_json::from_str(body)?;

    if response.kind == "error" {
        return Err(PacwiseError::RemoteFetchError(
            response.error.unwrap_or_else(|| "unknown AUR RPC error".to_string()),
        ));
    }

    Ok(response
        .results
        .into_iter()
        .map(|pkg| {
            let mut metadata = BTreeMap::new();
            metadata.insert("repo".to_string(), AUR_REPO.to_string());
            if let Some(version) = pkg.version {
                metadata.insert("version".to_string(), version);
            }
            if let Some(description) = pkg.description {
                metadata.insert("description".to_string(), description);
            }
            if pkg.out_of_date.is_some() {
                metadata.insert("out-of-date".to_string(), "true".to_string());
            }
            Candidate::with_metadata(pkg.name, Source::Aur, metadata)
        })
        .collect())
}
