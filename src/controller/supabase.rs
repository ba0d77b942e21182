use async_trait::async_trait;
use reqwest::Client;

use crate::model::PilgrimProfile;
use crate::storage::{LookupError, LookupGateway};

const RPC_NAME: &str = "get_pilgrim_with_camp_info";

/// PostgREST client for the Supabase project holding pilgrim and camp
/// records. One RPC call per request, no caching.
#[derive(Debug, Clone)]
pub struct SupabaseLookup {
    client: Client,
    rpc_url: String,
    service_key: String,
}

impl SupabaseLookup {
    #[must_use]
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            client: Client::new(),
            rpc_url: format!("{}/rest/v1/rpc/{RPC_NAME}", base_url.trim_end_matches('/')),
            service_key: service_key.to_string(),
        }
    }
}

#[async_trait]
impl LookupGateway for SupabaseLookup {
    async fn fetch_profile(&self, pilgrim_id: &str) -> Result<PilgrimProfile, LookupError> {
        let resp = self
            .client
            .post(&self.rpc_url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&serde_json::json!({ "pilgrim_id": pilgrim_id }))
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Transport(format!(
                "pilgrim lookup returned status {status}"
            )));
        }

        // The RPC returns SETOF; at most one row joins for a given id.
        let rows: Vec<PilgrimProfile> = resp
            .json()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        rows.into_iter().next().ok_or(LookupError::NotFound)
    }
}
