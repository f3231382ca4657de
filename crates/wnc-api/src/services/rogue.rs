// Rogue AP / client detection

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Error;
use crate::routes::rogue;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RogueOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rogue-oper:rogue-oper-data")]
    pub data: RogueOperData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RogueOperData {
    #[serde(default)]
    pub rogue_stats: Option<RogueStats>,
    #[serde(default)]
    pub rogue_data: Vec<serde_json::Value>,
    #[serde(default)]
    pub rogue_client_data: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RogueStatsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rogue-oper:rogue-stats")]
    pub rogue_stats: RogueStats,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RogueStats {
    #[serde(default)]
    pub total_rogues: Option<u32>,
    #[serde(default)]
    pub total_rogue_clients: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct RogueService {
    client: Client,
}

impl RogueService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn oper(&self, ctx: &RequestContext) -> Result<RogueOperResponse, Error> {
        self.client.fetch(ctx, rogue::OPER).await
    }

    pub async fn stats(&self, ctx: &RequestContext) -> Result<RogueStatsResponse, Error> {
        self.client.fetch(ctx, rogue::STATS).await
    }
}
