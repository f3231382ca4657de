// Radio resource management

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Error;
use crate::routes::rrm;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RrmOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rrm-oper:rrm-oper-data")]
    pub data: RrmOperData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RrmOperData {
    #[serde(default)]
    pub rrm_measurement: Vec<serde_json::Value>,
    #[serde(default)]
    pub radio_slot: Vec<serde_json::Value>,
    #[serde(default)]
    pub main_data: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RrmGlobalOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rrm-global-oper:rrm-global-oper-data")]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RrmCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rrm-cfg:rrm-cfg-data")]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct RrmService {
    client: Client,
}

impl RrmService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn oper(&self, ctx: &RequestContext) -> Result<RrmOperResponse, Error> {
        self.client.fetch(ctx, rrm::OPER).await
    }

    pub async fn global_oper(&self, ctx: &RequestContext) -> Result<RrmGlobalOperResponse, Error> {
        self.client.fetch(ctx, rrm::GLOBAL_OPER).await
    }

    pub async fn cfg(&self, ctx: &RequestContext) -> Result<RrmCfgResponse, Error> {
        self.client.fetch(ctx, rrm::CFG).await
    }
}
