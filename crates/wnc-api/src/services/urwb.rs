// Ultra-Reliable Wireless Backhaul

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Error;
use crate::routes::urwb;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UrwbOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-urwbnet-oper:urwbnet-oper-data")]
    pub data: UrwbOperData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UrwbOperData {
    #[serde(default)]
    pub urwbnet_stats: Vec<serde_json::Value>,
    #[serde(default)]
    pub urwbnet_node_g: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UrwbCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-urwbnet-cfg:urwbnet-cfg-data")]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct UrwbService {
    client: Client,
}

impl UrwbService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn oper(&self, ctx: &RequestContext) -> Result<UrwbOperResponse, Error> {
        self.client.fetch(ctx, urwb::OPER).await
    }

    pub async fn cfg(&self, ctx: &RequestContext) -> Result<UrwbCfgResponse, Error> {
        self.client.fetch(ctx, urwb::CFG).await
    }
}
