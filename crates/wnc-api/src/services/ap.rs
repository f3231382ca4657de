// Access point service
//
// Operational data (CAPWAP joins, radios, name/MAC mapping), AP
// configuration, and the two AP write paths: reset and admin state.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Error;
use crate::routes::{self, ap};

// ── Models ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data")]
    pub data: ApOperData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApOperData {
    #[serde(default)]
    pub capwap_data: Vec<CapwapData>,
    #[serde(default)]
    pub ap_name_mac_map: Vec<ApNameMacMap>,
    #[serde(default)]
    pub radio_oper_data: Vec<RadioOperData>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CapwapDataResponse {
    #[serde(
        rename = "Cisco-IOS-XE-wireless-access-point-oper:capwap-data",
        default
    )]
    pub capwap_data: Vec<CapwapData>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CapwapData {
    pub wtp_mac: String,
    #[serde(default)]
    pub ip_addr: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub ap_state: Option<ApState>,
    #[serde(default)]
    pub tag_info: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApState {
    #[serde(default)]
    pub ap_admin_state: Option<String>,
    #[serde(default)]
    pub ap_operation_state: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApNameMacMapResponse {
    #[serde(
        rename = "Cisco-IOS-XE-wireless-access-point-oper:ap-name-mac-map",
        default
    )]
    pub ap_name_mac_map: Vec<ApNameMacMap>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApNameMacMap {
    pub wtp_name: String,
    pub wtp_mac: String,
    #[serde(default)]
    pub eth_mac: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RadioOperData {
    pub wtp_mac: String,
    pub radio_slot_id: u8,
    #[serde(default)]
    pub radio_type: Option<String>,
    #[serde(default)]
    pub admin_state: Option<String>,
    #[serde(default)]
    pub oper_state: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApGlobalOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-ap-global-oper:ap-global-oper-data")]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data")]
    pub data: ApCfgData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApCfgData {
    #[serde(default)]
    pub tag_source_priority_configs: Option<serde_json::Value>,
    #[serde(default)]
    pub ap_tags: Option<serde_json::Value>,
}

// ── Service ──────────────────────────────────────────────────────────

/// Access point operations.
#[derive(Debug, Clone)]
pub struct ApService {
    client: Client,
}

impl ApService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn oper(&self, ctx: &RequestContext) -> Result<ApOperResponse, Error> {
        self.client.fetch(ctx, ap::OPER).await
    }

    /// CAPWAP join data for every AP.
    pub async fn capwap_data(&self, ctx: &RequestContext) -> Result<CapwapDataResponse, Error> {
        self.client.fetch(ctx, ap::CAPWAP_DATA).await
    }

    /// CAPWAP join data for one AP, keyed by its radio MAC.
    pub async fn capwap_data_by_mac(
        &self,
        ctx: &RequestContext,
        wtp_mac: &str,
    ) -> Result<CapwapDataResponse, Error> {
        self.client
            .fetch(ctx, &routes::with_key(ap::CAPWAP_DATA, wtp_mac))
            .await
    }

    pub async fn name_mac_map(&self, ctx: &RequestContext) -> Result<ApNameMacMapResponse, Error> {
        self.client.fetch(ctx, ap::NAME_MAC_MAP).await
    }

    pub async fn global_oper(&self, ctx: &RequestContext) -> Result<ApGlobalOperResponse, Error> {
        self.client.fetch(ctx, ap::GLOBAL_OPER).await
    }

    pub async fn cfg(&self, ctx: &RequestContext) -> Result<ApCfgResponse, Error> {
        self.client.fetch(ctx, ap::CFG).await
    }

    /// Reload one AP by radio MAC.
    pub async fn reload_ap(&self, ctx: &RequestContext, wtp_mac: &str) -> Result<(), Error> {
        self.client.in_logger(|| debug!(wtp_mac, "resetting AP"));
        self.client
            .invoke_rpc(
                ctx,
                ap::RPC_RESET,
                &json!({ "input": { "mac-addr": wtp_mac } }),
            )
            .await
    }

    /// Enable (`true`) or disable an AP by name.
    pub async fn set_admin_state(
        &self,
        ctx: &RequestContext,
        ap_name: &str,
        enabled: bool,
    ) -> Result<(), Error> {
        self.client
            .in_logger(|| debug!(ap_name, enabled, "setting AP admin state"));
        self.client
            .invoke_rpc(
                ctx,
                ap::RPC_SET_ADMIN_STATE,
                &json!({ "input": { "mode": enabled, "ap-name": ap_name } }),
            )
            .await
    }
}
