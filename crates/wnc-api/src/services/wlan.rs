// WLAN configuration

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Error;
use crate::routes::{self, wlan};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WlanCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data")]
    pub data: WlanCfgData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WlanCfgData {
    #[serde(default)]
    pub wlan_cfg_entries: Option<WlanCfgEntries>,
    #[serde(default)]
    pub wlan_policies: Option<serde_json::Value>,
    #[serde(default)]
    pub policy_list_entries: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WlanCfgEntries {
    #[serde(default)]
    pub wlan_cfg_entry: Vec<WlanCfgEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WlanCfgEntriesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-entries")]
    pub entries: WlanCfgEntries,
}

/// One WLAN profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WlanCfgEntry {
    pub profile_name: String,
    #[serde(default)]
    pub wlan_id: Option<u32>,
    #[serde(default)]
    pub apf_vap_id_data: Option<ApfVapIdData>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApfVapIdData {
    #[serde(default)]
    pub ssid: Option<String>,
    #[serde(default)]
    pub wlan_status: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WlanGlobalOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-global-oper:wlan-global-oper-data")]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct WlanService {
    client: Client,
}

impl WlanService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn cfg(&self, ctx: &RequestContext) -> Result<WlanCfgResponse, Error> {
        self.client.fetch(ctx, wlan::CFG).await
    }

    pub async fn entries(&self, ctx: &RequestContext) -> Result<WlanCfgEntriesResponse, Error> {
        self.client.fetch(ctx, wlan::CFG_ENTRIES).await
    }

    pub async fn global_oper(&self, ctx: &RequestContext) -> Result<WlanGlobalOperResponse, Error> {
        self.client.fetch(ctx, wlan::GLOBAL_OPER).await
    }

    /// PATCH the description of one WLAN profile.
    pub async fn set_description(
        &self,
        ctx: &RequestContext,
        profile_name: &str,
        description: &str,
    ) -> Result<(), Error> {
        self.client
            .in_logger(|| debug!(profile_name, "updating WLAN description"));
        let path = routes::with_key(wlan::CFG_ENTRY, profile_name);
        self.client
            .submit(
                ctx,
                Method::PATCH,
                &path,
                &json!({
                    "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-entry": [{
                        "profile-name": profile_name,
                        "description": description,
                    }]
                }),
            )
            .await
    }
}
