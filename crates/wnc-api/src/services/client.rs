// Wireless client service

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Error;
use crate::routes::{self, client};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:client-oper-data")]
    pub data: ClientOperData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientOperData {
    #[serde(default)]
    pub common_oper_data: Vec<CommonOperData>,
    #[serde(default)]
    pub dot11_oper_data: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommonOperDataResponse {
    #[serde(
        rename = "Cisco-IOS-XE-wireless-client-oper:common-oper-data",
        default
    )]
    pub common_oper_data: Vec<CommonOperData>,
}

/// One associated client as the controller sees it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommonOperData {
    pub client_mac: String,
    #[serde(default)]
    pub ap_name: Option<String>,
    #[serde(default)]
    pub ms_ap_slot_id: Option<u8>,
    #[serde(default)]
    pub wlan_id: Option<u32>,
    #[serde(default)]
    pub co_state: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientGlobalOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-global-oper:client-global-oper-data")]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct ClientService {
    client: Client,
}

impl ClientService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn oper(&self, ctx: &RequestContext) -> Result<ClientOperResponse, Error> {
        self.client.fetch(ctx, client::OPER).await
    }

    pub async fn common_oper_data(
        &self,
        ctx: &RequestContext,
    ) -> Result<CommonOperDataResponse, Error> {
        self.client.fetch(ctx, client::COMMON_OPER_DATA).await
    }

    /// Common operational data for one client MAC.
    pub async fn common_oper_data_by_mac(
        &self,
        ctx: &RequestContext,
        client_mac: &str,
    ) -> Result<CommonOperDataResponse, Error> {
        self.client
            .fetch(ctx, &routes::with_key(client::COMMON_OPER_DATA, client_mac))
            .await
    }

    pub async fn global_oper(
        &self,
        ctx: &RequestContext,
    ) -> Result<ClientGlobalOperResponse, Error> {
        self.client.fetch(ctx, client::GLOBAL_OPER).await
    }
}
