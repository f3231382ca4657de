// Controller-wide general data

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Error;
use crate::routes::general;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-oper:general-oper-data")]
    pub data: GeneralOperData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralOperData {
    #[serde(default)]
    pub mgmt_intf_data: Option<MgmtIntfData>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MgmtIntfDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-oper:mgmt-intf-data")]
    pub mgmt_intf_data: MgmtIntfData,
}

/// Wireless management interface of the controller.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MgmtIntfData {
    #[serde(default)]
    pub intf_name: Option<String>,
    #[serde(default)]
    pub intf_type: Option<String>,
    #[serde(default)]
    pub intf_id: Option<u32>,
    #[serde(default)]
    pub mgmt_ip: Option<String>,
    #[serde(default)]
    pub mgmt_mac: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-cfg:general-cfg-data")]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct GeneralService {
    client: Client,
}

impl GeneralService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn oper(&self, ctx: &RequestContext) -> Result<GeneralOperResponse, Error> {
        self.client.fetch(ctx, general::OPER).await
    }

    pub async fn mgmt_intf_data(
        &self,
        ctx: &RequestContext,
    ) -> Result<MgmtIntfDataResponse, Error> {
        self.client.fetch(ctx, general::MGMT_INTF_DATA).await
    }

    pub async fn cfg(&self, ctx: &RequestContext) -> Result<GeneralCfgResponse, Error> {
        self.client.fetch(ctx, general::CFG).await
    }
}
