// Cisco Spaces connector status

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Error;
use crate::routes::spaces;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpacesOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-cisco-spaces-oper:cisco-spaces-oper-data")]
    pub data: SpacesOperData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SpacesOperData {
    #[serde(default)]
    pub spaces_connection_detail: Option<SpacesConnectionDetail>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpacesConnectionDetailResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-cisco-spaces-oper:spaces-connection-detail")]
    pub detail: SpacesConnectionDetail,
}

/// Tenant connection state between the controller and Cisco Spaces.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SpacesConnectionDetail {
    #[serde(default)]
    pub spaces_health_url: Option<String>,
    #[serde(default)]
    pub con_state: Option<String>,
    #[serde(default)]
    pub con_state_reason: Option<String>,
    #[serde(default)]
    pub last_conn_err_timestamp: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SpacesService {
    client: Client,
}

impl SpacesService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn oper(&self, ctx: &RequestContext) -> Result<SpacesOperResponse, Error> {
        self.client.fetch(ctx, spaces::OPER).await
    }

    pub async fn connection_detail(
        &self,
        ctx: &RequestContext,
    ) -> Result<SpacesConnectionDetailResponse, Error> {
        self.client.fetch(ctx, spaces::CONNECTION_DETAIL).await
    }
}
