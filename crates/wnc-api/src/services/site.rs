// Site tags

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::RequestContext;
use crate::error::Error;
use crate::routes::site;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-site-cfg:site-cfg-data")]
    pub data: SiteCfgData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteCfgData {
    #[serde(default)]
    pub site_tag_configs: Option<SiteTagConfigs>,
    #[serde(default)]
    pub ap_cfg_profiles: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteTagConfigs {
    #[serde(default)]
    pub site_tag_config: Vec<SiteTagConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteTagConfig {
    pub site_tag_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub flex_profile: Option<String>,
    #[serde(default)]
    pub ap_join_profile: Option<String>,
    #[serde(default)]
    pub is_local_site: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct SiteService {
    client: Client,
}

impl SiteService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn cfg(&self, ctx: &RequestContext) -> Result<SiteCfgResponse, Error> {
        self.client.fetch(ctx, site::CFG).await
    }
}
