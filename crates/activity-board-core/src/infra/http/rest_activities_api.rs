// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::domain::activities::models::{ActivityCatalog, ActivityName, EmailAddress};
use crate::domain::activities::services::ActivitiesApi;
use crate::domain::shared::models::RequestError;

use super::endpoints::{catalog_url, signup_url, unregister_url};
use super::responses::{parse_catalog, parse_confirmation};

/// `ActivitiesApi` backed by the activities REST endpoints.
pub struct RestActivitiesApi {
    base_url: Url,
    client: Client,
}

impl RestActivitiesApi {
    pub fn new(base_url: Url) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            bail!("{base_url} cannot be used as the base URL of the activities API");
        }
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl ActivitiesApi for RestActivitiesApi {
    async fn load_catalog(&self) -> Result<ActivityCatalog, RequestError> {
        let (status, body) = send(self.client.get(catalog_url(&self.base_url)?)).await?;
        parse_catalog(status, &body)
    }

    async fn sign_up(
        &self,
        activity: &ActivityName,
        email: &EmailAddress,
    ) -> Result<String, RequestError> {
        let url = signup_url(&self.base_url, activity, email)?;
        let (status, body) = send(self.client.post(url)).await?;
        parse_confirmation(status, &body)
    }

    async fn unregister(
        &self,
        activity: &ActivityName,
        email: &EmailAddress,
    ) -> Result<String, RequestError> {
        let url = unregister_url(&self.base_url, activity, email)?;
        let (status, body) = send(self.client.delete(url)).await?;
        parse_confirmation(status, &body)
    }
}

async fn send(request: RequestBuilder) -> Result<(u16, String), RequestError> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    debug!("{} responded with status {status}.", response.url());
    let body = response.text().await?;
    Ok((status, body))
}
