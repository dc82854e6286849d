use async_trait::async_trait;
use contracts::domain::a001_pokemon::aggregate::{Pokemon, PokemonDetail, PokemonId};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::error::CatalogError;
use super::upstream::{self, GqlResponse, PokemonData};
use crate::shared::config::UpstreamConfig;

/// Read access to the catalog store.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Страница записей, упорядоченных по возрастанию id
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<Pokemon>, CatalogError>;

    /// Детальная карточка, `None` если такого id нет
    async fn get_by_id(&self, id: PokemonId) -> Result<Option<PokemonDetail>, CatalogError>;
}

/// Repository backed by the upstream GraphQL endpoint.
pub struct GraphqlRepository {
    client: reqwest::Client,
    url: String,
}

impl GraphqlRepository {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            url: config.graphql_url.clone(),
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, CatalogError> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body: GqlResponse<T> = response.json().await?;
        upstream::unwrap_response(body)
    }
}

#[async_trait]
impl PokemonRepository for GraphqlRepository {
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<Pokemon>, CatalogError> {
        tracing::debug!("upstream list: limit={} offset={}", limit, offset);
        let data: PokemonData = self
            .execute(
                upstream::LIST_QUERY,
                json!({ "limit": limit, "offset": offset }),
            )
            .await?;
        Ok(data.pokemon.into_iter().map(|p| p.into_pokemon()).collect())
    }

    async fn get_by_id(&self, id: PokemonId) -> Result<Option<PokemonDetail>, CatalogError> {
        tracing::debug!("upstream detail: id={}", id.value());
        let data: PokemonData = self
            .execute(upstream::DETAIL_QUERY, json!({ "id": id.value() }))
            .await?;
        Ok(data.pokemon.into_iter().next().map(|p| p.into_detail()))
    }
}
