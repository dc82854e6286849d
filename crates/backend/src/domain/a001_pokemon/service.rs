use contracts::domain::a001_pokemon::aggregate::{Pokemon, PokemonDetail, PokemonId};
use contracts::domain::a001_pokemon::list::{PAGE_SIZE, POKEMON_TOTAL_COUNT};
use contracts::domain::common::AggregateId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::CatalogError;
use super::repository::PokemonRepository;

/// Нормализует `limit` запроса листинга: по умолчанию страница, не больше всего каталога
pub fn normalize_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(PAGE_SIZE).clamp(1, POKEMON_TOTAL_COUNT)
}

/// Catalog reads with an in-memory cache. The dataset never changes, so
/// cached pages and details stay valid for the lifetime of the process.
pub struct PokemonService {
    repository: Arc<dyn PokemonRepository>,
    pages: RwLock<HashMap<(usize, usize), Vec<Pokemon>>>,
    details: RwLock<HashMap<PokemonId, PokemonDetail>>,
}

impl PokemonService {
    pub fn new(repository: Arc<dyn PokemonRepository>) -> Self {
        Self {
            repository,
            pages: RwLock::new(HashMap::new()),
            details: RwLock::new(HashMap::new()),
        }
    }

    /// Получение страницы списка.
    ///
    /// Offsets past the end of the catalog are answered with an empty page
    /// without touching upstream or the cache.
    pub async fn list_page(&self, limit: usize, offset: usize) -> Result<Vec<Pokemon>, CatalogError> {
        if offset >= POKEMON_TOTAL_COUNT {
            tracing::debug!("offset {} is past the end of the catalog", offset);
            return Ok(Vec::new());
        }
        let key = (limit, offset);
        if let Some(items) = self.pages.read().await.get(&key) {
            return Ok(items.clone());
        }

        let items = self.repository.list(limit, offset).await?;
        tracing::info!(
            "Loaded {} records from upstream (limit={}, offset={})",
            items.len(),
            limit,
            offset
        );
        self.pages.write().await.insert(key, items.clone());
        Ok(items)
    }

    /// Получение карточки по строковому id.
    ///
    /// A malformed id is reported as "not found", never as an error.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<PokemonDetail>, CatalogError> {
        let id = match PokemonId::from_string(id) {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!("{}", e);
                return Ok(None);
            }
        };

        if let Some(detail) = self.details.read().await.get(&id) {
            return Ok(Some(detail.clone()));
        }

        let detail = self.repository.get_by_id(id).await?;
        if let Some(detail) = &detail {
            self.details.write().await.insert(id, detail.clone());
        }
        Ok(detail)
    }
}
