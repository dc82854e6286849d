//! Data access for the catalog: listing pages, details and detail prefetch.

use std::collections::{HashMap, HashSet};

use contracts::domain::a001_pokemon::aggregate::{Pokemon, PokemonDetail, PokemonId};
use contracts::domain::a001_pokemon::list::PokemonListResponse;
use contracts::domain::common::AggregateId;
use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use serde::Deserialize;

use crate::shared::api_utils::api_base;

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// "Server error: 502 (upstream timeout)" when the body carries the
/// backend's `{"error": ...}`, plain status otherwise.
pub fn server_error(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(e) }) if !e.is_empty() => {
            format!("Server error: {} ({})", status, e)
        }
        _ => format!("Server error: {}", status),
    }
}

async fn error_from(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    server_error(status, &body)
}

/// Одна страница каталога. Общее количество не запрашивается: оно
/// известно заранее (`POKEMON_TOTAL_COUNT`).
pub async fn list_page(limit: usize, offset: usize) -> Result<Vec<Pokemon>, String> {
    let url = format!(
        "{}/api/pokemon/list?limit={}&offset={}",
        api_base(),
        limit,
        offset
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let data: PokemonListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(data.items)
}

/// Детальная карточка. `Ok(None)`: такого покемона нет (нечисловой id
/// или 404), запрос для нечислового id не отправляется.
pub async fn get_detail(id: &str) -> Result<Option<PokemonDetail>, String> {
    let Ok(id) = PokemonId::from_string(id) else {
        return Ok(None);
    };

    let url = format!("{}/api/pokemon/{}", api_base(), id.as_string());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json::<PokemonDetail>()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Loaded details and prefetches in progress.
#[derive(Debug, Default)]
pub struct DetailRegistry {
    entries: HashMap<PokemonId, PokemonDetail>,
    in_flight: HashSet<PokemonId>,
}

impl DetailRegistry {
    pub fn get(&self, id: PokemonId) -> Option<&PokemonDetail> {
        self.entries.get(&id)
    }

    /// Marks a prefetch as started. `false` when the id is already cached or
    /// being fetched.
    pub fn begin(&mut self, id: PokemonId) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.in_flight.insert(id)
    }

    pub fn finish(&mut self, id: PokemonId, detail: Option<PokemonDetail>) {
        self.in_flight.remove(&id);
        if let Some(detail) = detail {
            self.entries.insert(id, detail);
        }
    }

    pub fn insert(&mut self, detail: PokemonDetail) {
        if let Some(id) = detail.base.pokemon_id() {
            self.in_flight.remove(&id);
            self.entries.insert(id, detail);
        }
    }

    pub fn is_in_flight(&self, id: PokemonId) -> bool {
        self.in_flight.contains(&id)
    }
}

/// Общий кэш деталей (context), наполняется префетчем и модальным окном
#[derive(Clone, Copy)]
pub struct DetailCache {
    registry: StoredValue<DetailRegistry>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self {
            registry: StoredValue::new(DetailRegistry::default()),
        }
    }

    pub fn get(&self, id: &str) -> Option<PokemonDetail> {
        let id = PokemonId::from_string(id).ok()?;
        self.registry
            .try_with_value(|r| r.get(id).cloned())
            .flatten()
    }

    pub fn insert(&self, detail: PokemonDetail) {
        self.registry.try_update_value(|r| r.insert(detail));
    }

    /// Fire-and-forget warm-up of the cache. Failures are only logged.
    pub fn prefetch_detail(&self, id: &str) {
        let Ok(pokemon_id) = PokemonId::from_string(id) else {
            return;
        };
        let started = self
            .registry
            .try_update_value(|r| r.begin(pokemon_id))
            .unwrap_or(false);
        if !started {
            return;
        }

        let registry = self.registry;
        let id = id.to_string();
        leptos::task::spawn_local(async move {
            let detail = match get_detail(&id).await {
                Ok(detail) => detail,
                Err(e) => {
                    log::debug!("prefetch of {} failed: {}", id, e);
                    None
                }
            };
            registry.try_update_value(|r| r.finish(pokemon_id, detail));
        });
    }
}

impl Default for DetailCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Кэш из контекста; вне провайдера возвращает пустой локальный кэш
pub fn use_detail_cache() -> DetailCache {
    use_context::<DetailCache>().unwrap_or_default()
}
