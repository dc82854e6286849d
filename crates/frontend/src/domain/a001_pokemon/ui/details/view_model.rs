//! ViewModel for the Pokémon detail modal

use contracts::domain::a001_pokemon::aggregate::PokemonDetail;
use leptos::prelude::*;

use crate::domain::a001_pokemon::model::{self, DetailCache};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    Loading,
    Loaded(PokemonDetail),
    NotFound,
    Failed(String),
}

impl DetailStatus {
    /// Результат загрузки → состояние модального окна
    pub fn from_result(result: Result<Option<PokemonDetail>, String>) -> Self {
        match result {
            Ok(Some(detail)) => DetailStatus::Loaded(detail),
            Ok(None) => DetailStatus::NotFound,
            Err(e) => DetailStatus::Failed(e),
        }
    }
}

#[derive(Clone, Copy)]
pub struct PokemonDetailsVm {
    /// Id из маршрута
    pub id: RwSignal<String>,
    pub status: RwSignal<DetailStatus>,
    cache: DetailCache,
}

impl PokemonDetailsVm {
    pub fn new(cache: DetailCache) -> Self {
        Self {
            id: RwSignal::new(String::new()),
            status: RwSignal::new(DetailStatus::Loading),
            cache,
        }
    }

    /// Load detail by id, from the cache when it is already there
    pub fn load(&self, id: String) {
        self.id.set(id.clone());

        if let Some(detail) = self.cache.get(&id) {
            self.status.set(DetailStatus::Loaded(detail));
            return;
        }

        self.status.set(DetailStatus::Loading);
        let this = *self;
        leptos::task::spawn_local(async move {
            let result = model::get_detail(&id).await;
            // Пока шёл запрос, модалка могла переключиться на другой id
            let current = this.id.try_get_untracked().unwrap_or_default();
            if current != id {
                log::debug!("discarding detail response for {}", id);
                return;
            }
            match &result {
                Ok(Some(detail)) => this.cache.insert(detail.clone()),
                Err(e) => log::warn!("detail {} failed: {}", id, e),
                Ok(None) => {}
            }
            this.status.try_set(DetailStatus::from_result(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_result() {
        assert_eq!(DetailStatus::from_result(Ok(None)), DetailStatus::NotFound);
        assert_eq!(
            DetailStatus::from_result(Err("Server error: 502".into())),
            DetailStatus::Failed("Server error: 502".into())
        );
    }
}
