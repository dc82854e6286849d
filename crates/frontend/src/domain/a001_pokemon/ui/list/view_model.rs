//! ViewModel for the Pokémon list (reactive shell over [`PokemonListState`])
//!
//! Every user action goes through [`PokemonListVm::dispatch`]: mutate the
//! state, write the query string, issue the fetch the new state needs.

use contracts::domain::a001_pokemon::aggregate::Pokemon;
use contracts::domain::a001_pokemon::list::PAGE_SIZE;
use leptos::prelude::*;

use super::query::ListQuery;
use super::state::{FetchRequest, PokemonListState};
use crate::domain::a001_pokemon::model::{self, use_detail_cache, DetailCache};
use crate::shared::debounce::{DebounceHandle, SEARCH_DEBOUNCE_MS};
use crate::shared::location::{update_query, BrowserLocation, LocationPort};

#[derive(Clone, Copy)]
pub struct PokemonListVm {
    pub state: RwSignal<PokemonListState>,
    search: DebounceHandle<String>,
    cache: DetailCache,
}

impl PokemonListVm {
    /// Состояние читается из текущего URL
    pub fn new() -> Self {
        let query = ListQuery::from_query_string(&BrowserLocation.search());
        let state = PokemonListState::from_query(query);
        let search = DebounceHandle::new(state.search_debounced.clone(), SEARCH_DEBOUNCE_MS);
        Self {
            state: RwSignal::new(state),
            search,
            cache: use_detail_cache(),
        }
    }

    /// First fetch after mount
    pub fn init(&self) {
        self.dispatch(|_| {});
    }

    // === Derived signals ===

    pub fn displayed(&self) -> Signal<Vec<Pokemon>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.displayed()))
    }

    pub fn pagination_total(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pagination_total()))
    }

    pub fn page(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page))
    }

    pub fn page_size(&self) -> Signal<usize> {
        Signal::derive(|| PAGE_SIZE)
    }

    pub fn search_input(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search_input.clone()))
    }

    pub fn search_debounced(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search_debounced.clone()))
    }

    pub fn type_filter(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.type_filter.clone()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    // === Commands ===

    /// Эхо в поле ввода сразу, фильтрация после паузы
    pub fn on_search_input(&self, text: String) {
        self.state.update(|s| s.set_search_input(text.clone()));
        let this = *self;
        self.search.input(text, move |settled| {
            this.dispatch(move |s| {
                s.settle_search(settled);
            });
        });
    }

    pub fn on_type_click(&self, type_name: String) {
        self.dispatch(move |s| s.toggle_type(&type_name));
    }

    pub fn on_clear_type(&self) {
        self.dispatch(|s| s.clear_type());
    }

    /// Сбросить и поиск, и фильтр по типу
    pub fn on_clear_filters(&self) {
        self.search.reset(String::new());
        self.dispatch(|s| {
            s.set_search_input(String::new());
            s.settle_search(String::new());
            s.clear_type();
        });
    }

    pub fn on_page_change(&self, page: usize) {
        self.dispatch(move |s| s.set_page(page));
    }

    /// Back/forward: the URL is the source of truth, nothing is written back.
    pub fn on_location_changed(&self) {
        let query = ListQuery::from_query_string(&BrowserLocation.search());
        self.search.reset(query.search.clone());
        let request = self.state.try_update(|s| {
            s.restore(query);
            s.sync()
        });
        if let Some(Some(request)) = request {
            self.fetch(request);
        }
    }

    pub fn on_prefetch(&self, id: String) {
        self.cache.prefetch_detail(&id);
    }

    pub fn detail_href(&self, id: &str) -> String {
        self.state.with_untracked(|s| s.detail_href(id))
    }

    /// Single update path: state → URL → fetch.
    pub fn dispatch(&self, action: impl FnOnce(&mut PokemonListState)) {
        let Some(query) = self.state.try_update(|s| {
            action(s);
            s.to_query().to_query_string()
        }) else {
            return;
        };

        update_query(&BrowserLocation, |_| query);

        if let Some(Some(request)) = self.state.try_update(|s| s.sync()) {
            self.fetch(request);
        }
    }

    fn fetch(&self, request: FetchRequest) {
        let state = self.state;
        log::debug!(
            "fetch #{} {:?} limit={} offset={}",
            request.ticket,
            request.key,
            request.limit,
            request.offset
        );
        leptos::task::spawn_local(async move {
            let result = model::list_page(request.limit, request.offset).await;
            if let Err(e) = &result {
                log::warn!("fetch #{} failed: {}", request.ticket, e);
            }
            // После unmount сигнал уже освобождён, ответ игнорируется
            let accepted = state.try_update(|s| s.apply_response(request.ticket, result));
            if accepted == Some(false) {
                log::debug!("discarded stale response #{}", request.ticket);
            }
        });
    }
}
