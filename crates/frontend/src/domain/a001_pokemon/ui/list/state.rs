//! List view state and its transitions.
//!
//! The state is a plain value: actions mutate it, [`PokemonListState::sync`]
//! tells the caller which request (if any) must be issued, and
//! [`PokemonListState::apply_response`] folds a response back in. Every
//! request carries a ticket; a response is accepted only for the latest
//! request whose key still matches what the current state needs.

use contracts::domain::a001_pokemon::aggregate::Pokemon;
use contracts::domain::a001_pokemon::list::{page_offset, PAGE_SIZE, POKEMON_TOTAL_COUNT};

use super::query::ListQuery;
use crate::shared::list_utils::filter_list;

/// Что именно нужно загрузить для текущего состояния
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKey {
    /// One server page.
    Page { offset: usize },
    /// The whole catalog, filtered and sliced on the client.
    FullScan,
}

impl FetchKey {
    pub fn limit(&self) -> usize {
        match self {
            FetchKey::Page { .. } => PAGE_SIZE,
            FetchKey::FullScan => POKEMON_TOTAL_COUNT,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            FetchKey::Page { offset } => *offset,
            FetchKey::FullScan => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: u64,
    pub key: FetchKey,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PokemonListState {
    /// 1-based
    pub page: usize,
    /// Текст в поле ввода, обновляется на каждое нажатие
    pub search_input: String,
    /// Settled search, the only one used for filtering and written to the URL.
    pub search_debounced: String,
    /// Lowercased type, empty when no filter is set.
    pub type_filter: String,

    records: Vec<Pokemon>,
    loaded_key: Option<FetchKey>,
    in_flight: Option<FetchRequest>,
    error: Option<String>,
    next_ticket: u64,
}

impl Default for PokemonListState {
    fn default() -> Self {
        Self::from_query(ListQuery::default())
    }
}

impl PokemonListState {
    /// Начальное состояние из URL (mount)
    pub fn from_query(query: ListQuery) -> Self {
        Self {
            page: query.page.max(1),
            search_input: query.search.clone(),
            search_debounced: query.search,
            type_filter: query.type_filter.to_lowercase(),
            records: Vec::new(),
            loaded_key: None,
            in_flight: None,
            error: None,
            next_ticket: 0,
        }
    }

    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            search: self.search_debounced.clone(),
            type_filter: self.type_filter.clone(),
        }
    }

    /// Re-reads the URL-owned fields (back/forward navigation). Loaded data
    /// is kept; `sync` decides whether it is still usable.
    pub fn restore(&mut self, query: ListQuery) -> bool {
        let next = Self::from_query(query);
        let changed = self.page != next.page
            || self.search_debounced != next.search_debounced
            || self.type_filter != next.type_filter;
        self.page = next.page;
        self.search_input = next.search_input;
        self.search_debounced = next.search_debounced;
        self.type_filter = next.type_filter;
        changed
    }

    // === Actions ===

    /// Эхо ввода, без фильтрации
    pub fn set_search_input(&mut self, text: String) {
        self.search_input = text;
    }

    /// Settled search value. A changed value resets the page.
    pub fn settle_search(&mut self, value: String) -> bool {
        if value == self.search_debounced {
            return false;
        }
        self.search_debounced = value;
        self.page = 1;
        true
    }

    /// Клик по бейджу типа: тот же тип снимает фильтр, другой ставит
    pub fn toggle_type(&mut self, type_name: &str) {
        let type_name = type_name.trim().to_lowercase();
        if self.type_filter == type_name {
            self.type_filter.clear();
        } else {
            self.type_filter = type_name;
        }
        self.page = 1;
    }

    pub fn clear_type(&mut self) {
        self.type_filter.clear();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    // === Derived ===

    pub fn has_search(&self) -> bool {
        !self.search_debounced.trim().is_empty()
    }

    pub fn has_type_filter(&self) -> bool {
        !self.type_filter.is_empty()
    }

    pub fn needs_full_scan(&self) -> bool {
        self.has_search() || self.has_type_filter()
    }

    pub fn required_key(&self) -> FetchKey {
        if self.needs_full_scan() {
            FetchKey::FullScan
        } else {
            FetchKey::Page {
                offset: page_offset(self.page, PAGE_SIZE),
            }
        }
    }

    /// Only a request the current view still needs counts as loading.
    pub fn is_loading(&self) -> bool {
        let key = self.required_key();
        self.in_flight.as_ref().is_some_and(|r| r.key == key)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn has_current_data(&self) -> bool {
        self.error.is_none() && self.loaded_key == Some(self.required_key())
    }

    /// Loaded records narrowed by search and type. Empty until the data for
    /// the current fetch mode has arrived.
    pub fn filtered(&self) -> Vec<Pokemon> {
        if !self.has_current_data() {
            return Vec::new();
        }
        if self.needs_full_scan() {
            filter_list(&self.records, &self.search_debounced, &self.type_filter)
        } else {
            self.records.clone()
        }
    }

    /// Записи текущей страницы
    pub fn displayed(&self) -> Vec<Pokemon> {
        let filtered = self.filtered();
        if !self.needs_full_scan() {
            // Страница уже нарезана сервером
            return filtered;
        }
        let start = page_offset(self.page, PAGE_SIZE);
        filtered.into_iter().skip(start).take(PAGE_SIZE).collect()
    }

    /// Total handed to the pagination control.
    pub fn pagination_total(&self) -> usize {
        if !self.needs_full_scan() {
            return POKEMON_TOTAL_COUNT;
        }
        let filtered = self.filtered().len();
        if self.is_loading() && filtered == 0 {
            // Пока идёт загрузка, пагинация не должна схлопываться
            POKEMON_TOTAL_COUNT
        } else {
            filtered
        }
    }

    // === Fetch bookkeeping ===

    /// Request needed for the current state, if it is neither loaded nor
    /// already in flight.
    pub fn sync(&mut self) -> Option<FetchRequest> {
        if self.has_current_data() {
            return None;
        }
        let key = self.required_key();
        if self.in_flight.as_ref().is_some_and(|r| r.key == key) {
            return None;
        }

        self.next_ticket += 1;
        let request = FetchRequest {
            ticket: self.next_ticket,
            key,
            limit: key.limit(),
            offset: key.offset(),
        };
        self.error = None;
        self.in_flight = Some(request.clone());
        Some(request)
    }

    /// Folds a response in. Returns `false` when the response is stale and
    /// was discarded.
    pub fn apply_response(&mut self, ticket: u64, result: Result<Vec<Pokemon>, String>) -> bool {
        let Some(request) = self.in_flight.as_ref() else {
            return false;
        };
        if request.ticket != ticket {
            return false;
        }
        let key = request.key;
        self.in_flight = None;
        if key != self.required_key() {
            return false;
        }

        match result {
            Ok(items) => {
                self.records = items;
                self.loaded_key = Some(key);
                self.error = None;
            }
            Err(e) => {
                self.records.clear();
                self.loaded_key = None;
                self.error = Some(e);
            }
        }
        true
    }

    /// `/pokemon/{id}?...` with the current list state.
    pub fn detail_href(&self, id: &str) -> String {
        self.to_query().detail_href(id)
    }
}
