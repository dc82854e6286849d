//! List view query string: `page`, `search`, `type`.

use serde::{Deserialize, Serialize};

use crate::shared::location::with_query;

pub const LIST_PATH: &str = "/list";
pub const DETAIL_PATH_PREFIX: &str = "/pokemon/";

/// URL-представление состояния списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based
    pub page: usize,
    pub search: String,
    /// Lowercased type name, empty when no filter is set.
    pub type_filter: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            type_filter: String::new(),
        }
    }
}

/// Raw params as they appear in the URL. Everything is optional and parsed
/// leniently: a broken value falls back to its default instead of failing.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    type_filter: Option<String>,
}

/// Номер страницы из URL: всё, что не является целым ≥ 1, превращается в 1
pub fn parse_page(raw: &str) -> usize {
    raw.trim().parse::<usize>().ok().filter(|p| *p >= 1).unwrap_or(1)
}

impl ListQuery {
    pub fn from_query_string(query: &str) -> Self {
        let raw: RawListQuery =
            serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();
        Self {
            page: raw.page.as_deref().map(parse_page).unwrap_or(1),
            search: raw.search.unwrap_or_default(),
            type_filter: raw
                .type_filter
                .map(|t| t.trim().to_lowercase())
                .unwrap_or_default(),
        }
    }

    /// Serializes without the leading `?`. Defaults are omitted.
    pub fn to_query_string(&self) -> String {
        let raw = RawListQuery {
            page: (self.page > 1).then(|| self.page.to_string()),
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            type_filter: (!self.type_filter.is_empty()).then(|| self.type_filter.clone()),
        };
        serde_qs::to_string(&raw).unwrap_or_default()
    }

    /// `/list?...`
    pub fn list_href(&self) -> String {
        with_query(LIST_PATH, &self.to_query_string())
    }

    /// `/pokemon/{id}?...`: the whole list state travels with the detail route.
    pub fn detail_href(&self, id: &str) -> String {
        with_query(&format!("{}{}", DETAIL_PATH_PREFIX, id), &self.to_query_string())
    }
}

/// Адрес возврата из карточки: список с тем же query string, что был при входе
pub fn list_href_from(search: &str) -> String {
    ListQuery::from_query_string(search).list_href()
}
