use leptos::prelude::*;

use crate::domain::a001_pokemon::ui::details::PokemonDetailsModal;
use crate::domain::a001_pokemon::ui::list::query::{LIST_PATH, DETAIL_PATH_PREFIX};
use crate::domain::a001_pokemon::ui::list::PokemonListPage;
use crate::shared::location::{BrowserLocation, LocationPort};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// `/list` и `/`
    List,
    /// `/pokemon/{id}`: модальное окно поверх списка
    Detail(String),
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path.is_empty() || path == LIST_PATH {
            return AppRoute::List;
        }
        match path.strip_prefix(DETAIL_PATH_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => AppRoute::Detail(id.to_string()),
            _ => AppRoute::NotFound,
        }
    }
}

/// Маршрутизация через history API без leptos_router
#[derive(Clone, Copy)]
pub struct AppRouter {
    pub route: RwSignal<AppRoute>,
}

impl AppRouter {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(AppRoute::from_path(&BrowserLocation.pathname())),
        }
    }

    /// Push a new history entry and switch the route.
    pub fn navigate(&self, url: &str) {
        BrowserLocation.push(url);
        self.sync_from_location();
    }

    /// Re-reads the route after `popstate` or `navigate`.
    pub fn sync_from_location(&self) {
        let next = AppRoute::from_path(&BrowserLocation.pathname());
        if self.route.with_untracked(|r| *r != next) {
            self.route.set(next);
        }
    }
}

impl Default for AppRouter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_router() -> AppRouter {
    use_context::<AppRouter>().unwrap_or_default()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let router = use_router();

    let not_found = move || {
        view! {
            <div class="not-found">
                <h2>"Page not found"</h2>
                <a
                    href=LIST_PATH
                    on:click=move |ev| {
                        ev.prevent_default();
                        router.navigate(LIST_PATH);
                    }
                >
                    "Back to the list"
                </a>
            </div>
        }
    };

    view! {
        // Список остаётся смонтированным под модальным окном деталей
        <Show
            when=move || router.route.with(|r| *r != AppRoute::NotFound)
            fallback=not_found
        >
            <PokemonListPage />
        </Show>
        {move || match router.route.get() {
            AppRoute::Detail(id) => view! { <PokemonDetailsModal id=id /> }.into_any(),
            _ => view! { <></> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::List);
        assert_eq!(AppRoute::from_path(""), AppRoute::List);
        assert_eq!(AppRoute::from_path("/list"), AppRoute::List);
        assert_eq!(AppRoute::from_path("/list/"), AppRoute::List);
        assert_eq!(AppRoute::from_path("/pokemon/25"), AppRoute::Detail("25".into()));
        assert_eq!(AppRoute::from_path("/pokemon/pikachu"), AppRoute::Detail("pikachu".into()));
        assert_eq!(AppRoute::from_path("/pokemon/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/pokemon/1/x"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/elsewhere"), AppRoute::NotFound);
    }
}
