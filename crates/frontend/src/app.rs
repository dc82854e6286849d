use crate::domain::a001_pokemon::model::DetailCache;
use crate::routes::{AppRouter, AppRoutes};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Shared detail cache, filled by card prefetch and the detail modal.
    provide_context(DetailCache::new());

    let router = AppRouter::new();
    provide_context(router);

    // Back/forward switches between the list and the detail modal
    let _ = window_event_listener(leptos::ev::popstate, move |_| router.sync_from_location());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
