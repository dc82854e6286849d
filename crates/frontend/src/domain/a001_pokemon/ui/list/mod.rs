pub mod query;
pub mod state;
pub mod view_model;

use contracts::domain::a001_pokemon::aggregate::Pokemon;
use leptos::prelude::*;

use self::view_model::PokemonListVm;
use super::components::{EmptyState, ErrorBanner, ListSkeleton, PokemonCard};
use crate::routes::use_router;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::type_filter_chip::TypeFilterChip;
use crate::shared::list_utils::SearchInput;

#[component]
pub fn PokemonListPage() -> impl IntoView {
    let vm = PokemonListVm::new();
    let router = use_router();
    vm.init();

    // Back/forward
    let popstate = window_event_listener(leptos::ev::popstate, move |_| vm.on_location_changed());
    on_cleanup(move || popstate.remove());

    let displayed = vm.displayed();
    let error = vm.error();
    let is_loading = vm.is_loading();
    let type_filter = vm.type_filter();
    let search_debounced = vm.search_debounced();

    let on_card_click = Callback::new(move |pokemon: Pokemon| {
        router.navigate(&vm.detail_href(&pokemon.id));
    });
    let on_prefetch = Callback::new(move |id: String| vm.on_prefetch(id));
    let on_type_click = Callback::new(move |t: String| vm.on_type_click(t));

    let content = move || {
        if let Some(message) = error.get() {
            return view! { <ErrorBanner message=message /> }.into_any();
        }
        let items = displayed.get();
        if items.is_empty() {
            if is_loading.get() {
                return view! { <ListSkeleton /> }.into_any();
            }
            return view! {
                <EmptyState
                    search=search_debounced
                    on_clear=Callback::new(move |_| vm.on_clear_filters())
                />
            }
            .into_any();
        }
        view! {
            <ul class="pokemon-grid">
                {items
                    .into_iter()
                    .map(|pokemon| view! {
                        <PokemonCard
                            pokemon=pokemon
                            highlight=search_debounced
                            on_click=on_card_click
                            on_prefetch=on_prefetch
                            on_type_click=on_type_click
                        />
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="pokemon-list-page">
            <header class="pokemon-list-page__header">
                <h1>"Pokédex"</h1>
                <SearchInput
                    value=vm.search_input()
                    on_change=Callback::new(move |text: String| vm.on_search_input(text))
                    placeholder="Search by name, number or type..."
                />
                <Show when=move || !type_filter.get().is_empty()>
                    <TypeFilterChip
                        type_name=type_filter
                        on_clear=Callback::new(move |_| vm.on_clear_type())
                    />
                </Show>
            </header>

            {content}

            <Show when=move || error.get().is_none()>
                <PaginationControls
                    current_page=vm.page()
                    total=vm.pagination_total()
                    page_size=vm.page_size()
                    on_change=Callback::new(move |page: usize| vm.on_page_change(page))
                />
            </Show>
        </div>
    }
}
