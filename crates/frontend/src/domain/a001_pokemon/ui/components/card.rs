use contracts::domain::a001_pokemon::aggregate::Pokemon;
use leptos::prelude::*;

use super::type_badge::{BadgeSize, TypeBadge};
use crate::shared::list_utils::highlight_matches;

/// Карточка в сетке списка
#[component]
pub fn PokemonCard(
    pokemon: Pokemon,
    /// Settled search term, highlighted in the name
    #[prop(into)]
    highlight: Signal<String>,
    on_click: Callback<Pokemon>,
    /// Hover or focus: the detail is likely to be opened next
    on_prefetch: Callback<String>,
    on_type_click: Callback<String>,
) -> impl IntoView {
    let number = pokemon.display_number();
    let name = pokemon.name.clone();
    let alt = pokemon.name.clone();
    let sprite = pokemon.sprite.clone();
    let types = pokemon.types.clone();
    let id_hover = pokemon.id.clone();
    let id_focus = pokemon.id.clone();

    view! {
        <li>
            <button
                type="button"
                class="pokemon-card"
                on:click=move |_| on_click.run(pokemon.clone())
                on:mouseenter=move |_| on_prefetch.run(id_hover.clone())
                on:focus=move |_| on_prefetch.run(id_focus.clone())
            >
                <div class="pokemon-card__image">
                    {match sprite {
                        Some(src) => view! { <img src=src alt=alt /> }.into_any(),
                        None => view! { <div class="pokemon-card__placeholder">"No Image"</div> }.into_any(),
                    }}
                </div>
                <div class="pokemon-card__info">
                    <div class="pokemon-card__title">
                        <span class="pokemon-card__name">
                            {move || highlight_matches(&name, &highlight.get())}
                        </span>
                        <span class="pokemon-card__number">{number}</span>
                    </div>
                    <div class="pokemon-card__types">
                        {types
                            .into_iter()
                            .map(|t| view! {
                                <TypeBadge type_name=t size=BadgeSize::Small on_click=on_type_click />
                            })
                            .collect_view()}
                    </div>
                </div>
            </button>
        </li>
    }
}
