use contracts::domain::a001_pokemon::aggregate::PokemonDetail;
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

use super::format::{format_capture_rate, format_height, format_weight, stat_label};
use super::view_model::{DetailStatus, PokemonDetailsVm};
use crate::domain::a001_pokemon::model::use_detail_cache;
use crate::domain::a001_pokemon::ui::components::{BadgeSize, TypeBadge};
use crate::domain::a001_pokemon::ui::list::query::list_href_from;
use crate::routes::use_router;
use crate::shared::icons::icon;
use crate::shared::location::{BrowserLocation, LocationPort};

/// Модальное окно деталей поверх списка (`/pokemon/{id}`)
#[component]
pub fn PokemonDetailsModal(#[prop(into)] id: String) -> impl IntoView {
    let vm = PokemonDetailsVm::new(use_detail_cache());
    let router = use_router();
    vm.load(id);

    // Закрытие возвращает на список с тем же query string
    let close = move || router.navigate(&list_href_from(&BrowserLocation.search()));

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                <button type="button" class="modal__close" aria-label="Close" on:click=move |_| close()>
                    {icon("x")}
                </button>
                {move || match vm.status.get() {
                    DetailStatus::Loading => view! {
                        <div class="modal__loading">
                            <Spinner size=SpinnerSize::Large />
                        </div>
                    }
                    .into_any(),
                    DetailStatus::Failed(e) => view! {
                        <div class="error-banner" role="alert">
                            {icon("alert")}
                            <span>{format!("Failed to load Pokémon details: {}", e)}</span>
                        </div>
                    }
                    .into_any(),
                    DetailStatus::NotFound => view! {
                        <div class="modal__not-found">
                            <h2>"Pokémon not found"</h2>
                            <p>{move || format!("There is no Pokémon with id \"{}\".", vm.id.get())}</p>
                        </div>
                    }
                    .into_any(),
                    DetailStatus::Loaded(detail) => view! { <DetailContent detail=detail /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn DetailContent(detail: PokemonDetail) -> impl IntoView {
    let PokemonDetail {
        base,
        weight,
        height,
        capture_rate,
        stats,
    } = detail;
    let number = base.display_number();
    let info = [
        ("Weight", format_weight(weight)),
        ("Height", format_height(height)),
        ("Capture Rate", format_capture_rate(capture_rate)),
    ];
    let has_stats = !stats.is_empty();

    view! {
        <div class="pokemon-detail">
            <div class="pokemon-detail__header">
                <div class="pokemon-detail__image">
                    {match base.sprite.clone() {
                        Some(src) => view! { <img src=src alt=base.name.clone() /> }.into_any(),
                        None => view! { <div class="pokemon-card__placeholder">"No Image"</div> }.into_any(),
                    }}
                </div>
                <div class="pokemon-detail__title">
                    <h2>{base.name.clone()}</h2>
                    <span class="pokemon-detail__number">{number}</span>
                </div>
                <div class="pokemon-detail__types">
                    {base
                        .types
                        .iter()
                        .map(|t| view! { <TypeBadge type_name=t.clone() size=BadgeSize::Large /> })
                        .collect_view()}
                </div>
            </div>

            <div class="pokemon-detail__info">
                {info
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="info-card">
                            <div class="info-card__label">{label}</div>
                            <div class="info-card__value">{value}</div>
                        </div>
                    })
                    .collect_view()}
            </div>

            {has_stats.then(|| view! {
                <div class="pokemon-detail__stats">
                    <h3>"Base Stats"</h3>
                    <div class="stats-grid">
                        {stats
                            .into_iter()
                            .map(|stat| view! {
                                <div class="stat">
                                    <div class="stat__label">{stat_label(&stat.name)}</div>
                                    <div class="stat__value">{stat.base_stat}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            })}
        </div>
    }
}
