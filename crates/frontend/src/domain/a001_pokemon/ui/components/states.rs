//! Placeholder states of the list: skeleton, empty result, error banner.

use leptos::prelude::*;

use crate::shared::icons::icon;

/// Заглушки карточек на время загрузки
#[component]
pub fn ListSkeleton(#[prop(default = 20)] count: usize) -> impl IntoView {
    view! {
        <ul class="pokemon-grid pokemon-grid--skeleton" aria-busy="true">
            {(0..count)
                .map(|_| view! {
                    <li class="pokemon-card pokemon-card--skeleton">
                        <div class="skeleton skeleton--image"></div>
                        <div class="pokemon-card__info">
                            <div class="skeleton skeleton--line"></div>
                            <div class="skeleton skeleton--line skeleton--short"></div>
                        </div>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

pub fn empty_title(search: &str) -> &'static str {
    if search.trim().is_empty() {
        "No Pokémon Available"
    } else {
        "No Pokémon found"
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] search: Signal<String>,
    /// Сброс поиска и фильтра
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state" role="status" aria-live="polite">
            <div class="empty-state__icon">{icon("search")}</div>
            <h3>{move || empty_title(&search.get())}</h3>
            {move || {
                let term = search.get();
                if term.trim().is_empty() {
                    view! { <p>"Try another type filter."</p> }.into_any()
                } else {
                    view! {
                        <p>
                            "No Pokémon found matching "
                            <span class="empty-state__term">{format!("\"{}\"", term)}</span>
                        </p>
                    }
                    .into_any()
                }
            }}
            <button type="button" class="button" on:click=move |_| on_clear.run(())>
                "Clear filters"
            </button>
        </div>
    }
}

#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            {icon("alert")}
            <span>{move || format!("Failed to load Pokémon: {}", message.get())}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title() {
        assert_eq!(empty_title("zzz"), "No Pokémon found");
        assert_eq!(empty_title("  "), "No Pokémon Available");
    }
}
