use leptos::prelude::*;

use crate::shared::icons::icon;

/// Активный фильтр по типу с кнопкой сброса
#[component]
pub fn TypeFilterChip(
    #[prop(into)] type_name: Signal<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-chip">
            <span class="filter-chip__text">
                "Type: " <span class="filter-chip__type">{move || type_name.get()}</span>
            </span>
            <button
                type="button"
                class="filter-chip__close"
                on:click=move |_| on_clear.run(())
                aria-label=move || format!("Clear {} type filter", type_name.get())
            >
                {icon("x")}
            </button>
        </div>
    }
}
