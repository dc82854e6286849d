use crate::shared::icons::icon;
use leptos::prelude::*;

/// Сколько номеров страниц показывать одновременно
const PAGE_WINDOW: usize = 5;

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Пагинация нужна только если записей больше, чем помещается на страницу
pub fn should_render(total: usize, page_size: usize) -> bool {
    page_size > 0 && total > page_size
}

/// "41-60 of 160 Pokémon" for page 3.
pub fn range_label(current_page: usize, total: usize, page_size: usize) -> String {
    let page = current_page.max(1);
    let start = (page - 1).saturating_mul(page_size).saturating_add(1);
    let end = page.saturating_mul(page_size).min(total);
    format!("{}-{} of {} Pokémon", start.min(end.max(1)), end, total)
}

/// Up to [`PAGE_WINDOW`] consecutive page numbers around `current_page`,
/// shifted so that the window stays inside `1..=pages`.
pub fn page_window(current_page: usize, pages: usize) -> Vec<usize> {
    if pages == 0 {
        return Vec::new();
    }
    let width = PAGE_WINDOW.min(pages);
    let current = current_page.clamp(1, pages);
    let start = current
        .saturating_sub(width / 2)
        .max(1)
        .min(pages - width + 1);
    (start..start + width).collect()
}

fn scroll_to_top() {
    if let Some(w) = web_sys::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// PaginationControls component - prev/next and a window of page numbers
///
/// Renders nothing when everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of items
    #[prop(into)]
    total: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_change: Callback<usize>,
) -> impl IntoView {
    let pages = move || total_pages(total.get(), page_size.get());
    let go_to = move |page: usize| {
        on_change.run(page);
        scroll_to_top();
    };

    move || {
        if !should_render(total.get(), page_size.get()) {
            return view! { <></> }.into_any();
        }

        view! {
            <nav class="pagination-controls" aria-label="Pagination">
                <span class="pagination-info">
                    {move || range_label(current_page.get(), total.get(), page_size.get())}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            go_to(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || page_window(current_page.get(), pages())
                    .into_iter()
                    .map(|page| {
                        let is_current = move || current_page.get() == page;
                        view! {
                            <button
                                class=move || if is_current() {
                                    "pagination-btn pagination-btn--active"
                                } else {
                                    "pagination-btn"
                                }
                                aria-current=move || if is_current() { Some("page") } else { None }
                                on:click=move |_| {
                                    if !is_current() {
                                        go_to(page);
                                    }
                                }
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < pages() {
                            go_to(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= pages()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        }
        .into_any()
    }
}
