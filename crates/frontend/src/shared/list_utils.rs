/// Универсальные утилиты для работы со списками (поиск, фильтр по тегу, UI компоненты)
use leptos::prelude::*;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу.
    ///
    /// `filter` is passed as typed by the user (not trimmed); implementations
    /// decide which fields compare case-insensitively.
    fn matches_filter(&self, filter: &str) -> bool;

    /// Проверяет наличие тега (типа), без учёта регистра
    fn has_tag(&self, tag: &str) -> bool;
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        // Добавляем текст до совпадения
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }

        parts.push(view! {
            <mark style="background-color: #ffcb05; color: #1a1a2e; padding: 0 1px; border-radius: 2px;">
                {text[start..end].to_string()}
            </mark>
        }.into_any());

        last_pos = end;
    }

    // Добавляем оставшийся текст
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of case-insensitive, non-overlapping matches of `filter` in `text`.
///
/// Returns nothing when lowercasing changes the byte length of any character
/// of `text`: offsets in the lowercased copy would no longer map onto the
/// original.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.trim().is_empty() {
        return Vec::new();
    }

    let same_offsets = text
        .chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8());
    if !same_offsets {
        return Vec::new();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Vec::new();
        }
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Фильтрует список по типу и поисковому запросу.
///
/// Order preserving. The tag filter applies when `tag` is non-empty, the text
/// filter when `filter` is non-blank; both must match when both are set.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str, tag: &str) -> Vec<T> {
    let has_filter = !filter.trim().is_empty();
    let has_tag = !tag.is_empty();
    if !has_filter && !has_tag {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| !has_tag || item.has_tag(tag))
        .filter(|item| !has_filter || item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Поле поиска с кнопкой очистки.
///
/// Emits every keystroke; settling the value is up to the caller.
#[component]
pub fn SearchInput(
    /// Текущее значение (эхо ввода)
    #[prop(into)]
    value: Signal<String>,
    /// Callback на каждое изменение
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div style="position: relative; display: flex; align-items: center; max-width: 500px;">
            <span style="position: absolute; left: 10px; display: inline-flex; color: #666;">
                {crate::shared::icons::icon("search")}
            </span>
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 100%; padding: 10px 36px; border: 1px solid {}; border-radius: 6px; font-size: 16px; background: #ffffff; color: #000000;",
                    if is_filter_active() { "#4a90e2" } else { "#d9d9d9" }
                )
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 8px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=move |_| on_change.run(String::new())
                        title="Clear search"
                        aria-label="Clear search"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        name: &'static str,
        tags: Vec<&'static str>,
    }

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }

        fn has_tag(&self, tag: &str) -> bool {
            self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "alpha", tags: vec!["x"] },
            Item { name: "beta", tags: vec!["y"] },
            Item { name: "alphabet", tags: vec!["y", "x"] },
        ]
    }

    #[test]
    fn test_no_filters_returns_everything_in_order() {
        assert_eq!(filter_list(&items(), "   ", ""), items());
    }

    #[test]
    fn test_filters_are_anded_and_order_preserved() {
        let by_text = filter_list(&items(), "alpha", "");
        assert_eq!(by_text.iter().map(|i| i.name).collect::<Vec<_>>(), vec!["alpha", "alphabet"]);

        let by_tag = filter_list(&items(), "", "Y");
        assert_eq!(by_tag.iter().map(|i| i.name).collect::<Vec<_>>(), vec!["beta", "alphabet"]);

        let both = filter_list(&items(), "alpha", "y");
        assert_eq!(both.iter().map(|i| i.name).collect::<Vec<_>>(), vec!["alphabet"]);
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Pikachu", "PIKA"), vec![(0, 4)]);
        assert_eq!(match_ranges("Abra-abra", "abra"), vec![(0, 4), (5, 9)]);
        assert!(match_ranges("Pikachu", " ").is_empty());
        assert!(match_ranges("Pikachu", "zz").is_empty());
    }

    #[test]
    fn test_match_ranges_with_case_folding_that_shifts_offsets() {
        // ẞ shrinks and İ grows when lowercased, total length is unchanged
        let text = "ẞİ";
        assert_eq!(text.len(), text.to_lowercase().len());
        assert!(match_ranges(text, "i").is_empty());
        assert_eq!(match_ranges("Flabébé", "BÉ"), vec![(3, 6), (6, 9)]);
    }
}
