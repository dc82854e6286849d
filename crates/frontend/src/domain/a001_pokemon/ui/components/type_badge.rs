use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BadgeSize {
    fn class(&self) -> &'static str {
        match self {
            BadgeSize::Small => "type-badge--small",
            BadgeSize::Medium => "type-badge--medium",
            BadgeSize::Large => "type-badge--large",
        }
    }
}

/// Бейдж типа покемона.
///
/// With `on_click` set the badge becomes a button (click, Enter, Space) and
/// the event does not reach the enclosing card.
#[component]
pub fn TypeBadge(
    #[prop(into)] type_name: String,
    #[prop(optional)] size: BadgeSize,
    #[prop(optional, into)] on_click: Option<Callback<String>>,
) -> impl IntoView {
    let class = format!("type-badge {}", size.class());
    let label = type_name.clone();

    match on_click {
        Some(on_click) => {
            let click_type = type_name.clone();
            let key_type = type_name;
            view! {
                <span
                    class=class
                    role="button"
                    tabindex="0"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_click.run(click_type.clone());
                    }
                    on:keydown=move |ev| {
                        let key = ev.key();
                        if key == "Enter" || key == " " {
                            ev.prevent_default();
                            ev.stop_propagation();
                            on_click.run(key_type.clone());
                        }
                    }
                >
                    {label}
                </span>
            }
            .into_any()
        }
        None => view! { <span class=class>{label}</span> }.into_any(),
    }
}
