use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPill {
    pub key: &'static str,
    pub label: &'static str,
    pub count: Option<usize>,
}

impl NavPill {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

fn pill_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1 rounded-full text-sm font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "px-3 py-1 rounded-full text-sm font-medium text-fg-muted hover:bg-action-ghost-bg-hover"
    }
}

#[component]
pub fn NavPills(
    #[prop(into)] pills: MaybeSignal<Vec<NavPill>>,
    #[prop(into)] active: MaybeSignal<&'static str>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <nav class="flex flex-wrap gap-2" aria-label="Filter">
            <For
                each=move || pills.get()
                key=|pill| (pill.key, pill.count)
                children=move |pill| {
                    let key = pill.key;
                    let is_active = move || active.get() == key;
                    view! {
                        <button
                            type="button"
                            class=move || pill_class(is_active())
                            aria-pressed=move || is_active().to_string()
                            on:click=move |_| on_select.call(key)
                        >
                            {pill.label}
                            {pill.count.map(|count| view! {
                                <span class="ml-1 text-xs opacity-75">{format!("({})", count)}</span>
                            })}
                        </button>
                    }
                }
            />
        </nav>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_labels_counts_and_active_state() {
        let html = render_to_string(move || {
            let pills = vec![
                NavPill::new("all", "All").with_count(3),
                NavPill::new("pending", "Pending").with_count(1),
            ];
            view! {
                <NavPills
                    pills=pills
                    active=Signal::derive(|| "pending")
                    on_select=Callback::new(|_: &'static str| {})
                />
            }
        });
        assert!(html.contains("All"));
        assert!(html.contains("(3)"));
        assert!(html.contains("Pending"));
        assert!(html.contains("aria-pressed=\"true\""));
    }

    #[test]
    fn pill_class_highlights_active() {
        assert!(pill_class(true).contains("bg-action-primary-bg"));
        assert!(!pill_class(false).contains("bg-action-primary-bg"));
    }
}
