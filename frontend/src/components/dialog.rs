use leptos::ev::KeyboardEvent;
use leptos::*;

/// Centered modal with a backdrop. Escape, the backdrop and the close button
/// all call `on_close`.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] description: Option<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let description = store_value(description);
    let children = store_value(children);

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <div>
                            <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                            {move || description.get_value().map(|d| view! {
                                <p class="mt-1 text-sm text-fg-muted">{d}</p>
                            })}
                        </div>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {move || children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_title_and_body_when_open() {
        let html = render_to_string(move || {
            view! {
                <Modal
                    is_open=Signal::derive(|| true)
                    title="Edit: Kopi Senja"
                    description="Make changes to the place details here."
                    on_close=Callback::new(|_| {})
                >
                    <p>"form-body"</p>
                </Modal>
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Edit: Kopi Senja"));
        assert!(html.contains("form-body"));
    }

    #[test]
    fn modal_is_absent_when_closed() {
        let html = render_to_string(move || {
            view! {
                <Modal
                    is_open=Signal::derive(|| false)
                    title="Hidden"
                    on_close=Callback::new(|_| {})
                >
                    <p>"form-body"</p>
                </Modal>
            }
        });
        assert!(!html.contains("form-body"));
    }
}
