use crate::state::toast::{use_toaster, ToastKind};
use leptos::*;

fn toast_classes(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        ToastKind::Info => "bg-surface-elevated border-border text-fg",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = Signal::derive(move || toaster.state().get().toasts);

    view! {
        <div
            class="fixed bottom-4 right-4 z-[80] flex w-full max-w-sm flex-col gap-2"
            aria-live="polite"
        >
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!(
                                "rounded-lg border px-4 py-3 shadow-lg {}",
                                toast_classes(toast.kind),
                            )
                            role="status"
                        >
                            <div class="flex items-start justify-between gap-3">
                                <div>
                                    <p class="text-sm font-semibold">{toast.title}</p>
                                    {toast.description.map(|desc| view! {
                                        <p class="mt-1 text-sm opacity-90">{desc}</p>
                                    })}
                                </div>
                                <button
                                    type="button"
                                    aria-label="Dismiss"
                                    class="opacity-70 hover:opacity-100"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    {"✕"}
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
