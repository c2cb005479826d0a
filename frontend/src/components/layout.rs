use crate::{
    components::toast::ToastHost,
    router::paths,
    state::auth::{use_auth, use_logout_action},
};
use leptos::*;

const NAV_LINK: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";
const MOBILE_NAV_LINK: &str =
    "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let signed_in = create_memo(move |_| auth.get().is_signed_in());
    let logout_action = use_logout_action();
    let logout_pending = logout_action.pending();

    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <header class="sticky top-0 z-40 bg-surface-elevated/90 backdrop-blur border-b border-border">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=paths::HOME class="text-xl font-bold text-brand">
                        "KencanKuy"
                    </a>
                    <div class="flex items-center">
                        <nav class="hidden md:flex items-center space-x-2">
                            <a href=paths::APP class=NAV_LINK>"Create Plan"</a>
                            <Show
                                when=move || signed_in.get()
                                fallback=|| view! {
                                    <a href=paths::AUTH class=NAV_LINK>"Sign In"</a>
                                }
                            >
                                <a href=paths::MY_PLANS class=NAV_LINK>"My Plans"</a>
                                <a href=paths::SETTINGS class=NAV_LINK>"Settings"</a>
                                <button
                                    on:click=on_logout
                                    class=format!("{} disabled:opacity-50", NAV_LINK)
                                    disabled=move || logout_pending.get()
                                >
                                    "Sign Out"
                                </button>
                            </Show>
                        </nav>
                        <button
                            type="button"
                            class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <Show
                                    when=move || menu_open.get()
                                    fallback=move || {
                                        view! {
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M4 6h16M4 12h16M4 18h16"
                                            />
                                        }
                                    }
                                >
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M6 18L18 6M6 6l12 12"
                                    />
                                </Show>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="md:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            <a href=paths::APP class=MOBILE_NAV_LINK on:click=close_menu>
                                "Create Plan"
                            </a>
                            <Show
                                when=move || signed_in.get()
                                fallback=move || view! {
                                    <a href=paths::AUTH class=MOBILE_NAV_LINK on:click=close_menu>
                                        "Sign In"
                                    </a>
                                }
                            >
                                <a href=paths::MY_PLANS class=MOBILE_NAV_LINK on:click=close_menu>
                                    "My Plans"
                                </a>
                                <a href=paths::SETTINGS class=MOBILE_NAV_LINK on:click=close_menu>
                                    "Settings"
                                </a>
                                <button
                                    on:click=on_logout
                                    class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                                    disabled=move || logout_pending.get()
                                >
                                    "Sign Out"
                                </button>
                            </Show>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-6xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <ToastHost/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

/// Shown while the identity provider has not reported its first state.
#[component]
pub fn FullScreenLoader() -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex flex-col items-center justify-center bg-surface" aria-busy="true">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-action-primary-bg"></div>
            <p class="mt-4 text-sm text-fg-muted">"Loading..."</p>
        </div>
    }
}
