use crate::{
    components::common::{Button, ButtonVariant},
    state::auth::{use_auth, use_logout_action, use_sign_in_action},
};
use leptos::*;

#[component]
pub fn AuthPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let sign_in = use_sign_in_action();
    let logout = use_logout_action();
    let email = Signal::derive(move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map(|u| u.email.clone().unwrap_or_default())
        })
    });

    view! {
        <div class="min-h-[70vh] flex items-center justify-center p-4">
            <div class="w-full max-w-sm rounded-xl border border-border bg-surface-elevated p-6 shadow-2xl text-center space-y-6">
                <Show
                    when=move || email.with(Option::is_some)
                    fallback=move || view! {
                        <div class="space-y-1">
                            <h1 class="text-2xl font-bold">"Join KencanKuy"</h1>
                            <p class="text-sm text-brand">"Sign in to start planning your perfect date."</p>
                        </div>
                        <Button
                            variant=ButtonVariant::Outline
                            class="w-full"
                            loading=Signal::derive(move || sign_in.pending().get())
                            on:click=move |_| sign_in.dispatch(())
                        >
                            "Sign in with Google"
                        </Button>
                    }
                >
                    <div class="space-y-1">
                        <h1 class="text-2xl font-bold">"Welcome Back!"</h1>
                        <p class="text-sm text-brand">{move || email.get().unwrap_or_default()}</p>
                    </div>
                    <Button
                        variant=ButtonVariant::Outline
                        class="w-full"
                        on:click=move |_| logout.dispatch(())
                    >
                        "Sign Out"
                    </Button>
                </Show>
            </div>
        </div>
    }
}
