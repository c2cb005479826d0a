use crate::{
    components::layout::LoadingSpinner, router::paths, state::auth::use_auth,
    utils::navigation::navigate_to,
};
use leptos::*;

/// Renders `children` only for a signed-in user; otherwise sends the browser
/// to the sign-in page once the auth state is known.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_signed_in = create_memo(move |_| auth.get().is_signed_in());
    let is_ready = create_memo(move |_| auth.get().is_ready);
    create_effect(move |_| {
        if let Some(target) = redirect_target(is_ready.get(), is_signed_in.get()) {
            navigate_to(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_ready.get(), is_signed_in.get())
            fallback=move || {
                if is_ready.get() {
                    ().into_view()
                } else {
                    view! { <LoadingSpinner /> }.into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_ready: bool, is_signed_in: bool) -> bool {
    is_ready && is_signed_in
}

fn redirect_target(is_ready: bool, is_signed_in: bool) -> Option<&'static str> {
    (is_ready && !is_signed_in).then_some(paths::AUTH)
}
