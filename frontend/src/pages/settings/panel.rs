use super::{
    form::ProfileForm,
    view_model::{use_profile_settings_view_model, SIGNED_OUT_MESSAGE},
};
use crate::components::common::ButtonVariant;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ProfileSettingsPage() -> impl IntoView {
    let vm = use_profile_settings_view_model();
    let pending = vm.save_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let set_field = move |apply: fn(&mut ProfileForm, String)| {
        Callback::new(move |value: String| vm.form.update(|form| apply(form, value)))
    };

    view! {
        <div class="mx-auto max-w-2xl py-8 px-4">
            <Show
                when=move || vm.signed_in.get()
                fallback=|| view! {
                    <p class="text-center text-fg-muted">{SIGNED_OUT_MESSAGE}</p>
                }
            >
                <div class="rounded-xl border border-border bg-surface-elevated p-6 shadow">
                    <h1 class="text-2xl font-bold text-fg">"Profile Settings"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Update your name and your partner's details."
                    </p>
                    <form class="mt-6 space-y-5" on:submit=on_submit>
                        <FormField
                            label="Name"
                            id="name"
                            value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                            on_input=set_field(|f, v| f.name = v)
                            error=Signal::derive(move || vm.errors.with(|e| e.name))
                        />
                        <FormField
                            label="Partner's Name"
                            id="partnerName"
                            value=Signal::derive(move || vm.form.with(|f| f.partner_name.clone()))
                            on_input=set_field(|f, v| f.partner_name = v)
                            error=Signal::derive(|| None)
                        />
                        <FormField
                            label="Partner's Email"
                            id="partnerEmail"
                            input_type="email"
                            value=Signal::derive(move || vm.form.with(|f| f.partner_email.clone()))
                            on_input=set_field(|f, v| f.partner_email = v)
                            error=Signal::derive(move || vm.errors.with(|e| e.partner_email))
                        />
                        <button
                            type="submit"
                            class=format!("inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Primary.classes())
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FormField(
    label: &'static str,
    id: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class="w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-fg"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! {
                <p class="text-sm text-status-error-text">{msg}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{alice, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_is_seeded_for_signed_in_user() {
        let html = render_to_string(move || {
            provide_auth(Some(alice()), true);
            view! { <ProfileSettingsPage /> }
        });
        assert!(html.contains("Profile Settings"));
        assert!(html.contains("Partner&#x27;s Email") || html.contains("Partner's Email"));
        assert!(html.contains("Save Changes"));
    }

    #[test]
    fn signed_out_users_are_told_to_log_in() {
        let html = render_to_string(move || {
            provide_auth(None, true);
            view! { <ProfileSettingsPage /> }
        });
        assert!(html.contains(SIGNED_OUT_MESSAGE));
    }
}
