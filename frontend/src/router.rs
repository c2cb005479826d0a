use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::fmt::Display;

use crate::{
    api::ApiClient,
    components::{guard::RequireAuth, layout::Layout},
    identity::{default_identity, SharedIdentity},
    pages::{
        admin_curate::AdminCuratePage, auth::AuthPage, home::HomePage, my_plans::MyPlansPage,
        plan::PlanPage, plan_wizard::PlanWizardPage, settings::ProfileSettingsPage,
    },
    state::{auth::AuthProvider, toast::provide_toaster},
};

pub mod paths {
    pub const HOME: &str = "/";
    pub const AUTH: &str = "/auth";
    pub const APP: &str = "/app";
    pub const MY_PLANS: &str = "/app/my-plans";
    pub const PLAN: &str = "/app/plan";
    pub const SETTINGS: &str = "/settings/profile";
    pub const ADMIN_CURATE: &str = "/admin/curate";
}

pub const ROUTE_PATHS: &[&str] = &[
    paths::HOME,
    paths::AUTH,
    paths::APP,
    paths::MY_PLANS,
    "/app/plan/:id",
    paths::SETTINGS,
    paths::ADMIN_CURATE,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[paths::SETTINGS, paths::ADMIN_CURATE];

pub fn plan_detail_path(id: impl Display) -> String {
    format!("{}/{}", paths::PLAN, id)
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let identity: SharedIdentity = default_identity();
    provide_context(identity.clone());
    provide_context(ApiClient::new().with_identity(identity));
    provide_toaster();
    provide_meta_context();
    view! {
        <Title text="KencanKuy - Smart Date Planner"/>
        <AuthProvider>
            <Router>
                <Layout>
                    <Routes>
                        <Route path=paths::HOME view=HomePage/>
                        <Route path=paths::AUTH view=AuthPage/>
                        <Route path=paths::APP view=PlanWizardPage/>
                        <Route path=paths::MY_PLANS view=MyPlansPage/>
                        <Route path="/app/plan/:id" view=PlanPage/>
                        <Route path=paths::SETTINGS view=ProtectedProfileSettings/>
                        <Route path=paths::ADMIN_CURATE view=ProtectedAdminCurate/>
                    </Routes>
                </Layout>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedProfileSettings() -> impl IntoView {
    view! { <RequireAuth><ProfileSettingsPage/></RequireAuth> }
}

#[component]
fn ProtectedAdminCurate() -> impl IntoView {
    view! { <RequireAuth><AdminCuratePage/></RequireAuth> }
}
