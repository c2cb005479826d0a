pub mod admin_curate;
pub mod auth;
pub mod home;
pub mod my_plans;
pub mod plan;
pub mod plan_wizard;
pub mod settings;
