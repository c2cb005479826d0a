pub mod form;
pub mod location_picker;
pub mod machine;
pub mod panel;
pub mod repository;
pub mod view_model;

pub use panel::PlanWizardPage;
