use crate::api::{UpdateProfileRequest, UserProfile};

pub const NAME_REQUIRED: &str = "Name is required.";
pub const INVALID_EMAIL: &str = "Invalid email address.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub partner_name: String,
    pub partner_email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfileFormErrors {
    pub name: Option<&'static str>,
    pub partner_email: Option<&'static str>,
}

impl ProfileFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.partner_email.is_none()
    }
}

impl ProfileForm {
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        let Some(profile) = profile else {
            return Self::default();
        };
        Self {
            name: profile.name.clone().unwrap_or_default(),
            partner_name: profile.partner_name.clone().unwrap_or_default(),
            partner_email: profile.partner_email.clone().unwrap_or_default(),
        }
    }

    pub fn errors(&self) -> ProfileFormErrors {
        let partner_email = self.partner_email.trim();
        ProfileFormErrors {
            name: self.name.trim().is_empty().then_some(NAME_REQUIRED),
            partner_email: (!partner_email.is_empty() && !is_valid_email(partner_email))
                .then_some(INVALID_EMAIL),
        }
    }

    /// Partner fields are always sent so that clearing them sticks.
    pub fn to_request(&self) -> Result<UpdateProfileRequest, ProfileFormErrors> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(UpdateProfileRequest {
            name: self.name.trim().to_string(),
            partner_name: Some(self.partner_name.trim().to_string()),
            partner_email: Some(self.partner_email.trim().to_string()),
        })
    }
}

pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
