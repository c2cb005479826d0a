use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Lax,
    Strict,
    None,
}

#[derive(Debug, Clone, Copy)]
pub struct CookieOptions {
    pub secure: bool,
    pub same_site: SameSite,
}

pub const SESSION_COOKIE_NAME: &str = "session";
pub const SESSION_COOKIE_PATH: &str = "/";

pub fn build_session_cookie(
    name: &str,
    value: &str,
    max_age: Duration,
    path: &str,
    options: CookieOptions,
) -> String {
    let mut cookie = format!(
        "{}={}; Path={}; Max-Age={}; HttpOnly",
        name,
        value,
        path,
        max_age.as_secs(),
    );
    if options.secure {
        cookie.push_str("; Secure");
    }
    cookie.push_str("; SameSite=");
    cookie.push_str(same_site_value(options.same_site));
    cookie
}

pub fn build_clear_cookie(name: &str, path: &str) -> String {
    format!("{}=; Path={}; Max-Age=0", name, path)
}

pub fn extract_cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}

fn same_site_value(same_site: SameSite) -> &'static str {
    match same_site {
        SameSite::Lax => "Lax",
        SameSite::Strict => "Strict",
        SameSite::None => "None",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_has_expected_attribute_order() {
        let opts = CookieOptions {
            secure: true,
            same_site: SameSite::Lax,
        };
        let cookie = build_session_cookie(
            SESSION_COOKIE_NAME,
            "abc",
            Duration::from_secs(432_000),
            SESSION_COOKIE_PATH,
            opts,
        );
        assert_eq!(
            cookie,
            "session=abc; Path=/; Max-Age=432000; HttpOnly; Secure; SameSite=Lax"
        );
    }

    #[test]
    fn insecure_cookie_omits_secure() {
        let opts = CookieOptions {
            secure: false,
            same_site: SameSite::Strict,
        };
        let cookie = build_session_cookie("session", "v", Duration::from_secs(1), "/", opts);
        assert!(!cookie.contains("Secure"));
        assert!(cookie.ends_with("SameSite=Strict"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        assert_eq!(build_clear_cookie("session", "/"), "session=; Path=/; Max-Age=0");
    }

    #[test]
    fn extract_cookie_value_finds_matching_name() {
        let header = "a=1; session=token-value; b=2";
        assert_eq!(
            extract_cookie_value(header, "session").as_deref(),
            Some("token-value")
        );
        assert!(extract_cookie_value(header, "missing").is_none());
    }
}
