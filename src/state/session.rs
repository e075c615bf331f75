//! Client-held authentication state. Any credentials are accepted; the
//! token is opaque and never validated against the backend.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub authenticated: bool,
    pub token: String,
    pub display_name: String,
}

impl Session {
    /// Rebuild the session from whatever the last visit left in browser
    /// storage. A present token counts as a valid session; there is no
    /// expiry check.
    pub fn restore(token: Option<String>, display_name: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Session {
                authenticated: true,
                token,
                display_name: display_name.unwrap_or_default(),
            },
            _ => Session::default(),
        }
    }

    pub fn logged_in(token: String, display_name: String) -> Self {
        Session {
            authenticated: true,
            token,
            display_name,
        }
    }

    pub fn logged_out() -> Self {
        Session::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::PLACEHOLDER_TOKEN;

    #[test]
    fn any_token_restores_an_authenticated_session() {
        let s = Session::restore(Some(PLACEHOLDER_TOKEN.into()), Some("alice".into()));
        assert!(s.authenticated);
        assert_eq!(s.display_name, "alice");
    }

    #[test]
    fn missing_or_empty_token_restores_nothing() {
        assert!(!Session::restore(None, Some("alice".into())).authenticated);
        assert!(!Session::restore(Some(String::new()), None).authenticated);
    }

    #[test]
    fn login_then_logout_round_trip() {
        let s = Session::logged_in(PLACEHOLDER_TOKEN.into(), "alice".into());
        assert!(s.authenticated);
        assert_eq!(s.token, PLACEHOLDER_TOKEN);

        let s = Session::logged_out();
        assert!(!s.authenticated);
        assert!(s.token.is_empty());
        assert!(s.display_name.is_empty());
    }
}
