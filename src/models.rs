use serde::{Deserialize, Serialize};

/// Outcome category of the last simulated call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Inline message shown above a screen's primary button.
///
/// Each new attempt overwrites the previous message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl ApiMessage {
    pub fn success(text: impl Into<String>) -> Self {
        ApiMessage {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        ApiMessage {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

/// Colour scheme selection, held per screen instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Third-party identity providers offered on Login and Sign Up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    GitHub,
    Google,
    Facebook,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 3] = [
        SocialProvider::GitHub,
        SocialProvider::Google,
        SocialProvider::Facebook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::GitHub => "GitHub",
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
        }
    }
}

impl std::fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named navigation routes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    SignUp,
    Otp,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::SignUp => "SignUp",
            Route::Otp => "OTP",
        }
    }
}

/// Email/password pair submitted from the Login screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Account details submitted from the Sign Up screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Successful gateway results
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthReply {
    LoggedIn { email: String },
    AccountCreated { full_name: String },
    ResetLinkSent { email: String },
    SocialSignedIn { provider: SocialProvider },
    CodeResent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_theme_deserializes_lowercase() {
        let theme: Theme = serde_yaml::from_str("dark").unwrap();
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_theme_name_matches_config_spelling() {
        for theme in [Theme::Light, Theme::Dark] {
            let parsed: Theme = serde_yaml::from_str(theme.as_str()).unwrap();
            assert_eq!(parsed, theme);
        }
    }
}
