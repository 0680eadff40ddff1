use shared::Session;

pub const API_BASE_ATTR: &str = "data-api-base";
pub const USER_SUB_ATTR: &str = "data-user-sub";

/// Settings the host page passes in as attributes on `<body>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub user_sub: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            user_sub: None,
        }
    }
}

impl AppConfig {
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(api_base) = non_empty(API_BASE_ATTR) {
            config.api_base = api_base.trim_end_matches('/').to_string();
        }
        config.user_sub = non_empty(USER_SUB_ATTR);
        config
    }

    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body());

        match body {
            Some(body) => Self::from_attributes(|name| body.get_attribute(name)),
            None => {
                tracing::warn!("no document body, using default config");
                Self::default()
            }
        }
    }

    pub fn session(&self) -> Session {
        Session {
            sub: self.user_sub.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attributes_use_defaults() {
        let config = AppConfig::from_attributes(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session().user_id(), None);
    }

    #[test]
    fn attributes_override_defaults() {
        let config = AppConfig::from_attributes(|name| match name {
            API_BASE_ATTR => Some("https://todo.example.com/v1/".to_string()),
            USER_SUB_ATTR => Some(" u1 ".to_string()),
            _ => None,
        });

        assert_eq!(config.api_base, "https://todo.example.com/v1");
        assert_eq!(config.session().user_id(), Some("u1"));
    }

    #[test]
    fn blank_user_is_anonymous() {
        let config = AppConfig::from_attributes(|name| (name == USER_SUB_ATTR).then(|| "  ".to_string()));
        assert_eq!(config.user_sub, None);
    }
}
