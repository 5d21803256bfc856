use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::fmt;

pub const DEFAULT_API_URL: &str = "https://app.koyeb.com";

/// Everything a single touch run needs to know. Built once, then only read.
#[derive(Clone, PartialEq, Eq)]
pub struct AppContext {
    pub token: String,
    pub app: String,
    pub service: String,
    pub api_url: String,
}

impl AppContext {
    pub fn new(
        token: impl Into<String>,
        app: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            app: app.into(),
            service: service.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("token", &"<redacted>")
            .field("app", &self.app)
            .field("service", &self.service)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Validate for AppContext {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)?;
        validate_non_empty_string("app", &self.app)?;
        validate_non_empty_string("service", &self.service)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TouchError;

    #[test]
    fn test_defaults_to_koyeb_api() {
        let ctx = AppContext::new("tok123", "myapp", "web");
        assert_eq!(ctx.api_url, "https://app.koyeb.com");
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_empty_identifiers_fail_validation() {
        let err = AppContext::new("tok123", "", "web").validate().unwrap_err();
        assert!(matches!(err, TouchError::MissingIdentifierError { ref field } if field == "app"));

        let err = AppContext::new("tok123", "myapp", "").validate().unwrap_err();
        assert!(
            matches!(err, TouchError::MissingIdentifierError { ref field } if field == "service")
        );
    }

    #[test]
    fn test_invalid_api_url_fails_validation() {
        let ctx = AppContext::new("tok123", "myapp", "web").with_api_url("ftp://koyeb");
        assert!(matches!(
            ctx.validate(),
            Err(TouchError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_debug_output_hides_token() {
        let ctx = AppContext::new("very-secret", "myapp", "web");
        let rendered = format!("{:?}", ctx);
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("myapp"));
    }
}
