use crate::config::context::{AppContext, DEFAULT_API_URL};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "koyeb-touch")]
#[command(about = "Redeploy a Koyeb service from its latest revision")]
pub struct CliConfig {
    #[arg(help = "Koyeb API token")]
    pub api_token: String,

    #[arg(help = "Application name or id")]
    pub app: String,

    #[arg(help = "Service name or id")]
    pub service: String,

    #[arg(long, default_value = DEFAULT_API_URL, help = "Koyeb API base URL")]
    pub api_url: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn context(&self) -> AppContext {
        AppContext::new(&self.api_token, &self.app, &self.service).with_api_url(&self.api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parses_positional_arguments() {
        let config = CliConfig::try_parse_from(["koyeb-touch", "tok123", "myapp", "web"]).unwrap();

        assert_eq!(config.api_token, "tok123");
        assert_eq!(config.app, "myapp");
        assert_eq!(config.service, "web");
        assert_eq!(config.api_url, "https://app.koyeb.com");
        assert!(!config.verbose);

        let ctx = config.context();
        assert_eq!(ctx.token, "tok123");
        assert_eq!(ctx.service, "web");
    }

    #[test]
    fn test_missing_arguments_is_a_usage_error() {
        for args in [
            vec!["koyeb-touch"],
            vec!["koyeb-touch", "tok123"],
            vec!["koyeb-touch", "tok123", "myapp"],
        ] {
            let err = CliConfig::try_parse_from(args.clone()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument, "{:?}", args);
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn test_empty_identifiers_parse_but_fail_validation() {
        use crate::utils::validation::Validate;

        let config = CliConfig::try_parse_from(["koyeb-touch", "tok123", "", "web"]).unwrap();
        assert!(config.context().validate().is_err());
    }

    #[test]
    fn test_options() {
        let config = CliConfig::try_parse_from([
            "koyeb-touch",
            "-v",
            "--api-url",
            "http://localhost:9000",
            "tok123",
            "myapp",
            "web",
        ])
        .unwrap();

        assert!(config.verbose);
        assert_eq!(config.context().api_url, "http://localhost:9000");
    }
}
