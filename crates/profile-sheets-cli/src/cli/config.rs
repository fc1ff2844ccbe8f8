use anyhow::{Context, anyhow, bail};
use clap::Parser;
use core::fmt;
use core::num::NonZeroUsize;
use profile_sheets::{Concurrency, DEFAULT_ENDPOINT};
use std::path::{Path, PathBuf};

/// Command-line and environment configuration for the `profile-sheets`
/// binary.
///
/// Every flag falls back to an environment variable, and a `.env` file in the
/// working directory is loaded into the environment before parsing.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "profile-sheets",
    version,
    about = "Render a PDF profile sheet for every user returned by the GitHub GraphQL search"
)]
pub struct CliArgs {
    /// GitHub token used as the bearer credential for the GraphQL API.
    ///
    /// Environment variable: `GITHUB_TOKEN`
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Number of users to request from the search.
    ///
    /// Environment variable: `NUM_USERS`
    #[arg(long, env = "NUM_USERS", default_value_t = 200)]
    pub count: usize,

    /// GraphQL endpoint to query.
    ///
    /// Environment variable: `GITHUB_GRAPHQL_URL`
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value_t = String::from(DEFAULT_ENDPOINT))]
    pub endpoint: String,

    /// Directory the `<login>.pdf` files are written to. Created if missing.
    ///
    /// Environment variable: `OUTPUT_DIR`
    #[arg(long, env = "OUTPUT_DIR", default_value = "./assets")]
    pub output_dir: PathBuf,

    /// Upper bound on sheets generated at the same time. Unbounded when unset.
    ///
    /// Environment variable: `MAX_CONCURRENCY`
    #[arg(long, env = "MAX_CONCURRENCY")]
    pub max_concurrency: Option<usize>,
}

/// Loads `path` into the process environment.
///
/// A missing file is not an error. A file that exists but cannot be read or
/// parsed is, since a half-loaded `.env` would otherwise surface later as a
/// misleading missing-variable error.
pub fn load_env_file(path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).with_context(|| format!("failed to load {}", path.display())),
    }
}

/// Validated run configuration.
#[derive(Clone)]
pub struct RunConfig {
    pub token: String,
    pub count: usize,
    pub endpoint: String,
    pub output_dir: PathBuf,
    pub concurrency: Concurrency,
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("token", &"<redacted>")
            .field("count", &self.count)
            .field("endpoint", &self.endpoint)
            .field("output_dir", &self.output_dir)
            .field("concurrency", &self.concurrency)
            .finish()
    }
}

impl TryFrom<CliArgs> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let token = args
            .token
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("GITHUB_TOKEN must be set in the environment or .env file"))?;

        if args.count == 0 {
            bail!("NUM_USERS must be greater than 0");
        }

        if !(args.endpoint.starts_with("https://") || args.endpoint.starts_with("http://")) {
            bail!(
                "GITHUB_GRAPHQL_URL ({}) must be an http(s) URL",
                args.endpoint
            );
        }

        let concurrency = match args.max_concurrency {
            None => Concurrency::Unbounded,
            Some(limit) => Concurrency::Limited(
                NonZeroUsize::new(limit)
                    .ok_or_else(|| anyhow!("MAX_CONCURRENCY must be greater than 0"))?,
            ),
        };

        Ok(Self {
            token,
            count: args.count,
            endpoint: args.endpoint,
            output_dir: args.output_dir,
            concurrency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            token: Some("ghp_token".to_string()),
            count: 200,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_dir: PathBuf::from("./assets"),
            max_concurrency: None,
        }
    }

    #[test]
    fn valid_args_produce_unbounded_config() {
        let config = RunConfig::try_from(args()).unwrap();
        assert_eq!(config.token, "ghp_token");
        assert_eq!(config.count, 200);
        assert_eq!(config.concurrency, Concurrency::Unbounded);
        assert_eq!(config.output_dir, PathBuf::from("./assets"));
    }

    #[test]
    fn missing_or_blank_token_is_fatal() {
        let missing = CliArgs {
            token: None,
            ..args()
        };
        assert!(RunConfig::try_from(missing).is_err());

        let blank = CliArgs {
            token: Some(" \n".to_string()),
            ..args()
        };
        assert!(RunConfig::try_from(blank).is_err());
    }

    #[test]
    fn token_is_trimmed() {
        let padded = CliArgs {
            token: Some("  ghp_token\n".to_string()),
            ..args()
        };
        assert_eq!(RunConfig::try_from(padded).unwrap().token, "ghp_token");
    }

    #[test]
    fn zero_count_is_rejected() {
        let zero = CliArgs { count: 0, ..args() };
        assert!(RunConfig::try_from(zero).is_err());
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let ftp = CliArgs {
            endpoint: "ftp://api.github.com/graphql".to_string(),
            ..args()
        };
        assert!(RunConfig::try_from(ftp).is_err());
    }

    #[test]
    fn concurrency_limit_is_validated() {
        let zero = CliArgs {
            max_concurrency: Some(0),
            ..args()
        };
        assert!(RunConfig::try_from(zero).is_err());

        let eight = CliArgs {
            max_concurrency: Some(8),
            ..args()
        };
        assert_eq!(
            RunConfig::try_from(eight).unwrap().concurrency,
            Concurrency::Limited(NonZeroUsize::new(8).unwrap())
        );
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = RunConfig::try_from(args()).unwrap();
        assert!(!format!("{config:?}").contains("ghp_token"));
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_env_file(dir.path().join(".env")).is_ok());
    }

    #[test]
    fn malformed_env_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "BROKEN LINE \"\nPROFILE_SHEETS_UNUSED_TOKEN=abc\n").unwrap();

        let err = load_env_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains(".env"), "{err:#}");
        assert!(std::env::var_os("PROFILE_SHEETS_UNUSED_TOKEN").is_none());
    }

    #[test]
    fn explicit_flags_are_parsed() {
        let parsed = CliArgs::try_parse_from([
            "profile-sheets",
            "--token",
            "abc",
            "--count",
            "3",
            "--endpoint",
            "http://localhost:8080/graphql",
            "--output-dir",
            "out",
            "--max-concurrency",
            "2",
        ])
        .unwrap();

        assert_eq!(parsed.token.as_deref(), Some("abc"));
        assert_eq!(parsed.count, 3);
        assert_eq!(parsed.endpoint, "http://localhost:8080/graphql");
        assert_eq!(parsed.output_dir, PathBuf::from("out"));
        assert_eq!(parsed.max_concurrency, Some(2));
    }
}
