use std::{net::SocketAddr, path::PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[cfg(feature = "logging")]
use tracing_subscriber::filter::LevelFilter;

/// Database configuration.
#[derive(Deserialize)]
pub struct Database {
    /// Database URL string.
    pub url: String,
}

/// HTTP server configuration.
#[derive(Deserialize)]
pub struct Server {
    /// Address, that HTTP server will listen on.
    pub address: SocketAddr,
}

/// Implementation of [`serde`]'s deserializer for [`FromStr`] types.
#[cfg(feature = "logging")]
fn deserialize_from_str<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error,
    D: serde::de::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    std::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
}

/// Logging configuration.
#[cfg(feature = "logging")]
#[derive(Deserialize)]
pub struct Logging {
    /// Log level.
    #[serde(deserialize_with = "deserialize_from_str")]
    pub level: LevelFilter,
}

#[cfg(feature = "logging")]
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
        }
    }
}

/// Workflow phase identifiers.
///
/// Records carry a numeric phase marker that is assigned upstream,
/// these values tell which of them belong to the quality inspection.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phases {
    /// Phase identifier of vehicles currently under quality inspection.
    pub quality: i32,

    /// Phase identifier that immediately precedes the quality phase.
    pub previous: i32,
}

/// External order tracker configuration.
#[derive(Deserialize)]
pub struct Tracker {
    /// Tracker URL template.
    ///
    /// The `{no_order}` placeholder is replaced with a record's order number.
    pub url: String,
}

impl Tracker {
    /// Placeholder substituted with an order number.
    pub const PLACEHOLDER: &'static str = "{no_order}";

    /// Build a tracker link for the provided order number.
    pub fn url_for(&self, order_number: &str) -> String {
        self.url.replace(Self::PLACEHOLDER, order_number)
    }
}

/// Project identification reported by the health check.
#[derive(Deserialize)]
pub struct Project {
    /// Human-readable project name.
    pub name: String,
}

/// General configuration.
#[derive(Deserialize)]
pub struct Config {
    /// General database configuration.
    pub database: Database,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: Option<Server>,

    /// Logging configuration.
    #[cfg(feature = "logging")]
    #[serde(default)]
    pub logging: Logging,

    /// Quality workflow phases.
    pub phases: Phases,

    /// Order tracker configuration.
    #[serde(default)]
    pub tracker: Option<Tracker>,

    /// Project identification.
    #[serde(default)]
    pub project: Option<Project>,
}

impl Config {
    /// Create new config using default configuration file or environment variables.
    ///
    /// See [`Env`] for more details on how to use environment variables configuration.
    ///
    /// [`Env`]: figment::providers::Env
    pub fn new(path: Option<PathBuf>) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }

    fn figment(path: Option<PathBuf>) -> Figment {
        Figment::new()
            .merge(Toml::file(path.unwrap_or(PathBuf::from("Config.toml"))))
            .merge(Env::prefixed("CONFIG_").split("_"))
    }

    /// Create new config suitable for running unit tests.
    #[cfg(feature = "test-utils")]
    pub fn for_tests() -> Self {
        Self {
            database: Database {
                url: String::from("sqlite::memory:"),
            },
            server: Some(Server {
                address: "127.0.0.1:3000".parse().unwrap(),
            }),
            #[cfg(feature = "logging")]
            logging: Logging::default(),
            phases: Phases {
                quality: 7,
                previous: 6,
            },
            tracker: Some(Tracker {
                url: String::from("https://tracker.example.com/orders/{no_order}"),
            }),
            project: Some(Project {
                name: String::from("Quality board"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::{Config, Phases, Tracker};

    #[test]
    fn file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "Config.toml",
                r#"
                [database]
                url = "postgres://localhost/quality"

                [phases]
                quality = 7
                previous = 6
                "#,
            )?;

            jail.set_env("CONFIG_PHASES_QUALITY", "9");
            jail.set_env("CONFIG_TRACKER_URL", "https://t.example/{no_order}");
            jail.set_env("CONFIG_PROJECT_NAME", "Quality board");

            let config = Config::new(None)?;

            assert_eq!(config.database.url, "postgres://localhost/quality");
            assert_eq!(
                config.phases,
                Phases {
                    quality: 9,
                    previous: 6
                }
            );
            assert!(config.server.is_none());
            assert_eq!(
                config.tracker.map(|tracker| tracker.url),
                Some(String::from("https://t.example/{no_order}"))
            );
            assert_eq!(
                config.project.map(|project| project.name),
                Some(String::from("Quality board"))
            );

            Ok(())
        });
    }

    #[test]
    fn missing_phases() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "Config.toml",
                r#"
                [database]
                url = "postgres://localhost/quality"
                "#,
            )?;

            assert!(Config::new(None).is_err());

            Ok(())
        });
    }

    #[test]
    fn tracker_url() {
        let tracker = Tracker {
            url: String::from("https://tracker.example.com/orders/{no_order}/view"),
        };

        assert_eq!(
            tracker.url_for("OS-1234"),
            "https://tracker.example.com/orders/OS-1234/view"
        );
    }
}
