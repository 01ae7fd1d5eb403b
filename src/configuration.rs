//! src/configuration.rs
use crate::domain::{DomainPolicy, PolicyError, ALLOWED_EMAIL_DOMAIN, ORGANIZATION};
use config::{Config, ConfigError, Environment as EnvSource, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub access: AccessSettings,
    pub identity: IdentitySettings,
    pub secrets: Option<SecretSettings>,
}

impl Settings {
    pub fn set_identity_url(&mut self, base_url: String) {
        self.identity.base_url = base_url;
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    /// Browsers only send `Secure` cookies over https.
    pub secure_cookies: bool,
}

/// Falls back to the compiled-in company domain when not configured.
#[derive(Deserialize, Clone, Debug)]
pub struct AccessSettings {
    #[serde(default = "default_allowed_email_domain")]
    pub allowed_email_domain: String,
    #[serde(default = "default_organization")]
    pub organization: String,
}

fn default_allowed_email_domain() -> String {
    ALLOWED_EMAIL_DOMAIN.to_string()
}

fn default_organization() -> String {
    ORGANIZATION.to_string()
}

impl Default for AccessSettings {
    fn default() -> Self {
        Self {
            allowed_email_domain: default_allowed_email_domain(),
            organization: default_organization(),
        }
    }
}

impl AccessSettings {
    pub fn policy(&self) -> Result<DomainPolicy, PolicyError> {
        DomainPolicy::new(&self.allowed_email_domain, &self.organization)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct IdentitySettings {
    pub base_url: String,
    pub timeout_milliseconds: u64,
}

impl IdentitySettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct SecretSettings {
    pub hmac: Secret<String>,
    pub identity_api_key: Secret<String>,
}

/// Key used to sign error query parameters and session cookies.
#[derive(Clone)]
pub struct HmacSecret(pub Secret<String>);

impl HmacSecret {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.expose_secret().as_bytes()
    }
}

#[derive(PartialEq)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {e}")))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    // E.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`.
    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .add_source(
            EnvSource::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    if environment == Environment::Local {
        let secret_file_path = configuration_directory.join("secret");
        dotenvy::from_filename(secret_file_path)
            .map_err(|e| ConfigError::Message(format!("Failed to read secret settings file: {e}")))?;
    }

    let secret_settings = envy::prefixed("SECRET_")
        .from_env::<SecretSettings>()
        .map_err(|e| ConfigError::Message(format!("Failed to parse secrets from environment: {e}")))?;
    settings.secrets = Some(secret_settings);

    Ok(settings)
}
