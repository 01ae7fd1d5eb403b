//! src/startup.rs
use crate::configuration::{HmacSecret, Settings};
use crate::domain::DomainPolicy;
use crate::identity::IdentityClient;
use crate::routes::{
    email_check, health_check, home, log_out, login, login_form, project_board, signup,
    signup_form,
};
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use secrecy::ExposeSecret;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// Minimum secret length accepted by `Key::from`.
const MIN_HMAC_SECRET_LENGTH: usize = 64;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let secrets = config
            .secrets
            .context("Secrets are missing from the configuration")?;
        if secrets.hmac.expose_secret().len() < MIN_HMAC_SECRET_LENGTH {
            anyhow::bail!(
                "The hmac secret must be at least {} bytes long",
                MIN_HMAC_SECRET_LENGTH
            );
        }

        let policy = match config.access.policy() {
            Ok(policy) => policy,
            Err(e) => anyhow::bail!("Invalid access settings: {}", e),
        };

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();

        let identity = IdentityClient::new(&config.identity, secrets.identity_api_key)
            .context("Failed to build the identity provider client")?;

        tracing::info!(
            port,
            allowed_email_domain = %policy.suffix(),
            "Starting application"
        );

        let server = run(
            listener,
            policy,
            identity,
            HmacSecret(secrets.hmac),
            config.application.secure_cookies,
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    policy: DomainPolicy,
    identity: IdentityClient,
    hmac_secret: HmacSecret,
    secure_cookies: bool,
) -> Result<Server, std::io::Error> {
    let secret_key = Key::from(hmac_secret.as_bytes());
    let policy = web::Data::new(policy);
    let identity = web::Data::new(identity);
    let hmac_secret = web::Data::new(hmac_secret);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(secure_cookies)
                    .build(),
            )
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/api/email_check", web::get().to(email_check))

            // serving HTML pages
            .route("/", web::get().to(home))
            .route("/signup", web::get().to(signup_form))
            .route("/signup", web::post().to(signup))
            .route("/login", web::get().to(login_form))
            .route("/login", web::post().to(login))
            .route("/board", web::get().to(project_board))
            .route("/logout", web::post().to(log_out))

            .app_data(policy.clone())
            .app_data(identity.clone())
            .app_data(hmac_secret.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
