use bumex::configuration::get_configuration;
use bumex::startup::Application;
use bumex::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("bumex".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration()?;
    let app = Application::build(config)?;
    app.run().await?;

    Ok(())
}
