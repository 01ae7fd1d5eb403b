//! tests/api/startup.rs

use bumex::configuration::get_configuration;
use bumex::startup::Application;

#[tokio::test]
async fn application_refuses_to_start_with_a_blank_email_domain() {
    // Arrange
    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;
    config.access.allowed_email_domain = "   ".into();

    // Act
    let result = Application::build(config);

    // Assert
    let Err(e) = result else {
        panic!("The application started with a blank email domain.");
    };
    assert!(e.to_string().contains("Invalid access settings"));
}

#[tokio::test]
async fn application_starts_with_the_default_email_domain() {
    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;

    assert_eq!(config.access.allowed_email_domain, "@bumex.mr");
    assert!(Application::build(config).is_ok());
}
