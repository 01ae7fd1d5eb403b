//! src/ui/warning.rs

/// Alert banner. Renders nothing without a message.
pub fn security_warning(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(
            r#"<div class="security-warning" role="alert"><p><i>{}</i></p></div>"#,
            htmlescape::encode_minimal(message)
        ),
        None => String::new(),
    }
}
