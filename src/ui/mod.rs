//! src/ui/mod.rs
//!
//! Server-rendered HTML building blocks shared by the pages.
mod auth_card;
pub use auth_card::auth_card;

mod board;
pub use board::{controls_section, test_location_button, BOARD_COLUMNS};

mod header;
pub use header::{form_header, mobile_header};

mod warning;
pub use warning::security_warning;

use htmlescape::encode_minimal;

/// Wrap `body` in a complete HTML document.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body>
{body}
</body>
</html>"#,
        title = encode_minimal(title),
    )
}
