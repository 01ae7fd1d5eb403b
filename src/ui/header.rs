//! src/ui/header.rs
use htmlescape::encode_minimal;

pub fn form_header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<header class="form-header">
    <h1>{}</h1>
    <p>{}</p>
</header>"#,
        encode_minimal(title),
        encode_minimal(subtitle),
    )
}

/// Top bar of the board on narrow screens, with the signed-in user and a
/// logout button.
pub fn mobile_header(title: &str, user: &str) -> String {
    format!(
        r#"<header class="mobile-header">
    <h1>{}</h1>
    <span class="user">{}</span>
    <form action="/logout" method="post">
        <button type="submit">Log out</button>
    </form>
</header>"#,
        encode_minimal(title),
        encode_minimal(user),
    )
}
