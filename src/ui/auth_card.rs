//! src/ui/auth_card.rs

/// Centered card around an authentication form. `body` is trusted markup.
pub fn auth_card(title: &str, body: &str) -> String {
    format!(
        r#"<main class="auth">
    <section class="auth-card" aria-label="{label}">
{body}
    </section>
</main>"#,
        label = htmlescape::encode_attribute(title),
    )
}
