//! src/ui/board.rs

pub const BOARD_COLUMNS: [&str; 3] = ["To do", "In progress", "Done"];

/// Placeholder panel; board controls are mounted here client-side.
pub fn controls_section() -> String {
    r#"<section class="controls" data-controls>
    <p>Board controls are not available yet.</p>
</section>"#
        .to_string()
}

pub fn test_location_button() -> String {
    r#"<button type="button" class="test-location" data-action="test-location">Test location</button>"#
        .to_string()
}
