//! Plain status message that replaces a container's content.

use super::html::escape;

/// Render a message as a single paragraph.
pub fn render_message(message: &str) -> String {
    format!("<p>{}</p>", escape(message))
}
