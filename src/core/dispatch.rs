//! View dispatch: which renderer applies to a selected item.
//!
//! A pure mapping from the item's type tag to a render mode. Unknown tags
//! deliberately fall back to the text view - the original product never
//! fails on an unrecognized menu entry, it degrades to showing the payload
//! as text, and that behavior is preserved here.

use crate::api::ViewKind;

/// The presentation a payload gets rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Table,
    Chart,
    Text,
}

pub fn render_mode(kind: &ViewKind) -> RenderMode {
    match kind {
        ViewKind::Table => RenderMode::Table,
        ViewKind::Chart => RenderMode::Chart,
        ViewKind::About => RenderMode::Text,
        // Permissive default: never a rendering error, only a text view.
        ViewKind::Other => RenderMode::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_map_to_their_renderers() {
        assert_eq!(render_mode(&ViewKind::Table), RenderMode::Table);
        assert_eq!(render_mode(&ViewKind::Chart), RenderMode::Chart);
        assert_eq!(render_mode(&ViewKind::About), RenderMode::Text);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_text() {
        assert_eq!(
            render_mode(&ViewKind::from_tag("unknown_xyz")),
            RenderMode::Text
        );
    }
}
