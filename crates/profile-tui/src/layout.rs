//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Page header (title + location)
    pub header: Rect,

    /// Section cards
    pub body: Rect,

    /// Key hints and save status
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Section cards
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Stack cards of the given heights top to bottom inside `body`.
///
/// Cards that do not fit are given a zero-height area.
pub fn stack_cards(body: Rect, heights: &[u16]) -> Vec<Rect> {
    let mut y = body.y;
    let bottom = body.y + body.height;
    heights
        .iter()
        .map(|&height| {
            let height = height.min(bottom.saturating_sub(y));
            let rect = Rect::new(body.x, y, body.width, height);
            y += height;
            rect
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_stack_cards_in_order() {
        let cards = stack_cards(Rect::new(0, 3, 80, 20), &[5, 7]);
        assert_eq!(cards[0], Rect::new(0, 3, 80, 5));
        assert_eq!(cards[1], Rect::new(0, 8, 80, 7));
    }

    #[test]
    fn test_stack_cards_clips_overflow() {
        let cards = stack_cards(Rect::new(0, 0, 40, 8), &[6, 6, 6]);
        assert_eq!(cards[0].height, 6);
        assert_eq!(cards[1].height, 2);
        assert_eq!(cards[2].height, 0);
    }
}
