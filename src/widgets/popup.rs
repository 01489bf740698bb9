use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, left-aligned with it and clamped to `bounds`
pub fn popup_below_anchor(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let popup_x = anchor.x;
    let popup_y = anchor.y.saturating_add(anchor.height);

    let max_width = (bounds.x + bounds.width).saturating_sub(popup_x);
    let max_height = (bounds.y + bounds.height).saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(max_width),
        height: height.min(max_height),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
