//! Terminal rendering of the autocomplete widget
//!
//! Draws the input box and, while the list is open, a suggestion popup
//! directly below it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::view::{Adornment, ListboxView};
use super::widget_state::Autocomplete;
use crate::query::SuggestionSource;
use crate::widgets::popup;

// Suggestion popup display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const MIN_POPUP_WIDTH: usize = 20;
const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const ROW_PREFIX_WIDTH: usize = 2;

const SPINNER_SYMBOL: &str = "…";
const CLEAR_SYMBOL: &str = "×";

/// Screen area of the rendered suggestion rows, for pointer hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListboxArea {
    /// Rows area inside the popup border
    pub inner: Rect,
    /// Index of the first visible row
    pub offset: usize,
    pub visible_rows: usize,
}

impl ListboxArea {
    /// Row of the suggestion list under the given cell, if any
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inside = column >= self.inner.x
            && column < self.inner.x + self.inner.width
            && row >= self.inner.y
            && row < self.inner.y + self.inner.height;
        if !inside {
            return None;
        }
        let visible = (row - self.inner.y) as usize;
        (visible < self.visible_rows).then_some(self.offset + visible)
    }
}

/// Render the widget with its input box in `area`
///
/// Returns where the suggestion rows were drawn, if the list is open.
pub fn render<S: SuggestionSource>(
    widget: &Autocomplete<S>,
    frame: &mut Frame,
    area: Rect,
) -> Option<ListboxArea> {
    let view = widget.view();

    let border_color = if view.input.focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.input.aria_label))
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_area = Rect {
        width: inner.width.saturating_sub(2),
        ..inner
    };
    let input_line = if view.input.shows_placeholder() {
        Line::from(Span::styled(
            view.input.placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::raw(view.input.value.to_string())
    };
    frame.render_widget(Paragraph::new(input_line), text_area);

    let symbol = match view.adornment {
        Adornment::Status => Some(Span::styled(SPINNER_SYMBOL, Style::default().fg(Color::Yellow))),
        Adornment::ClearButton { .. } => {
            Some(Span::styled(CLEAR_SYMBOL, Style::default().fg(Color::Gray)))
        }
        Adornment::None => None,
    };
    if let Some(symbol) = symbol
        && inner.width > 0
    {
        let symbol_area = Rect {
            x: inner.x + inner.width - 1,
            width: 1,
            ..inner
        };
        frame.render_widget(Paragraph::new(Line::from(symbol)), symbol_area);
    }

    let listbox = view.listbox.as_ref()?;
    Some(render_listbox(listbox, frame, area, widget.highlighted()))
}

fn render_listbox(
    listbox: &ListboxView,
    frame: &mut Frame,
    anchor: Rect,
    highlighted: Option<usize>,
) -> ListboxArea {
    let wanted_rows = listbox.options.len().min(MAX_VISIBLE_SUGGESTIONS);

    let max_label_width = listbox
        .options
        .iter()
        .map(|option| option.label.width() + ROW_PREFIX_WIDTH)
        .max()
        .unwrap_or(MIN_POPUP_WIDTH)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_width = max_label_width as u16 + POPUP_PADDING;
    let popup_height = wanted_rows as u16 + POPUP_BORDER_HEIGHT;

    let popup_area = popup::popup_below_anchor(anchor, popup_width, popup_height, frame.area());

    // Rows that fit once the popup is clamped to the frame
    let visible_rows =
        wanted_rows.min(popup_area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize);
    // Keep the highlighted row in view
    let offset = highlighted
        .filter(|_| visible_rows > 0)
        .map(|index| (index + 1).saturating_sub(visible_rows))
        .unwrap_or(0);

    let items: Vec<ListItem> = listbox
        .options
        .iter()
        .skip(offset)
        .take(visible_rows)
        .map(|option| {
            let (prefix, style) = if option.selected {
                (
                    "► ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else if !option.selectable {
                (
                    "  ",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };

            let mut spans = vec![Span::raw(prefix)];
            spans.extend(option.content.spans.iter().cloned());
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    ListboxArea {
        inner: popup::inset_rect(popup_area, 1, 1),
        offset,
        visible_rows,
    }
}

#[cfg(test)]
#[path = "widget_render_tests.rs"]
mod widget_render_tests;
