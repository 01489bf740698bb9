//! Renderer-independent snapshot of the widget
//!
//! Mirrors the accessibility surface: an input with a label, a status
//! indicator while loading or a clear control otherwise, and a listbox of
//! options whose `selected` flag follows the highlight.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::widget_state::Autocomplete;
use crate::query::SuggestionSource;
use crate::suggestions::{Entry, Highlighter};

pub const CLEAR_BUTTON_LABEL: &str = "Clear input";

/// Style of the query occurrences inside a suggestion
pub const MATCH_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteView<'a> {
    pub input: InputView<'a>,
    pub adornment: Adornment,
    /// Present only while the list is open
    pub listbox: Option<ListboxView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
    pub aria_label: &'a str,
    pub focused: bool,
}

impl InputView<'_> {
    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Control shown at the end of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adornment {
    None,
    /// Lookup in progress
    Status,
    ClearButton { label: &'static str },
}

impl Adornment {
    pub fn role(&self) -> Option<&'static str> {
        match self {
            Adornment::None => None,
            Adornment::Status => Some("status"),
            Adornment::ClearButton { .. } => Some("button"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListboxView {
    pub options: Vec<OptionView>,
}

impl ListboxView {
    pub fn role(&self) -> &'static str {
        "listbox"
    }

    pub fn selected(&self) -> Option<usize> {
        self.options.iter().position(|option| option.selected)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub label: String,
    pub content: Line<'static>,
    pub selected: bool,
    /// False for the "no results" row
    pub selectable: bool,
}

impl OptionView {
    pub fn role(&self) -> &'static str {
        "option"
    }
}

impl<S: SuggestionSource> Autocomplete<S> {
    pub fn view(&self) -> AutocompleteView<'_> {
        let input = InputView {
            value: self.query.text(),
            placeholder: &self.config.placeholder,
            aria_label: &self.config.aria_label,
            focused: self.focused,
        };

        let adornment = if self.query.is_loading() {
            Adornment::Status
        } else if !self.query.text().is_empty() {
            Adornment::ClearButton {
                label: CLEAR_BUTTON_LABEL,
            }
        } else {
            Adornment::None
        };

        let listbox = self.list.is_open().then(|| self.listbox_view());

        AutocompleteView {
            input,
            adornment,
            listbox,
        }
    }

    fn listbox_view(&self) -> ListboxView {
        let highlighter = Highlighter::new(self.query.text());
        let highlighted = self.list.highlighted();

        let options = self
            .list
            .suggestions()
            .entries()
            .enumerate()
            .map(|(row, entry)| match entry {
                Entry::Item(suggestion) => OptionView {
                    label: suggestion.label.clone(),
                    content: match &self.render_suggestion {
                        Some(render) => render(suggestion),
                        None => highlighted_line(&highlighter, &suggestion.label),
                    },
                    selected: highlighted == Some(row),
                    selectable: true,
                },
                Entry::NoResults => OptionView {
                    label: self.config.no_suggestions_text.clone(),
                    content: Line::raw(self.config.no_suggestions_text.clone()),
                    selected: false,
                    selectable: false,
                },
            })
            .collect();

        ListboxView { options }
    }
}

fn highlighted_line(highlighter: &Highlighter, label: &str) -> Line<'static> {
    let spans: Vec<Span<'static>> = highlighter
        .segments(label)
        .into_iter()
        .map(|segment| {
            if segment.matched {
                Span::styled(segment.text.to_string(), MATCH_STYLE)
            } else {
                Span::raw(segment.text.to_string())
            }
        })
        .collect();
    Line::from(spans)
}
