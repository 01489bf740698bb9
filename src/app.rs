//! Demo search page hosting one autocomplete widget

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use typeahead::widget::{self, ListboxArea};
use typeahead::{Autocomplete, SelectEvent, SuggestionSource};

const HELP_TEXT: &str = " Tab focus/blur · ↑↓ move · Enter select · Ctrl+U clear · Esc close/quit";

pub struct App<S: SuggestionSource> {
    widget: Autocomplete<S>,
    title: &'static str,
    selections: Rc<RefCell<Vec<String>>>,
    input_area: Rect,
    listbox_area: Option<ListboxArea>,
    should_quit: bool,
}

impl<S: SuggestionSource> App<S> {
    /// Must be called from within a tokio runtime
    pub fn new(widget: Autocomplete<S>, title: &'static str) -> Self {
        let selections = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&selections);
        let mut widget = widget.on_select(move |event: &SelectEvent<S::Value>| {
            log::info!("Selected in {} search: {:?}", title, event.text());
            log.borrow_mut().push(event.text().to_string());
        });
        widget.mount();
        widget.focus();

        Self {
            widget,
            title,
            selections,
            input_area: Rect::default(),
            listbox_area: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn widget(&self) -> &Autocomplete<S> {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut Autocomplete<S> {
        &mut self.widget
    }

    pub fn selections(&self) -> Vec<String> {
        self.selections.borrow().clone()
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Tab {
            if self.widget.is_focused() {
                self.widget.blur();
            } else {
                self.widget.focus();
            }
            return;
        }

        if self.widget.is_focused() {
            if !self.widget.handle_key(key) && key.code == KeyCode::Esc {
                self.should_quit = true;
            }
            return;
        }

        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            self.should_quit = true;
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(area) = self.listbox_area
            && let Some(row) = area.row_at(mouse.column, mouse.row)
        {
            self.widget.commit_selection(row);
            return;
        }

        if self.input_area.contains(Position::new(mouse.column, mouse.row)) {
            self.widget.focus();
        } else {
            self.widget.blur();
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [help_area, input_area, log_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                HELP_TEXT,
                Style::default().fg(Color::DarkGray),
            ))),
            help_area,
        );

        self.render_selections(frame, log_area);

        // Popup draws over the selections panel
        self.input_area = input_area;
        self.listbox_area = widget::render(&self.widget, frame, input_area);
    }

    fn render_selections(&self, frame: &mut Frame, area: Rect) {
        let selections = self.selections.borrow();
        let items: Vec<ListItem> = selections
            .iter()
            .rev()
            .map(|text| {
                if text.is_empty() {
                    ListItem::new(Span::styled("(cleared)", Style::default().fg(Color::DarkGray)))
                } else {
                    ListItem::new(text.as_str())
                }
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Selected in {} search ", self.title))
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
