mod view;
mod widget_events;
mod widget_render;
mod widget_state;

pub use view::{
    Adornment, AutocompleteView, CLEAR_BUTTON_LABEL, InputView, ListboxView, MATCH_STYLE,
    OptionView,
};
pub use widget_render::{ListboxArea, render};
pub use widget_state::{Autocomplete, BLUR_GRACE, SelectEvent};
