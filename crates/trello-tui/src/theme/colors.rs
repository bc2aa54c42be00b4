use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const STATUS_ONLINE: Color = Color::Green;
pub const STATUS_LOADING: Color = Color::Yellow;
pub const STATUS_OFFLINE: Color = Color::Red;

pub const POPUP_BG: Color = Color::Black;

pub const TRELLO_GREEN: Color = Color::Rgb(97, 189, 79);
pub const TRELLO_YELLOW: Color = Color::Rgb(242, 214, 0);
pub const TRELLO_ORANGE: Color = Color::Rgb(255, 159, 26);
pub const TRELLO_RED: Color = Color::Rgb(235, 90, 70);
pub const TRELLO_PURPLE: Color = Color::Rgb(195, 119, 224);
pub const TRELLO_BLUE: Color = Color::Rgb(0, 121, 191);
pub const TRELLO_SKY: Color = Color::Rgb(0, 194, 224);
pub const TRELLO_LIME: Color = Color::Rgb(81, 232, 152);
pub const TRELLO_PINK: Color = Color::Rgb(255, 120, 203);
pub const TRELLO_BLACK: Color = Color::Rgb(52, 69, 99);
