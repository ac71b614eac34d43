//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::ModuleKind;
use crate::theme::Accent;

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Which overlay is open, if any
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Popup {
    #[default]
    None,
    Help,
    Settings,
    AddTool,
    Login,
    Chat,
}

/// Field focus inside the add-tool form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AddToolField {
    #[default]
    Name,
    Url,
    Description,
    Category,
}

impl AddToolField {
    pub fn next(&self) -> AddToolField {
        match self {
            AddToolField::Name => AddToolField::Url,
            AddToolField::Url => AddToolField::Description,
            AddToolField::Description => AddToolField::Category,
            AddToolField::Category => AddToolField::Name,
        }
    }

    pub fn prev(&self) -> AddToolField {
        match self {
            AddToolField::Name => AddToolField::Category,
            AddToolField::Url => AddToolField::Name,
            AddToolField::Description => AddToolField::Url,
            AddToolField::Category => AddToolField::Description,
        }
    }
}

/// Field focus inside the login form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn toggle(&self) -> LoginField {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Block focus
    FocusNext,
    FocusPrev,

    // Grab-and-move reordering
    Grab,
    Drop,
    MoveUp,
    MoveDown,

    // Search query editing
    EditQuery,
    StopEditing,
    QueryChar(char),
    QueryBackspace,
    QueryCursorLeft,
    QueryCursorRight,

    // Directory
    NextCategory,
    PrevCategory,
    NextTool,
    PrevTool,

    // Locale
    ToggleLocale,

    // Add-tool form
    OpenAddTool,
    AddToolChar(char),
    AddToolBackspace,
    AddToolNextField,
    AddToolPrevField,
    AddToolLeft,
    AddToolRight,
    SubmitAddTool,
    CancelAddTool,

    // Settings
    OpenSettings,
    SelectAccent(Accent),
    CloseSettings,

    // Auth
    OpenLogin,
    LoginChar(char),
    LoginBackspace,
    LoginNextField,
    SubmitSignIn,
    SubmitSignUp,
    CancelLogin,
    SignOut,

    // Chat
    OpenChat,
    ChatChar(char),
    ChatBackspace,
    SendChat,
    ChatScrollUp,
    ChatScrollDown,
    CloseChat,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    focus: ModuleKind,
    input_mode: InputMode,
    grabbed: bool,
    popup: Popup,
    signed_in: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('n') if popup == Popup::Login => return Some(UiEvent::SubmitSignUp),
            _ => {}
        }
    }

    match popup {
        Popup::Help => Some(UiEvent::CloseHelp),
        Popup::Settings => handle_settings_keys(key),
        Popup::AddTool => handle_add_tool_keys(key),
        Popup::Login => handle_login_keys(key),
        Popup::Chat => handle_chat_keys(key),
        Popup::None => match input_mode {
            InputMode::Editing => handle_query_keys(key),
            InputMode::Normal if grabbed => handle_grab_keys(key),
            InputMode::Normal => handle_dashboard_keys(key, focus, signed_in),
        },
    }
}

fn handle_dashboard_keys(key: KeyEvent, focus: ModuleKind, signed_in: bool) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Tab => Some(UiEvent::FocusNext),
        KeyCode::BackTab => Some(UiEvent::FocusPrev),
        KeyCode::Char('g') => Some(UiEvent::Grab),
        KeyCode::Char('/') => Some(UiEvent::EditQuery),
        KeyCode::Char('e') if focus == ModuleKind::Search => Some(UiEvent::EditQuery),
        KeyCode::Char('l') => Some(UiEvent::ToggleLocale),
        KeyCode::Char('a') => Some(UiEvent::OpenAddTool),
        KeyCode::Char('s') => Some(UiEvent::OpenSettings),
        KeyCode::Char('c') => Some(UiEvent::OpenChat),
        KeyCode::Char('u') => {
            if signed_in {
                Some(UiEvent::SignOut)
            } else {
                Some(UiEvent::OpenLogin)
            }
        }
        KeyCode::Left => Some(UiEvent::PrevCategory),
        KeyCode::Right => Some(UiEvent::NextCategory),
        KeyCode::Up => match focus {
            ModuleKind::Directory => Some(UiEvent::PrevTool),
            _ => Some(UiEvent::FocusPrev),
        },
        KeyCode::Down => match focus {
            ModuleKind::Directory => Some(UiEvent::NextTool),
            _ => Some(UiEvent::FocusNext),
        },
        _ => None,
    }
}

fn handle_grab_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::MoveUp),
        KeyCode::Down => Some(UiEvent::MoveDown),
        // Esc is the drop-outside-any-block path; same end state
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('g') => Some(UiEvent::Drop),
        _ => None,
    }
}

fn handle_query_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
        KeyCode::Left => Some(UiEvent::QueryCursorLeft),
        KeyCode::Right => Some(UiEvent::QueryCursorRight),
        KeyCode::Backspace => Some(UiEvent::QueryBackspace),
        KeyCode::Char(c) => Some(UiEvent::QueryChar(c)),
        _ => None,
    }
}

fn handle_settings_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(UiEvent::CloseSettings),
        KeyCode::Char('l') => Some(UiEvent::ToggleLocale),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Some(UiEvent::SelectAccent(Accent::ALL[index]))
        }
        _ => None,
    }
}

fn handle_add_tool_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::CancelAddTool),
        KeyCode::Enter => Some(UiEvent::SubmitAddTool),
        KeyCode::Tab => Some(UiEvent::AddToolNextField),
        KeyCode::BackTab => Some(UiEvent::AddToolPrevField),
        KeyCode::Left => Some(UiEvent::AddToolLeft),
        KeyCode::Right => Some(UiEvent::AddToolRight),
        KeyCode::Backspace => Some(UiEvent::AddToolBackspace),
        KeyCode::Char(c) => Some(UiEvent::AddToolChar(c)),
        _ => None,
    }
}

fn handle_login_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::CancelLogin),
        KeyCode::Enter => Some(UiEvent::SubmitSignIn),
        KeyCode::Tab | KeyCode::BackTab => Some(UiEvent::LoginNextField),
        KeyCode::Backspace => Some(UiEvent::LoginBackspace),
        KeyCode::Char(c) => Some(UiEvent::LoginChar(c)),
        _ => None,
    }
}

fn handle_chat_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::CloseChat),
        KeyCode::Enter => Some(UiEvent::SendChat),
        KeyCode::Up => Some(UiEvent::ChatScrollUp),
        KeyCode::Down => Some(UiEvent::ChatScrollDown),
        KeyCode::Backspace => Some(UiEvent::ChatBackspace),
        KeyCode::Char(c) => Some(UiEvent::ChatChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn map(key: KeyEvent, focus: ModuleKind, grabbed: bool, popup: Popup) -> Option<UiEvent> {
        key_to_ui_event(key, focus, InputMode::Normal, grabbed, popup, false)
    }

    #[test]
    fn arrows_select_tools_only_in_directory() {
        let event = map(press(KeyCode::Down), ModuleKind::Directory, false, Popup::None);
        assert!(matches!(event, Some(UiEvent::NextTool)));
        let event = map(press(KeyCode::Down), ModuleKind::Search, false, Popup::None);
        assert!(matches!(event, Some(UiEvent::FocusNext)));
    }

    #[test]
    fn grab_mode_captures_arrows_and_drops_on_escape() {
        let event = map(press(KeyCode::Up), ModuleKind::Stats, true, Popup::None);
        assert!(matches!(event, Some(UiEvent::MoveUp)));
        let event = map(press(KeyCode::Esc), ModuleKind::Stats, true, Popup::None);
        assert!(matches!(event, Some(UiEvent::Drop)));
    }

    #[test]
    fn editing_routes_chars_into_the_query() {
        let event = key_to_ui_event(
            press(KeyCode::Char('a')),
            ModuleKind::Search,
            InputMode::Editing,
            false,
            Popup::None,
            false,
        );
        assert!(matches!(event, Some(UiEvent::QueryChar('a'))));
    }

    #[test]
    fn account_key_depends_on_session_presence() {
        let signed_out = key_to_ui_event(
            press(KeyCode::Char('u')),
            ModuleKind::Search,
            InputMode::Normal,
            false,
            Popup::None,
            false,
        );
        assert!(matches!(signed_out, Some(UiEvent::OpenLogin)));
        let signed_in = key_to_ui_event(
            press(KeyCode::Char('u')),
            ModuleKind::Search,
            InputMode::Normal,
            false,
            Popup::None,
            true,
        );
        assert!(matches!(signed_in, Some(UiEvent::SignOut)));
    }

    #[test]
    fn settings_digits_pick_accents() {
        let event = map(press(KeyCode::Char('3')), ModuleKind::Search, false, Popup::Settings);
        assert!(matches!(event, Some(UiEvent::SelectAccent(Accent::Emerald))));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert!(map(key, ModuleKind::Search, false, Popup::None).is_none());
    }
}
