//! Command handlers - business logic for processing UI events

use crate::app::state::{AddToolForm, AppState, LoginForm};
use crate::i18n;
use crate::messages::ui_events::{AddToolField, InputMode, Popup};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{ChatEntry, ModuleKind, CATEGORY_ALL};
use crate::theme::Accent;

impl AppState {
    // ========================
    // Block focus
    // ========================

    pub fn focus_next(&mut self) {
        if !self.layout.is_empty() {
            self.focused = (self.focused + 1) % self.layout.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.layout.is_empty() {
            self.focused = self
                .focused
                .checked_sub(1)
                .unwrap_or(self.layout.len() - 1);
        }
    }

    // ========================
    // Grab-and-move reordering
    // ========================

    pub fn grab(&mut self) {
        if let Some(block) = self.layout.blocks().get(self.focused) {
            self.grabbed = Some(block.id.clone());
        }
    }

    pub fn drop_block(&mut self) {
        self.grabbed = None;
    }

    pub fn move_up(&mut self) {
        let Some(source) = self.grabbed.clone() else {
            return;
        };
        let Some(pos) = self.layout.position(&source) else {
            return;
        };
        if pos == 0 {
            return;
        }
        let target = self.layout.blocks()[pos - 1].id.clone();
        self.layout.reorder(&source, &target);
        self.focused = pos - 1;
    }

    pub fn move_down(&mut self) {
        let Some(source) = self.grabbed.clone() else {
            return;
        };
        let Some(pos) = self.layout.position(&source) else {
            return;
        };
        if pos + 1 >= self.layout.len() {
            return;
        }
        let target = self.layout.blocks()[pos + 1].id.clone();
        self.layout.reorder(&source, &target);
        self.focused = pos + 1;
    }

    // ========================
    // Search query editing
    // ========================

    pub fn start_query_edit(&mut self) {
        self.input_mode = InputMode::Editing;
        self.query_cursor = self.filter.query.len();
        if let Some(pos) = self
            .layout
            .blocks()
            .iter()
            .position(|b| b.kind == ModuleKind::Search)
        {
            self.focused = pos;
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn query_char(&mut self, c: char) {
        if self.query_cursor <= self.filter.query.len() {
            self.filter.query.insert(self.query_cursor, c);
            self.query_cursor += c.len_utf8();
            self.selected_tool = 0;
        }
    }

    pub fn query_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev = self.filter.query[..self.query_cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.filter.query.remove(prev);
            self.query_cursor = prev;
            self.selected_tool = 0;
        }
    }

    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.filter.query[..self.query_cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.filter.query.len() {
            self.query_cursor = self.filter.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.query_cursor + i)
                .unwrap_or(self.filter.query.len());
        }
    }

    // ========================
    // Category selection
    // ========================

    pub fn next_category(&mut self) {
        self.cycle_category(1);
    }

    pub fn prev_category(&mut self) {
        self.cycle_category(-1);
    }

    fn cycle_category(&mut self, step: isize) {
        let categories = self.catalog.categories();
        let current = categories
            .iter()
            .position(|c| *c == self.filter.category)
            .unwrap_or(0);
        let len = categories.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.filter.category = categories[next].clone();
        self.selected_tool = 0;
    }

    // ========================
    // Directory selection
    // ========================

    pub fn next_tool(&mut self) {
        let len = self.filtered_len();
        if len > 0 {
            self.selected_tool = (self.selected_tool + 1) % len;
        }
    }

    pub fn prev_tool(&mut self) {
        let len = self.filtered_len();
        if len > 0 {
            self.selected_tool = self.selected_tool.checked_sub(1).unwrap_or(len - 1);
        }
    }

    // ========================
    // Locale
    // ========================

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggle();
        self.selected_tool = 0;
    }

    // ========================
    // Add-tool form
    // ========================

    pub fn open_add_tool(&mut self) {
        self.add_tool = AddToolForm::default();
        self.popup = Popup::AddTool;
    }

    pub fn cancel_add_tool(&mut self) {
        self.add_tool = AddToolForm::default();
        self.popup = Popup::None;
    }

    pub fn add_tool_char(&mut self, c: char) {
        if let Some(text) = self.add_tool.current_text_mut() {
            text.push(c);
        }
    }

    pub fn add_tool_backspace(&mut self) {
        if let Some(text) = self.add_tool.current_text_mut() {
            text.pop();
        }
    }

    pub fn add_tool_next_field(&mut self) {
        self.add_tool.field = self.add_tool.field.next();
    }

    pub fn add_tool_prev_field(&mut self) {
        self.add_tool.field = self.add_tool.field.prev();
    }

    pub fn add_tool_left(&mut self) {
        self.cycle_form_category(-1);
    }

    pub fn add_tool_right(&mut self) {
        self.cycle_form_category(1);
    }

    /// The category field cycles through the known categories plus "Other"
    fn cycle_form_category(&mut self, step: isize) {
        if self.add_tool.field != AddToolField::Category {
            return;
        }
        let mut options: Vec<String> = self
            .catalog
            .categories()
            .into_iter()
            .filter(|c| c != CATEGORY_ALL)
            .collect();
        options.push(String::from("Other"));
        let current = options
            .iter()
            .position(|c| *c == self.add_tool.category)
            .unwrap_or(0);
        let len = options.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.add_tool.category = options[next].clone();
    }

    /// Ignored while any required field is empty
    pub fn submit_add_tool(&mut self) {
        if !self.add_tool.is_complete() {
            return;
        }
        let form = std::mem::take(&mut self.add_tool);
        self.catalog
            .add_tool(form.name, form.url, form.description, form.category);
        self.popup = Popup::None;
    }

    // ========================
    // Settings
    // ========================

    pub fn open_settings(&mut self) {
        self.popup = Popup::Settings;
    }

    pub fn close_settings(&mut self) {
        self.popup = Popup::None;
    }

    pub fn select_accent(&mut self, accent: Accent) {
        self.accent = accent;
    }

    // ========================
    // Auth
    // ========================

    pub fn open_login(&mut self) {
        self.login = LoginForm::default();
        self.popup = Popup::Login;
    }

    pub fn cancel_login(&mut self) {
        self.popup = Popup::None;
    }

    pub fn login_char(&mut self, c: char) {
        self.login.current_text_mut().push(c);
    }

    pub fn login_backspace(&mut self) {
        self.login.current_text_mut().pop();
    }

    pub fn login_next_field(&mut self) {
        self.login.field = self.login.field.toggle();
    }

    pub fn submit_sign_in(&mut self) -> Option<NetworkCommand> {
        self.prepare_auth(false)
    }

    pub fn submit_sign_up(&mut self) -> Option<NetworkCommand> {
        self.prepare_auth(true)
    }

    fn prepare_auth(&mut self, sign_up: bool) -> Option<NetworkCommand> {
        if self.login.busy || self.login.email.is_empty() || self.login.password.is_empty() {
            return None;
        }
        self.login.busy = true;
        let id = self.next_id();
        self.pending_auth = Some(id);
        let email = self.login.email.clone();
        let password = self.login.password.clone();
        if sign_up {
            Some(NetworkCommand::SignUp { id, email, password })
        } else {
            Some(NetworkCommand::SignIn { id, email, password })
        }
    }

    pub fn sign_out(&mut self) -> Option<NetworkCommand> {
        let access_token = self.session.as_ref()?.access_token.clone();
        let id = self.next_id();
        self.pending_auth = Some(id);
        Some(NetworkCommand::SignOut { id, access_token })
    }

    // ========================
    // Chat
    // ========================

    pub fn open_chat(&mut self) {
        self.popup = Popup::Chat;
    }

    pub fn close_chat(&mut self) {
        self.popup = Popup::None;
    }

    pub fn chat_char(&mut self, c: char) {
        self.chat.input.push(c);
    }

    pub fn chat_backspace(&mut self) {
        self.chat.input.pop();
    }

    pub fn chat_scroll_up(&mut self) {
        self.chat.scroll = self.chat.scroll.saturating_sub(1);
    }

    pub fn chat_scroll_down(&mut self) {
        self.chat.scroll = self.chat.scroll.saturating_add(1);
    }

    /// Append the user entry and fire one request; no-op while a reply is
    /// outstanding or the input is empty
    pub fn send_chat(&mut self) -> Option<NetworkCommand> {
        if self.chat.waiting || self.chat.input.trim().is_empty() {
            return None;
        }
        let message = std::mem::take(&mut self.chat.input);
        self.chat.entries.push(ChatEntry::user(message.clone()));
        self.chat.waiting = true;
        let id = self.next_id();
        self.chat.pending_id = Some(id);
        Some(NetworkCommand::SendChat { id, message })
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.popup = match self.popup {
            Popup::Help => Popup::None,
            _ => Popup::Help,
        };
    }

    pub fn close_help(&mut self) {
        self.popup = Popup::None;
    }

    // ========================
    // Network response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::ChatReply { id, reply } => {
                if self.chat.pending_id == Some(id) {
                    self.chat.entries.push(ChatEntry::assistant(reply));
                    self.finish_chat();
                }
            }
            NetworkResponse::ChatFailed { id } => {
                if self.chat.pending_id == Some(id) {
                    // fallback text follows the locale active at failure time
                    let fallback = i18n::strings(self.locale).chat_fallback;
                    self.chat.entries.push(ChatEntry::assistant(fallback));
                    self.finish_chat();
                }
            }
            NetworkResponse::SignedIn { id, session } => {
                if self.pending_auth == Some(id) {
                    self.notice = Some(format!("Signed in as {}", session.email));
                    self.session = Some(session);
                    self.finish_auth();
                    if self.popup == Popup::Login {
                        self.popup = Popup::None;
                    }
                }
            }
            NetworkResponse::SignedUp { id } => {
                if self.pending_auth == Some(id) {
                    self.notice = Some(String::from(
                        "Verification email sent! Check your inbox.",
                    ));
                    self.finish_auth();
                    if self.popup == Popup::Login {
                        self.popup = Popup::None;
                    }
                }
            }
            NetworkResponse::SignedOut { id } => {
                if self.pending_auth == Some(id) {
                    self.session = None;
                    self.notice = Some(String::from("Signed out"));
                    self.finish_auth();
                }
            }
            NetworkResponse::AuthError { id, message } => {
                if self.pending_auth == Some(id) {
                    self.notice = Some(message);
                    self.finish_auth();
                }
            }
        }
    }

    fn finish_chat(&mut self) {
        self.chat.waiting = false;
        self.chat.pending_id = None;
    }

    fn finish_auth(&mut self) {
        self.login.busy = false;
        self.pending_auth = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChatRole, Locale, Session};

    fn state() -> AppState {
        AppState::new(Locale::En)
    }

    #[test]
    fn grab_and_move_reorders_and_follows_the_block() {
        let mut app = state();
        assert_eq!(app.layout.blocks()[0].kind, ModuleKind::Search);
        app.grab();
        app.move_down();
        app.move_down();
        app.drop_block();

        let kinds: Vec<ModuleKind> = app.layout.blocks().iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ModuleKind::Featured,
                ModuleKind::Directory,
                ModuleKind::Search,
                ModuleKind::Stats,
            ]
        );
        assert_eq!(app.focused, 2);
        assert!(app.grabbed.is_none());
    }

    #[test]
    fn move_without_grab_is_noop() {
        let mut app = state();
        let before = app.layout.blocks().to_vec();
        app.move_down();
        app.move_up();
        assert_eq!(app.layout.blocks(), &before[..]);
    }

    #[test]
    fn move_past_either_end_is_noop() {
        let mut app = state();
        app.grab();
        app.move_up();
        assert_eq!(app.layout.blocks()[0].kind, ModuleKind::Search);
        app.drop_block();

        app.focused = app.layout.len() - 1;
        app.grab();
        app.move_down();
        assert_eq!(
            app.layout.blocks().last().map(|b| b.kind),
            Some(ModuleKind::Stats)
        );
    }

    #[test]
    fn typing_a_query_narrows_the_directory_view() {
        let mut app = state();
        app.start_query_edit();
        for c in "chat".chars() {
            app.query_char(c);
        }
        let view = app.to_render_state();
        assert!(view.tools.iter().any(|t| t.name == "ChatGPT"));
        assert!(view.tools.iter().all(|t| {
            t.name.to_lowercase().contains("chat")
                || t.description.en.to_lowercase().contains("chat")
        }));
        assert_eq!(app.selected_tool, 0);
    }

    #[test]
    fn category_cycling_wraps_both_ways() {
        let mut app = state();
        let categories = app.catalog.categories();
        app.prev_category();
        assert_eq!(app.filter.category, categories[categories.len() - 1]);
        app.next_category();
        assert_eq!(app.filter.category, "All");
        app.next_category();
        assert_eq!(app.filter.category, categories[1]);
    }

    #[test]
    fn add_tool_submit_requires_all_required_fields() {
        let mut app = state();
        app.open_add_tool();
        let before = app.catalog.len();

        // url and description still empty
        for c in "Foo".chars() {
            app.add_tool_char(c);
        }
        app.submit_add_tool();
        assert_eq!(app.catalog.len(), before);
        assert_eq!(app.popup, Popup::AddTool);

        app.add_tool_next_field();
        for c in "https://x".chars() {
            app.add_tool_char(c);
        }
        app.add_tool_next_field();
        for c in "desc".chars() {
            app.add_tool_char(c);
        }
        app.submit_add_tool();
        assert_eq!(app.catalog.len(), before + 1);
        assert_eq!(app.popup, Popup::None);

        let added = app.catalog.tools().last().unwrap();
        assert_eq!(added.name, "Foo");
        assert_eq!(added.category, "Chat");
    }

    #[test]
    fn category_field_cycles_known_categories_plus_other() {
        let mut app = state();
        app.open_add_tool();
        app.add_tool.field = AddToolField::Category;
        assert_eq!(app.add_tool.category, "Chat");
        app.add_tool_left();
        assert_eq!(app.add_tool.category, "Other");
        app.add_tool_right();
        assert_eq!(app.add_tool.category, "Chat");
        // chars never land in the category selector
        app.add_tool_char('x');
        assert_eq!(app.add_tool.category, "Chat");
    }

    #[test]
    fn send_chat_appends_user_entry_and_fires_once() {
        let mut app = state();
        app.open_chat();
        for c in "hello".chars() {
            app.chat_char(c);
        }
        let cmd = app.send_chat();
        assert!(matches!(
            cmd,
            Some(NetworkCommand::SendChat { ref message, .. }) if message == "hello"
        ));
        assert_eq!(app.chat.entries.len(), 1);
        assert_eq!(app.chat.entries[0].role, ChatRole::User);
        assert!(app.chat.input.is_empty());

        // a second send while waiting is refused
        app.chat.input = String::from("again");
        assert!(app.send_chat().is_none());
    }

    #[test]
    fn failed_chat_appends_exactly_one_fallback_entry() {
        let mut app = state();
        app.chat.input = String::from("hello");
        let Some(NetworkCommand::SendChat { id, .. }) = app.send_chat() else {
            panic!("expected a chat command");
        };
        let before = app.chat.entries.clone();

        app.handle_response(NetworkResponse::ChatFailed { id });
        assert_eq!(app.chat.entries.len(), before.len() + 1);
        let last = app.chat.entries.last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.content, i18n::strings(Locale::En).chat_fallback);
        // prior entries untouched
        for (old, new) in before.iter().zip(&app.chat.entries) {
            assert_eq!(old.content, new.content);
        }
        assert!(!app.chat.waiting);
    }

    #[test]
    fn chat_fallback_uses_the_active_locale() {
        let mut app = AppState::new(Locale::Zh);
        app.chat.input = String::from("你好");
        let Some(NetworkCommand::SendChat { id, .. }) = app.send_chat() else {
            panic!("expected a chat command");
        };
        app.handle_response(NetworkResponse::ChatFailed { id });
        let last = app.chat.entries.last().unwrap();
        assert_eq!(last.content, i18n::strings(Locale::Zh).chat_fallback);
        assert!(last.content.contains("系统错误"));
    }

    #[test]
    fn stale_chat_response_is_ignored() {
        let mut app = state();
        app.chat.input = String::from("hello");
        let _ = app.send_chat();
        app.handle_response(NetworkResponse::ChatReply {
            id: 999,
            reply: String::from("stale"),
        });
        assert_eq!(app.chat.entries.len(), 1);
        assert!(app.chat.waiting);
    }

    #[test]
    fn sign_in_flow_updates_session_and_closes_login() {
        let mut app = state();
        app.open_login();
        app.login.email = String::from("a@b.c");
        app.login.password = String::from("pw");
        let Some(NetworkCommand::SignIn { id, .. }) = app.submit_sign_in() else {
            panic!("expected a sign-in command");
        };
        assert!(app.login.busy);
        // double submit refused while busy
        assert!(app.submit_sign_in().is_none());

        app.handle_response(NetworkResponse::SignedIn {
            id,
            session: Session {
                email: String::from("a@b.c"),
                access_token: String::from("tok"),
            },
        });
        assert_eq!(app.session.as_ref().map(|s| s.email.as_str()), Some("a@b.c"));
        assert_eq!(app.popup, Popup::None);
        assert!(!app.login.busy);
    }

    #[test]
    fn auth_error_surfaces_a_notice_and_nothing_else() {
        let mut app = state();
        app.open_login();
        app.login.email = String::from("a@b.c");
        app.login.password = String::from("pw");
        let Some(NetworkCommand::SignIn { id, .. }) = app.submit_sign_in() else {
            panic!("expected a sign-in command");
        };
        app.handle_response(NetworkResponse::AuthError {
            id,
            message: String::from("Invalid login credentials"),
        });
        assert!(app.session.is_none());
        assert_eq!(app.notice.as_deref(), Some("Invalid login credentials"));
        assert_eq!(app.popup, Popup::Login);
        assert!(!app.login.busy);
    }

    #[test]
    fn sign_out_carries_the_token_and_clears_the_session() {
        let mut app = state();
        app.session = Some(Session {
            email: String::from("a@b.c"),
            access_token: String::from("tok"),
        });
        let Some(NetworkCommand::SignOut { id, access_token }) = app.sign_out() else {
            panic!("expected a sign-out command");
        };
        assert_eq!(access_token, "tok");
        assert_eq!(app.pending_auth, Some(id));
        app.handle_response(NetworkResponse::SignedOut { id });
        assert!(app.session.is_none());
    }

    #[test]
    fn sign_out_without_a_session_is_refused() {
        let mut app = state();
        assert!(app.sign_out().is_none());
        assert!(app.pending_auth.is_none());
    }

    #[test]
    fn locale_toggle_changes_description_matching() {
        let mut app = state();
        app.filter.query = String::from("编程");
        assert_eq!(app.filtered_len(), 0);
        app.toggle_locale();
        assert_eq!(app.filtered_len(), 1);
    }
}
