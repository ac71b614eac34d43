//! App state - pure data structure with no I/O logic

use crate::catalog::ToolCatalog;
use crate::layout::ModuleLayout;
use crate::messages::ui_events::{AddToolField, InputMode, LoginField, Popup};
use crate::messages::RenderState;
use crate::models::{ChatEntry, FilterState, Locale, Session};
use crate::theme::Accent;

/// The add-tool form; name, url and description are required fields
#[derive(Clone, Debug)]
pub struct AddToolForm {
    pub name: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub field: AddToolField,
}

impl Default for AddToolForm {
    fn default() -> Self {
        AddToolForm {
            name: String::new(),
            url: String::new(),
            description: String::new(),
            category: String::from("Chat"),
            field: AddToolField::Name,
        }
    }
}

impl AddToolForm {
    /// Required-field constraint enforced at the input boundary
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.url.trim().is_empty()
            && !self.description.trim().is_empty()
    }

    /// The text field currently focused, if it is editable text
    pub fn current_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            AddToolField::Name => Some(&mut self.name),
            AddToolField::Url => Some(&mut self.url),
            AddToolField::Description => Some(&mut self.description),
            AddToolField::Category => None,
        }
    }
}

/// The login form
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub field: LoginField,
    pub busy: bool,
}

impl LoginForm {
    pub fn current_text_mut(&mut self) -> &mut String {
        match self.field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

/// Chat widget state; the transcript is append-only
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    pub input: String,
    pub waiting: bool,
    pub scroll: u16,
    pub pending_id: Option<u64>,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub locale: Locale,

    // Core collections
    pub catalog: ToolCatalog,
    pub layout: ModuleLayout,
    pub filter: FilterState,

    // Dashboard navigation
    pub focused: usize,
    pub grabbed: Option<String>,
    pub selected_tool: usize,

    // Search query editing
    pub input_mode: InputMode,
    pub query_cursor: usize,

    // Theming
    pub accent: Accent,

    // Overlays
    pub popup: Popup,
    pub add_tool: AddToolForm,
    pub login: LoginForm,
    pub chat: ChatState,

    // Auth
    pub session: Option<Session>,
    pub pending_auth: Option<u64>,

    // Status-bar message (auth results, service errors)
    pub notice: Option<String>,

    pub next_request_id: u64,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        AppState {
            locale,
            catalog: ToolCatalog::seeded(),
            layout: ModuleLayout::standard(),
            filter: FilterState::default(),
            focused: 0,
            grabbed: None,
            selected_tool: 0,
            input_mode: InputMode::Normal,
            query_cursor: 0,
            accent: Accent::default(),
            popup: Popup::None,
            add_tool: AddToolForm::default(),
            login: LoginForm::default(),
            chat: ChatState::default(),
            session: None,
            pending_auth: None,
            notice: None,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Number of entries in the current directory view
    pub fn filtered_len(&self) -> usize {
        self.catalog.filter(&self.filter, self.locale).len()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            locale: self.locale,
            blocks: self.layout.blocks().to_vec(),
            focused: self.focused,
            grabbed: self.grabbed.clone(),
            input_mode: self.input_mode,
            popup: self.popup,
            query: self.filter.query.clone(),
            query_cursor: self.query_cursor,
            category: self.filter.category.clone(),
            categories: self.catalog.categories(),
            tools: self
                .catalog
                .filter(&self.filter, self.locale)
                .into_iter()
                .cloned()
                .collect(),
            total_tools: self.catalog.len(),
            selected_tool: self.selected_tool,
            accent: self.accent,
            add_tool: self.add_tool.clone(),
            login: self.login.clone(),
            session_email: self.session.as_ref().map(|s| s.email.clone()),
            chat_entries: self.chat.entries.clone(),
            chat_input: self.chat.input.clone(),
            chat_waiting: self.chat.waiting,
            chat_scroll: self.chat.scroll,
            notice: self.notice.clone(),
        }
    }
}
