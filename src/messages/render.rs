//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::{AddToolForm, LoginForm};
use crate::catalog::ToolCatalog;
use crate::layout::ModuleLayout;
use crate::messages::ui_events::{InputMode, Popup};
use crate::models::{ChatEntry, FilterState, Locale, ModuleBlock, ToolEntry, CATEGORY_ALL};
use crate::theme::Accent;

/// Complete state needed by the UI to render
#[derive(Clone, Debug)]
pub struct RenderState {
    pub locale: Locale,

    // Layout
    pub blocks: Vec<ModuleBlock>,
    pub focused: usize,
    pub grabbed: Option<String>,

    // Modes and overlays
    pub input_mode: InputMode,
    pub popup: Popup,

    // Directory filter
    pub query: String,
    pub query_cursor: usize,
    pub category: String,
    pub categories: Vec<String>,

    /// The filtered directory view, in collection order
    pub tools: Vec<ToolEntry>,
    pub total_tools: usize,
    pub selected_tool: usize,

    // Theming
    pub accent: Accent,

    // Forms
    pub add_tool: AddToolForm,
    pub login: LoginForm,

    // Auth
    pub session_email: Option<String>,

    // Chat
    pub chat_entries: Vec<ChatEntry>,
    pub chat_input: String,
    pub chat_waiting: bool,
    pub chat_scroll: u16,

    // Status bar
    pub notice: Option<String>,
}

impl Default for RenderState {
    fn default() -> Self {
        let catalog = ToolCatalog::seeded();
        RenderState {
            locale: Locale::default(),
            blocks: ModuleLayout::standard().blocks().to_vec(),
            focused: 0,
            grabbed: None,
            input_mode: InputMode::Normal,
            popup: Popup::None,
            query: String::new(),
            query_cursor: 0,
            category: String::from(CATEGORY_ALL),
            categories: catalog.categories(),
            tools: catalog
                .filter(&FilterState::default(), Locale::default())
                .into_iter()
                .cloned()
                .collect(),
            total_tools: catalog.len(),
            selected_tool: 0,
            accent: Accent::default(),
            add_tool: AddToolForm::default(),
            login: LoginForm::default(),
            session_email: None,
            chat_entries: Vec::new(),
            chat_input: String::new(),
            chat_waiting: false,
            chat_scroll: 0,
            notice: None,
        }
    }
}
