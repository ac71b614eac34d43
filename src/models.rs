use clap::ValueEnum;

/// Display language
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    pub fn toggle(&self) -> Locale {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Zh => "ZH",
            Locale::En => "EN",
        }
    }
}

/// Text with one variant per display language
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalizedText {
    pub zh: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        LocalizedText {
            zh: zh.into(),
            en: en.into(),
        }
    }

    /// Same text stored under every locale key (used by the add-tool flow)
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        LocalizedText {
            zh: text.clone(),
            en: text,
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Zh => &self.zh,
            Locale::En => &self.en,
        }
    }
}

/// One catalog item linking to an external AI tool or service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolEntry {
    pub id: String,
    pub name: String,
    pub description: LocalizedText,
    pub url: String,
    pub category: String,
    pub icon: char,
}

/// The four kinds of reorderable dashboard sections
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleKind {
    Search,
    Featured,
    Directory,
    Stats,
}

/// One reorderable section of the dashboard layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleBlock {
    pub id: String,
    pub title: LocalizedText,
    pub kind: ModuleKind,
}

/// Directory filter inputs, re-derived on every change
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: String,
}

/// Sentinel category matching every entry
pub const CATEGORY_ALL: &str = "All";

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            query: String::new(),
            category: String::from(CATEGORY_ALL),
        }
    }
}

/// Who authored a chat transcript entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One chat transcript entry; the transcript is append-only
#[derive(Clone, Debug)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ChatEntry {
    pub fn user(content: impl Into<String>) -> Self {
        ChatEntry {
            role: ChatRole::User,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatEntry {
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Signed-in session; opaque beyond presence, email shown in the UI,
/// token held only for sign-out
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub access_token: String,
}
