//! Tool catalog - the flat collection of tool entries plus the derived
//! directory filter.
//!
//! Entries come from the fixed seed list or the add-tool action; they are
//! never removed or mutated in place. The filter view is recomputed from
//! its inputs on every render, there is no caching.

use crate::models::{FilterState, Locale, LocalizedText, ToolEntry, CATEGORY_ALL};

/// In-memory tool collection with a monotonic id counter
#[derive(Clone, Debug)]
pub struct ToolCatalog {
    tools: Vec<ToolEntry>,
    next_id: u64,
}

impl ToolCatalog {
    /// The nine seed tools shipped with the dashboard
    pub fn seeded() -> Self {
        let seed = [
            (
                "ChatGPT",
                "OpenAI 开发的先进对话式 AI",
                "Advanced conversational AI by OpenAI",
                "https://chat.openai.com",
                "Chat",
            ),
            (
                "Claude",
                "Anthropic 开发的诚实、无害的 AI",
                "Helpful, harmless, and honest AI",
                "https://claude.ai",
                "Chat",
            ),
            (
                "Midjourney",
                "用于生成精美图像的生成式 AI",
                "Generative AI for stunning images",
                "https://midjourney.com",
                "Image",
            ),
            (
                "GitHub Copilot",
                "您的 AI 编程助手",
                "AI pair programmer",
                "https://github.com/features/copilot",
                "Code",
            ),
            (
                "Perplexity",
                "AI 驱动的问答搜索引擎",
                "AI-powered search engine",
                "https://perplexity.ai",
                "Search",
            ),
            (
                "Gemini",
                "Google 最强大的 AI 模型",
                "Google's most capable AI model",
                "https://gemini.google.com",
                "Chat",
            ),
            (
                "Runway Gen-2",
                "下一代视频生成 AI",
                "Next-generation video generation AI",
                "https://runwayml.com",
                "Video",
            ),
            (
                "Suno AI",
                "高质量 AI 音乐创作平台",
                "High-quality AI music creation platform",
                "https://suno.com",
                "Audio",
            ),
            (
                "Notion AI",
                "笔记软件中的 AI 助手",
                "AI assistant integrated into Notion",
                "https://notion.so",
                "Productivity",
            ),
        ];

        let tools = seed
            .iter()
            .enumerate()
            .map(|(i, (name, zh, en, url, category))| ToolEntry {
                id: (i + 1).to_string(),
                name: (*name).to_string(),
                description: LocalizedText::new(*zh, *en),
                url: (*url).to_string(),
                category: (*category).to_string(),
                icon: category_icon(category),
            })
            .collect::<Vec<_>>();

        let next_id = tools.len() as u64 + 1;
        ToolCatalog { tools, next_id }
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        ToolCatalog {
            tools: Vec::new(),
            next_id: 1,
        }
    }

    pub fn tools(&self) -> &[ToolEntry] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ToolEntry> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Append a new entry and return its id. The description is stored
    /// identically under every locale key; name/url are taken as given.
    pub fn add_tool(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        let category = category.into();
        self.tools.push(ToolEntry {
            id: id.clone(),
            name: name.into(),
            description: LocalizedText::uniform(description),
            url: url.into(),
            category: category.clone(),
            icon: category_icon(&category),
        });
        id
    }

    /// Directory view of this catalog, see [`filter_entries`]
    pub fn filter(&self, filter: &FilterState, locale: Locale) -> Vec<&ToolEntry> {
        filter_entries(&self.tools, filter, locale)
    }

    /// "All" followed by the distinct categories in first-appearance order
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![String::from(CATEGORY_ALL)];
        for tool in &self.tools {
            if !categories.contains(&tool.category) {
                categories.push(tool.category.clone());
            }
        }
        categories
    }
}

/// Stable filter over a tool collection: the category must match (or be
/// the "All" sentinel) and the query, when non-empty, must be a
/// case-insensitive substring of the name or of the description in the
/// active locale. Pure; preserves collection order.
pub fn filter_entries<'a>(
    tools: &'a [ToolEntry],
    filter: &FilterState,
    locale: Locale,
) -> Vec<&'a ToolEntry> {
    let query = filter.query.to_lowercase();
    tools
        .iter()
        .filter(|tool| {
            let matches_category =
                filter.category == CATEGORY_ALL || tool.category == filter.category;
            let matches_query = query.is_empty()
                || tool.name.to_lowercase().contains(&query)
                || tool.description.get(locale).to_lowercase().contains(&query);
            matches_category && matches_query
        })
        .collect()
}

/// Glyph shown next to a tool, keyed by category
pub fn category_icon(category: &str) -> char {
    match category {
        "Chat" => '◆',
        "Image" => '▣',
        "Code" => '#',
        "Search" => '◎',
        "Video" => '▶',
        "Audio" => '♪',
        "Productivity" => '✦',
        _ => '■',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tool_catalog() -> ToolCatalog {
        let mut catalog = ToolCatalog::empty();
        catalog.add_tool("ChatGPT", "https://chat.openai.com", "conversational AI", "Chat");
        catalog.add_tool("Midjourney", "https://midjourney.com", "image generation", "Image");
        catalog
    }

    #[test]
    fn all_and_empty_query_returns_everything_in_order() {
        let catalog = ToolCatalog::seeded();
        let filtered = catalog.filter(&FilterState::default(), Locale::En);
        assert_eq!(filtered.len(), catalog.len());
        let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        let expected: Vec<&str> = catalog.tools().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let catalog = two_tool_catalog();
        for query in ["chat", "CHAT", "Chat"] {
            let filter = FilterState {
                query: query.to_string(),
                category: String::from(CATEGORY_ALL),
            };
            let names: Vec<&str> = catalog
                .filter(&filter, Locale::En)
                .iter()
                .map(|t| t.name.as_str())
                .collect();
            assert_eq!(names, vec!["ChatGPT"], "query {query:?}");
        }
    }

    #[test]
    fn query_matches_description_in_active_locale_only() {
        let catalog = ToolCatalog::seeded();
        let filter = FilterState {
            query: String::from("pair programmer"),
            category: String::from(CATEGORY_ALL),
        };
        let en: Vec<&str> = catalog
            .filter(&filter, Locale::En)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(en, vec!["GitHub Copilot"]);
        assert!(catalog.filter(&filter, Locale::Zh).is_empty());
    }

    #[test]
    fn category_narrows_and_combines_with_query() {
        let catalog = ToolCatalog::seeded();
        let filter = FilterState {
            query: String::new(),
            category: String::from("Chat"),
        };
        let chat = catalog.filter(&filter, Locale::En);
        assert_eq!(chat.len(), 3);
        assert!(chat.iter().all(|t| t.category == "Chat"));

        let filter = FilterState {
            query: String::from("google"),
            category: String::from("Chat"),
        };
        let names: Vec<&str> = catalog
            .filter(&filter, Locale::En)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Gemini"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = ToolCatalog::seeded();
        let filter = FilterState {
            query: String::from("ai"),
            category: String::from(CATEGORY_ALL),
        };
        let once: Vec<ToolEntry> = catalog
            .filter(&filter, Locale::En)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_entries(&once, &filter, Locale::En);
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(&once).all(|(a, b)| *a == b));
    }

    #[test]
    fn add_tool_appends_with_fresh_unique_id() {
        let mut catalog = ToolCatalog::seeded();
        let before = catalog.len();
        let id = catalog.add_tool("Foo", "https://x", "desc", "Chat");
        assert_eq!(catalog.len(), before + 1);

        let entry = catalog.get(&id).expect("new entry findable by id");
        assert_eq!(entry.category, "Chat");
        assert_eq!(entry.name, "Foo");
        // same text under every locale key
        assert_eq!(entry.description.get(Locale::Zh), "desc");
        assert_eq!(entry.description.get(Locale::En), "desc");
        // last in collection order
        assert_eq!(catalog.tools().last().map(|t| t.id.as_str()), Some(id.as_str()));

        let mut ids: Vec<&str> = catalog.tools().iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn categories_derive_from_collection_in_first_appearance_order() {
        let mut catalog = two_tool_catalog();
        assert_eq!(catalog.categories(), vec!["All", "Chat", "Image"]);
        catalog.add_tool("Suno", "https://suno.com", "music", "Audio");
        catalog.add_tool("Gemini", "https://gemini.google.com", "chat", "Chat");
        assert_eq!(catalog.categories(), vec!["All", "Chat", "Image", "Audio"]);
    }
}
