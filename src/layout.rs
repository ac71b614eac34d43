//! Module order store - the ordered sequence of dashboard sections
//!
//! Membership is fixed at startup; only the order changes, driven by the
//! grab-and-move gesture in the UI.

use crate::models::{LocalizedText, ModuleBlock, ModuleKind};

/// The reorderable dashboard layout
#[derive(Clone, Debug)]
pub struct ModuleLayout {
    blocks: Vec<ModuleBlock>,
}

impl ModuleLayout {
    /// The standard four-block layout: search, featured, directory, stats
    pub fn standard() -> Self {
        ModuleLayout {
            blocks: vec![
                ModuleBlock {
                    id: String::from("search-module"),
                    title: LocalizedText::new("全局搜索", "Global Search"),
                    kind: ModuleKind::Search,
                },
                ModuleBlock {
                    id: String::from("featured-module"),
                    title: LocalizedText::new("精选生态", "Featured Ecosystem"),
                    kind: ModuleKind::Featured,
                },
                ModuleBlock {
                    id: String::from("grid-module"),
                    title: LocalizedText::new("AI 目录", "AI Directory"),
                    kind: ModuleKind::Directory,
                },
                ModuleBlock {
                    id: String::from("stats-module"),
                    title: LocalizedText::new("系统状态", "System Status"),
                    kind: ModuleKind::Stats,
                },
            ],
        }
    }

    pub fn blocks(&self) -> &[ModuleBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Index of a block by id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Move the block `source_id` to the slot currently occupied by
    /// `target_id`; everything between shifts by one. Unknown ids and
    /// `source_id == target_id` are silent no-ops.
    pub fn reorder(&mut self, source_id: &str, target_id: &str) {
        if source_id == target_id {
            return;
        }
        let (Some(old_index), Some(new_index)) =
            (self.position(source_id), self.position(target_id))
        else {
            return;
        };
        let block = self.blocks.remove(old_index);
        self.blocks.insert(new_index, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(layout: &ModuleLayout) -> Vec<&str> {
        layout.blocks().iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn reorder_moves_source_to_target_slot() {
        let mut layout = ModuleLayout::standard();
        layout.reorder("search-module", "grid-module");
        assert_eq!(
            ids(&layout),
            vec!["featured-module", "grid-module", "search-module", "stats-module"]
        );
    }

    #[test]
    fn reorder_upwards_shifts_blocks_down() {
        let mut layout = ModuleLayout::standard();
        layout.reorder("stats-module", "featured-module");
        assert_eq!(
            ids(&layout),
            vec!["search-module", "stats-module", "featured-module", "grid-module"]
        );
    }

    #[test]
    fn reorder_preserves_block_multiset() {
        let mut layout = ModuleLayout::standard();
        let mut before: Vec<String> = layout.blocks().iter().map(|b| b.id.clone()).collect();
        layout.reorder("grid-module", "search-module");
        let mut after: Vec<String> = layout.blocks().iter().map(|b| b.id.clone()).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(layout.len(), 4);
    }

    #[test]
    fn reorder_same_id_is_noop() {
        let mut layout = ModuleLayout::standard();
        let before = ids(&layout)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        layout.reorder("grid-module", "grid-module");
        assert_eq!(ids(&layout), before);
    }

    #[test]
    fn reorder_unknown_id_is_noop() {
        let mut layout = ModuleLayout::standard();
        let before = ids(&layout)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        layout.reorder("search-module", "nope");
        layout.reorder("nope", "search-module");
        assert_eq!(ids(&layout), before);
    }

    #[test]
    fn adjacent_swap_round_trips() {
        let mut layout = ModuleLayout::standard();
        layout.reorder("search-module", "featured-module");
        layout.reorder("search-module", "featured-module");
        assert_eq!(ids(&layout), ids(&ModuleLayout::standard()));
    }
}
