//! Client-side gallery operations: search, sort, simulated delete, stats.
//!
//! Everything here works on the list already fetched from the service.
//! Nothing is written back; a fresh fetch replaces the whole list.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::config::ESTIMATED_MB_PER_ASSET;
use crate::core::api::AssetService;
use crate::core::error::ApiError;
use crate::models::{AssetKind, AssetRecord, SortKey, ViewMode};

/// Search term and sort order applied to the fetched list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryQuery {
    pub search: String,
    pub sort: SortKey,
}

impl GalleryQuery {
    /// Whether `record` matches the search term.
    ///
    /// Case-insensitive substring match over the owner and display names.
    /// The term is used as typed, spaces included; an empty term matches
    /// everything.
    pub fn matches(&self, record: &AssetRecord) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [record.owner.as_deref(), record.name.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Filter then stable-sort `records`.
    pub fn apply(&self, records: &[AssetRecord]) -> Vec<AssetRecord> {
        let mut result: Vec<AssetRecord> =
            records.iter().filter(|r| self.matches(r)).cloned().collect();
        result.sort_by(|a, b| compare(a, b, self.sort));
        result
    }
}

/// Three-way comparator for `key`.
///
/// Text keys follow a locale-style order: accents and case are ignored
/// first, then case-insensitive text, then the raw text, then the id.
/// Missing text sorts as the empty string.
pub fn compare(a: &AssetRecord, b: &AssetRecord, key: SortKey) -> Ordering {
    let text = |r: &AssetRecord| -> String {
        match key {
            SortKey::Id => String::new(),
            SortKey::Owner => r.owner.clone().unwrap_or_default(),
            SortKey::Title => r.name.clone().unwrap_or_default(),
        }
    };

    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Owner | SortKey::Title => {
            let (ta, tb) = (text(a), text(b));
            collation_key(&ta)
                .cmp(&collation_key(&tb))
                .then_with(|| ta.to_lowercase().cmp(&tb.to_lowercase()))
                .then_with(|| ta.cmp(&tb))
                .then_with(|| a.id.cmp(&b.id))
        }
    }
}

/// Primary sort key: canonical decomposition with combining marks removed,
/// lowercased. "Émile" and "emile" share a key.
fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Summary figures shown above the gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryStats {
    pub total: usize,
    pub shown: usize,
    /// Rough storage estimate; the service does not report sizes.
    pub estimated_mb: f64,
}

impl GalleryStats {
    pub fn estimated_label(&self) -> String {
        format!("{:.1} MB", self.estimated_mb)
    }
}

/// In-memory state behind one gallery view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    records: Vec<AssetRecord>,
    pub query: GalleryQuery,
    pub view_mode: ViewMode,
    selected: Option<i64>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a fresh fetch. Locally deleted rows come back.
    pub fn replace_records(&mut self, records: Vec<AssetRecord>) {
        self.records = records;
        if let Some(id) = self.selected
            && !self.records.iter().any(|r| r.id == id)
        {
            self.selected = None;
        }
    }

    #[cfg(test)]
    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    /// The filtered, sorted list to render.
    pub fn visible(&self) -> Vec<AssetRecord> {
        self.query.apply(&self.records)
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn select(&mut self, id: i64) {
        if self.records.iter().any(|r| r.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn close_preview(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&AssetRecord> {
        let id = self.selected?;
        self.records.iter().find(|r| r.id == id)
    }

    /// Drop a row from local state only. The service keeps the asset.
    ///
    /// Returns the removed record.
    pub fn remove_local(&mut self, id: i64) -> Option<AssetRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.records.remove(index))
    }

    pub fn stats(&self) -> GalleryStats {
        GalleryStats {
            total: self.records.len(),
            shown: self.visible().len(),
            estimated_mb: self.records.len() as f64 * ESTIMATED_MB_PER_ASSET,
        }
    }
}

/// Fetch the full list for `kind` and replace `state`'s records with it.
///
/// On failure the current records are kept.
pub async fn refresh<S: AssetService>(
    service: &S,
    kind: AssetKind,
    state: &mut GalleryState,
) -> Result<usize, ApiError> {
    let records = service.list(kind).await?;
    let count = records.len();
    state.replace_records(records);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::mock::MockService;

    fn rec(id: i64, owner: Option<&str>, name: Option<&str>) -> AssetRecord {
        AssetRecord {
            id,
            owner: owner.map(String::from),
            name: name.map(String::from),
            data_base64: None,
        }
    }

    fn sample() -> Vec<AssetRecord> {
        vec![
            rec(3, Some("carol"), Some("Sunset")),
            rec(1, Some("alice"), Some("beach")),
            rec(2, Some("Bob"), None),
            rec(5, None, Some("Alpine lake")),
            rec(4, Some("alice"), Some("Alps")),
        ]
    }

    fn ids(records: &[AssetRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let query = GalleryQuery {
            search: String::new(),
            sort: SortKey::Id,
        };
        assert_eq!(ids(&query.apply(&sample())), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_keeps_spaces_in_term() {
        let search = |term: &str| {
            GalleryQuery {
                search: term.to_string(),
                sort: SortKey::Id,
            }
            .apply(&sample())
        };
        assert_eq!(ids(&search("alp")), vec![4, 5]);
        assert_eq!(ids(&search("alpine ")), vec![5]);
        assert!(search("alps ").is_empty());
        // only "Alpine lake" contains a space
        assert_eq!(ids(&search(" ")), vec![5]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_fields() {
        let query = GalleryQuery {
            search: "ALP".to_string(),
            sort: SortKey::Id,
        };
        assert_eq!(ids(&query.apply(&sample())), vec![4, 5]);

        let query = GalleryQuery {
            search: "bob".to_string(),
            sort: SortKey::Id,
        };
        assert_eq!(ids(&query.apply(&sample())), vec![2]);
    }

    #[test]
    fn test_filtered_is_subset_of_matching_records() {
        let all = sample();
        for term in ["a", "li", "SUN", "zzz", ""] {
            let query = GalleryQuery {
                search: term.to_string(),
                sort: SortKey::Owner,
            };
            let result = query.apply(&all);
            let needle = term.to_lowercase();
            for r in &result {
                assert!(all.contains(r));
                let hit = [r.owner.as_deref(), r.name.as_deref()]
                    .into_iter()
                    .flatten()
                    .any(|f| f.to_lowercase().contains(&needle));
                assert!(hit, "{:?} should not match {:?}", r, term);
            }
        }
    }

    #[test]
    fn test_sort_by_owner_is_non_decreasing() {
        let query = GalleryQuery {
            search: String::new(),
            sort: SortKey::Owner,
        };
        let result = query.apply(&sample());
        // missing owner sorts first, ties on "alice" fall back to id
        assert_eq!(ids(&result), vec![5, 1, 4, 2, 3]);
        for pair in result.windows(2) {
            assert_ne!(compare(&pair[0], &pair[1], SortKey::Owner), Ordering::Greater);
        }
    }

    #[test]
    fn test_sort_by_title() {
        let query = GalleryQuery {
            search: String::new(),
            sort: SortKey::Title,
        };
        assert_eq!(ids(&query.apply(&sample())), vec![2, 5, 4, 1, 3]);
    }

    #[test]
    fn test_sort_by_title_ignores_accents_and_case() {
        let records = vec![
            rec(1, None, Some("Zebra")),
            rec(2, None, Some("\u{c9}mile")),
            rec(3, None, Some("apple")),
            rec(4, None, Some("emile")),
            rec(5, None, Some("\u{d1}and\u{fa}")),
            rec(6, None, Some("Nube")),
        ];
        let query = GalleryQuery {
            search: String::new(),
            sort: SortKey::Title,
        };
        let sorted = query.apply(&records);
        let names: Vec<&str> = sorted.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(
            names,
            vec!["apple", "emile", "\u{c9}mile", "\u{d1}and\u{fa}", "Nube", "Zebra"]
        );
    }

    #[test]
    fn test_sort_by_owner_folds_decomposed_accents() {
        // "Jose\u{301}" is "José" in decomposed form
        let records = vec![
            rec(1, Some("Juan"), None),
            rec(2, Some("Jose\u{301}"), None),
            rec(3, Some("Josef"), None),
        ];
        let query = GalleryQuery {
            search: String::new(),
            sort: SortKey::Owner,
        };
        assert_eq!(ids(&query.apply(&records)), vec![2, 3, 1]);
    }

    #[test]
    fn test_toggle_view_keeps_result_set() {
        let mut state = GalleryState::new();
        state.replace_records(sample());
        state.query.search = "al".to_string();
        state.query.sort = SortKey::Title;

        let before = state.visible();
        state.toggle_view();
        assert_eq!(state.view_mode, ViewMode::List);
        assert_eq!(state.visible(), before);
        state.toggle_view();
        assert_eq!(state.visible(), before);
    }

    #[test]
    fn test_local_delete_is_undone_by_refetch() {
        let server = sample();
        let mut state = GalleryState::new();
        state.replace_records(server.clone());

        state.select(4);
        let removed = state.remove_local(4);
        assert_eq!(removed.map(|r| r.id), Some(4));
        assert!(state.selected().is_none());
        assert!(!ids(&state.visible()).contains(&4));
        assert_eq!(state.remove_local(4), None);

        state.replace_records(server);
        assert!(ids(&state.visible()).contains(&4));
    }

    #[tokio::test]
    async fn test_refresh_restores_locally_deleted_rows() {
        let service = MockService::default();
        *service.records.borrow_mut() = sample();
        let mut state = GalleryState::new();

        assert_eq!(refresh(&service, AssetKind::Image, &mut state).await, Ok(5));
        state.remove_local(1);
        state.remove_local(2);
        assert_eq!(state.records().len(), 3);

        assert_eq!(refresh(&service, AssetKind::Image, &mut state).await, Ok(5));
        assert_eq!(ids(&state.visible()), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_records() {
        let mut state = GalleryState::new();
        state.replace_records(sample());

        let service = MockService::failing(ApiError::Timeout);
        assert_eq!(
            refresh(&service, AssetKind::Video, &mut state).await,
            Err(ApiError::Timeout)
        );
        assert_eq!(state.records().len(), 5);
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut state = GalleryState::new();
        state.replace_records(sample());
        state.select(99);
        assert!(state.selected().is_none());
        state.select(2);
        assert_eq!(state.selected().map(|r| r.id), Some(2));
        state.close_preview();
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_stats() {
        let mut state = GalleryState::new();
        state.replace_records(sample());
        state.query.search = "alice".to_string();

        let stats = state.stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.shown, 2);
        assert_eq!(stats.estimated_label(), "12.5 MB");
    }
}
