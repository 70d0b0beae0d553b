//! Gallery view options.

/// Layout of the gallery (grid or list). Purely presentational.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Grid view (default)
    #[default]
    Grid,
    /// List view
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// Sort order for gallery records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Numeric identifier (default)
    #[default]
    Id,
    /// Owner user name
    Owner,
    /// Asset display name
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [Self::Id, Self::Owner, Self::Title];

    /// Value used by the `<select>` element.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Owner => "name",
            Self::Title => "imageName",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == value)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "Sort by ID",
            Self::Owner => "Sort by Name",
            Self::Title => "Sort by File Name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("name"), SortKey::Owner);
        assert_eq!(SortKey::parse("imageName"), SortKey::Title);
        assert_eq!(SortKey::parse("id"), SortKey::Id);
        assert_eq!(SortKey::parse("bogus"), SortKey::Id);
    }
}
