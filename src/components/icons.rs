//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::AssetKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as Back, LuDownload as Download, LuEye as Eye, LuFileText as Document,
        LuImage as Image, LuLayoutGrid as Grid, LuList as List, LuMusic as Audio,
        LuRefreshCw as Refresh, LuSearch as Search, LuTrash2 as Trash, LuUpload as Upload,
        LuUser as User, LuVideo as Video, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsArrowLeft as Back, BsCameraVideo as Video,
        BsCloudArrowUp as Upload, BsDownload as Download, BsEye as Eye,
        BsFileEarmarkText as Document, BsGrid as Grid, BsImage as Image,
        BsListUl as List, BsMusicNoteBeamed as Audio, BsPerson as User, BsSearch as Search,
        BsTrash as Trash, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BACK, Back);
themed_icon!(USER, User);
themed_icon!(UPLOAD, Upload);
themed_icon!(REFRESH, Refresh);
themed_icon!(SEARCH, Search);
themed_icon!(GRID, Grid);
themed_icon!(LIST, List);
themed_icon!(EYE, Eye);
themed_icon!(DOWNLOAD, Download);
themed_icon!(TRASH, Trash);
themed_icon!(CLOSE, Close);
themed_icon!(IMAGE, Image);
themed_icon!(VIDEO, Video);
themed_icon!(DOCUMENT, Document);
themed_icon!(AUDIO, Audio);

/// Icon shown next to an asset kind.
pub fn kind_icon(kind: AssetKind) -> Icon {
    match kind {
        AssetKind::Image => IMAGE,
        AssetKind::Video => VIDEO,
        AssetKind::Document => DOCUMENT,
        AssetKind::Audio => AUDIO,
    }
}
