//! Asset kinds and the records returned by the listing endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::endpoints;

/// The four asset types the remote service stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Image,
    Video,
    Document,
    Audio,
}

impl AssetKind {
    /// All kinds in dashboard order.
    pub const ALL: [AssetKind; 4] = [Self::Image, Self::Video, Self::Document, Self::Audio];

    /// Capitalized label ("Image"). Also the value stored in history entries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Document => "Document",
            Self::Audio => "Audio",
        }
    }

    /// Plural label for gallery headings and footers.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Video => "videos",
            Self::Document => "documents",
            Self::Audio => "audios",
        }
    }

    pub fn upload_path(self) -> &'static str {
        match self {
            Self::Image => endpoints::UPLOAD_IMAGE,
            Self::Video => endpoints::UPLOAD_VIDEO,
            Self::Document => endpoints::UPLOAD_DOCUMENT,
            Self::Audio => endpoints::UPLOAD_AUDIO,
        }
    }

    pub fn list_path(self) -> &'static str {
        match self {
            Self::Image => endpoints::LIST_IMAGE,
            Self::Video => endpoints::LIST_VIDEO,
            Self::Document => endpoints::LIST_DOCUMENT,
            Self::Audio => endpoints::LIST_AUDIO,
        }
    }

    /// `accept` attribute for the file input.
    pub fn accept(self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Video => "video/*",
            Self::Document => ".pdf,.doc,.docx,.txt",
            Self::Audio => "audio/*",
        }
    }

    /// Accent color used by upload cards, badges and gallery links.
    pub fn accent(self) -> &'static str {
        match self {
            Self::Image => "#007bff",
            Self::Video => "#28a745",
            Self::Document => "#ffc107",
            Self::Audio => "#6f42c1",
        }
    }

    /// Route slug of the gallery for this kind (`showImage`, ...).
    pub fn gallery_slug(self) -> &'static str {
        match self {
            Self::Image => "showImage",
            Self::Video => "showVideo",
            Self::Document => "showDocument",
            Self::Audio => "showAudio",
        }
    }

    pub fn from_gallery_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.gallery_slug() == slug)
    }

    /// MIME type assumed for a downloaded payload when sniffing fails.
    pub fn default_mime(self) -> &'static str {
        match self {
            Self::Image => "image/png",
            Self::Video => "video/mp4",
            Self::Document => "application/pdf",
            Self::Audio => "audio/mpeg",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored asset as returned by the listing endpoints.
///
/// The server uses the `Image` field for the display name of every kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: i64,
    #[serde(rename = "userName", default)]
    pub owner: Option<String>,
    #[serde(rename = "Image", default)]
    pub name: Option<String>,
    #[serde(rename = "dataBase64", default)]
    pub data_base64: Option<String>,
}

impl AssetRecord {
    /// Owner name, or "Anonymous".
    pub fn owner_display(&self) -> &str {
        non_empty(self.owner.as_deref()).unwrap_or("Anonymous")
    }

    /// Display name, or "Untitled".
    pub fn name_display(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or("Untitled")
    }

    /// Base64 payload if present and non-empty.
    pub fn payload(&self) -> Option<&str> {
        non_empty(self.data_base64.as_deref())
    }

    /// Approximate decoded payload size in KB (`len * 0.75 / 1024`, rounded).
    pub fn approx_size_kb(&self) -> Option<u64> {
        self.payload()
            .map(|p| (p.len() as f64 * 0.75 / 1024.0).round() as u64)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
