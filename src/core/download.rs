//! Rebuilding downloadable files from the base64 payloads that listing
//! responses already carry. No request is made.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::core::error::DownloadError;
use crate::models::{AssetKind, AssetRecord};

/// A decoded file ready to hand to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadFile {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Magic-number table: (prefix, offset, mime).
const SIGNATURES: &[(&[u8], usize, &str)] = &[
    (b"\x89PNG\r\n\x1a\n", 0, "image/png"),
    (b"\xff\xd8\xff", 0, "image/jpeg"),
    (b"GIF87a", 0, "image/gif"),
    (b"GIF89a", 0, "image/gif"),
    (b"WEBP", 8, "image/webp"),
    (b"%PDF", 0, "application/pdf"),
    (b"ftyp", 4, "video/mp4"),
    (b"\x1a\x45\xdf\xa3", 0, "video/webm"),
    (b"ID3", 0, "audio/mpeg"),
    (b"\xff\xfb", 0, "audio/mpeg"),
    (b"WAVE", 8, "audio/wav"),
    (b"OggS", 0, "audio/ogg"),
    (b"PK\x03\x04", 0, "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    (b"\xd0\xcf\x11\xe0", 0, "application/msword"),
];

/// Guess a MIME type from the leading bytes.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    SIGNATURES.iter().find_map(|(magic, offset, mime)| {
        bytes
            .get(*offset..*offset + magic.len())
            .filter(|window| window == magic)
            .map(|_| *mime)
    })
}

/// File extension for a MIME type this client produces.
pub fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "application/pdf" => "pdf",
        "video/mp4" => "mp4",
        "video/webm" => "webm",
        "audio/mpeg" => "mp3",
        "audio/wav" => "wav",
        "audio/ogg" => "ogg",
        "application/msword" => "doc",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => "docx",
        "text/plain" => "txt",
        _ => "bin",
    }
}

/// Base64 characters decoded to sniff a payload (18 bytes, enough for every
/// signature above).
const SNIFF_CHARS: usize = 24;

/// Sniff a base64 payload from its first few characters only.
fn sniff_payload(payload: &str) -> Option<&'static str> {
    let head: String = payload
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(SNIFF_CHARS)
        .collect();
    let whole_quanta = head.len() - head.len() % 4;
    let bytes = STANDARD.decode(&head.as_bytes()[..whole_quanta]).ok()?;
    sniff_mime(&bytes)
}

/// Decode a payload, tolerating a `data:...;base64,` prefix and whitespace.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, DownloadError> {
    let data = match payload.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => payload,
    };
    let cleaned: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(DownloadError::EmptyPayload);
    }
    STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| DownloadError::InvalidPayload(e.to_string()))
}

/// Characters browsers reject or mangle in download names.
fn sanitize_filename(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Build the file for `record`.
///
/// The MIME type comes from the payload's magic bytes, falling back to the
/// kind's default. Documents with no recognizable signature are plain text
/// when the payload is valid UTF-8.
pub fn prepare(record: &AssetRecord, kind: AssetKind) -> Result<DownloadFile, DownloadError> {
    let payload = record.payload().ok_or(DownloadError::EmptyPayload)?;
    let bytes = decode_payload(payload)?;

    let mime = sniff_mime(&bytes).unwrap_or_else(|| match kind {
        AssetKind::Document if std::str::from_utf8(&bytes).is_ok() => "text/plain",
        _ => kind.default_mime(),
    });

    let stem = record
        .name
        .as_deref()
        .map(sanitize_filename)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| kind.label().to_lowercase());

    let ext = extension_for(mime);
    let filename = if stem.to_lowercase().ends_with(&format!(".{}", ext)) {
        stem
    } else {
        format!("{}.{}", stem, ext)
    };

    Ok(DownloadFile {
        filename,
        mime,
        bytes,
    })
}

/// `data:` URL for inline previews (`<img>`, `<video>`, `<audio>`).
pub fn data_url(record: &AssetRecord, kind: AssetKind) -> Option<String> {
    let payload = record.payload()?;
    if payload.starts_with("data:") {
        return Some(payload.to_string());
    }
    let mime = sniff_payload(payload).unwrap_or(kind.default_mime());
    Some(format!("data:{};base64,{}", mime, payload))
}
