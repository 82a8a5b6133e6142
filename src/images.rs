use crate::error::{RecipeLensError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use std::path::Path;

/// Mime type assumed when nothing better is known
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Represents the source of an image sent to a vision model
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image from a file path
    Path(String),
    /// Browser-style data URL, e.g. `data:image/png;base64,iVBOR...`
    DataUrl(String),
    /// Raw base64 payload with a known mime type
    Base64 { data: String, mime_type: String },
}

/// Image ready to be inlined into a provider request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// Base64-encoded image bytes
    pub data: String,
    pub mime_type: String,
}

impl InlineImage {
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Main entry point for turning an image source into an inline image
///
/// # Errors
/// Returns an error if the file cannot be read or the payload is empty
pub async fn load(source: &ImageSource) -> Result<InlineImage> {
    let image = match source {
        ImageSource::Path(path) => load_from_file(Path::new(path)).await?,
        ImageSource::DataUrl(url) => parse_data_url(url)?,
        ImageSource::Base64 { data, mime_type } => InlineImage {
            data: data.trim().to_string(),
            mime_type: mime_type.clone(),
        },
    };

    if image.data.is_empty() {
        return Err(RecipeLensError::Image("image payload is empty".to_string()));
    }

    debug!(
        "Loaded {} image ({} base64 characters)",
        image.mime_type,
        image.data.len()
    );

    Ok(image)
}

/// Reads an image file and base64-encodes it
async fn load_from_file(path: &Path) -> Result<InlineImage> {
    let bytes = tokio::fs::read(path).await?;
    Ok(InlineImage {
        data: STANDARD.encode(&bytes),
        mime_type: mime_type_for_path(path).to_string(),
    })
}

/// Split a data URL into its mime type and payload.
///
/// Anything that is not a data URL is treated as a bare JPEG payload.
pub fn parse_data_url(url: &str) -> Result<InlineImage> {
    let url = url.trim();
    let Some(rest) = url.strip_prefix("data:") else {
        return Ok(InlineImage {
            data: url.to_string(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
        });
    };

    let (header, data) = rest
        .split_once(',')
        .ok_or_else(|| RecipeLensError::Image("data URL has no payload".to_string()))?;

    if !header.ends_with(";base64") {
        return Err(RecipeLensError::Image(
            "only base64 data URLs are supported".to_string(),
        ));
    }

    let mime_type = header.trim_end_matches(";base64");
    Ok(InlineImage {
        data: data.to_string(),
        mime_type: if mime_type.is_empty() {
            DEFAULT_MIME_TYPE.to_string()
        } else {
            mime_type.to_string()
        },
    })
}

fn mime_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => DEFAULT_MIME_TYPE,
    }
}
