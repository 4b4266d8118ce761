//! Flag images carried as base64 text.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const DEFAULT_MEDIA_TYPE: &str = "image/png";

/// A decoded flag image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    media_type: Option<String>,
    bytes: Vec<u8>,
}

impl Flag {
    /// Decodes flag text, either bare base64 or a `data:` URI.
    ///
    /// Blank text means the currency has no flag.
    pub(crate) fn parse(text: &str) -> Result<Option<Self>, String> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let (media_type, payload) = match text.strip_prefix("data:") {
            Some(rest) => {
                let (header, payload) = rest
                    .split_once(',')
                    .ok_or_else(|| "data URI has no ',' separator".to_string())?;
                let media_type = header
                    .split(';')
                    .next()
                    .filter(|mt| !mt.is_empty())
                    .map(str::to_string);
                (media_type, payload)
            }
            None => (None, text),
        };

        let bytes = STANDARD.decode(payload).map_err(|e| e.to_string())?;
        Ok(Some(Self { media_type, bytes }))
    }

    /// Media type from the data URI header, when one was given.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Raw image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Re-encodes the image as a data URI, defaulting to PNG.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type().unwrap_or(DEFAULT_MEDIA_TYPE),
            STANDARD.encode(&self.bytes)
        )
    }
}
