//! Audio upload entity

use crate::errors::DomainError;

/// An audio recording uploaded by a client
///
/// Transient: read once per request, handed to the transcription service and
/// not retained. The format is intentionally not validated here; only the
/// external speech service decides what it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUpload {
    /// Original filename as supplied by the client, if any
    pub filename: Option<String>,
    /// Content type as supplied by the client, if any
    pub content_type: Option<String>,
    /// Raw audio bytes
    pub data: Vec<u8>,
}

impl AudioUpload {
    /// Create a new upload from raw bytes
    pub fn new(
        data: Vec<u8>,
        filename: Option<String>,
        content_type: Option<String>,
    ) -> Result<Self, DomainError> {
        if data.is_empty() {
            return Err(DomainError::InvalidAudio(
                "uploaded audio is empty".to_string(),
            ));
        }
        Ok(Self {
            filename,
            content_type,
            data,
        })
    }

    /// Size of the audio payload in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Filename to present upstream, with a fallback
    pub fn filename_or(&self, fallback: &str) -> String {
        self.filename
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Content type to present upstream, with a fallback
    pub fn content_type_or(&self, fallback: &str) -> String {
        self.content_type
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_keeps_metadata() {
        let upload = AudioUpload::new(
            vec![1, 2, 3],
            Some("clip.webm".to_string()),
            Some("audio/webm".to_string()),
        )
        .unwrap();

        assert_eq!(upload.size_bytes(), 3);
        assert_eq!(upload.filename_or("audio"), "clip.webm");
        assert_eq!(upload.content_type_or("application/octet-stream"), "audio/webm");
    }

    #[test]
    fn missing_metadata_falls_back() {
        let upload = AudioUpload::new(vec![0xFF], None, None).unwrap();

        assert_eq!(upload.filename_or("audio"), "audio");
        assert_eq!(
            upload.content_type_or("application/octet-stream"),
            "application/octet-stream"
        );
    }

    #[test]
    fn empty_upload_is_rejected() {
        let err = AudioUpload::new(Vec::new(), None, None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAudio(_)));
    }
}
