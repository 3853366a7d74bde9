use crate::errors::{ApiError, ApiResult};
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// Multipart field the backend reads the file from
pub const UPLOAD_FIELD: &str = "file";

/// Raw file handed to the backend as-is
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub async fn from_path(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, bytes))
    }

    /// Wrap the blob into a one-field multipart form
    pub fn into_form(self) -> ApiResult<Form> {
        let mut part = Part::bytes(self.bytes).file_name(self.file_name);
        if let Some(mime) = self.mime {
            part = part.mime_str(&mime)?;
        }
        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}
