use axum::body::Bytes;
use axum::extract::Multipart;

/// Multipart field that carries the upload
pub const FILE_FIELD: &str = "file";

/// A file pulled out of a multipart request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Name as sent by the client, unsanitized
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    /// The first `file` field with a non-empty filename, if any.
    pub async fn from_multipart(
        mut multipart: Multipart,
    ) -> Result<Option<Self>, axum::extract::multipart::MultipartError> {
        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let file_name = match field.file_name() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => return Ok(None),
            };

            let bytes = field.bytes().await?;
            return Ok(Some(Self { file_name, bytes }));
        }

        Ok(None)
    }
}
