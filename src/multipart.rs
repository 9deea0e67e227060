use chrono::Utc;

/// A single named part of a multipart body
#[derive(Debug, Clone)]
struct Part {
    name: String,
    filename: Option<String>,
    value: String,
}

/// Ordered multipart/form-data body builder.
///
/// Parts are serialized in insertion order with `\n` line endings, the
/// exact shape existing consumers of the upload endpoint are pinned to.
/// The boundary token is derived from the current time only; a collision
/// is possible for two bodies built within the same millisecond, and no
/// detection of the boundary literal inside part content is performed.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    boundary: String,
    parts: Vec<Part>,
}

impl MultipartBody {
    /// Create a body with a boundary hashed from the current time
    pub fn new() -> Self {
        let boundary = format!("{:x}", md5::compute(Utc::now().timestamp_millis().to_string()));
        Self::with_boundary(boundary)
    }

    /// Create a body with an explicit boundary token
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            parts: Vec::new(),
        }
    }

    /// The boundary token used between parts
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Content-Type header value announcing the boundary
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Append a plain text part
    pub fn add_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(Part {
            name: name.into(),
            filename: None,
            value: value.into(),
        });
        self
    }

    /// Append a file part carrying a filename
    pub fn add_file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.parts.push(Part {
            name: name.into(),
            filename: Some(filename.into()),
            value: content.into(),
        });
        self
    }

    /// Serialize all parts and the closing boundary marker
    pub fn encode(&self) -> String {
        let mut body = String::new();
        for part in &self.parts {
            body.push_str(&format!("--{}\n", self.boundary));
            match &part.filename {
                Some(filename) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\n\n",
                    part.name, filename
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"\n\n",
                    part.name
                )),
            }
            body.push_str(&part.value);
            body.push('\n');
        }
        body.push_str(&format!("--{}--\n", self.boundary));
        body
    }
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}
