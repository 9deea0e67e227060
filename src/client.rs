use futures::future::try_join_all;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client_config::ClientConfig;
use crate::errors::ClientError;
use crate::multipart::MultipartBody;
use crate::request::QueryParams;
use crate::signing::sign;
use crate::transport::http::HttpTransport;
use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Public endpoint of the OneSky platform API
const API_URL: &str = "https://platform.api.onesky.io/1";

/// A project language as returned by the remote service
///
/// The record is treated opaquely except for its code; unknown fields in
/// the payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    /// Locale code, e.g. `fr` or `zh-CN`
    pub code: String,
}

/// Languages payload wrapper
#[derive(Debug, Deserialize)]
struct LanguageList {
    data: Vec<Language>,
}

/// One fetched translation export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    /// Locale code the export was requested for
    pub language: String,

    /// Raw export file content; the format is determined by the server
    pub text: String,
}

/// An ordered set of locale codes
///
/// Normalizes the accepted inputs of a translation fetch: a single code or
/// an ordered sequence of codes.
#[derive(Debug, Clone)]
pub struct LocaleSet(Vec<String>);

impl LocaleSet {
    /// The codes in request order
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for LocaleSet {
    fn from(code: &str) -> Self {
        Self(vec![code.to_string()])
    }
}

impl From<String> for LocaleSet {
    fn from(code: String) -> Self {
        Self(vec![code])
    }
}

impl From<Vec<String>> for LocaleSet {
    fn from(codes: Vec<String>) -> Self {
        Self(codes)
    }
}

impl From<&[&str]> for LocaleSet {
    fn from(codes: &[&str]) -> Self {
        Self(codes.iter().map(|code| code.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LocaleSet {
    fn from(codes: [&str; N]) -> Self {
        Self(codes.iter().map(|code| code.to_string()).collect())
    }
}

/// OneSky client for interacting with the translation-management API
///
/// The client composes signed URLs and delegates every HTTP exchange to
/// the injected transport; it performs no socket I/O itself. Configuration
/// is captured per instance, so independently configured clients can
/// coexist in one process.
#[derive(Debug, Clone)]
pub struct OneSkyClient<T: Transport> {
    /// Credentials and project identity
    config: ClientConfig,
    /// Transport every request is dispatched through
    transport: T,
    /// API endpoint, defaults to the public platform URL
    base_url: String,
}

impl OneSkyClient<HttpTransport> {
    /// Create a client over the production HTTP transport
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> OneSkyClient<T> {
    /// Create a client over an explicit transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        config.validate()?;
        Ok(Self {
            config,
            transport,
            base_url: API_URL.to_string(),
        })
    }

    /// Override the API endpoint, e.g. for a staging environment
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("Invalid base URL {}: {}", base_url, e)))?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Compose the full signed URL for a resource path
    ///
    /// Parameters merge in order: `api_key`, the freshly computed
    /// signature pair, then caller params. The merge is a flat mapping, so
    /// a caller param named `api_key`, `dev_hash`, or `timestamp` replaces
    /// the authentication field.
    fn signed_url(&self, resource_path: &str, extra: QueryParams) -> String {
        let signature = sign(&self.config.secret);
        let mut params = QueryParams::new()
            .with("api_key", self.config.api_key.as_str())
            .with("dev_hash", signature.dev_hash)
            .with("timestamp", signature.timestamp.to_string());
        params.merge(extra);
        format!("{}{}?{}", self.base_url, resource_path, params.encode())
    }

    /// Sign and dispatch one request
    async fn request(
        &self,
        resource_path: &str,
        params: QueryParams,
        request: TransportRequest,
    ) -> Result<TransportResponse, ClientError> {
        let url = self.signed_url(resource_path, params);
        debug!("{} {}", request.method.as_str(), resource_path);
        self.transport.send(&url, request).await
    }

    /// List the languages configured for the project
    ///
    /// # Returns
    /// * `Result<Vec<Language>, ClientError>` - The `data` field of the
    ///   languages payload, or an API error for any status above 299
    pub async fn fetch_languages(&self) -> Result<Vec<Language>, ClientError> {
        let resource_path = format!("/projects/{}/languages", self.config.project_id);
        let response = self
            .request(&resource_path, QueryParams::new(), TransportRequest::get())
            .await?;

        if response.status > 299 {
            error!("Error fetching languages: {}", response.status_message);
            return Err(ClientError::Api {
                status_code: response.status,
                message: response.status_message,
            });
        }

        let payload: LanguageList = response.json()?;
        Ok(payload.data)
    }

    /// Fetch translation exports of a source file for the given locales
    ///
    /// One request per locale is issued; the requests run concurrently and
    /// are joined with abort-on-first-error semantics. On success the
    /// results are in the same order as the requested locales, regardless
    /// of completion order.
    ///
    /// # Arguments
    /// * `languages` - A single locale code or an ordered sequence of codes
    /// * `file_name` - The source file identifier on the remote service
    pub async fn fetch_translations(
        &self,
        languages: impl Into<LocaleSet>,
        file_name: &str,
    ) -> Result<Vec<TranslationResult>, ClientError> {
        let locales = languages.into().into_vec();
        let fetches = locales
            .iter()
            .map(|locale| self.fetch_translation(locale, file_name));
        try_join_all(fetches).await
    }

    /// Fetch the translation export of a source file for one locale
    async fn fetch_translation(
        &self,
        locale: &str,
        file_name: &str,
    ) -> Result<TranslationResult, ClientError> {
        let params = QueryParams::new()
            .with("locale", locale)
            .with("source_file_name", file_name)
            .with("export_file_name", format!("{}.json", locale));
        let resource_path = format!("/projects/{}/translations", self.config.project_id);
        let response = self
            .request(&resource_path, params, TransportRequest::get())
            .await?;

        if response.status > 299 {
            error!(
                "Error fetching translations for {}: {}",
                locale, response.status_message
            );
            return Err(ClientError::Api {
                status_code: response.status,
                message: response.status_message,
            });
        }

        Ok(TranslationResult {
            language: locale.to_string(),
            text: response.into_text(),
        })
    }

    /// Fetch translation exports of a source file for every project language
    ///
    /// Composes [`fetch_languages`](Self::fetch_languages) and
    /// [`fetch_translations`](Self::fetch_translations); fails with
    /// whichever error either step produces, returning no partial result.
    pub async fn fetch_all_translations(
        &self,
        file_name: &str,
    ) -> Result<Vec<TranslationResult>, ClientError> {
        let languages = self.fetch_languages().await?;
        let codes: Vec<String> = languages
            .into_iter()
            .map(|language| language.code)
            .collect();
        self.fetch_translations(codes, file_name).await
    }

    /// Upload a source file for translation
    ///
    /// The multipart body carries the file part, the `file_format` part,
    /// then one part per option in insertion order.
    ///
    /// Unlike the fetch operations, the response status is NOT validated
    /// here: a 4xx/5xx upload resolves `Ok` and the caller must inspect
    /// `status` on the returned response. Transport-level failures still
    /// surface as errors.
    ///
    /// # Arguments
    /// * `content` - File content to upload
    /// * `file_name` - Name the file is stored under remotely
    /// * `file_format` - Format identifier understood by the service
    /// * `options` - Additional form fields, in the order they should appear
    pub async fn upload_file(
        &self,
        content: &str,
        file_name: &str,
        file_format: &str,
        options: &[(&str, &str)],
    ) -> Result<TransportResponse, ClientError> {
        let mut body = MultipartBody::new()
            .add_file("file", file_name, content)
            .add_text("file_format", file_format);
        for (name, value) in options {
            body = body.add_text(*name, *value);
        }

        let headers = vec![("Content-Type".to_string(), body.content_type())];
        let resource_path = format!("/projects/{}/files", self.config.project_id);
        self.request(
            &resource_path,
            QueryParams::new(),
            TransportRequest::post(headers, body.encode()),
        )
        .await
    }
}
