use certify_config::{ClientConfig, MessagesConfig};
use certify_notify::{LoadingGuard, LoadingIndicator, Notifier, NotifyMessage};
use certify_session::SessionStore;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::download::FileSaver;
use crate::error::{ApiError, Result};
use crate::options::{RequestBody, RequestOptions};
use crate::payload::{extract_detail, parse_lenient, Payload};
use crate::url_builder::UrlBuilder;

/// 请求网关：执行一次 HTTP 交互并把结果归一化为 [`Payload`] 或 [`ApiError`]
///
/// 克隆开销很小，所有协作者都由 `Arc` 共享。
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    urls: UrlBuilder,
    session: Arc<SessionStore>,
    messages: Arc<MessagesConfig>,
    binary_types: Arc<Vec<String>>,
    pub(crate) notifier: Option<Arc<dyn Notifier>>,
    loading: Option<Arc<dyn LoadingIndicator>>,
    pub(crate) saver: Option<Arc<dyn FileSaver>>,
}

/// [`ApiClient`] 构建器
pub struct ApiClientBuilder {
    config: ClientConfig,
    session: Arc<SessionStore>,
    notifier: Option<Arc<dyn Notifier>>,
    loading: Option<Arc<dyn LoadingIndicator>>,
    saver: Option<Arc<dyn FileSaver>>,
}

impl ApiClientBuilder {
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn loading(mut self, indicator: Arc<dyn LoadingIndicator>) -> Self {
        self.loading = Some(indicator);
        self
    }

    pub fn file_saver(mut self, saver: Arc<dyn FileSaver>) -> Self {
        self.saver = Some(saver);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let api = &self.config.api;
        if api.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }

        let http = Client::builder()
            .timeout(api.request_timeout())
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        let binary_types = api
            .binary_content_types
            .iter()
            .map(|t| t.trim().to_ascii_lowercase())
            .collect();

        Ok(ApiClient {
            http,
            urls: UrlBuilder::from_config(api),
            session: self.session,
            messages: Arc::new(self.config.messages),
            binary_types: Arc::new(binary_types),
            notifier: self.notifier,
            loading: self.loading,
            saver: self.saver,
        })
    }
}

impl ApiClient {
    pub fn builder(config: &ClientConfig, session: Arc<SessionStore>) -> ApiClientBuilder {
        ApiClientBuilder {
            config: config.clone(),
            session,
            notifier: None,
            loading: None,
            saver: None,
        }
    }

    /// 使用默认协作者（无通知、无加载指示、无文件保存）
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Result<Self> {
        Self::builder(config, session).build()
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn messages(&self) -> &MessagesConfig {
        &self.messages
    }

    pub fn build_url(&self, endpoint: &str) -> String {
        self.urls.build(endpoint)
    }

    /// 发送请求
    ///
    /// 失败时错误消息会同时报告给通知器；401 会先清除会话。
    pub async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<Payload> {
        let _loading = LoadingGuard::new(self.loading.clone());

        let result = self.execute(endpoint, options).await;
        if let Err(err) = &result {
            self.notify(NotifyMessage::error(err.message())).await;
        }
        result
    }

    pub async fn get(&self, endpoint: &str) -> Result<Payload> {
        self.send(endpoint, RequestOptions::get()).await
    }

    pub async fn post(&self, endpoint: &str, body: impl Into<RequestBody>) -> Result<Payload> {
        self.send(endpoint, RequestOptions::post().body(body)).await
    }

    pub async fn put(&self, endpoint: &str, body: impl Into<RequestBody>) -> Result<Payload> {
        self.send(endpoint, RequestOptions::put().body(body)).await
    }

    pub async fn patch(&self, endpoint: &str, body: impl Into<RequestBody>) -> Result<Payload> {
        self.send(endpoint, RequestOptions::patch().body(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Payload> {
        self.send(endpoint, RequestOptions::delete()).await
    }

    /// 以 `application/x-www-form-urlencoded` 提交表单
    pub async fn post_form<K, V>(&self, endpoint: &str, pairs: &[(K, V)]) -> Result<Payload>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.post(endpoint, RequestBody::form(pairs)).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.get(endpoint).await?.json()
    }

    pub async fn post_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.post(endpoint, RequestBody::json(body)?).await?.json()
    }

    pub async fn put_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.put(endpoint, RequestBody::json(body)?).await?.json()
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.delete(endpoint).await?.json()
    }

    /// 尽力而为地发送通知，失败只记录日志
    pub(crate) async fn notify(&self, message: NotifyMessage) {
        let Some(notifier) = &self.notifier else {
            return;
        };
        if !notifier.is_enabled() {
            return;
        }

        match notifier.send(&message).await {
            Ok(result) if !result.success => {
                warn!("Notification failed via {}: {}", notifier.name(), result.message);
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Notification error via {}: {}", notifier.name(), e);
            }
        }
    }

    async fn execute(&self, endpoint: &str, options: RequestOptions) -> Result<Payload> {
        let RequestOptions {
            method,
            headers: extra_headers,
            body,
            skip_auth,
            timeout,
        } = options;

        let url = self.build_url(endpoint);
        let mut headers = self.default_headers(&body, skip_auth);
        headers.extend(extra_headers);

        debug!(method = %method, url = %url, "Sending request");

        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Form(pairs) => request.form(&pairs),
            RequestBody::Raw { bytes, .. } => request.body(bytes),
        };

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(&method, &url, e))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            content_type = %content_type,
            "Response received"
        );

        if self.is_binary(&content_type) {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| self.transport_error(&method, &url, e))?;

            if status.is_success() {
                return Ok(Payload::Binary {
                    bytes: bytes.to_vec(),
                    content_type,
                });
            }
            return Err(self.classify(status, &Value::Null));
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(&method, &url, e))?;
        let data = parse_lenient(&text);

        if status.is_success() {
            Ok(Payload::Json(data))
        } else {
            Err(self.classify(status, &data))
        }
    }

    fn default_headers(&self, body: &RequestBody, skip_auth: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();

        match body {
            RequestBody::Form(_) => {
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
            }
            RequestBody::Raw { content_type, .. } => match HeaderValue::from_str(content_type) {
                Ok(value) => {
                    headers.insert(CONTENT_TYPE, value);
                }
                Err(_) => warn!("Invalid raw body content type: {}", content_type),
            },
            _ if body.wants_json_content_type() => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            _ => {}
        }

        if !skip_auth {
            if let Some(token) = self.session.get_token() {
                match HeaderValue::from_str(&format!("Bearer {}", token)) {
                    Ok(mut value) => {
                        value.set_sensitive(true);
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(_) => warn!("Stored token is not a valid header value, sending without it"),
                }
            }
        }

        headers
    }

    fn is_binary(&self, content_type: &str) -> bool {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        !essence.is_empty() && self.binary_types.iter().any(|t| *t == essence)
    }

    fn classify(&self, status: StatusCode, data: &Value) -> ApiError {
        let detail = extract_detail(data);

        match status {
            StatusCode::UNAUTHORIZED => {
                info!("Received 401, clearing session");
                self.session.clear_session();
                ApiError::Unauthorized(self.messages.unauthorized.clone())
            }
            StatusCode::FORBIDDEN => ApiError::Forbidden(self.messages.forbidden.clone()),
            StatusCode::NOT_FOUND => {
                ApiError::NotFound(detail.unwrap_or_else(|| self.messages.not_found.clone()))
            }
            s if s.is_server_error() => ApiError::Server(self.messages.server.clone()),
            _ => ApiError::Validation(detail.unwrap_or_else(|| self.messages.validation.clone())),
        }
    }

    fn transport_error(&self, method: &Method, url: &str, err: reqwest::Error) -> ApiError {
        warn!(method = %method, url = %url, error = %err, "Request failed");

        if err.is_builder() {
            ApiError::Config(err.to_string())
        } else {
            ApiError::Network(self.messages.network.clone())
        }
    }
}
