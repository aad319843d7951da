use certify_config::ApiConfig;

/// 把逻辑路径解析为完整 URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
    api_version: String,
}

impl UrlBuilder {
    pub fn new(base_url: impl Into<String>, api_version: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let api_version = api_version.into();
        let api_version = api_version.trim().trim_matches('/');
        let api_version = if api_version.is_empty() {
            String::new()
        } else {
            format!("/{}", api_version)
        };

        Self {
            base_url,
            api_version,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, &config.api_version)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// 完整 URL 原样返回；已带版本前缀的路径只补充基地址
    pub fn build(&self, endpoint: &str) -> String {
        if is_absolute(endpoint) {
            return endpoint.to_string();
        }

        let path = if endpoint.starts_with('/') {
            endpoint.to_string()
        } else {
            format!("/{}", endpoint)
        };

        if self.has_version_prefix(&path) {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}{}", self.base_url, self.api_version, path)
        }
    }

    /// 去掉基地址，得到以版本前缀开头的相对路径
    pub fn relative<'a>(&self, url: &'a str) -> &'a str {
        url.strip_prefix(self.base_url.as_str()).unwrap_or(url)
    }

    fn has_version_prefix(&self, path: &str) -> bool {
        if self.api_version.is_empty() {
            return true;
        }

        match path.strip_prefix(self.api_version.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
            None => false,
        }
    }
}

fn is_absolute(endpoint: &str) -> bool {
    endpoint.starts_with("http://") || endpoint.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> UrlBuilder {
        UrlBuilder::new("http://localhost:8000/", "/api/v1")
    }

    #[test]
    fn test_build_relative_path() {
        assert_eq!(builder().build("/courses/"), "http://localhost:8000/api/v1/courses/");
        assert_eq!(builder().build("courses/3"), "http://localhost:8000/api/v1/courses/3");
    }

    #[test]
    fn test_absolute_url_unchanged() {
        let url = "https://cdn.example.org/file.pdf";
        assert_eq!(builder().build(url), url);
    }

    #[test]
    fn test_version_prefix_not_doubled() {
        assert_eq!(
            builder().build("/api/v1/certificates/5/download"),
            "http://localhost:8000/api/v1/certificates/5/download"
        );
        assert_eq!(builder().build("/api/v1"), "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_similar_prefix_is_not_version() {
        assert_eq!(
            builder().build("/api/v10/items"),
            "http://localhost:8000/api/v1/api/v10/items"
        );
    }

    #[test]
    fn test_build_is_idempotent_on_relative_form() {
        let b = builder();
        for path in ["/courses/", "/enrollments/?class_id=4", "validate/abc", "/api/v1/students/me"] {
            let once = b.build(path);
            let twice = b.build(b.relative(&once));
            assert_eq!(once, twice);
            assert_eq!(once.matches("/api/v1").count(), 1);
        }
    }

    #[test]
    fn test_empty_version() {
        let b = UrlBuilder::new("http://localhost:8000", "");
        assert_eq!(b.build("/courses/"), "http://localhost:8000/courses/");
    }
}
