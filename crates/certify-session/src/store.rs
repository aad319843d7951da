use certify_config::SessionConfig;
use certify_types::Role;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::data::Session;
use crate::keepalive::KeepAliveHandle;
use crate::storage::SessionStorage;

/// 会话在存储中使用的键名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    pub token: String,
    pub role: String,
    pub timestamp: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for SessionKeys {
    fn from(config: &SessionConfig) -> Self {
        Self {
            token: config.token_key.clone(),
            role: config.role_key.clone(),
            timestamp: config.timestamp_key.clone(),
        }
    }
}

/// 客户端会话：令牌、角色与签发时间
///
/// 过期检查是惰性的：只在 [`SessionStore::is_authenticated`] 被调用时进行，
/// 超过有效期的会话会在那一刻被清除。所有操作都不会失败，存储写入错误只记录日志。
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    clock: Arc<dyn Clock>,
    keys: SessionKeys,
    ttl: chrono::Duration,
}

impl SessionStore {
    /// 使用系统时钟和默认键名
    pub fn new(storage: Arc<dyn SessionStorage>, ttl: Duration) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock), ttl)
    }

    pub fn with_clock(storage: Arc<dyn SessionStorage>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            storage,
            clock,
            keys: SessionKeys::default(),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
        }
    }

    /// 按配置创建
    pub fn from_config(storage: Arc<dyn SessionStorage>, config: &SessionConfig) -> Self {
        Self::new(storage, config.token_expiry()).with_keys(SessionKeys::from(config))
    }

    pub fn with_keys(mut self, keys: SessionKeys) -> Self {
        self.keys = keys;
        self
    }

    /// 有效期
    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    /// 保存新会话，签发时间取当前时间
    pub fn set_session(&self, token: &str, role: Role) {
        if token.is_empty() {
            warn!("Refusing to store an empty token, clearing session instead");
            self.clear_session();
            return;
        }

        let issued_at = self.clock.now();
        self.write(&self.keys.token, token);
        self.write(&self.keys.role, role.as_str());
        self.write_timestamp(issued_at);

        info!(role = %role, "Session created");
    }

    /// 当前令牌（不检查过期）
    pub fn get_token(&self) -> Option<String> {
        self.storage
            .get(&self.keys.token)
            .filter(|token| !token.is_empty())
    }

    /// 当前角色；无法识别的角色视为不存在
    pub fn get_role(&self) -> Option<Role> {
        let raw = self.storage.get(&self.keys.role)?;
        match raw.parse() {
            Ok(role) => Some(role),
            Err(e) => {
                debug!(error = %e, "Ignoring unrecognized stored role");
                None
            }
        }
    }

    /// 签发时间
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.storage.get(&self.keys.timestamp)?;
        let millis: i64 = raw.trim().parse().ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }

    /// 是否已认证；会话过期时清除并返回 false
    pub fn is_authenticated(&self) -> bool {
        if self.get_token().is_none() {
            return false;
        }

        let Some(issued_at) = self.issued_at() else {
            warn!("Session token has no valid timestamp, clearing session");
            self.clear_session();
            return false;
        };

        let elapsed = self.clock.now().signed_duration_since(issued_at);
        if elapsed >= self.ttl {
            info!(
                elapsed_secs = elapsed.num_seconds(),
                ttl_secs = self.ttl.num_seconds(),
                "Session expired"
            );
            self.clear_session();
            return false;
        }

        true
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.get_role() == Some(Role::Admin)
    }

    pub fn is_student(&self) -> bool {
        self.is_authenticated() && self.get_role() == Some(Role::Student)
    }

    /// 清除会话，可重复调用
    pub fn clear_session(&self) {
        let had_token = self.storage.get(&self.keys.token).is_some();

        for key in [&self.keys.token, &self.keys.role, &self.keys.timestamp] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key = %key, error = %e, "Failed to remove session entry");
            }
        }

        if had_token {
            info!("Session cleared");
        }
    }

    /// 会话仍有效时把签发时间重置为当前时间
    pub fn refresh(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }

        self.write_timestamp(self.clock.now());
        debug!("Session refreshed");
        true
    }

    /// 当前会话快照
    pub fn snapshot(&self) -> Session {
        match self.get_token() {
            Some(token) => Session {
                token: Some(token),
                role: self.get_role(),
                issued_at: self.issued_at(),
            },
            None => Session::default(),
        }
    }

    /// 启动定期刷新任务；返回的句柄被丢弃时任务停止
    pub fn spawn_keepalive(self: &Arc<Self>, interval: Duration) -> KeepAliveHandle {
        KeepAliveHandle::spawn(self.clone(), interval)
    }

    fn write_timestamp(&self, at: DateTime<Utc>) {
        self.write(&self.keys.timestamp, &at.timestamp_millis().to_string());
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            warn!(key = %key, error = %e, "Failed to write session entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::MemoryStorage;

    fn store_with_clock() -> (SessionStore, Arc<ManualClock>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let clock = Arc::new(ManualClock::default());
        let store = SessionStore::with_clock(
            storage.clone(),
            clock.clone(),
            Duration::from_secs(30 * 60),
        );
        (store, clock, storage)
    }

    #[test]
    fn test_set_and_clear_session() {
        let (store, _clock, storage) = store_with_clock();
        assert!(!store.is_authenticated());

        store.set_session("abc123", Role::Admin);
        assert!(store.is_authenticated());
        assert!(store.is_admin());
        assert!(!store.is_student());
        assert_eq!(store.get_role(), Some(Role::Admin));
        assert_eq!(store.get_token(), Some("abc123".to_string()));

        store.clear_session();
        assert!(!store.is_authenticated());
        assert!(store.get_token().is_none());
        assert!(store.get_role().is_none());
        assert!(store.issued_at().is_none());
        assert!(storage.is_empty());

        // 幂等
        store.clear_session();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_student_session() {
        let (store, _clock, _storage) = store_with_clock();
        store.set_session("tok", Role::Student);
        assert!(store.is_student());
        assert!(!store.is_admin());
    }

    #[test]
    fn test_lazy_expiry_boundary() {
        let (store, clock, storage) = store_with_clock();
        store.set_session("abc123", Role::Admin);

        clock.advance(chrono::Duration::minutes(30) - chrono::Duration::milliseconds(1));
        assert!(store.is_authenticated());

        clock.advance(chrono::Duration::milliseconds(1));
        assert!(!store.is_authenticated());
        assert!(store.get_token().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_expired_role_checks_clear_session() {
        let (store, clock, _storage) = store_with_clock();
        store.set_session("abc123", Role::Student);

        clock.advance(chrono::Duration::hours(2));
        assert!(!store.is_student());
        assert!(store.get_role().is_none());
    }

    #[test]
    fn test_empty_token_clears_session() {
        let (store, _clock, storage) = store_with_clock();
        store.set_session("abc123", Role::Admin);
        store.set_session("", Role::Admin);

        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_missing_timestamp_is_invalid() {
        let (store, _clock, storage) = store_with_clock();
        storage.set("certify_api_token", "abc123").unwrap();
        storage.set("certify_user_type", "admin").unwrap();

        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_unknown_role_reads_as_absent() {
        let (store, _clock, storage) = store_with_clock();
        store.set_session("abc123", Role::Admin);
        storage.set("certify_user_type", "superuser").unwrap();

        assert!(store.is_authenticated());
        assert!(store.get_role().is_none());
        assert!(!store.is_admin());
    }

    #[test]
    fn test_refresh_slides_window() {
        let (store, clock, _storage) = store_with_clock();
        store.set_session("abc123", Role::Admin);

        clock.advance(chrono::Duration::minutes(20));
        assert!(store.refresh());

        clock.advance(chrono::Duration::minutes(20));
        assert!(store.is_authenticated());

        clock.advance(chrono::Duration::minutes(31));
        assert!(!store.refresh());
        assert!(store.get_token().is_none());
    }

    #[test]
    fn test_snapshot() {
        let (store, _clock, _storage) = store_with_clock();
        assert_eq!(store.snapshot(), Session::default());

        store.set_session("abc123", Role::Admin);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.token.as_deref(), Some("abc123"));
        assert_eq!(snapshot.role, Some(Role::Admin));
        assert!(snapshot.issued_at.is_some());
    }

    #[test]
    fn test_custom_keys_from_config() {
        let storage = Arc::new(MemoryStorage::new());
        let config = SessionConfig {
            token_key: "tk".to_string(),
            ..Default::default()
        };
        let store = SessionStore::from_config(storage.clone(), &config);
        store.set_session("abc123", Role::Admin);

        assert_eq!(storage.get("tk"), Some("abc123".to_string()));
        assert!(storage.get("certify_api_token").is_none());
    }
}
