//! 设置仓库 - 推送注册与密封发送者状态同步的后台操作
//!
//! 所有操作提交到有界执行器，结果通过回调在工作线程上交付，
//! 绝不向调用方抛出：网络失败以 `DisablePushResult::NetworkError`
//! 报告；撤销令牌时的鉴权失败记录日志后按已撤销处理（撤销是幂等的）。

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::executor::BoundedExecutor;
use super::store::{keys, PreferenceStore};

/// 推送服务错误：网络错误可恢复，鉴权错误在撤销场景下非致命
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushServiceError {
    Network(String),
    Authorization(String),
}

impl fmt::Display for PushServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushServiceError::Network(msg) => write!(f, "network error: {}", msg),
            PushServiceError::Authorization(msg) => write!(f, "authorization failed: {}", msg),
        }
    }
}

impl std::error::Error for PushServiceError {}

/// 禁用推送的结果（显式结果枚举，不抛异常）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisablePushResult {
    Success,
    NetworkError,
}

/// 推送注册服务协作方
pub trait PushRegistrationService: Send + Sync {
    /// 在账号服务上撤销推送注册令牌
    fn revoke_registration_token(&self) -> Result<(), PushServiceError>;
    /// 删除本地推送实例 ID
    fn delete_instance_id(&self) -> Result<(), PushServiceError>;
}

/// 多设备配置更新载荷（从当前偏好取值）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationUpdate {
    pub read_receipts: bool,
    pub typing_indicators: bool,
    pub unidentified_delivery_indicators: bool,
    pub link_previews: bool,
}

/// 存储同步调度协作方
pub trait AccountSyncScheduler: Send + Sync {
    /// 标记本人记录需要存储同步
    fn mark_self_needs_sync(&self);
    /// 调度一次多设备配置更新
    fn schedule_configuration_update(&self, update: ConfigurationUpdate);
}

/// 设置仓库
pub struct SettingsRepository {
    store: Arc<PreferenceStore>,
    push_service: Arc<dyn PushRegistrationService>,
    sync_scheduler: Arc<dyn AccountSyncScheduler>,
    executor: Arc<BoundedExecutor>,
}

impl SettingsRepository {
    pub fn new(
        store: Arc<PreferenceStore>,
        push_service: Arc<dyn PushRegistrationService>,
        sync_scheduler: Arc<dyn AccountSyncScheduler>,
        executor: Arc<BoundedExecutor>,
    ) -> Self {
        Self {
            store,
            push_service,
            sync_scheduler,
            executor,
        }
    }

    /// 禁用推送消息。结果通过 `consumer` 在工作线程上交付一次。
    pub fn disable_push_messages<F>(&self, consumer: F)
    where
        F: FnOnce(DisablePushResult) + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let push_service = Arc::clone(&self.push_service);

        self.executor.execute(move || {
            let result = Self::disable_push_inner(&store, push_service.as_ref());
            consumer(result);
        });
    }

    fn disable_push_inner(
        store: &PreferenceStore,
        push_service: &dyn PushRegistrationService,
    ) -> DisablePushResult {
        match push_service.revoke_registration_token() {
            Ok(()) => {}
            Err(PushServiceError::Authorization(msg)) => {
                // 鉴权失败说明令牌已不可用，按已撤销处理
                warn!(error = %msg, "Authorization failure revoking push token, treating as revoked");
            }
            Err(PushServiceError::Network(msg)) => {
                warn!(error = %msg, "Network failure revoking push token");
                return DisablePushResult::NetworkError;
            }
        }

        if !store.get_bool(keys::PUSH_DISABLED, false) {
            if let Err(e) = push_service.delete_instance_id() {
                warn!(error = %e, "Failed to delete push instance id");
                return DisablePushResult::NetworkError;
            }
        }

        info!("Push messages disabled");
        DisablePushResult::Success
    }

    /// 同步密封发送者指示器状态：标记本人需要同步并调度配置更新
    pub fn sync_sealed_sender_state(&self) {
        let store = Arc::clone(&self.store);
        let sync_scheduler = Arc::clone(&self.sync_scheduler);

        self.executor.execute(move || {
            sync_scheduler.mark_self_needs_sync();
            sync_scheduler.schedule_configuration_update(ConfigurationUpdate {
                read_receipts: store.get_bool(keys::READ_RECEIPTS, false),
                typing_indicators: store.get_bool(keys::TYPING_INDICATORS, false),
                unidentified_delivery_indicators: store
                    .get_bool(keys::UNIDENTIFIED_DELIVERY_INDICATORS, false),
                link_previews: store.get_bool(keys::LINK_PREVIEWS, true),
            });
            info!("Sealed sender state sync scheduled");
        });
    }
}

/// 基于 HTTP 的推送注册服务实现
#[derive(Debug, Clone)]
pub struct HttpPushServiceConfig {
    /// 账号服务地址（如 http://localhost:8090）
    pub base_url: String,
    /// Bearer 令牌
    pub auth_token: String,
    /// 超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpPushServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090".to_string(),
            auth_token: String::new(),
            timeout_secs: 30,
        }
    }
}

/// 通过账号服务 HTTP API 管理推送注册
pub struct HttpPushService {
    client: reqwest::blocking::Client,
    config: HttpPushServiceConfig,
}

impl HttpPushService {
    pub fn new(config: HttpPushServiceConfig) -> Result<Self, PushServiceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PushServiceError::Network(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn delete(&self, path: &str) -> Result<(), PushServiceError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.config.auth_token))
            .send()
            .map_err(|e| PushServiceError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            Err(PushServiceError::Authorization(format!(
                "{} returned {}",
                path, status
            )))
        } else {
            Err(PushServiceError::Network(format!(
                "{} returned {}",
                path, status
            )))
        }
    }
}

impl PushRegistrationService for HttpPushService {
    fn revoke_registration_token(&self) -> Result<(), PushServiceError> {
        self.delete("/v1/accounts/push-token")
    }

    fn delete_instance_id(&self) -> Result<(), PushServiceError> {
        self.delete("/v1/push/instance-id")
    }
}
