//! 设置层 - 偏好存储、后台设置操作与设置界面模型

pub mod executor;
pub mod items;
pub mod repository;
pub mod screen;
pub mod store;

pub use executor::BoundedExecutor;
pub use items::{SettingsItem, SettingsPage};
pub use repository::{
    AccountSyncScheduler, ConfigurationUpdate, DisablePushResult, HttpPushService,
    HttpPushServiceConfig, PushRegistrationService, PushServiceError, SettingsRepository,
};
pub use screen::{FinishResult, ScreenEvent, SettingsScreen, StartLocation};
pub use store::{keys, PreferenceStore};
