//! 设置屏幕外壳 - 入口定位与配置变更观察
//!
//! 从外部传入的整数代码解码起始位置（未知代码回退到首页），
//! 订阅偏好存储的变更流：主题或语言变更触发重建事件，
//! 语言变更同时置位 "配置已更新" 标记，关闭时据此上报结果。

use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;
use tracing::debug;

use super::store::{keys, PreferenceStore};

/// 设置界面的起始位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartLocation {
    Home,
    Backups,
    Help,
    Proxy,
    Notifications,
}

impl StartLocation {
    pub fn code(&self) -> i32 {
        match self {
            StartLocation::Home => 0,
            StartLocation::Backups => 1,
            StartLocation::Help => 2,
            StartLocation::Proxy => 3,
            StartLocation::Notifications => 4,
        }
    }

    /// 解码起始位置；未知或缺失的代码回退到首页
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(1) => StartLocation::Backups,
            Some(2) => StartLocation::Help,
            Some(3) => StartLocation::Proxy,
            Some(4) => StartLocation::Notifications,
            _ => StartLocation::Home,
        }
    }
}

/// 配置变更触发的界面事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// 主题变更，需要重建
    ThemeChanged,
    /// 语言变更，需要重建并通知宿主
    LanguageChanged,
}

/// 屏幕关闭时上报的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishResult {
    Ok,
    ConfigurationChanged,
}

/// 设置屏幕外壳
pub struct SettingsScreen {
    start_location: StartLocation,
    changes: Receiver<String>,
    configuration_updated: bool,
}

impl SettingsScreen {
    pub fn new(store: &PreferenceStore, start_code: Option<i32>) -> Self {
        let start_location = StartLocation::from_code(start_code);
        debug!(?start_location, "Settings screen created");
        Self {
            start_location,
            changes: store.subscribe(),
            configuration_updated: false,
        }
    }

    pub fn start_location(&self) -> StartLocation {
        self.start_location
    }

    /// 排空已到达的配置变更并映射为界面事件
    pub fn poll_events(&mut self) -> Vec<ScreenEvent> {
        let mut events = Vec::new();
        loop {
            match self.changes.try_recv() {
                Ok(key) => {
                    if let Some(event) = self.on_setting_changed(&key) {
                        events.push(event);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                // 落后于广播缓冲时丢弃错过的键，继续消费
                Err(TryRecvError::Lagged(_)) => continue,
            }
        }
        events
    }

    fn on_setting_changed(&mut self, key: &str) -> Option<ScreenEvent> {
        match key {
            keys::THEME => Some(ScreenEvent::ThemeChanged),
            keys::LANGUAGE => {
                self.configuration_updated = true;
                Some(ScreenEvent::LanguageChanged)
            }
            _ => None,
        }
    }

    /// 关闭时的结果
    pub fn finish_result(&self) -> FinishResult {
        if self.configuration_updated {
            FinishResult::ConfigurationChanged
        } else {
            FinishResult::Ok
        }
    }
}
