//! 偏好存储 - 类型化 bool/string 读写 + 按键名的变更通知流
//!
//! 单个 JSON 文档持久化在配置目录下，写入时加独占文件锁并用临时文件
//! 原子替换。每次写入对后续读取立即可见；不支持跨多个键的事务。

use anyhow::Result;
use serde_json::{Map, Value};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// 本层读取的设置键名
pub mod keys {
    /// 通知隐私："all" | "contact" | "none"
    pub const NOTIFICATION_PRIVACY: &str = "notification.privacy";
    /// 全局消息铃声 URI
    pub const MESSAGE_SOUND: &str = "notification.sound";
    /// 全局振动开关
    pub const MESSAGE_VIBRATE: &str = "notification.vibrate";
    /// LED 颜色（"none" 表示关闭）
    pub const LED_COLOR: &str = "notification.led.color";
    /// LED 闪烁模式 "on,off"（毫秒）
    pub const LED_BLINK_PATTERN: &str = "notification.led.blink";
    pub const THEME: &str = "app.theme";
    pub const LANGUAGE: &str = "app.language";
    pub const READ_RECEIPTS: &str = "privacy.read_receipts";
    pub const TYPING_INDICATORS: &str = "privacy.typing_indicators";
    pub const UNIDENTIFIED_DELIVERY_INDICATORS: &str = "privacy.unidentified_delivery_indicators";
    pub const LINK_PREVIEWS: &str = "privacy.link_previews";
    /// 推送是否已禁用
    pub const PUSH_DISABLED: &str = "push.disabled";
}

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// 偏好存储
pub struct PreferenceStore {
    path: PathBuf,
    values: Mutex<Map<String, Value>>,
    changes: broadcast::Sender<String>,
}

impl PreferenceStore {
    /// 默认存储文件路径
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("message-notify")
            .join("preferences.json")
    }

    /// 打开默认位置的存储
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path())
    }

    /// 打开指定路径的存储，已有文件会被载入
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = Self::load(&path);
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Ok(Self {
            path,
            values: Mutex::new(values),
            changes,
        })
    }

    /// 载入持久化文档；缺失或损坏时从空文档开始
    fn load(path: &Path) -> Map<String, Value> {
        if !path.exists() {
            return Map::new();
        }
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    warn!(path = %path.display(), "Malformed preference document, starting empty");
                    Map::new()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read preferences, starting empty");
                Map::new()
            }
        }
    }

    /// 订阅变更通知流（携带变更的键名）
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.changes.subscribe()
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .lock()
            .unwrap()
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .lock()
            .unwrap()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn put_bool(&self, key: &str, value: bool) -> Result<()> {
        self.put(key, Value::Bool(value))
    }

    pub fn put_string(&self, key: &str, value: impl Into<String>) -> Result<()> {
        self.put(key, Value::String(value.into()))
    }

    /// 写入一个键：更新内存值、持久化、广播变更
    fn put(&self, key: &str, value: Value) -> Result<()> {
        let snapshot = {
            let mut values = self.values.lock().unwrap();
            values.insert(key.to_string(), value);
            values.clone()
        };
        self.persist(&snapshot)?;
        debug!(key, "Preference updated");
        // 无订阅者时发送失败是正常情况
        let _ = self.changes.send(key.to_string());
        Ok(())
    }

    /// 持久化整个文档（独占锁 + 临时文件原子替换）
    fn persist(&self, values: &Map<String, Value>) -> Result<()> {
        use fs2::FileExt;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.path)?;
        lock_file.lock_exclusive()?;

        let temp_path = self.path.with_extension("tmp");
        let result = (|| -> Result<()> {
            fs::write(
                &temp_path,
                serde_json::to_vec_pretty(&Value::Object(values.clone()))?,
            )?;
            fs::rename(&temp_path, &self.path)?;
            Ok(())
        })();

        lock_file.unlock()?;
        result
    }
}
