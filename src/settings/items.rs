//! 设置列表模型 - 与渲染后端无关的偏好项
//!
//! 每种偏好项对应一个枚举变体；`SettingsPage` 持有有序项列表并
//! 提供摘要行渲染。真正的控件绑定由外部渲染协作方完成。

/// 一个设置列表项
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsItem {
    /// 小节标题
    SectionHeader { title: String },
    /// 纯文本项
    Text {
        title: String,
        summary: Option<String>,
    },
    /// 可点击项（动作由外部按 action_id 路由）
    Click {
        title: String,
        summary: Option<String>,
        enabled: bool,
        action_id: String,
    },
    /// 开关项（key 指向偏好存储键）
    Switch {
        title: String,
        summary: Option<String>,
        enabled: bool,
        checked: bool,
        key: String,
    },
    /// 单选列表项
    RadioList {
        title: String,
        entries: Vec<String>,
        selected: usize,
        key: String,
    },
    /// 多选列表项
    MultiSelectList {
        title: String,
        entries: Vec<String>,
        selected: Vec<bool>,
        key: String,
    },
    /// 外部链接项
    ExternalLink { title: String, url: String },
    /// 单选按钮项
    Radio { title: String, checked: bool },
    /// 分隔线
    Divider,
}

impl SettingsItem {
    /// 项是否可交互
    pub fn is_enabled(&self) -> bool {
        match self {
            SettingsItem::Click { enabled, .. } | SettingsItem::Switch { enabled, .. } => *enabled,
            SettingsItem::SectionHeader { .. } | SettingsItem::Divider => false,
            _ => true,
        }
    }

    /// 摘要文本（单选取当前选项，多选取逗号连接的已选项）
    pub fn summary(&self) -> Option<String> {
        match self {
            SettingsItem::Text { summary, .. } | SettingsItem::Click { summary, .. } => {
                summary.clone()
            }
            SettingsItem::Switch { summary, .. } => summary.clone(),
            SettingsItem::RadioList {
                entries, selected, ..
            } => entries.get(*selected).cloned(),
            SettingsItem::MultiSelectList {
                entries, selected, ..
            } => {
                let chosen: Vec<&str> = entries
                    .iter()
                    .zip(selected.iter())
                    .filter(|(_, &checked)| checked)
                    .map(|(entry, _)| entry.as_str())
                    .collect();
                if chosen.is_empty() {
                    Some("None".to_string())
                } else {
                    Some(chosen.join(", "))
                }
            }
            _ => None,
        }
    }

    /// 标题（分隔线无标题）
    pub fn title(&self) -> Option<&str> {
        match self {
            SettingsItem::SectionHeader { title }
            | SettingsItem::Text { title, .. }
            | SettingsItem::Click { title, .. }
            | SettingsItem::Switch { title, .. }
            | SettingsItem::RadioList { title, .. }
            | SettingsItem::MultiSelectList { title, .. }
            | SettingsItem::ExternalLink { title, .. }
            | SettingsItem::Radio { title, .. } => Some(title),
            SettingsItem::Divider => None,
        }
    }
}

/// 一个设置页面：有序项列表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPage {
    items: Vec<SettingsItem>,
}

impl SettingsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, item: SettingsItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(&self) -> &[SettingsItem] {
        &self.items
    }

    /// 渲染摘要行（每项一行，分隔线渲染为横线）
    pub fn render_lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| match item {
                SettingsItem::Divider => "---".to_string(),
                SettingsItem::SectionHeader { title } => format!("== {} ==", title),
                SettingsItem::Switch { title, checked, .. } => {
                    format!("{} [{}]", title, if *checked { "on" } else { "off" })
                }
                SettingsItem::ExternalLink { title, url } => format!("{} -> {}", title, url),
                SettingsItem::Radio { title, checked } => {
                    format!("({}) {}", if *checked { "x" } else { " " }, title)
                }
                other => match other.summary() {
                    Some(summary) => format!("{}: {}", other.title().unwrap_or(""), summary),
                    None => other.title().unwrap_or("").to_string(),
                },
            })
            .collect()
    }
}
