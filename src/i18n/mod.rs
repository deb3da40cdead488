//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Parse a config value such as `en`, `en-US` or `zh-CN`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::EnUS),
            "zh" => Some(Locale::ZhCN),
            _ => None,
        }
    }

    /// Short tag written back to the config file
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh",
        }
    }
}

/// Key -> (en, zh)
type TranslationTable = HashMap<&'static str, (&'static str, &'static str)>;

/// Translation resources
static TRANSLATIONS: OnceLock<TranslationTable> = OnceLock::new();

/// Initialize translations
fn init_translations() -> TranslationTable {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Art Institute Catalog", "芝加哥艺术博物馆藏品"));

    // Navigation
    map.insert("nav-lazy-table", ("Table Component 1", "表格组件 1"));
    map.insert("nav-eager-table", ("Table Component 2", "表格组件 2"));

    // Table columns
    map.insert("col-title", ("Title", "标题"));
    map.insert("col-origin", ("Place of Origin", "产地"));
    map.insert("col-artist", ("Artist", "艺术家"));
    map.insert("col-inscriptions", ("Inscriptions", "铭文"));
    map.insert("col-date-start", ("Start Date", "起始年代"));
    map.insert("col-date-end", ("End Date", "结束年代"));

    // Selection overlay
    map.insert("select-rows", ("Select rows...", "选择行数..."));
    map.insert("select-title", ("Select Rows", "选择行"));
    map.insert("select-submit", ("Submit", "提交"));
    map.insert("select-cancel", ("Cancel", "取消"));
    map.insert("select-running", ("Selecting...", "选择中..."));
    map.insert("select-count", ("Selected", "已选择"));
    map.insert("select-pending", ("Pending", "待选"));
    map.insert("select-all", ("Select all on page", "全选本页"));

    // Pagination
    map.insert("page-prev", ("Previous", "上一页"));
    map.insert("page-next", ("Next", "下一页"));
    map.insert("page-of", ("of", "/"));
    map.insert("page-items", ("items", "条"));

    // Errors
    map.insert(
        "error-generic",
        ("An error occurred. Please try again later.", "发生错误，请稍后重试。"),
    );

    // Log panel
    map.insert("log-title", ("Activity", "活动日志"));
    map.insert("log-clear", ("Clear", "清除"));

    // Table
    map.insert("table-no-data", ("No data", "无数据"));
    map.insert("table-loading", ("Loading...", "加载中..."));

    map
}

/// Get translations
fn translations() -> &'static TranslationTable {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a label followed by a count, e.g. `Selected: 12`
pub fn t_count(locale: Locale, key: &str, count: usize) -> SharedString {
    SharedString::from(format!("{}: {count}", t(locale, key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::EnUS));
        assert_eq!(Locale::from_tag("zh-CN"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_tag("EN_us"), Some(Locale::EnUS));
        assert_eq!(Locale::from_tag("fr"), None);
    }

    #[test]
    fn test_every_column_is_translated() {
        for field in crate::domain::artwork::ArtworkField::all() {
            let key = field.header_key();
            assert_ne!(t(Locale::EnUS, key).as_ref(), key);
            assert_ne!(t(Locale::ZhCN, key).as_ref(), key);
        }
    }

    #[test]
    fn test_paginator_labels_are_translated() {
        for key in ["page-prev", "page-next", "page-items"] {
            assert_ne!(t(Locale::EnUS, key).as_ref(), key);
            assert_ne!(t(Locale::ZhCN, key), t(Locale::EnUS, key));
        }
        assert_eq!(t(Locale::ZhCN, "page-items").as_ref(), "条");
    }

    #[test]
    fn test_missing_key_falls_back() {
        assert_eq!(t(Locale::EnUS, "no-such-key").as_ref(), "no-such-key");
        assert_eq!(t_count(Locale::EnUS, "select-count", 3).as_ref(), "Selected: 3");
    }
}
