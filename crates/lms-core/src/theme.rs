//! Theme Settings
//!
//! Shell appearance settings. Each setting lives under its own local storage
//! key; missing keys fall back to the defaults below.

use log::debug;

use crate::domain::DomainResult;
use crate::repository::KeyValueStorage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// "light", "dark" or "system"
    pub theme: String,
    /// "vertical", "collapsible-vertical" or "horizontal"
    pub menu: String,
    /// "full" or "boxed-layout"
    pub layout: String,
    /// "ltr" or "rtl"
    pub rtl_class: String,
    pub animation: String,
    /// "navbar-sticky", "navbar-floating" or "navbar-static"
    pub navbar: String,
    pub semidark: bool,
    pub sidebar: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            menu: "vertical".to_string(),
            layout: "full".to_string(),
            rtl_class: "ltr".to_string(),
            animation: String::new(),
            navbar: "navbar-sticky".to_string(),
            semidark: false,
            sidebar: false,
        }
    }
}

/// Storage keys, one per persisted setting
pub mod keys {
    pub const THEME: &str = "theme";
    pub const MENU: &str = "menu";
    pub const LAYOUT: &str = "layout";
    pub const RTL_CLASS: &str = "rtlClass";
    pub const ANIMATION: &str = "animation";
    pub const NAVBAR: &str = "navbar";
    pub const SEMIDARK: &str = "semidark";
}

impl ThemeConfig {
    /// Read every persisted setting, keeping the default for missing,
    /// empty or unreadable keys
    pub fn load(storage: &impl KeyValueStorage) -> Self {
        let mut config = Self::default();
        let read = |key: &str| storage.get_item(key).ok().flatten().filter(|v| !v.is_empty());

        if let Some(v) = read(keys::THEME) { config.theme = v; }
        if let Some(v) = read(keys::MENU) { config.menu = v; }
        if let Some(v) = read(keys::LAYOUT) { config.layout = v; }
        if let Some(v) = read(keys::RTL_CLASS) { config.rtl_class = v; }
        if let Some(v) = read(keys::ANIMATION) { config.animation = v; }
        if let Some(v) = read(keys::NAVBAR) { config.navbar = v; }
        if let Some(v) = read(keys::SEMIDARK) { config.semidark = v == "true"; }

        debug!("[Theme] loaded {:?}", config);
        config
    }

    /// Write every persisted setting
    pub fn persist(&self, storage: &impl KeyValueStorage) -> DomainResult<()> {
        storage.set_item(keys::THEME, &self.theme)?;
        storage.set_item(keys::MENU, &self.menu)?;
        storage.set_item(keys::LAYOUT, &self.layout)?;
        storage.set_item(keys::RTL_CLASS, &self.rtl_class)?;
        storage.set_item(keys::ANIMATION, &self.animation)?;
        storage.set_item(keys::NAVBAR, &self.navbar)?;
        storage.set_item(keys::SEMIDARK, if self.semidark { "true" } else { "false" })?;
        Ok(())
    }

    /// Semidark only darkens the sidebar, not the page
    pub fn is_dark(&self) -> bool {
        self.theme == "dark"
    }

    pub fn toggle_dark(&mut self) {
        self.theme = if self.theme == "dark" { "light".to_string() } else { "dark".to_string() };
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar = !self.sidebar;
    }

    /// Class list for the main shell element
    pub fn shell_class(&self) -> String {
        let mut classes = Vec::new();
        if self.sidebar {
            classes.push("toggle-sidebar");
        }
        for class in [&self.menu, &self.layout, &self.rtl_class] {
            if !class.is_empty() {
                classes.push(class.as_str());
            }
        }
        classes.push("main-section relative font-nunito text-sm font-normal antialiased");
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStorage;

    #[test]
    fn test_defaults_when_storage_empty() {
        let config = ThemeConfig::load(&MemoryStorage::new());
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_stored_keys_override_defaults() {
        let storage = MemoryStorage::new()
            .with_item(keys::THEME, "dark")
            .with_item(keys::RTL_CLASS, "rtl")
            .with_item(keys::SEMIDARK, "true")
            .with_item(keys::MENU, "");
        let config = ThemeConfig::load(&storage);
        assert_eq!(config.theme, "dark");
        assert_eq!(config.rtl_class, "rtl");
        assert!(config.semidark);
        assert_eq!(config.menu, "vertical");
    }

    #[test]
    fn test_semidark_is_not_dark_mode() {
        let storage = MemoryStorage::new()
            .with_item(keys::THEME, "light")
            .with_item(keys::SEMIDARK, "true");
        let config = ThemeConfig::load(&storage);
        assert!(config.semidark);
        assert!(!config.is_dark());
    }

    #[test]
    fn test_persist_round_trip() {
        let storage = MemoryStorage::new();
        let mut config = ThemeConfig::default();
        config.toggle_dark();
        config.navbar = "navbar-floating".to_string();
        config.persist(&storage).unwrap();

        let loaded = ThemeConfig::load(&storage);
        assert_eq!(loaded.theme, "dark");
        assert_eq!(loaded.navbar, "navbar-floating");
        assert!(loaded.is_dark());
    }

    #[test]
    fn test_shell_class() {
        let mut config = ThemeConfig::default();
        assert!(config.shell_class().starts_with("vertical full ltr main-section"));
        config.toggle_sidebar();
        assert!(config.shell_class().starts_with("toggle-sidebar vertical"));
    }
}
