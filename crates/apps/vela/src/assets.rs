//! Custom assets for Vela
//!
//! Sidebar icons are embedded from assets/icons; everything else falls
//! back to gpui-component-assets.

use gpui::{AssetSource, SharedString};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/icons"]
#[include = "*.svg"]
struct CustomIcons;

/// Combined asset source that checks custom icons first, then falls back to gpui-component-assets
pub struct VelaAssets;

impl AssetSource for VelaAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<std::borrow::Cow<'static, [u8]>>> {
        if let Some(icon_name) = path.strip_prefix("icons/") {
            if let Some(file) = CustomIcons::get(icon_name) {
                return Ok(Some(file.data));
            }
        }

        gpui_component_assets::Assets.load(path)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();

        if path.is_empty() || path == "icons" || path == "icons/" {
            for file in CustomIcons::iter() {
                results.push(format!("icons/{}", file).into());
            }
        }

        results.extend(gpui_component_assets::Assets.list(path)?);

        Ok(results)
    }
}

/// Sidebar icon names that implement IconNamed
pub mod icons {
    use folders::{ActionIcon, MenuIcon};
    use gpui::SharedString;
    use gpui_component::IconNamed;

    /// An embedded sidebar icon
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum SidebarIcon {
        Folder,
        Link,
        Edit,
        Delete,
        Menu,
        ArrowLeft,
        Settings,
        User,
        Archive,
        Lock,
    }

    impl SidebarIcon {
        fn file(self) -> &'static str {
            match self {
                SidebarIcon::Folder => "folder",
                SidebarIcon::Link => "link",
                SidebarIcon::Edit => "edit",
                SidebarIcon::Delete => "delete",
                SidebarIcon::Menu => "menu",
                SidebarIcon::ArrowLeft => "arrow-left",
                SidebarIcon::Settings => "settings",
                SidebarIcon::User => "user",
                SidebarIcon::Archive => "archive",
                SidebarIcon::Lock => "lock",
            }
        }
    }

    impl IconNamed for SidebarIcon {
        fn path(self) -> SharedString {
            format!("icons/{}.svg", self.file()).into()
        }
    }

    impl From<ActionIcon> for SidebarIcon {
        fn from(icon: ActionIcon) -> Self {
            match icon {
                ActionIcon::Link => SidebarIcon::Link,
                ActionIcon::Edit => SidebarIcon::Edit,
                ActionIcon::Delete => SidebarIcon::Delete,
            }
        }
    }

    impl From<MenuIcon> for SidebarIcon {
        fn from(icon: MenuIcon) -> Self {
            match icon {
                MenuIcon::Settings => SidebarIcon::Settings,
                MenuIcon::Contacts => SidebarIcon::User,
                MenuIcon::Archive => SidebarIcon::Archive,
            }
        }
    }
}
