//! Sidebar shell: the main menu trigger and its navigation dropdown
//!
//! Holds no folder logic. The folder strip is projected separately and
//! placed under the trigger by the app.

use crate::lang::Lang;
use crate::settings::{LayoutMode, ReleaseChannel};

pub const APP_NAME: &str = "Vela";

/// Window width at or below which the compact chrome is used
pub const MOBILE_SCREEN_MAX_WIDTH: f32 = 600.0;

/// Horizontal offset of the dropdown's transform origin on macOS, clearing
/// the traffic-light buttons
const MAC_TRANSFORM_ORIGIN_X: f32 = 90.0;

/// Content of the left column selected from the main menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LeftColumnContent {
    #[default]
    ChatList,
    Settings,
    Contacts,
    Archived,
}

/// Device form factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub is_mobile: bool,
}

impl AppLayout {
    pub fn from_width(width: f32, mode: LayoutMode) -> Self {
        let is_mobile = match mode {
            LayoutMode::Auto => width <= MOBILE_SCREEN_MAX_WIDTH,
            LayoutMode::Mobile => true,
            LayoutMode::Desktop => false,
        };
        Self { is_mobile }
    }
}

/// Side of the trigger the dropdown opens towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAlignment {
    Left,
    Right,
}

/// Icon of a main menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Settings,
    Contacts,
    Archive,
}

/// An entry of the main menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub icon: MenuIcon,
    pub target: LeftColumnContent,
}

/// Presentation of the menu trigger button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerButton {
    pub aria_label: String,
    pub ripple: bool,
    /// Icon morph animation; off when transitions are skipped
    pub animated: bool,
    pub is_active: bool,
}

/// Build identity shown in the menu footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub revision: String,
    pub channel: ReleaseChannel,
}

impl VersionInfo {
    /// Version of this build
    pub fn current(channel: ReleaseChannel) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            revision: option_env!("VELA_REVISION").unwrap_or("dev").to_string(),
            channel,
        }
    }

    pub fn display(&self) -> String {
        match self.channel {
            ReleaseChannel::Stable => self.version.clone(),
            ReleaseChannel::Beta => format!("{} Beta ({})", self.version, self.revision),
            ReleaseChannel::Debug => self.revision.clone(),
        }
    }
}

/// Host window facts that affect menu placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowChrome {
    pub is_macos: bool,
    pub is_fullscreen: bool,
}

/// Main menu state
#[derive(Debug, Clone, Default)]
pub struct SidebarShell {
    menu_open: bool,
    skip_transition: bool,
    /// Set when an outside press closed the menu; the click completing on
    /// the trigger must not reopen it
    dismissed_by_press: bool,
}

impl SidebarShell {
    pub fn new(skip_transition: bool) -> Self {
        Self {
            menu_open: false,
            skip_transition,
            dismissed_by_press: false,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Toggle from the keyboard or any source other than a trigger click
    pub fn toggle_menu(&mut self) {
        self.dismissed_by_press = false;
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A new pointer press started inside the sidebar
    pub fn pointer_down(&mut self) {
        self.dismissed_by_press = false;
    }

    /// A press landed outside the open menu
    pub fn dismiss_outside(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            self.dismissed_by_press = true;
        }
    }

    /// Click completed on the trigger button
    ///
    /// When the same press already closed the menu from outside, the menu
    /// stays closed.
    pub fn trigger_clicked(&mut self) {
        if std::mem::take(&mut self.dismissed_by_press) {
            return;
        }
        self.menu_open = !self.menu_open;
    }

    /// Pick a menu entry: closes the menu and reports the new content
    pub fn select(&mut self, target: LeftColumnContent, on_content_change: impl FnOnce(LeftColumnContent)) {
        self.menu_open = false;
        on_content_change(target);
    }

    pub fn trigger(&self, lang: &Lang, layout: AppLayout) -> TriggerButton {
        let aria_label = if layout.is_mobile {
            lang.get("Return")
        } else {
            lang.get("AccDescrOpenMenu2")
        };
        TriggerButton {
            aria_label,
            ripple: !layout.is_mobile,
            animated: !self.skip_transition,
            is_active: self.menu_open,
        }
    }

    pub fn menu_entries(&self, lang: &Lang) -> Vec<MenuEntry> {
        [
            ("Settings", MenuIcon::Settings, LeftColumnContent::Settings),
            ("Contacts", MenuIcon::Contacts, LeftColumnContent::Contacts),
            ("ArchivedChats", MenuIcon::Archive, LeftColumnContent::Archived),
        ]
        .into_iter()
        .map(|(key, icon, target)| MenuEntry {
            label: lang.get(key),
            icon,
            target,
        })
        .collect()
    }

    /// Footer line: app name and version
    pub fn footer(&self, version: &VersionInfo) -> String {
        format!("{} {}", APP_NAME, version.display())
    }

    pub fn alignment(&self, lang: &Lang) -> MenuAlignment {
        if lang.is_rtl() {
            MenuAlignment::Right
        } else {
            MenuAlignment::Left
        }
    }

    /// RTL menus open without the slide transition
    pub fn disable_transition(&self, lang: &Lang) -> bool {
        lang.is_rtl()
    }

    pub fn transform_origin_x(&self, chrome: WindowChrome) -> Option<f32> {
        (chrome.is_macos && !chrome.is_fullscreen).then_some(MAC_TRANSFORM_ORIGIN_X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::TextDirection;

    fn lang(direction: TextDirection) -> Lang {
        Lang::from_strings(
            "en",
            direction,
            [
                ("AccDescrOpenMenu2", "Open navigation menu"),
                ("Return", "Return"),
                ("Settings", "Settings"),
                ("Contacts", "Contacts"),
                ("ArchivedChats", "Archived Chats"),
            ],
        )
    }

    #[test]
    fn test_layout_from_width() {
        assert!(AppLayout::from_width(600.0, LayoutMode::Auto).is_mobile);
        assert!(!AppLayout::from_width(601.0, LayoutMode::Auto).is_mobile);
        assert!(AppLayout::from_width(1200.0, LayoutMode::Mobile).is_mobile);
        assert!(!AppLayout::from_width(320.0, LayoutMode::Desktop).is_mobile);
    }

    #[test]
    fn test_trigger_depends_on_layout() {
        let shell = SidebarShell::new(false);
        let lang = lang(TextDirection::Ltr);

        let desktop = shell.trigger(&lang, AppLayout { is_mobile: false });
        assert_eq!(desktop.aria_label, "Open navigation menu");
        assert!(desktop.ripple);

        let mobile = shell.trigger(&lang, AppLayout { is_mobile: true });
        assert_eq!(mobile.aria_label, "Return");
        assert!(!mobile.ripple);
    }

    #[test]
    fn test_skip_transition_disables_animation() {
        let shell = SidebarShell::new(true);
        let trigger = shell.trigger(&lang(TextDirection::Ltr), AppLayout::default());
        assert!(!trigger.animated);
    }

    #[test]
    fn test_trigger_click_after_outside_dismiss_stays_closed() {
        let mut shell = SidebarShell::default();
        shell.pointer_down();
        shell.trigger_clicked();
        assert!(shell.is_menu_open());

        // Pressing the trigger again: the press is outside the menu panel
        shell.pointer_down();
        shell.dismiss_outside();
        shell.trigger_clicked();
        assert!(!shell.is_menu_open());

        // The next click opens it again
        shell.pointer_down();
        shell.trigger_clicked();
        assert!(shell.is_menu_open());
    }

    #[test]
    fn test_stale_outside_dismiss_does_not_block_keyboard_toggle() {
        let mut shell = SidebarShell::default();
        shell.toggle_menu();
        // Press elsewhere in the window closes the menu
        shell.dismiss_outside();
        assert!(!shell.is_menu_open());

        shell.toggle_menu();
        assert!(shell.is_menu_open());
    }

    #[test]
    fn test_dismiss_outside_when_closed_is_inert() {
        let mut shell = SidebarShell::default();
        shell.dismiss_outside();
        shell.trigger_clicked();
        assert!(shell.is_menu_open());
    }

    #[test]
    fn test_skip_transition_is_independent_of_direction() {
        let shell = SidebarShell::new(false);
        let rtl = lang(TextDirection::Rtl);
        assert!(shell.trigger(&rtl, AppLayout::default()).animated);
        assert!(shell.disable_transition(&rtl));
    }

    #[test]
    fn test_alignment_follows_direction() {
        let shell = SidebarShell::default();
        assert_eq!(shell.alignment(&lang(TextDirection::Ltr)), MenuAlignment::Left);
        assert_eq!(shell.alignment(&lang(TextDirection::Rtl)), MenuAlignment::Right);
        assert!(shell.disable_transition(&lang(TextDirection::Rtl)));
    }

    #[test]
    fn test_menu_entries() {
        let entries = SidebarShell::default().menu_entries(&lang(TextDirection::Ltr));
        let targets: Vec<_> = entries.iter().map(|e| e.target).collect();
        assert_eq!(
            targets,
            vec![
                LeftColumnContent::Settings,
                LeftColumnContent::Contacts,
                LeftColumnContent::Archived
            ]
        );
        assert_eq!(entries[2].label, "Archived Chats");
    }

    #[test]
    fn test_select_closes_menu_and_reports() {
        let mut shell = SidebarShell::default();
        shell.toggle_menu();
        assert!(shell.is_menu_open());
        assert!(shell.trigger(&lang(TextDirection::Ltr), AppLayout::default()).is_active);

        let mut selected = None;
        shell.select(LeftColumnContent::Contacts, |content| selected = Some(content));
        assert_eq!(selected, Some(LeftColumnContent::Contacts));
        assert!(!shell.is_menu_open());
    }

    #[test]
    fn test_version_display() {
        let mut version = VersionInfo {
            version: "1.2.3".to_string(),
            revision: "abc123".to_string(),
            channel: ReleaseChannel::Stable,
        };
        let shell = SidebarShell::default();
        assert_eq!(shell.footer(&version), "Vela 1.2.3");
        version.channel = ReleaseChannel::Beta;
        assert_eq!(shell.footer(&version), "Vela 1.2.3 Beta (abc123)");
        version.channel = ReleaseChannel::Debug;
        assert_eq!(shell.footer(&version), "Vela abc123");
    }

    #[test]
    fn test_transform_origin() {
        let shell = SidebarShell::default();
        let mac = WindowChrome {
            is_macos: true,
            is_fullscreen: false,
        };
        assert_eq!(shell.transform_origin_x(mac), Some(90.0));
        assert_eq!(
            shell.transform_origin_x(WindowChrome {
                is_fullscreen: true,
                ..mac
            }),
            None
        );
        assert_eq!(shell.transform_origin_x(WindowChrome::default()), None);
    }
}
