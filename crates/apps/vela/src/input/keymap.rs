//! Keyboard shortcut definitions

use gpui::KeyBinding;

use super::actions::*;

/// Returns all keybindings to register with GPUI
pub fn bindings() -> Vec<KeyBinding> {
    vec![
        // ===== Global (VelaApp context) =====
        KeyBinding::new("cmd-m", ToggleMainMenu, Some("VelaApp")),
        KeyBinding::new("escape", Dismiss, Some("VelaApp")),
        // ===== Folder tabs =====
        KeyBinding::new("ctrl-tab", NextFolder, Some("VelaApp")),
        KeyBinding::new("ctrl-shift-tab", PrevFolder, Some("VelaApp")),
        KeyBinding::new("right", NextFolder, Some("FolderTabs")),
        KeyBinding::new("left", PrevFolder, Some("FolderTabs")),
        // ===== Open context menu =====
        KeyBinding::new("up", MenuUp, Some("FolderContextMenu")),
        KeyBinding::new("down", MenuDown, Some("FolderContextMenu")),
        KeyBinding::new("enter", MenuConfirm, Some("FolderContextMenu")),
        KeyBinding::new("escape", Dismiss, Some("FolderContextMenu")),
    ]
}
