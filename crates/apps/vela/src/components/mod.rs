//! Reusable UI components for Vela

mod context_menu;
mod folder_tab_item;
mod folder_tabs;
mod main_menu;
mod modal;
mod sidebar;
mod title;

pub use context_menu::FolderContextMenu;
pub use folder_tab_item::FolderTabItem;
pub use folder_tabs::{FolderTabsEvent, FolderTabsView};
pub use main_menu::MainMenu;
pub use modal::Modal;
pub use sidebar::{SidebarEvent, SidebarView};
pub use title::{emoji_image, render_title};
