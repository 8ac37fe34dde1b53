//! GPUI action definitions for keyboard shortcuts

use gpui::actions;

// Main menu
actions!(
    vela,
    [
        ToggleMainMenu, // cmd-m - open or close the main menu
        Dismiss,        // Escape - close menus and modals
    ]
);

// Folder tabs
actions!(
    vela,
    [
        NextFolder, // ctrl-tab / right - next folder tab
        PrevFolder, // ctrl-shift-tab / left - previous folder tab
    ]
);

// Context menu navigation (while a tab menu is open)
actions!(
    vela,
    [
        MenuUp,      // Up arrow - previous entry
        MenuDown,    // Down arrow - next entry
        MenuConfirm, // Enter - run highlighted entry
    ]
);
