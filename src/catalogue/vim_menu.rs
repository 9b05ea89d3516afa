//! Vim menu items.
//!
//! Target keys are the English menu paths exactly as `menutrans` expects them,
//! so embedded spaces are already escaped.

/// `(menu item, Apple key, glossary file name)`
pub(super) const NEEDED_LOCALISATIONS: &[(&str, &str, &str)] = &[
    ("&File", "File", "AppKit"),
    ("&Edit", "Edit", "AppKit"),
    ("&Tools", "Tools", "TextEdit"),
    ("&Window", "Window", "AppKit"),
    ("&Help", "Help", "AppKit"),
    ("&Undo", "Undo", "AppKit"),
    ("&Redo", "Redo", "AppKit"),
    ("Cu&t", "Cut", "AppKit"),
    ("&Copy", "Copy", "AppKit"),
    ("&Paste", "Paste", "AppKit"),
    ("&Delete", "Delete", "AppKit"),
    ("Select\\ &All", "Select All", "AppKit"),
    ("&Find\\.\\.\\.", "Find…", "AppKit"),
    ("Find\\ Next", "312.title", "TextEdit"),
    ("Find\\ Previous", "314.title", "TextEdit"),
    ("Use\\ Selection\\ for\\ Find", "316.title", "TextEdit"),
    ("&Open\\.\\.\\.", "Open…", "AppKit"),
    ("&Save", "Save", "AppKit"),
    ("Save\\ &As\\.\\.\\.", "Save As…", "AppKit"),
    ("Close\\ Window", "Close Window", "AppKit"),
    ("&Print", "Print…", "AppKit"),
    ("Minimize", "Minimize", "AppKit"),
    ("Zoom", "Zoom", "AppKit"),
    ("Bring\\ All\\ To\\ Front", "Bring All to Front", "AppKit"),
    ("Toggle\\ Full\\ Screen\\ Mode", "Enter Full Screen", "AppKit"),
    ("Show\\ Fonts", "Show Fonts", "AppKit"),
    ("Spelling", "Spelling", "AppKit"),
];
