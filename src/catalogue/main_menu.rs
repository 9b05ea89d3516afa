//! Main menu strings, sorted by target key.

/// `(target key, Apple key, glossary file name)`
pub(super) const NEEDED_LOCALISATIONS: &[(&str, &str, &str)] = &[
    ("edit_copy", "Copy", "AppKit"),
    ("edit_cut", "Cut", "AppKit"),
    ("edit_delete", "Delete", "AppKit"),
    ("edit_paste", "Paste", "AppKit"),
    ("edit_redo", "Redo", "AppKit"),
    ("edit_selectAll", "Select All", "AppKit"),
    ("edit_undo", "Undo", "AppKit"),
    ("file_close", "Close", "AppKit"),
    ("file_closeWindow", "Close Window", "AppKit"),
    ("file_newTab", "New Tab", "AppKit"),
    ("file_newWindow", "New Window", "AppKit"),
    ("file_openRecent", "Open Recent", "AppKit"),
    ("file_pageSetup", "Page Setup…", "AppKit"),
    ("file_print", "Print…", "AppKit"),
    ("file_saveAs", "Save As…", "AppKit"),
    ("find_jump", "315.title", "TextEdit"),
    ("find_next", "312.title", "TextEdit"),
    ("find_previous", "314.title", "TextEdit"),
    ("find_useSelection", "316.title", "TextEdit"),
    ("font_bigger", "Bigger", "AppKit"),
    ("font_showFonts", "Show Fonts", "AppKit"),
    ("font_smaller", "Smaller", "AppKit"),
    ("help_search", "Search", "AppKit"),
    ("view_enterFullScreen", "Enter Full Screen", "AppKit"),
    ("view_showTabBar", "Show Tab Bar", "AppKit"),
    ("view_showToolbar", "Show Toolbar", "AppKit"),
    ("view_zoomIn", "438.title", "WebBrowser"),
    ("view_zoomOut", "439.title", "WebBrowser"),
    ("view_zoomReset", "863.title", "WebBrowser"),
    ("window_bringAllToFront", "Bring All to Front", "AppKit"),
    ("window_cycle", "Cycle Through Windows", "AppKit"),
    ("window_minimize", "Minimize", "AppKit"),
    ("window_showNextTab", "Show Next Tab", "AppKit"),
    ("window_showPreviousTab", "Show Previous Tab", "AppKit"),
    ("window_zoom", "Zoom", "AppKit"),
];
