// Copyright 2026 the Iconique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named icons from the Material Icons set.

use core::fmt;
use smallvec::SmallVec;

/// Returns the glyph character for the given icon.
///
/// The mapping is total: every [`Icon`] has exactly one glyph in the
/// bundled font, and repeated lookups always return the same character.
pub fn material_icon(icon: Icon) -> char {
    icon.as_char()
}

/// Identifier for a glyph in the Material Icons font.
///
/// Variants are declared in alphabetical order of their canonical
/// snake_case names, matching the order of the glyph table.
#[allow(
    missing_docs,
    reason = "variant names mirror the canonical Material Icons identifiers"
)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Icon {
    AccessAlarm,
    AccessTime,
    AccountBalance,
    AccountCircle,
    Add,
    AddAPhoto,
    AddCircle,
    AddCircleOutline,
    AddShoppingCart,
    Alarm,
    Apps,
    Archive,
    ArrowBack,
    ArrowDownward,
    ArrowDropDown,
    ArrowDropUp,
    ArrowForward,
    ArrowUpward,
    AttachFile,
    AttachMoney,
    Autorenew,
    Backspace,
    Block,
    Bluetooth,
    Bookmark,
    BookmarkBorder,
    Brush,
    BugReport,
    Build,
    Cached,
    CalendarToday,
    Call,
    CameraAlt,
    Cancel,
    Chat,
    Check,
    CheckBox,
    CheckBoxOutlineBlank,
    CheckCircle,
    ChevronLeft,
    ChevronRight,
    Close,
    Cloud,
    CloudDownload,
    CloudUpload,
    Code,
    ContentCopy,
    ContentCut,
    ContentPaste,
    Create,
    CreateNewFolder,
    Dashboard,
    Delete,
    DeleteForever,
    Description,
    Done,
    DoneAll,
    Drafts,
    Edit,
    Email,
    Error,
    ErrorOutline,
    Event,
    ExitToApp,
    ExpandLess,
    ExpandMore,
    Explore,
    Extension,
    Face,
    Favorite,
    FavoriteBorder,
    FileDownload,
    FileUpload,
    FilterList,
    Flag,
    Folder,
    FolderOpen,
    Fullscreen,
    FullscreenExit,
    Gesture,
    Grade,
    Group,
    Help,
    HelpOutline,
    HighlightOff,
    History,
    Home,
    HourglassEmpty,
    Http,
    Image,
    Inbox,
    Info,
    InfoOutline,
    Input,
    InsertDriveFile,
    Keyboard,
    KeyboardArrowDown,
    KeyboardArrowLeft,
    KeyboardArrowRight,
    KeyboardArrowUp,
    Label,
    Language,
    Launch,
    Link,
    List,
    Lock,
    LockOpen,
    Mail,
    Map,
    Menu,
    Mic,
    MoreHoriz,
    MoreVert,
    Notifications,
    NotificationsNone,
    OpenInBrowser,
    OpenInNew,
    Palette,
    Pause,
    Payment,
    Person,
    PersonAdd,
    Phone,
    Place,
    PlayArrow,
    PowerSettingsNew,
    Print,
    Public,
    Refresh,
    Remove,
    RemoveCircle,
    RemoveCircleOutline,
    Reply,
    Save,
    Schedule,
    Search,
    Send,
    Settings,
    Share,
    ShoppingCart,
    Star,
    StarBorder,
    Stop,
    SwapHoriz,
    SwapVert,
    Sync,
    ThumbDown,
    ThumbUp,
    Timeline,
    Timer,
    Today,
    Translate,
    Undo,
    UnfoldLess,
    UnfoldMore,
    VerifiedUser,
    Visibility,
    VisibilityOff,
    VolumeDown,
    VolumeMute,
    VolumeOff,
    VolumeUp,
    VpnKey,
    Warning,
    WatchLater,
    Wifi,
    ZoomIn,
    ZoomOut,
}

impl Icon {
    /// Returns the character whose glyph renders this icon.
    pub fn as_char(self) -> char {
        ICON_GLYPHS[self as usize].2
    }

    /// Returns the canonical snake_case name of this icon.
    pub fn name(self) -> &'static str {
        ICON_GLYPHS[self as usize].1
    }

    /// Returns the icon with the given canonical name.
    ///
    /// Lookup is ASCII case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = NameKey::from_str(name);
        let ix = ICON_GLYPHS
            .binary_search_by(|entry| entry.1.as_bytes().cmp(key.as_bytes()))
            .ok()?;
        ICON_GLYPHS.get(ix).map(|entry| entry.0)
    }

    /// Returns an iterator over every icon identifier.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        ICON_GLYPHS.iter().map(|entry| entry.0)
    }
}

impl From<Icon> for char {
    fn from(icon: Icon) -> Self {
        icon.as_char()
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key for case-insensitive lookup of icon names.
#[derive(Default)]
struct NameKey {
    data: SmallVec<[u8; 32]>,
}

impl NameKey {
    fn from_str(s: &str) -> Self {
        let mut res = Self::default();
        res.data.extend(s.bytes().map(|b| b.to_ascii_lowercase()));
        res
    }

    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[test]
fn assert_sorted() {
    for w in ICON_GLYPHS.windows(2) {
        let &[prev, curr] = w else { unreachable!() };
        assert!(prev.1 < curr.1, "{} must sort before {}", prev.1, curr.1);
    }
}

#[test]
fn assert_aligned() {
    for (ix, entry) in ICON_GLYPHS.iter().enumerate() {
        assert_eq!(
            entry.0 as usize, ix,
            "table entry {} out of step with its discriminant",
            entry.1
        );
    }
}

/// Mapping of each icon to its canonical name and glyph character,
/// sorted by name.
const ICON_GLYPHS: &[(Icon, &str, char)] = &[
    (Icon::AccessAlarm, "access_alarm", '\u{e190}'),
    (Icon::AccessTime, "access_time", '\u{e192}'),
    (Icon::AccountBalance, "account_balance", '\u{e84f}'),
    (Icon::AccountCircle, "account_circle", '\u{e853}'),
    (Icon::Add, "add", '\u{e145}'),
    (Icon::AddAPhoto, "add_a_photo", '\u{e439}'),
    (Icon::AddCircle, "add_circle", '\u{e147}'),
    (Icon::AddCircleOutline, "add_circle_outline", '\u{e148}'),
    (Icon::AddShoppingCart, "add_shopping_cart", '\u{e854}'),
    (Icon::Alarm, "alarm", '\u{e855}'),
    (Icon::Apps, "apps", '\u{e5c3}'),
    (Icon::Archive, "archive", '\u{e149}'),
    (Icon::ArrowBack, "arrow_back", '\u{e5c4}'),
    (Icon::ArrowDownward, "arrow_downward", '\u{e5db}'),
    (Icon::ArrowDropDown, "arrow_drop_down", '\u{e5c5}'),
    (Icon::ArrowDropUp, "arrow_drop_up", '\u{e5c7}'),
    (Icon::ArrowForward, "arrow_forward", '\u{e5c8}'),
    (Icon::ArrowUpward, "arrow_upward", '\u{e5d8}'),
    (Icon::AttachFile, "attach_file", '\u{e226}'),
    (Icon::AttachMoney, "attach_money", '\u{e227}'),
    (Icon::Autorenew, "autorenew", '\u{e863}'),
    (Icon::Backspace, "backspace", '\u{e14a}'),
    (Icon::Block, "block", '\u{e14b}'),
    (Icon::Bluetooth, "bluetooth", '\u{e1a7}'),
    (Icon::Bookmark, "bookmark", '\u{e866}'),
    (Icon::BookmarkBorder, "bookmark_border", '\u{e867}'),
    (Icon::Brush, "brush", '\u{e3ae}'),
    (Icon::BugReport, "bug_report", '\u{e868}'),
    (Icon::Build, "build", '\u{e869}'),
    (Icon::Cached, "cached", '\u{e86a}'),
    (Icon::CalendarToday, "calendar_today", '\u{e935}'),
    (Icon::Call, "call", '\u{e0b0}'),
    (Icon::CameraAlt, "camera_alt", '\u{e3b0}'),
    (Icon::Cancel, "cancel", '\u{e5c9}'),
    (Icon::Chat, "chat", '\u{e0b7}'),
    (Icon::Check, "check", '\u{e5ca}'),
    (Icon::CheckBox, "check_box", '\u{e834}'),
    (Icon::CheckBoxOutlineBlank, "check_box_outline_blank", '\u{e835}'),
    (Icon::CheckCircle, "check_circle", '\u{e86c}'),
    (Icon::ChevronLeft, "chevron_left", '\u{e5cb}'),
    (Icon::ChevronRight, "chevron_right", '\u{e5cc}'),
    (Icon::Close, "close", '\u{e5cd}'),
    (Icon::Cloud, "cloud", '\u{e2bd}'),
    (Icon::CloudDownload, "cloud_download", '\u{e2c0}'),
    (Icon::CloudUpload, "cloud_upload", '\u{e2c3}'),
    (Icon::Code, "code", '\u{e86f}'),
    (Icon::ContentCopy, "content_copy", '\u{e14d}'),
    (Icon::ContentCut, "content_cut", '\u{e14e}'),
    (Icon::ContentPaste, "content_paste", '\u{e14f}'),
    (Icon::Create, "create", '\u{e150}'),
    (Icon::CreateNewFolder, "create_new_folder", '\u{e2cc}'),
    (Icon::Dashboard, "dashboard", '\u{e871}'),
    (Icon::Delete, "delete", '\u{e872}'),
    (Icon::DeleteForever, "delete_forever", '\u{e92b}'),
    (Icon::Description, "description", '\u{e873}'),
    (Icon::Done, "done", '\u{e876}'),
    (Icon::DoneAll, "done_all", '\u{e877}'),
    (Icon::Drafts, "drafts", '\u{e151}'),
    (Icon::Edit, "edit", '\u{e3c9}'),
    (Icon::Email, "email", '\u{e0be}'),
    (Icon::Error, "error", '\u{e000}'),
    (Icon::ErrorOutline, "error_outline", '\u{e001}'),
    (Icon::Event, "event", '\u{e878}'),
    (Icon::ExitToApp, "exit_to_app", '\u{e879}'),
    (Icon::ExpandLess, "expand_less", '\u{e5ce}'),
    (Icon::ExpandMore, "expand_more", '\u{e5cf}'),
    (Icon::Explore, "explore", '\u{e87a}'),
    (Icon::Extension, "extension", '\u{e87b}'),
    (Icon::Face, "face", '\u{e87c}'),
    (Icon::Favorite, "favorite", '\u{e87d}'),
    (Icon::FavoriteBorder, "favorite_border", '\u{e87e}'),
    (Icon::FileDownload, "file_download", '\u{e2c4}'),
    (Icon::FileUpload, "file_upload", '\u{e2c6}'),
    (Icon::FilterList, "filter_list", '\u{e152}'),
    (Icon::Flag, "flag", '\u{e153}'),
    (Icon::Folder, "folder", '\u{e2c7}'),
    (Icon::FolderOpen, "folder_open", '\u{e2c8}'),
    (Icon::Fullscreen, "fullscreen", '\u{e5d0}'),
    (Icon::FullscreenExit, "fullscreen_exit", '\u{e5d1}'),
    (Icon::Gesture, "gesture", '\u{e155}'),
    (Icon::Grade, "grade", '\u{e885}'),
    (Icon::Group, "group", '\u{e7ef}'),
    (Icon::Help, "help", '\u{e887}'),
    (Icon::HelpOutline, "help_outline", '\u{e8fd}'),
    (Icon::HighlightOff, "highlight_off", '\u{e888}'),
    (Icon::History, "history", '\u{e889}'),
    (Icon::Home, "home", '\u{e88a}'),
    (Icon::HourglassEmpty, "hourglass_empty", '\u{e88b}'),
    (Icon::Http, "http", '\u{e902}'),
    (Icon::Image, "image", '\u{e3f4}'),
    (Icon::Inbox, "inbox", '\u{e156}'),
    (Icon::Info, "info", '\u{e88e}'),
    (Icon::InfoOutline, "info_outline", '\u{e88f}'),
    (Icon::Input, "input", '\u{e890}'),
    (Icon::InsertDriveFile, "insert_drive_file", '\u{e24d}'),
    (Icon::Keyboard, "keyboard", '\u{e312}'),
    (Icon::KeyboardArrowDown, "keyboard_arrow_down", '\u{e313}'),
    (Icon::KeyboardArrowLeft, "keyboard_arrow_left", '\u{e314}'),
    (Icon::KeyboardArrowRight, "keyboard_arrow_right", '\u{e315}'),
    (Icon::KeyboardArrowUp, "keyboard_arrow_up", '\u{e316}'),
    (Icon::Label, "label", '\u{e892}'),
    (Icon::Language, "language", '\u{e894}'),
    (Icon::Launch, "launch", '\u{e895}'),
    (Icon::Link, "link", '\u{e157}'),
    (Icon::List, "list", '\u{e896}'),
    (Icon::Lock, "lock", '\u{e897}'),
    (Icon::LockOpen, "lock_open", '\u{e898}'),
    (Icon::Mail, "mail", '\u{e158}'),
    (Icon::Map, "map", '\u{e55b}'),
    (Icon::Menu, "menu", '\u{e5d2}'),
    (Icon::Mic, "mic", '\u{e029}'),
    (Icon::MoreHoriz, "more_horiz", '\u{e5d3}'),
    (Icon::MoreVert, "more_vert", '\u{e5d4}'),
    (Icon::Notifications, "notifications", '\u{e7f4}'),
    (Icon::NotificationsNone, "notifications_none", '\u{e7f5}'),
    (Icon::OpenInBrowser, "open_in_browser", '\u{e89d}'),
    (Icon::OpenInNew, "open_in_new", '\u{e89e}'),
    (Icon::Palette, "palette", '\u{e40a}'),
    (Icon::Pause, "pause", '\u{e034}'),
    (Icon::Payment, "payment", '\u{e8a1}'),
    (Icon::Person, "person", '\u{e7fd}'),
    (Icon::PersonAdd, "person_add", '\u{e7fe}'),
    (Icon::Phone, "phone", '\u{e0cd}'),
    (Icon::Place, "place", '\u{e55f}'),
    (Icon::PlayArrow, "play_arrow", '\u{e037}'),
    (Icon::PowerSettingsNew, "power_settings_new", '\u{e8ac}'),
    (Icon::Print, "print", '\u{e8ad}'),
    (Icon::Public, "public", '\u{e80b}'),
    (Icon::Refresh, "refresh", '\u{e5d5}'),
    (Icon::Remove, "remove", '\u{e15b}'),
    (Icon::RemoveCircle, "remove_circle", '\u{e15c}'),
    (Icon::RemoveCircleOutline, "remove_circle_outline", '\u{e15d}'),
    (Icon::Reply, "reply", '\u{e15e}'),
    (Icon::Save, "save", '\u{e161}'),
    (Icon::Schedule, "schedule", '\u{e8b5}'),
    (Icon::Search, "search", '\u{e8b6}'),
    (Icon::Send, "send", '\u{e163}'),
    (Icon::Settings, "settings", '\u{e8b8}'),
    (Icon::Share, "share", '\u{e80d}'),
    (Icon::ShoppingCart, "shopping_cart", '\u{e8cc}'),
    (Icon::Star, "star", '\u{e838}'),
    (Icon::StarBorder, "star_border", '\u{e83a}'),
    (Icon::Stop, "stop", '\u{e047}'),
    (Icon::SwapHoriz, "swap_horiz", '\u{e8d4}'),
    (Icon::SwapVert, "swap_vert", '\u{e8d5}'),
    (Icon::Sync, "sync", '\u{e627}'),
    (Icon::ThumbDown, "thumb_down", '\u{e8db}'),
    (Icon::ThumbUp, "thumb_up", '\u{e8dc}'),
    (Icon::Timeline, "timeline", '\u{e922}'),
    (Icon::Timer, "timer", '\u{e425}'),
    (Icon::Today, "today", '\u{e8df}'),
    (Icon::Translate, "translate", '\u{e8e2}'),
    (Icon::Undo, "undo", '\u{e166}'),
    (Icon::UnfoldLess, "unfold_less", '\u{e5d6}'),
    (Icon::UnfoldMore, "unfold_more", '\u{e5d7}'),
    (Icon::VerifiedUser, "verified_user", '\u{e8e8}'),
    (Icon::Visibility, "visibility", '\u{e8f4}'),
    (Icon::VisibilityOff, "visibility_off", '\u{e8f5}'),
    (Icon::VolumeDown, "volume_down", '\u{e04d}'),
    (Icon::VolumeMute, "volume_mute", '\u{e04e}'),
    (Icon::VolumeOff, "volume_off", '\u{e04f}'),
    (Icon::VolumeUp, "volume_up", '\u{e050}'),
    (Icon::VpnKey, "vpn_key", '\u{e0da}'),
    (Icon::Warning, "warning", '\u{e002}'),
    (Icon::WatchLater, "watch_later", '\u{e924}'),
    (Icon::Wifi, "wifi", '\u{e63e}'),
    (Icon::ZoomIn, "zoom_in", '\u{e8ff}'),
    (Icon::ZoomOut, "zoom_out", '\u{e900}'),
];
