//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod stores;
pub use stores::{clear_all, make_autosave, make_documents, make_settings, PlatformKv};

mod notifications;
pub use notifications::{notify, use_notices, Notice, NoticeLevel, NoticeTray};

pub mod snippets;

mod editor;
pub use editor::DocumentEditor;

mod navbar;
pub use navbar::Navbar;

mod download;
pub use download::trigger_download;

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/ui.css");
