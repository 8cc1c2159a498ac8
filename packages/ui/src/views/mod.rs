mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod documents;
pub use documents::DocumentsView;

mod settings;
pub use settings::SettingsView;

mod public_view;
pub use public_view::PublicDocumentView;
