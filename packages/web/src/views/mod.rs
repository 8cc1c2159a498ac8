use dioxus::prelude::*;

use crate::Route;

mod documents;
pub use documents::Documents;

mod editor;
pub use editor::{Editor, NewDocument};

mod public_view;
pub use public_view::PublicView;

mod settings;
pub use settings::Settings;

/// Top navigation shared by every page except the public view.
#[component]
pub(crate) fn Chrome(children: Element) -> Element {
    rsx! {
        ui::Navbar {
            Link { to: Route::Documents {}, "Documents" }
            Link { to: Route::NewDocument {}, "New" }
            Link { to: Route::Settings {}, "Settings" }
        }
        {children}
    }
}
