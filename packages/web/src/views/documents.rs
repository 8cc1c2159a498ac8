use dioxus::prelude::*;

use crate::views::Chrome;
use crate::Route;

#[component]
pub fn Documents() -> Element {
    let nav = use_navigator();

    rsx! {
        Chrome {
            ui::views::DocumentsView {
                on_open: move |id: String| {
                    nav.push(Route::Editor { id });
                },
                on_view: move |id: String| {
                    nav.push(Route::PublicView { id });
                },
                on_create: move |_| {
                    nav.push(Route::NewDocument {});
                },
            }
        }
    }
}
