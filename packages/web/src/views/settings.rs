use dioxus::prelude::*;

use crate::views::Chrome;
use crate::Route;

#[component]
pub fn Settings() -> Element {
    let nav = use_navigator();

    rsx! {
        Chrome {
            ui::views::SettingsView {
                on_restored: move |_| {
                    // The restored backup is now the latest auto-save; the
                    // fresh editor offers to pick it up.
                    nav.push(Route::NewDocument {});
                },
            }
        }
    }
}
