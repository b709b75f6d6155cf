use dioxus::prelude::*;

use crate::components::Desktop;
use crate::context::get_rewriter;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the rewriter context, then hands over to the
/// desk.
#[component]
pub fn App() -> Element {
    use_context_provider(get_rewriter);

    rsx! {
        style { {GLOBAL_STYLES} }
        Desktop {}
    }
}
