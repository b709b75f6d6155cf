//! Shared handles for components.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_rewriter);
//!
//! // In child components
//! let rewriter = use_rewriter();
//! ```

use std::sync::Arc;

use beeper_core::{Pager, PagerCell, Rewriter, Viewport};
use dioxus::prelude::*;

/// Rewriter type used by the desktop app
pub type AppRewriter = Rewriter;

/// Get the rewriter configured at launch
pub fn get_rewriter() -> Arc<AppRewriter> {
    crate::get_rewriter()
}

/// Get the window size requested at launch
pub fn get_initial_viewport() -> Viewport {
    crate::get_initial_viewport()
}

/// Hook to access the rewriter from context.
pub fn use_rewriter() -> Arc<AppRewriter> {
    use_context::<Arc<AppRewriter>>()
}

/// A pager living in a Dioxus signal, usable by the async command flows.
#[derive(Clone, Copy)]
pub struct SignalPager(pub Signal<Pager>);

impl PagerCell for SignalPager {
    fn with_pager<R>(&mut self, f: impl FnOnce(&mut Pager) -> R) -> R {
        f(&mut self.0.write())
    }
}
