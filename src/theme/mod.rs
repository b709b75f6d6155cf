//! Visual theme

mod styles;

pub use styles::GLOBAL_STYLES;
