//! UI Components for Beeper.
//!
//! Retro pager and paper-slip message cards on a gridded desk.

mod desk;
mod message_card;
mod pager_device;

pub use desk::Desktop;
pub use message_card::MessageCard;
pub use pager_device::PagerDevice;
