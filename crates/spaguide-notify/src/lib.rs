use thiserror::Error;

pub mod booking;
pub mod composer;
pub mod format;

pub use booking::{BookingRequest, CartItem, UserInfo};
pub use composer::{Composer, RenderedNotice};
pub use format::{format_long_date, format_rupiah};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid booking: {0}")]
    InvalidBooking(String),
    #[error(transparent)]
    Template(#[from] minijinja::Error),
}
