//! Renders the two booking notices (customer-facing and spa-owner-facing)
//! from a confirmed booking. Transport is the caller's concern; this module
//! only produces recipient + subject + HTML body.

use minijinja::Environment;
use serde::Serialize;

use crate::booking::{BookingRequest, CartItem};
use crate::format::{format_long_date, format_rupiah};
use crate::NotifyError;

pub const CUSTOMER_SUBJECT: &str = "Booking Confirmation - Bali Spa Guide";

// The .html suffix opts the templates into minijinja's HTML auto-escaping.
const CUSTOMER_TEMPLATE: &str = "customer.html";
const SPA_OWNER_TEMPLATE: &str = "spa_owner.html";

/// A fully rendered notice, ready for whatever transport delivers it.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedNotice {
    pub recipient: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Serialize)]
struct ContactContext<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
}

#[derive(Debug, Serialize)]
struct LineContext<'a> {
    spa_name: &'a str,
    spa_location: &'a str,
    treatment: &'a str,
    quantity: u32,
    date: String,
    time: &'a str,
    line_total: String,
}

#[derive(Debug, Serialize)]
struct CustomerContext<'a> {
    customer: ContactContext<'a>,
    bookings: Vec<LineContext<'a>>,
    total: String,
}

#[derive(Debug, Serialize)]
struct SpaOwnerContext<'a> {
    customer: ContactContext<'a>,
    spa_name: &'a str,
    spa_location: &'a str,
    bookings: Vec<LineContext<'a>>,
    total: String,
}

/// Template environment with both notice templates registered up front, so a
/// template error surfaces at startup rather than on the first booking.
pub struct Composer {
    env: Environment<'static>,
}

impl Composer {
    /// # Errors
    ///
    /// Returns [`NotifyError::Template`] if either bundled template fails to
    /// parse.
    pub fn new() -> Result<Self, NotifyError> {
        let mut env = Environment::new();
        env.add_template(
            CUSTOMER_TEMPLATE,
            include_str!("../templates/customer.html"),
        )?;
        env.add_template(
            SPA_OWNER_TEMPLATE,
            include_str!("../templates/spa_owner.html"),
        )?;
        Ok(Self { env })
    }

    /// Render the customer-facing confirmation, covering every cart line.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Template`] if rendering fails.
    pub fn customer_notice(&self, booking: &BookingRequest) -> Result<RenderedNotice, NotifyError> {
        let context = CustomerContext {
            customer: contact(booking),
            bookings: booking.cart_items.iter().map(line).collect(),
            total: format_rupiah(booking.total()),
        };
        let html = self.env.get_template(CUSTOMER_TEMPLATE)?.render(&context)?;

        Ok(RenderedNotice {
            recipient: booking.user_info.email.clone(),
            subject: CUSTOMER_SUBJECT.to_string(),
            html,
        })
    }

    /// Render the spa-owner notice for the first spa in the cart, covering
    /// only that spa's lines.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidBooking`] on an empty cart, or
    /// [`NotifyError::Template`] if rendering fails.
    pub fn spa_notice(
        &self,
        booking: &BookingRequest,
        recipient: &str,
    ) -> Result<RenderedNotice, NotifyError> {
        let items = booking.first_spa_items();
        let Some(first) = items.first() else {
            return Err(NotifyError::InvalidBooking(
                "cart must contain at least one item".to_string(),
            ));
        };

        let total = format_rupiah(items.iter().map(|i| i.line_total()).sum());
        let context = SpaOwnerContext {
            customer: contact(booking),
            spa_name: &first.spa_name,
            spa_location: &first.spa_location,
            bookings: items.iter().map(|i| line(i)).collect(),
            total,
        };
        let html = self.env.get_template(SPA_OWNER_TEMPLATE)?.render(&context)?;

        Ok(RenderedNotice {
            recipient: recipient.to_string(),
            subject: format!("New Booking: {}", first.spa_name),
            html,
        })
    }
}

fn contact(booking: &BookingRequest) -> ContactContext<'_> {
    ContactContext {
        name: &booking.user_info.name,
        email: &booking.user_info.email,
        phone: &booking.user_info.phone,
    }
}

fn line(item: &CartItem) -> LineContext<'_> {
    LineContext {
        spa_name: &item.spa_name,
        spa_location: &item.spa_location,
        treatment: &item.treatment,
        quantity: item.quantity,
        date: format_long_date(item.date),
        time: &item.time,
        line_total: format_rupiah(item.line_total()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::booking::UserInfo;

    use super::*;

    fn item(spa_id: &str, spa_name: &str, treatment: &str, price: i64) -> CartItem {
        CartItem {
            spa_id: spa_id.to_string(),
            spa_name: spa_name.to_string(),
            spa_location: "Ubud".to_string(),
            treatment: treatment.to_string(),
            quantity: 2,
            price: Decimal::from(price),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time: "14:00".to_string(),
        }
    }

    fn booking() -> BookingRequest {
        BookingRequest {
            user_info: UserInfo {
                name: "Made Wirawan".to_string(),
                email: "made@example.com".to_string(),
                phone: "+62 812 0000 1111".to_string(),
            },
            cart_items: vec![
                item("1", "Taman Sari Spa", "Hot Stone", 350_000),
                item("2", "Frangipani Retreat", "Facial", 200_000),
                item("1", "Taman Sari Spa", "Body Scrub", 150_000),
            ],
        }
    }

    #[test]
    fn customer_notice_covers_every_cart_line() {
        let composer = Composer::new().unwrap();
        let notice = composer.customer_notice(&booking()).unwrap();

        assert_eq!(notice.recipient, "made@example.com");
        assert_eq!(notice.subject, CUSTOMER_SUBJECT);
        assert!(notice.html.contains("Dear Made Wirawan"));
        assert!(notice.html.contains("Hot Stone"));
        assert!(notice.html.contains("Facial"));
        assert!(notice.html.contains("Body Scrub"));
        // 2*350k + 2*200k + 2*150k
        assert!(notice.html.contains("Rp 1.400.000"));
        assert!(notice.html.contains("Saturday, March 14, 2026"));
    }

    #[test]
    fn spa_notice_covers_only_the_first_spa() {
        let composer = Composer::new().unwrap();
        let notice = composer
            .spa_notice(&booking(), "frontdesk@tamansari.example")
            .unwrap();

        assert_eq!(notice.recipient, "frontdesk@tamansari.example");
        assert_eq!(notice.subject, "New Booking: Taman Sari Spa");
        assert!(notice.html.contains("Hot Stone"));
        assert!(notice.html.contains("Body Scrub"));
        assert!(!notice.html.contains("Facial"));
        // 2*350k + 2*150k, the other spa's line excluded
        assert!(notice.html.contains("Rp 1.000.000"));
        assert!(notice.html.contains("Made Wirawan"));
    }

    #[test]
    fn spa_notice_on_empty_cart_is_an_invalid_booking() {
        let composer = Composer::new().unwrap();
        let empty = BookingRequest {
            user_info: UserInfo {
                name: "Made".to_string(),
                email: "made@example.com".to_string(),
                phone: String::new(),
            },
            cart_items: Vec::new(),
        };
        let err = composer.spa_notice(&empty, "spa@example.com").unwrap_err();
        assert!(matches!(err, NotifyError::InvalidBooking(_)));
    }

    #[test]
    fn line_totals_are_formatted_per_line() {
        let composer = Composer::new().unwrap();
        let notice = composer.customer_notice(&booking()).unwrap();
        assert!(notice.html.contains("Rp 700.000"));
        assert!(notice.html.contains("Rp 400.000"));
        assert!(notice.html.contains("Rp 300.000"));
    }
}
