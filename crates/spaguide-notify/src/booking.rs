//! Confirmed-booking payload: the customer's contact info plus the cart
//! lines being booked.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::NotifyError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// One booked treatment package. `price` is the unit price in Rupiah.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub spa_id: String,
    pub spa_name: String,
    pub spa_location: String,
    pub treatment: String,
    pub quantity: u32,
    pub price: Decimal,
    pub date: NaiveDate,
    pub time: String,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub user_info: UserInfo,
    pub cart_items: Vec<CartItem>,
}

impl BookingRequest {
    /// Check the booking is complete enough to notify on.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::InvalidBooking`] when contact info is missing,
    /// the cart is empty, or a line has a zero quantity or negative price.
    pub fn validate(&self) -> Result<(), NotifyError> {
        if self.user_info.name.trim().is_empty() {
            return Err(NotifyError::InvalidBooking(
                "customer name is required".to_string(),
            ));
        }
        if self.user_info.email.trim().is_empty() {
            return Err(NotifyError::InvalidBooking(
                "customer email is required".to_string(),
            ));
        }
        if self.cart_items.is_empty() {
            return Err(NotifyError::InvalidBooking(
                "cart must contain at least one item".to_string(),
            ));
        }

        for item in &self.cart_items {
            if item.treatment.trim().is_empty() {
                return Err(NotifyError::InvalidBooking(format!(
                    "cart item for spa '{}' is missing a treatment",
                    item.spa_id
                )));
            }
            if item.quantity == 0 {
                return Err(NotifyError::InvalidBooking(format!(
                    "cart item '{}' has a zero quantity",
                    item.treatment
                )));
            }
            if item.price.is_sign_negative() {
                return Err(NotifyError::InvalidBooking(format!(
                    "cart item '{}' has a negative price",
                    item.treatment
                )));
            }
        }

        Ok(())
    }

    /// Grand total over every cart line.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart_items.iter().map(CartItem::line_total).sum()
    }

    /// The cart lines belonging to the first spa in the cart. Notices to the
    /// spa owner cover only that spa's bookings.
    #[must_use]
    pub fn first_spa_items(&self) -> Vec<&CartItem> {
        let Some(first) = self.cart_items.first() else {
            return Vec::new();
        };
        self.cart_items
            .iter()
            .filter(|item| item.spa_id == first.spa_id)
            .collect()
    }
}
