//! Pre-filled messaging enquiry for a booking.
//!
//! Fire-and-forget: the storefront only builds the text and the deep link,
//! opening it is up to the presentation layer.

use chrono::NaiveDate;
use sandtrail_model::Excursion;
use url::Url;

use crate::booking::draft::BookingDraft;
use crate::error::{Result, StorefrontError};
use crate::pricing::PriceFormatter;

const DEEP_LINK_BASE: &str = "https://wa.me/";

/// `Sun, Oct 18, 2026`
pub fn format_booking_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Enquiry message plus the deep link that opens it in the messaging app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enquiry {
    pub message: String,
    pub url: Url,
}

impl Enquiry {
    /// Compose the enquiry for `excursion` addressed to `contact_number`.
    ///
    /// Non-digit characters in the number are dropped (`+971 50-123` becomes
    /// `97150123`). A number without digits is rejected.
    pub fn compose(
        excursion: &Excursion,
        draft: &BookingDraft,
        contact_number: &str,
        formatter: &PriceFormatter,
    ) -> Result<Self> {
        let digits: String = contact_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            return Err(StorefrontError::InvalidInput(
                "contact number has no digits".into(),
            ));
        }

        let message = compose_message(excursion, draft, formatter);
        let raw = format!(
            "{DEEP_LINK_BASE}{digits}?text={}",
            urlencoding::encode(&message)
        );
        let url = Url::parse(&raw).map_err(|err| {
            StorefrontError::Internal(format!("invalid enquiry link: {err}"))
        })?;

        Ok(Self { message, url })
    }
}

fn compose_message(
    excursion: &Excursion,
    draft: &BookingDraft,
    formatter: &PriceFormatter,
) -> String {
    let quote = draft.quote(excursion.price());
    let location = if excursion.location().is_empty() {
        String::new()
    } else {
        format!("📌 Location: {}", excursion.location())
    };

    let mut lines = vec![
        "Hi! I'm interested in booking this excursion:".to_string(),
        String::new(),
        format!("📍 *{}*", excursion.title()),
    ];
    if !location.is_empty() {
        lines.push(location);
    }
    lines.extend([
        String::new(),
        "*Booking Details:*".to_string(),
        format!("📅 Date: {}", format_booking_date(draft.date())),
        format!("👥 Adults: {}", quote.adults),
        format!("👶 Children: {}", quote.children),
        format!("🎟️ Total Guests: {}", quote.total_guests),
        String::new(),
        format!("💰 Total Price: {}", formatter.format(quote.subtotal)),
        String::new(),
        "Can you help me with the booking?".to_string(),
    ]);
    lines.join("\n")
}
