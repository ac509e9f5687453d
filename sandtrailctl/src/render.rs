//! Plain-text rendering of storefront data for the terminal.

use std::fmt::Write;

use sandtrail_core::booking::{BookingQuote, format_booking_date};
use sandtrail_core::detail::{display_inclusions, safety_guide};
use sandtrail_core::pricing::PriceFormatter;
use sandtrail_model::Excursion;

pub fn listing_row(excursion: &Excursion, prices: &PriceFormatter) -> String {
    let location = if excursion.location().is_empty() {
        "-"
    } else {
        excursion.location()
    };
    format!(
        "{:>10}  {:<36}  {:<12}  {:>14}  {:.1}",
        excursion.id().route_segment(),
        excursion.title(),
        location,
        prices.format(excursion.price()),
        excursion.rating(),
    )
}

pub fn detail(excursion: &Excursion, prices: &PriceFormatter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", excursion.title());
    if !excursion.location().is_empty() {
        let _ = writeln!(out, "Location:   {}", excursion.location());
    }
    if !excursion.duration().is_empty() {
        let _ = writeln!(out, "Duration:   {}", excursion.duration());
    }
    if !excursion.group_size().is_empty() {
        let _ = writeln!(out, "Group size: {}", excursion.group_size());
    }
    let _ = writeln!(
        out,
        "Rating:     {:.1} ({} reviews)",
        excursion.rating(),
        excursion.reviews_count()
    );

    let _ = write!(out, "Price:      {} per person", prices.format(excursion.price()));
    if let (Some(original), Some(discount)) = (excursion.original_price(), excursion.discount()) {
        let percent = discount / original * 100.0;
        let _ = write!(out, " (was {}, {percent:.0}% off)", prices.format(original));
    }
    out.push('\n');

    if !excursion.description().is_empty() {
        let _ = writeln!(out, "\n{}", excursion.description());
    }

    let _ = writeln!(out, "\nIncluded:");
    for item in display_inclusions(excursion) {
        let _ = writeln!(out, "  - {item}");
    }
    if let Some(guide) = safety_guide(excursion) {
        let _ = writeln!(out, "\nSafety guide: {guide}");
    }
    out
}

pub fn quote(
    excursion: &Excursion,
    date: chrono::NaiveDate,
    quote: &BookingQuote,
    prices: &PriceFormatter,
) -> String {
    format!(
        "{}\n{}\nAdults: {}  Children: {}  Total guests: {}\n{} x {} = {}\n",
        excursion.title(),
        format_booking_date(date),
        quote.adults,
        quote.children,
        quote.total_guests,
        prices.format(quote.price_per_person),
        quote.total_guests,
        prices.format(quote.subtotal),
    )
}
