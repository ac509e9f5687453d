//! Booking flow: guest selection, the cart line submitted to checkout, and the
//! messaging enquiry offered as an alternative.

pub mod cart_line;
pub mod draft;
pub mod enquiry;

pub use cart_line::build_cart_line;
pub use draft::{BookingDraft, BookingQuote};
pub use enquiry::{Enquiry, format_booking_date};
