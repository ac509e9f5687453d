use chrono::{Local, NaiveDate};

/// Guests pre-selected when a detail page opens.
pub const DEFAULT_ADULTS: u32 = 2;

/// Ephemeral guest and date selection for a single excursion.
///
/// Adults never drop below one and children never below zero; setters clamp
/// rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDraft {
    date: NaiveDate,
    adults: u32,
    children: u32,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl BookingDraft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            adults: DEFAULT_ADULTS,
            children: 0,
        }
    }

    pub fn with_guests(mut self, adults: i64, children: i64) -> Self {
        self.set_adults(adults);
        self.set_children(children);
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Set the adult count, clamping to at least one.
    pub fn set_adults(&mut self, adults: i64) {
        self.adults = clamp_count(adults, 1);
    }

    /// Set the child count, clamping to at least zero.
    pub fn set_children(&mut self, children: i64) {
        self.children = clamp_count(children, 0);
    }

    pub fn increment_adults(&mut self) {
        self.adults = self.adults.saturating_add(1);
    }

    pub fn decrement_adults(&mut self) {
        self.adults = self.adults.saturating_sub(1).max(1);
    }

    pub fn increment_children(&mut self) {
        self.children = self.children.saturating_add(1);
    }

    pub fn decrement_children(&mut self) {
        self.children = self.children.saturating_sub(1);
    }

    pub fn total_guests(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }

    /// Price the draft at `price_per_person`.
    pub fn quote(&self, price_per_person: f64) -> BookingQuote {
        BookingQuote::new(price_per_person, self.adults, self.children)
    }
}

fn clamp_count(value: i64, min: u32) -> u32 {
    u32::try_from(value.max(i64::from(min))).unwrap_or(u32::MAX)
}

/// Derived totals for a draft. No rounding; formatting is a display concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingQuote {
    pub price_per_person: f64,
    pub adults: u32,
    pub children: u32,
    pub total_guests: u32,
    pub subtotal: f64,
}

impl BookingQuote {
    pub fn new(price_per_person: f64, adults: u32, children: u32) -> Self {
        let adults = adults.max(1);
        let total_guests = adults.saturating_add(children);
        Self {
            price_per_person,
            adults,
            children,
            total_guests,
            subtotal: price_per_person * f64::from(total_guests),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookingDraft {
        BookingDraft::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    #[test]
    fn quote_multiplies_price_by_guests() {
        let quote = draft().with_guests(2, 1).quote(100.0);
        assert_eq!(quote.total_guests, 3);
        assert_eq!(quote.subtotal, 300.0);
    }

    #[test]
    fn adults_clamp_to_one() {
        let mut draft = draft();
        draft.set_adults(0);
        assert_eq!(draft.adults(), 1);
        draft.set_adults(-4);
        assert_eq!(draft.adults(), 1);
        draft.decrement_adults();
        assert_eq!(draft.adults(), 1);
    }

    #[test]
    fn children_clamp_to_zero() {
        let mut draft = draft();
        draft.set_children(-1);
        assert_eq!(draft.children(), 0);
        draft.decrement_children();
        assert_eq!(draft.children(), 0);
        draft.increment_children();
        assert_eq!(draft.total_guests(), 3);
    }

    #[test]
    fn defaults_to_two_adults() {
        let draft = draft();
        assert_eq!((draft.adults(), draft.children()), (2, 0));
        assert_eq!(draft.quote(0.0).subtotal, 0.0);
    }

    #[test]
    fn huge_guest_counts_saturate() {
        let draft = draft().with_guests(i64::MAX, 1);
        assert_eq!(draft.adults(), u32::MAX);
        assert_eq!(draft.total_guests(), u32::MAX);

        let quote = draft.quote(10.0);
        assert_eq!(quote.total_guests, u32::MAX);
        assert_eq!(quote.subtotal, 10.0 * f64::from(u32::MAX));
    }
}
