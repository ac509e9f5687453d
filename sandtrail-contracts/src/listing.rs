use sandtrail_model::Excursion;

/// Read access to the fields the catalog filter engine searches and sorts on.
///
/// Lets the engine run over owned records, shared `Arc`s or lightweight
/// projections without caring which.
pub trait Listing {
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    fn location(&self) -> &str;

    fn price(&self) -> f64;

    fn rating(&self) -> f64;
}

impl Listing for Excursion {
    fn title(&self) -> &str {
        Excursion::title(self)
    }

    fn description(&self) -> &str {
        Excursion::description(self)
    }

    fn location(&self) -> &str {
        Excursion::location(self)
    }

    fn price(&self) -> f64 {
        Excursion::price(self)
    }

    fn rating(&self) -> f64 {
        Excursion::rating(self)
    }
}

impl<T: Listing + ?Sized> Listing for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn location(&self) -> &str {
        (**self).location()
    }

    fn price(&self) -> f64 {
        (**self).price()
    }

    fn rating(&self) -> f64 {
        (**self).rating()
    }
}

impl<T: Listing + ?Sized> Listing for std::sync::Arc<T> {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn location(&self) -> &str {
        (**self).location()
    }

    fn price(&self) -> f64 {
        (**self).price()
    }

    fn rating(&self) -> f64 {
        (**self).rating()
    }
}
