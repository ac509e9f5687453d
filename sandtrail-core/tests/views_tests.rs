mod support;

use std::time::Duration;

use sandtrail_core::carousel::CarouselError;
use sandtrail_core::detail::DetailState;
use sandtrail_core::storefront::LoadStatus;
use sandtrail_core::views::{BannerView, DetailView, ListingView};
use sandtrail_core::StorefrontError;
use sandtrail_model::SortKey;
use support::{Gate, Harness, banner_collection, emirates_catalog, excursion};

fn titles(items: &[sandtrail_model::Excursion]) -> Vec<&str> {
    items.iter().map(|item| item.title()).collect()
}

#[tokio::test]
async fn listing_seeded_with_location_shows_only_that_city() {
    let harness = Harness::new(emirates_catalog());
    let mut view = ListingView::new(harness.storefront.clone(), Some("dubai"));

    assert_eq!(view.mount().await, LoadStatus::Ready);
    let results = view.results();

    assert_eq!(
        titles(&results),
        ["Dune Buggy Adventure", "Hot Air Balloon", "Evening Desert Safari"]
    );
    assert_eq!(view.active_filter_count(), 1);
    assert_eq!(view.summary(), "3 safaris available in dubai");
}

#[tokio::test]
async fn listing_recomputes_only_on_change() {
    let harness = Harness::new(emirates_catalog());
    let mut view = ListingView::new(harness.storefront.clone(), None);
    view.mount().await;

    view.results();
    view.results();
    assert_eq!(view.recomputations(), 1);

    view.set_sort(SortKey::PriceAsc);
    let results = view.results();
    assert_eq!(view.recomputations(), 2);
    assert_eq!(results[0].title(), "Grand Mosque Tour");

    harness.storefront.load_catalog().await;
    view.results();
    assert_eq!(view.recomputations(), 3);
}

#[tokio::test]
async fn listing_search_composes_with_location_and_clears() {
    let harness = Harness::new(emirates_catalog());
    let mut view = ListingView::new(harness.storefront.clone(), None);
    view.mount().await;

    view.set_search("desert");
    view.set_location(Some("Dubai"));
    assert_eq!(titles(&view.results()), ["Evening Desert Safari"]);
    assert_eq!(view.summary(), "1 safari available in Dubai");

    view.set_location(Some("Sharjah"));
    assert!(view.results().is_empty());

    view.clear();
    assert_eq!(view.active_filter_count(), 0);
    assert_eq!(view.results().len(), 5);
    assert_eq!(view.locations(), ["Dubai", "Abu Dhabi", "Sharjah"]);
}

#[tokio::test(start_paused = true)]
async fn banner_rotates_until_unmounted() {
    let harness = Harness::new(Vec::new());
    *harness.catalog.collections.lock() = vec![banner_collection(&[
        "gid://shopify/MediaImage/1",
        "gid://shopify/MediaImage/2",
        "gid://shopify/MediaImage/3",
    ])];
    let mut view = BannerView::new(harness.storefront.clone());

    view.mount().await;
    assert_eq!(view.slide_count(), 3);
    assert_eq!(view.index(), 0);

    tokio::time::sleep(Duration::from_millis(5_100)).await;
    assert_eq!(view.index(), 1);
    assert_eq!(
        view.current().unwrap().as_str(),
        "https://cdn.example.com/banner/2.jpg"
    );

    view.previous();
    assert_eq!(view.index(), 0);
    assert_eq!(
        view.go_to(7),
        Err(CarouselError::OutOfRange { index: 7, len: 3 })
    );

    view.unmount();
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(view.index(), 0);
}

#[tokio::test(start_paused = true)]
async fn banner_with_failed_media_stays_empty() {
    let harness = Harness::new(Vec::new());
    *harness.catalog.collections.lock() = vec![banner_collection(&["gid://shopify/MediaImage/1"])];
    *harness.media.fail.lock() =
        Some(sandtrail_contracts::error::BackendError::Transport("offline".into()));
    let mut view = BannerView::new(harness.storefront.clone());

    view.mount().await;
    tokio::time::sleep(Duration::from_secs(12)).await;

    assert_eq!(view.slide_count(), 0);
    assert!(view.current().is_none());
}

#[test]
fn banner_city_selection_builds_listing_route() {
    let harness = Harness::new(Vec::new());
    let mut view = BannerView::new(harness.storefront.clone());

    assert_eq!(view.select_location("Abu Dhabi"), "/safaris?location=Abu%20Dhabi");
    assert_eq!(view.selected_location(), Some("Abu Dhabi"));
    assert_eq!(view.select_location(""), "/safaris");
    assert_eq!(view.selected_location(), None);
}

#[tokio::test]
async fn detail_view_books_with_clamped_guests() {
    let harness = Harness::new(emirates_catalog());
    let mut view = DetailView::new(harness.storefront.clone(), "2").unwrap();

    assert!(view.state().is_loading());
    view.mount().await;
    assert!(matches!(view.state(), DetailState::Ready(_)));

    view.draft_mut().set_adults(0);
    view.draft_mut().set_children(2);
    let quote = view.quote().unwrap();
    assert_eq!(view.draft().adults(), 1);
    assert_eq!(quote.total_guests, 3);
    assert_eq!(quote.subtotal, 1_800.0);

    let checkout = view.book().await.unwrap();
    assert_eq!(checkout.id, "gid://shopify/Cart/1");
    assert!(!view.is_adding_to_cart());
    assert_eq!(harness.storefront.cart_count(), 3);
}

#[tokio::test]
async fn detail_gallery_is_manual_and_wraps() {
    let harness = Harness::new(emirates_catalog());
    let mut view = DetailView::new(harness.storefront.clone(), "gid://shopify/Product/1").unwrap();
    view.mount().await;

    assert_eq!(view.image(), Some("https://cdn.example.com/1/1.jpg"));
    view.next_image();
    assert_eq!(view.image_index(), 1);
    view.next_image();
    assert_eq!(view.image_index(), 0);
    view.previous_image();
    assert_eq!(view.image_index(), 1);
    assert!(view.select_image(5).is_err());
    assert!(view.select_image(0).is_ok());
    assert_eq!(view.inclusions(), ["Refreshment drink", "Tea & Coffee", "Bottled water"]);
    assert_eq!(view.safety_guide(), None);
}

#[tokio::test]
async fn detail_view_for_missing_excursion() {
    let harness = Harness::new(emirates_catalog());
    let mut view = DetailView::new(harness.storefront.clone(), "999").unwrap();

    assert_eq!(view.mount().await, &DetailState::NotFound);
    assert!(view.image().is_none());
    assert!(view.quote().is_none());
    assert!(matches!(view.book().await, Err(StorefrontError::NotFound(_))));
    assert!(matches!(view.enquiry(), Err(StorefrontError::NotFound(_))));
}

#[test]
fn detail_view_rejects_empty_route() {
    let harness = Harness::new(Vec::new());
    assert!(matches!(
        DetailView::new(harness.storefront.clone(), " "),
        Err(StorefrontError::Model(_))
    ));
}

#[tokio::test]
async fn overlapping_detail_views_both_settle() {
    let harness = Harness::new(emirates_catalog());
    let gate = Gate::new();
    let balloon = excursion(5, "Hot Air Balloon", "Dubai", 1250.0, 4.8);
    harness.catalog.script_get(Ok(Some(balloon)), Some(gate.clone()));

    let mut first = DetailView::new(harness.storefront.clone(), "5").unwrap();
    let pending = tokio::spawn(async move {
        first.mount().await;
        first
    });
    gate.entered.notified().await;

    let mut second = DetailView::new(harness.storefront.clone(), "3").unwrap();
    assert!(matches!(second.mount().await, DetailState::Ready(_)));

    gate.release.notify_one();
    let first = pending.await.unwrap();
    match first.state() {
        DetailState::Ready(excursion) => assert_eq!(excursion.title(), "Hot Air Balloon"),
        other => panic!("expected ready detail, got {other:?}"),
    }
}

#[tokio::test]
async fn detail_labels_follow_selected_currency() {
    let harness = Harness::new(emirates_catalog());
    let mut view = DetailView::new(harness.storefront.clone(), "5").unwrap();
    view.mount().await;

    assert_eq!(view.price_label().as_deref(), Some("AED 1,250.00"));
    harness.storefront.set_currency("usd");
    assert_eq!(view.price_label().as_deref(), Some("USD 1,250.00"));
    assert_eq!(view.subtotal_label().as_deref(), Some("USD 2,500.00"));
}
