//! Integration tests for the cost estimator, the offer carousel and the
//! display helpers the screens share.

mod common;

use std::time::Duration;

use safeclue::core::{
    carousel::{Carousel, OFFER_INTERVAL},
    estimator::{self, DEFAULT_PLOT_SIZE, FinishQuality, parse_plot_size},
    format::{format_safe_coins, mask_mobile},
};

use common::*;

#[test]
fn test_default_estimate() {
    let estimate = estimator::estimate(DEFAULT_PLOT_SIZE, FinishQuality::default());

    assert_eq!(estimate.rate, 1500);
    assert_eq!(estimate.total, 1_800_000);
}

#[test]
fn test_rates_per_quality() {
    let totals: Vec<u64> = FinishQuality::ALL
        .iter()
        .map(|quality| estimator::estimate(1000, *quality).total)
        .collect();

    assert_eq!(totals, [1_200_000, 1_500_000, 1_900_000]);
}

#[test]
fn test_plot_size_input() {
    assert_eq!(parse_plot_size(" 1500 "), 1500);
    assert_eq!(parse_plot_size("-20"), 0);
    assert_eq!(parse_plot_size("big"), 0);
    assert_eq!(estimator::estimate(parse_plot_size(""), FinishQuality::Premium).total, 0);
}

#[test]
fn test_huge_plot_size_saturates() {
    let plot_size = parse_plot_size("99999999999999999");
    assert_eq!(plot_size, 99_999_999_999_999_999);

    let estimate = estimator::estimate(plot_size, FinishQuality::Premium);

    assert_eq!(estimate.total, u64::MAX);
    assert_eq!(estimator::estimate(u64::MAX, FinishQuality::Basic).total, u64::MAX);
}

#[test]
fn test_quality_parses_case_insensitively() {
    assert_eq!("PREMIUM".parse::<FinishQuality>(), Ok(FinishQuality::Premium));
    assert!("gold".parse::<FinishQuality>().is_err());
}

#[test]
fn test_carousel_advances_and_wraps() {
    let mut carousel = Carousel::new(3);

    carousel.tick(OFFER_INTERVAL - Duration::from_millis(1));
    assert_eq!(carousel.index(), 0);

    carousel.tick(Duration::from_millis(1));
    assert_eq!(carousel.index(), 1);

    carousel.tick(OFFER_INTERVAL * 2);
    assert_eq!(carousel.index(), 0);

    carousel.go_to(2);
    carousel.tick(OFFER_INTERVAL / 2);
    assert_eq!(carousel.index(), 2);
}

#[test]
fn test_empty_carousel_stays_put() {
    let mut carousel = Carousel::new(0);

    carousel.tick(OFFER_INTERVAL * 5);

    assert!(carousel.is_empty());
    assert_eq!(carousel.index(), 0);
}

#[test]
fn test_display_helpers() {
    assert_eq!(mask_mobile(USER_MOBILE), "123****890");
    assert_eq!(mask_mobile("123"), "**********");
    assert_eq!(format_safe_coins(25_500), "25,500");
}
