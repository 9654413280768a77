// Property-based tests for date arithmetic, overlap and drag selection

use chrono::NaiveDate;
use proptest::prelude::*;
use shelly_booking::grid::SelectionController;
use shelly_booking::models::booking::{BookingId, NewBooking};
use shelly_booking::models::room::RoomCatalog;
use shelly_booking::services::booking::persistence::encode_snapshot;
use shelly_booking::services::booking::{ranges_overlap, BookingStore};
use shelly_booking::utils::date::{add_days, difference_in_days, each_day, format_date};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1970-01-01 .. roughly 2100
    (0i64..47_000).prop_map(|offset| {
        add_days(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(), offset).unwrap()
    })
}

fn any_range() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (any_date(), 0i64..60).prop_map(|(start, len)| (start, add_days(start, len).unwrap()))
}

proptest! {
    /// Property: overlap is symmetric and every range overlaps itself
    #[test]
    fn prop_overlap_symmetric_and_reflexive(a in any_range(), b in any_range()) {
        prop_assert_eq!(
            ranges_overlap(a.0, a.1, b.0, b.1),
            ranges_overlap(b.0, b.1, a.0, a.1)
        );
        prop_assert!(ranges_overlap(a.0, a.1, a.0, a.1));
    }

    /// Property: date order matches the order of the formatted identifiers
    #[test]
    fn prop_formatted_order_matches_date_order(a in any_date(), b in any_date()) {
        prop_assert_eq!(a.cmp(&b), format_date(a).cmp(&format_date(b)));
    }

    /// Property: sequence has N entries, each one day after the previous
    #[test]
    fn prop_each_day_is_consecutive(anchor in any_date(), count in 0usize..400) {
        let days = each_day(anchor, count).unwrap();
        prop_assert_eq!(days.len(), count);
        for pair in days.windows(2) {
            prop_assert_eq!(difference_in_days(pair[0], pair[1]), 1);
        }
        let mut unique = days.clone();
        unique.dedup();
        prop_assert_eq!(unique.len(), count);
    }

    /// Property: difference_in_days inverts add_days
    #[test]
    fn prop_difference_inverts_add(anchor in any_date(), k in 0i64..5_000) {
        prop_assert_eq!(difference_in_days(anchor, anchor), 0);
        prop_assert_eq!(difference_in_days(anchor, add_days(anchor, k).unwrap()), k);
    }

    /// Property: highlight covers exactly [min, max] of the drag endpoints
    #[test]
    fn prop_selection_is_normalized(start in 0usize..60, end in 0usize..60, index in 0usize..60) {
        let mut controller = SelectionController::new();
        controller.begin("r1", start);
        controller.update("r1", end);

        let (lo, hi) = (start.min(end), start.max(end));
        prop_assert_eq!(controller.is_selected("r1", index), lo <= index && index <= hi);
        prop_assert!(!controller.is_selected("r2", index));

        let committed = controller.finish().unwrap();
        prop_assert_eq!((committed.start_index, committed.end_index), (lo, hi));
    }

    /// Property: whitespace-only guest names never change the collection
    #[test]
    fn prop_blank_guest_rejected(blank in "[ \t\n]{0,8}", start in any_date()) {
        let mut store = BookingStore::in_memory(RoomCatalog::default());
        store.create(NewBooking::new("r1", start, start, "Smith")).unwrap();
        let before = encode_snapshot(store.bookings()).unwrap();

        prop_assert!(store.create(NewBooking::new("r1", start, start, blank)).is_err());
        prop_assert!(store.delete(&BookingId::from("missing")).is_none());
        prop_assert_eq!(encode_snapshot(store.bookings()).unwrap(), before);
    }
}
