#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use loyalty_dashboard::hooks::use_theme::Theme;
    use loyalty_dashboard::hooks::use_toast::{ToastAction, ToastKind, ToastQueue};
    use loyalty_dashboard::models::{
        calendar::{CalendarMonth, add_to_range, is_selectable},
        customer::NewCustomer,
        date_range::{DateInterval, DateRangeSelection, Preset, SelectionMode, end_of_day, start_of_day},
        error::AppError,
        menu::{MenuCategory, MenuDraft},
        metrics::percent_change,
        order::{OrderFilter, OrderStatus, StatusFilter},
        settings::{LoyaltySettings, NotificationKind, NotificationPrefs, Preferences, ProfileSettings, RestaurantSettings},
    };
    use loyalty_dashboard::services::{
        export,
        repository::{ActivityRepository, CustomerRepository, MenuRepository, MetricsRepository, OrderRepository},
        store::{InMemoryStore, StoreAction},
    };
    use std::rc::Rc;
    use yew::Reducible;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Friday afternoon, local wall clock
    fn now() -> NaiveDateTime {
        date(2026, 2, 6).and_hms_opt(14, 30, 0).unwrap()
    }

    // Drives the selection the way the calendar does: one click at a time
    fn click(selection: &mut DateRangeSelection, day: NaiveDate) {
        let next = add_to_range(&selection.interval(), day);
        selection.select_custom_range(next);
    }

    // Mon 2 Feb through Sun 8 Feb 2026
    fn full_week() -> DateInterval {
        DateInterval::between_dates(date(2026, 2, 2), date(2026, 2, 8)).unwrap()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::InvalidRange.to_string(),
            "Invalid date range: start is after end"
        );
        assert_eq!(
            AppError::Validation("Please enter a valid price".to_string()).to_string(),
            "Please enter a valid price"
        );
        assert_eq!(
            AppError::NotFound("customer 9".to_string()).to_string(),
            "Not found: customer 9"
        );
    }

    // ===== Preset Tests =====

    #[test]
    fn test_default_selection_is_last_seven_days() {
        let selection = DateRangeSelection::new(now());

        assert_eq!(selection.mode(), SelectionMode::Preset(Preset::LAST_7_DAYS));
        assert_eq!(selection.display_label(), "Last 7 Days");
        assert_eq!(selection.interval().from(), Some(start_of_day(date(2026, 1, 31))));
        assert_eq!(selection.interval().to(), Some(end_of_day(date(2026, 2, 6))));
        assert_eq!(selection.selected_day_count(), Some(7));
    }

    #[test]
    fn test_each_preset_spans_its_day_count() {
        let expected_starts = [date(2026, 1, 31), date(2026, 1, 8), date(2025, 11, 9)];

        for (preset, first) in Preset::all().iter().zip(expected_starts) {
            let mut selection = DateRangeSelection::new(now());
            selection.select_preset(*preset, now());

            assert_eq!(selection.active_preset(), Some(*preset));
            assert_eq!(selection.interval().from(), Some(start_of_day(first)));
            assert_eq!(selection.interval().to(), Some(end_of_day(date(2026, 2, 6))));
            assert_eq!(selection.selected_day_count(), Some(preset.days()));
            assert_eq!(
                selection.display_label(),
                format!("Last {} Days", preset.days())
            );
        }
    }

    #[test]
    fn test_selecting_same_preset_twice_is_idempotent() {
        let mut once = DateRangeSelection::new(now());
        once.select_preset(Preset::LAST_30_DAYS, now());

        let mut twice = once;
        twice.select_preset(Preset::LAST_30_DAYS, now());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_same_preset_at_any_time_of_day_gives_same_selection() {
        let day = date(2026, 2, 6);
        let just_after_midnight = day.and_hms_opt(0, 0, 1).unwrap();
        let just_before_midnight = day.and_hms_milli_opt(23, 59, 59, 999).unwrap();

        let mut morning = DateRangeSelection::new(now());
        morning.select_preset(Preset::LAST_7_DAYS, just_after_midnight);
        let mut night = morning;
        night.select_preset(Preset::LAST_7_DAYS, just_before_midnight);

        assert_eq!(morning, night);
        assert_eq!(night.interval().from(), Some(start_of_day(date(2026, 1, 31))));
        assert_eq!(night.interval().to(), Some(end_of_day(day)));
    }

    #[test]
    fn test_preset_catalog_windows_are_well_ordered() {
        for preset in Preset::all() {
            assert!(preset.days() >= 1);
            let interval = preset.interval_at(now());
            let (from, to) = (interval.from().unwrap(), interval.to().unwrap());
            assert!(from <= to);
            assert_eq!(
                DateInterval::new(from, to).map(|i| i.day_count()),
                Ok(Some(preset.days()))
            );
        }
        assert_eq!(Preset::LAST_30_DAYS.label(), "30 Days");
    }

    #[test]
    fn test_preset_lookup_by_days() {
        assert_eq!(Preset::from_days(90), Some(Preset::LAST_90_DAYS));
        assert_eq!(Preset::from_days(14), None);
        assert_eq!(Preset::default(), Preset::LAST_7_DAYS);
    }

    // ===== Custom Range Tests =====

    #[test]
    fn test_custom_range_label_and_count() {
        let mut selection = DateRangeSelection::new(now());
        selection.select_custom_range(None);

        click(&mut selection, date(2026, 1, 1));
        assert!(selection.is_custom());
        assert_eq!(selection.display_label(), "Jan 1, 2026");
        assert_eq!(selection.selected_day_count(), None);

        click(&mut selection, date(2026, 1, 5));
        assert_eq!(selection.display_label(), "Jan 1 - Jan 5, 2026");
        assert_eq!(selection.selected_day_count(), Some(5));
    }

    #[test]
    fn test_custom_range_matching_a_preset_stays_custom() {
        let mut selection = DateRangeSelection::new(now());
        let week = DateInterval::between_dates(date(2026, 1, 31), date(2026, 2, 6)).unwrap();
        selection.select_custom_range(Some(week));

        assert_eq!(selection.mode(), SelectionMode::Custom);
        assert_eq!(selection.active_preset(), None);
        assert_eq!(selection.selected_day_count(), Some(7));
        assert_eq!(selection.display_label(), "Jan 31 - Feb 6, 2026");
    }

    #[test]
    fn test_clearing_custom_range() {
        let mut selection = DateRangeSelection::new(now());
        selection.select_custom_range(None);

        assert!(selection.is_custom());
        assert!(selection.interval().is_empty());
        assert_eq!(selection.display_label(), "Select dates");
        assert_eq!(selection.selected_day_count(), None);
    }

    #[test]
    fn test_reset_returns_to_default_preset() {
        let mut selection = DateRangeSelection::new(now());
        click(&mut selection, date(2026, 1, 10));
        assert!(selection.is_custom());

        selection.reset(now());
        assert_eq!(selection, DateRangeSelection::new(now()));
    }

    #[test]
    fn test_interval_rejects_reversed_bounds() {
        let result = DateInterval::new(start_of_day(date(2026, 1, 5)), start_of_day(date(2026, 1, 1)));
        assert_eq!(result, Err(AppError::InvalidRange));

        let spanning = DateInterval::spanning(start_of_day(date(2026, 1, 5)), start_of_day(date(2026, 1, 1)));
        assert_eq!(spanning.from(), Some(start_of_day(date(2026, 1, 1))));
    }

    #[test]
    fn test_start_only_interval_covers_one_day() {
        let interval = DateInterval::starting_at(start_of_day(date(2026, 1, 3)));

        assert!(interval.contains(date(2026, 1, 3)));
        assert!(!interval.contains(date(2026, 1, 4)));
        assert!(!interval.is_complete());
        assert_eq!(interval.dates(), vec![date(2026, 1, 3)]);
        assert!(!DateInterval::EMPTY.contains(date(2026, 1, 3)));
    }

    #[test]
    fn test_previous_period_has_same_length() {
        let interval = DateInterval::between_dates(date(2026, 1, 1), date(2026, 1, 5)).unwrap();
        let previous = interval.previous_period().unwrap();

        assert_eq!(previous.from(), Some(start_of_day(date(2025, 12, 27))));
        assert_eq!(previous.to(), Some(end_of_day(date(2025, 12, 31))));
        assert_eq!(previous.day_count(), Some(5));
        assert_eq!(DateInterval::EMPTY.previous_period(), None);
    }

    // ===== Range Calendar Tests =====

    #[test]
    fn test_click_on_range_end_restarts_selection() {
        let range = DateInterval::between_dates(date(2026, 1, 1), date(2026, 1, 5)).unwrap();
        let next = add_to_range(&range, date(2026, 1, 5)).unwrap();

        assert_eq!(next.from(), Some(start_of_day(date(2026, 1, 5))));
        assert_eq!(next.to(), None);
    }

    #[test]
    fn test_click_on_range_start_clears() {
        let range = DateInterval::between_dates(date(2026, 1, 1), date(2026, 1, 5)).unwrap();
        assert_eq!(add_to_range(&range, date(2026, 1, 1)), None);

        let single = DateInterval::spanning(start_of_day(date(2026, 1, 1)), start_of_day(date(2026, 1, 1)));
        assert_eq!(add_to_range(&single, date(2026, 1, 1)), None);
    }

    #[test]
    fn test_click_outside_range_extends_it() {
        let range = DateInterval::between_dates(date(2026, 1, 1), date(2026, 1, 5)).unwrap();

        let earlier = add_to_range(&range, date(2025, 12, 30)).unwrap();
        assert_eq!(earlier.from(), Some(start_of_day(date(2025, 12, 30))));
        assert_eq!(earlier.to().map(|t| t.date()), Some(date(2026, 1, 5)));

        let inside = add_to_range(&range, date(2026, 1, 3)).unwrap();
        assert_eq!(inside.from(), Some(start_of_day(date(2026, 1, 1))));
        assert_eq!(inside.to(), Some(start_of_day(date(2026, 1, 3))));
    }

    #[test]
    fn test_second_click_before_start_orders_bounds() {
        let start = DateInterval::starting_at(start_of_day(date(2026, 1, 5)));
        let range = add_to_range(&start, date(2026, 1, 2)).unwrap();

        assert_eq!(range.from(), Some(start_of_day(date(2026, 1, 2))));
        assert_eq!(range.to(), Some(start_of_day(date(2026, 1, 5))));
        assert_eq!(range.day_count(), Some(4));
    }

    #[test]
    fn test_future_days_are_not_selectable() {
        let today = date(2026, 2, 6);
        assert!(is_selectable(today, today));
        assert!(is_selectable(date(2025, 2, 6), today));
        assert!(!is_selectable(date(2026, 2, 7), today));
    }

    #[test]
    fn test_calendar_opens_on_selection_start() {
        let range = DateInterval::between_dates(date(2026, 1, 1), date(2026, 1, 5)).unwrap();
        let month = CalendarMonth::initial(&range, date(2026, 2, 6));

        assert_eq!(month.first_day(), date(2026, 1, 1));
        let shown = month.run(2);
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[1].title(), "February 2026");
    }

    // ===== Customer Repository Tests =====

    #[test]
    fn test_search_customers_by_mobile() {
        let store = InMemoryStore::seeded();

        assert_eq!(store.search_customers("").len(), 2);
        assert_eq!(store.search_customers("8146").len(), 2);
        assert_eq!(store.search_customers("313").len(), 1);
        assert!(store.search_customers("0000").is_empty());
    }

    #[test]
    fn test_new_customer_requires_ten_digits() {
        let expected = Err(AppError::Validation(
            "Please enter a valid mobile number".to_string(),
        ));

        assert_eq!(NewCustomer::parse("12345"), expected);
        assert_eq!(NewCustomer::parse("98765abcde"), expected);
        assert_eq!(NewCustomer::parse(" 9876543210 ").unwrap().mobile(), "9876543210");
    }

    #[test]
    fn test_add_customer_rejects_duplicate_mobile() {
        let mut store = InMemoryStore::seeded();
        let duplicate = NewCustomer::parse("8146056898").unwrap();

        let result = store.add_customer(duplicate, date(2026, 2, 6));
        assert_eq!(
            result,
            Err(AppError::Validation(
                "A customer with this mobile number already exists".to_string()
            ))
        );
        assert_eq!(store.list_customers().len(), 2);
    }

    #[test]
    fn test_add_and_remove_customer() {
        let mut store = InMemoryStore::seeded();
        let customer = NewCustomer::parse("9000000001").unwrap();

        let added = store.add_customer(customer, date(2026, 2, 6)).unwrap();
        assert_eq!(added.total_points, 0);
        assert_eq!(added.visits, 0);
        assert_eq!(added.last_visit, date(2026, 2, 6));
        assert_eq!(store.list_customers().len(), 3);

        let removed = store.remove_customer(added.id).unwrap();
        assert_eq!(removed.mobile, "9000000001");
        assert!(matches!(
            store.remove_customer(added.id),
            Err(AppError::NotFound(_))
        ));
    }

    // ===== Order Repository Tests =====

    #[test]
    fn test_filter_orders_by_query_and_status() {
        let store = InMemoryStore::seeded();

        let by_number = OrderFilter {
            query: "ord-00".to_string(),
            status: StatusFilter::All,
        };
        assert_eq!(store.filter_orders(&by_number).len(), 5);

        let by_customer = OrderFilter {
            query: "8146".to_string(),
            status: StatusFilter::All,
        };
        assert_eq!(store.filter_orders(&by_customer).len(), 2);

        let pending = OrderFilter {
            query: String::new(),
            status: StatusFilter::Only(OrderStatus::Pending),
        };
        let orders = store.filter_orders(&pending);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_no, "ORD-003");
        assert_eq!(orders[0].time_label(), "11:45 AM");
    }

    #[test]
    fn test_order_summary_counts_each_status() {
        let summary = InMemoryStore::seeded().order_summary();

        assert_eq!(summary.pending, 1);
        assert_eq!(summary.preparing, 1);
        assert_eq!(summary.ready, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.cancelled, 1);
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "ready".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(OrderStatus::Ready))
        );
        assert!("shipped".parse::<StatusFilter>().is_err());
    }

    // ===== Menu Repository Tests =====

    #[test]
    fn test_filter_menu_by_name_and_category() {
        let store = InMemoryStore::seeded();

        assert_eq!(store.filter_menu("", None).len(), 6);
        assert_eq!(store.filter_menu("chicken", None).len(), 2);
        assert_eq!(store.filter_menu("", Some(MenuCategory::MainCourse)).len(), 2);
        assert_eq!(store.filter_menu("chicken", Some(MenuCategory::Rice)).len(), 1);
        assert_eq!("Main Course".parse::<MenuCategory>(), Ok(MenuCategory::MainCourse));
    }

    #[test]
    fn test_menu_draft_validation() {
        let missing_name = MenuDraft {
            price: "120".to_string(),
            ..MenuDraft::default()
        };
        assert_eq!(
            missing_name.validate(),
            Err(AppError::Validation("Please fill in all required fields".to_string()))
        );

        for price in ["abc", "-5", "0"] {
            let draft = MenuDraft {
                name: "Masala Chai".to_string(),
                price: price.to_string(),
                ..MenuDraft::default()
            };
            assert_eq!(
                draft.validate(),
                Err(AppError::Validation("Please enter a valid price".to_string()))
            );
        }
    }

    #[test]
    fn test_add_toggle_and_remove_menu_item() {
        let mut store = InMemoryStore::seeded();
        let draft = MenuDraft {
            name: "  Masala Chai ".to_string(),
            price: "40".to_string(),
            category: MenuCategory::Beverages,
            ..MenuDraft::default()
        };

        let item = store.add_menu_item(draft.validate().unwrap());
        assert_eq!(item.name, "Masala Chai");
        assert_eq!(item.price, 40.0);
        assert!(item.is_available);
        assert!(item.is_veg);

        assert_eq!(store.toggle_availability(item.id), Ok(false));
        assert_eq!(store.toggle_availability(4), Ok(true));
        assert!(store.toggle_availability(999).is_err());

        store.remove_menu_item(item.id).unwrap();
        assert_eq!(store.list_menu().len(), 6);
    }

    #[test]
    fn test_store_reducer_applies_actions() {
        let store = Rc::new(InMemoryStore::seeded());
        let next = store.clone().reduce(StoreAction::ToggleAvailability(4));

        assert!(!Rc::ptr_eq(&store, &next));
        assert!(next.list_menu().iter().any(|item| item.id == 4 && item.is_available));
        assert!(store.list_menu().iter().any(|item| item.id == 4 && !item.is_available));
    }

    #[test]
    fn test_store_apply_reports_missing_rows() {
        let mut store = InMemoryStore::seeded();

        assert!(store.apply(StoreAction::RemoveCustomer(99)).is_err());
        assert!(store.apply(StoreAction::RemoveMenuItem(1)).is_ok());
        assert_eq!(store.list_menu().len(), 5);
    }

    // ===== Activity Tests =====

    #[test]
    fn test_recent_activities_and_redemptions() {
        let store = InMemoryStore::seeded();

        assert_eq!(store.recent_activities(3).len(), 3);
        assert_eq!(store.recent_activities(50).len(), 8);
        assert_eq!(store.redeemed_points(), 700);
    }

    // ===== Metrics Tests =====

    #[test]
    fn test_daily_metrics_follow_weekday_profile() {
        let store = InMemoryStore::seeded();
        let metrics = store.daily_metrics(&full_week());

        assert_eq!(metrics.len(), 7);
        assert_eq!(metrics[0].date, date(2026, 2, 2));
        assert_eq!(metrics[0].revenue, 4500);
        assert_eq!(metrics[5].orders, 38);

        let summary = store.summarize(&full_week());
        assert_eq!(summary.revenue, 46200);
        assert_eq!(summary.orders, 167);
        assert_eq!(summary.visits, 18);
        assert_eq!(summary.scanned_orders, 127);
    }

    #[test]
    fn test_metrics_for_empty_interval() {
        let store = InMemoryStore::seeded();

        assert!(store.daily_metrics(&DateInterval::EMPTY).is_empty());
        assert_eq!(store.summarize(&DateInterval::EMPTY).average_order_value(), 0.0);
        assert_eq!(store.compare_with_previous(&DateInterval::EMPTY), None);
    }

    #[test]
    fn test_week_over_week_comparison() {
        let comparison = InMemoryStore::seeded()
            .compare_with_previous(&full_week())
            .unwrap();

        assert_eq!(comparison.previous.days, 7);
        assert_eq!(comparison.revenue_change(), Some(0.0));
        assert_eq!(comparison.orders_change(), Some(0.0));
    }

    #[test]
    fn test_percent_change() {
        let change = percent_change(110.0, 100.0).unwrap();
        assert!((change - 10.0).abs() < 1e-9);
        assert_eq!(percent_change(5.0, 0.0), None);
    }

    #[test]
    fn test_export_metrics_as_json() {
        let store = InMemoryStore::seeded();
        let json = export::metrics_to_json(&full_week(), &store.daily_metrics(&full_week())).unwrap();

        assert!(json.contains("\"from\": \"2026-02-02\""));
        assert!(json.contains("\"revenue\": 4500"));

        assert_eq!(
            export::metrics_to_json(&DateInterval::EMPTY, &[]),
            Err(AppError::Export("Select a date range to export".to_string()))
        );
    }

    // ===== Settings Tests =====

    #[test]
    fn test_default_preferences_are_valid() {
        let preferences = Preferences::default();

        assert!(preferences.validate().is_ok());
        assert_eq!(preferences.profile.initials(), "GS");
    }

    #[test]
    fn test_restaurant_hours_must_be_ordered() {
        let settings = RestaurantSettings {
            opening_time: "22:00".to_string(),
            closing_time: "09:00".to_string(),
            ..RestaurantSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(AppError::Validation("Closing time must be after opening time".to_string()))
        );

        let bad_email = RestaurantSettings {
            email: "owner.restaurant.com".to_string(),
            ..RestaurantSettings::default()
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_save_reports_storage_failure() {
        let preferences = Preferences::default();

        let failed = preferences.save_with(|_| Err(AppError::Storage("preferences: quota exceeded".to_string())));
        assert_eq!(
            failed,
            Err(AppError::Storage("preferences: quota exceeded".to_string()))
        );

        let mut stored = None;
        let saved = preferences.save_with(|p| {
            stored = Some(p.clone());
            Ok(())
        });
        assert_eq!(saved, Ok(()));
        assert_eq!(stored, Some(preferences));
    }

    #[test]
    fn test_invalid_preferences_are_never_persisted() {
        let preferences = Preferences {
            loyalty: LoyaltySettings {
                points_per_hundred: 0,
                ..LoyaltySettings::default()
            },
            ..Preferences::default()
        };

        let mut persisted = false;
        let result = preferences.save_with(|_| {
            persisted = true;
            Ok(())
        });

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(!persisted);
    }

    #[test]
    fn test_notification_toggles() {
        let mut prefs = NotificationPrefs::default();
        assert!(prefs.is_enabled(NotificationKind::Email));
        assert!(!prefs.is_enabled(NotificationKind::Sms));

        prefs.set(NotificationKind::Sms, true);
        prefs.set(NotificationKind::Email, false);
        assert!(prefs.is_enabled(NotificationKind::Sms));
        assert!(!prefs.is_enabled(NotificationKind::Email));
    }

    #[test]
    fn test_loyalty_points_and_redemption() {
        let loyalty = LoyaltySettings::default();

        assert_eq!(loyalty.points_for(1250), 125);
        assert_eq!(loyalty.redemption_value(700), 700.0);
        assert!(!loyalty.can_redeem(99));
        assert!(loyalty.can_redeem(100));

        let broken = LoyaltySettings {
            points_per_hundred: 0,
            ..LoyaltySettings::default()
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_saved_preferences_deserialize() {
        let saved = Preferences {
            profile: ProfileSettings {
                first_name: "asha".to_string(),
                ..ProfileSettings::default()
            },
            ..Preferences::default()
        };

        let json = serde_json::to_string(&saved).unwrap();
        let loaded: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.profile.initials(), "AS");
    }

    // ===== Theme Tests =====

    #[test]
    fn test_theme_resolution_and_toggle() {
        assert_eq!(Theme::Auto.resolve(Theme::Dark), Theme::Dark);
        assert_eq!(Theme::Light.resolve(Theme::Dark), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Auto);
    }

    // ===== Toast Queue Tests =====

    #[test]
    fn test_toast_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Customer added successfully!");
        let second = queue.push(ToastKind::Error, "Please enter a valid price");

        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), 2);
        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts()[0].message, "Please enter a valid price");
    }

    #[test]
    fn test_dismissing_unknown_toast_keeps_state() {
        let queue = Rc::new(ToastQueue::default());
        let next = queue.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &next));

        let pushed = next.reduce(ToastAction::Push(ToastKind::Info, "Saved".to_string()));
        assert_eq!(pushed.toasts().len(), 1);
    }
}
