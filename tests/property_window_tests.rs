use proptest::prelude::*;
use resale_map::core::{FilteredView, Record, RecordStore, SlidingWindow, WindowConfig};

fn view_of(len: usize) -> FilteredView {
    let records = (0..len)
        .map(|index| Record {
            id: format!("p{index}"),
            area_sqft: "1000".to_owned(),
            bedrooms: "2".to_owned(),
            bathrooms: "2".to_owned(),
            price: "700000".to_owned(),
            date: "2023-01-01".to_owned(),
            address: format!("{index} Granville St"),
            latitude: "49.26".to_owned(),
            longitude: "-123.13".to_owned(),
        })
        .collect();
    RecordStore::new(records).full_view()
}

#[derive(Debug, Clone)]
enum Step {
    Forward,
    Backward,
    Jump(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Forward),
        Just(Step::Backward),
        (0usize..200).prop_map(Step::Jump),
    ]
}

fn assert_window_invariants(window: &SlidingWindow, view: &FilteredView, max_visible: usize) {
    match window.range() {
        None => assert!(view.is_empty()),
        Some(range) => {
            assert!(range.left <= range.right);
            assert!(range.right < view.len());
            assert!(range.count() <= max_visible);
            assert_eq!(window.visible_slice(view).len(), range.count());
        }
    }
}

proptest! {
    #[test]
    fn window_stays_in_bounds_under_any_command_sequence(
        len in 0usize..120,
        items_per_page in 1usize..15,
        max_visible in 1usize..15,
        steps in prop::collection::vec(step_strategy(), 0..40)
    ) {
        let view = view_of(len);
        let config = WindowConfig::new(items_per_page, max_visible).expect("window config");
        let mut window = SlidingWindow::new(config).expect("window");
        window.initialize(&view);
        assert_window_invariants(&window, &view, max_visible);

        for step in steps {
            match step {
                Step::Forward => { window.page_forward(); }
                Step::Backward => { window.page_backward(); }
                Step::Jump(index) => {
                    let id = format!("p{index}");
                    let before = window.range();
                    window.jump_to(&id, &view);
                    if index >= len {
                        prop_assert_eq!(window.range(), before);
                    } else {
                        prop_assert!(window
                            .visible_slice(&view)
                            .iter()
                            .any(|record| record.id == id));
                    }
                }
            }
            assert_window_invariants(&window, &view, max_visible);
        }
    }

    #[test]
    fn paging_forward_reaches_the_last_record(
        len in 1usize..200,
        items_per_page in 1usize..20,
        max_visible in 1usize..20
    ) {
        let view = view_of(len);
        let config = WindowConfig::new(items_per_page, max_visible).expect("window config");
        let mut window = SlidingWindow::new(config).expect("window");
        window.initialize(&view);

        let mut guard = 0;
        while window.page_forward() {
            guard += 1;
            prop_assert!(guard <= len);
        }
        let range = window.range().expect("range");
        prop_assert_eq!(range.right, len - 1);
        prop_assert!(!window.page_info().can_page_forward);
    }

    #[test]
    fn initialize_fills_the_window_from_zero(
        len in 1usize..300,
        max_visible in 1usize..40
    ) {
        let view = view_of(len);
        let config = WindowConfig::new(10, max_visible).expect("window config");
        let mut window = SlidingWindow::new(config).expect("window");
        window.initialize(&view);

        let range = window.range().expect("range");
        prop_assert_eq!(range.left, 0);
        prop_assert_eq!(range.count(), max_visible.min(len));
    }

    #[test]
    fn forward_then_backward_never_ends_right_of_the_start(
        len in 1usize..200,
        items_per_page in 1usize..20,
        max_visible in 1usize..20,
        warmup in 0usize..10
    ) {
        let view = view_of(len);
        let config = WindowConfig::new(items_per_page, max_visible).expect("window config");
        let mut window = SlidingWindow::new(config).expect("window");
        window.initialize(&view);
        for _ in 0..warmup {
            window.page_forward();
        }

        let start = window.range().expect("range");
        window.page_forward();
        window.page_backward();
        let end = window.range().expect("range");
        prop_assert!(end.left <= start.left);
    }
}
