use page_window::core::window::{
    compute, style_function, Style, WindowInput,
};
use page_window::{CalculatorConfig, PageWindowCalculator, PagerError};

fn pages(range: std::ops::RangeInclusive<u32>) -> Vec<u32> {
    range.collect()
}

#[test]
fn digg_short_list_is_left_cluster_only() {
    let view = compute(5, 3, 8, Style::Digg).unwrap();
    assert_eq!(view.left_page_numbers, pages(1..=5));
    assert!(view.middle_page_numbers.is_empty());
    assert!(view.right_page_numbers.is_empty());
    assert_eq!(view.previous_page, Some(2));
    assert_eq!(view.next_page, Some(4));
}

#[test]
fn digg_first_page_shows_frame_and_tail() {
    let view = compute(20, 1, 8, Style::Digg).unwrap();
    assert_eq!(view.left_page_numbers, pages(1..=8));
    assert!(view.middle_page_numbers.is_empty());
    assert_eq!(view.right_page_numbers, vec![19, 20]);
    assert_eq!(view.previous_page, None);
    assert_eq!(view.next_page, Some(2));
}

#[test]
fn digg_near_end_merges_tail() {
    let view = compute(20, 19, 8, Style::Digg).unwrap();
    assert_eq!(view.left_page_numbers, vec![1, 2]);
    assert_eq!(view.middle_page_numbers, pages(13..=20));
    assert!(view.right_page_numbers.is_empty());
}

#[test]
fn digg_middle_has_three_clusters() {
    let view = compute(20, 10, 8, Style::Digg).unwrap();
    assert_eq!(view.left_page_numbers, vec![1, 2]);
    assert_eq!(view.middle_page_numbers, pages(7..=13));
    assert_eq!(view.right_page_numbers, vec![19, 20]);
    assert!(view.page_numbers.is_empty());
}

#[test]
fn filmfeed_centered_window_is_frame_plus_one() {
    let view = compute(20, 10, 8, Style::Filmfeed).unwrap();
    assert_eq!(view.page_numbers, pages(6..=14));
    assert_eq!(view.page_numbers.len(), 9);
    assert!(view.left_page_numbers.is_empty());
}

#[test]
fn muzx_first_page_extends_right() {
    let view = compute(20, 1, 8, Style::Muzx).unwrap();
    assert_eq!(view.page_numbers, pages(1..=9));
}

#[test]
fn muzx_keeps_prev_current_next_order() {
    let view = compute(20, 12, 8, Style::Muzx).unwrap();
    let position = view.page_numbers.iter().position(|&p| p == 12);
    assert_eq!(position, Some(4));
    assert_eq!(view.page_numbers, pages(8..=16));
}

#[test]
fn out_of_range_is_reported_not_clamped() {
    for (total, page) in [(20, 0), (20, 21), (1, 2)] {
        match compute(total, page, 8, Style::Digg) {
            Err(PagerError::OutOfRange { page: p, total_pages }) => {
                assert_eq!(p, page);
                assert_eq!(total_pages, total);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }
}

#[test]
fn style_names_resolve_to_functions() {
    let input = WindowInput::new(20, 10, 8);
    let digg = style_function("digg").unwrap();
    assert_eq!(digg(&input), (Style::Digg.function())(&input));
    assert!(matches!(
        style_function("classic"),
        Err(PagerError::InvalidStyle(_))
    ));
}

#[test]
fn calculator_matches_free_function() {
    for style in Style::ALL {
        let calculator = PageWindowCalculator::new(CalculatorConfig {
            style,
            frame_size: 6,
        })
        .unwrap();
        assert_eq!(
            calculator.compute(30, 17).unwrap(),
            compute(30, 17, 6, style).unwrap()
        );
    }
}
