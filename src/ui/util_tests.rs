#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    // Japanese characters are multi-byte UTF-8
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_emoji() {
    assert_eq!(truncate("🎉🎊🎈🎁", 3), "🎉🎊…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_mixed_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

#[test]
fn test_truncate_two_chars() {
    assert_eq!(truncate("hello", 2), "h…");
}

#[test]
fn test_truncate_single_char_string() {
    assert_eq!(truncate("a", 1), "a");
    assert_eq!(truncate("a", 5), "a");
}

#[test]
fn test_truncate_max_one_with_long_string() {
    // max=1 should always produce "…" for strings longer than 1
    assert_eq!(truncate("ab", 1), "…");
    assert_eq!(truncate("abc", 1), "…");
}

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56), "CHF"), "CHF 1,234.56");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999.99), "CHF"), "CHF 999.99");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0), "CHF"), "CHF 0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50), "EUR"), "-EUR 42.50");
}

#[test]
fn test_format_amount_millions() {
    assert_eq!(format_amount(dec!(10000000.00), "CHF"), "CHF 10,000,000.00");
}

#[test]
fn test_format_amount_rounds_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5), "CHF"), "CHF 1.50");
    assert_eq!(format_amount(dec!(2.345), "CHF"), "CHF 2.34");
}

#[test]
fn test_format_amount_without_currency() {
    assert_eq!(format_amount(dec!(5), ""), "5.00");
}

// ── share_bar ──────────────────────────────────────────────

#[test]
fn test_share_bar_fill() {
    assert_eq!(share_bar(dec!(50), 10), "█████░░░░░");
    assert_eq!(share_bar(dec!(0), 4), "░░░░");
    assert_eq!(share_bar(dec!(100), 4), "████");
}

#[test]
fn test_share_bar_clamps() {
    assert_eq!(share_bar(dec!(140), 4), "████");
    assert_eq!(share_bar(dec!(-3), 4), "░░░░");
    assert_eq!(share_bar(dec!(50), 0), "");
}

// ── split_add_args ─────────────────────────────────────────

fn split(s: &str) -> (String, String, String) {
    split_add_args(s)
}

#[test]
fn test_split_amount_category_description() {
    assert_eq!(
        split("4.50 Food Coffee with milk"),
        ("4.50".into(), "Food".into(), "Coffee with milk".into())
    );
}

#[test]
fn test_split_multi_word_default_category() {
    assert_eq!(
        split("29 phone plan March bill"),
        ("29".into(), "Phone plan".into(), "March bill".into())
    );
}

#[test]
fn test_split_custom_category() {
    assert_eq!(
        split("12 Books Dune"),
        ("12".into(), "Books".into(), "Dune".into())
    );
}

#[test]
fn test_split_default_prefix_needs_word_boundary() {
    // "Foodtruck" is not the default "Food"
    assert_eq!(
        split("8 Foodtruck tacos"),
        ("8".into(), "Foodtruck".into(), "tacos".into())
    );
}

#[test]
fn test_split_amount_only() {
    assert_eq!(split(" 3 "), ("3".into(), String::new(), String::new()));
    assert_eq!(split("3 Gifts"), ("3".into(), "Gifts".into(), String::new()));
}

// ── scrolling ──────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut idx, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut idx, &mut scroll, 10, 3);
    }
    assert_eq!(idx, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut idx, mut scroll) = (2, 0);
    scroll_down(&mut idx, &mut scroll, 3, 10);
    assert_eq!(idx, 2);
}

#[test]
fn test_scroll_up_and_jumps() {
    let (mut idx, mut scroll) = (5, 5);
    scroll_up(&mut idx, &mut scroll);
    assert_eq!((idx, scroll), (4, 4));

    scroll_to_bottom(&mut idx, &mut scroll, 20, 5);
    assert_eq!((idx, scroll), (19, 15));

    scroll_to_top(&mut idx, &mut scroll);
    assert_eq!((idx, scroll), (0, 0));
}
