#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_new_transaction_trims_fields() {
    let txn = Transaction::new("  Coffee  ", dec!(4.50), "  Food ");
    assert_eq!(txn.description, "Coffee");
    assert_eq!(txn.category, "Food");
    assert_eq!(txn.amount, dec!(4.50));
}

#[test]
fn test_blank_description_gets_placeholder() {
    let txn = Transaction::new("   ", dec!(1), "Food");
    assert_eq!(txn.description, DESCRIPTION_PLACEHOLDER);
}

#[test]
fn test_blank_category_falls_back() {
    let txn = Transaction::new("Bus", dec!(3), "");
    assert_eq!(txn.category, FALLBACK_CATEGORY);
}

#[test]
fn test_new_transactions_get_distinct_ids() {
    let a = Transaction::new("Same", dec!(1), "Food");
    let b = Transaction::new("Same", dec!(1), "Food");
    assert_ne!(a.id, b.id);
}

#[test]
fn test_matches_query_is_case_insensitive() {
    let txn = Transaction::new("Morning Coffee", dec!(4.5), "Food");
    assert!(txn.matches_query("coffee"));
    assert!(txn.matches_query("foo"));
    assert!(txn.matches_query(""));
    assert!(!txn.matches_query("rent"));
}

#[test]
fn test_short_id_length() {
    let txn = Transaction::new("x", dec!(1), "Food");
    assert_eq!(txn.short_id().len(), 8);
    assert!(txn.id.simple().to_string().starts_with(&txn.short_id()));
}

#[test]
fn test_transaction_json_field_names() {
    let txn = Transaction::new("Coffee", dec!(4.5), "Food");
    let json = serde_json::to_value(&txn).unwrap();
    assert_eq!(json["desc"], "Coffee");
    assert_eq!(json["category"], "Food");
    assert_eq!(json["amount"], 4.5);
    assert!(json["date"].is_string());
    assert!(json["id"].is_string());
}

#[test]
fn test_transaction_without_id_or_date_still_decodes() {
    let raw = r#"{"desc":"Bread","amount":3.2,"category":"Food"}"#;
    let txn: Transaction = serde_json::from_str(raw).unwrap();
    assert_eq!(txn.description, "Bread");
    assert_eq!(txn.amount, dec!(3.2));
    assert!(!txn.id.is_nil());
}

#[test]
fn test_transaction_with_empty_date_decodes() {
    let raw = r#"{"desc":"Bread","amount":3.2,"category":"Food","date":""}"#;
    let txn: Transaction = serde_json::from_str(raw).unwrap();
    assert_eq!(txn.amount, dec!(3.2));

    let bad = r#"{"desc":"Bread","amount":3.2,"category":"Food","date":"soon"}"#;
    assert!(serde_json::from_str::<Transaction>(bad).is_err());
}

#[test]
fn test_transaction_amount_keeps_every_digit() {
    let txn = Transaction::new("Tiny", dec!(0.12345678901234567891), "Food");
    let json = serde_json::to_string(&txn).unwrap();
    assert!(json.contains(r#""amount":0.12345678901234567891"#));
    let back: Transaction = serde_json::from_str(&json).unwrap();
    assert_eq!(back.amount, txn.amount);
}

// ── Theme ─────────────────────────────────────────────────────

#[test]
fn test_theme_parse() {
    assert_eq!(Theme::parse("dark"), Theme::Dark);
    assert_eq!(Theme::parse("LIGHT"), Theme::Light);
    assert_eq!(Theme::parse("high-contrast"), Theme::Contrast);
    assert_eq!(Theme::parse("standard"), Theme::Standard);
    assert_eq!(Theme::parse("neon"), Theme::Standard);
    assert_eq!(Theme::parse(""), Theme::Standard);
}

#[test]
fn test_theme_from_name_rejects_unknown() {
    assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_name("neon"), None);
}

#[test]
fn test_theme_roundtrip() {
    for t in Theme::all() {
        assert_eq!(Theme::parse(t.as_str()), *t, "Roundtrip failed for {t}");
    }
}

#[test]
fn test_theme_next_cycles() {
    let mut theme = Theme::Standard;
    for _ in 0..Theme::all().len() {
        theme = theme.next();
    }
    assert_eq!(theme, Theme::Standard);
    assert_eq!(Theme::Standard.next(), Theme::Dark);
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_find_default_category() {
    assert_eq!(find_default("food"), Some("Food"));
    assert_eq!(find_default(" PHONE PLAN "), Some("Phone plan"));
    assert_eq!(find_default("Rent"), None);
}

#[test]
fn test_default_categories_include_fallback() {
    assert!(DEFAULT_CATEGORIES.contains(&FALLBACK_CATEGORY));
}

// ── LedgerState ───────────────────────────────────────────────

#[test]
fn test_state_default_is_empty() {
    let state = LedgerState::default();
    assert_eq!(state.budget, Decimal::ZERO);
    assert!(state.transactions.is_empty());
    assert!(state.name.is_empty());
    assert_eq!(state.theme(), Theme::Standard);
}

#[test]
fn test_state_decodes_with_missing_fields() {
    let state: LedgerState = serde_json::from_str(r#"{"budget": 250}"#).unwrap();
    assert_eq!(state.budget, dec!(250));
    assert!(state.transactions.is_empty());
}

#[test]
fn test_state_budget_is_a_json_number() {
    let state = LedgerState {
        budget: dec!(100),
        ..Default::default()
    };
    let json = serde_json::to_value(&state).unwrap();
    assert!(json["budget"].is_number());
}
