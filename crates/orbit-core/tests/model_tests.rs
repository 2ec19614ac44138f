// Host-side tests for the records exchanged with the host page.

use orbit_core::{Category, Expense, GroupUser, Settlement};

#[test]
fn dial_order_and_lookup() {
    assert_eq!(Category::from_index(0), Category::Food);
    assert_eq!(Category::from_index(2), Category::Gear);
    assert_eq!(Category::from_index(4), Category::Health);
    assert_eq!(Category::from_index(99), Category::Health);
    for c in Category::ALL {
        assert!(c.color().starts_with('#') && c.color().len() == 7);
        assert!(!c.glyph().is_empty());
        assert_eq!(c.label().to_lowercase(), c.id());
    }
}

#[test]
fn expense_json_uses_lowercase_categories() {
    let expense = Expense {
        id: "e1".to_string(),
        amount: 42,
        category: Category::Travel,
        timestamp: 1_700_000_000_000.0,
        x: 0.5,
        y: 0.25,
    };
    let json = serde_json::to_value(&expense).unwrap();
    assert_eq!(json["category"], "travel");
    assert_eq!(json["amount"], 42);

    let back: Expense = serde_json::from_value(json).unwrap();
    assert_eq!(back, expense);
}

#[test]
fn unknown_category_falls_back() {
    let json = r#"{"id":"x","amount":5,"category":"rent","timestamp":0,"x":0.1,"y":0.2}"#;
    let expense: Expense = serde_json::from_str(json).unwrap();
    assert_eq!(expense.category, Category::Other);
    assert_eq!(expense.category.color(), "#FFFFFF");
}

#[test]
fn settlement_serializes_for_the_host() {
    let settlement = Settlement {
        from_id: "you".to_string(),
        to_id: "alex".to_string(),
        transfer: 30.0,
        users: vec![
            GroupUser::new("you", "You", -50.0, "#FF6B6B"),
            GroupUser::new("alex", "Alex", 0.0, "#4ECDC4"),
        ],
    };
    let json = serde_json::to_value(&settlement).unwrap();
    assert_eq!(json["fromId"], "you");
    assert_eq!(json["toId"], "alex");
    assert_eq!(json["transfer"], 30.0);
    assert_eq!(json["users"][0]["balance"], -50.0);
}

#[test]
fn demo_group_owes_and_is_owed_in_balance() {
    let group = orbit_core::demo_group();
    assert_eq!(group.len(), 4);
    assert_eq!(group[0].name, "You");
    let total: f64 = group.iter().map(|u| u.balance).sum();
    assert_eq!(total, 0.0);
}
