use crate::Expense;

#[test]
fn test_expense_new() {
    let expense = Expense::new(
        "Groceries".to_string(),
        50.0,
        "Food".to_string(),
        "1".to_string(),
    );

    assert_eq!(expense.title, "Groceries");
    assert_eq!(expense.amount, 50.0);
    assert_eq!(expense.category, "Food");
    assert_eq!(expense.user_id, "1");
    assert_eq!(expense.description, None);
    assert_eq!(expense.created_at, expense.updated_at);
}

#[test]
fn test_expense_ids_are_unique() {
    let a = Expense::new("Gas".to_string(), 30.0, "Transportation".to_string(), "1".to_string());
    let b = Expense::new("Gas".to_string(), 30.0, "Transportation".to_string(), "1".to_string());

    assert_ne!(a.id, b.id);
}
