use crate::{GetCurrentUserUseCase, Result};

use ft_core::Expense;

use serde::Serialize;

/// What the home screen renders after login.
#[derive(Debug, Clone, Serialize)]
pub struct HomeSummary {
    /// Greeting line, e.g. "Hi, dhimas"
    pub title: String,
    pub user_email: String,
    pub total_this_month: f64,
    pub expenses: Vec<Expense>,
}

/// Builds the home summary for the current user.
pub struct HomeUseCase {
    get_current_user: GetCurrentUserUseCase,
}

impl HomeUseCase {
    pub fn new(get_current_user: GetCurrentUserUseCase) -> Self {
        Self { get_current_user }
    }

    pub async fn execute(&self) -> Result<HomeSummary> {
        let user = self.get_current_user.execute().await?;

        let (name, user_email, user_id) = match &user {
            Some(user) => (
                user.display_name().to_string(),
                user.email.clone(),
                user.id.clone(),
            ),
            None => (String::from("User"), String::new(), String::new()),
        };

        // Placeholder rows until the expense ledger is wired up.
        let expenses = sample_expenses(&user_id);
        let total_this_month = expenses.iter().map(|expense| expense.amount).sum();

        Ok(HomeSummary {
            title: format!("Hi, {name}"),
            user_email,
            total_this_month,
            expenses,
        })
    }
}

fn sample_expenses(user_id: &str) -> Vec<Expense> {
    [
        ("Groceries", 50.00, "Food"),
        ("Gas", 30.00, "Transportation"),
        ("Coffee", 5.50, "Food"),
        ("Movie Ticket", 12.00, "Entertainment"),
    ]
    .into_iter()
    .map(|(title, amount, category)| {
        Expense::new(
            title.to_string(),
            amount,
            category.to_string(),
            user_id.to_string(),
        )
    })
    .collect()
}
