//! Application view state and expense ledger
//!
//! Pure state transitions driven by user intents and plan outcomes. No
//! rendering logic here; the rendering layer reads the view, the plan, the
//! ledger, and the error flag, and calls the transition methods.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::Result;
use crate::models::{ExpenseCategory, ExpenseItem, ExpenseKind, TravelPlan};

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Trip parameter form (initial); also carries the error display
    #[default]
    Form,
    /// A plan request is in flight
    Loading,
    /// A successful plan is on screen
    Results,
    /// Expense ledger, reachable only from results
    Expenses,
}

impl View {
    /// Display name for the header
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            View::Form => "Form",
            View::Loading => "Yükleniyor",
            View::Results => "Plan",
            View::Expenses => "Harcamalar",
        }
    }
}

/// Ledger totals snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerTotals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Owns the current view, the last successful plan, the expense ledger,
/// and the error display.
///
/// One plan request may be in flight at a time: `submit` is ignored while
/// loading, and outcomes delivered in any state other than `Loading` are
/// discarded, which also drops results that straggle in after a reset.
#[derive(Debug, Default)]
pub struct Planner {
    view: View,
    plan: Option<TravelPlan>,
    error: Option<String>,
    expenses: Vec<ExpenseItem>,
    next_expense_id: u64,
}

impl Planner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed view
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// The last successful plan, present in the results and expenses views
    #[must_use]
    pub fn plan(&self) -> Option<&TravelPlan> {
        self.plan.as_ref()
    }

    /// Error message overlaying the form, if the last request failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Ledger entries in insertion order
    #[must_use]
    pub fn expenses(&self) -> &[ExpenseItem] {
        &self.expenses
    }

    /// Begin a plan request: form moves to loading, prior plan and error
    /// are cleared.
    ///
    /// Returns `true` when the caller should issue the request. A stray
    /// duplicate submit while loading, or a submit from any other view, is
    /// ignored.
    pub fn submit(&mut self) -> bool {
        match self.view {
            View::Form => {
                self.plan = None;
                self.error = None;
                self.view = View::Loading;
                info!("plan request submitted");
                true
            }
            View::Loading => {
                debug!("ignoring submit while a request is in flight");
                false
            }
            other => {
                warn!(view = other.display_name(), "submit outside the form view");
                false
            }
        }
    }

    /// Apply the settled outcome of the in-flight request.
    ///
    /// Success shows the results; failure returns to the form with the
    /// error's user-facing message attached. Outcomes arriving while not
    /// loading are stale and dropped.
    pub fn finish(&mut self, outcome: Result<TravelPlan>) {
        if self.view != View::Loading {
            warn!(
                view = self.view.display_name(),
                "discarding stale plan outcome"
            );
            return;
        }

        match outcome {
            Ok(plan) => {
                info!(city = %plan.city_name, "plan ready");
                self.plan = Some(plan);
                self.error = None;
                self.view = View::Results;
            }
            Err(e) => {
                warn!(error = %e, "plan request failed");
                self.plan = None;
                self.error = Some(e.user_message());
                self.view = View::Form;
            }
        }
    }

    /// Results to expenses; no-op elsewhere
    pub fn show_expenses(&mut self) {
        if self.view == View::Results {
            self.view = View::Expenses;
        } else {
            warn!(
                view = self.view.display_name(),
                "show_expenses outside the results view"
            );
        }
    }

    /// Expenses back to results; no-op elsewhere
    pub fn back(&mut self) {
        if self.view == View::Expenses {
            self.view = View::Results;
        }
    }

    /// Results back to the form, discarding the plan, the error, and the
    /// entire expense ledger.
    pub fn reset(&mut self) {
        if self.view != View::Results {
            warn!(
                view = self.view.display_name(),
                "reset outside the results view"
            );
            return;
        }
        info!("resetting to the form view");
        self.plan = None;
        self.error = None;
        self.expenses.clear();
        self.view = View::Form;
    }

    /// Append a ledger entry and return its freshly assigned id.
    ///
    /// Income entries never carry a category, whatever the caller passes.
    /// Legal in any view; the ledger is independent of plan transitions
    /// until a reset clears it.
    pub fn add_expense(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        kind: ExpenseKind,
        category: Option<ExpenseCategory>,
    ) -> u64 {
        self.next_expense_id += 1;
        let id = self.next_expense_id;
        self.expenses.push(ExpenseItem {
            id,
            description: description.into(),
            amount,
            kind,
            category: match kind {
                ExpenseKind::Expense => category,
                ExpenseKind::Income => None,
            },
            created_at: Utc::now(),
        });
        id
    }

    /// Remove the entry with the given id. A no-op, not an error, when no
    /// such entry exists; returns whether anything was removed.
    pub fn delete_expense(&mut self, id: u64) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|item| item.id != id);
        before != self.expenses.len()
    }

    /// Sum the ledger into income, expense, and balance totals
    #[must_use]
    pub fn totals(&self) -> LedgerTotals {
        let mut income = 0.0;
        let mut expense = 0.0;
        for item in &self.expenses {
            match item.kind {
                ExpenseKind::Income => income += item.amount,
                ExpenseKind::Expense => expense += item.amount,
            }
        }
        LedgerTotals {
            income,
            expense,
            balance: income - expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GezginError;

    fn sample_plan() -> TravelPlan {
        TravelPlan {
            city_name: "Roma".to_string(),
            country_name: "İtalya".to_string(),
            travel_dates: "15-20 Mart 2024".to_string(),
            trip_image_url: "https://images.pexels.com/photos/1/pexels-photo.jpeg".to_string(),
            daily_itinerary: vec![],
            local_cuisine: vec![],
            important_notes: vec![],
            weather_forecast: vec![],
            locations: None,
            grounding_sources: None,
        }
    }

    #[test]
    fn test_happy_path_visits_five_states_in_order() {
        let mut planner = Planner::new();
        let mut visited = vec![planner.view()];

        assert!(planner.submit());
        visited.push(planner.view());
        planner.finish(Ok(sample_plan()));
        visited.push(planner.view());
        planner.show_expenses();
        visited.push(planner.view());
        planner.back();
        visited.push(planner.view());
        planner.reset();
        visited.push(planner.view());

        assert_eq!(
            visited,
            vec![
                View::Form,
                View::Loading,
                View::Results,
                View::Expenses,
                View::Results,
                View::Form,
            ]
        );
    }

    #[test]
    fn test_reset_clears_plan_error_and_ledger() {
        let mut planner = Planner::new();
        planner.submit();
        planner.finish(Ok(sample_plan()));
        planner.add_expense("Hotel", 100.0, ExpenseKind::Expense, None);

        planner.reset();

        assert_eq!(planner.view(), View::Form);
        assert!(planner.plan().is_none());
        assert!(planner.error().is_none());
        assert!(planner.expenses().is_empty());
    }

    #[test]
    fn test_failure_returns_to_form_with_message_and_no_stale_plan() {
        let mut planner = Planner::new();
        planner.submit();
        planner.finish(Err(GezginError::transport("connection refused")));

        assert_eq!(planner.view(), View::Form);
        assert!(planner.plan().is_none());
        assert!(planner.error().is_some());

        // Results-only transitions stay unreachable until a new success.
        planner.show_expenses();
        assert_eq!(planner.view(), View::Form);
    }

    #[test]
    fn test_submit_clears_previous_error() {
        let mut planner = Planner::new();
        planner.submit();
        planner.finish(Err(GezginError::transport("boom")));
        assert!(planner.error().is_some());

        planner.submit();
        assert!(planner.error().is_none());
        assert_eq!(planner.view(), View::Loading);
    }

    #[test]
    fn test_duplicate_submit_while_loading_is_ignored() {
        let mut planner = Planner::new();
        assert!(planner.submit());
        assert!(!planner.submit());
        assert_eq!(planner.view(), View::Loading);
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut planner = Planner::new();
        planner.submit();
        planner.finish(Ok(sample_plan()));
        assert_eq!(planner.view(), View::Results);

        // A straggler settling after the state already moved on changes
        // nothing.
        planner.finish(Err(GezginError::transport("late failure")));
        assert_eq!(planner.view(), View::Results);
        assert!(planner.plan().is_some());
        assert!(planner.error().is_none());
    }

    #[test]
    fn test_ledger_totals() {
        let mut planner = Planner::new();
        planner.add_expense(
            "Hotel",
            100.0,
            ExpenseKind::Expense,
            Some(ExpenseCategory::Accommodation),
        );
        planner.add_expense("Salary", 500.0, ExpenseKind::Income, None);

        let totals = planner.totals();
        assert_eq!(totals.income, 500.0);
        assert_eq!(totals.expense, 100.0);
        assert_eq!(totals.balance, 400.0);
    }

    #[test]
    fn test_expense_ids_are_unique_and_deletion_is_by_id() {
        let mut planner = Planner::new();
        let first = planner.add_expense("Müze bileti", 20.0, ExpenseKind::Expense, None);
        let second = planner.add_expense("Akşam yemeği", 45.0, ExpenseKind::Expense, None);
        assert_ne!(first, second);

        assert!(planner.delete_expense(first));
        assert_eq!(planner.expenses().len(), 1);
        assert_eq!(planner.expenses()[0].id, second);

        // Deleting an unknown id leaves the ledger unchanged.
        assert!(!planner.delete_expense(999));
        assert_eq!(planner.expenses().len(), 1);
    }

    #[test]
    fn test_income_never_keeps_a_category() {
        let mut planner = Planner::new();
        planner.add_expense(
            "Salary",
            500.0,
            ExpenseKind::Income,
            Some(ExpenseCategory::Other),
        );
        assert!(planner.expenses()[0].category.is_none());
    }

    #[test]
    fn test_ledger_survives_view_navigation() {
        let mut planner = Planner::new();
        planner.submit();
        planner.finish(Ok(sample_plan()));
        planner.show_expenses();
        planner.add_expense("Kahve", 5.0, ExpenseKind::Expense, Some(ExpenseCategory::Food));
        planner.back();
        planner.show_expenses();
        assert_eq!(planner.expenses().len(), 1);
    }
}
