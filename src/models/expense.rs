//! This file defines the `Expense` type, the core record of the application,
//! and the fixed vocabularies used to classify it.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::models::{DatabaseID, UserID};

/// The fixed set of spending categories.
///
/// Serialized as the display labels the dashboard shows, e.g. "Food & Dining".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, restaurants, and takeaways.
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    /// Fuel, public transport, and vehicle costs.
    #[serde(rename = "Transportation")]
    Transportation,
    /// General retail purchases.
    #[serde(rename = "Shopping")]
    Shopping,
    /// Movies, games, events.
    #[serde(rename = "Entertainment")]
    Entertainment,
    /// Power, water, internet, rates.
    #[serde(rename = "Utilities & Bills")]
    UtilitiesAndBills,
    /// Medical and pharmacy costs.
    #[serde(rename = "Healthcare")]
    Healthcare,
    /// Courses, books, and fees.
    #[serde(rename = "Education")]
    Education,
    /// Everything that does not fit the other categories.
    #[serde(rename = "Miscellaneous")]
    Miscellaneous,
}

impl Category {
    /// Map a free-text label onto a category, if it matches one exactly.
    ///
    /// Recurring items store their category as free text, so materializing
    /// one into an expense goes through this function.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Food & Dining" => Some(Category::FoodAndDining),
            "Transportation" => Some(Category::Transportation),
            "Shopping" => Some(Category::Shopping),
            "Entertainment" => Some(Category::Entertainment),
            "Utilities & Bills" => Some(Category::UtilitiesAndBills),
            "Healthcare" => Some(Category::Healthcare),
            "Education" => Some(Category::Education),
            "Miscellaneous" => Some(Category::Miscellaneous),
            _ => None,
        }
    }

    /// The label shown to users and written to CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::UtilitiesAndBills => "Utilities & Bills",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Miscellaneous => "Miscellaneous",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How an expense was paid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Physical cash.
    Cash,
    /// Debit or credit card.
    Card,
    /// Phone or online wallet.
    #[serde(rename = "Digital Wallet")]
    DigitalWallet,
    /// Direct transfer between bank accounts.
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    /// The label shown to users and written to CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::DigitalWallet => "Digital Wallet",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single spend of money, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The expense's ID in the record store.
    pub id: DatabaseID,
    /// The ID of the user that owns this expense. Immutable after creation.
    pub user_id: UserID,
    /// The amount of money spent. Never negative.
    pub amount: f64,
    /// The calendar date the money was spent.
    pub date: Date,
    /// What kind of spend this was.
    pub category: Category,
    /// Optional free-text detail.
    pub description: Option<String>,
    /// How the expense was paid.
    pub payment_method: PaymentMethod,
    /// Free-form labels for ad-hoc grouping.
    pub tags: Vec<String>,
    /// When the record was created.
    pub created_at: OffsetDateTime,
    /// When the record was last modified.
    pub updated_at: OffsetDateTime,
}
