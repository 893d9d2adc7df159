//! Header resolution: which column of a price file holds which role

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic meaning of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Product name
    Product,
    /// Price of one package
    Price,
    /// Package weight
    Weight,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Product => write!(f, "product"),
            Role::Price => write!(f, "price"),
            Role::Weight => write!(f, "weight"),
        }
    }
}

/// Accepted header names for each role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Synonyms {
    pub product: Vec<String>,
    pub price: Vec<String>,
    pub weight: Vec<String>,
}

impl Synonyms {
    /// Build synonym sets from string slices
    pub fn new(product: &[&str], price: &[&str], weight: &[&str]) -> Self {
        let owned = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            product: owned(product),
            price: owned(price),
            weight: owned(weight),
        }
    }

    /// Synonym set for a role
    pub fn for_role(&self, role: Role) -> &[String] {
        match role {
            Role::Product => &self.product,
            Role::Price => &self.price,
            Role::Weight => &self.weight,
        }
    }
}

impl Default for Synonyms {
    fn default() -> Self {
        Self::new(
            &["название", "продукт", "товар", "наименование"],
            &["цена", "розница"],
            &["фасовка", "масса", "вес"],
        )
    }
}

/// Zero-based column indices of the three roles in one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub product: usize,
    pub price: usize,
    pub weight: usize,
}

impl ColumnMap {
    /// Column index for a role
    pub fn index(&self, role: Role) -> usize {
        match role {
            Role::Product => self.product,
            Role::Price => self.price,
            Role::Weight => self.weight,
        }
    }
}

/// Map file headers onto roles.
///
/// For every role the leftmost header that appears in the role's synonym set
/// wins; the order of names inside the synonym list does not matter. Matching
/// is exact and case-sensitive. On failure the first unresolved role is
/// returned, checked in the order product, price, weight.
pub fn resolve_headers<S: AsRef<str>>(
    headers: &[S],
    synonyms: &Synonyms,
) -> std::result::Result<ColumnMap, Role> {
    let find = |role: Role| {
        let names = synonyms.for_role(role);
        headers
            .iter()
            .position(|h| names.iter().any(|n| n == h.as_ref()))
            .ok_or(role)
    };

    Ok(ColumnMap {
        product: find(Role::Product)?,
        price: find(Role::Price)?,
        weight: find(Role::Weight)?,
    })
}
