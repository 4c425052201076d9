//! The product grouping shape.

use serde::{Deserialize, Serialize};

use crate::types::id::CategoryId;

/// A named grouping to which products belong.
///
/// A category may be referenced by zero or more products via
/// [`Product::category_id`]; neither entity owns the other.
///
/// [`Product::category_id`]: crate::types::Product::category_id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Unique category ID, assigned by the upstream data source.
    pub id: CategoryId,
    /// Display label.
    pub name: String,
}
