use serde::{Deserialize, Serialize};

use super::Record;

/// Gasto del conductor (sólo alta y baja)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub amount: f64,
}

impl Record for Expense {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
