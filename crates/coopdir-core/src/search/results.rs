use crate::models::{CoopId, CoopRecord};

/// A single clickable entry in the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub id: CoopId,
    pub name: String,
    pub edit_path: String,
}

/// Route of the edit view for a record.
pub fn edit_path(id: &CoopId) -> String {
    format!("/edit/{id}/home")
}

/// Map records to display rows, keeping backend order.
pub fn result_rows(records: &[CoopRecord]) -> Vec<ResultRow> {
    records
        .iter()
        .map(|record| ResultRow {
            id: record.id.clone(),
            name: record.name.clone(),
            edit_path: edit_path(&record.id),
        })
        .collect()
}
