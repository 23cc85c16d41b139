//! Board Projections
//!
//! Pure ordering helpers the view layer renders from.

use crate::models::{Column, Task};

/// Tasks belonging to `column_id`, ascending by position.
///
/// The sort must be stable: the server owns position uniqueness, so ties are
/// presented in original fetch order. Tasks pointing at a column that does
/// not exist simply never match any rendered column and drop out silently.
pub fn tasks_in(tasks: &[Task], column_id: u32) -> Vec<Task> {
    let mut in_column: Vec<Task> = tasks
        .iter()
        .filter(|t| t.column_id == column_id)
        .cloned()
        .collect();
    in_column.sort_by_key(|t| t.position);
    in_column
}

/// Columns in left-to-right display order (ascending by position)
pub fn columns_ordered(columns: &[Column]) -> Vec<Column> {
    let mut ordered = columns.to_vec();
    ordered.sort_by_key(|c| c.position);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, column_id: u32, position: i32) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            column_id,
            position,
        }
    }

    fn make_column(id: u32, position: i32) -> Column {
        Column {
            id,
            title: format!("Column {}", id),
            position,
        }
    }

    #[test]
    fn test_tasks_in_sorts_by_position_and_filters() {
        let tasks = vec![
            make_task(1, 10, 2),
            make_task(2, 20, 0),
            make_task(3, 10, 0),
            make_task(4, 10, 1),
        ];

        let in_10: Vec<u32> = tasks_in(&tasks, 10).iter().map(|t| t.id).collect();
        assert_eq!(in_10, vec![3, 4, 1]);

        let in_20: Vec<u32> = tasks_in(&tasks, 20).iter().map(|t| t.id).collect();
        assert_eq!(in_20, vec![2]);
    }

    #[test]
    fn test_tasks_in_ties_keep_fetch_order() {
        // Positions collide; arrival order must survive the sort
        let tasks = vec![
            make_task(5, 1, 0),
            make_task(6, 1, 0),
            make_task(7, 1, 0),
        ];
        let ordered: Vec<u32> = tasks_in(&tasks, 1).iter().map(|t| t.id).collect();
        assert_eq!(ordered, vec![5, 6, 7]);
    }

    #[test]
    fn test_task_with_unknown_column_is_dropped_silently() {
        let columns = vec![make_column(1, 0), make_column(2, 1)];
        let tasks = vec![make_task(1, 1, 0), make_task(2, 99, 0)];

        let visible: usize = columns
            .iter()
            .map(|c| tasks_in(&tasks, c.id).len())
            .sum();
        assert_eq!(visible, 1);
    }

    #[test]
    fn test_columns_ordered_by_position() {
        let columns = vec![make_column(3, 2), make_column(1, 0), make_column(2, 1)];
        let ids: Vec<u32> = columns_ordered(&columns).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
