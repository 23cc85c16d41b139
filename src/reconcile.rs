//! Move Reconciler
//!
//! Turns drag drops and directional controls into server move requests, and
//! decides when a gesture is a no-op. Same-column drag reordering is visually
//! possible but deliberately not persisted; only cross-column moves reach the
//! server. After a successful move the caller must force a full reload, never
//! patch local state.

use crate::board::columns_ordered;
use crate::models::{Column, Task};

/// A planned cross-column move, ready to send to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub task_id: u32,
    /// Destination column
    pub column_id: u32,
    /// Destination position within the column
    pub position: i32,
}

/// Directional move control (left/right neighbor column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Plan a move for a task dropped onto another task.
///
/// Returns `None` when no request should be issued: unknown ids, a drop on
/// itself, or both tasks already in the same column. The destination is the
/// target task's column, at the target task's position (the task physically
/// under the cursor at drop time).
pub fn plan_move(tasks: &[Task], active_id: u32, over_id: u32) -> Option<MoveRequest> {
    if active_id == over_id {
        return None;
    }
    let active = tasks.iter().find(|t| t.id == active_id)?;
    let over = tasks.iter().find(|t| t.id == over_id)?;
    if active.column_id == over.column_id {
        return None;
    }
    Some(MoveRequest {
        task_id: active.id,
        column_id: over.column_id,
        position: over.position,
    })
}

/// Plan a one-column shift left or right for a task.
///
/// The destination is the column immediately before/after the task's current
/// column in display order, at floor position 0. At the first/last column
/// there is no neighbor and the control is simply disabled (`None`).
pub fn plan_shift(
    columns: &[Column],
    tasks: &[Task],
    task_id: u32,
    direction: Direction,
) -> Option<MoveRequest> {
    let task = tasks.iter().find(|t| t.id == task_id)?;
    let ordered = columns_ordered(columns);
    let index = ordered.iter().position(|c| c.id == task.column_id)?;
    let neighbor = match direction {
        Direction::Left => index.checked_sub(1)?,
        Direction::Right => index + 1,
    };
    let destination = ordered.get(neighbor)?;
    Some(MoveRequest {
        task_id,
        column_id: destination.id,
        position: 0,
    })
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
    fn test_plan_move_none_on_self_drop() {
        let tasks = vec![make_task(1, 10, 0)];
        assert_eq!(plan_move(&tasks, 1, 1), None);
    }

    #[test]
    fn test_plan_move_none_on_unknown_ids() {
        let tasks = vec![make_task(1, 10, 0)];
        assert_eq!(plan_move(&tasks, 1, 99), None);
        assert_eq!(plan_move(&tasks, 99, 1), None);
        assert_eq!(plan_move(&tasks, 98, 99), None);
    }

    #[test]
    fn test_plan_move_none_within_same_column() {
        // Same-column reordering is not persisted
        let tasks = vec![make_task(1, 10, 0), make_task(2, 10, 3)];
        assert_eq!(plan_move(&tasks, 1, 2), None);
        assert_eq!(plan_move(&tasks, 2, 1), None);
    }

    #[test]
    fn test_plan_move_targets_over_tasks_column_and_position() {
        let tasks = vec![make_task(1, 10, 2), make_task(2, 20, 0)];
        let request = plan_move(&tasks, 1, 2).unwrap();
        assert_eq!(
            request,
            MoveRequest {
                task_id: 1,
                column_id: 20,
                position: 0,
            }
        );
    }

    #[test]
    fn test_move_then_reload_reflects_new_column() {
        let mut tasks = vec![make_task(1, 10, 2), make_task(2, 20, 0)];
        let request = plan_move(&tasks, 1, 2).unwrap();

        // Server applies the move; the next full reload returns the result
        if let Some(task) = tasks.iter_mut().find(|t| t.id == request.task_id) {
            task.column_id = request.column_id;
            task.position = request.position;
        }

        let in_destination: Vec<u32> = crate::board::tasks_in(&tasks, 20)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(in_destination, vec![1, 2]);
        assert!(crate::board::tasks_in(&tasks, 10).is_empty());
    }

    #[test]
    fn test_plan_shift_walks_columns_in_display_order() {
        // Column ids deliberately disagree with their positions
        let columns = vec![make_column(7, 2), make_column(5, 0), make_column(6, 1)];
        let tasks = vec![make_task(1, 6, 4)];

        let left = plan_shift(&columns, &tasks, 1, Direction::Left).unwrap();
        assert_eq!(left.column_id, 5);
        assert_eq!(left.position, 0);

        let right = plan_shift(&columns, &tasks, 1, Direction::Right).unwrap();
        assert_eq!(right.column_id, 7);
        assert_eq!(right.position, 0);
    }

    #[test]
    fn test_plan_shift_disabled_at_board_edges() {
        let columns = vec![make_column(1, 0), make_column(2, 1)];
        let tasks = vec![make_task(1, 1, 0), make_task(2, 2, 0)];

        assert_eq!(plan_shift(&columns, &tasks, 1, Direction::Left), None);
        assert_eq!(plan_shift(&columns, &tasks, 2, Direction::Right), None);
    }

    #[test]
    fn test_plan_shift_none_for_unknown_task_or_column() {
        let columns = vec![make_column(1, 0), make_column(2, 1)];
        let tasks = vec![make_task(1, 99, 0)];

        assert_eq!(plan_shift(&columns, &tasks, 42, Direction::Right), None);
        // Task references a column the board does not know about
        assert_eq!(plan_shift(&columns, &tasks, 1, Direction::Right), None);
    }
}
