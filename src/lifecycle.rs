//! Task Lifecycle
//!
//! Validation for create requests. Deletion is confirmation-gated in the view
//! layer; both operations end in a full reload on success.

/// A validated create-task payload. Position is left to the server (new tasks
/// are effectively appended), description defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub column_id: u32,
}

/// Build a create request from raw form input.
///
/// The title is trimmed; a blank title means no request at all.
pub fn plan_create(column_id: u32, raw_title: &str) -> Option<NewTask> {
    let title = raw_title.trim();
    if title.is_empty() {
        return None;
    }
    Some(NewTask {
        title: title.to_string(),
        description: String::new(),
        column_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_titles_are_rejected() {
        assert_eq!(plan_create(1, ""), None);
        assert_eq!(plan_create(1, "   "), None);
        assert_eq!(plan_create(1, "\t\n"), None);
    }

    #[test]
    fn test_title_is_trimmed_and_description_defaults_empty() {
        let new_task = plan_create(3, "  Write spec  ").unwrap();
        assert_eq!(new_task.title, "Write spec");
        assert_eq!(new_task.description, "");
        assert_eq!(new_task.column_id, 3);
    }
}
