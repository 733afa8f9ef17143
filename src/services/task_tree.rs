//! Task Tree Mutation
//!
//! Recursive lookup/replace over an arbitrarily deep task forest, following
//! each task's `sub_tasks` chain. This is what makes unbounded-depth
//! "drill-in" work.

use crate::models::Task;

/// Depth-first search for the first task matching `task_id` and assign
/// `sub_tasks` to it. Returns whether a match was found; sibling nodes are
/// left untouched.
pub fn attach_subtasks(tasks: &mut [Task], task_id: &str, sub_tasks: Vec<Task>) -> bool {
    for task in tasks.iter_mut() {
        if task.id == task_id {
            task.sub_tasks = Some(sub_tasks);
            return true;
        }
        if let Some(children) = task.sub_tasks.as_mut() {
            if attach_subtasks(children, task_id, sub_tasks.clone()) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionMode;

    fn leaf(id: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {}", id),
            detail: String::new(),
            ai_type: ExecutionMode::Ai,
            estimated_tokens: 1000,
            estimated_cost_ai: 50.0,
            estimated_time_ai: "5m".to_string(),
            estimated_time_human: "0m".to_string(),
            cost_human: 0.0,
            xp: 50,
            completed: false,
            actual_tokens: None,
            ai_steps: None,
            human_steps: None,
            sub_tasks: None,
        }
    }

    fn with_children(id: &str, children: Vec<Task>) -> Task {
        let mut task = leaf(id);
        task.sub_tasks = Some(children);
        task
    }

    #[test]
    fn test_attach_at_top_level() {
        let mut forest = vec![leaf("1.1"), leaf("1.2")];
        assert!(attach_subtasks(&mut forest, "1.2", vec![leaf("sub-1")]));
        assert!(forest[0].sub_tasks.is_none());
        assert_eq!(forest[1].sub_tasks.as_ref().unwrap()[0].id, "sub-1");
    }

    #[test]
    fn test_attach_three_levels_deep_leaves_siblings_alone() {
        let mut forest = vec![
            leaf("1.1"),
            with_children(
                "1.2",
                vec![
                    leaf("sub-1"),
                    with_children("sub-2", vec![leaf("sub-1"), leaf("sub-3")]),
                ],
            ),
        ];

        // "sub-3" lives three levels down; its sibling "sub-1" at the same
        // depth and the shallower "sub-1" must not be disturbed.
        assert!(attach_subtasks(&mut forest, "sub-3", vec![leaf("sub-9")]));

        let level2 = forest[1].sub_tasks.as_ref().unwrap();
        assert!(level2[0].sub_tasks.is_none());
        let level3 = level2[1].sub_tasks.as_ref().unwrap();
        assert!(level3[0].sub_tasks.is_none());
        assert_eq!(level3[1].sub_tasks.as_ref().unwrap()[0].id, "sub-9");
    }

    #[test]
    fn test_first_match_wins_on_duplicate_ids() {
        // Sibling-set uniqueness means "sub-1" can recur across branches;
        // only the first DFS match is updated.
        let mut forest = vec![
            with_children("1.1", vec![leaf("sub-1")]),
            with_children("1.2", vec![leaf("sub-1")]),
        ];
        assert!(attach_subtasks(&mut forest, "sub-1", vec![leaf("sub-x")]));
        assert!(forest[0].sub_tasks.as_ref().unwrap()[0].sub_tasks.is_some());
        assert!(forest[1].sub_tasks.as_ref().unwrap()[0].sub_tasks.is_none());
    }

    #[test]
    fn test_unknown_id_is_a_noop() {
        let mut forest = vec![leaf("1.1")];
        assert!(!attach_subtasks(&mut forest, "9.9", vec![leaf("sub-1")]));
        assert!(forest[0].sub_tasks.is_none());
    }
}
