//! List Transitions
//!
//! Pure functions over the authoritative to-do sequence. Every mutation
//! returns a new sequence value; the derived views (filter, due-date
//! sort) never write back.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::models::{Category, Todo};

/// Append a new item unless the text trims to empty.
pub fn create(
    todos: Vec<Todo>,
    id: u32,
    raw_text: &str,
    category: Category,
    due_date: Option<NaiveDateTime>,
) -> Vec<Todo> {
    let text = raw_text.trim();
    if text.is_empty() {
        return todos;
    }
    let mut next = todos;
    next.push(Todo {
        id,
        text: text.to_string(),
        completed: false,
        category,
        due_date,
    });
    next
}

/// Flip `completed` on the matching item
pub fn toggle(todos: Vec<Todo>, id: u32) -> Vec<Todo> {
    todos
        .into_iter()
        .map(|t| {
            if t.id == id {
                Todo { completed: !t.completed, ..t }
            } else {
                t
            }
        })
        .collect()
}

/// Drop the matching item, order otherwise preserved
pub fn remove(todos: Vec<Todo>, id: u32) -> Vec<Todo> {
    todos.into_iter().filter(|t| t.id != id).collect()
}

/// Replace the category on the matching item
pub fn set_category(todos: Vec<Todo>, id: u32, category: Category) -> Vec<Todo> {
    todos
        .into_iter()
        .map(|t| if t.id == id { Todo { category, ..t } } else { t })
        .collect()
}

/// Replace the due date on the matching item; `None` clears it
pub fn set_due_date(todos: Vec<Todo>, id: u32, due_date: Option<NaiveDateTime>) -> Vec<Todo> {
    todos
        .into_iter()
        .map(|t| if t.id == id { Todo { due_date, ..t } } else { t })
        .collect()
}

/// Move the active item to the over item's position.
///
/// Splice semantics: the active element is removed first, then inserted
/// at the index the over element held before removal. No-op when the ids
/// match or either is missing.
pub fn move_by_id(todos: Vec<Todo>, active_id: u32, over_id: u32) -> Vec<Todo> {
    if active_id == over_id {
        return todos;
    }
    let Some(from) = todos.iter().position(|t| t.id == active_id) else {
        return todos;
    };
    let Some(to) = todos.iter().position(|t| t.id == over_id) else {
        return todos;
    };
    let mut next = todos;
    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

/// Category filter: `None` selects everything
pub fn filter_by_category(todos: &[Todo], selected: Option<Category>) -> Vec<Todo> {
    match selected {
        None => todos.to_vec(),
        Some(category) => todos
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect(),
    }
}

/// Display ordering: ascending due date, undated items last.
/// Stable, so equal-ranked items keep their authoritative order.
pub fn sort_by_due_date(todos: Vec<Todo>) -> Vec<Todo> {
    let mut sorted = todos;
    sorted.sort_by(|a, b| match (a.due_date, b.due_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(&b),
    });
    sorted
}

/// The rendered view: filtered, then due-date sorted
pub fn visible(todos: &[Todo], selected: Option<Category>) -> Vec<Todo> {
    sort_by_due_date(filter_by_category(todos, selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_due_date;
    use pretty_assertions::assert_eq;

    fn make_todo(id: u32, text: &str) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed: false,
            category: Category::Other,
            due_date: None,
        }
    }

    fn with_category(mut todo: Todo, category: Category) -> Todo {
        todo.category = category;
        todo
    }

    fn with_due(mut todo: Todo, raw: &str) -> Todo {
        todo.due_date = parse_due_date(raw);
        todo
    }

    fn ids(todos: &[Todo]) -> Vec<u32> {
        todos.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_create_appends_with_defaults() {
        let todos = create(Vec::new(), 1, "Buy milk", Category::Other, None);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Buy milk");
        assert!(!todos[0].completed);
        assert_eq!(todos[0].category, Category::Other);
        assert_eq!(todos[0].due_date, None);
    }

    #[test]
    fn test_create_discards_whitespace_text() {
        let todos = create(Vec::new(), 1, "Buy milk", Category::Other, None);
        let todos = create(todos, 2, "  ", Category::Work, None);
        assert_eq!(todos.len(), 1);
        let todos = create(todos, 2, "", Category::Work, None);
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn test_create_trims_text() {
        let todos = create(Vec::new(), 1, "  walk the dog  ", Category::Personal, None);
        assert_eq!(todos[0].text, "walk the dog");
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let todos = vec![make_todo(1, "a"), make_todo(2, "b")];
        let original = todos.clone();

        let once = toggle(todos, 2);
        assert!(!once[0].completed);
        assert!(once[1].completed);

        let twice = toggle(once, 2);
        assert_eq!(twice, original);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let todos = vec![make_todo(1, "a")];
        assert_eq!(toggle(todos.clone(), 99), todos);
    }

    #[test]
    fn test_remove_keeps_order() {
        let todos = vec![make_todo(1, "a"), make_todo(2, "b"), make_todo(3, "c")];
        let next = remove(todos, 2);
        assert_eq!(ids(&next), vec![1, 3]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let todos = vec![make_todo(1, "a")];
        assert_eq!(remove(todos.clone(), 99), todos);
    }

    #[test]
    fn test_set_category_touches_one_item() {
        let todos = vec![make_todo(1, "a"), make_todo(2, "b")];
        let next = set_category(todos, 2, Category::Shopping);
        assert_eq!(next[0].category, Category::Other);
        assert_eq!(next[1].category, Category::Shopping);
    }

    #[test]
    fn test_set_due_date_and_clear() {
        let todos = vec![make_todo(1, "a")];
        let next = set_due_date(todos, 1, parse_due_date("2024-01-10T08:00"));
        assert!(next[0].due_date.is_some());
        let cleared = set_due_date(next, 1, None);
        assert_eq!(cleared[0].due_date, None);
    }

    #[test]
    fn test_move_active_onto_later_target() {
        // [A, B, C], drag A onto C's position
        let todos = vec![make_todo(1, "A"), make_todo(2, "B"), make_todo(3, "C")];
        let next = move_by_id(todos, 1, 3);
        assert_eq!(ids(&next), vec![2, 3, 1]);
    }

    #[test]
    fn test_move_active_onto_earlier_target() {
        let todos = vec![make_todo(1, "A"), make_todo(2, "B"), make_todo(3, "C")];
        let next = move_by_id(todos, 3, 1);
        assert_eq!(ids(&next), vec![3, 1, 2]);
    }

    #[test]
    fn test_move_is_a_permutation() {
        let todos = vec![
            make_todo(4, "d"),
            make_todo(2, "b"),
            make_todo(7, "g"),
            make_todo(1, "a"),
        ];
        let next = move_by_id(todos.clone(), 7, 4);
        assert_eq!(next.len(), todos.len());
        let mut before = ids(&todos);
        let mut after = ids(&next);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_move_self_or_unknown_is_noop() {
        let todos = vec![make_todo(1, "a"), make_todo(2, "b")];
        assert_eq!(move_by_id(todos.clone(), 1, 1), todos);
        assert_eq!(move_by_id(todos.clone(), 1, 99), todos);
        assert_eq!(move_by_id(todos.clone(), 99, 1), todos);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let todos = vec![
            with_category(make_todo(1, "a"), Category::Work),
            with_category(make_todo(2, "b"), Category::Shopping),
        ];
        assert_eq!(filter_by_category(&todos, None), todos);
    }

    #[test]
    fn test_filter_keeps_relative_order() {
        let todos = vec![
            with_category(make_todo(1, "a"), Category::Work),
            with_category(make_todo(2, "b"), Category::Shopping),
            with_category(make_todo(3, "c"), Category::Shopping),
            with_category(make_todo(4, "d"), Category::Other),
        ];
        let shopping = filter_by_category(&todos, Some(Category::Shopping));
        assert_eq!(ids(&shopping), vec![2, 3]);
        assert!(shopping.iter().all(|t| t.category == Category::Shopping));
    }

    #[test]
    fn test_sort_puts_undated_last() {
        // dues [2024-01-10, none, 2024-01-05] -> [2024-01-05, 2024-01-10, none]
        let todos = vec![
            with_due(make_todo(1, "a"), "2024-01-10"),
            make_todo(2, "b"),
            with_due(make_todo(3, "c"), "2024-01-05"),
        ];
        let sorted = sort_by_due_date(todos);
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_is_stable() {
        let todos = vec![
            make_todo(1, "a"),
            make_todo(2, "b"),
            with_due(make_todo(3, "c"), "2024-03-01T12:00"),
            with_due(make_todo(4, "d"), "2024-03-01T12:00"),
        ];
        let sorted = sort_by_due_date(todos);
        // Equal due dates and the undated pair both keep their order
        assert_eq!(ids(&sorted), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_sort_never_mutates_authoritative_order() {
        let todos = vec![
            with_due(make_todo(1, "a"), "2024-01-10"),
            with_due(make_todo(2, "b"), "2024-01-05"),
        ];
        let _view = sort_by_due_date(todos.clone());
        assert_eq!(ids(&todos), vec![1, 2]);
    }

    #[test]
    fn test_visible_filters_then_sorts() {
        let todos = vec![
            with_due(with_category(make_todo(1, "a"), Category::Work), "2024-06-01"),
            with_category(make_todo(2, "b"), Category::Shopping),
            with_due(with_category(make_todo(3, "c"), Category::Work), "2024-05-01"),
            with_category(make_todo(4, "d"), Category::Work),
        ];
        let view = visible(&todos, Some(Category::Work));
        assert_eq!(ids(&view), vec![3, 1, 4]);
    }
}
