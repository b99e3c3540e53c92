use super::list;
use crate::model::ProjectEntry;
use crate::store::Action;

pub fn reduce(state: Vec<ProjectEntry>, action: &Action) -> Vec<ProjectEntry> {
    match action {
        Action::AddProject(entry) => list::add(state, entry),
        Action::UpdateProject(entry) => list::update(state, entry),
        Action::RemoveProject(id) => list::remove(state, id),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::split_technologies;

    fn project(id: &str) -> ProjectEntry {
        ProjectEntry {
            id: id.into(),
            name: "Resume builder".into(),
            description: "Builds resumes from structured input".into(),
            technologies: split_technologies("Rust, Axum"),
            link: String::new(),
        }
    }

    #[test]
    fn test_remove_twice_equals_once() {
        let state = vec![project("p1"), project("p2")];
        let once = reduce(state, &Action::RemoveProject("p1".into()));
        let twice = reduce(once.clone(), &Action::RemoveProject("p1".into()));
        assert_eq!(once, twice);
        assert_eq!(once, vec![project("p2")]);
    }

    #[test]
    fn test_update_sets_link() {
        let state = vec![project("p1")];
        let linked = ProjectEntry {
            link: "https://example.com/resume".into(),
            ..project("p1")
        };
        let state = reduce(state, &Action::UpdateProject(linked));
        assert_eq!(state[0].link, "https://example.com/resume");
    }
}
