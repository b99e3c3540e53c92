use super::list;
use crate::model::EducationEntry;
use crate::store::Action;

pub fn reduce(state: Vec<EducationEntry>, action: &Action) -> Vec<EducationEntry> {
    match action {
        Action::AddEducation(entry) => list::add(state, entry),
        Action::UpdateEducation(entry) => list::update(state, entry),
        Action::RemoveEducation(id) => list::remove(state, id),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mit() -> EducationEntry {
        EducationEntry {
            id: "1".into(),
            institution: "MIT".into(),
            degree: "BSc".into(),
            field_of_study: "CS".into(),
            start_date: "09/2018".into(),
            end_date: "06/2022".into(),
            location: "Cambridge".into(),
        }
    }

    #[test]
    fn test_add_update_remove_scenario() {
        let state = reduce(vec![], &Action::AddEducation(mit()));
        assert_eq!(state, vec![mit()]);

        let msc = EducationEntry {
            degree: "MSc".into(),
            ..mit()
        };
        let state = reduce(state, &Action::UpdateEducation(msc.clone()));
        assert_eq!(state, vec![msc]);

        let state = reduce(state, &Action::RemoveEducation("1".into()));
        assert!(state.is_empty());
    }

    #[test]
    fn test_update_unknown_id_leaves_list_unchanged() {
        let state = vec![mit()];
        let stranger = EducationEntry {
            id: "2".into(),
            ..mit()
        };
        assert_eq!(
            reduce(state.clone(), &Action::UpdateEducation(stranger)),
            state
        );
    }

    #[test]
    fn test_ignores_other_sections() {
        let state = vec![mit()];
        assert_eq!(
            reduce(state.clone(), &Action::RemoveProject("1".into())),
            state
        );
    }
}
