use super::list;
use crate::model::ExperienceEntry;
use crate::store::Action;

pub fn reduce(state: Vec<ExperienceEntry>, action: &Action) -> Vec<ExperienceEntry> {
    match action {
        Action::AddExperience(entry) => list::add(state, entry),
        Action::UpdateExperience(entry) => list::update(state, entry),
        Action::RemoveExperience(id) => list::remove(state, id),
        _ => state,
    }
}
