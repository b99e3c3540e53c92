use crate::store::Action;

pub fn reduce(mut state: Vec<String>, action: &Action) -> Vec<String> {
    match action {
        Action::AddSkill(skill) => {
            state.push(skill.clone());
            state
        }
        Action::RemoveSkill(skill) => {
            state.retain(|s| s != skill);
            state
        }
        Action::UpdateSkills(skills) => skills.clone(),
        _ => state,
    }
}
