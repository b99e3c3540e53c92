use crate::model::{AboutPatch, AboutRecord};
use crate::store::Action;

pub fn reduce(state: AboutRecord, action: &Action) -> AboutRecord {
    match action {
        Action::UpdateAbout(patch) => merge(state, patch),
        _ => state,
    }
}

/// Shallow merge: fields present in `patch` overwrite, the rest are kept.
fn merge(state: AboutRecord, patch: &AboutPatch) -> AboutRecord {
    let AboutPatch {
        name,
        email,
        phone,
        address,
        summary,
    } = patch.clone();

    AboutRecord {
        name: name.unwrap_or(state.name),
        email: email.unwrap_or(state.email),
        phone: phone.unwrap_or(state.phone),
        address: address.unwrap_or(state.address),
        summary: summary.unwrap_or(state.summary),
    }
}
