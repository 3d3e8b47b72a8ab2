use studio_core::model::{ModuleId, ProgressSet, SyllabusModule};

/// One dashboard module card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleCardVm {
    pub id: ModuleId,
    pub title: &'static str,
    pub icon: &'static str,
    pub topics: &'static [&'static str],
    pub is_complete: bool,
}

#[must_use]
pub fn module_icon(id: ModuleId) -> &'static str {
    match id {
        ModuleId::HtmlCss => "</>",
        ModuleId::Python => "{}",
        ModuleId::Javascript => "JS",
    }
}

#[must_use]
pub fn map_module_cards(set: &ProgressSet) -> Vec<ModuleCardVm> {
    SyllabusModule::all()
        .into_iter()
        .map(|module| ModuleCardVm {
            id: module.id,
            title: module.title,
            icon: module_icon(module.id),
            topics: module.topics,
            is_complete: set.record(module.id).is_complete(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::model::ProgressUpdate;

    #[test]
    fn cards_follow_syllabus_order() {
        let cards = map_module_cards(&ProgressSet::default());
        let ids: Vec<ModuleId> = cards.iter().map(|card| card.id).collect();
        assert_eq!(ids, ModuleId::ALL.to_vec());
        assert!(cards.iter().all(|card| !card.is_complete));
    }

    #[test]
    fn completed_module_gets_a_badge() {
        let mut set = ProgressSet::default();
        set.apply(ModuleId::Python, ProgressUpdate::lesson_viewed())
            .unwrap();
        set.apply(ModuleId::Python, ProgressUpdate::practice_attempted())
            .unwrap();
        set.apply(ModuleId::Python, ProgressUpdate::assessment_submitted(3))
            .unwrap();

        let cards = map_module_cards(&set);
        assert!(cards.iter().any(|card| card.id == ModuleId::Python && card.is_complete));
        assert!(
            cards
                .iter()
                .filter(|card| card.id != ModuleId::Python)
                .all(|card| !card.is_complete)
        );
    }
}
