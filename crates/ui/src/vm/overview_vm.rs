use studio_core::model::{ProgressSet, format_duration};

/// Dashboard overview labels, precomputed for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverviewVm {
    pub completed_label: String,
    pub progress_percent: u32,
    pub average_score_label: String,
    pub total_time_label: String,
}

#[must_use]
pub fn map_overview(set: &ProgressSet) -> OverviewVm {
    let overview = set.overview();

    let progress_percent = if overview.module_count == 0 {
        0
    } else {
        (overview.completed_modules * 100 / overview.module_count) as u32
    };

    OverviewVm {
        completed_label: format!(
            "Progress: {} / {} Modules Completed",
            overview.completed_modules, overview.module_count
        ),
        progress_percent,
        // The original dashboard renders the average with no decimals.
        average_score_label: format!("{:.0}%", overview.average_score_percent),
        total_time_label: format_duration(overview.total_time_seconds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::model::{ModuleId, ProgressUpdate};

    #[test]
    fn fresh_set_maps_to_zeroes() {
        let vm = map_overview(&ProgressSet::default());
        assert_eq!(vm.completed_label, "Progress: 0 / 3 Modules Completed");
        assert_eq!(vm.progress_percent, 0);
        assert_eq!(vm.average_score_label, "0%");
        assert_eq!(vm.total_time_label, "0h 0m 0s");
    }

    #[test]
    fn scores_and_time_map_to_labels() {
        let mut set = ProgressSet::default();
        set.apply(ModuleId::HtmlCss, ProgressUpdate::assessment_submitted(5))
            .unwrap();
        set.apply(ModuleId::Python, ProgressUpdate::assessment_submitted(2))
            .unwrap();
        set.apply(ModuleId::Python, ProgressUpdate::time_spent_total(3725))
            .unwrap();

        let vm = map_overview(&set);
        assert_eq!(vm.average_score_label, "70%");
        assert_eq!(vm.total_time_label, "1h 2m 5s");
    }
}
