use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::data::cache::RecordingCache;
use crate::data::catalog::CatalogCache;
use crate::data::DataError;
use crate::view::{self, ChartSpec, SummarySpec};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The confirmed selection: which recording is shown and which acquisition
/// date range the user last applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected file name inside the data directory. `None` only when the
    /// catalog is empty.
    pub file: Option<String>,
    /// Applied date range, clamped to the acquisition bounds.
    pub date_range: (NaiveDate, NaiveDate),
}

/// The full UI state, independent of rendering.
///
/// Widget interactions write to the `pending_*` fields; only the Update
/// action copies them into `selection` and recomposes the view.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub catalogs: CatalogCache,
    pub recordings: RecordingCache,

    pub selection: Selection,
    /// Staged file choice, not yet applied.
    pub pending_file: Option<String>,
    /// Staged date range, not yet applied.
    pub pending_range: (NaiveDate, NaiveDate),

    /// Composed chart + summary for the confirmed selection.
    pub view: Option<(ChartSpec, SummarySpec)>,
    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Enumerate the data directory and start with its first entry selected
    /// and the range collapsed onto the acquisition end date. Fails only if
    /// the directory itself is unreadable.
    pub fn new(config: AppConfig) -> Result<Self, DataError> {
        let mut catalogs = CatalogCache::default();
        let first = catalogs.list(&config.data_dir)?.first().cloned();
        let range = (config.acquisition_end, config.acquisition_end);

        let mut state = Self {
            config,
            catalogs,
            recordings: RecordingCache::default(),
            selection: Selection {
                file: first.clone(),
                date_range: range,
            },
            pending_file: first,
            pending_range: range,
            view: None,
            status_message: None,
        };
        state.refresh();
        Ok(state)
    }

    /// The memoized catalog for the current data directory. The directory
    /// was already validated when it was first listed.
    pub fn catalog(&mut self) -> &[String] {
        self.catalogs.list(&self.config.data_dir).unwrap_or_default()
    }

    /// Apply the staged file and date range atomically, then reload.
    ///
    /// The date range is recorded in the selection but is not consumed by
    /// the composed view.
    /// TODO: decide whether the range should filter by in-file timestamp or
    /// by acquisition date before wiring it into `view::compose`.
    pub fn confirm(&mut self) {
        let (start, end) = self.pending_range;
        let lo = self.config.acquisition_start;
        let hi = self.config.acquisition_end;
        self.selection = Selection {
            file: self.pending_file.clone(),
            date_range: (start.clamp(lo, hi), end.clamp(lo, hi)),
        };
        log::info!(
            "selection updated: file={:?} range={:?}",
            self.selection.file,
            self.selection.date_range
        );
        self.refresh();
    }

    /// Re-point the app at another data directory, selecting its first
    /// entry. On failure the previous directory and selection stay active.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        let first = match self.catalogs.list(&dir) {
            Ok(names) => names.first().cloned(),
            Err(e) => {
                log::error!("cannot open {}: {e}", dir.display());
                self.status_message = Some(format!("Error: {e}"));
                return;
            }
        };
        self.config.data_dir = dir;
        self.selection.file = first.clone();
        self.pending_file = first;
        self.refresh();
    }

    /// Recompose the view from the confirmed selection: cached load, then
    /// chart + summary. Failures clear the view and surface a status line.
    fn refresh(&mut self) {
        self.status_message = None;
        self.view = None;

        let Some(file) = self.selection.file.clone() else {
            return;
        };
        let path = self.config.data_dir.join(&file);
        match self.recordings.load(&path) {
            Ok(recording) => {
                self.view = Some(view::compose(&recording));
            }
            Err(e) => {
                log::error!("failed to load {file}: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CHANNEL_COUNT, SAMPLE_COUNT};
    use crate::data::testutil::write_recording_csv;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_state(files: &[&str]) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        for name in files {
            write_recording_csv(dir.path(), name, SAMPLE_COUNT);
        }
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        let state = AppState::new(config).unwrap();
        (dir, state)
    }

    #[test]
    fn initial_state_is_first_file_and_collapsed_range() {
        let (_dir, state) = seeded_state(&["b.csv", "a.csv"]);
        let end = state.config.acquisition_end;

        assert_eq!(state.selection.file.as_deref(), Some("a.csv"));
        assert_eq!(state.selection.date_range, (end, end));
        assert!(state.view.is_some());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn staging_does_not_mutate_selection() {
        let (_dir, mut state) = seeded_state(&["a.csv", "b.csv"]);

        state.pending_file = Some("b.csv".to_string());
        state.pending_range = (ymd(2020, 1, 1), ymd(2020, 6, 1));

        assert_eq!(state.selection.file.as_deref(), Some("a.csv"));
        assert_eq!(
            state.selection.date_range,
            (state.config.acquisition_end, state.config.acquisition_end)
        );
    }

    #[test]
    fn confirm_replaces_selection_atomically() {
        let (_dir, mut state) = seeded_state(&["a.csv", "b.csv"]);

        state.pending_file = Some("b.csv".to_string());
        state.pending_range = (ymd(2020, 1, 1), ymd(2020, 6, 1));
        state.confirm();

        assert_eq!(state.selection.file.as_deref(), Some("b.csv"));
        assert_eq!(state.selection.date_range, (ymd(2020, 1, 1), ymd(2020, 6, 1)));

        // A second confirm fully replaces, never merges.
        state.pending_file = Some("a.csv".to_string());
        state.pending_range = (ymd(2021, 2, 3), ymd(2021, 2, 4));
        state.confirm();

        assert_eq!(state.selection.file.as_deref(), Some("a.csv"));
        assert_eq!(state.selection.date_range, (ymd(2021, 2, 3), ymd(2021, 2, 4)));
    }

    #[test]
    fn confirm_clamps_range_to_acquisition_bounds() {
        let (_dir, mut state) = seeded_state(&["a.csv"]);

        state.pending_range = (ymd(1999, 1, 1), ymd(2030, 1, 1));
        state.confirm();

        assert_eq!(
            state.selection.date_range,
            (state.config.acquisition_start, state.config.acquisition_end)
        );
    }

    #[test]
    fn new_date_range_does_not_change_the_chart() {
        let (_dir, mut state) = seeded_state(&["a.csv"]);
        let before: Vec<f64> = {
            let (chart, _) = state.view.as_ref().unwrap();
            chart.series().next().unwrap().1.to_vec()
        };

        state.pending_range = (ymd(2020, 1, 1), ymd(2020, 6, 1));
        state.confirm();

        // Same file: served from cache, chart output identical. The range
        // is captured in the selection but is not a filter.
        let (chart, _) = state.view.as_ref().unwrap();
        assert_eq!(chart.series().next().unwrap().1, before.as_slice());
        assert_eq!(state.recordings.len(), 1);
    }

    #[test]
    fn empty_catalog_yields_no_selection_and_no_view() {
        let (_dir, state) = seeded_state(&[]);
        assert_eq!(state.selection.file, None);
        assert!(state.view.is_none());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn missing_data_directory_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().join("missing"),
            ..AppConfig::default()
        };
        assert!(matches!(
            AppState::new(config).unwrap_err(),
            DataError::DirectoryAccess { .. }
        ));
    }

    #[test]
    fn unreadable_recording_surfaces_status_message() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("junk.csv"), "not,a,recording\n").unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        let state = AppState::new(config).unwrap();
        assert!(state.view.is_none());
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn set_data_dir_failure_keeps_previous_directory() {
        let (_dir, mut state) = seeded_state(&["a.csv"]);
        let previous = state.config.data_dir.clone();

        state.set_data_dir(previous.join("missing"));

        assert_eq!(state.config.data_dir, previous);
        assert_eq!(state.selection.file.as_deref(), Some("a.csv"));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn chart_and_summary_cover_all_channels() {
        let (_dir, state) = seeded_state(&["a.csv"]);
        let (chart, summary) = state.view.as_ref().unwrap();

        assert_eq!(chart.series().count(), CHANNEL_COUNT);
        assert_eq!(summary.channels.len(), CHANNEL_COUNT);
        assert_eq!(chart.sample_count(), SAMPLE_COUNT);
    }
}
