//! Search form state shared by the UI shells.

use crate::models::{CoopRecord, FilterField, FilterState};
use crate::search::{build_search_url, result_rows, FetchOutcome, ResultRow};

/// Everything the advanced search form renders from.
///
/// Filters change on every keystroke; the query URL only changes on submit.
/// `loading` and `results` move independently: results are replaced wholesale
/// by the latest successful response and never partially updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormState {
    base_path: String,
    filters: FilterState,
    query_url: String,
    results: Vec<CoopRecord>,
    loading: bool,
}

impl SearchFormState {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            filters: FilterState::default(),
            query_url: String::new(),
            results: Vec::new(),
            loading: false,
        }
    }

    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Last submitted query URL, or `""` before the first submit.
    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    pub fn results(&self) -> &[CoopRecord] {
        &self.results
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn rows(&self) -> Vec<ResultRow> {
        result_rows(&self.results)
    }

    pub fn set_field(&mut self, field: FilterField, value: impl Into<String>) {
        self.filters.set_field(field, value);
    }

    /// Finalize the current filters into a query URL.
    ///
    /// Returns the new URL when it differs from the previous one, which is the
    /// only case that should trigger a fetch.
    pub fn submit(&mut self) -> Option<String> {
        let url = build_search_url(&self.filters, &self.base_path);
        if url == self.query_url {
            return None;
        }
        self.query_url.clone_from(&url);
        Some(url)
    }

    /// Mark a search for `url` as started.
    pub fn begin_search(&mut self, url: &str) {
        if !url.is_empty() {
            self.loading = true;
        }
    }

    /// Fold a finished request into the state.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Cleared => {
                self.results.clear();
                self.loading = false;
            }
            FetchOutcome::Superseded => {}
            FetchOutcome::Loaded(records) => {
                tracing::info!("Loaded {} directory records", records.len());
                self.results = records;
                self.loading = false;
            }
            FetchOutcome::Failed(error) => {
                tracing::warn!("Directory search failed: {}", error);
                self.loading = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    const BASE: &str = "http://api.test";

    fn records(names: &[&str]) -> Vec<CoopRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| CoopRecord::new(i.to_string(), *name))
            .collect()
    }

    #[test]
    fn starts_empty_and_idle() {
        let form = SearchFormState::new(BASE);
        assert_eq!(form.query_url(), "");
        assert!(form.results().is_empty());
        assert!(!form.is_loading());
    }

    #[test]
    fn typing_does_not_change_query_url() {
        let mut form = SearchFormState::new(BASE);
        form.set_field(FilterField::Name, "Main");
        assert_eq!(form.query_url(), "");
        assert_eq!(form.filters().name.as_deref(), Some("Main"));
    }

    #[test]
    fn submitting_empty_form_targets_bare_collection() {
        let mut form = SearchFormState::new(BASE);
        let url = form.submit().expect("first submit changes the url");
        assert_eq!(url, "http://api.test/coops/");

        form.begin_search(&url);
        assert!(form.is_loading());
    }

    #[test]
    fn resubmitting_same_filters_does_not_refetch() {
        let mut form = SearchFormState::new(BASE);
        form.set_field(FilterField::Enabled, "true");
        assert!(form.submit().is_some());
        assert_eq!(form.submit(), None);

        form.set_field(FilterField::Enabled, "none");
        assert_eq!(form.submit().as_deref(), Some("http://api.test/coops/"));
    }

    #[test]
    fn empty_url_does_not_start_loading() {
        let mut form = SearchFormState::new(BASE);
        form.begin_search("");
        assert!(!form.is_loading());
    }

    #[test]
    fn cleared_outcome_empties_results() {
        let mut form = SearchFormState::new(BASE);
        form.apply(FetchOutcome::Loaded(records(&["A"])));
        form.apply(FetchOutcome::Cleared);
        assert!(form.results().is_empty());
        assert!(!form.is_loading());
    }

    #[test]
    fn loaded_outcome_replaces_results() {
        let mut form = SearchFormState::new(BASE);
        form.begin_search("http://api.test/coops/");
        form.apply(FetchOutcome::Loaded(records(&["A", "B"])));
        form.begin_search("http://api.test/coops/?name=C");
        form.apply(FetchOutcome::Loaded(records(&["C"])));

        assert_eq!(form.results(), records(&["C"]).as_slice());
        assert!(!form.is_loading());
    }

    #[test]
    fn superseded_outcome_leaves_state_alone() {
        let mut form = SearchFormState::new(BASE);
        form.apply(FetchOutcome::Loaded(records(&["B"])));
        form.begin_search("http://api.test/coops/?name=C");
        form.apply(FetchOutcome::Superseded);

        assert_eq!(form.results(), records(&["B"]).as_slice());
        assert!(form.is_loading());
    }

    #[test]
    fn failure_keeps_results_and_clears_loading() {
        let mut form = SearchFormState::new(BASE);
        form.apply(FetchOutcome::Loaded(records(&["A"])));
        form.begin_search("http://api.test/coops/?name=x");
        form.apply(FetchOutcome::Failed(Error::Status {
            status: 500,
            body: String::new(),
        }));

        assert_eq!(form.results(), records(&["A"]).as_slice());
        assert!(!form.is_loading());
    }

    #[test]
    fn empty_response_renders_no_rows() {
        let mut form = SearchFormState::new(BASE);
        form.apply(FetchOutcome::Loaded(Vec::new()));
        assert!(form.rows().is_empty());
    }
}
