//! Dashboard plumbing: fetch state machine and the SVG chart components.

mod barchart;
pub use barchart::CategoryBarChart;

mod boxplot;
pub use boxplot::GroupBoxplot;

mod cards;
pub use cards::GroupSummaryCards;

use crate::core::fetch::FetchError;

/// Which side of the dashboard is active. Orthogonal to fetch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationKind {
    #[default]
    Categorical,
    Numeric,
}

/// Lifecycle of one backend fetch as seen by the dashboard. Each of the two
/// fetches carries its own instance, so one failing leaves the other usable.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteData<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T: Clone> RemoteData<T> {
    /// Collapses a resource snapshot into dashboard state. `context` prefixes
    /// the user-facing failure message (e.g. "Failed to fetch data").
    pub fn from_result(snapshot: Option<&Result<T, FetchError>>, context: &str) -> Self {
        match snapshot {
            None => RemoteData::Loading,
            Some(Ok(data)) => RemoteData::Loaded(data.clone()),
            Some(Err(err)) => RemoteData::Failed(format!("{context}: {err}")),
        }
    }
}

impl<T> RemoteData<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RemoteData::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteData::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_snapshot_is_loading() {
        let state: RemoteData<u32> = RemoteData::from_result(None, "Failed to fetch data");
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn success_snapshot_carries_the_payload() {
        let state = RemoteData::from_result(Some(&Ok(7u32)), "Failed to fetch data");
        assert_eq!(state.data(), Some(&7));
    }

    #[test]
    fn http_failure_surfaces_the_context_message() {
        let err: Result<u32, FetchError> = Err(FetchError::Status(500));
        let state = RemoteData::from_result(Some(&err), "Failed to fetch data");

        let message = state.error().expect("failed state");
        assert!(message.contains("Failed to fetch data"));
        assert!(message.contains("500"));
    }

    #[test]
    fn boxplot_failure_is_independent_of_category_state() {
        let failed: Result<u32, FetchError> =
            Err(FetchError::Transport("connection refused".to_string()));
        let boxplots = RemoteData::from_result(Some(&failed), "Failed to fetch boxplot data");
        let categories = RemoteData::from_result(Some(&Ok(1u32)), "Failed to fetch data");

        assert!(boxplots.error().unwrap().contains("Failed to fetch boxplot data"));
        assert_eq!(categories.data(), Some(&1));
    }
}
