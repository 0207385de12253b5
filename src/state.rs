use std::path::Path;

use crate::chart::render::render_png;
use crate::chart::BarChartSpec;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct ViewerState {
    /// Chart on display. Read-only for the lifetime of the window.
    pub spec: BarChartSpec,

    /// Whether the side panel with bar values is shown.
    pub show_values: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(spec: BarChartSpec) -> Self {
        Self {
            spec,
            show_values: true,
            status_message: None,
        }
    }

    /// Export the chart on display, recording the outcome for the status bar.
    pub fn save_png(&mut self, path: &Path) {
        match render_png(&self.spec, path) {
            Ok(()) => {
                self.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to save chart: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Suggested file name for the save dialog.
    pub fn default_file_name(&self) -> String {
        let stem: String = self
            .spec
            .title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        let stem: Vec<&str> = stem.split('-').filter(|s| !s.is_empty()).collect();
        format!("{}.png", stem.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use crate::config::AnalysisConfig;

    #[test]
    fn default_file_name_is_slugged_title() {
        let spec = ChartKind::Efflux30.build(&AnalysisConfig::default()).unwrap();
        let state = ViewerState::new(spec);
        assert_eq!(state.default_file_name(), "rhodamine-6g-efflux-assay-30-c.png");
        assert!(state.show_values);
        assert!(state.status_message.is_none());
    }
}
