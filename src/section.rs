use std::fmt;

/// One of the four scroll buckets. Each bucket owns a quarter of the page's
/// scroll range and one decorative background scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    Skills,
    Experience,
    Projects,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Skills,
        Section::Experience,
        Section::Projects,
    ];

    /// Maps scroll progress onto a bucket using half-open quarters, with the
    /// last bucket closed at 1.0.
    pub fn from_progress(progress: f64) -> Self {
        if !progress.is_finite() {
            return Section::Hero;
        }
        let p = progress.clamp(0.0, 1.0);
        if p < 0.25 {
            Section::Hero
        } else if p < 0.5 {
            Section::Skills
        } else if p < 0.75 {
            Section::Experience
        } else {
            Section::Projects
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::Skills => 1,
            Section::Experience => 2,
            Section::Projects => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Hero",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
        }
    }

    /// DOM id of the `<section>` this bucket scrolls to.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalised vertical scroll position of the page.
///
/// Returns 0 when the document is not taller than the viewport, so a short
/// page never reports a non-zero bucket.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Fill of the scroll indicator bar, in percent.
pub fn indicator_fill(progress: f64) -> f64 {
    if !progress.is_finite() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_buckets() {
        assert_eq!(Section::from_progress(0.0), Section::Hero);
        assert_eq!(Section::from_progress(0.1), Section::Hero);
        assert_eq!(Section::from_progress(0.2499), Section::Hero);
        assert_eq!(Section::from_progress(0.3), Section::Skills);
        assert_eq!(Section::from_progress(0.4999), Section::Skills);
        assert_eq!(Section::from_progress(0.6), Section::Experience);
        assert_eq!(Section::from_progress(0.7499), Section::Experience);
        assert_eq!(Section::from_progress(0.9), Section::Projects);
    }

    #[test]
    fn test_boundaries_belong_to_upper_bucket() {
        assert_eq!(Section::from_progress(0.25), Section::Skills);
        assert_eq!(Section::from_progress(0.5), Section::Experience);
        assert_eq!(Section::from_progress(0.75), Section::Projects);
        assert_eq!(Section::from_progress(1.0), Section::Projects);
    }

    #[test]
    fn test_out_of_range_progress() {
        assert_eq!(Section::from_progress(-0.5), Section::Hero);
        assert_eq!(Section::from_progress(3.0), Section::Projects);
        assert_eq!(Section::from_progress(f64::NAN), Section::Hero);
    }

    #[test]
    fn test_index_round_trip() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(4), None);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 4000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1500.0, 4000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(3000.0, 4000.0, 1000.0), 1.0);
        // overscroll bounce on some browsers
        assert_eq!(scroll_progress(3200.0, 4000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 4000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_short_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_indicator_fill() {
        assert_eq!(indicator_fill(0.0), 0.0);
        assert!((indicator_fill(0.6) - 60.0).abs() < 1e-9);
        assert_eq!(indicator_fill(1.0), 100.0);
        assert_eq!(indicator_fill(1.4), 100.0);
    }

    #[test]
    fn test_labels_and_anchors_are_distinct() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Hero", "Skills", "Experience", "Projects"]);
        let mut anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor_id()).collect();
        anchors.dedup();
        assert_eq!(anchors.len(), 4);
    }
}
