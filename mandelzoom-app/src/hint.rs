use mandelzoom_core::ZoomDirection;

/// Tooltip that teaches the zoom controls.
///
/// Starts by explaining click-to-zoom. The first zoom-in from the home view
/// switches to the zoom-out hint, and any zoom-out hides it for good (until
/// the view is reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ZoomHint {
    #[default]
    ClickToZoom,
    RightClickToZoomOut,
    Hidden,
}

impl ZoomHint {
    pub(crate) fn text(self) -> Option<&'static str> {
        match self {
            Self::ClickToZoom => Some("click to zoom"),
            Self::RightClickToZoomOut => Some("right click to zoom out"),
            Self::Hidden => None,
        }
    }

    /// Next hint after a zoom. `zoom_before` is the zoom factor prior to it.
    pub(crate) fn after_zoom(self, direction: ZoomDirection, zoom_before: f64) -> Self {
        match direction {
            ZoomDirection::Out => Self::Hidden,
            ZoomDirection::In if zoom_before == 1.0 => Self::RightClickToZoomOut,
            ZoomDirection::In => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_click_hint() {
        assert_eq!(ZoomHint::default().text(), Some("click to zoom"));
    }

    #[test]
    fn first_zoom_in_teaches_zoom_out() {
        let hint = ZoomHint::default().after_zoom(ZoomDirection::In, 1.0);
        assert_eq!(hint.text(), Some("right click to zoom out"));
    }

    #[test]
    fn zoom_out_hides_hint() {
        let hint = ZoomHint::default()
            .after_zoom(ZoomDirection::In, 1.0)
            .after_zoom(ZoomDirection::Out, 2.0);
        assert_eq!(hint, ZoomHint::Hidden);
        assert_eq!(hint.text(), None);
        assert_eq!(hint.after_zoom(ZoomDirection::In, 1.0), ZoomHint::RightClickToZoomOut);
    }

    #[test]
    fn zoom_in_away_from_home_keeps_hint() {
        assert_eq!(
            ZoomHint::ClickToZoom.after_zoom(ZoomDirection::In, 0.5),
            ZoomHint::ClickToZoom
        );
        assert_eq!(
            ZoomHint::Hidden.after_zoom(ZoomDirection::In, 4.0),
            ZoomHint::Hidden
        );
    }
}
