use crate::core::AvoidArea;

/// Device-specific pixel-to-vp conversion factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VpScale {
    px_per_vp: f32,
}

impl VpScale {
    /// Create a scale from the device's px-per-vp density factor.
    /// Non-positive factors are treated as 1:1.
    pub fn new(px_per_vp: f32) -> Self {
        let px_per_vp = if px_per_vp > 0.0 { px_per_vp } else { 1.0 };
        Self { px_per_vp }
    }

    /// Convert a pixel height to layout-independent vp
    pub fn px2vp(&self, px: u32) -> f32 {
        px as f32 / self.px_per_vp
    }
}

impl Default for VpScale {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Safe-area inset pair in layout units.
///
/// Top and bottom are always derived from the same avoid-area report and
/// published together - consumers never observe one half of a stale pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeAreaInset {
    pub top: f32,
    pub bottom: f32,
}

impl SafeAreaInset {
    /// Normalize a host-reported avoid area into vp
    pub fn from_avoid_area(area: AvoidArea, scale: VpScale) -> Self {
        Self {
            top: scale.px2vp(area.top_height_px),
            bottom: scale.px2vp(area.bottom_height_px),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px2vp_applies_conversion_factor() {
        let scale = VpScale::new(2.0);
        assert_eq!(scale.px2vp(80), 40.0);
        assert_eq!(scale.px2vp(40), 20.0);
        assert_eq!(scale.px2vp(0), 0.0);
    }

    #[test]
    fn non_positive_factor_falls_back_to_identity() {
        assert_eq!(VpScale::new(0.0).px2vp(50), 50.0);
        assert_eq!(VpScale::new(-3.0).px2vp(50), 50.0);
    }

    #[test]
    fn inset_normalizes_both_heights_from_one_report() {
        let area = AvoidArea {
            top_height_px: 80,
            bottom_height_px: 40,
        };
        let inset = SafeAreaInset::from_avoid_area(area, VpScale::new(2.0));

        assert_eq!(inset.top, 40.0);
        assert_eq!(inset.bottom, 20.0);
    }

    #[test]
    fn zero_area_maps_to_zero_inset() {
        let inset = SafeAreaInset::from_avoid_area(AvoidArea::default(), VpScale::new(3.25));
        assert_eq!(inset, SafeAreaInset::default());
    }

    #[test]
    fn fractional_vp_is_preserved() {
        let area = AvoidArea {
            top_height_px: 117,
            bottom_height_px: 0,
        };
        let inset = SafeAreaInset::from_avoid_area(area, VpScale::new(3.25));
        assert!((inset.top - 36.0).abs() < 1e-5);
    }
}
