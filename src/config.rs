use pathknob_core::ValueRange;
use pathknob_path::{ArcGeometry, SampleMode, DEFAULT_MIN_SPACING};

use crate::error::KnobError;

/// The configuration of a [`PathKnob`](crate::PathKnob).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KnobConfig {
    /// The value at the start of the track. Must be less than
    /// `maximum_value`.
    ///
    /// By default this is set to `0`.
    pub minimum_value: i32,
    /// The value at the end of the track.
    ///
    /// By default this is set to `10`.
    pub maximum_value: i32,
    /// The inset between the bounds of the knob and its track.
    ///
    /// By default this is set to `10.0`.
    pub padding: f32,
    /// The minimum distance between two consecutive path points.
    ///
    /// By default this is set to `0.1`.
    pub min_spacing: f32,
    /// How the track is sampled into path points.
    ///
    /// By default this is set to `SampleMode::Analytic { step: 1.0 }`.
    pub sample_mode: SampleMode,
    /// The width and height of the draggable handle.
    ///
    /// By default this is set to `20.0`.
    pub handle_size: f32,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            minimum_value: ValueRange::DEFAULT_MINIMUM,
            maximum_value: ValueRange::DEFAULT_MAXIMUM,
            padding: ArcGeometry::DEFAULT_PADDING,
            min_spacing: DEFAULT_MIN_SPACING,
            sample_mode: SampleMode::default(),
            handle_size: Self::DEFAULT_HANDLE_SIZE,
        }
    }
}

impl KnobConfig {
    pub const DEFAULT_HANDLE_SIZE: f32 = 20.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, minimum_value: i32, maximum_value: i32) -> Self {
        self.minimum_value = minimum_value;
        self.maximum_value = maximum_value;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn min_spacing(mut self, min_spacing: f32) -> Self {
        self.min_spacing = min_spacing;
        self
    }

    pub fn sample_mode(mut self, sample_mode: SampleMode) -> Self {
        self.sample_mode = sample_mode;
        self
    }

    pub fn handle_size(mut self, handle_size: f32) -> Self {
        self.handle_size = handle_size;
        self
    }

    /// The value range, without checking that it is well-formed.
    pub fn value_range(&self) -> ValueRange {
        ValueRange::new(self.minimum_value, self.maximum_value)
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), KnobError> {
        ValueRange::try_new(self.minimum_value, self.maximum_value)?;

        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(KnobError::InvalidPadding(self.padding));
        }
        if !(self.min_spacing.is_finite() && self.min_spacing >= 0.0) {
            return Err(KnobError::InvalidSpacing(self.min_spacing));
        }
        let step = self.sample_mode.step();
        if !(step.is_finite() && step > 0.0) {
            return Err(KnobError::InvalidSampleStep(step));
        }
        if !(self.handle_size.is_finite() && self.handle_size > 0.0) {
            return Err(KnobError::InvalidHandleSize(self.handle_size));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathknob_core::RangeError;

    #[test]
    fn defaults() {
        let config = KnobConfig::default();
        assert_eq!(config.minimum_value, 0);
        assert_eq!(config.maximum_value, 10);
        assert_eq!(config.padding, 10.0);
        assert_eq!(config.min_spacing, 0.1);
        assert_eq!(config.sample_mode, SampleMode::Analytic { step: 1.0 });
        assert_eq!(config.handle_size, 20.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn setters_chain() {
        let config = KnobConfig::new()
            .range(-5, 5)
            .padding(4.0)
            .min_spacing(0.5)
            .sample_mode(SampleMode::Dashed { dash: 2.0 })
            .handle_size(12.0);
        assert_eq!(config.value_range(), ValueRange::new(-5, 5));
        assert_eq!(config.padding, 4.0);
        assert_eq!(config.min_spacing, 0.5);
        assert_eq!(config.sample_mode.step(), 2.0);
        assert_eq!(config.handle_size, 12.0);
    }

    #[test]
    fn validate_reports_bad_fields() {
        assert_eq!(
            KnobConfig::new().range(3, 3).validate(),
            Err(KnobError::InvalidRange(RangeError::NotIncreasing {
                minimum: 3,
                maximum: 3
            }))
        );
        assert_eq!(
            KnobConfig::new().padding(-1.0).validate(),
            Err(KnobError::InvalidPadding(-1.0))
        );
        assert!(matches!(
            KnobConfig::new().min_spacing(f32::NAN).validate(),
            Err(KnobError::InvalidSpacing(_))
        ));
        assert_eq!(
            KnobConfig::new()
                .sample_mode(SampleMode::Analytic { step: 0.0 })
                .validate(),
            Err(KnobError::InvalidSampleStep(0.0))
        );
        assert_eq!(
            KnobConfig::new().handle_size(0.0).validate(),
            Err(KnobError::InvalidHandleSize(0.0))
        );
    }
}
