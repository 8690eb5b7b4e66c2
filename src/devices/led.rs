use serde::Serialize;

use crate::error::ValidationError;

/// Number of stages in every dimming schedule.
pub const STAGE_COUNT: usize = 4;

/// Highest accepted brightness in percent.
pub const MAX_BRIGHTNESS_PCT: u32 = 100;

/// Longest accepted stage in hours.
pub const MAX_STAGE_HOURS: u32 = 12;

/// A dimmable LED fixture characterised by its full-brightness draw.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LedLoad {
    /// Power draw at 100% brightness in watts.
    pub full_power_w: f64,
}

impl LedLoad {
    pub fn new(full_power_w: f64) -> Self {
        Self { full_power_w }
    }

    /// Power draw at the given brightness, assuming linear dimming.
    pub fn draw_w(&self, brightness_pct: u8) -> f64 {
        self.full_power_w * (f64::from(brightness_pct) / 100.0)
    }

    /// Energy consumed over a whole stage.
    ///
    /// Exactly zero when the stage is dark or has no duration, whatever the
    /// other factor holds.
    pub fn stage_energy_wh(&self, stage: &DimmingStage) -> f64 {
        if stage.is_idle() {
            return 0.0;
        }
        self.draw_w(stage.brightness_pct()) * f64::from(stage.duration_hours())
    }
}

/// One contiguous period of constant brightness in the night schedule.
///
/// Only [`DimmingStage::new`] and [`DimmingSchedule::from_levels`] build
/// stages, so every value is in range:
///
/// ```compile_fail
/// use solar_light_sim::DimmingStage;
///
/// let _ = DimmingStage { index: 1, brightness_pct: 200, duration_hours: 40 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimmingStage {
    index: u8,
    brightness_pct: u8,
    duration_hours: u8,
}

impl DimmingStage {
    /// Creates a validated stage.
    ///
    /// # Errors
    ///
    /// Returns the first violated range among index, brightness and duration.
    pub fn new(index: u8, brightness_pct: u32, duration_hours: u32) -> Result<Self, ValidationError> {
        match Self::check(index, brightness_pct, duration_hours).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(Self {
                index,
                // Both bounds are checked above.
                brightness_pct: brightness_pct as u8,
                duration_hours: duration_hours as u8,
            }),
        }
    }

    fn check(index: u8, brightness_pct: u32, duration_hours: u32) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if !(1..=STAGE_COUNT as u8).contains(&index) {
            errors.push(ValidationError::StageIndex {
                position: usize::from(index.saturating_sub(1)),
                expected: index.clamp(1, STAGE_COUNT as u8),
                found: index,
            });
        }
        if brightness_pct > MAX_BRIGHTNESS_PCT {
            errors.push(ValidationError::BrightnessOutOfRange {
                stage: index,
                value: brightness_pct,
            });
        }
        if duration_hours > MAX_STAGE_HOURS {
            errors.push(ValidationError::DurationOutOfRange {
                stage: index,
                value: duration_hours,
            });
        }
        errors
    }

    /// Position in the schedule, 1..=4.
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Brightness in percent, 0..=100.
    pub fn brightness_pct(&self) -> u8 {
        self.brightness_pct
    }

    /// Duration in whole hours, 0..=12.
    pub fn duration_hours(&self) -> u8 {
        self.duration_hours
    }

    /// True when the stage consumes nothing.
    pub fn is_idle(&self) -> bool {
        self.brightness_pct == 0 || self.duration_hours == 0
    }
}

/// The four dimming stages of one night, in index order.
///
/// Order matters: the SOC simulator discharges the stages in sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DimmingSchedule {
    stages: [DimmingStage; STAGE_COUNT],
}

impl DimmingSchedule {
    /// Wraps four stages, checking that they are numbered 1, 2, 3, 4 in order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::StageIndex`] for the first misplaced stage.
    pub fn new(stages: [DimmingStage; STAGE_COUNT]) -> Result<Self, ValidationError> {
        for (position, stage) in stages.iter().enumerate() {
            let expected = position as u8 + 1;
            if stage.index != expected {
                return Err(ValidationError::StageIndex {
                    position,
                    expected,
                    found: stage.index,
                });
            }
        }
        Ok(Self { stages })
    }

    /// Builds a schedule from a slice that must hold exactly four stages.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::StageCount`] on a wrong length, otherwise
    /// whatever [`DimmingSchedule::new`] reports.
    pub fn from_slice(stages: &[DimmingStage]) -> Result<Self, ValidationError> {
        let stages: [DimmingStage; STAGE_COUNT] = stages
            .try_into()
            .map_err(|_| ValidationError::StageCount {
                count: stages.len(),
            })?;
        Self::new(stages)
    }

    /// Builds a schedule from `(brightness_pct, duration_hours)` pairs,
    /// numbering them in the given order.
    ///
    /// # Errors
    ///
    /// Returns every violation found, not just the first.
    pub fn from_levels(levels: &[(u32, u32)]) -> Result<Self, Vec<ValidationError>> {
        if levels.len() != STAGE_COUNT {
            return Err(vec![ValidationError::StageCount {
                count: levels.len(),
            }]);
        }

        let mut errors = Vec::new();
        let mut stages = Vec::with_capacity(STAGE_COUNT);
        for (i, &(brightness, duration)) in levels.iter().enumerate() {
            let index = i as u8 + 1;
            let problems = DimmingStage::check(index, brightness, duration);
            if problems.is_empty() {
                stages.push(DimmingStage {
                    index,
                    brightness_pct: brightness as u8,
                    duration_hours: duration as u8,
                });
            } else {
                errors.extend(problems);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Self::from_slice(&stages).map_err(|e| vec![e])
    }

    pub fn stages(&self) -> &[DimmingStage; STAGE_COUNT] {
        &self.stages
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimmingStage> {
        self.stages.iter()
    }

    /// Total lit hours requested across all stages.
    pub fn total_duration_hours(&self) -> usize {
        self.stages
            .iter()
            .map(|s| usize::from(s.duration_hours))
            .sum()
    }
}

impl<'a> IntoIterator for &'a DimmingSchedule {
    type Item = &'a DimmingStage;
    type IntoIter = std::slice::Iter<'a, DimmingStage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}
