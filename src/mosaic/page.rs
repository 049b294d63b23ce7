/// One screen of the review: a batch bound to the shared layout
use iced::widget::image::Handle;
use std::path::Path;

use super::layout::Slot;
use super::unit::ReviewUnit;
use crate::dataset::{Batch, Label};

/// What a pointer press on a page did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The unit at `index` now shows `label`
    Toggled { index: usize, label: Label },
    /// The press landed on a placeholder and was ignored
    Placeholder,
    /// The press landed on the status bar and was ignored
    StatusBar,
    /// No slot under the pointer
    Missed,
}

impl PressOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Toggled { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ReviewPage {
    units: Vec<ReviewUnit>,
}

impl ReviewPage {
    /// Bind `batch` to `slots`, index-aligned
    ///
    /// `thumbnail` is called once per real sample, so image decoding is
    /// finished by the time the page exists.
    pub fn new<F>(slots: &[Slot], batch: Batch, thumbnail: &mut F) -> Self
    where
        F: FnMut(&Path, &Slot) -> Option<Handle>,
    {
        debug_assert!(batch.len() <= slots.len(), "batch larger than layout");

        let units = slots
            .iter()
            .zip(batch)
            .map(|(slot, entry)| match entry {
                Some(sample) => {
                    let handle = thumbnail(&sample.image, slot);
                    ReviewUnit::new(*slot, Some(sample), handle)
                }
                None => ReviewUnit::placeholder(*slot),
            })
            .collect();

        Self { units }
    }

    pub fn units(&self) -> &[ReviewUnit] {
        &self.units
    }

    /// Index of the first unit whose slot contains the point
    pub fn unit_at(&self, x: f32, y: f32) -> Option<usize> {
        self.units.iter().position(|unit| unit.slot().contains(x, y))
    }

    /// Dispatch a press to at most one unit
    pub fn press(&mut self, x: f32, y: f32) -> PressOutcome {
        let Some(index) = self.unit_at(x, y) else {
            return PressOutcome::Missed;
        };

        match self.units[index].toggle() {
            Some(label) => PressOutcome::Toggled { index, label },
            None => PressOutcome::Placeholder,
        }
    }

    pub fn real_units(&self) -> impl Iterator<Item = &ReviewUnit> {
        self.units.iter().filter(|unit| !unit.is_placeholder())
    }

    pub fn corrected_count(&self) -> usize {
        self.units.iter().filter(|unit| unit.is_corrected()).count()
    }
}
