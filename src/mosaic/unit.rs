/// A single reviewable cell of a mosaic
///
/// Binds one layout slot to one sample (or a padding placeholder), the label
/// currently shown for it, and whether the reviewer has overridden it.
use iced::widget::image::Handle;
use std::path::Path;

use super::layout::Slot;
use crate::dataset::{Label, Sample};

/// Review state of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    Unreviewed,
    /// Clicked at least once; never goes back to `Unreviewed`
    Corrected,
}

#[derive(Debug, Clone)]
pub struct ReviewUnit {
    slot: Slot,
    /// The image and the classifier's prediction; `None` for placeholders
    sample: Option<Sample>,
    /// Label currently displayed
    label: Option<Label>,
    state: ReviewState,
    /// Scaled thumbnail, `None` for placeholders and undecodable images
    thumbnail: Option<Handle>,
}

impl ReviewUnit {
    pub fn new(slot: Slot, sample: Option<Sample>, thumbnail: Option<Handle>) -> Self {
        let label = sample.as_ref().map(|s| s.label);
        Self {
            slot,
            sample,
            label,
            state: ReviewState::Unreviewed,
            thumbnail,
        }
    }

    pub fn placeholder(slot: Slot) -> Self {
        Self::new(slot, None, None)
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn image(&self) -> Option<&Path> {
        self.sample.as_ref().map(|s| s.image.as_path())
    }

    pub fn is_placeholder(&self) -> bool {
        self.sample.is_none()
    }

    /// The classifier's original prediction
    pub fn predicted(&self) -> Option<Label> {
        self.sample.as_ref().map(|s| s.label)
    }

    pub fn label(&self) -> Option<Label> {
        self.label
    }

    pub fn is_corrected(&self) -> bool {
        self.state == ReviewState::Corrected
    }

    pub fn thumbnail(&self) -> Option<&Handle> {
        self.thumbnail.as_ref()
    }

    /// Flip the label and mark the unit corrected
    ///
    /// Every call flips the label; the corrected state is sticky.
    /// Placeholders never change and return `None`.
    pub fn toggle(&mut self) -> Option<Label> {
        let label = self.label?.flipped();
        self.label = Some(label);
        self.state = ReviewState::Corrected;
        Some(label)
    }
}
