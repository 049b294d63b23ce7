use iced::widget::image::Handle;
use rand::Rng;
use std::path::Path;
use tracing::{debug, info};

use crate::config::ReviewConfig;
use crate::dataset::{Batcher, Sample};
use crate::error::{Result, ReviewError};
use crate::mosaic::{PressOutcome, ReviewPage, Slot};

/// The review loop state: pages, which one is shown, and whether the
/// screen is stale
pub struct ReviewSession {
    pages: Vec<ReviewPage>,
    current: usize,
    /// Presses over this strip never reach a unit
    bar: Slot,
    needs_redraw: bool,
}

impl ReviewSession {
    /// A session needs at least one page
    pub fn new(pages: Vec<ReviewPage>, bar: Slot) -> Result<Self> {
        if pages.is_empty() {
            return Err(ReviewError::Config(
                "a review session needs at least one page".to_string(),
            ));
        }
        Ok(Self {
            pages,
            current: 0,
            bar,
            needs_redraw: true,
        })
    }

    /// Batch `samples` and build one page per batch on the configured layout
    pub fn assemble<R, F>(
        config: &ReviewConfig,
        samples: Vec<Sample>,
        batcher: &mut Batcher<R>,
        mut thumbnail: F,
    ) -> Result<Self>
    where
        R: Rng,
        F: FnMut(&Path, &Slot) -> Option<Handle>,
    {
        let slots = config.slots();

        let pages: Vec<ReviewPage> = batcher
            .batch(samples)
            .into_iter()
            .map(|batch| ReviewPage::new(&slots, batch, &mut thumbnail))
            .collect();

        info!(mosaics = pages.len(), batch_size = batcher.size(), "built review pages");
        Self::new(pages, config.bar())
    }

    pub fn pages(&self) -> &[ReviewPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> &ReviewPage {
        &self.pages[self.current]
    }

    /// Go to the previous page, wrapping to the last
    pub fn previous(&mut self) {
        let count = self.pages.len();
        self.current = (self.current + count - 1) % count;
        self.needs_redraw = true;
        debug!(page = self.current, "previous mosaic");
    }

    /// Go to the next page, wrapping to the first
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.pages.len();
        self.needs_redraw = true;
        debug!(page = self.current, "next mosaic");
    }

    /// Dispatch a left-button press at a window position to the visible page
    pub fn press(&mut self, x: f32, y: f32) -> PressOutcome {
        if self.bar.contains(x, y) {
            return PressOutcome::StatusBar;
        }

        let page = self.current;
        let outcome = self.pages[page].press(x, y);
        self.needs_redraw |= outcome.changed();
        if let PressOutcome::Toggled { index, label } = outcome {
            debug!(page, unit = index, %label, "label corrected");
        }
        outcome
    }

    /// Whether a redraw is due; resets the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn corrected_count(&self) -> usize {
        self.pages.iter().map(ReviewPage::corrected_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Label;
    use std::path::PathBuf;

    fn samples(count: usize) -> Vec<Sample> {
        (0..count)
            .map(|i| Sample {
                image: PathBuf::from(format!("{i}.jpg")),
                label: Label::Clouds,
            })
            .collect()
    }

    fn session(count: usize) -> ReviewSession {
        let config = ReviewConfig {
            batch_size: Some(3),
            ..Default::default()
        };
        let mut batcher = Batcher::new(config.batch_size(), Some(5));
        ReviewSession::assemble(&config, samples(count), &mut batcher, |_: &Path, _: &Slot| None)
            .unwrap()
    }

    #[test]
    fn test_pages_per_batch() {
        let session = session(7);
        assert_eq!(session.page_count(), 3);
        assert_eq!(session.current_index(), 0);
        assert!(session.pages().iter().all(|p| p.units().len() == 3));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut session = session(7);
        session.previous();
        assert_eq!(session.current_index(), 2);
        session.next();
        assert_eq!(session.current_index(), 0);
        session.next();
        session.next();
        session.next();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_single_page_navigation_stays_put() {
        let mut session = session(2);
        session.next();
        assert_eq!(session.current_index(), 0);
        session.previous();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_redraw_flag() {
        let mut session = session(7);
        assert!(session.take_redraw());
        assert!(!session.take_redraw());

        session.next();
        assert!(session.take_redraw());

        // Miss: nothing changes
        assert_eq!(session.press(10.0, 500.0), PressOutcome::Missed);
        assert!(!session.take_redraw());

        assert!(session.press(10.0, 10.0).changed());
        assert!(session.take_redraw());
    }

    #[test]
    fn test_status_bar_swallows_press() {
        let mut session = session(7);
        session.take_redraw();
        assert_eq!(session.press(5.0, 545.0), PressOutcome::StatusBar);
        assert_eq!(session.corrected_count(), 0);
        assert!(!session.take_redraw());
    }

    #[test]
    fn test_press_only_touches_visible_page() {
        let mut session = session(7);
        session.next();
        session.press(10.0, 10.0);
        assert_eq!(session.pages()[0].corrected_count(), 0);
        assert_eq!(session.pages()[1].corrected_count(), 1);
    }

    #[test]
    fn test_no_pages_is_error() {
        assert!(ReviewSession::new(Vec::new(), Slot::new(0, 540, 960, 24)).is_err());
    }
}
