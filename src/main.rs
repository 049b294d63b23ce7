use iced::keyboard::{self, key, Key};
use iced::widget::canvas::Cache;
use iced::widget::column;
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

mod config;
mod dataset;
mod error;
mod logging;
mod mosaic;
mod state;
mod ui;

use config::ReviewConfig;
use dataset::{loader, Batcher};
use mosaic::thumbnail::load_thumbnail;
use state::{Report, ReviewSession};

/// Main application state
struct MosaicReview {
    config: ReviewConfig,
    session: ReviewSession,
    /// Badge overlay geometry, cleared when the session needs a redraw
    overlay: Cache,
    /// The report goes out once, whichever way the session ends
    reported: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Left button pressed at a position on the mosaic
    Pressed(Point),
    Previous,
    Next,
    /// Quit key
    Quit,
    /// Window close button
    CloseRequested(window::Id),
}

impl MosaicReview {
    fn new(config: ReviewConfig, session: ReviewSession) -> (Self, Task<Message>) {
        (
            MosaicReview {
                config,
                session,
                overlay: Cache::new(),
                reported: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Pressed(position) => {
                let outcome = self.session.press(position.x, position.y);
                debug!(x = position.x, y = position.y, ?outcome, "press");
                Task::none()
            }
            Message::Previous => {
                self.session.previous();
                Task::none()
            }
            Message::Next => {
                self.session.next();
                Task::none()
            }
            Message::Quit => {
                self.finish(io::stdout().lock());
                iced::exit()
            }
            Message::CloseRequested(id) => {
                self.finish(io::stdout().lock());
                window::close(id)
            }
        };

        if self.session.take_redraw() {
            self.overlay.clear();
        }

        task
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let aspect = &self.config.aspect;
        let bar = self.config.bar();

        column![
            self.session
                .current_page()
                .view(&self.overlay, aspect.mosaic_width, aspect.mosaic_height),
            ui::mosaic::status_bar(&self.session, bar.width, bar.height),
        ]
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::on_key_press(key_message),
            window::close_requests().map(Message::CloseRequested),
        ])
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Emit the review report (console lines to `out`, optional file, summary log)
    ///
    /// Only the first call writes anything.
    fn finish<W: Write>(&mut self, out: W) {
        if self.reported {
            return;
        }
        self.reported = true;

        let report = Report::collect(&self.session);
        if let Err(e) = report.write_console(out) {
            error!(error = %e, "failed to print report");
        }
        if let Some(path) = &self.config.report_path {
            if let Err(e) = report.save_json_lines(path) {
                error!(error = %e, "failed to write report file");
            }
        }
        report.log_summary();
    }
}

/// Navigation and quit keys; everything else is ignored
fn key_message(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Character("q") | Key::Named(key::Named::ArrowLeft) => Some(Message::Previous),
        Key::Character("e") | Key::Named(key::Named::ArrowRight) => Some(Message::Next),
        Key::Named(key::Named::Escape) => Some(Message::Quit),
        _ => None,
    }
}

/// Load labels and decode every thumbnail before the window opens
fn prepare(config: &ReviewConfig) -> error::Result<(PathBuf, ReviewSession)> {
    let data_dir = config.resolve_data_dir()?;
    info!(dir = %data_dir.display(), "valid data directory");

    let samples = loader::load_samples(&data_dir, config.sidecar_policy)?;
    let mut batcher = Batcher::new(config.batch_size(), config.seed);

    let session = ReviewSession::assemble(config, samples, &mut batcher, |path, slot| {
        load_thumbnail(path, slot)
            .map_err(|e| warn!(image = %path.display(), error = %e, "showing blank thumbnail"))
            .ok()
    })?;

    Ok((data_dir, session))
}

fn main() -> iced::Result {
    let config = ReviewConfig::from_args(std::env::args().skip(1));
    logging::init(config.as_ref().map_or("info", |c| c.log_level.as_str()));

    let (config, session) = match config.and_then(|config| {
        let (data_dir, session) = prepare(&config)?;
        Ok((ReviewConfig { data_dir: Some(data_dir), ..config }, session))
    }) {
        Ok(ready) => ready,
        Err(e) => {
            error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };

    let (width, height) = config.window_size();

    iced::application("Mosaic Review", MosaicReview::update, MosaicReview::view)
        .subscription(MosaicReview::subscription)
        .theme(MosaicReview::theme)
        .window_size(Size::new(width as f32, height as f32))
        .resizable(false)
        .exit_on_close_request(false)
        .run_with(move || MosaicReview::new(config, session))
}
