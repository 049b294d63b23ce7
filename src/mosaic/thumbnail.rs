use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::Path;

use super::layout::Slot;
use crate::error::{Result, ReviewError};

/// Decode an image and scale it to exactly fill `slot`
///
/// The aspect ratio is not preserved; every thumbnail covers its slot.
pub fn load_thumbnail(path: &Path, slot: &Slot) -> Result<Handle> {
    let img = image::open(path).map_err(|source| ReviewError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let scaled = img.resize_exact(slot.width, slot.height, FilterType::Triangle);
    let rgba = scaled.to_rgba8();

    Ok(Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw()))
}
