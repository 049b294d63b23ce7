/// User interface module
///
/// - Badge overlay canvas and press capture (canvas.rs)
/// - Thumbnail stack and status bar widgets (mosaic.rs)

pub mod canvas;
pub mod mosaic;
