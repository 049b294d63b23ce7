/// Session configuration
///
/// Everything the review session needs to know about the window, layout and
/// data source, built once from the command line in `main` and handed to the
/// application.
use rfd::FileDialog;
use std::path::{Path, PathBuf};

use crate::dataset::SidecarPolicy;
use crate::error::{Result, ReviewError};
use crate::mosaic::{layout, Slot};

/// Height of the status bar below the mosaic
pub const BAR_HEIGHT: u32 = 24;

pub const USAGE: &str = "usage: mosaic-review [DATA_DIR] [--aspect wide|standard|square] \
[--batch-size N] [--seed N] [--skip-invalid] [--report PATH] [--log-level LEVEL]";

/// Mosaic canvas and tile dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aspect {
    pub mosaic_width: u32,
    pub mosaic_height: u32,
    pub box_width: u32,
    pub box_height: u32,
}

impl Aspect {
    /// 4:3 tiles, 3x3
    pub const STANDARD: Aspect = Aspect {
        mosaic_width: 864,
        mosaic_height: 648,
        box_width: 288,
        box_height: 216,
    };

    /// 16:9 tiles, 3x3
    pub const WIDE: Aspect = Aspect {
        mosaic_width: 960,
        mosaic_height: 540,
        box_width: 320,
        box_height: 180,
    };

    /// Square tiles, 3x3
    pub const SQUARE: Aspect = Aspect {
        mosaic_width: 720,
        mosaic_height: 720,
        box_width: 240,
        box_height: 240,
    };

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::STANDARD),
            "wide" => Some(Self::WIDE),
            "square" => Some(Self::SQUARE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewConfig {
    /// Directory of `<name>.jpg` + `<name>.txt` pairs; asked for when absent
    pub data_dir: Option<PathBuf>,
    pub aspect: Aspect,
    /// Defaults to the number of slots in the layout
    pub batch_size: Option<usize>,
    /// Fixed seed for reproducible batches
    pub seed: Option<u64>,
    pub sidecar_policy: SidecarPolicy,
    /// Extra JSON lines report file
    pub report_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            aspect: Aspect::WIDE,
            batch_size: None,
            seed: None,
            sidecar_policy: SidecarPolicy::Strict,
            report_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl ReviewConfig {
    /// Parse command-line arguments (program name already stripped)
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--aspect" => {
                    let name = flag_value(&mut args, "--aspect")?;
                    config.aspect = Aspect::from_name(&name)
                        .ok_or_else(|| ReviewError::Config(format!("unknown aspect '{name}'")))?;
                }
                "--batch-size" => {
                    config.batch_size = Some(parse_number(&mut args, "--batch-size")?);
                }
                "--seed" => {
                    config.seed = Some(parse_number(&mut args, "--seed")?);
                }
                "--skip-invalid" => config.sidecar_policy = SidecarPolicy::Skip,
                "--report" => {
                    config.report_path = Some(PathBuf::from(flag_value(&mut args, "--report")?));
                }
                "--log-level" => {
                    config.log_level = flag_value(&mut args, "--log-level")?;
                }
                flag if flag.starts_with("--") => {
                    return Err(ReviewError::Config(format!("unknown flag '{flag}'\n{USAGE}")));
                }
                _ if config.data_dir.is_some() => {
                    return Err(ReviewError::Config(format!(
                        "unexpected extra argument '{arg}'\n{USAGE}"
                    )));
                }
                _ => config.data_dir = Some(PathBuf::from(arg)),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the batch fits the layout
    pub fn validate(&self) -> Result<()> {
        let slots = self.slot_count();
        if slots == 0 {
            return Err(ReviewError::Config("layout has no slots".to_string()));
        }
        match self.batch_size {
            Some(0) => Err(ReviewError::Config("batch size must be at least 1".to_string())),
            Some(n) if n > slots => Err(ReviewError::Config(format!(
                "batch size {n} exceeds the {slots} slots of the layout"
            ))),
            _ => Ok(()),
        }
    }

    /// The layout slots for the chosen aspect
    pub fn slots(&self) -> Vec<Slot> {
        let a = &self.aspect;
        layout::generate(a.mosaic_width, a.mosaic_height, a.box_width, a.box_height)
    }

    fn slot_count(&self) -> usize {
        let a = &self.aspect;
        if a.box_width == 0 || a.box_height == 0 {
            return 0;
        }
        ((a.mosaic_width / a.box_width) * (a.mosaic_height / a.box_height)) as usize
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.unwrap_or_else(|| self.slot_count())
    }

    /// The status bar strip under the mosaic
    pub fn bar(&self) -> Slot {
        Slot::new(0, self.aspect.mosaic_height, self.aspect.mosaic_width, BAR_HEIGHT)
    }

    /// Window size: mosaic plus status bar
    pub fn window_size(&self) -> (u32, u32) {
        (self.aspect.mosaic_width, self.aspect.mosaic_height + BAR_HEIGHT)
    }

    /// The data directory, asking with a folder picker if none was given
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => FileDialog::new()
                .set_title("Select folder with images and label files")
                .pick_folder()
                .ok_or_else(|| {
                    ReviewError::Config(format!("no data directory selected\n{USAGE}"))
                })?,
        };
        check_data_dir(&dir)?;
        Ok(dir)
    }
}

/// The data directory must exist and be a directory
pub fn check_data_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(ReviewError::DataDirNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ReviewError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

fn flag_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| ReviewError::Config(format!("{flag} needs a value")))
}

fn parse_number<T, I>(args: &mut I, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    I: Iterator<Item = String>,
{
    let value = flag_value(args, flag)?;
    value
        .parse()
        .map_err(|_| ReviewError::Config(format!("{flag} expects a number, got '{value}'")))
}
