//! Decodes input images and scales them to a common height.

use std::{
    io::{self, BufWriter, Write},
    num::NonZeroU32,
    path::{Path, PathBuf},
};

use fs_err as fs;
use image::{
    codecs::jpeg::JpegEncoder, imageops, imageops::FilterType, DynamicImage, ImageError,
    RgbaImage,
};
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use crate::{discover::InputFile, image::Image};

/// An input image after it's been scaled to the thumbnail height.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// The input's path relative to the input folder, with `/` separators.
    name: String,
    image: Image,
}

impl Thumbnail {
    pub(crate) fn new(name: impl Into<String>, image: Image) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Decodes the image behind `input` and scales it to `height` pixels tall.
    pub fn from_path(input: &InputFile, height: NonZeroU32) -> Result<Self, ThumbnailError> {
        let decoded = image::open(&input.path).map_err(|source| ThumbnailError::Decode {
            path: input.path.clone(),
            source,
        })?;

        Self::from_rgba_image(&input.name, &decoded.to_rgba8(), height).ok_or_else(|| {
            ThumbnailError::Empty {
                path: input.path.clone(),
            }
        })
    }

    /// Scales `source` to `height` pixels tall, keeping its aspect ratio.
    /// Returns `None` for images with no pixels.
    pub fn from_rgba_image(name: &str, source: &RgbaImage, height: NonZeroU32) -> Option<Self> {
        let (width, source_height) = source.dimensions();

        if width == 0 || source_height == 0 {
            return None;
        }

        let height = height.get();
        let scaled = scaled_width((width, source_height), height);
        let resized = imageops::resize(source, scaled, height, FilterType::Lanczos3);

        Some(Self::new(name, Image::from_rgba_image(resized)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn image(&self) -> &Image {
        &self.image
    }

    /// Writes this thumbnail into `dir` as a JPEG, mirroring the input's
    /// relative path. Returns the path that was written.
    ///
    /// An existing file at that path is never overwritten.
    pub fn save_jpeg(&self, dir: &Path) -> Result<PathBuf, ThumbnailError> {
        let path = dir.join(jpeg_file_name(&self.name));

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| {
                if source.kind() == io::ErrorKind::AlreadyExists {
                    ThumbnailError::AlreadySaved { path: path.clone() }
                } else {
                    ThumbnailError::from(source)
                }
            })?;

        // JPEG has no alpha channel.
        let rgb = DynamicImage::ImageRgba8(self.image.to_rgba_image()).to_rgb8();

        let mut writer = BufWriter::new(file);
        JpegEncoder::new(&mut writer)
            .encode_image(&rgb)
            .map_err(|source| ThumbnailError::Save {
                path: path.clone(),
                source,
            })?;
        writer.flush()?;

        Ok(path)
    }
}

impl rowpack::Item for Thumbnail {
    fn size(&self) -> (u32, u32) {
        self.image.size()
    }
}

/// Inputs that are already JPEGs keep their name. Anything else gets `.jpg`
/// added after its full name, so `photo.png` and `photo.jpg` stay apart.
fn jpeg_file_name(name: &str) -> String {
    let lower = name.to_ascii_lowercase();

    if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        name.to_owned()
    } else {
        format!("{}.jpg", name)
    }
}

/// The width an image of `size` has once scaled to `target_height`, never
/// less than one pixel.
pub fn scaled_width(size: (u32, u32), target_height: u32) -> u32 {
    let exact = f64::from(size.0) * f64::from(target_height) / f64::from(size.1);

    ((exact + 0.7) as u32).max(1)
}

/// Produces a thumbnail for every input, in the same order.
///
/// Inputs that can't be decoded are logged and left out. If `save_dir` is
/// given, every thumbnail is also written there; failing to save one is
/// logged but doesn't drop it from the result.
pub fn make_thumbnails(
    inputs: &[InputFile],
    height: NonZeroU32,
    save_dir: Option<&Path>,
) -> Vec<Thumbnail> {
    let progress = ProgressBar::new(inputs.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{spinner} [{bar:40}] {pos}/{len} {wide_msg}"),
    );

    let mut thumbnails = Vec::with_capacity(inputs.len());

    for input in inputs {
        progress.set_message(input.name.clone());

        match Thumbnail::from_path(input, height) {
            Ok(thumbnail) => {
                log::trace!(
                    "Scaled {} to {}x{}",
                    input.name,
                    thumbnail.image.size().0,
                    thumbnail.image.size().1
                );

                if let Some(dir) = save_dir {
                    if let Err(err) = thumbnail.save_jpeg(dir) {
                        log::warn!("{}", err);
                    }
                }

                thumbnails.push(thumbnail);
            }
            Err(err) => log::warn!("{}, skipping it", err),
        }

        progress.inc(1);
    }

    progress.finish_and_clear();

    log::info!(
        "Made {} thumbnails from {} inputs",
        thumbnails.len(),
        inputs.len()
    );

    thumbnails
}

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("Failed to load image {}: {source}", path.display())]
    Decode { path: PathBuf, source: ImageError },

    #[error("Image {} has no pixels", path.display())]
    Empty { path: PathBuf },

    #[error("Failed to save thumbnail {}: {source}", path.display())]
    Save { path: PathBuf, source: ImageError },

    #[error("Thumbnail {} was already saved for another input", path.display())]
    AlreadySaved { path: PathBuf },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}
