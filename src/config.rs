use std::{
    io,
    num::NonZeroU32,
    path::{Path, PathBuf},
};

use fs_err as fs;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    glob::{default_patterns, Glob},
    options::LayoutOptions,
};

static CONFIG_FILENAME: &str = "masonry.toml";

const DEFAULT_MAX_WIDTH: u32 = 820;
const DEFAULT_THUMBNAIL_HEIGHT: u32 = 200;
const DEFAULT_OUTPUT: &str = "output.png";
const DEFAULT_THUMBNAILS_DIR: &str = "thumbnails";

/// Defaults for a run, contained in a masonry.toml file.
///
/// Every field is optional. Anything given on the command line wins over
/// what's written here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ConfigFile {
    /// The folder to read images from.
    pub input: Option<PathBuf>,

    /// Where to write the packed image.
    pub output: Option<PathBuf>,

    /// The width budget for the first row.
    pub max_width: Option<u32>,

    /// The height every image is scaled to.
    pub thumbnail_height: Option<u32>,

    /// Globs selecting which files in `input` are images to pack.
    pub patterns: Option<Vec<Glob>>,

    /// Whether to descend into folders inside `input`.
    pub recursive: Option<bool>,

    /// Where scaled thumbnails are saved.
    pub thumbnails_dir: Option<PathBuf>,

    /// Whether scaled thumbnails are saved at all.
    pub keep_thumbnails: Option<bool>,

    /// The path that this config came from. Paths from this config are
    /// relative to the folder containing this file.
    #[serde(skip)]
    pub file_path: PathBuf,
}

impl ConfigFile {
    /// Reads the config file the user asked for, or masonry.toml from the
    /// current directory if they didn't ask for one. A missing masonry.toml is
    /// not an error, but a missing explicitly named file is.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit_path {
            Some(path) => Self::read_from_file(path),
            None => match Self::read_from_file(CONFIG_FILENAME) {
                Ok(config) => Ok(config),
                Err(err) if err.is_not_found() => Ok(Self::default()),
                Err(err) => Err(err),
            },
        }
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        config.file_path = path.to_owned();

        log::debug!("Read config from {}", path.display());

        Ok(config)
    }

    /// The path that paths in this config should be considered relative to.
    pub fn folder(&self) -> &Path {
        self.file_path.parent().unwrap_or_else(|| Path::new(""))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.folder().join(path)
    }
}

/// Everything a run needs to know, with command line options, the config file
/// and built-in defaults merged together.
///
/// Constructing one validates it, so any `ComposeConfig` can be handed
/// straight to the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub max_width: NonZeroU32,
    pub thumbnail_height: NonZeroU32,
    pub patterns: Vec<Glob>,
    pub recursive: bool,

    /// Where to save scaled thumbnails, or `None` to not save them.
    pub thumbnails_dir: Option<PathBuf>,

    /// Whether an existing thumbnails folder can be removed without asking.
    pub assume_yes: bool,
}

impl ComposeConfig {
    pub fn new(file: &ConfigFile, options: &LayoutOptions) -> Result<Self, ConfigError> {
        let input = match (&options.input, &file.input) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => file.resolve(path),
            (None, None) => PathBuf::from("."),
        };

        let output = match (&options.output, &file.output) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => file.resolve(path),
            (None, None) => PathBuf::from(DEFAULT_OUTPUT),
        };

        let max_width = options
            .max_width
            .or(file.max_width)
            .unwrap_or(DEFAULT_MAX_WIDTH);
        let max_width = NonZeroU32::new(max_width).ok_or(ConfigError::ZeroMaxWidth)?;

        let thumbnail_height = options
            .height
            .or(file.thumbnail_height)
            .unwrap_or(DEFAULT_THUMBNAIL_HEIGHT);
        let thumbnail_height =
            NonZeroU32::new(thumbnail_height).ok_or(ConfigError::ZeroThumbnailHeight)?;

        let patterns = if !options.patterns.is_empty() {
            options.patterns.clone()
        } else {
            file.patterns.clone().unwrap_or_else(default_patterns)
        };

        if patterns.is_empty() {
            return Err(ConfigError::NoPatterns);
        }

        let recursive = options.recursive || file.recursive.unwrap_or(false);

        let thumbnails_dir = if file.keep_thumbnails.unwrap_or(true) {
            let dir = match &file.thumbnails_dir {
                Some(path) => file.resolve(path),
                None => PathBuf::from(DEFAULT_THUMBNAILS_DIR),
            };

            Some(dir)
        } else {
            None
        };

        Ok(Self {
            input,
            output,
            max_width,
            thumbnail_height,
            patterns,
            recursive,
            thumbnails_dir,
            assume_yes: false,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{source} in {}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("max-width must be greater than zero")]
    ZeroMaxWidth,

    #[error("thumbnail height must be greater than zero")]
    ZeroThumbnailHeight,

    #[error("at least one input pattern is required")]
    NoPatterns,
}

impl ConfigError {
    /// Tells whether this ConfigError originated because of a path not
    /// existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io { source } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(source: &str) -> Result<ConfigFile, toml::de::Error> {
        toml::from_str(source)
    }

    #[test]
    fn defaults() {
        let config = ComposeConfig::new(&ConfigFile::default(), &LayoutOptions::default()).unwrap();

        assert_eq!(config.input, PathBuf::from("."));
        assert_eq!(config.output, PathBuf::from("output.png"));
        assert_eq!(config.max_width.get(), 820);
        assert_eq!(config.thumbnail_height.get(), 200);
        assert_eq!(config.patterns, default_patterns());
        assert!(!config.recursive);
        assert_eq!(config.thumbnails_dir, Some(PathBuf::from("thumbnails")));
        assert!(!config.assume_yes);
    }

    #[test]
    fn full_file() {
        let file = parse(
            r#"
            input = "photos"
            output = "sheet.png"
            max-width = 1200
            thumbnail-height = 150
            patterns = ["*.png"]
            recursive = true
            thumbnails-dir = "thumbs"
            keep-thumbnails = true
            "#,
        )
        .unwrap();

        let config = ComposeConfig::new(&file, &LayoutOptions::default()).unwrap();

        assert_eq!(config.input, PathBuf::from("photos"));
        assert_eq!(config.output, PathBuf::from("sheet.png"));
        assert_eq!(config.max_width.get(), 1200);
        assert_eq!(config.thumbnail_height.get(), 150);
        assert_eq!(config.patterns, vec![Glob::new("*.png").unwrap()]);
        assert!(config.recursive);
        assert_eq!(config.thumbnails_dir, Some(PathBuf::from("thumbs")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("max-widht = 10").is_err());
    }

    #[test]
    fn bad_glob_is_rejected() {
        assert!(parse(r#"patterns = ["[oops"]"#).is_err());
    }

    #[test]
    fn options_win_over_file() {
        let file = parse("max-width = 1200\nthumbnail-height = 150").unwrap();
        let options = LayoutOptions {
            max_width: Some(600),
            patterns: vec![Glob::new("*.gif").unwrap()],
            ..Default::default()
        };

        let config = ComposeConfig::new(&file, &options).unwrap();

        assert_eq!(config.max_width.get(), 600);
        assert_eq!(config.thumbnail_height.get(), 150);
        assert_eq!(config.patterns, vec![Glob::new("*.gif").unwrap()]);
    }

    #[test]
    fn zero_max_width() {
        let options = LayoutOptions {
            max_width: Some(0),
            ..Default::default()
        };

        let err = ComposeConfig::new(&ConfigFile::default(), &options).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroMaxWidth));
    }

    #[test]
    fn zero_height() {
        let file = parse("thumbnail-height = 0").unwrap();

        let err = ComposeConfig::new(&file, &LayoutOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroThumbnailHeight));
    }

    #[test]
    fn empty_patterns() {
        let file = parse("patterns = []").unwrap();

        let err = ComposeConfig::new(&file, &LayoutOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::NoPatterns));
    }

    #[test]
    fn thumbnails_can_be_turned_off() {
        let file = parse("keep-thumbnails = false").unwrap();

        let config = ComposeConfig::new(&file, &LayoutOptions::default()).unwrap();
        assert_eq!(config.thumbnails_dir, None);
    }

    #[test]
    fn paths_are_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("masonry.toml");
        fs::write(&path, "input = \"photos\"\nthumbnails-dir = \"thumbs\"").unwrap();

        let file = ConfigFile::load(Some(path.as_path())).unwrap();
        let config = ComposeConfig::new(&file, &LayoutOptions::default()).unwrap();

        assert_eq!(config.input, dir.path().join("photos"));
        assert_eq!(config.thumbnails_dir, Some(dir.path().join("thumbs")));
        assert_eq!(config.output, PathBuf::from("output.png"));
    }

    #[test]
    fn missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigFile::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("masonry.toml");
        fs::write(&path, "max-width = \"wide\"").unwrap();

        let err = ConfigFile::read_from_file(&path).unwrap_err();

        assert!(!err.is_not_found());
        assert!(err.to_string().contains("masonry.toml"));
    }
}
