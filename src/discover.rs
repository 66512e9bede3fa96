//! Finds the images in the input folder that should be packed.

use std::path::{self, Path, PathBuf};

use walkdir::WalkDir;

use crate::glob::Glob;

/// A file picked up from the input folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// The path relative to the input folder, always using `/` as the
    /// separator so names look the same on every platform.
    pub name: String,

    /// The path on disk.
    pub path: PathBuf,
}

/// Lists the files in `input` that match any of `patterns`, sorted by path.
///
/// Only files directly inside `input` are considered unless `recursive` is
/// set. Files named the same as `output` are left out so that a previous
/// result sitting in the input folder isn't packed into the next one.
pub fn find_inputs(
    input: &Path,
    patterns: &[Glob],
    recursive: bool,
    output: &Path,
) -> Result<Vec<InputFile>, walkdir::Error> {
    let output_name = output.file_name();
    let max_depth = if recursive { usize::MAX } else { 1 };

    let walker = WalkDir::new(input)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()));

    let mut found = Vec::new();

    for entry in walker {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = match entry.path().strip_prefix(input) {
            Ok(relative) => relative,
            Err(_) => continue,
        };

        if !patterns.iter().any(|pattern| pattern.is_match(relative)) {
            continue;
        }

        if output_name.is_some() && entry.path().file_name() == output_name {
            log::debug!("Ignoring {}, it has the output's name", entry.path().display());
            continue;
        }

        let name = display_name(relative);
        log::trace!("Found input {}", name);

        found.push(InputFile {
            name,
            path: entry.into_path(),
        });
    }

    log::info!("Found {} inputs in {}", found.len(), input.display());

    Ok(found)
}

fn display_name(relative: &Path) -> String {
    let displayed = relative.display().to_string();

    // Keep names identical across platforms by always using /.
    if path::MAIN_SEPARATOR == '/' {
        displayed
    } else {
        displayed.replace(path::MAIN_SEPARATOR, "/")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use fs_err as fs;

    use crate::glob::default_patterns;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn names(found: &[InputFile]) -> Vec<&str> {
        found.iter().map(|input| input.name.as_str()).collect()
    }

    #[test]
    fn matches_default_patterns() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.jpeg");
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "C.JPG");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "icon.png");

        let found = find_inputs(dir.path(), &default_patterns(), false, Path::new("output.png"))
            .unwrap();

        assert_eq!(names(&found), vec!["C.JPG", "a.jpg", "b.jpeg"]);
        assert_eq!(found[1].path, dir.path().join("a.jpg"));
    }

    #[test]
    fn skips_output_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "output.jpg");
        touch(dir.path(), "photo.jpg");

        let found = find_inputs(
            dir.path(),
            &default_patterns(),
            false,
            &dir.path().join("output.jpg"),
        )
        .unwrap();

        assert_eq!(names(&found), vec!["photo.jpg"]);
    }

    #[test]
    fn recursion_is_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "top.jpg");
        touch(dir.path(), "2019/beach.jpg");
        touch(dir.path(), "2019/july/fireworks.jpg");

        let shallow = find_inputs(dir.path(), &default_patterns(), false, Path::new("out.png"))
            .unwrap();
        assert_eq!(names(&shallow), vec!["top.jpg"]);

        let deep =
            find_inputs(dir.path(), &default_patterns(), true, Path::new("out.png")).unwrap();
        assert_eq!(
            names(&deep),
            vec!["2019/beach.jpg", "2019/july/fireworks.jpg", "top.jpg"]
        );
    }

    #[test]
    fn directories_are_not_inputs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("album.jpg")).unwrap();

        let found = find_inputs(dir.path(), &default_patterns(), false, Path::new("out.png"))
            .unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn missing_input_folder() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(find_inputs(&missing, &default_patterns(), false, Path::new("out.png")).is_err());
    }
}
