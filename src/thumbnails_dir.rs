//! Sets up the folder that scaled thumbnails are saved into.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use fs_err as fs;

/// Makes sure `dir` exists and is empty.
///
/// If `dir` already exists, the user is asked on `prompt` whether it can be
/// removed, and their answer is read from `answers`. Returns `false` if they
/// declined, in which case nothing on disk is touched. `assume_yes` skips the
/// question.
pub fn prepare_thumbnails_dir<R: BufRead, W: Write>(
    dir: &Path,
    assume_yes: bool,
    mut answers: R,
    mut prompt: W,
) -> io::Result<bool> {
    if dir.exists() {
        if !assume_yes {
            write!(
                prompt,
                "The directory {} already exists. Do you want to remove it and proceed? (y/n): ",
                dir.display()
            )?;
            prompt.flush()?;

            let mut response = String::new();
            answers.read_line(&mut response)?;

            if !response.trim().eq_ignore_ascii_case("y") {
                return Ok(false);
            }
        }

        log::info!("Removing {}", dir.display());
        fs::remove_dir_all(dir)?;
    }

    fs::create_dir_all(dir)?;

    Ok(true)
}

#[cfg(test)]
mod test {
    use super::*;

    fn existing_dir() -> (tempfile::TempDir, std::path::PathBuf) {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("thumbnails");

        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("old.jpg"), b"stale").unwrap();

        (root, dir)
    }

    #[test]
    fn creates_missing_dir_without_asking() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("thumbnails");
        let mut prompt: Vec<u8> = Vec::new();

        let proceed = prepare_thumbnails_dir(&dir, false, &b""[..], &mut prompt).unwrap();

        assert!(proceed);
        assert!(dir.is_dir());
        assert!(prompt.is_empty());
    }

    #[test]
    fn yes_clears_dir() {
        let (_root, dir) = existing_dir();
        let mut prompt: Vec<u8> = Vec::new();

        let proceed = prepare_thumbnails_dir(&dir, false, &b" Y \n"[..], &mut prompt).unwrap();

        assert!(proceed);
        assert!(dir.is_dir());
        assert!(!dir.join("old.jpg").exists());

        let prompt = String::from_utf8(prompt).unwrap();
        assert!(prompt.contains("already exists"));
        assert!(prompt.ends_with("(y/n): "));
    }

    #[test]
    fn anything_else_cancels() {
        for answer in &["n\n", "yes\n", "\n", ""] {
            let (_root, dir) = existing_dir();

            let proceed =
                prepare_thumbnails_dir(&dir, false, answer.as_bytes(), Vec::<u8>::new()).unwrap();

            assert!(!proceed, "answer {:?} should cancel", answer);
            assert!(dir.join("old.jpg").exists());
        }
    }

    #[test]
    fn assume_yes_skips_question() {
        let (_root, dir) = existing_dir();
        let mut prompt: Vec<u8> = Vec::new();

        let proceed = prepare_thumbnails_dir(&dir, true, &b""[..], &mut prompt).unwrap();

        assert!(proceed);
        assert!(prompt.is_empty());
        assert!(!dir.join("old.jpg").exists());
    }
}
