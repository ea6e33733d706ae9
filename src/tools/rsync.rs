//! Directory mirroring through rsync.

use super::Mirror;
use crate::utils::{
    exec::Cmd,
    path::{contents_of, strip_trailing_separator},
};
use anyhow::Result;
use std::{ffi::OsString, path::Path};

/// `rsync -av --delete SRC/ DEST`
pub struct Rsync {
    program: String,
}

impl Rsync {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for one mirror run.
    ///
    /// The source keeps a trailing separator so its contents land in `dest`
    /// rather than a nested directory; `dest` has none.
    pub fn args(source: &Path, dest: &Path) -> Vec<OsString> {
        vec![
            "-av".into(),
            "--delete".into(),
            contents_of(source),
            strip_trailing_separator(dest),
        ]
    }
}

impl Mirror for Rsync {
    fn mirror(&self, source: &Path, dest: &Path) -> Result<()> {
        Cmd::new(&self.program)
            .args(Self::args(source, dest))
            .run()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    #[test]
    fn test_args_shape() {
        let args = Rsync::args(Path::new("/notes/posts"), Path::new("/blog/content/posts/"));
        assert_eq!(
            args,
            vec![
                OsString::from("-av"),
                OsString::from("--delete"),
                OsString::from("/notes/posts/"),
                OsString::from("/blog/content/posts"),
            ]
        );
    }

    /// Real rsync round; skipped where rsync is not installed.
    #[test]
    fn test_mirror_is_exact_and_idempotent() {
        if which::which("rsync").is_err() {
            return;
        }
        let src = tempfile::tempdir().unwrap();
        let site = tempfile::tempdir().unwrap();
        let dest = site.path().join("content/posts");
        fs::create_dir_all(&dest).unwrap();

        fs::write(src.path().join("hello.md"), "# hello").unwrap();
        fs::create_dir_all(src.path().join("nested")).unwrap();
        fs::write(src.path().join("nested/deep.md"), "deep").unwrap();
        fs::write(dest.join("stale.md"), "only in dest").unwrap();

        let rsync = Rsync::new("rsync");
        rsync.mirror(src.path(), &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("hello.md")).unwrap(), "# hello");
        assert_eq!(fs::read_to_string(dest.join("nested/deep.md")).unwrap(), "deep");
        assert!(!dest.join("stale.md").exists());
        // contents copied, not the directory itself
        assert!(!dest.join(src.path().file_name().unwrap()).exists());

        // second run over identical trees changes nothing
        rsync.mirror(src.path(), &dest).unwrap();
        let mut names: Vec<_> = fs::read_dir(&dest)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        names.sort();
        assert_eq!(names, vec![OsString::from("hello.md"), OsString::from("nested")]);
    }

    #[test]
    fn test_mirror_failure_propagates() {
        let rsync = Rsync::new("sitepush-no-such-rsync");
        let err = rsync
            .mirror(Path::new("/nonexistent"), Path::new("/nonexistent-dest"))
            .unwrap_err();
        assert!(err.downcast_ref::<crate::utils::exec::CommandError>().is_some());
    }
}
