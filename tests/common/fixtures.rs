//! Archive fixtures and fake download tools

use async_trait::async_trait;
use kaggle_dl::{Config, DownloadOutput, DownloadTool, WorkDir};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Files shipped in the fake titanic archive
pub const TITANIC_FILES: &[(&str, &[u8])] = &[
    ("train.csv", b"PassengerId,Survived,Pclass\n1,0,3\n2,1,1\n"),
    ("test.csv", b"PassengerId,Pclass\n892,3\n"),
    ("gender_submission.csv", b"PassengerId,Survived\n892,0\n"),
];

/// Write a stored (uncompressed) ZIP archive with the given entries
pub fn write_zip(archive_path: &Path, files: &[(&str, &[u8])]) {
    let file = std::fs::File::create(archive_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, content) in files {
        writer.start_file(*name, options).unwrap();
        std::io::Write::write_all(&mut writer, content).unwrap();
    }
    writer.finish().unwrap();
}

/// Config rooted in a scratch directory
pub fn config_in(root: &Path) -> Config {
    let mut config = Config::default();
    config.directories.data_dir = root.join("data");
    config
}

/// What the fake tool does when invoked
pub enum FakeBehavior {
    /// Drop an archive named after the last command word into the work dir
    WriteArchive(Vec<(&'static str, &'static [u8])>),
    /// Print the given stdout and exit with the given code
    Respond {
        /// Exit code to report
        exit_code: i32,
        /// Captured stdout
        stdout: String,
        /// Captured stderr
        stderr: String,
    },
}

/// In-process stand-in for the kaggle CLI
pub struct FakeKaggle {
    behavior: FakeBehavior,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl FakeKaggle {
    /// Tool that "downloads" an archive with the given files
    pub fn writing(files: &[(&'static str, &'static [u8])]) -> Self {
        Self::new(FakeBehavior::WriteArchive(files.to_vec()))
    }

    /// Tool that answers with canned output
    pub fn responding(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self::new(FakeBehavior::Respond {
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        })
    }

    fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Recorded (command, work dir) pairs
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DownloadTool for FakeKaggle {
    async fn download(&self, command: &str, work_dir: &WorkDir) -> kaggle_dl::Result<DownloadOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), work_dir.path().to_path_buf()));

        match &self.behavior {
            FakeBehavior::WriteArchive(files) => {
                let name = command.split_whitespace().last().unwrap_or("download");
                let archive = work_dir.path().join(format!("{name}.zip"));
                write_zip(&archive, files);
                Ok(DownloadOutput::success(format!(
                    "Downloading {name}.zip to {}\n100%|##########|\n",
                    work_dir.path().display()
                )))
            }
            FakeBehavior::Respond {
                exit_code: 0,
                stdout,
                ..
            } => Ok(DownloadOutput::success(stdout.clone())),
            FakeBehavior::Respond {
                exit_code,
                stdout,
                stderr,
            } => Ok(DownloadOutput::failure(
                *exit_code,
                stdout.clone(),
                stderr.clone(),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "fake-kaggle"
    }
}
