use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::snapshot::LedgerSnapshot;

const SNAPSHOT_FILE_NAME: &str = "steps.json";

/// Persistence seam for the tracker state. The engine itself never touches
/// the filesystem; the front-end loads a snapshot at startup and saves one
/// after every successful mutation.
pub trait SnapshotRepository {
    fn load(&self) -> Result<Option<LedgerSnapshot>>;
    fn save(&self, snapshot: &LedgerSnapshot) -> Result<()>;
}

pub struct FileSnapshotRepository {
    file_path: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir =
                    dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".steptracker")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(SNAPSHOT_FILE_NAME);

        Ok(FileSnapshotRepository { file_path: path })
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn load(&self) -> Result<Option<LedgerSnapshot>> {
        if !self.file_path.exists() {
            // First run: nothing saved yet, the caller starts empty.
            return Ok(None);
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let snapshot = serde_json::from_reader(reader)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &LedgerSnapshot) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.flush()?;
        Ok(())
    }
}
