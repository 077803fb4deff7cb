use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::register::Register;
use crate::repository::traits::{RegisterRepository, Stored};

pub const DEFAULT_FILE_NAME: &str = "attendance_data.json";

#[derive(Clone, Debug)]
pub struct FileRegisterRepository {
    file_path: PathBuf,
}

impl FileRegisterRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        FileRegisterRepository {
            file_path: file_path.into(),
        }
    }

    fn write_register(&self, register: &Register) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("Could not create {}", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, register)?;
        writer.flush()?;
        Ok(())
    }
}

impl RegisterRepository for FileRegisterRepository {
    fn load(&self) -> Result<Stored> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Stored::Missing),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Could not open {}", self.file_path.display()))
            }
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, Register>(reader) {
            Ok(register) => Ok(Stored::Found(register)),
            // I/O failures are errors; every other parse failure is corrupted content.
            Err(e) if e.is_io() => Err(e)
                .with_context(|| format!("Could not read {}", self.file_path.display())),
            Err(e) => Ok(Stored::Corrupted(e.to_string())),
        }
    }

    fn save(&self, register: &Register) -> Result<()> {
        self.write_register(register)
    }

    fn location(&self) -> &Path {
        &self.file_path
    }
}
