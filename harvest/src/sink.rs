//! Local persistence of run artifacts.
//!
//! Every file gets a random suffix, so nothing written by one run (or one
//! request) ever overwrites another.
use failure::Error;
use serde::Serialize;
use serde_json;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

use swapcard::errors::HarvestError;

/// What to do with the raw body of every HTTP response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawCapture {
    Keep,
    Skip
}

impl FromStr for RawCapture {
    type Err = Error;

    fn from_str(value: &str) -> Result<RawCapture, Error> {
        match value.trim().to_lowercase().as_str() {
            "keep" => Ok(RawCapture::Keep),
            "skip" => Ok(RawCapture::Skip),
            _ => Err(HarvestError::InvalidSetting { name: "SWAPCARD_RAW_CAPTURE".to_string(), value: value.to_string() }.into())
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputSink {
    dir: PathBuf,
    raw_capture: RawCapture
}

fn artifact_name(prefix: &str) -> String {
    format!("{prefix}_{suffix}.json", prefix = prefix, suffix = Uuid::new_v4().simple())
}

impl OutputSink {
    pub fn new<P: Into<PathBuf>>(dir: P, raw_capture: RawCapture) -> OutputSink {
        OutputSink { dir: dir.into(), raw_capture: raw_capture }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_directory(&self) -> Result<(), Error> {
        if !self.dir.is_dir() {
            fs::create_dir_all(&self.dir)?;
            info!("Created folder: {}", self.dir.display());
        }
        Ok(())
    }

    pub fn write_json_artifact<T: Serialize>(&self, prefix: &str, payload: &T) -> Result<PathBuf, Error> {
        let path = self.dir.join(artifact_name(prefix));
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, payload)?;
        writer.flush()?;
        Ok(path)
    }

    /// Stores a raw response body unless raw capture is switched off.
    pub fn capture_raw<T: Serialize>(&self, prefix: &str, payload: &T) -> Result<Option<PathBuf>, Error> {
        match self.raw_capture {
            RawCapture::Keep => self.write_json_artifact(prefix, payload).map(Some),
            RawCapture::Skip => Ok(None)
        }
    }
}
