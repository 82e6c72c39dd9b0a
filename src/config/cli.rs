use crate::domain::samples::SampleSet;
use crate::utils::error::Result;
use std::io::Read;
use std::path::PathBuf;

/// Where the coordinate text comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    Sample(SampleSet),
}

impl InputSource {
    pub fn from_args(input: Option<&str>, sample: Option<&str>) -> Result<Self> {
        if let Some(name) = sample {
            return Ok(InputSource::Sample(name.parse()?));
        }

        match input {
            None | Some("-") => Ok(InputSource::Stdin),
            Some(path) => Ok(InputSource::File(PathBuf::from(path))),
        }
    }

    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::File(path) => Ok(std::fs::read_to_string(path)?),
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            InputSource::Sample(sample) => Ok(sample.text().to_string()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
            InputSource::Sample(sample) => format!("sample '{}'", sample.name()),
        }
    }
}
