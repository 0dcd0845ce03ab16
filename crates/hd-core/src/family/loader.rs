//! CSV pedigree loading.
//!
//! File format: header row `name,mother,father,trait`. `mother` and `father`
//! must both be blank, or both name another row in the same file. `trait` is
//! `1` (observed with the trait), `0` (observed without), or blank (unknown).

use super::{Family, FamilyError, Person};
use hd_common::PersonId;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a pedigree CSV.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("row {row}: missing name")]
    MissingName { row: usize },

    #[error("row {row}: invalid trait value '{value}' (expected 1, 0, or blank)")]
    InvalidTrait { row: usize, value: String },

    #[error(transparent)]
    Family(#[from] FamilyError),
}

impl From<LoaderError> for hd_common::Error {
    fn from(err: LoaderError) -> Self {
        match err {
            LoaderError::Io { source, .. } => hd_common::Error::Io(source),
            LoaderError::Family(family) => family.into(),
            other => hd_common::Error::Pedigree(other.to_string()),
        }
    }
}

/// One raw CSV row before validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    name: String,

    #[serde(default)]
    mother: String,

    #[serde(default)]
    father: String,

    #[serde(default, rename = "trait")]
    trait_flag: String,
}

/// Read a pedigree from any CSV source.
pub fn read_family<R: Read>(reader: R) -> Result<Family, LoaderError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut people = Vec::new();
    for (i, result) in csv_reader.deserialize::<RawRecord>().enumerate() {
        // Row numbers are 1-based and count the header.
        let row = i + 2;
        let record = result?;

        let id = PersonId::parse(&record.name).ok_or(LoaderError::MissingName { row })?;
        let phenotype = match record.trait_flag.as_str() {
            "" => None,
            "1" => Some(true),
            "0" => Some(false),
            other => {
                return Err(LoaderError::InvalidTrait {
                    row,
                    value: other.to_string(),
                })
            }
        };

        people.push(Person {
            id,
            mother: PersonId::parse(&record.mother),
            father: PersonId::parse(&record.father),
            phenotype,
        });
    }

    Ok(Family::new(people)?)
}

/// Load a pedigree CSV from disk.
pub fn load_family(path: &Path) -> Result<Family, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_family(BufReader::new(file))
}
