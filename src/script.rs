//! Composition scripts: a YAML (or JSON) list of api-name based steps that
//! resolve against a loaded catalog into engine commands. Used by the CLI and
//! by the HTTP step endpoint.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::composition::{BoardPosition, Command, InvalidStarLevel, StarLevel};
use crate::data::catalog::Catalog;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("unable to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse script: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unknown champion '{0}'")]
    UnknownChampion(String),
    #[error("unknown item '{0}'")]
    UnknownItem(String),
    #[error("unknown augment '{0}'")]
    UnknownAugment(String),
    #[error(transparent)]
    StarLevel(#[from] InvalidStarLevel),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub mutator: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Place { champion: String, row: u8, col: u8 },
    Remove { row: u8, col: u8 },
    Move { from: BoardPosition, to: BoardPosition },
    Attach { item: String, row: u8, col: u8 },
    Detach { item: String, row: u8, col: u8 },
    Star { row: u8, col: u8, level: u8 },
    StarUp { row: u8, col: u8 },
    SelectChampion {
        #[serde(default)]
        champion: Option<String>,
    },
    SelectItem {
        #[serde(default)]
        item: Option<String>,
    },
    Augment { augment: String, slot: usize },
    ClearAugments,
    Clear,
}

impl Step {
    /// Resolve api names against `catalog`.
    pub fn resolve(&self, catalog: &Catalog) -> Result<Command, ScriptError> {
        let champion = |api_name: &str| {
            catalog
                .champion(api_name)
                .cloned()
                .ok_or_else(|| ScriptError::UnknownChampion(api_name.to_string()))
        };
        let item = |api_name: &str| {
            catalog
                .item(api_name)
                .cloned()
                .ok_or_else(|| ScriptError::UnknownItem(api_name.to_string()))
        };

        let command = match self {
            Self::Place { champion: name, row, col } => Command::PlaceChampion {
                champion: champion(name)?,
                position: BoardPosition::new(*row, *col),
            },
            Self::Remove { row, col } => Command::RemoveChampion {
                position: BoardPosition::new(*row, *col),
            },
            Self::Move { from, to } => Command::MoveChampion {
                from: *from,
                to: *to,
            },
            Self::Attach { item: name, row, col } => Command::AttachItem {
                item: item(name)?,
                position: BoardPosition::new(*row, *col),
            },
            Self::Detach { item: name, row, col } => Command::DetachItem {
                position: BoardPosition::new(*row, *col),
                item_api_name: name.clone(),
            },
            Self::Star { row, col, level } => Command::SetStarLevel {
                position: BoardPosition::new(*row, *col),
                level: StarLevel::try_from(*level)?,
            },
            Self::StarUp { row, col } => Command::StarUp {
                position: BoardPosition::new(*row, *col),
            },
            Self::SelectChampion { champion: name } => {
                Command::SelectChampion(name.as_deref().map(champion).transpose()?)
            }
            Self::SelectItem { item: name } => {
                Command::SelectItem(name.as_deref().map(item).transpose()?)
            }
            Self::Augment { augment, slot } => Command::SetAugmentSlot {
                augment: catalog
                    .augment(augment)
                    .cloned()
                    .ok_or_else(|| ScriptError::UnknownAugment(augment.clone()))?,
                index: *slot,
            },
            Self::ClearAugments => Command::ClearAugments,
            Self::Clear => Command::ClearBoard,
        };
        Ok(command)
    }
}

impl Script {
    /// Resolve every step. Stops at the first step that does not resolve.
    pub fn commands(&self, catalog: &Catalog) -> Result<Vec<Command>, ScriptError> {
        self.steps.iter().map(|step| step.resolve(catalog)).collect()
    }
}

pub fn parse_script(raw: &str) -> Result<Script, ScriptError> {
    Ok(serde_yaml::from_str(raw)?)
}

pub fn parse_step(raw: &str) -> Result<Step, ScriptError> {
    Ok(serde_yaml::from_str(raw)?)
}

pub fn load_script(path: impl AsRef<Path>) -> Result<Script, ScriptError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_script(&raw)
}
