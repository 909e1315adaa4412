use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    #[default]
    Human,
    Bot,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct SeatConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub controller: Controller,
}

impl Validate for SeatConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name
            && name.trim().chars().count() > MAX_NAME_LENGTH
        {
            return Err(format!(
                "player name must be at most {} characters, got \"{}\"",
                MAX_NAME_LENGTH, name
            ));
        }
        Ok(())
    }
}
