use std::path::Path;

use anyhow::Result;

use crate::model::register::Register;

/// What a repository found when asked for the saved register.
#[derive(Debug, Clone, PartialEq)]
pub enum Stored {
    /// Nothing has been saved yet.
    Missing,
    /// Something is there but it is not a register. Carries the parse error.
    Corrupted(String),
    Found(Register),
}

pub trait RegisterRepository {
    fn load(&self) -> Result<Stored>;
    /// Replaces whatever was stored with the full `register`.
    fn save(&self, register: &Register) -> Result<()>;
    fn location(&self) -> &Path;
}
