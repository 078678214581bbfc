use serde::{Deserialize, Serialize};

/// An organizational department tasks are assigned to. The color is a hex
/// token used purely for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct SectorDraft {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct SectorPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}
