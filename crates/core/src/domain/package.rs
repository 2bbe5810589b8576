use serde::{Deserialize, Serialize};

use crate::domain::product::ProductId;

/// Student bundle tier. Each tier maps to a fixed audience blurb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageTier {
    SecondaryStarter,
    UniversityEssential,
    ProgrammingDesign,
}

impl PackageTier {
    pub fn audience(self) -> &'static str {
        match self {
            Self::SecondaryStarter => "secondary school",
            Self::UniversityEssential => "university",
            Self::ProgrammingDesign => "programming & design",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPackage {
    pub id: PackageId,
    pub tier: PackageTier,
    pub title: String,
    pub subtitle: String,
    pub laptop_ids: Vec<ProductId>,
    pub price: u64,
    pub features: Vec<String>,
    pub badge: Option<String>,
}
