use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::CLASS_COUNT;
use crate::errors::{FetalError, FetalResult};

/// Clinical interpretation of a classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthCategory {
    Normal,
    Suspect,
    Pathological,
}

impl HealthCategory {
    /// Fixed display order.
    pub const ALL: [HealthCategory; CLASS_COUNT] = [
        HealthCategory::Normal,
        HealthCategory::Suspect,
        HealthCategory::Pathological,
    ];

    /// Map a classifier label. Labels outside {1, 2, 3} are an error,
    /// never a default category.
    pub fn from_label(label: i64) -> FetalResult<Self> {
        match label {
            1 => Ok(HealthCategory::Normal),
            2 => Ok(HealthCategory::Suspect),
            3 => Ok(HealthCategory::Pathological),
            other => Err(FetalError::UnmappedLabel { label: other }),
        }
    }

    pub fn label(self) -> i64 {
        match self {
            HealthCategory::Normal => 1,
            HealthCategory::Suspect => 2,
            HealthCategory::Pathological => 3,
        }
    }

    /// Position in [`HealthCategory::ALL`].
    pub fn index(self) -> usize {
        (self.label() - 1) as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            HealthCategory::Normal => "Normal",
            HealthCategory::Suspect => "Suspect",
            HealthCategory::Pathological => "Pathological",
        }
    }
}

impl fmt::Display for HealthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
