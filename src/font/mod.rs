//! The two base-14 faces every document uses: Helvetica and
//! Helvetica-Bold, WinAnsi-encoded, never embedded.

pub mod metrics;
pub mod winansi;

use serde::{Deserialize, Serialize};

/// Which of the two document faces a text run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontId {
    Regular,
    Bold,
}

impl FontId {
    /// Resource name in each page's font dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }

    /// PostScript base font name.
    pub fn base_font(&self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
        }
    }
}
