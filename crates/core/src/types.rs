//! Domain types for recognized bulletin layouts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The publisher layout a bulletin was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletinFormat {
    /// Japan Meteorological Agency seismic intensity bulletins, with the
    /// epicenter in full-width parentheses.
    Jma,
    /// NHK earthquake pages, with a labeled 緯度 / 経度 line.
    Nhk,
    /// USGS "Latest Earthquakes" entries, in degree-symbol notation.
    Usgs,
}

impl BulletinFormat {
    /// Short publisher name for display and logging.
    pub fn publisher(&self) -> &'static str {
        match self {
            Self::Jma => "JMA",
            Self::Nhk => "NHK",
            Self::Usgs => "USGS",
        }
    }
}

impl fmt::Display for BulletinFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.publisher())
    }
}

/// A coordinate span pulled out of a bulletin, with the layout that
/// matched. Transient: recomputed on every extraction, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    /// The publisher layout that matched.
    pub format: BulletinFormat,

    /// The coordinate span, cleaned per the layout's rule.
    pub span: String,
}
