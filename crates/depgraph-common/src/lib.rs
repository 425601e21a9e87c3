use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;

/// One dependency relation between two packages, as stored in the
/// per-ecosystem database views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub from_package: String,
    pub to_package: String,
    pub from_depends: i64,
    pub to_depends: i64,
}

impl Edge {
    pub fn new(from_package: String, to_package: String, from_depends: i64, to_depends: i64) -> Self {
        Self {
            from_package,
            to_package,
            from_depends,
            to_depends,
        }
    }
}

/// The package ecosystems exposed by the API, keyed by numeric wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcosystemView {
    Arch,
    Debian,
    Gentoo,
    Homebrew,
    Nix,
}

#[derive(Debug, Error)]
#[error("unknown view code {0}, expected 1-5")]
pub struct InvalidViewCode(pub i64);

impl EcosystemView {
    /// Name of the database view backing this ecosystem.
    pub fn view_name(&self) -> &'static str {
        match self {
            EcosystemView::Arch => "draw_arch",
            EcosystemView::Debian => "draw_debian",
            EcosystemView::Gentoo => "draw_gentoo",
            EcosystemView::Homebrew => "draw_homebrew",
            EcosystemView::Nix => "draw_nix",
        }
    }
}

impl TryFrom<i64> for EcosystemView {
    type Error = InvalidViewCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(EcosystemView::Arch),
            2 => Ok(EcosystemView::Debian),
            3 => Ok(EcosystemView::Gentoo),
            4 => Ok(EcosystemView::Homebrew),
            5 => Ok(EcosystemView::Nix),
            other => Err(InvalidViewCode(other)),
        }
    }
}
