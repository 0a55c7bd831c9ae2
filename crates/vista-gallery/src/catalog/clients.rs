//! Client logos
//!
//! Logos live at `Partner-logo/logo.<i>.jpg` and are grouped by index
//! range, with a few manual moves on top.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of client logos
pub const CLIENT_LOGO_COUNT: u32 = 84;

/// Client grouping used by the wall's filter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ClientCategory {
    /// Listed companies
    #[default]
    PublicCompanies,
    /// Multinationals
    MultinationalCompanies,
    /// Private limited companies
    PrivateLimitedCompanies,
    /// Government bodies
    GovernmentOrganizations,
    /// Property consultants
    AssociateConsultants,
}

impl ClientCategory {
    /// Every category, in tab order
    pub const ALL: [Self; 5] = [
        Self::PublicCompanies,
        Self::MultinationalCompanies,
        Self::PrivateLimitedCompanies,
        Self::GovernmentOrganizations,
        Self::AssociateConsultants,
    ];

    /// Tab label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PublicCompanies => "Public Companies",
            Self::MultinationalCompanies => "Multinational Companies",
            Self::PrivateLimitedCompanies => "Private Limited Companies",
            Self::GovernmentOrganizations => "Government Organizations",
            Self::AssociateConsultants => "Associate Property International Consultants",
        }
    }

    /// Category of logo `index`
    #[must_use]
    pub fn for_index(index: u32) -> Self {
        if let Some(category) = override_for(index) {
            return category;
        }
        match index {
            1..=25 => Self::PublicCompanies,
            26..=50 => Self::MultinationalCompanies,
            51..=74 => Self::PrivateLimitedCompanies,
            75..=81 => Self::GovernmentOrganizations,
            _ => Self::AssociateConsultants,
        }
    }
}

fn override_for(index: u32) -> Option<ClientCategory> {
    match index {
        81 => Some(ClientCategory::AssociateConsultants),
        _ => None,
    }
}

impl fmt::Display for ClientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClientCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown client category: {s}"))
    }
}

/// One client logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClientLogo {
    /// Logo number
    pub index: u32,
    /// Filter group
    pub category: ClientCategory,
}

impl ClientLogo {
    /// Image path
    #[must_use]
    pub fn src(&self) -> String {
        format!("Partner-logo/logo.{}.jpg", self.index)
    }

    /// Image alt text
    #[must_use]
    pub fn alt(&self) -> String {
        format!("{} logo {}", self.category.label(), self.index)
    }
}

/// Every client logo in index order
#[must_use]
pub fn client_logos() -> Vec<ClientLogo> {
    (1..=CLIENT_LOGO_COUNT)
        .map(|index| ClientLogo {
            index,
            category: ClientCategory::for_index(index),
        })
        .collect()
}
