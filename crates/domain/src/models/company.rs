//! Company directory domain model.

use serde::{Deserialize, Serialize};

/// An authoritative company entry.
///
/// `domain` is the e-mail suffix (after `@`) owned by the company and is
/// unique across all companies. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub domain: String,
}

impl Company {
    pub fn new(id: i64, name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            domain: domain.into(),
        }
    }
}

/// A company to be inserted by the seeding routine.
#[derive(Debug, Clone, Copy)]
pub struct NewCompany {
    pub name: &'static str,
    pub domain: &'static str,
}

/// Companies present in every fresh deployment.
pub const DEFAULT_COMPANIES: [NewCompany; 4] = [
    NewCompany {
        name: "Company A",
        domain: "companya.com",
    },
    NewCompany {
        name: "Company B",
        domain: "companyb.com",
    },
    NewCompany {
        name: "Company C",
        domain: "companyc.com",
    },
    NewCompany {
        name: "Company D",
        domain: "companyd.com",
    },
];
