//! Role tier model - named authority tiers for role-bearing org groups.

use serde::{Deserialize, Serialize};

/// Authority tier of a role group, resolved from the upstream role code when
/// the tree is ingested.
///
/// Serialises back to the numeric code so the wire format stays unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum RoleTier {
    ManagingDirector,
    NodalOfficer,
    HeadOfDepartment,
    Other(i64),
}

impl RoleTier {
    pub const MANAGING_DIRECTOR_CODE: i64 = 2;
    pub const NODAL_OFFICER_CODE: i64 = 4;
    pub const HEAD_OF_DEPARTMENT_CODE: i64 = 6;

    /// Upstream numeric role code.
    pub fn code(self) -> i64 {
        match self {
            RoleTier::ManagingDirector => Self::MANAGING_DIRECTOR_CODE,
            RoleTier::NodalOfficer => Self::NODAL_OFFICER_CODE,
            RoleTier::HeadOfDepartment => Self::HEAD_OF_DEPARTMENT_CODE,
            RoleTier::Other(code) => code,
        }
    }

    /// MD, Nodal Officer and HOD each hold a single-occupant position.
    pub fn is_single_occupant(self) -> bool {
        !matches!(self, RoleTier::Other(_))
    }
}

impl From<i64> for RoleTier {
    fn from(code: i64) -> Self {
        match code {
            Self::MANAGING_DIRECTOR_CODE => RoleTier::ManagingDirector,
            Self::NODAL_OFFICER_CODE => RoleTier::NodalOfficer,
            Self::HEAD_OF_DEPARTMENT_CODE => RoleTier::HeadOfDepartment,
            other => RoleTier::Other(other),
        }
    }
}

impl From<RoleTier> for i64 {
    fn from(tier: RoleTier) -> Self {
        tier.code()
    }
}
