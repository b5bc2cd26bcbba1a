//! The closed set of user roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user's role, as carried in the access token's `cargo` claim.
///
/// The wire strings are the backend's group names; note that
/// `AuxiliarAdministrativo` is spelled with a space on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Secretaria,
    Professor,
    #[serde(rename = "Auxiliar administrativo")]
    AuxiliarAdministrativo,
    Aluno,
    Responsavel,
}

impl Role {
    /// Every role, in rank order as the dashboard lists them.
    pub const ALL: &'static [Self] = &[
        Self::Secretaria,
        Self::Professor,
        Self::AuxiliarAdministrativo,
        Self::Aluno,
        Self::Responsavel,
    ];

    /// The backend group name for this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secretaria => "Secretaria",
            Self::Professor => "Professor",
            Self::AuxiliarAdministrativo => "Auxiliar administrativo",
            Self::Aluno => "Aluno",
            Self::Responsavel => "Responsavel",
        }
    }

    /// Parse a group name; unknown names yield `None` so callers fail
    /// closed.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn unknown_names_yield_none() {
        assert_eq!(Role::parse("Diretor"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("secretaria"), None);
    }

    #[test]
    fn auxiliar_keeps_the_spaced_wire_name() {
        assert_eq!(
            Role::AuxiliarAdministrativo.as_str(),
            "Auxiliar administrativo"
        );
        let json = serde_json::to_string(&Role::AuxiliarAdministrativo).unwrap();
        assert_eq!(json, r#""Auxiliar administrativo""#);
    }
}
