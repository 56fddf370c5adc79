use serde::{Deserialize, Serialize};

/// Restriction enzymes supported for cloning-primer assembly.
///
/// The set is closed: every variant carries a fixed linker validated for use
/// behind the common 5' clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Enzyme {
    NdeI,
    XhoI,
    EcoRI,
    BamHI,
    HindIII,
    SalI,
    NotI,
    KpnI,
    SmaI,
    PstI,
    ApaI,
    SacI,
    XbaI,
    SphI,
}

impl Enzyme {
    /// All supported enzymes, in presentation order.
    pub const ALL: [Enzyme; 14] = [
        Enzyme::NdeI,
        Enzyme::XhoI,
        Enzyme::EcoRI,
        Enzyme::BamHI,
        Enzyme::HindIII,
        Enzyme::SalI,
        Enzyme::NotI,
        Enzyme::KpnI,
        Enzyme::SmaI,
        Enzyme::PstI,
        Enzyme::ApaI,
        Enzyme::SacI,
        Enzyme::XbaI,
        Enzyme::SphI,
    ];

    /// Resolve an enzyme from its conventional name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Enzyme> {
        match name {
            "NdeI" => Some(Enzyme::NdeI),
            "XhoI" => Some(Enzyme::XhoI),
            "EcoRI" => Some(Enzyme::EcoRI),
            "BamHI" => Some(Enzyme::BamHI),
            "HindIII" => Some(Enzyme::HindIII),
            "SalI" => Some(Enzyme::SalI),
            "NotI" => Some(Enzyme::NotI),
            "KpnI" => Some(Enzyme::KpnI),
            "SmaI" => Some(Enzyme::SmaI),
            "PstI" => Some(Enzyme::PstI),
            "ApaI" => Some(Enzyme::ApaI),
            "SacI" => Some(Enzyme::SacI),
            "XbaI" => Some(Enzyme::XbaI),
            "SphI" => Some(Enzyme::SphI),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Enzyme::NdeI => "NdeI",
            Enzyme::XhoI => "XhoI",
            Enzyme::EcoRI => "EcoRI",
            Enzyme::BamHI => "BamHI",
            Enzyme::HindIII => "HindIII",
            Enzyme::SalI => "SalI",
            Enzyme::NotI => "NotI",
            Enzyme::KpnI => "KpnI",
            Enzyme::SmaI => "SmaI",
            Enzyme::PstI => "PstI",
            Enzyme::ApaI => "ApaI",
            Enzyme::SacI => "SacI",
            Enzyme::XbaI => "XbaI",
            Enzyme::SphI => "SphI",
        }
    }

    /// Recognition-site linker inserted between the common prefix and the
    /// primer body.
    pub fn linker(&self) -> &'static str {
        match self {
            Enzyme::NdeI => "CATAT",
            Enzyme::XhoI => "CTCGAG",
            Enzyme::EcoRI => "GAATTC",
            Enzyme::BamHI => "GGATCC",
            Enzyme::HindIII => "AAGCTT",
            Enzyme::SalI => "GTCGAC",
            Enzyme::NotI => "GCGGCCGC",
            Enzyme::KpnI => "GGTACC",
            Enzyme::SmaI => "CCCGGG",
            Enzyme::PstI => "CTGCAG",
            Enzyme::ApaI => "GGGCCC",
            Enzyme::SacI => "GAGCTC",
            Enzyme::XbaI => "TCTAGA",
            Enzyme::SphI => "GCATGC",
        }
    }
}

impl std::fmt::Display for Enzyme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_complete() {
        assert_eq!(Enzyme::ALL.len(), 14);
        for enzyme in Enzyme::ALL {
            let linker = enzyme.linker();
            assert!(!linker.is_empty());
            assert!(linker.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T')));
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for enzyme in Enzyme::ALL {
            assert_eq!(Enzyme::from_name(enzyme.name()), Some(enzyme));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Enzyme::from_name("EcoRI"), Some(Enzyme::EcoRI));
        assert_eq!(Enzyme::from_name("ecori"), None);
        assert_eq!(Enzyme::from_name("BsaI"), None);
        assert_eq!(Enzyme::from_name(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Enzyme::HindIII.to_string(), "HindIII");
        assert_eq!(Enzyme::NotI.to_string(), "NotI");
    }

    #[test]
    fn test_known_linkers() {
        assert_eq!(Enzyme::NdeI.linker(), "CATAT");
        assert_eq!(Enzyme::EcoRI.linker(), "GAATTC");
        assert_eq!(Enzyme::NotI.linker(), "GCGGCCGC");
    }
}
