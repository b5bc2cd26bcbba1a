//! Closed wire enumerations.
//!
//! Every coded field the backend exchanges is one of the fixed vocabularies
//! below. Variants serialize as the backend's wire code; `label()` carries
//! the human-facing text the dashboard shows for each code.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Macro to define a closed, coded enumeration.
///
/// Generates the enum plus `code()`, `label()`, `ALL`, `from_code()`,
/// `FromStr`, `Display` and serde impls that exchange the wire code.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($code:literal, $label:literal)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The wire code exchanged with the backend.
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// The display label the dashboard shows for this code.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }

            /// Parse a wire code; unknown codes yield `None`.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_code(s)
                    .ok_or_else(|| format!("unknown {} code: {s}", stringify!($name)))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = String::deserialize(deserializer)?;
                Self::from_code(&code).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unknown {} code: {code}",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

coded_enum!(
    /// Subject areas taught at the school.
    Subject {
        Languages => ("LING", "Linguagens"),
        HumanSciences => ("CH", "Ciências Humanas"),
        NaturalSciences => ("CN", "Ciências da Natureza"),
        Mathematics => ("MAT", "Matemática"),
        TechnicalTrack => ("DS", "Itinerário técnico"),
    }
);

coded_enum!(
    /// Class/section codes, year 1–3 sections A–C.
    ClassGroup {
        FirstA => ("1A", "1 ANO A"),
        FirstB => ("1B", "1 ANO B"),
        FirstC => ("1C", "1 ANO C"),
        SecondA => ("2A", "2 ANO A"),
        SecondB => ("2B", "2 ANO B"),
        SecondC => ("2C", "2 ANO C"),
        ThirdA => ("3A", "3 ANO A"),
        ThirdB => ("3B", "3 ANO B"),
        ThirdC => ("3C", "3 ANO C"),
    }
);

coded_enum!(
    /// School day shifts.
    Shift {
        Morning => ("MANHA", "Manhã"),
        Afternoon => ("TARDE", "Tarde"),
        Evening => ("NOITE", "Noite"),
    }
);

coded_enum!(
    /// Kinds of physical rooms.
    RoomKind {
        Classroom => ("SALA", "Sala de Aula"),
        Laboratory => ("LAB", "Laboratório"),
        SportsCourt => ("QUADRA", "Quadra/Esporte"),
    }
);

coded_enum!(
    /// What a loan hands out.
    LoanKind {
        Book => ("livro", "Livro"),
        Computer => ("computador", "Computador"),
    }
);

coded_enum!(
    /// Pending-task workflow status.
    TaskStatus {
        Pending => ("Pendente", "Pendente"),
        InProgress => ("Em Andamento", "Em Andamento"),
        Completed => ("Concluida", "Concluída"),
    }
);

coded_enum!(
    /// Calendar event kinds; drive calendar coloring and notification text.
    EventKind {
        Exam => ("prova", "Prova"),
        AssignmentDue => ("trabalho", "Entrega de Trabalho"),
        Holiday => ("feriado", "Feriado"),
        General => ("evento", "Evento"),
    }
);

coded_enum!(
    /// Reasons for a written warning.
    WarningReason {
        UnjustifiedAbsences => ("FJI", "Faltas injustificadas"),
        Disrespect => ("DSP", "Desrespeito a colegas ou professores"),
        UnauthorizedPhoneUse => ("CEL", "Uso de celular sem autorização"),
        RuleBreaking => ("RGR", "Descumprimento das regras da escola"),
        VerbalAggression => ("AGV", "Agressões verbais"),
        MinorPropertyDamage => ("DPM", "Dano leve ao patrimônio escolar"),
        Disobedience => ("DOB", "Desobediência a orientações"),
        ClassroomIndiscipline => ("IND", "Atos de indisciplina em sala"),
        ImproperUniform => ("UNI", "Uso inadequado do uniforme"),
        ImproperBehavior => ("CPM", "Comportamento impróprio no ambiente escolar"),
        OffensiveLanguage => ("LGF", "Uso de linguagem ofensiva"),
        Cheating => ("FRA", "Cola ou fraude em avaliações"),
        Bullying => ("BLG", "Bullying ou assédio"),
        Other => ("OUTROS", "Outros motivos"),
    }
);

coded_enum!(
    /// Reasons for a suspension; a separate, more severe vocabulary than
    /// [`WarningReason`].
    SuspensionReason {
        PhysicalAggression => ("AGF", "Agressão física a colegas ou funcionários"),
        Threats => ("AME", "Ameaças verbais ou físicas"),
        RecurrentBullying => ("BLG-R", "Bullying recorrente ou grave"),
        SevereDisrespect => ("DSP-G", "Desrespeito grave à autoridade escolar"),
        Vandalism => ("VDM", "Vandalismo / dano intencional ao patrimônio"),
        ProhibitedSubstances => ("SUB", "Uso ou posse de substâncias proibidas"),
        RepeatedOffenses => ("REC", "Reincidência em comportamentos advertidos"),
        ImproperContent => ("IMP", "Divulgação de conteúdo impróprio"),
        Theft => ("RFT", "Roubo ou furto na escola"),
        Fighting => ("BRG", "Participação em brigas ou tumultos graves"),
        RiskBehavior => ("RSC", "Comportamento de risco à integridade física"),
        DangerousItems => ("PRG", "Porte de armas ou objetos perigosos"),
        Forgery => ("FAL", "Falsificação de documentos ou assinaturas"),
        ExtremeDisrespect => ("RES", "Desrespeito extremo em ambiente escolar"),
        SafetyViolation => ("SEG", "Violação grave de normas de segurança"),
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_serde() {
        let json = serde_json::to_string(&Subject::Mathematics).unwrap();
        assert_eq!(json, r#""MAT""#);
        let back: Subject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Subject::Mathematics);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(serde_json::from_str::<Subject>(r#""FIS""#).is_err());
        assert!(Subject::from_code("FIS").is_none());
    }

    #[test]
    fn vocabularies_are_the_expected_size() {
        assert_eq!(Subject::ALL.len(), 5);
        assert_eq!(ClassGroup::ALL.len(), 9);
        assert_eq!(WarningReason::ALL.len(), 14);
        assert_eq!(SuspensionReason::ALL.len(), 15);
        assert_eq!(EventKind::ALL.len(), 4);
    }

    #[test]
    fn task_status_uses_display_codes() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            r#""Em Andamento""#
        );
    }

    #[test]
    fn hyphenated_suspension_codes_parse() {
        assert_eq!(
            SuspensionReason::from_code("BLG-R"),
            Some(SuspensionReason::RecurrentBullying)
        );
        assert_eq!(
            SuspensionReason::from_code("DSP-G"),
            Some(SuspensionReason::SevereDisrespect)
        );
    }

    #[test]
    fn labels_match_codes() {
        assert_eq!(RoomKind::Laboratory.label(), "Laboratório");
        assert_eq!(LoanKind::Book.code(), "livro");
        assert_eq!(EventKind::AssignmentDue.label(), "Entrega de Trabalho");
    }

    #[test]
    fn display_and_fromstr_round_trip() {
        for kind in RoomKind::ALL {
            let parsed: RoomKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, *kind);
        }
    }
}
