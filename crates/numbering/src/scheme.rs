use serde::{Deserialize, Serialize};

use parabellum_core::{DomainError, DomainResult};

/// Entity classes that carry a human-readable sequential reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Customer,
    Quote,
    Invoice,
    Payment,
    Employee,
    Intervention,
    Mission,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Customer,
        EntityKind::Quote,
        EntityKind::Invoice,
        EntityKind::Payment,
        EntityKind::Employee,
        EntityKind::Intervention,
        EntityKind::Mission,
    ];

    /// Upper-case name used in configuration keys (`PARABELLUM_PREFIX_<NAME>`).
    pub fn as_upper(self) -> &'static str {
        match self {
            EntityKind::Customer => "CUSTOMER",
            EntityKind::Quote => "QUOTE",
            EntityKind::Invoice => "INVOICE",
            EntityKind::Payment => "PAYMENT",
            EntityKind::Employee => "EMPLOYEE",
            EntityKind::Intervention => "INTERVENTION",
            EntityKind::Mission => "MISSION",
        }
    }

    /// Built-in numbering scheme for this entity class.
    pub fn default_scheme(self) -> NumberingScheme {
        let (prefix, width, scope_by_year) = match self {
            EntityKind::Customer => ("CLI", 3, false),
            EntityKind::Quote => ("DEV", 3, true),
            EntityKind::Invoice => ("INV", 3, true),
            EntityKind::Payment => ("PAY", 3, true),
            EntityKind::Employee => ("EMP", 4, false),
            EntityKind::Intervention => ("INT", 4, true),
            EntityKind::Mission => ("MIS", 4, true),
        };
        NumberingScheme {
            prefix: prefix.to_string(),
            width,
            scope_by_year,
        }
    }
}

impl core::str::FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|k| k.as_upper().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown entity kind '{s}'")))
    }
}

/// How references of one entity class are laid out:
/// `<PREFIX>-<SEQ>` or `<PREFIX>-<YEAR>-<SEQ>`, with `<SEQ>` zero-padded to `width`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberingScheme {
    prefix: String,
    width: usize,
    scope_by_year: bool,
}

impl NumberingScheme {
    pub fn new(prefix: impl Into<String>, width: usize, scope_by_year: bool) -> DomainResult<Self> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        if width == 0 {
            return Err(DomainError::validation("sequence width must be positive"));
        }
        Ok(Self {
            prefix,
            width,
            scope_by_year,
        })
    }

    /// Same layout, different prefix.
    pub fn with_prefix(&self, prefix: impl Into<String>) -> DomainResult<Self> {
        Self::new(prefix, self.width, self.scope_by_year)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn scope_by_year(&self) -> bool {
        self.scope_by_year
    }

    /// Human-readable layout, e.g. `INV-YYYY-NNN`.
    pub fn pattern(&self) -> String {
        let seq = "N".repeat(self.width);
        if self.scope_by_year {
            format!("{}-YYYY-{seq}", self.prefix)
        } else {
            format!("{}-{seq}", self.prefix)
        }
    }
}

fn validate_prefix(prefix: &str) -> DomainResult<()> {
    if prefix.is_empty() {
        return Err(DomainError::validation("reference prefix must not be empty"));
    }
    if !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::validation(format!(
            "reference prefix '{prefix}' must be ASCII alphanumeric"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_widths_follow_entity_class() {
        assert_eq!(EntityKind::Customer.default_scheme().width(), 3);
        assert_eq!(EntityKind::Invoice.default_scheme().width(), 3);
        assert_eq!(EntityKind::Employee.default_scheme().width(), 4);
        assert_eq!(EntityKind::Intervention.default_scheme().width(), 4);
    }

    #[test]
    fn pattern_describes_layout() {
        assert_eq!(EntityKind::Customer.default_scheme().pattern(), "CLI-NNN");
        assert_eq!(EntityKind::Intervention.default_scheme().pattern(), "INT-YYYY-NNNN");
    }

    #[test]
    fn prefix_with_separator_is_rejected() {
        let err = NumberingScheme::new("IN-V", 3, true).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(NumberingScheme::new("", 3, false).is_err());
        assert!(NumberingScheme::new("FAC", 0, false).is_err());
    }

    #[test]
    fn entity_kind_parses_case_insensitively() {
        assert_eq!("invoice".parse::<EntityKind>().unwrap(), EntityKind::Invoice);
        assert_eq!("MISSION".parse::<EntityKind>().unwrap(), EntityKind::Mission);
        assert!("ticket".parse::<EntityKind>().is_err());
    }
}
