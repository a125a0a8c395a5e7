//! Allow-listed city tables.
//!
//! City names arrive from request paths and end up as SQL identifiers, which
//! cannot be bound as parameters. Every such name is resolved through a
//! [`CityCatalog`] built once at startup; request text is never interpolated.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Name of the built-in mouza table.
pub const MOUZAS_TABLE: &str = "mouzas";

/// Lower-case Postgres identifier, at most 63 bytes.
const IDENTIFIER_PATTERN: &str = r"^[a-z_][a-z0-9_]{0,62}$";

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENTIFIER_PATTERN).expect("valid regex"));

/// Validate that `name` is safe to use as an unquoted SQL identifier.
pub fn validate_identifier(name: &str) -> Result<(), CoreError> {
    if IDENTIFIER_RE.is_match(name) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{name}' is not a valid identifier (expected {IDENTIFIER_PATTERN})"
        )))
    }
}

/// How a catalogued table is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityKind {
    /// The `mouzas` table. Labels live in `name`; per-area values live in
    /// `land_classifications`.
    Mouzas,
    /// A per-city property table with `location`, `size_sq_yard` and
    /// `value_per_sq_meter` columns.
    PropertyTable,
}

impl CityKind {
    /// Column holding the human-readable location label.
    pub fn label_column(self) -> &'static str {
        match self {
            Self::Mouzas => "name",
            Self::PropertyTable => "location",
        }
    }
}

/// A table that passed identifier validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityTable {
    name: String,
    kind: CityKind,
}

impl CityTable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CityKind {
        self.kind
    }

    /// The table name double-quoted for interpolation into SQL.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.name)
    }
}

/// The fixed set of tables the city endpoints may touch.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    tables: BTreeMap<String, CityTable>,
}

impl CityCatalog {
    /// Build a catalog from configured property-table names.
    ///
    /// The `mouzas` entry is always present. Names are trimmed, blanks are
    /// skipped and duplicates collapse. Any invalid name fails the whole
    /// catalog.
    pub fn new<I, S>(property_tables: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tables = BTreeMap::new();
        tables.insert(
            MOUZAS_TABLE.to_string(),
            CityTable {
                name: MOUZAS_TABLE.to_string(),
                kind: CityKind::Mouzas,
            },
        );

        for raw in property_tables {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            validate_identifier(name)?;
            if name == MOUZAS_TABLE {
                continue;
            }
            tables.insert(
                name.to_string(),
                CityTable {
                    name: name.to_string(),
                    kind: CityKind::PropertyTable,
                },
            );
        }

        Ok(Self { tables })
    }

    /// Resolve a request-supplied city name to its catalogued table.
    pub fn lookup(&self, name: &str) -> Result<&CityTable, CoreError> {
        self.tables.get(name).ok_or_else(|| CoreError::CityNotFound {
            name: name.to_string(),
        })
    }

    /// Catalogued table names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>()).expect("mouzas is a valid identifier")
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- validate_identifier --

    #[test]
    fn plain_identifiers_accepted() {
        assert!(validate_identifier("lahore").is_ok());
        assert!(validate_identifier("_tmp").is_ok());
        assert!(validate_identifier("dha_phase_6").is_ok());
    }

    #[test]
    fn injection_attempts_rejected() {
        for bad in [
            "lahore; DROP TABLE mouzas",
            "lahore--",
            "\"lahore\"",
            "public.lahore",
            "Lahore",
            "1lahore",
            "",
        ] {
            assert_matches!(validate_identifier(bad), Err(CoreError::Validation(_)), "{bad}");
        }
    }

    #[test]
    fn overlong_identifier_rejected() {
        let name = "a".repeat(64);
        assert!(validate_identifier(&name).is_err());
        assert!(validate_identifier(&name[..63]).is_ok());
    }

    // -- CityCatalog --

    #[test]
    fn mouzas_always_present() {
        let catalog = CityCatalog::default();
        let table = catalog.lookup("mouzas").unwrap();
        assert_eq!(table.kind(), CityKind::Mouzas);
        assert_eq!(table.kind().label_column(), "name");
    }

    #[test]
    fn configured_tables_are_property_tables() {
        let catalog = CityCatalog::new(["lahore", " karachi ", ""]).unwrap();
        let lahore = catalog.lookup("lahore").unwrap();
        assert_eq!(lahore.kind(), CityKind::PropertyTable);
        assert_eq!(lahore.kind().label_column(), "location");
        assert_eq!(lahore.quoted(), "\"lahore\"");
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["karachi", "lahore", "mouzas"]
        );
    }

    #[test]
    fn configuring_mouzas_keeps_its_kind() {
        let catalog = CityCatalog::new(["mouzas"]).unwrap();
        assert_eq!(catalog.lookup("mouzas").unwrap().kind(), CityKind::Mouzas);
    }

    #[test]
    fn unknown_city_is_not_found() {
        let catalog = CityCatalog::new(["lahore"]).unwrap();
        assert_matches!(
            catalog.lookup("islamabad"),
            Err(CoreError::CityNotFound { name }) if name == "islamabad"
        );
    }

    #[test]
    fn invalid_configured_name_fails_catalog() {
        assert!(CityCatalog::new(["lahore", "bad name"]).is_err());
    }
}
