//! Token catalogs shared by the wizard, task display and task dispatch.
//!
//! Each catalog is a closed enum whose variants map to fixed string tokens.
//! Tokens are compared by exact equality only. Variants are only ever
//! appended, never renamed or reordered.

mod error;

pub use error::CatalogError;

/// Declares a catalog enum together with its token table.
///
/// Every token must equal the SCREAMING_SNAKE_CASE form of its variant name,
/// which is also what serde reads and writes.
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Catalog name used in errors and listings.
            pub const NAME: &'static str = $label;

            /// Every entry, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Returns the exact token for this entry.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }

            /// Returns every token, in declaration order.
            pub fn tokens() -> Vec<&'static str> {
                $name::ALL.iter().map(|entry| entry.as_str()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::catalog::CatalogError;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|entry| entry.as_str() == token)
                    .ok_or_else(|| $crate::catalog::CatalogError::UnknownToken {
                        catalog: $label,
                        token: token.to_string(),
                    })
            }
        }
    };
}

mod pages;
mod tasks;

pub use pages::{ContentWizardPage, PageName};
pub use tasks::{TaskStatus, TaskType, TransferType};

/// Names of every catalog, in the order they are listed.
///
pub const CATALOG_NAMES: [&str; 5] = [
    PageName::NAME,
    ContentWizardPage::NAME,
    TaskType::NAME,
    TaskStatus::NAME,
    TransferType::NAME,
];

/// Returns the tokens of the catalog called `name`.
///
pub fn tokens_of(name: &str) -> Result<Vec<&'static str>, CatalogError> {
    match name {
        PageName::NAME => Ok(PageName::tokens()),
        ContentWizardPage::NAME => Ok(ContentWizardPage::tokens()),
        TaskType::NAME => Ok(TaskType::tokens()),
        TaskStatus::NAME => Ok(TaskStatus::tokens()),
        TransferType::NAME => Ok(TransferType::tokens()),
        other => Err(CatalogError::UnknownCatalog(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_of_every_catalog() {
        for name in CATALOG_NAMES {
            let tokens = tokens_of(name).unwrap();
            assert!(!tokens.is_empty(), "{} has no tokens", name);
        }
        assert_eq!(
            vec!["REMOTE_IMPORT", "LOCAL_IMPORT", "LOCAL_EXPORT", "DELETE_CHANNEL"],
            tokens_of("TaskTypes").unwrap()
        );
    }

    #[test]
    fn tokens_of_unknown_catalog() {
        let error = tokens_of("Colors").unwrap_err();
        assert!(matches!(error, CatalogError::UnknownCatalog(ref name) if name == "Colors"));
    }

    #[test]
    fn catalog_names_are_distinct() {
        let mut names = CATALOG_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(CATALOG_NAMES.len(), names.len());
    }
}
