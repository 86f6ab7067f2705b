//! Version comparison utilities

use std::borrow::Cow;

use crate::error::VersionError;
use crate::operator::Operator;
use crate::version::Version;

/// Right-hand side of a comparison: a parsed version or a string to parse
#[derive(Debug, Clone, Copy)]
pub enum VersionOperand<'a> {
    Parsed(&'a Version),
    Raw(&'a str),
}

impl<'a> VersionOperand<'a> {
    /// Normalize the operand to a parsed version
    pub fn resolve(self) -> Result<Cow<'a, Version>, VersionError> {
        match self {
            VersionOperand::Parsed(version) => Ok(Cow::Borrowed(version)),
            VersionOperand::Raw(raw) => Version::parse(raw).map(Cow::Owned),
        }
    }
}

impl<'a> From<&'a Version> for VersionOperand<'a> {
    fn from(version: &'a Version) -> Self {
        VersionOperand::Parsed(version)
    }
}

impl<'a> From<&'a str> for VersionOperand<'a> {
    fn from(raw: &'a str) -> Self {
        VersionOperand::Raw(raw)
    }
}

impl<'a> From<&'a String> for VersionOperand<'a> {
    fn from(raw: &'a String) -> Self {
        VersionOperand::Raw(raw.as_str())
    }
}

impl Version {
    /// Compare this version with `other` using an operator token.
    ///
    /// Only major, minor and patch take part: both sides are reduced to
    /// their encoded numbers. A raw-string operand is parsed before the
    /// operator is looked at, so an invalid operand wins over an invalid
    /// operator.
    pub fn compare<'a>(
        &self,
        other: impl Into<VersionOperand<'a>>,
        operator: &str,
    ) -> Result<bool, VersionError> {
        let other = other.into().resolve()?;
        let operator: Operator = operator.parse()?;
        Ok(operator.apply(self.to_number(), other.to_number()))
    }

    /// Compare this version with `other` using an already parsed operator
    pub fn compare_with<'a>(
        &self,
        other: impl Into<VersionOperand<'a>>,
        operator: Operator,
    ) -> Result<bool, VersionError> {
        let other = other.into().resolve()?;
        Ok(operator.apply(self.to_number(), other.to_number()))
    }
}

/// Comparator for comparing version strings
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare(version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare(version1, "==", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &str, operator: &str, version2: &str) -> Result<bool, VersionError> {
        Version::parse(version1)?.compare(version2, operator)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Result<Vec<String>, VersionError> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Result<Vec<String>, VersionError> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Result<Vec<String>, VersionError> {
        let mut parsed = versions
            .iter()
            .map(|v| Version::parse(v))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable: versions with equal numbers keep their input order
        parsed.sort_by(|a, b| {
            let cmp = a.cmp_number(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        Ok(parsed.into_iter().map(|v| v.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.26.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0-rc", "1.25.0").unwrap());
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::less_than("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than("1.25.0", "1.26.0").unwrap());
        assert!(Comparator::less_than("0.99.99", "1.0.0").unwrap());
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::equal_to("1.25.0-alpha", "1.25.0+build.7").unwrap());
        assert!(Comparator::equal_to("01.2.3", "1.02.03").unwrap());
    }

    #[test]
    fn test_not_equal_to() {
        assert!(Comparator::not_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::not_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::not_equal_to("1.25.0-alpha", "1.25.0-beta").unwrap());
    }

    #[test]
    fn test_compare_reports_invalid_input() {
        assert_eq!(
            Comparator::compare("1.0", "<", "1.0.0"),
            Err(VersionError::InvalidVersion("1.0".to_string()))
        );
        assert_eq!(
            Comparator::compare("1.0.0", "<", "1.0.0-"),
            Err(VersionError::InvalidVersion("1.0.0-".to_string()))
        );
        assert_eq!(
            Comparator::compare("1.0.0", "=", "1.0.0"),
            Err(VersionError::InvalidOperator("=".to_string()))
        );
    }

    #[test]
    fn test_invalid_operand_reported_before_operator() {
        let v = Version::parse("1.0.0").unwrap();
        assert_eq!(
            v.compare("x.y.z", "~="),
            Err(VersionError::InvalidVersion("x.y.z".to_string()))
        );
    }

    #[test]
    fn test_operand_kinds_agree() {
        let left = Version::parse("1.2.3").unwrap();
        let right = Version::parse("1.3.0").unwrap();
        let owned = String::from("1.3.0");

        assert!(left.compare(&right, "<").unwrap());
        assert!(left.compare("1.3.0", "<").unwrap());
        assert!(left.compare(&owned, "<").unwrap());
        assert!(left.compare_with(&right, Operator::LessThan).unwrap());
        assert!(!left.compare_with("1.3.0", Operator::GreaterThanOrEqual).unwrap());
    }

    #[test]
    fn test_resolve_borrows_parsed_versions() {
        let v = Version::parse("3.2.1").unwrap();
        assert!(matches!(VersionOperand::from(&v).resolve(), Ok(Cow::Borrowed(_))));
        assert!(matches!(VersionOperand::from("3.2.1").resolve(), Ok(Cow::Owned(_))));
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Comparator::sort(&versions).unwrap();
        assert_eq!(sorted, vec!["0.1.0", "0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "3.2.1"]);

        let rsorted = Comparator::rsort(&versions).unwrap();
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0-alpha", "2.4.0", "1.0.0", "0.1.0", "0.1.0"]);
    }

    #[test]
    fn test_sort_rejects_invalid_versions() {
        assert_eq!(
            Comparator::sort(&["1.0.0", "dev-master"]),
            Err(VersionError::InvalidVersion("dev-master".to_string()))
        );
    }
}
