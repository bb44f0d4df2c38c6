use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt, str::FromStr};
use uuid::Uuid;

static SLUG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9_]*[a-z0-9])?$").expect("slug pattern must compile")
});

const TITLE_MIN_CHARS: usize = 2;
const PRICE_MAX: f64 = 99_999_999.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid product id '{value}'")))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTitle(String);

impl ProductTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if trimmed.chars().count() < TITLE_MIN_CHARS {
            return Err(DomainError::Validation(format!(
                "title must be at least {TITLE_MIN_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical, URL-safe product identifier: lowercase ASCII letters and
/// digits separated by underscores, never starting or ending with `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductSlug(String);

impl ProductSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::Validation(format!("invalid slug '{value}'")));
        }
        Ok(Self(value))
    }

    /// Structural check only. Generation-time policies (digit runs,
    /// repeated characters) are not re-verified here.
    pub fn is_valid(value: &str) -> bool {
        SLUG_PATTERN.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ProductSlug> for String {
    fn from(value: ProductSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductPrice(f64);

impl ProductPrice {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::Validation(
                "price must be a non-negative number".into(),
            ));
        }
        if value > PRICE_MAX {
            return Err(DomainError::Validation(format!(
                "price cannot exceed {PRICE_MAX}"
            )));
        }
        Ok(Self((value * 100.0).round() / 100.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ProductPrice {
    fn default() -> Self {
        Self(0.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductStock(i32);

impl ProductStock {
    pub fn new(value: i64) -> DomainResult<Self> {
        let value = i32::try_from(value)
            .map_err(|_| DomainError::Validation("stock is out of range".into()))?;
        if value < 0 {
            return Err(DomainError::Validation("stock cannot be negative".into()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductSize {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    Xxxl,
}

impl ProductSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSize::Xs => "XS",
            ProductSize::S => "S",
            ProductSize::M => "M",
            ProductSize::L => "L",
            ProductSize::Xl => "XL",
            ProductSize::Xxl => "XXL",
            ProductSize::Xxxl => "XXXL",
        }
    }
}

impl fmt::Display for ProductSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XS" => Ok(ProductSize::Xs),
            "S" => Ok(ProductSize::S),
            "M" => Ok(ProductSize::M),
            "L" => Ok(ProductSize::L),
            "XL" => Ok(ProductSize::Xl),
            "XXL" => Ok(ProductSize::Xxl),
            "XXXL" => Ok(ProductSize::Xxxl),
            _ => Err(DomainError::Validation(format!("unknown size '{s}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Men,
    Women,
    Kid,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
            Gender::Kid => "kid",
            Gender::Unisex => "unisex",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            "kid" => Ok(Gender::Kid),
            "unisex" => Ok(Gender::Unisex),
            _ => Err(DomainError::Validation(format!("unknown gender '{s}'"))),
        }
    }
}

pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_pattern_accepts_canonical_forms() {
        assert!(ProductSlug::is_valid("a"));
        assert!(ProductSlug::is_valid("red_shoes"));
        assert!(ProductSlug::is_valid("iphone_15"));
        assert!(ProductSlug::is_valid("pizzzza"));
    }

    #[test]
    fn slug_pattern_rejects_malformed_values() {
        assert!(!ProductSlug::is_valid(""));
        assert!(!ProductSlug::is_valid("_red"));
        assert!(!ProductSlug::is_valid("red_"));
        assert!(!ProductSlug::is_valid("Red"));
        assert!(!ProductSlug::is_valid("red-shoes"));
        assert!(!ProductSlug::is_valid("café"));
    }

    #[test]
    fn title_is_trimmed_and_needs_two_chars() {
        assert_eq!(ProductTitle::new("  Cap ").unwrap().as_str(), "Cap");
        assert!(ProductTitle::new(" x ").is_err());
        assert!(ProductTitle::new("   ").is_err());
    }

    #[test]
    fn price_rounds_to_cents_and_rejects_negatives() {
        assert_eq!(ProductPrice::new(19.999).unwrap().value(), 20.0);
        assert!(ProductPrice::new(-1.0).is_err());
        assert!(ProductPrice::new(f64::NAN).is_err());
    }

    #[test]
    fn sizes_and_genders_parse_case_insensitively() {
        assert_eq!("xl".parse::<ProductSize>().unwrap(), ProductSize::Xl);
        assert_eq!("Women".parse::<Gender>().unwrap(), Gender::Women);
        assert!("huge".parse::<ProductSize>().is_err());
    }

    #[test]
    fn blank_tags_are_dropped() {
        let tags = normalize_tags(vec![" summer ".into(), "  ".into(), "sale".into()]);
        assert_eq!(tags, vec!["summer".to_string(), "sale".to_string()]);
    }
}
