use std::{collections::HashSet, str::FromStr};

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{
    base::resource_id,
    error::resource::{ValidationErrorKind, ValidationFieldError},
};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum BeerStyle {
    #[display(fmt = "ALE")]
    Ale,
    #[display(fmt = "PALE_ALE")]
    PaleAle,
    #[display(fmt = "IPA")]
    Ipa,
    #[display(fmt = "WHEAT")]
    Wheat,
    #[display(fmt = "PORTER")]
    Porter,
    #[display(fmt = "STOUT")]
    Stout,
    #[display(fmt = "SAISON")]
    Saison,
    #[display(fmt = "LAGER")]
    Lager,
}

impl BeerStyle {
    pub const ALL: [BeerStyle; 8] = [
        BeerStyle::Ale,
        BeerStyle::PaleAle,
        BeerStyle::Ipa,
        BeerStyle::Wheat,
        BeerStyle::Porter,
        BeerStyle::Stout,
        BeerStyle::Saison,
        BeerStyle::Lager,
    ];

    /// Position of the style in [`BeerStyle::ALL`].
    const fn ordinal(self) -> usize {
        match self {
            BeerStyle::Ale => 0,
            BeerStyle::PaleAle => 1,
            BeerStyle::Ipa => 2,
            BeerStyle::Wheat => 3,
            BeerStyle::Porter => 4,
            BeerStyle::Stout => 5,
            BeerStyle::Saison => 6,
            BeerStyle::Lager => 7,
        }
    }

    /// Stored and wire label of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerStyle::Ale => "ALE",
            BeerStyle::PaleAle => "PALE_ALE",
            BeerStyle::Ipa => "IPA",
            BeerStyle::Wheat => "WHEAT",
            BeerStyle::Porter => "PORTER",
            BeerStyle::Stout => "STOUT",
            BeerStyle::Saison => "SAISON",
            BeerStyle::Lager => "LAGER",
        }
    }

    /// Checks that every style has a distinct label that parses back to itself.
    pub fn verify_taxonomy() -> Result<(), ValidationFieldError> {
        let mut labels = HashSet::with_capacity(Self::ALL.len());
        for style in Self::ALL {
            let label = style.as_str();
            if !labels.insert(label) {
                return Err(ValidationFieldError::from_resource::<Self>(
                    label.into(),
                    String::new(),
                    vec![ValidationErrorKind::Invalid],
                ));
            }
            if Self::from_str(label)? != style {
                return Err(ValidationFieldError::from_resource::<Self>(
                    label.into(),
                    String::new(),
                    vec![ValidationErrorKind::Invalid],
                ));
            }
        }
        Ok(())
    }
}

// Fails the build when `ALL` and `ordinal` disagree on a variant.
const _: () = {
    let mut i = 0;
    while i < BeerStyle::ALL.len() {
        assert!(
            BeerStyle::ALL[i].ordinal() == i,
            "BeerStyle::ALL does not list every variant at its ordinal"
        );
        i += 1;
    }
};

resource_id!(BeerStyle, "beer::beer_style");

impl FromStr for BeerStyle {
    type Err = ValidationFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                ValidationFieldError::from_resource::<Self>(
                    s.into(),
                    String::new(),
                    vec![ValidationErrorKind::UnknownVariant],
                )
            })
    }
}

impl TryFrom<String> for BeerStyle {
    type Error = ValidationFieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<BeerStyle> for &'static str {
    fn from(style: BeerStyle) -> Self {
        style.as_str()
    }
}
