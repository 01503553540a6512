use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{EnumIter, IntoEnumIterator};

#[cfg(feature = "database")]
use sea_orm::Value;

/// Category of a generic credit bucket, e.g. "any Quantitative Skills course"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum CreditTypeCode {
    #[serde(rename = "CS")]
    CommunicationSkills,
    #[serde(rename = "NS")]
    NaturalScience,
    #[serde(rename = "H")]
    Humanities,
    #[serde(rename = "HP")]
    HumanitiesPerformance,
    #[serde(rename = "SS")]
    SocialSciences,
    #[serde(rename = "NSL")]
    NaturalScienceLab,
    #[serde(rename = "QS")]
    QuantitativeSkills,
    #[serde(rename = "E")]
    Elective,
    #[serde(rename = "DC")]
    DiversityCourse,
    #[serde(rename = "PR")]
    GenericPrerequisite,
}

impl CreditTypeCode {
    /// Every credit type, in keyword-matching order
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Short code stored as the credit type's primary key
    pub fn code(self) -> &'static str {
        match self {
            Self::CommunicationSkills => "CS",
            Self::NaturalScience => "NS",
            Self::Humanities => "H",
            Self::HumanitiesPerformance => "HP",
            Self::SocialSciences => "SS",
            Self::NaturalScienceLab => "NSL",
            Self::QuantitativeSkills => "QS",
            Self::Elective => "E",
            Self::DiversityCourse => "DC",
            Self::GenericPrerequisite => "PR",
        }
    }

    /// Human-readable name seeded into the credit types table
    pub fn label(self) -> &'static str {
        match self {
            Self::CommunicationSkills => "Communication Skills",
            Self::NaturalScience => "Natural Science",
            Self::Humanities => "Humanities",
            Self::HumanitiesPerformance => "Humanities Performance",
            Self::SocialSciences => "Social Sciences",
            Self::NaturalScienceLab => "Natural Science Lab",
            Self::QuantitativeSkills => "Quantitative Skills",
            Self::Elective => "Elective",
            Self::DiversityCourse => "Diversity Course",
            Self::GenericPrerequisite => "Generic Prerequisite",
        }
    }

    /// Keyword that identifies this category in a generic row's text
    pub fn keyword(self) -> &'static str {
        match self {
            Self::CommunicationSkills => "Communication",
            Self::NaturalScience => "Natural Science",
            Self::Humanities => "Humanities",
            Self::HumanitiesPerformance => "Performance",
            Self::SocialSciences => "Social",
            Self::NaturalScienceLab => "Lab",
            Self::QuantitativeSkills => "Quant",
            Self::Elective => "Elective",
            Self::DiversityCourse => "Diversity",
            Self::GenericPrerequisite => "Prereq",
        }
    }

    /// Resolves a generic row's category text to a credit type.
    ///
    /// Keywords are tried in declaration order and the first hit wins, so
    /// "Natural Science Lab" resolves to [`CreditTypeCode::NaturalScience`].
    pub fn from_category_text(text: &str) -> Option<Self> {
        Self::iter().find(|code| text.contains(code.keyword()))
    }
}

impl FromStr for CreditTypeCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter().find(|code| code.code() == s.trim()).ok_or(())
    }
}

impl Display for CreditTypeCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.code())
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for CreditTypeCode {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => {
                Self::from_str(&s).map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "CreditTypeCode".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<CreditTypeCode> for Value {
    fn from(code: CreditTypeCode) -> Self {
        Value::String(Some(Box::new(code.code().to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for CreditTypeCode {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        Self::from_str(&val).map_err(|_| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Unknown credit type code: {val}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for CreditTypeCode {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table() {
        assert_eq!(
            CreditTypeCode::from_category_text("Generic Quantitative Skills"),
            Some(CreditTypeCode::QuantitativeSkills)
        );
        assert_eq!(
            CreditTypeCode::from_category_text("Generic Social Science"),
            Some(CreditTypeCode::SocialSciences)
        );
        assert_eq!(
            CreditTypeCode::from_category_text("Generic Prereq"),
            Some(CreditTypeCode::GenericPrerequisite)
        );
        assert_eq!(CreditTypeCode::from_category_text("Generic Course"), None);
    }

    #[test]
    fn test_first_keyword_wins() {
        assert_eq!(
            CreditTypeCode::from_category_text("Generic Natural Science Lab"),
            Some(CreditTypeCode::NaturalScience)
        );
        assert_eq!(
            CreditTypeCode::from_category_text("Generic Lab"),
            Some(CreditTypeCode::NaturalScienceLab)
        );
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!(CreditTypeCode::all().len(), 10);
        assert_eq!("NSL".parse(), Ok(CreditTypeCode::NaturalScienceLab));
        assert_eq!("XX".parse::<CreditTypeCode>(), Err(()));
    }
}
