use serde::Deserialize;

use crate::domain::types::{
    Amount, ProductId, SizeLabel, TypeConstraintError, VariantId, VariantName,
};
use crate::domain::variant::{SizeOption, Variant as DomainVariant};
use crate::models::wire::WireNumber;

#[derive(Debug, Clone, Deserialize)]
pub struct SizeOptionRow {
    pub size: String,
    #[serde(default)]
    pub stock: Option<WireNumber>,
    #[serde(default)]
    pub price: Option<WireNumber>,
}

impl TryFrom<SizeOptionRow> for SizeOption {
    type Error = TypeConstraintError;

    fn try_from(row: SizeOptionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            size: SizeLabel::new(row.size)?,
            stock: row.stock.map(|s| s.as_count()).transpose()?.unwrap_or(0),
            price: row
                .price
                .map(|p| p.as_amount())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

/// Accepts `true`, `"true"` and `1` style flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireFlag {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl WireFlag {
    pub fn get(&self) -> bool {
        match self {
            WireFlag::Bool(value) => *value,
            WireFlag::Number(value) => *value != 0,
            WireFlag::Text(text) => text.trim().eq_ignore_ascii_case("true") || text.trim() == "1",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    pub id: WireNumber,
    pub product_id: WireNumber,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub stock: Option<WireNumber>,
    #[serde(default)]
    pub price: Option<WireNumber>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_best_selling: Option<WireFlag>,
    #[serde(default)]
    pub size_options: Vec<SizeOptionRow>,
}

impl TryFrom<Variant> for DomainVariant {
    type Error = TypeConstraintError;

    fn try_from(row: Variant) -> Result<Self, Self::Error> {
        let size_options = row
            .size_options
            .into_iter()
            .map(SizeOption::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        // Flat rows carry size/stock/price themselves; otherwise summarize the options.
        let size = row
            .size
            .filter(|s| !s.trim().is_empty())
            .or_else(|| size_options.first().map(|o| o.size.to_string()));
        let stock = match row.stock {
            Some(stock) => stock.as_count()?,
            None => size_options.iter().map(|o| o.stock).sum(),
        };
        let price = match row.price {
            Some(price) => price.as_amount()?,
            None => size_options
                .first()
                .map(|o| o.price)
                .unwrap_or_else(Amount::default),
        };

        Ok(Self {
            id: VariantId::new(row.id.as_i32()?)?,
            product_id: ProductId::new(row.product_id.as_i32()?)?,
            name: VariantName::new(row.name)?,
            description: row.description.unwrap_or_default(),
            size,
            stock,
            price,
            images: row.images,
            is_best_selling: row.is_best_selling.is_some_and(|flag| flag.get()),
            size_options,
        })
    }
}

/// `{variant: {...}}` answered by create.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantEnvelope {
    #[serde(default)]
    pub variant: Option<Variant>,
}

/// The list endpoint answers either a bare array or `{variants: [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VariantList {
    Bare(Vec<Variant>),
    Wrapped { variants: Vec<Variant> },
}

impl VariantList {
    pub fn into_rows(self) -> Vec<Variant> {
        match self {
            VariantList::Bare(rows) | VariantList::Wrapped { variants: rows } => rows,
        }
    }
}
