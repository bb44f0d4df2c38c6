use crate::{
    application::error::ApplicationResult,
    domain::product::{Gender, ProductPrice, ProductSize, ProductStock},
};

pub(super) fn parse_sizes(raw: Vec<String>) -> ApplicationResult<Vec<ProductSize>> {
    let mut sizes = Vec::with_capacity(raw.len());
    for value in raw {
        let size = value.parse::<ProductSize>()?;
        if !sizes.contains(&size) {
            sizes.push(size);
        }
    }
    Ok(sizes)
}

pub(super) fn parse_genders(raw: Vec<String>) -> ApplicationResult<Vec<Gender>> {
    let mut genders = Vec::with_capacity(raw.len());
    for value in raw {
        let gender = value.parse::<Gender>()?;
        if !genders.contains(&gender) {
            genders.push(gender);
        }
    }
    Ok(genders)
}

pub(super) fn parse_price(raw: Option<f64>) -> ApplicationResult<Option<ProductPrice>> {
    Ok(raw.map(ProductPrice::new).transpose()?)
}

pub(super) fn parse_stock(raw: Option<i64>) -> ApplicationResult<Option<ProductStock>> {
    Ok(raw.map(ProductStock::new).transpose()?)
}

/// Blank descriptions are stored as absent.
pub(super) fn clean_description(raw: Option<String>) -> Option<String> {
    raw.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}
