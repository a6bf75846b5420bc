// src/catalog/record.rs
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{normalize_field, normalize_ws};

/// Display headers, in `DrugRecord::to_row` order.
pub const HEADERS: [&str; 5] = ["Name", "Ingredient", "Dose", "Manufacturer", "Price"];

/// Display headers, in `DrugRecord::to_row_with_category` order.
pub const HEADERS_WITH_CATEGORY: [&str; 6] =
    ["Name", "Ingredient", "Dose", "Manufacturer", "Price", "Category"];

/// One product in the catalog.
///
/// Accepts the English keys as well as the Korean keys of the source
/// dataset. Missing or null fields become empty strings and numeric cells
/// (prices in particular) are kept as display text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrugRecord {
    #[serde(alias = "약품명", deserialize_with = "text")]
    pub name: String,
    #[serde(alias = "성분", deserialize_with = "text")]
    pub ingredient: String,
    #[serde(alias = "용량", deserialize_with = "text")]
    pub dose: String,
    #[serde(alias = "제약사", deserialize_with = "text")]
    pub manufacturer: String,
    #[serde(alias = "약가", deserialize_with = "text")]
    pub price: String,
    #[serde(alias = "분류", deserialize_with = "text")]
    pub category: String,
}

impl DrugRecord {
    pub fn new(
        name: &str,
        ingredient: &str,
        dose: &str,
        manufacturer: &str,
        price: &str,
        category: &str,
    ) -> Self {
        Self {
            name: s!(name),
            ingredient: s!(ingredient),
            dose: s!(dose),
            manufacturer: s!(manufacturer),
            price: s!(price),
            category: s!(category),
        }
    }

    #[inline]
    pub fn ingredient_key(&self) -> &str {
        normalize_field(&self.ingredient)
    }

    #[inline]
    pub fn dose_key(&self) -> &str {
        normalize_field(&self.dose)
    }

    /// Applied once at load time. The name is only trimmed so exact lookup
    /// still matches the source text; the other fields get whitespace runs
    /// collapsed.
    pub fn tidy(&mut self) {
        self.name = s!(self.name.trim());
        for field in [
            &mut self.ingredient,
            &mut self.dose,
            &mut self.manufacturer,
            &mut self.price,
            &mut self.category,
        ] {
            *field = normalize_ws(field);
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        row![&self.name, &self.ingredient, &self.dose, &self.manufacturer, &self.price]
    }

    pub fn to_row_with_category(&self) -> Vec<String> {
        let mut r = self.to_row();
        r.push(self.category.clone());
        r
    }

    /// Map a header cell (English or Korean, any case) to a field setter index.
    pub(crate) fn column_for_header(header: &str) -> Option<usize> {
        match header.trim().to_lowercase().as_str() {
            "name" | "약품명" => Some(0),
            "ingredient" | "성분" => Some(1),
            "dose" | "용량" => Some(2),
            "manufacturer" | "제약사" => Some(3),
            "price" | "약가" => Some(4),
            "category" | "분류" => Some(5),
            _ => None,
        }
    }

    pub(crate) fn set_column(&mut self, column: usize, value: String) {
        match column {
            0 => self.name = value,
            1 => self.ingredient = value,
            2 => self.dose = value,
            3 => self.manufacturer = value,
            4 => self.price = value,
            5 => self.category = value,
            _ => {}
        }
    }
}

fn text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Option::<Text>::deserialize(d)? {
        None => s!(),
        Some(Text::Str(s)) => s,
        Some(Text::Int(n)) => n.to_string(),
        Some(Text::Float(f)) => f.to_string(),
        Some(Text::Bool(b)) => b.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_keys_and_numeric_price() {
        let json = r#"{"약품명":"타이레놀정500mg","성분":"아세트아미노펜,","용량":"500mg","제약사":"한국얀센","약가":51,"분류":"해열진통제"}"#;
        let r: DrugRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.name, "타이레놀정500mg");
        assert_eq!(r.price, "51");
        assert_eq!(r.ingredient_key(), "아세트아미노펜");
        assert_eq!(r.category, "해열진통제");
    }

    #[test]
    fn missing_and_null_fields_are_empty() {
        let r: DrugRecord = serde_json::from_str(r#"{"name":"Foo","dose":null}"#).unwrap();
        assert_eq!(r.name, "Foo");
        assert_eq!(r.dose, "");
        assert_eq!(r.manufacturer, "");
    }

    #[test]
    fn header_mapping_is_case_insensitive() {
        assert_eq!(DrugRecord::column_for_header(" Name "), Some(0));
        assert_eq!(DrugRecord::column_for_header("분류"), Some(5));
        assert_eq!(DrugRecord::column_for_header("PRICE"), Some(4));
        assert_eq!(DrugRecord::column_for_header("barcode"), None);
    }

    #[test]
    fn tidy_keeps_inner_name_spacing() {
        let mut r = DrugRecord::new(" Two  Words ", " a\t b ", "5  mg", "", "", "");
        r.tidy();
        assert_eq!(r.name, "Two  Words");
        assert_eq!(r.ingredient, "a b");
        assert_eq!(r.dose, "5 mg");
    }
}
