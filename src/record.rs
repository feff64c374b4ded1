//! Product records built from catalog rows.
//!
//! A source row is positional:
//! `ISBN, Title, Author, Year, Publisher, ImageSmall, ImageMedium, ImageLarge`.
//! Each well-formed row becomes one `ProductRecord` with a fresh id and a
//! generated price. Columns past the eighth are ignored.

use csv::StringRecord;
use rand::Rng;
use uuid::Uuid;

use crate::config::{
    BOOK_CATEGORY, FALLBACK_YEAR, PRICE_MAX_CENTS, PRICE_MIN_CENTS, SOURCE_FIELD_COUNT,
    YEAR_SENTINEL,
};
use crate::error_handling::RowError;
use crate::utils::sanitize::clean_text;

/// Source column names, in file order.
pub const SOURCE_COLUMNS: [&str; SOURCE_FIELD_COUNT] = [
    "ISBN",
    "Title",
    "Author",
    "Year",
    "Publisher",
    "ImageSmall",
    "ImageMedium",
    "ImageLarge",
];

const ISBN: usize = 0;
const TITLE: usize = 1;
const AUTHOR: usize = 2;
const YEAR: usize = 3;
const PUBLISHER: usize = 4;
const IMAGE_SMALL: usize = 5;
const IMAGE_MEDIUM: usize = 6;
const IMAGE_LARGE: usize = 7;

/// One row of the `Products` table, as written by the importer.
///
/// `DateAdded` is not carried here; the store fills it from the database clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Fresh random identifier
    pub id: Uuid,
    /// Book title
    pub name: String,
    /// Always empty for imported books
    pub description: String,
    /// Always `"book"`
    pub category: &'static str,
    /// Small cover image reference, passed through
    pub image_small: String,
    /// Medium cover image reference, passed through
    pub image_medium: String,
    /// Large cover image reference, passed through
    pub image_large: String,
    /// Generated price in `[6.99, 22.00]`, two decimals
    pub price: f64,
    /// External identifier from the first source column
    pub isbn: String,
    /// Author name
    pub author: String,
    /// Publication year (`1990` when the source says `"0"`)
    pub year: i32,
    /// Publisher name
    pub publisher: String,
}

impl ProductRecord {
    /// Builds a record from one source row.
    ///
    /// Fails with `RowError::MissingField` if the row has fewer than eight
    /// columns, and with `RowError::InvalidYear` if the year column is neither
    /// `"0"` nor an integer. With `sanitize_text` set, title, author and
    /// publisher pass through [`clean_text`].
    pub fn from_row<R: Rng + ?Sized>(
        row: &StringRecord,
        sanitize_text: bool,
        rng: &mut R,
    ) -> Result<Self, RowError> {
        let text = |index: usize| -> Result<String, RowError> {
            let value = field(row, index)?;
            Ok(if sanitize_text {
                clean_text(value)
            } else {
                value.to_string()
            })
        };

        let name = text(TITLE)?;
        let author = text(AUTHOR)?;
        let year = parse_year(field(row, YEAR)?)?;
        let publisher = text(PUBLISHER)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description: String::new(),
            category: BOOK_CATEGORY,
            image_small: field(row, IMAGE_SMALL)?.to_string(),
            image_medium: field(row, IMAGE_MEDIUM)?.to_string(),
            image_large: field(row, IMAGE_LARGE)?.to_string(),
            price: random_price(rng),
            isbn: field(row, ISBN)?.to_string(),
            author,
            year,
            publisher,
        })
    }
}

/// Returns the external identifier of a row, or an empty string for an empty row.
pub fn external_id(row: &StringRecord) -> &str {
    row.get(ISBN).unwrap_or_default()
}

fn field(row: &StringRecord, index: usize) -> Result<&str, RowError> {
    row.get(index).ok_or(RowError::MissingField {
        index,
        name: SOURCE_COLUMNS[index],
    })
}

/// Converts the year column.
///
/// The exact value `"0"` marks an unknown year and yields `FALLBACK_YEAR`.
/// Anything else must parse as an integer (surrounding whitespace allowed).
pub fn parse_year(raw: &str) -> Result<i32, RowError> {
    if raw == YEAR_SENTINEL {
        return Ok(FALLBACK_YEAR);
    }
    raw.trim()
        .parse::<i32>()
        .map_err(|source| RowError::InvalidYear {
            value: raw.to_string(),
            source,
        })
}

/// Draws a price uniformly from `[6.99, 22.00]` in whole cents.
pub fn random_price<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let cents = rng.random_range(PRICE_MIN_CENTS..=PRICE_MAX_CENTS);
    f64::from(cents) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    fn full_row(year: &str) -> StringRecord {
        row(&[
            "0195153448",
            "Classical Mythology",
            "Mark P. O. Morford",
            year,
            "Oxford University Press",
            "http://images.example.com/s.jpg",
            "http://images.example.com/m.jpg",
            "http://images.example.com/l.jpg",
        ])
    }

    fn is_whole_cents(price: f64) -> bool {
        let scaled = price * 100.0;
        (scaled - scaled.round()).abs() < 1e-9
    }

    #[test]
    fn test_from_row_maps_columns() {
        let mut rng = StdRng::seed_from_u64(7);
        let record = ProductRecord::from_row(&full_row("2002"), false, &mut rng).unwrap();

        assert_eq!(record.isbn, "0195153448");
        assert_eq!(record.name, "Classical Mythology");
        assert_eq!(record.author, "Mark P. O. Morford");
        assert_eq!(record.year, 2002);
        assert_eq!(record.publisher, "Oxford University Press");
        assert_eq!(record.image_small, "http://images.example.com/s.jpg");
        assert_eq!(record.image_medium, "http://images.example.com/m.jpg");
        assert_eq!(record.image_large, "http://images.example.com/l.jpg");
        assert_eq!(record.description, "");
        assert_eq!(record.category, "book");
        assert!(!record.id.is_nil());
    }

    #[test]
    fn test_from_row_zero_year_uses_fallback() {
        let mut rng = StdRng::seed_from_u64(7);
        let record = ProductRecord::from_row(&full_row("0"), false, &mut rng).unwrap();
        assert_eq!(record.year, 1990);
    }

    #[test]
    fn test_from_row_non_numeric_year_fails() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = ProductRecord::from_row(&full_row("unknown"), false, &mut rng).unwrap_err();
        assert!(matches!(err, RowError::InvalidYear { ref value, .. } if value == "unknown"));
    }

    #[test]
    fn test_from_row_short_row_fails() {
        let mut rng = StdRng::seed_from_u64(7);
        let short = row(&["0195153448", "Classical Mythology", "Morford", "2002"]);
        let err = ProductRecord::from_row(&short, false, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            RowError::MissingField {
                index: 4,
                name: "Publisher"
            }
        ));
    }

    #[test]
    fn test_from_row_missing_image_column_fails() {
        let mut rng = StdRng::seed_from_u64(7);
        let seven = row(&["1", "T", "A", "2000", "P", "s", "m"]);
        let err = ProductRecord::from_row(&seven, false, &mut rng).unwrap_err();
        assert!(matches!(err, RowError::MissingField { index: 7, .. }));
    }

    #[test]
    fn test_from_row_ignores_extra_columns() {
        let mut rng = StdRng::seed_from_u64(7);
        let nine = row(&["1", "T", "A", "2000", "P", "s", "m", "l", "extra"]);
        let record = ProductRecord::from_row(&nine, false, &mut rng).unwrap();
        assert_eq!(record.image_large, "l");
    }

    #[test]
    fn test_from_row_sanitizes_text_when_enabled() {
        let mut rng = StdRng::seed_from_u64(7);
        let record = ProductRecord::from_row(&full_row("2002"), true, &mut rng).unwrap();
        assert_eq!(record.author, "Mark P O Morford");
        // Identifiers and image references are never rewritten
        assert_eq!(record.image_small, "http://images.example.com/s.jpg");
    }

    #[test]
    fn test_from_row_ids_are_fresh() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = ProductRecord::from_row(&full_row("2002"), false, &mut rng).unwrap();
        let b = ProductRecord::from_row(&full_row("2002"), false, &mut rng).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1999").unwrap(), 1999);
        assert_eq!(parse_year(" 2004 ").unwrap(), 2004);
        assert_eq!(parse_year("0").unwrap(), 1990);
        // Only the exact sentinel is substituted
        assert_eq!(parse_year("00").unwrap(), 0);
        assert!(parse_year("").is_err());
        assert!(parse_year("19x9").is_err());
    }

    #[test]
    fn test_random_price_bounds_and_precision() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let price = random_price(&mut rng);
            assert!((6.99..=22.00).contains(&price), "price {price} out of range");
            assert!(is_whole_cents(price), "price {price} not in whole cents");
        }
    }

    #[test]
    fn test_external_id() {
        assert_eq!(external_id(&full_row("2002")), "0195153448");
        assert_eq!(external_id(&StringRecord::new()), "");
    }
}
