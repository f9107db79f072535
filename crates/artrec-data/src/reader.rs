//! CSV readers for the interaction log and the article catalog.
//!
//! Both files carry a header row. Columns are matched by name, so extra
//! columns (including the unnamed index column pandas writes) are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use artrec_core::entities::{Article, Interaction};
use artrec_core::ids::ArticleId;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::email_mapper::EmailMapper;
use crate::error::DataError;

const INTERACTION_COLUMNS: &[&str] = &["article_id", "title", "email"];
const CATALOG_COLUMNS: &[&str] = &["article_id", "doc_full_name", "doc_description"];

#[derive(Debug, Deserialize)]
struct InteractionRow {
    article_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleRow {
    article_id: String,
    #[serde(default)]
    doc_full_name: String,
    #[serde(default)]
    doc_description: String,
    #[serde(default)]
    doc_body: Option<String>,
    #[serde(default)]
    doc_status: Option<String>,
}

/// Catalog rows after de-duplication.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub articles: Vec<Article>,
    /// Rows dropped because an earlier row had the same `article_id`.
    pub duplicates_dropped: usize,
}

/// Read the interaction log at `path`, mapping emails to user ids.
///
/// # Errors
///
/// Returns [`DataError::Io`] if the file cannot be opened, and the errors of
/// [`read_interactions_from`] for malformed content.
pub fn read_interactions(path: &Path) -> Result<Vec<Interaction>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_interactions_from(file, path)
}

/// Read interactions from any reader. `origin` is only used in error messages.
///
/// # Errors
///
/// Returns [`DataError::Csv`] for unreadable CSV, [`DataError::MissingColumn`]
/// when `article_id`, `title` or `email` is absent, and
/// [`DataError::InvalidField`] for bad ids or timestamps.
pub fn read_interactions_from<R: Read>(
    reader: R,
    origin: &Path,
) -> Result<Vec<Interaction>, DataError> {
    let mut rdr = csv_reader(reader);
    let headers = checked_headers(&mut rdr, origin, INTERACTION_COLUMNS)?;

    let mut mapper = EmailMapper::new();
    let mut interactions = Vec::new();

    for record in rdr.records() {
        let record = record.map_err(|source| csv_error(origin, source))?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: InteractionRow = record
            .deserialize(Some(&headers))
            .map_err(|source| csv_error(origin, source))?;

        let article_id = parse_article_id(&row.article_id, origin, line)?;
        let timestamp = parse_timestamp(row.timestamp.as_deref(), origin, line)?;
        let user_id = mapper
            .map(row.email.trim())
            .ok_or_else(|| DataError::InvalidField {
                path: origin.to_path_buf(),
                line,
                field: "email",
                reason: "no user ids left to assign".to_string(),
            })?;

        interactions.push(Interaction {
            user_id,
            article_id,
            title: row.title,
            timestamp,
        });
    }

    tracing::debug!(
        path = %origin.display(),
        rows = interactions.len(),
        users = mapper.len(),
        "read interaction log"
    );

    Ok(interactions)
}

/// Read the article catalog at `path`, keeping the first row per `article_id`.
///
/// # Errors
///
/// Returns [`DataError::Io`] if the file cannot be opened, and the errors of
/// [`read_catalog_from`] for malformed content.
pub fn read_catalog(path: &Path) -> Result<Catalog, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_catalog_from(file, path)
}

/// Read catalog rows from any reader. `origin` is only used in error messages.
///
/// # Errors
///
/// Returns [`DataError::Csv`] for unreadable CSV, [`DataError::MissingColumn`]
/// when `article_id`, `doc_full_name` or `doc_description` is absent, and
/// [`DataError::InvalidField`] for bad ids.
pub fn read_catalog_from<R: Read>(reader: R, origin: &Path) -> Result<Catalog, DataError> {
    let mut rdr = csv_reader(reader);
    let headers = checked_headers(&mut rdr, origin, CATALOG_COLUMNS)?;

    let mut articles = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|source| csv_error(origin, source))?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: ArticleRow = record
            .deserialize(Some(&headers))
            .map_err(|source| csv_error(origin, source))?;

        articles.push(Article {
            article_id: parse_article_id(&row.article_id, origin, line)?,
            title: row.doc_full_name,
            description: row.doc_description,
            body: row.doc_body.filter(|body| !body.is_empty()),
            status: row.doc_status.filter(|status| !status.is_empty()),
        });
    }

    Ok(dedup_catalog(articles))
}

/// Keep the first article per id, preserving file order.
#[must_use]
pub fn dedup_catalog(articles: Vec<Article>) -> Catalog {
    let total = articles.len();
    let mut seen = std::collections::HashSet::with_capacity(total);
    let articles: Vec<Article> = articles
        .into_iter()
        .filter(|article| seen.insert(article.article_id))
        .collect();

    let duplicates_dropped = total - articles.len();
    if duplicates_dropped > 0 {
        tracing::warn!(duplicates_dropped, "dropped duplicate catalog rows");
    }

    Catalog {
        articles,
        duplicates_dropped,
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader)
}

fn checked_headers<R: Read>(
    rdr: &mut csv::Reader<R>,
    origin: &Path,
    required: &'static [&'static str],
) -> Result<csv::StringRecord, DataError> {
    let headers = rdr
        .headers()
        .map_err(|source| csv_error(origin, source))?
        .clone();

    for &column in required {
        if !headers.iter().any(|header| header.trim() == column) {
            return Err(DataError::MissingColumn {
                path: origin.to_path_buf(),
                column,
            });
        }
    }

    // Tolerate padded header names such as " email".
    Ok(headers.iter().map(str::trim).collect())
}

fn csv_error(origin: &Path, source: csv::Error) -> DataError {
    DataError::Csv {
        path: origin.to_path_buf(),
        source,
    }
}

fn parse_article_id(raw: &str, origin: &Path, line: u64) -> Result<ArticleId, DataError> {
    raw.parse::<ArticleId>()
        .map_err(|error| DataError::InvalidField {
            path: origin.to_path_buf(),
            line,
            field: "article_id",
            reason: error.to_string(),
        })
}

fn parse_timestamp(
    raw: Option<&str>,
    origin: &Path,
    line: u64,
) -> Result<Option<DateTime<Utc>>, DataError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    DateTime::parse_from_rfc3339(raw)
        .map(|ts| Some(ts.with_timezone(&Utc)))
        .map_err(|error| DataError::InvalidField {
            path: origin.to_path_buf(),
            line,
            field: "timestamp",
            reason: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use artrec_core::ids::UserId;

    fn origin() -> &'static Path {
        Path::new("test.csv")
    }

    #[test]
    fn interactions_map_emails_and_float_ids() {
        let csv = "\
,article_id,title,email
0,1430.0,using pixiedust,ef5f11
1,1314.0,healthcare python,083cbd
2,1430.0,using pixiedust,083cbd
";
        let rows = read_interactions_from(csv.as_bytes(), origin()).unwrap();
        let pairs: Vec<(u32, u64)> = rows
            .iter()
            .map(|r| (r.user_id.get(), r.article_id.get()))
            .collect();
        assert_eq!(pairs, vec![(1, 1430), (2, 1314), (2, 1430)]);
        assert_eq!(rows[1].title, "healthcare python");
        assert!(rows[0].timestamp.is_none());
    }

    #[test]
    fn missing_email_column_is_reported() {
        let csv = "article_id,title\n1,a\n";
        let err = read_interactions_from(csv.as_bytes(), origin()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { column: "email", .. }));
    }

    #[test]
    fn bad_article_id_names_the_line() {
        let csv = "article_id,title,email\n1,a,x\nnope,b,y\n";
        let err = read_interactions_from(csv.as_bytes(), origin()).unwrap_err();
        match err {
            DataError::InvalidField { line, field, .. } => {
                assert_eq!(field, "article_id");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn timestamps_parse_when_present() {
        let csv = "article_id,title,email,timestamp\n1,a,x,2017-03-01T10:00:00Z\n2,b,x,\n";
        let rows = read_interactions_from(csv.as_bytes(), origin()).unwrap();
        assert!(rows[0].timestamp.is_some());
        assert!(rows[1].timestamp.is_none());
        assert_eq!(rows[1].user_id, UserId(1));
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let csv = "article_id,title,email\n1,a\n";
        let err = read_interactions_from(csv.as_bytes(), origin()).unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }

    #[test]
    fn catalog_keeps_first_duplicate() {
        let csv = "\
doc_body,doc_description,doc_full_name,doc_status,article_id
body,\"first, quoted\",First,Live,7
,second,Second,Live,7
,other,Other,,8
";
        let catalog = read_catalog_from(csv.as_bytes(), origin()).unwrap();
        assert_eq!(catalog.duplicates_dropped, 1);
        assert_eq!(catalog.articles.len(), 2);
        assert_eq!(catalog.articles[0].title, "First");
        assert_eq!(catalog.articles[0].description, "first, quoted");
        assert_eq!(catalog.articles[1].body, None);
        assert_eq!(catalog.articles[1].status, None);
    }
}
