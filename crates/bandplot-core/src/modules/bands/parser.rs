use crate::domain::{BandPlotError, ParserResult};
use std::fs;
use std::path::Path;

/// Rectangular table of floats parsed from a whitespace-delimited text file.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    rows: Vec<Vec<f64>>,
}

impl NumericTable {
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

pub fn read_input_source(path: &Path, artifact_name: &str) -> ParserResult<String> {
    fs::read_to_string(path).map_err(|source| {
        BandPlotError::io_system(
            "IO.BANDS_INPUT_READ",
            format!(
                "failed to read bands input '{}' ({}): {}",
                path.display(),
                artifact_name,
                source
            ),
        )
    })
}

/// Parses one row per line. Blank lines and `#` comment lines are skipped;
/// every remaining row must match the first row's column count.
pub fn parse_table(artifact_name: &str, source: &str) -> ParserResult<NumericTable> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (line_index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut row = Vec::new();
        for token in trimmed.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| {
                BandPlotError::input_validation(
                    "INPUT.BANDS_TABLE_NUMERIC",
                    format!(
                        "{} line {}: '{}' is not a real number",
                        artifact_name,
                        line_index + 1,
                        token
                    ),
                )
            })?;
            row.push(value);
        }

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(BandPlotError::input_validation(
                    "INPUT.BANDS_TABLE_SHAPE",
                    format!(
                        "{} line {} has {} columns, expected {}",
                        artifact_name,
                        line_index + 1,
                        row.len(),
                        first.len()
                    ),
                ));
            }
        }
        rows.push(row);
    }

    Ok(NumericTable { rows })
}

/// Requires an N x 2 table; rejects empty input outright.
pub fn parse_wavevectors(artifact_name: &str, table: NumericTable) -> ParserResult<Vec<[f64; 2]>> {
    if table.row_count() == 0 {
        return Err(BandPlotError::input_validation(
            "INPUT.BANDS_EMPTY",
            format!("{} contains no wavevector rows", artifact_name),
        ));
    }
    if table.column_count() != 2 {
        return Err(BandPlotError::input_validation(
            "INPUT.BANDS_WAVEVECTOR_COLUMNS",
            format!(
                "{} has {} columns, expected 2 (kx ky)",
                artifact_name,
                table.column_count()
            ),
        ));
    }

    Ok(table
        .into_rows()
        .into_iter()
        .map(|row| [row[0], row[1]])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{parse_table, parse_wavevectors};
    use crate::domain::BandPlotErrorCategory;

    #[test]
    fn parses_whitespace_delimited_rows() {
        let table = parse_table("eig_vals.txt", "1.0 2.5 -3.0\n\t4e-1   5.0\t6.0\n")
            .expect("table should parse");
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rows()[1], vec![0.4, 5.0, 6.0]);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let source = "# graphene k-path\n\n0.0 0.0\n  # Gamma point above\n1.0 0.0\n";
        let table = parse_table("k_vals.txt", source).expect("table should parse");
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        let error = parse_table("k_vals.txt", "0.0 0.0\n1.0 abc\n")
            .expect_err("non-numeric token should fail");
        assert_eq!(error.category(), BandPlotErrorCategory::InputValidationError);
        assert_eq!(error.code(), "INPUT.BANDS_TABLE_NUMERIC");
        assert!(error.message().contains("line 2"));
    }

    #[test]
    fn rejects_ragged_rows() {
        let error = parse_table("eig_vals.txt", "1.0 2.0\n3.0\n")
            .expect_err("ragged table should fail");
        assert_eq!(error.code(), "INPUT.BANDS_TABLE_SHAPE");
        assert!(error.message().contains("line 2"));
    }

    #[test]
    fn wavevectors_require_two_columns() {
        let table = parse_table("k_vals.txt", "1.0 2.0 3.0\n").expect("table should parse");
        let error = parse_wavevectors("k_vals.txt", table)
            .expect_err("three-column wavevector table should fail");
        assert_eq!(error.code(), "INPUT.BANDS_WAVEVECTOR_COLUMNS");
    }

    #[test]
    fn wavevectors_reject_empty_tables() {
        let table = parse_table("k_vals.txt", "# only comments\n").expect("table should parse");
        let error = parse_wavevectors("k_vals.txt", table).expect_err("empty table should fail");
        assert_eq!(error.code(), "INPUT.BANDS_EMPTY");
    }
}
