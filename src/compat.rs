use serde::Serialize;

use crate::models::enums::DataTypeFamily;
use crate::models::structs::Table;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnMismatch {
    pub position: usize,
    pub reference_column: String,
    pub reference_type: String,
    pub column: String,
    pub data_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableCompatibility {
    pub table: String,
    pub compatible: bool,
    pub column_count_mismatch: bool,
    pub mismatches: Vec<ColumnMismatch>,
}

/// Merge-compatibility flags for a set of tables being concatenated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConcatCompatibility {
    pub reference: Option<String>,
    pub compatible: bool,
    pub tables: Vec<TableCompatibility>,
}

/// Same family, or identical names for types we can't place in a family.
pub fn types_compatible(a: &str, b: &str) -> bool {
    let fa = DataTypeFamily::from_type_name(a);
    let fb = DataTypeFamily::from_type_name(b);
    match (fa, fb) {
        (DataTypeFamily::Other, DataTypeFamily::Other) => a.trim().eq_ignore_ascii_case(b.trim()),
        _ => fa == fb,
    }
}

/// Compare every table positionally against the first one.
pub fn check_concatenation(tables: &[Table]) -> ConcatCompatibility {
    let Some(reference) = tables.first() else {
        return ConcatCompatibility {
            reference: None,
            compatible: true,
            tables: Vec::new(),
        };
    };

    let results: Vec<TableCompatibility> = tables
        .iter()
        .map(|table| compare_with(reference, table))
        .collect();
    let compatible = results.iter().all(|r| r.compatible);
    if !compatible {
        log::debug!(
            "concatenation against '{}' is not merge-compatible",
            reference.name
        );
    }

    ConcatCompatibility {
        reference: Some(reference.name.clone()),
        compatible,
        tables: results,
    }
}

fn compare_with(reference: &Table, table: &Table) -> TableCompatibility {
    let column_count_mismatch = reference.columns.len() != table.columns.len();
    let mismatches: Vec<ColumnMismatch> = reference
        .columns
        .iter()
        .zip(&table.columns)
        .enumerate()
        .filter(|(_, (r, c))| !types_compatible(&r.data_type, &c.data_type))
        .map(|(position, (r, c))| ColumnMismatch {
            position,
            reference_column: r.name.clone(),
            reference_type: r.data_type.clone(),
            column: c.name.clone(),
            data_type: c.data_type.clone(),
        })
        .collect();

    TableCompatibility {
        table: table.name.clone(),
        compatible: !column_count_mismatch && mismatches.is_empty(),
        column_count_mismatch,
        mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_widths_are_compatible() {
        assert!(types_compatible("integer", "double"));
        assert!(types_compatible("BIGINT", "decimal(10,2)"));
        assert!(!types_compatible("integer", "varchar(20)"));
    }

    #[test]
    fn unknown_types_need_identical_names() {
        assert!(types_compatible("geometry", "GEOMETRY"));
        assert!(!types_compatible("geometry", "json"));
    }

    #[test]
    fn empty_input_is_trivially_compatible() {
        let report = check_concatenation(&[]);
        assert!(report.compatible);
        assert_eq!(report.reference, None);
    }
}
