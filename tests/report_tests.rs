use composer_layout::cli::{build_report, render_report};
use composer_layout::compat::check_concatenation;
use composer_layout::models::enums::{DataTypeFamily, TableKind};
use composer_layout::{Column, LayoutError, LayoutInput, Table};

const DOCUMENT: &str = r#"{
    "tables": [
        {
            "name": "orders",
            "kind": "join",
            "publicSelection": [
                {"name": "note", "dataType": "string"},
                {"name": "customer_id", "dataType": "integer"},
                {"name": "id", "dataType": "integer"}
            ]
        },
        {
            "name": "customers",
            "columns": [
                {"name": "name", "alias": "Customer", "data_type": "string"},
                {"name": "id", "data_type": "integer"}
            ]
        }
    ],
    "operatorGroups": [
        {
            "leftTable": "orders",
            "rightTable": "customers",
            "pairs": [{"left": "customer_id", "right": "id"}]
        }
    ]
}"#;

fn typed(name: &str, cols: &[(&str, &str)]) -> Table {
    Table::new(name, cols.iter().map(|(c, t)| Column::new(*c, *t)).collect())
        .with_kind(TableKind::Concatenation)
}

#[test]
fn camel_case_document_is_accepted() {
    let input = LayoutInput::from_json(DOCUMENT).expect("parse");
    assert_eq!(input.tables.len(), 2);
    assert_eq!(input.tables[0].kind, TableKind::Join);
    assert_eq!(input.tables[1].kind, TableKind::Plain);
    assert_eq!(input.tables[1].columns[0].label(), "Customer");
    assert_eq!(input.operator_groups[0].right_table, "customers");
    input.validate().expect("valid");
}

#[test]
fn report_contains_layouts_and_no_concatenation() {
    let input = LayoutInput::from_json(DOCUMENT).unwrap();
    let report = build_report(&input);
    assert!(report.concatenation.is_none());
    assert_eq!(report.layouts[0].column_names(), ["customer_id", "id", "note"]);
    assert_eq!(report.layouts[1].column_names(), ["id", "name"]);

    let json = render_report(&report, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["layouts"][1]["table"], "customers");
    assert_eq!(value["layouts"][1]["columns"][1]["alias"], "Customer");
    assert!(value["concatenation"].is_null());
}

#[test]
fn malformed_document_is_a_json_error() {
    let err = LayoutInput::from_json("{\"tables\": [{\"columns\": []}]}").unwrap_err();
    assert!(matches!(err, LayoutError::Json(_)));
}

#[test]
fn validation_rejects_duplicate_columns() {
    let input = LayoutInput {
        tables: vec![Table::new(
            "T",
            vec![Column::new("a", "string"), Column::new("a", "integer")],
        )],
        operator_groups: Vec::new(),
    };
    match input.validate() {
        Err(LayoutError::DuplicateColumn { table, column }) => {
            assert_eq!(table, "T");
            assert_eq!(column, "a");
        }
        other => panic!("expected duplicate column error, got {:?}", other),
    }
}

#[test]
fn validation_rejects_blank_table_name() {
    let input = LayoutInput {
        tables: vec![Table::new("  ", Vec::new())],
        operator_groups: Vec::new(),
    };
    assert!(matches!(input.validate(), Err(LayoutError::EmptyTableName)));
}

#[test]
fn type_families() {
    assert_eq!(DataTypeFamily::from_type_name("VARCHAR(255)"), DataTypeFamily::String);
    assert_eq!(DataTypeFamily::from_type_name("timeInstant"), DataTypeFamily::Temporal);
    assert_eq!(DataTypeFamily::from_type_name("bit"), DataTypeFamily::Boolean);
    assert_eq!(DataTypeFamily::from_type_name("bytea"), DataTypeFamily::Binary);
    assert_eq!(DataTypeFamily::from_type_name("uuid"), DataTypeFamily::Other);
}

#[test]
fn concatenation_of_matching_schemas_is_compatible() {
    let tables = vec![
        typed("q1", &[("id", "integer"), ("name", "string")]),
        typed("q2", &[("key", "bigint"), ("label", "varchar(40)")]),
    ];
    let report = check_concatenation(&tables);
    assert!(report.compatible);
    assert_eq!(report.reference.as_deref(), Some("q1"));
    assert!(report.tables.iter().all(|t| t.compatible));
}

#[test]
fn concatenation_flags_count_and_type_mismatches() {
    let tables = vec![
        typed("q1", &[("id", "integer"), ("name", "string")]),
        typed("q2", &[("id", "integer")]),
        typed("q3", &[("id", "date"), ("name", "string")]),
    ];
    let report = check_concatenation(&tables);
    assert!(!report.compatible);

    let q2 = &report.tables[1];
    assert!(q2.column_count_mismatch);
    assert!(q2.mismatches.is_empty());
    assert!(!q2.compatible);

    let q3 = &report.tables[2];
    assert!(!q3.column_count_mismatch);
    assert_eq!(q3.mismatches.len(), 1);
    assert_eq!(q3.mismatches[0].position, 0);
    assert_eq!(q3.mismatches[0].data_type, "date");
}

#[test]
fn report_checks_only_concatenated_tables() {
    let input = LayoutInput {
        tables: vec![
            typed("q1", &[("id", "integer")]),
            Table::new("plain", vec![Column::new("x", "string"), Column::new("y", "string")]),
            typed("q2", &[("id", "string")]),
        ],
        operator_groups: Vec::new(),
    };
    let report = build_report(&input);
    let concat = report.concatenation.expect("concatenation report");
    assert_eq!(concat.tables.len(), 2);
    assert!(!concat.compatible);
    assert_eq!(report.layouts.len(), 3);
}
