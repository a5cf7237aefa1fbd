use serde::{Deserialize, Serialize};

/// Kind of table shown in the composer. The layout core only needs a table's
/// name and public selection, so the kind is carried through untouched.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    #[default]
    Plain,
    Join,
    #[serde(alias = "concatenated")]
    Concatenation,
    #[serde(alias = "mergejoin", alias = "merge-join")]
    MergeJoin,
    Mirror,
}

/// Bucket a column lands in after classification against the operator groups.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColumnRole {
    OutOnly,
    InOut,
    InOnly,
    NonJoin,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum DataTypeFamily {
    String,
    Numeric,
    Temporal,
    Boolean,
    Binary,
    Other,
}

impl DataTypeFamily {
    /// Map a server data type name (`varchar(255)`, `BIGINT`, `timeInstant`...) to its family.
    pub fn from_type_name(type_name: &str) -> Self {
        let base = type_name
            .split('(')
            .next()
            .unwrap_or(type_name)
            .trim()
            .to_ascii_lowercase();
        match base.as_str() {
            "string" | "varchar" | "char" | "character" | "text" | "nvarchar" | "nchar"
            | "longtext" | "mediumtext" | "tinytext" | "clob" => DataTypeFamily::String,
            "integer" | "int" | "bigint" | "smallint" | "tinyint" | "mediumint" | "byte"
            | "short" | "long" | "float" | "double" | "real" | "decimal" | "numeric" => {
                DataTypeFamily::Numeric
            }
            "date" | "time" | "timestamp" | "datetime" | "timeinstant" => DataTypeFamily::Temporal,
            "boolean" | "bool" | "bit" => DataTypeFamily::Boolean,
            "blob" | "binary" | "varbinary" | "bytea" => DataTypeFamily::Binary,
            _ => DataTypeFamily::Other,
        }
    }
}
