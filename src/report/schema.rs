use serde::{Deserialize, Serialize};

/// Which historical rule-set variant a report follows.
///
/// The filing format evolved from the MOSS scheme into its OSS
/// successor. The variants differ in header tag, row termination, and
/// which charge amount feeds the report; selecting one here replaces
/// scattered per-site conditionals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportSchema {
    /// Legacy MOSS filing: settled net amounts, bare-newline rows.
    Moss,
    /// Current OSS filing: gross charge amounts converted through the
    /// exchange-rate table, CRLF rows.
    #[default]
    Oss,
}

impl ReportSchema {
    /// Fixed schema tag carried in the header row.
    pub fn header_tag(self) -> &'static str {
        match self {
            Self::Moss => "MOSS_001",
            Self::Oss => "OSS_001",
        }
    }

    /// Row terminator. The dialect requires a trailing column separator
    /// before the line break, so it is part of the sequence.
    pub fn row_separator(self) -> &'static str {
        match self {
            Self::Moss => ";\n",
            Self::Oss => ";\r\n",
        }
    }

    /// Column separator.
    pub fn column_separator(self) -> char {
        ';'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_schema_is_default() {
        assert_eq!(ReportSchema::default(), ReportSchema::Oss);
    }

    #[test]
    fn dialect_per_schema() {
        assert_eq!(ReportSchema::Moss.header_tag(), "MOSS_001");
        assert_eq!(ReportSchema::Moss.row_separator(), ";\n");
        assert_eq!(ReportSchema::Oss.header_tag(), "OSS_001");
        assert_eq!(ReportSchema::Oss.row_separator(), ";\r\n");
    }
}
