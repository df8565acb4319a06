//! Edit operations given on the command line

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use listmaker::{Axis, TableController};

/// One edit, applied through the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// `set:R:C=VALUE`
    Set { row: usize, col: usize, value: String },
    /// `clear:R:C`
    Clear { row: usize, col: usize },
    /// `insert-row:P` / `insert-column:P`
    Insert { axis: Axis, position: usize },
    /// `remove-row:P` / `remove-column:P`
    Remove { axis: Axis, position: usize },
    /// `rename-row:P=LABEL` / `rename-column:P=LABEL`
    Rename {
        axis: Axis,
        position: usize,
        label: String,
    },
}

impl EditOp {
    pub fn apply(&self, controller: &mut TableController) -> listmaker::Result<()> {
        match self {
            EditOp::Set { row, col, value } => controller.set_cell(*row, *col, value.as_str()),
            EditOp::Clear { row, col } => controller.clear_cell(*row, *col),
            EditOp::Insert {
                axis: Axis::Row,
                position,
            } => controller.insert_row(*position),
            EditOp::Insert {
                axis: Axis::Column,
                position,
            } => controller.insert_column(*position),
            EditOp::Remove {
                axis: Axis::Row,
                position,
            } => controller.remove_row(*position),
            EditOp::Remove {
                axis: Axis::Column,
                position,
            } => controller.remove_column(*position),
            EditOp::Rename {
                axis,
                position,
                label,
            } => controller.rename_label(*axis, *position, label.as_str()),
        }
    }
}

impl FromStr for EditOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, args) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("expected `<kind>:<args>`, got `{s}`"))?;

        let op = match kind {
            "set" => {
                let (cell, value) = args
                    .split_once('=')
                    .ok_or_else(|| anyhow!("expected `set:ROW:COL=VALUE`"))?;
                let (row, col) = parse_cell(cell)?;
                EditOp::Set {
                    row,
                    col,
                    value: value.to_string(),
                }
            }
            "clear" => {
                let (row, col) = parse_cell(args)?;
                EditOp::Clear { row, col }
            }
            "insert-row" => EditOp::Insert {
                axis: Axis::Row,
                position: parse_position(args)?,
            },
            "insert-column" => EditOp::Insert {
                axis: Axis::Column,
                position: parse_position(args)?,
            },
            "remove-row" => EditOp::Remove {
                axis: Axis::Row,
                position: parse_position(args)?,
            },
            "remove-column" => EditOp::Remove {
                axis: Axis::Column,
                position: parse_position(args)?,
            },
            "rename-row" | "rename-column" => {
                let axis = if kind == "rename-row" {
                    Axis::Row
                } else {
                    Axis::Column
                };
                let (position, label) = args
                    .split_once('=')
                    .ok_or_else(|| anyhow!("expected `{kind}:POSITION=LABEL`"))?;
                EditOp::Rename {
                    axis,
                    position: parse_position(position)?,
                    label: label.to_string(),
                }
            }
            other => bail!("unknown edit `{other}`"),
        };
        Ok(op)
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Set { row, col, value } => write!(f, "set:{row}:{col}={value}"),
            EditOp::Clear { row, col } => write!(f, "clear:{row}:{col}"),
            EditOp::Insert { axis, position } => write!(f, "insert-{axis}:{position}"),
            EditOp::Remove { axis, position } => write!(f, "remove-{axis}:{position}"),
            EditOp::Rename {
                axis,
                position,
                label,
            } => write!(f, "rename-{axis}:{position}={label}"),
        }
    }
}

fn parse_position(text: &str) -> anyhow::Result<usize> {
    text.trim()
        .parse()
        .with_context(|| format!("invalid position `{text}`"))
}

fn parse_cell(text: &str) -> anyhow::Result<(usize, usize)> {
    let (row, col) = text
        .split_once(':')
        .ok_or_else(|| anyhow!("expected `ROW:COL`, got `{text}`"))?;
    Ok((parse_position(row)?, parse_position(col)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use listmaker::Table;
    use pretty_assertions::assert_eq;

    fn parse(s: &str) -> EditOp {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_each_kind() {
        assert_eq!(
            parse("set:1:2=hello"),
            EditOp::Set {
                row: 1,
                col: 2,
                value: "hello".into()
            }
        );
        assert_eq!(parse("clear:0:3"), EditOp::Clear { row: 0, col: 3 });
        assert_eq!(
            parse("insert-row:4"),
            EditOp::Insert {
                axis: Axis::Row,
                position: 4
            }
        );
        assert_eq!(
            parse("remove-column:0"),
            EditOp::Remove {
                axis: Axis::Column,
                position: 0
            }
        );
        assert_eq!(
            parse("rename-column:1=Price"),
            EditOp::Rename {
                axis: Axis::Column,
                position: 1,
                label: "Price".into()
            }
        );
    }

    #[test]
    fn test_value_may_contain_separators() {
        assert_eq!(
            parse("set:0:0=a=b:c"),
            EditOp::Set {
                row: 0,
                col: 0,
                value: "a=b:c".into()
            }
        );
        assert_eq!(
            parse("set:0:0="),
            EditOp::Set {
                row: 0,
                col: 0,
                value: String::new()
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("insert-row".parse::<EditOp>().is_err());
        assert!("insert-row:x".parse::<EditOp>().is_err());
        assert!("set:1=foo".parse::<EditOp>().is_err());
        assert!("clear:1".parse::<EditOp>().is_err());
        assert!("rename-row:1".parse::<EditOp>().is_err());
        assert!("sort:0".parse::<EditOp>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for text in [
            "set:1:2=x",
            "clear:0:0",
            "insert-row:3",
            "remove-column:1",
            "rename-row:0=first",
        ] {
            assert_eq!(parse(text).to_string(), text);
        }
    }

    #[test]
    fn test_apply_in_order() {
        let mut controller = TableController::with_table(Table::with_columns(["A", "B"]));
        for op in ["insert-row:0", "set:0:1=x", "insert-column:0", "rename-column:0=Z"] {
            parse(op).apply(&mut controller).unwrap();
        }

        let table = controller.table();
        assert_eq!(table.column_labels(), &["Z", "A", "B"]);
        assert_eq!(table.cell_at(0, 2).unwrap().as_str(), Some("x"));
        assert!(parse("remove-row:5").apply(&mut controller).is_err());
    }
}
