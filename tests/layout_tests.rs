mod common;

use common::fixtures::{labelled_row, sql_table};
use common::{TestResult, assert_uniform_width, init_logger};
use textframe::{
    Alignment, BlockBuilder, CellBuilder, DividerBuilder, LayoutError, Render, RowBuilder, Size,
    TableBuilder,
};

#[test]
fn test_query_result_table() -> TestResult {
    init_logger();
    let table = sql_table().finish()?;

    assert_eq!(table.column_widths(), [4, 16, 13, 9, 10, 9]);
    assert_eq!(table.size(), Size::new(68, 9));

    let lines = table.lines();
    assert_uniform_width(&lines[..8], 68);
    assert_eq!(lines[0], format!("{} SECRET_AGENT {}", "~".repeat(27), "~".repeat(27)));
    assert!(lines[1].starts_with(&format!("+----+{}+", "-".repeat(16))));
    assert!(lines[2].starts_with(&format!("| ID | NAME{}|", " ".repeat(11))));
    assert!(lines[3].starts_with(&format!("+====+{}+", "=".repeat(16))));
    assert!(lines[4].starts_with(&format!("| 1  | James Bond{}|", " ".repeat(5))));
    assert!(lines[5].ends_with(&format!("| Defected | UK{}|", " ".repeat(6))));
    assert_eq!(lines[7], lines[1]);
    assert_eq!(lines[8], "3 rows selected");
    Ok(())
}

#[test]
fn test_footer_is_separated_like_the_header() -> TestResult {
    let table = TableBuilder::new()
        .add_header([RowBuilder::from_texts(["item", "qty"])])
        .add_body([labelled_row("apple", "3"), labelled_row("pear", "12")])
        .add_footer([labelled_row("total", "15")])
        .finish()?;

    assert_eq!(
        table.lines(),
        [
            "+-----+---+",
            "|item |qty|",
            "+=====+===+",
            "|apple|3  |",
            "|pear |12 |",
            "+=====+===+",
            "|total|15 |",
            "+-----+---+",
        ]
    );
    assert_eq!(table.footer(), ["|total|15 |"]);
    Ok(())
}

#[test]
fn test_multiline_cells_stretch_their_row() -> TestResult {
    let row = RowBuilder::from_cells([
        CellBuilder::from_text("one\ntwo"),
        CellBuilder::from_text("x").with_alignment(Alignment::End),
    ])
    .with_total_width(7)?
    .finish()?;

    assert_eq!(row.lines(), ["one|  x", "two|   "]);
    assert_eq!(row.column_widths(), [3, 3]);
    Ok(())
}

#[test]
fn test_block_wraps_table_output() -> TestResult {
    let table = TableBuilder::from_body([RowBuilder::from_texts(["a", "b"])]).finish()?;
    let block = BlockBuilder::from_lines(table.lines())
        .with_border('#')?
        .add_caption(["fig1"])
        .finish()?;

    assert_eq!(
        block.lines(),
        ["#######", "#+-+-+#", "#|a|b|#", "#+-+-+#", "#######", "fig1"]
    );
    Ok(())
}

#[test]
fn test_divider_matches_row_columns() -> TestResult {
    let row = RowBuilder::from_texts(["abc", "de"]).finish()?;
    let divider = DividerBuilder::new()
        .with_column_widths(row.column_widths())
        .finish()?;

    assert_eq!(divider.line(), "---+--");
    assert_eq!(divider.size().width, row.size().width);
    Ok(())
}

#[test]
fn test_content_is_never_truncated() {
    let result = CellBuilder::from_text("too long")
        .with_total_size(1, 3)
        .and_then(|cell| cell.finish());
    assert!(matches!(
        result,
        Err(LayoutError::ContentOverflow { required: 8, supplied: 3, .. })
    ));
}
