use serde_json::{Value, json};
use textframe::{CellBuilder, RowBuilder, TableBuilder};

/// The sample query result used throughout the table tests.
pub fn sql_table() -> TableBuilder {
    TableBuilder::new()
        .add_title(["SECRET_AGENT"])
        .add_header([RowBuilder::from_texts([
            "ID",
            "NAME",
            "CODE_NAME",
            "LICENSE",
            "STATUS",
            "COUNTRY",
        ])])
        .add_body([
            RowBuilder::from_texts(["1", "James Bond", "007", "To Kill", "Active", "UK"]),
            RowBuilder::from_texts(["2", "Alec Trevelyan", "006", "To Kill", "Defected", "UK"]),
            RowBuilder::from_texts(["3", "Felix Leiter", "CIA Liaison", "None", "Active", "USA"]),
        ])
        .add_caption(["3 rows selected"])
        .with_padding(1, 0)
}

pub fn labelled_row(label: &str, value: &str) -> RowBuilder {
    RowBuilder::from_cells([CellBuilder::from_text(label), CellBuilder::from_text(value)])
}

/// A mixed document file holding several kinds of frames.
pub fn mixed_documents() -> Value {
    json!([
        { "type": "divider", "column-widths": [3, 2] },
        { "type": "block", "lines": ["Texty"], "style": { "border": "#" } },
        {
            "type": "table",
            "header": [["k", "v"]],
            "body": [["a", "1"], ["b", "22"]]
        }
    ])
}
