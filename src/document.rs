//! Declarative JSON description of a frame.
//!
//! A document names its kind in a `type` field and mirrors the builder
//! setters of that kind:
//!
//! ```json
//! {
//!   "type": "table",
//!   "title": ["SECRET_AGENT"],
//!   "header": [["#", "NAME"]],
//!   "body": [["1", "Bond"], { "cells": ["2", "Trevelyan"], "alignment": "end" }],
//!   "padding": { "horizontal": 1 }
//! }
//! ```
//!
//! Rows may be written as a plain array of texts or as a row object; cells
//! may be a plain text or a cell object.

use crate::error::FrameError;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use textframe_layout::{
    Block, BlockBuilder, Cell, CellBuilder, Divider, DividerBuilder, LayoutError, Render, Row,
    RowBuilder, Table, TableBuilder,
};
use textframe_style::{BlockStyle, CellStyle, DividerStyle, RowStyle, TableStyle};
use textframe_types::{Alignment, Size};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Document {
    Cell(CellSpec),
    Row(RowSpec),
    Divider(DividerSpec),
    Block(BlockSpec),
    Table(TableSpec),
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Padding {
    pub horizontal: usize,
    pub vertical: usize,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct CellSpec {
    pub lines: Vec<String>,
    pub alignment: Alignment,
    pub padding: Padding,
    pub style: CellStyle,
    pub size: Option<Size>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CellEntry {
    Text(String),
    Cell(CellSpec),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct RowSpec {
    pub cells: Vec<CellEntry>,
    pub alignment: Option<Alignment>,
    pub padding: Option<Padding>,
    pub style: RowStyle,
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub column_widths: Option<Vec<usize>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RowEntry {
    Texts(Vec<String>),
    Row(RowSpec),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct DividerSpec {
    pub column_widths: Vec<usize>,
    pub width: Option<usize>,
    pub style: DividerStyle,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct BlockSpec {
    pub lines: Vec<String>,
    pub title: Vec<String>,
    pub caption: Vec<String>,
    pub alignment: Alignment,
    pub padding: Padding,
    pub style: BlockStyle,
    pub size: Option<Size>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct TableSpec {
    pub title: Vec<String>,
    pub header: Vec<RowEntry>,
    pub body: Vec<RowEntry>,
    pub footer: Vec<RowEntry>,
    pub caption: Vec<String>,
    pub alignment: Option<Alignment>,
    pub padding: Option<Padding>,
    pub style: TableStyle,
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FrameError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parses either a single document or an array of documents.
    pub fn load_all(json: &str) -> Result<Vec<Self>, FrameError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(FrameError::from))
                .collect(),
            value => Ok(vec![serde_json::from_value(value)?]),
        }
    }

    pub fn render(&self) -> Result<Frame, LayoutError> {
        let frame = match self {
            Document::Cell(spec) => Frame::Cell(spec.builder()?.finish()?),
            Document::Row(spec) => Frame::Row(spec.builder()?.finish()?),
            Document::Divider(spec) => Frame::Divider(spec.builder()?.finish()?),
            Document::Block(spec) => Frame::Block(spec.builder()?.finish()?),
            Document::Table(spec) => Frame::Table(spec.builder()?.finish()?),
        };
        log::debug!("rendered {} document into {} lines", self.kind(), frame.lines().len());
        Ok(frame)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Document::Cell(_) => "cell",
            Document::Row(_) => "row",
            Document::Divider(_) => "divider",
            Document::Block(_) => "block",
            Document::Table(_) => "table",
        }
    }
}

impl CellSpec {
    pub fn builder(&self) -> Result<CellBuilder, LayoutError> {
        let builder = CellBuilder::from_lines(&self.lines)
            .with_alignment(self.alignment)
            .with_padding(self.padding.horizontal, self.padding.vertical)
            .with_style(self.style);
        match self.size {
            Some(size) => builder.with_total_size(size.height, size.width),
            None => Ok(builder),
        }
    }
}

impl CellEntry {
    pub fn builder(&self) -> Result<CellBuilder, LayoutError> {
        match self {
            CellEntry::Text(text) => Ok(CellBuilder::from_text(text)),
            CellEntry::Cell(spec) => spec.builder(),
        }
    }
}

impl RowSpec {
    pub fn builder(&self) -> Result<RowBuilder, LayoutError> {
        let cells = self
            .cells
            .iter()
            .map(CellEntry::builder)
            .collect::<Result<Vec<_>, _>>()?;
        let mut builder = RowBuilder::from_cells(cells).with_style(self.style);

        if let Some(align) = self.alignment {
            builder = builder.with_alignment(align);
        }
        if let Some(padding) = self.padding {
            builder = builder.with_padding(padding.horizontal, padding.vertical);
        }
        if let Some(height) = self.height {
            builder = builder.with_total_height(height)?;
        }
        if let Some(width) = self.width {
            builder = builder.with_total_width(width)?;
        }
        if let Some(widths) = &self.column_widths {
            builder = builder.with_column_widths(widths.as_slice())?;
        }
        Ok(builder)
    }
}

impl RowEntry {
    pub fn builder(&self) -> Result<RowBuilder, LayoutError> {
        match self {
            RowEntry::Texts(texts) => Ok(RowBuilder::from_texts(texts)),
            RowEntry::Row(spec) => spec.builder(),
        }
    }
}

impl DividerSpec {
    pub fn builder(&self) -> Result<DividerBuilder, LayoutError> {
        let builder = DividerBuilder::new()
            .with_column_widths(self.column_widths.as_slice())
            .with_style(self.style);
        match self.width {
            Some(width) => builder.with_total_width(width),
            None => Ok(builder),
        }
    }
}

impl BlockSpec {
    pub fn builder(&self) -> Result<BlockBuilder, LayoutError> {
        let builder = BlockBuilder::from_lines(&self.lines)
            .with_style(self.style)
            .add_title(&self.title)
            .add_caption(&self.caption)
            .with_alignment(self.alignment)
            .with_padding(self.padding.horizontal, self.padding.vertical);
        match self.size {
            Some(size) => builder.with_total_size(size.height, size.width),
            None => Ok(builder),
        }
    }
}

impl TableSpec {
    pub fn builder(&self) -> Result<TableBuilder, LayoutError> {
        let rows = |entries: &[RowEntry]| {
            entries
                .iter()
                .map(RowEntry::builder)
                .collect::<Result<Vec<_>, _>>()
        };

        let mut builder = TableBuilder::new()
            .with_style(self.style)
            .add_title(&self.title)
            .add_header(rows(&self.header)?)
            .add_body(rows(&self.body)?)
            .add_footer(rows(&self.footer)?)
            .add_caption(&self.caption);

        if let Some(align) = self.alignment {
            builder = builder.with_alignment(align);
        }
        if let Some(padding) = self.padding {
            builder = builder.with_padding(padding.horizontal, padding.vertical);
        }
        Ok(builder)
    }
}

/// A finalized frame of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Cell(Cell),
    Row(Row),
    Divider(Divider),
    Block(Block),
    Table(Table),
}

impl Render for Frame {
    fn lines(&self) -> &[String] {
        match self {
            Frame::Cell(cell) => cell.lines(),
            Frame::Row(row) => row.lines(),
            Frame::Divider(divider) => divider.lines(),
            Frame::Block(block) => block.lines(),
            Frame::Table(table) => table.lines(),
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
