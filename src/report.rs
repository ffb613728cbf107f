//! Parts report: shopping lines for the terminal and a JSON document.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{BrickError, Result};
use crate::mosaic::{GridSize, PartsEntry, PartsList};
use crate::output::plural;
use crate::types::{Baseplate, BrickColour, Finish, PieceType};

const CATALOG_ITEM_URL: &str = "https://www.bricklink.com/v2/catalog/catalogitem.page";

/// Catalog page for buying `quantity` of a piece in a colour.
///
/// Only numeric colour ids exist in the external catalog, so any other id
/// yields `None`.
pub fn catalog_url(piece_type: &PieceType, colour_id: &str, quantity: usize) -> Option<String> {
    if colour_id.is_empty() || !colour_id.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let options = format!(
        "{{%22color%22:{id},%22minqty%22:%22{qty}%22,%22iconly%22:0}}",
        id = colour_id,
        qty = quantity
    );
    Some(format!(
        "{base}?P={part}&C={id}#T=S&C={id}&O={options}",
        base = CATALOG_ITEM_URL,
        part = piece_type.reference(),
        id = colour_id,
        options = options,
    ))
}

/// A finished parts list with the grid it came from.
#[derive(Debug, Clone)]
pub struct PartsReport<'a> {
    grid: GridSize,
    baseplate: Option<Baseplate>,
    baseplate_colour: Option<Arc<BrickColour>>,
    parts: &'a PartsList,
}

impl<'a> PartsReport<'a> {
    pub fn new(grid: GridSize, parts: &'a PartsList) -> Self {
        Self {
            grid,
            baseplate: None,
            baseplate_colour: None,
            parts,
        }
    }

    pub fn with_baseplate(mut self, baseplate: Baseplate) -> Self {
        self.baseplate = Some(baseplate);
        self
    }

    /// Catalog colour of the baseplate, usually White.
    pub fn with_baseplate_colour(mut self, colour: Arc<BrickColour>) -> Self {
        self.baseplate_colour = Some(colour);
        self
    }

    pub fn parts(&self) -> &'a PartsList {
        self.parts
    }

    /// One line per parts entry, most-used first.
    pub fn line(entry: &PartsEntry) -> String {
        format!(
            "You need {} of {} (ref: {}, color: {}, size: {})",
            plural(entry.count, "piece", "pieces"),
            entry.colour.name(),
            entry.piece_type,
            entry.colour.id(),
            entry.size,
        )
    }

    pub fn baseplate_line(&self) -> Option<String> {
        self.baseplate.map(|plate| match &self.baseplate_colour {
            Some(colour) => format!(
                "You need 1 baseplate of {} (ref: {}, color: {}, size: {})",
                colour.name(),
                plate.piece_type(),
                colour.id(),
                plate.size()
            ),
            None => format!(
                "You need 1 baseplate (ref: {}, size: {})",
                plate.piece_type(),
                plate.size()
            ),
        })
    }

    pub fn lines(&self) -> Vec<String> {
        self.parts
            .iter()
            .map(Self::line)
            .chain(self.baseplate_line())
            .collect()
    }

    pub fn to_text(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }

    pub fn to_document(&self) -> ReportDocument {
        ReportDocument {
            grid: ReportGrid {
                width: self.grid.width,
                height: self.grid.height,
            },
            baseplate: self.baseplate.map(|plate| {
                let colour = self.baseplate_colour.as_deref();
                ReportBaseplate {
                    reference: plate.piece_type().to_string(),
                    size: plate.size().to_string(),
                    colour_id: colour.map(|c| c.id().to_string()),
                    colour_name: colour.map(|c| c.name().to_string()),
                    hex: colour.map(|c| c.rgb().to_hex()),
                    url: colour.and_then(|c| catalog_url(&plate.piece_type(), c.id(), 1)),
                }
            }),
            total: self.parts.total(),
            parts: self
                .parts
                .iter()
                .map(|entry| ReportPart {
                    piece_type: entry.piece_type.to_string(),
                    colour_id: entry.colour.id().to_string(),
                    colour_name: entry.colour.name().to_string(),
                    hex: entry.colour.rgb().to_hex(),
                    finish: entry.colour.finish(),
                    size: entry.size.to_string(),
                    count: entry.count,
                    url: catalog_url(&entry.piece_type, entry.colour.id(), entry.count),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_document()).map_err(|e| BrickError::Parse {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })
    }
}

/// Serialized form of a [`PartsReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub grid: ReportGrid,
    pub baseplate: Option<ReportBaseplate>,
    pub total: usize,
    pub parts: Vec<ReportPart>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportGrid {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportBaseplate {
    pub reference: String,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPart {
    pub piece_type: String,
    pub colour_id: String,
    pub colour_name: String,
    pub hex: String,
    pub finish: Finish,
    pub size: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
