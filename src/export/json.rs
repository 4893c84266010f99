use std::io::Write;

use crate::error::Result;
use crate::model::RenderNode;

use super::Exporter;

/// Serializes the render tree itself, for hosts that do their own layout.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonExporter {
    /// Pretty-printed output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line output.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, tree: &RenderNode, writer: &mut W) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, tree)?;
        } else {
            serde_json::to_writer(&mut *writer, tree)?;
        }
        writer.write_all(b"\n")?;
        Ok(())
    }
}
