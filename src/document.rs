use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use gridfrier::{CellRenderer, Table, TableRenderer};
use serde::Deserialize;

use crate::error::Error;

/// A TOML file of `[[table]]` entries, rendered one after another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Document {
    #[serde(rename = "table", default)]
    pub tables: Vec<Table>,
}

impl Document {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let document: Document = toml::from_str(text)?;
        log::info!("parsed {} tables", document.tables.len());
        Ok(document)
    }

    /// Read a whole document. Blank input is a usage error, not an empty document.
    pub fn read<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        log::debug!("read {} bytes", text.len());
        if text.trim().is_empty() {
            return Err(Error::Usage(Some("no input or empty")));
        }
        Self::parse(&text)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        Self::read(BufReader::new(File::open(path)?))
    }

    /// Render every table, separated by a blank line.
    ///
    /// Stops at the first table that fails, naming it by position.
    pub fn render<R: CellRenderer>(&self, renderer: &TableRenderer<R>) -> Result<String, Error> {
        let mut rendered = Vec::with_capacity(self.tables.len());
        for (index, table) in self.tables.iter().enumerate() {
            let lines = renderer
                .render(table)
                .map_err(|err| Error::Render(index, err))?;
            rendered.push(lines.join("\n"));
        }
        Ok(rendered.join("\n\n"))
    }
}
