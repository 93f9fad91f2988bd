use quick_xml::{Reader, events::Event};
use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Parent and hardware links of one machine
pub struct Relationship {
    cloneof: Option<String>,
    romof: Option<String>,
}

impl Relationship {
    pub fn new(cloneof: Option<&str>, romof: Option<&str>) -> Self {
        Self {
            cloneof: non_empty(cloneof),
            romof: non_empty(romof),
        }
    }

    /// Parent set this machine is a clone of
    pub fn cloneof(&self) -> Option<&str> {
        self.cloneof.as_deref()
    }

    /// Set (often a hardware platform or BIOS) this machine borrows ROMs from
    pub fn romof(&self) -> Option<&str> {
        self.romof.as_deref()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

#[derive(Debug, Clone, Default)]
/// Romname -> relationship, from a MAME `-listxml` or logiqx style database
pub struct RelationshipTable(HashMap<String, Relationship>);

impl RelationshipTable {
    pub fn get(&self, romname: &str) -> Option<&Relationship> {
        self.0.get(romname)
    }

    pub fn insert(&mut self, romname: impl Into<String>, relationship: Relationship) {
        self.0.insert(romname.into(), relationship);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Load the database at `path`
    ///
    /// This never fails, a missing file leaves the table empty and a malformed one keeps
    /// whatever was read before the damage
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(
                    "Relationship database \"{}\" unavailable, clone lookups disabled: {}",
                    path.display(),
                    err
                );
                return Self::default();
            }
        };

        let table = Self::parse(BufReader::new(file));

        tracing::info!(
            "Loaded {} relationship entries from \"{}\"",
            table.len(),
            path.display()
        );

        table
    }

    /// Stream through the document, only machine elements are kept so the document itself is never held in memory
    pub fn parse(reader: impl BufRead) -> Self {
        let mut reader = Reader::from_reader(reader);
        reader.config_mut().trim_text(true);

        let mut table = Self::default();
        let mut buffer = Vec::new();

        loop {
            match reader.read_event_into(&mut buffer) {
                Ok(Event::Start(element)) | Ok(Event::Empty(element))
                    if matches!(element.name().as_ref(), b"machine" | b"game") =>
                {
                    let mut name = None;
                    let mut cloneof = None;
                    let mut romof = None;

                    for attribute in element.attributes().flatten() {
                        let Ok(value) = attribute.unescape_value() else {
                            continue;
                        };
                        let value = value.into_owned();

                        match attribute.key.as_ref() {
                            b"name" => name = Some(value),
                            b"cloneof" => cloneof = Some(value),
                            b"romof" => romof = Some(value),
                            _ => {}
                        }
                    }

                    if let Some(name) = name.filter(|name| !name.trim().is_empty()) {
                        table.insert(
                            name.trim().to_lowercase(),
                            Relationship::new(cloneof.as_deref(), romof.as_deref()),
                        );
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(
                        "Relationship database is malformed at byte {}, keeping {} entries read so far: {}",
                        reader.buffer_position(),
                        table.len(),
                        err
                    );
                    break;
                }
            }

            buffer.clear();
        }

        table
    }
}
