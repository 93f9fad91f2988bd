use ctrlmap_input::Convention;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use std::{
    io::{Read, Write},
    path::PathBuf,
    sync::LazyLock,
};
use strum::{Display, EnumIter, EnumString};

cfg_if::cfg_if! {
    if #[cfg(miri)] {
        pub static STORAGE_DIRECTORY: LazyLock<PathBuf> = LazyLock::new(PathBuf::default);
    } else if #[cfg(any(target_family = "unix", target_os = "windows"))] {
        pub static STORAGE_DIRECTORY: LazyLock<PathBuf> = LazyLock::new(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ctrlmap")
        });
    } else {
        compile_error!("Unsupported target");
    }
}

/// Config location
pub static ENVIRONMENT_LOCATION: LazyLock<PathBuf> =
    LazyLock::new(|| STORAGE_DIRECTORY.join("config.ron"));

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    EnumIter,
    Display,
    EnumString,
    PartialEq,
    Eq,
    Default,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
/// Which set of sources control data is resolved from
pub enum ResolverMode {
    #[default]
    /// Primary source plus relationship database, with region, clone and hardware fallbacks
    Exhaustive,
    /// Single pre-merged source with clone payloads and cabinet defaults
    Fast,
}

#[serde_inline_default]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// Where sources live, where configs go and how things are shown
pub struct Environment {
    #[serde(default)]
    /// Resolver used when none is forced on the command line
    pub mode: ResolverMode,
    #[serde(default)]
    /// Controller naming convention used for display
    pub convention: Convention,
    #[serde(default)]
    /// Primary control data, used in exhaustive mode
    pub primary_source: PrimarySource,
    #[serde(default)]
    /// Clone/parent database, used in exhaustive mode
    pub relationship_database: RelationshipDatabase,
    #[serde(default)]
    /// Pre-merged control data, used in fast mode
    pub fast_source: FastSource,
    #[serde(default)]
    /// Template every generated config is rendered from
    pub template: TemplateLocation,
    #[serde(default)]
    /// Directory generated configs are written into
    pub output_directory: OutputDirectory,
    #[serde(default)]
    /// Directory holding the emulator's per ROM binding documents
    pub bindings_directory: BindingsDirectory,
    #[serde(default)]
    /// Directory scanned for romnames when none are given
    pub rom_directory: RomDirectory,
    #[serde_inline_default("cfg".to_string())]
    /// Extension of generated configs
    pub output_extension: String,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            mode: ResolverMode::default(),
            convention: Convention::default(),
            primary_source: PrimarySource::default(),
            relationship_database: RelationshipDatabase::default(),
            fast_source: FastSource::default(),
            template: TemplateLocation::default(),
            output_directory: OutputDirectory::default(),
            bindings_directory: BindingsDirectory::default(),
            rom_directory: RomDirectory::default(),
            output_extension: "cfg".to_string(),
        }
    }
}

impl Environment {
    pub fn save(&self, writer: impl Write) -> Result<(), ron::Error> {
        ron::Options::default().to_io_writer_pretty(
            writer,
            self,
            PrettyConfig::new().struct_names(false),
        )
    }

    pub fn load(reader: impl Read) -> Result<Self, ron::de::SpannedError> {
        ron::de::from_reader(reader)
    }

    /// Binding document the emulator keeps for a ROM
    pub fn bindings_path(&self, romname: &str) -> PathBuf {
        self.bindings_directory.0.join(format!("{romname}.cfg"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrimarySource(pub PathBuf);

impl Default for PrimarySource {
    fn default() -> Self {
        Self(STORAGE_DIRECTORY.join("controls.json"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDatabase(pub PathBuf);

impl Default for RelationshipDatabase {
    fn default() -> Self {
        Self(STORAGE_DIRECTORY.join("mame.xml"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FastSource(pub PathBuf);

impl Default for FastSource {
    fn default() -> Self {
        Self(STORAGE_DIRECTORY.join("gamedata.json"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TemplateLocation(pub PathBuf);

impl Default for TemplateLocation {
    fn default() -> Self {
        Self(STORAGE_DIRECTORY.join("template.cfg"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputDirectory(pub PathBuf);

impl Default for OutputDirectory {
    fn default() -> Self {
        Self(STORAGE_DIRECTORY.join("generated"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BindingsDirectory(pub PathBuf);

impl Default for BindingsDirectory {
    fn default() -> Self {
        Self(STORAGE_DIRECTORY.join("cfg"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RomDirectory(pub PathBuf);

impl Default for RomDirectory {
    fn default() -> Self {
        Self(STORAGE_DIRECTORY.join("roms"))
    }
}
