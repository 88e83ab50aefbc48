use crate::imports::*;
use enum_dispatch::enum_dispatch;

pub trait SerdeAPI: Serialize + for<'a> Deserialize<'a> {
    /// runs any initialization steps that may be needed.
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Save current data structure to file. Method adaptively calls serialization methods
    /// dependent on the suffix of the file given.
    ///
    /// # Argument:
    ///
    /// * `filepath`: the targeted file path. Currently `.json` and `.yaml`/`.yml` suffixes are
    /// supported
    fn to_file<P: AsRef<Path>>(&self, filepath: P) -> anyhow::Result<()> {
        let filepath = filepath.as_ref();
        let extension = filepath
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or("");
        match extension {
            "json" => serde_json::to_writer(&File::create(filepath)?, self)?,
            "yaml" | "yml" => serde_yaml::to_writer(&File::create(filepath)?, self)?,
            _ => bail!("Unsupported file extension {}", extension),
        };
        Ok(())
    }

    /// Read from file and return instantiated struct. Method adaptively calls deserialization
    /// methods dependent on the suffix of the file name given, then runs [Self::init].
    fn from_file<P: AsRef<Path>>(filepath: P) -> anyhow::Result<Self>
    where
        Self: Sized,
    {
        let filepath = filepath.as_ref();
        let extension = filepath
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or("");

        let file = File::open(filepath)
            .with_context(|| format!("failed to open {}", filepath.display()))?;
        // deserialized file
        let mut file_de: Self = match extension {
            "yaml" | "yml" => serde_yaml::from_reader(file)?,
            "json" => serde_json::from_reader(file)?,
            _ => bail!("Unsupported file extension {}", extension),
        };
        file_de.init()?;
        Ok(file_de)
    }

    /// json serialization method.
    fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self)?)
    }

    /// json deserialization method.
    fn from_json(json_str: &str) -> anyhow::Result<Self> {
        let mut json_de: Self = serde_json::from_str(json_str)?;
        json_de.init()?;
        Ok(json_de)
    }

    /// yaml serialization method.
    fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(&self)?)
    }

    /// yaml deserialization method.
    fn from_yaml(yaml_str: &str) -> anyhow::Result<Self> {
        let mut yaml_de: Self = serde_yaml::from_str(yaml_str)?;
        yaml_de.init()?;
        Ok(yaml_de)
    }
}

/// Human-readable field dump for consist members
#[enum_dispatch]
pub trait Describable {
    /// Ordered `(name, value)` pairs, one per attribute.
    fn describe(&self) -> Vec<(&'static str, String)>;

    /// Renders [Self::describe] as one `Name: value` line per attribute.
    fn info(&self) -> String {
        self.describe()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<String>>()
            .join("\n")
    }
}
