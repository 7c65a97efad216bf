use {
    anyhow::{
        anyhow,
        Context,
        Result,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::{
        collections::BTreeMap,
        fmt,
        fs,
        path::Path,
        str::FromStr,
    },
};

/// The subset of package.json fields the tool reads and rewrites.
/// Fields outside this set are dropped on rewrite.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PkgManifest {
    pub name:        String,
    pub version:     String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub private:     bool,
    #[serde(default)]
    pub license:     String,
    #[serde(default)]
    pub scripts:     BTreeMap<String, String>,
}

/// A three-part manifest version. Anything other than exactly
/// `major.minor.patch` with non-negative integer parts is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn bump_major(self) -> Self {
        Version {
            major: self.major + 1,
            minor: 0,
            patch: 0,
        }
    }

    pub fn bump_minor(self) -> Self {
        Version {
            minor: self.minor + 1,
            patch: 0,
            ..self
        }
    }

    pub fn bump_patch(self) -> Self {
        Version {
            patch: self.patch + 1,
            ..self
        }
    }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(anyhow!("invalid version format: {}", s));
        }
        let major = parts[0]
            .parse()
            .map_err(|_| anyhow!("invalid major version: {}", parts[0]))?;
        let minor = parts[1]
            .parse()
            .map_err(|_| anyhow!("invalid minor version: {}", parts[1]))?;
        let patch = parts[2]
            .parse()
            .map_err(|_| anyhow!("invalid patch version: {}", parts[2]))?;
        Ok(Version {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

pub fn read_manifest(path: &Path) -> Result<PkgManifest> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))
}

/// Writes the manifest back pretty-printed with two-space indentation.
pub fn write_manifest(path: &Path, manifest: &PkgManifest) -> Result<()> {
    let data = serde_json::to_string_pretty(manifest)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}

pub fn get_version(path: &Path) -> Result<String> {
    Ok(read_manifest(path)?.version)
}

/// Applies a bump operation to the manifest version in place and returns the
/// old and new versions.
pub fn bump_version(path: &Path, op: fn(Version) -> Version) -> Result<(Version, Version)> {
    let mut manifest = read_manifest(path)?;
    let current: Version = manifest.version.parse()?;
    let next = op(current);
    manifest.version = next.to_string();
    write_manifest(path, &manifest)?;
    Ok((current, next))
}
