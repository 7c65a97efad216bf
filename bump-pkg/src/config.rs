use {
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    std::path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Bump the major version and reset minor and patch to zero.
    Major(ManifestOptions),

    /// Bump the minor version and reset patch to zero.
    Minor(ManifestOptions),

    /// Bump the patch version.
    Patch(ManifestOptions),

    /// Print the current version.
    Get(ManifestOptions),
}

#[derive(Args, Clone, Debug)]
pub struct ManifestOptions {
    /// Path of the package manifest to operate on.
    #[arg(long = "manifest")]
    #[arg(env = "PKG_MANIFEST")]
    #[arg(default_value = "package.json")]
    pub manifest: PathBuf,
}
