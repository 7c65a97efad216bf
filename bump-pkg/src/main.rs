use {
    anyhow::Result,
    clap::Parser,
    std::io::IsTerminal,
    tracing_subscriber::filter::LevelFilter,
};

mod config;
mod manifest;

fn main() -> Result<()> {
    // Initialize a Tracing Subscriber
    let fmt_builder = tracing_subscriber::fmt()
        .with_file(false)
        .with_line_number(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stderr().is_terminal());

    // Use the compact formatter if we're in a terminal, otherwise use the JSON formatter.
    if std::io::stderr().is_terminal() {
        tracing::subscriber::set_global_default(fmt_builder.compact().finish())?;
    } else {
        tracing::subscriber::set_global_default(fmt_builder.json().finish())?;
    }

    match config::Options::parse() {
        config::Options::Major(opts) => bump(&opts, manifest::Version::bump_major),
        config::Options::Minor(opts) => bump(&opts, manifest::Version::bump_minor),
        config::Options::Patch(opts) => bump(&opts, manifest::Version::bump_patch),
        config::Options::Get(opts) => {
            println!("{}", manifest::get_version(&opts.manifest)?);
            Ok(())
        }
    }
}

fn bump(
    opts: &config::ManifestOptions,
    op: fn(manifest::Version) -> manifest::Version,
) -> Result<()> {
    let (old, new) = manifest::bump_version(&opts.manifest, op)?;
    tracing::info!(
        "Bumped {} from {} to {}",
        opts.manifest.display(),
        old,
        new
    );
    Ok(())
}
