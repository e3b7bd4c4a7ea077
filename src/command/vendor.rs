//! Bundled-library refresh task implementation.
use log::*;
use std::path::Path;

use crate::{
    cli, config,
    project::Project,
    result::Result,
    vendor::{bundle, rewrite::RewriteSet, upstream::UpstreamRepo},
};

/// Execute the vendor task: check out the requested upstream revision, copy
/// the library subtree into the bundle directory, rewrite its imports into
/// the bundle namespace, and record the bundled commit hash.
pub fn execute(args: &cli::Args, rev: &str) -> Result<()> {
    let config = config::load_config(Path::new(&args.config))?;
    let vendor = &config.vendor;
    vendor.validate()?;

    let project = Project::new(args.project_root(), &config.project);

    // an absolute upstream_path passes through the join unchanged
    let upstream_path = project.root().join(&vendor.upstream_path);

    let upstream = UpstreamRepo::open(&upstream_path)?;
    upstream.fetch()?;
    upstream.checkout(rev)?;
    let commit_hash = upstream.head_commit_hash()?;

    let source = upstream_path.join(&vendor.upstream_subdir);
    let dest = project
        .root()
        .join(&vendor.bundle_dir)
        .join(&vendor.module);
    bundle::replace_tree(&source, &dest)?;

    // drop any bytecode that came along with the copy
    project.remove_bytecode()?;

    let rewrites =
        RewriteSet::for_bundled_module(&vendor.module, &vendor.namespace)?;
    let rewritten = rewrites.apply_to_tree(&dest)?;

    let marker = project.root().join(vendor.commit_marker_path());
    bundle::write_commit_marker(&marker, &commit_hash)?;

    info!(
        "updated bundled {} to {}/{} ({} files rewritten)",
        vendor.module, rev, commit_hash, rewritten
    );

    Ok(())
}
