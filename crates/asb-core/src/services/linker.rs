//! Dependency linker.
//!
//! Tags every addon shipped in a package that a desktop application depends
//! on with the id of that application, so the absorber knows where to merge
//! it.

use crate::domain::{IdKind, MERGE_WITH_PARENT_KEY};
use crate::ports::{AbsorbDiagnostics, AppRecord};

/// Tag addons with the id of the desktop record depending on their package.
///
/// Desktop records are visited in collection order and their dependencies in
/// declaration order. When several desktops depend on the same package the
/// last one visited owns the addon. Package names are compared exactly.
///
/// Returns the number of tag assignments made, overwrites included.
pub fn link<R: AppRecord>(apps: &mut [R], diagnostics: &dyn AbsorbDiagnostics) -> usize {
    // Kinds and dependencies are never touched by tagging, so a snapshot
    // taken up front sees exactly what an interleaved walk would.
    let parents: Vec<(String, Vec<String>)> = apps
        .iter()
        .filter(|app| app.kind() == IdKind::Desktop)
        .map(|app| (app.id().to_owned(), app.dependencies().to_vec()))
        .collect();

    let mut tagged = 0;
    for (parent_id, deps) in &parents {
        for pkgname in deps {
            tagged += tag_addons_for_pkgname(apps, parent_id, pkgname, diagnostics);
        }
    }
    tagged
}

fn tag_addons_for_pkgname<R: AppRecord>(
    apps: &mut [R],
    parent_id: &str,
    pkgname: &str,
    diagnostics: &dyn AbsorbDiagnostics,
) -> usize {
    let mut tagged = 0;
    for app in apps.iter_mut() {
        if app.kind() != IdKind::Addon {
            continue;
        }
        if app.default_package() != Some(pkgname) {
            continue;
        }
        diagnostics.tagged(app.id(), parent_id, pkgname);
        app.set_metadata_item(MERGE_WITH_PARENT_KEY, parent_id);
        tagged += 1;
    }
    tagged
}
