//! Template-run orchestration.
//!
//! One run per matched template: reset the context, glob and scan every
//! configured source file, substitute the template text, and write the
//! output document next to the template.

use crate::emdoc::config::{DocEntry, EmdocConfig, Presets};
use crate::emdoc::context::ParseContext;
use crate::emdoc::error::EmdocError;
use crate::emdoc::scanning::scan_file;
use crate::emdoc::substituting::substitute;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension stripped from a template path to produce its output path.
pub const TEMPLATE_EXT: &str = ".emdoc";

/// Appended to every rendered document unless the entry disables it.
pub const FOOTER: &str =
    "\n\n*Generated using [__emdoc__](https://github.com/emdoc-tools/emdoc)*";

const CONTENTS_PREFIX: &str = "global-contents-table-";

/// Process every docs entry, returning the written output paths.
pub fn process_config(
    ctx: &mut ParseContext,
    config: &EmdocConfig,
) -> Result<Vec<PathBuf>, EmdocError> {
    let presets = config.presets();
    let mut outputs = Vec::new();
    for entry in &config.docs {
        for template in glob_paths(&entry.template)? {
            outputs.push(run_template(ctx, entry, &template, &presets)?);
        }
    }
    Ok(outputs)
}

/// One template run, start to finish.
pub fn run_template(
    ctx: &mut ParseContext,
    entry: &DocEntry,
    template: &Path,
    presets: &Presets,
) -> Result<PathBuf, EmdocError> {
    info!("found template file: {}", template.display());
    let template_dir = nonempty_dir(template.parent());

    ctx.reset();

    for pattern in &entry.files {
        let matches = glob_paths(&template_dir.join(pattern).to_string_lossy())?;
        if matches.is_empty() {
            info!("no matches found for file pattern {}", pattern);
        }
        for file in matches {
            info!("adding file {}", file.display());
            let source = fs::read_to_string(&file)
                .map_err(|e| EmdocError::Io(format!("can't read file {}: {}", file.display(), e)))?;
            scan_file(ctx, &source, presets)?;
        }
    }

    let out = output_path(template);
    let mut text = fs::read_to_string(template).map_err(|e| {
        EmdocError::Io(format!("can't read template {}: {}", template.display(), e))
    })?;
    if !entry.no_footer {
        text.push_str(FOOTER);
    }
    let rendered = substitute(ctx, &text)?;
    fs::write(&out, rendered).map_err(|e| {
        EmdocError::Io(format!("can't write output file {}: {}", out.display(), e))
    })?;

    record_contents_entry(ctx, template_dir, &out);
    Ok(out)
}

/// Template path with the first documentation-source extension removed.
pub fn output_path(template: &Path) -> PathBuf {
    PathBuf::from(template.to_string_lossy().replacen(TEMPLATE_EXT, "", 1))
}

fn glob_paths(pattern: &str) -> Result<Vec<PathBuf>, EmdocError> {
    let paths = glob::glob(pattern)
        .map_err(|e| EmdocError::Io(format!("can't glob files {}: {}", pattern, e)))?;
    let mut out = Vec::new();
    for path in paths {
        out.push(path.map_err(|e| EmdocError::Io(format!("can't glob files {}: {}", pattern, e)))?);
    }
    Ok(out)
}

fn nonempty_dir(parent: Option<&Path>) -> &Path {
    match parent {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Append this run's output to the cross-run contents aggregate, so a
/// later template can render a table of contents over every document.
fn record_contents_entry(ctx: &mut ParseContext, template_dir: &Path, out: &Path) {
    let section = template_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());
    let parent = nonempty_dir(template_dir.parent())
        .to_string_lossy()
        .replace('/', "-");
    let aggregate = format!("{}{}", CONTENTS_PREFIX, parent);

    let intro = ctx
        .values
        .get("introduction")
        .map(|value| value.default.payload.clone())
        .unwrap_or_default();

    ctx.add_val(&aggregate, &section, &out.to_string_lossy(), &[], &intro);
}
