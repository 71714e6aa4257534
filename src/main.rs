use std::path::Path;

use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;

use fmw_select::config::Config;
use fmw_select::model::SelectionModel;
use fmw_select::{output, scan, ui};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli()?;

    let names = scan::scan_framework_dir(Path::new(&config.dir))?;
    let names = scan::filter_names(names, &config.only)?;

    // Default paths concatenate base dir and name as-is, so the scanned dir
    // must end with its separator.
    let mut base_dir = config.dir.clone();
    if !base_dir.ends_with('/') {
        base_dir.push('/');
    }
    let mut model = SelectionModel::with_base_dir(base_dir, names);

    // Bulk replacement first, then single-entry overrides in the order given
    if let Some(file) = &config.paths_file {
        let paths = scan::read_paths_file(file)?;
        if config.strict {
            model.try_set_paths(paths)?;
        } else {
            model.set_paths(paths);
        }
    }
    for spec in &config.set {
        if spec.index >= model.names().len() {
            bail!(
                "--set index {} out of range (the list has {} entries)",
                spec.index,
                model.names().len()
            );
        }
        model.set_path_at(spec.index, spec.path.clone());
    }

    let model = if config.interactive {
        match ui::select_paths_tui(model)? {
            Some(model) => model,
            // User quit; keep nothing and emit nothing
            None => return Ok(()),
        }
    } else {
        model
    };

    let plan = output::format_plan(&model);
    if config.stdout {
        print!("{plan}");
    }
    if let Some(path) = &config.write {
        std::fs::write(path, &plan)?;
    }
    if !config.stdout && config.write.is_none() {
        print!("{}", output::format_override_summary(&model));
    }

    Ok(())
}
