use std::io::{self, BufWriter, Write};

use driftpack::{export, generate_layout};
use fs_err as fs;

use crate::{
    commands::session::CollageSession,
    data::{Plan, TrialPlan},
    image::Image,
    options::{GlobalOptions, PlanOptions},
};

pub fn plan(global: GlobalOptions, options: PlanOptions) -> anyhow::Result<()> {
    let session = CollageSession::new(&global)?;

    let sizes = session
        .paths
        .iter()
        .map(|path| Image::read_dimensions(path))
        .collect::<Result<Vec<_>, _>>()?;
    let paths: Vec<_> = session.paths.iter().map(|path| path.as_path()).collect();

    let mut trials = Vec::new();
    for trial in session.trials() {
        let layout = generate_layout(&session.layout_config, &sizes, trial.seed)?;
        let arrangement = export(&layout, &session.layout_config);

        trials.push(TrialPlan::new(trial.output, trial.seed, &arrangement, &paths));
    }

    let plan = Plan {
        sort: session.layout_config.sort_mode.name().to_lowercase(),
        trials,
    };

    match &options.output {
        Some(path) => {
            let mut file = BufWriter::new(fs::File::create(path)?);
            serde_json::to_writer_pretty(&mut file, &plan)?;
            writeln!(file)?;
            file.flush()?;

            log::info!("Wrote plan to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &plan)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}
