use std::path::Path;

use anyhow::Context;
use driftpack::{export, generate_layout};
use fs_err as fs;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    commands::session::CollageSession,
    compositor::render,
    image::Image,
    options::{ComposeOptions, GlobalOptions},
};

pub fn compose(global: GlobalOptions, options: ComposeOptions) -> anyhow::Result<()> {
    let mut session = CollageSession::new(&global)?;

    if let Some(output) = options.output {
        session.config.output_file = output;
    }

    // Inputs are decoded once and shared by every trial.
    let images = session
        .paths
        .iter()
        .map(|path| Image::open(path))
        .collect::<Result<Vec<_>, _>>()?;
    let sizes: Vec<_> = images.iter().map(Image::size).collect();

    let trials = session.trials();

    log::info!(
        "Composing {} collage(s) from {} images",
        trials.len(),
        images.len()
    );

    let progress = ProgressBar::new(trials.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{prefix} [{bar:40}] {pos}/{len} {msg}")
            .expect("progress template is valid"),
    );
    progress.set_prefix("Composing");

    for trial in &trials {
        progress.set_message(trial.output.clone());

        let layout = generate_layout(&session.layout_config, &sizes, trial.seed)?;
        let arrangement = export(&layout, &session.layout_config);
        let canvas = render(&arrangement, &images);

        let output_path = Path::new(&trial.output);
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        canvas
            .save_png(output_path)
            .with_context(|| format!("Couldn't save collage {}", trial.output))?;

        progress.inc(1);

        // Keeps the bar from being drawn over the line.
        progress.suspend(|| println!("Saved {}", trial.output));
    }

    progress.finish_and_clear();
    println!("Process completed");

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use std::path::PathBuf;

    use ::image::Rgba;

    fn scratch_folder() -> PathBuf {
        let folder = std::env::temp_dir().join(format!(
            "weighted-collage-compose-{}",
            std::process::id()
        ));

        if folder.exists() {
            fs::remove_dir_all(&folder).unwrap();
        }
        fs::create_dir_all(folder.join("inputs")).unwrap();

        folder
    }

    #[test]
    fn random_mode_writes_every_trial() {
        let folder = scratch_folder();
        let inputs = folder.join("inputs");

        let colors = [
            ((40, 30), Rgba([255, 0, 0, 255])),
            ((25, 25), Rgba([0, 255, 0, 255])),
            ((10, 50), Rgba([0, 0, 255, 128])),
        ];
        for (i, (size, color)) in colors.iter().enumerate() {
            Image::new_filled_rgba8(*size, *color)
                .save_png(&inputs.join(format!("input-{}.png", i)))
                .unwrap();
        }

        let config_path = folder.join("collage.toml");
        fs::write(
            &config_path,
            "relaxation-iterations = 60\ninitial-radius = 20.0\nmax-initial-dim = 32\ntarget-size = [64, 64]\n",
        )
        .unwrap();

        let global = GlobalOptions {
            config: Some(config_path),
            input: Some(inputs),
            sort: Some(driftpack::SortMode::Random),
            trials: Some(3),
            seed: Some(11),
        };
        let template = folder.join("out").join("collage-#.png");
        let options = ComposeOptions {
            output: Some(template.display().to_string()),
        };

        compose(global, options).unwrap();

        for trial in 1..=3 {
            let path = folder.join("out").join(format!("collage-random{}.png", trial));
            let output = Image::open(&path).unwrap();
            let (width, height) = output.size();

            assert!(width > 0 && height > 0);
            assert!(width <= 64 && height <= 64);
        }

        let written = fs::read_dir(folder.join("out")).unwrap().count();
        assert_eq!(written, 3);

        fs::remove_dir_all(&folder).unwrap();
    }
}
