use driftpack::SortMode;

/// The character in an output template that gets replaced.
pub const PLACEHOLDER: char = '#';

/// Builds the file name for one trial.
///
/// Every placeholder in `template` is replaced with the lowercase sort mode.
/// When a run produces more than one file, the 1-based trial number is
/// appended to it. With the default template, the third trial of a random run
/// is written to `collage-random3.png`.
pub fn output_file_name(template: &str, sort_mode: SortMode, trial: u32, trial_count: u32) -> String {
    let replacement = if trial_count > 1 {
        format!("{}{}", sort_mode.name().to_lowercase(), trial + 1)
    } else {
        sort_mode.name().to_lowercase()
    };

    template.replace(PLACEHOLDER, &replacement)
}
