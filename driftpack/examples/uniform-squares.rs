use driftpack::{export, generate_layout, LayoutConfig, SortMode};

fn main() {
    env_logger::init();

    let sizes: Vec<_> = (0..12).map(|_| (128, 128)).collect();

    let config = LayoutConfig {
        sort_mode: SortMode::None,
        target_size: (1024, 1024),
        ..LayoutConfig::default()
    };

    let layout = generate_layout(&config, &sizes, 0).expect("layout failed");
    let arrangement = export(&layout, &config);

    println!("Arrangement: {:#?}", arrangement);
}
