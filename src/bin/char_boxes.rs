use char_boxes::config::load_config;
use char_boxes::image::io::{load_image, save_rgb_image, write_json_file};
use char_boxes::image::GrayImageU8;
use char_boxes::page::PageSegmenter;
use char_boxes::render::draw_char_boxes;
use char_boxes::source::{LineSource, OcrJsonSource};
use image::Rgb;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let page = load_image(&config.input)?;
    let gray = GrayImageU8::from_dynamic(&page);
    println!(
        "Processing {} ({}x{})",
        config.input.display(),
        gray.width(),
        gray.height()
    );

    let mut source = OcrJsonSource::new(&config.lines);
    let lines = source.lines(&config.input)?;
    if lines.is_empty() {
        println!("No text lines in {}", source.path().display());
    }

    let segmenter = PageSegmenter::new(config.segmenter.clone());
    let result = segmenter.segment_page(&gray.as_view(), &lines);

    let mut canvas = page.to_rgb8();
    draw_char_boxes(&mut canvas, &result, Rgb(config.output.colour));
    let output_image = config.output_image();
    save_rgb_image(&canvas, &output_image)?;

    println!(
        "Saved {} character boxes from {} lines to {} ({} even-split, {} skipped, {:.3} ms)",
        result.char_count(),
        result.lines.len(),
        output_image.display(),
        result.even_split_count(),
        result.skipped.len(),
        result.elapsed_ms
    );

    if let Some(path) = &config.output.boxes_json {
        write_json_file(path, &result)?;
        println!("Saved box JSON to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: char_boxes <config.json>".to_string()
}
