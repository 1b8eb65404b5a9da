use anyhow::{Context, Result, bail};
use clap::Parser;
use image::ImageReader;
use std::path::{Path, PathBuf};

use handzone::detection::steps::detection_from;
use handzone::{MonitorConfig, Rect, annotate, build_tracker_pipeline, distance_to_rect};

#[derive(Parser)]
#[command(name = "handzone")]
#[command(about = "Classify how close a glove-colored hand is to a virtual boundary in video frames")]
struct Cli {
    /// Input frame images, processed in order
    #[arg(value_name = "FRAME", required = true)]
    frames: Vec<PathBuf>,

    /// Boundary rectangle as x1,y1,x2,y2 (default: 200x200 box centered in the frame)
    #[arg(long, value_name = "X1,Y1,X2,Y2")]
    rect: Option<String>,

    /// Shift the boundary right (negative: left), clamped to the frame
    #[arg(long, default_value_t = 0.0, value_name = "PX")]
    shift_x: f32,

    /// Shift the boundary down (negative: up), clamped to the frame
    #[arg(long, default_value_t = 0.0, value_name = "PX")]
    shift_y: f32,

    /// Tracker configuration file (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Minimum blob area in pixels (overrides the config value)
    #[arg(long, value_name = "PX")]
    min_area: Option<u32>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save each stage's intermediate image to a per-frame subdirectory
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Save annotated frames to directory
    #[arg(long, value_name = "DIR")]
    annotate_out: Option<PathBuf>,
}

fn parse_rect(arg: &str) -> Result<Rect> {
    let parts: Vec<f32> = arg
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f32>()
                .map_err(|e| anyhow::anyhow!("bad rectangle coordinate {:?}: {}", p, e))
        })
        .collect::<Result<_>>()?;
    if parts.len() != 4 {
        bail!("expected 4 rectangle coordinates (x1,y1,x2,y2), got {}", parts.len());
    }
    Rect::new(parts[0], parts[1], parts[2], parts[3])
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut cfg = match &args.config {
        Some(path) => MonitorConfig::load(path)?,
        None => MonitorConfig::default(),
    };
    if let Some(min_area) = args.min_area {
        cfg.min_area = min_area;
    }
    cfg.validate()?;

    let fixed_rect = args.rect.as_deref().map(parse_rect).transpose()?;

    if let Some(dir) = &args.annotate_out {
        std::fs::create_dir_all(dir)?;
    }

    for (idx, path) in args.frames.iter().enumerate() {
        if args.verbose {
            println!("Loading frame: {:?}", path);
        }
        let img = ImageReader::open(path)
            .with_context(|| format!("Failed to open frame: {}", path.display()))?
            .decode()
            .map_err(|e| anyhow::anyhow!("Failed to decode {}: {}", path.display(), e))?;
        let (frame_w, frame_h) = (img.width() as f32, img.height() as f32);

        let rect = match fixed_rect {
            Some(r) => r,
            None => Rect::centered(
                frame_w,
                frame_h,
                200.0_f32.min(frame_w),
                200.0_f32.min(frame_h),
            )?,
        };
        let rect = rect.translated_clamped(args.shift_x, args.shift_y, frame_w, frame_h);

        let mut pipeline = build_tracker_pipeline(&cfg, args.verbose);
        if let Some(dir) = &args.debug_out {
            let subdir = dir.join(format!("{:02}_{}", idx + 1, file_stem(path)));
            pipeline = pipeline.with_debug(subdir)?;
        }

        let rgb = img.to_rgb8();
        let results = pipeline.run(img)?;
        let detection = results.first().and_then(detection_from);

        let distance = detection
            .as_ref()
            .map(|d| distance_to_rect(d.centroid, &rect));
        let state = cfg.thresholds.classify(distance, detection.is_some());

        match (&detection, distance) {
            (Some(det), Some(d)) => println!(
                "{}: centroid ({:.0}, {:.0})  distance {:.1} px  state {}",
                path.display(),
                det.centroid.x,
                det.centroid.y,
                d,
                state
            ),
            _ => println!("{}: hand not detected  state {}", path.display(), state),
        }

        if let Some(dir) = &args.annotate_out {
            let annotated = annotate(&rgb, &rect, detection.as_ref(), state);
            let out_path = dir.join(format!("{:02}_{}.png", idx + 1, file_stem(path)));
            annotated
                .save(&out_path)
                .map_err(|e| anyhow::anyhow!("Failed to save annotated frame: {}", e))?;
            if args.verbose {
                println!("  Saved {}", out_path.display());
            }
        }
    }

    Ok(())
}
