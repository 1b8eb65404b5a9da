use anyhow::Result;
use image::DynamicImage;
use std::collections::HashMap;

use crate::models::BoundingBox;

/// Data flowing through the tracking pipeline.
///
/// Each `FrameData` carries the current working image for a frame (the frame
/// itself early on, the segmentation mask after thresholding) plus metadata
/// attached by the steps that have already run.
#[derive(Clone)]
pub struct FrameData {
    /// The working image (color frame or binary mask).
    pub image: DynamicImage,

    /// Bounding box of the detected blob, once one has been found.
    pub bbox: Option<BoundingBox>,

    /// Step-attached properties (e.g. "centroid_x", "area").
    pub metadata: HashMap<String, MetadataValue>,
}

#[derive(Debug, Clone)]
pub enum MetadataValue {
    Float(f32),
    Int(i32),
}

impl FrameData {
    /// Wrap a full frame with no detections yet.
    pub fn from_frame(image: DynamicImage) -> Self {
        Self {
            image,
            bbox: None,
            metadata: HashMap::new(),
        }
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.metadata.insert(key.into(), MetadataValue::Float(value));
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i32) {
        self.metadata.insert(key.into(), MetadataValue::Int(value));
    }

    pub fn get_float(&self, key: &str) -> Option<f32> {
        match self.metadata.get(key) {
            Some(MetadataValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.metadata.get(key) {
            Some(MetadataValue::Int(v)) => Some(*v),
            _ => None,
        }
    }
}

/// Debug configuration: when set, every step's output image is written to a
/// per-step subdirectory of `output_dir`.
#[derive(Clone, Debug)]
pub struct DebugConfig {
    pub output_dir: std::path::PathBuf,
    pub enabled: bool,
}

/// Context available to all pipeline steps.
#[derive(Clone)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

/// Trait that all pipeline steps implement.
pub trait PipelineStep: Send + Sync {
    /// Transform the items. Steps may filter (a frame with no acceptable
    /// blob produces no output) but never fail on frame content.
    fn process(&self, data: Vec<FrameData>, context: &PipelineContext) -> Result<Vec<FrameData>>;

    /// Human-readable name (used in verbose output and debug directories).
    fn name(&self) -> &str;
}

/// Sequential pipeline of tracking stages.
pub struct Pipeline {
    steps: Vec<Box<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext {
                verbose: false,
                debug: None,
            },
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: std::path::PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig {
            output_dir,
            enabled: true,
        });

        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Run the pipeline on one input frame.
    pub fn run(&self, input: DynamicImage) -> Result<Vec<FrameData>> {
        // Save initial input in debug mode
        if let Some(debug_config) = &self.context.debug {
            if debug_config.enabled {
                let input_dir = debug_config.output_dir.join("00_input");
                std::fs::create_dir_all(&input_dir)?;
                let input_path = input_dir.join("01.png");
                input
                    .save(&input_path)
                    .map_err(|e| anyhow::anyhow!("Failed to save debug input: {}", e))?;
                if self.context.verbose {
                    println!("  Debug: saved 00_input/01.png");
                }
            }
        }

        let mut data = vec![FrameData::from_frame(input)];

        for (step_idx, step) in self.steps.iter().enumerate() {
            if self.context.verbose {
                println!("Running step: {}", step.name());
            }

            let step_name = step.name();
            data = step.process(data, &self.context)?;

            // Save debug outputs for this step
            if let Some(debug_config) = &self.context.debug {
                if debug_config.enabled {
                    let step_dir_name = format!(
                        "{:02}_{}",
                        step_idx + 1,
                        step_name.to_lowercase().replace(" ", "_")
                    );
                    let step_dir = debug_config.output_dir.join(&step_dir_name);
                    std::fs::create_dir_all(&step_dir)?;

                    for (idx, item) in data.iter().enumerate() {
                        let filename = format!("{:02}.png", idx + 1);
                        let output_path = step_dir.join(&filename);
                        item.image
                            .save(&output_path)
                            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;
                    }

                    if self.context.verbose {
                        println!("  Debug: saved {} images to {}/", data.len(), step_dir_name);
                    }
                }
            }

            if self.context.verbose {
                println!("  → {} items", data.len());
            }
        }

        Ok(data)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
