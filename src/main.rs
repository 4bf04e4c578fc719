use anyhow::{Context, bail};

use camvision_rs::frame_pipeline::{
    ConversionConfig, FrameToBlobPipeline, PixelFormat, RawFrame,
};
use camvision_rs::logger;

use tracing::info;

/// Demo driver: convert a raw frame dump to an image file.
///
/// Usage: camvision_rs <raw-dump> <format-tag> <width> <height> <output>
///
/// The output container is derived from the output file extension
/// (.bmp/.png/.jpg/.jpeg).
fn main() -> anyhow::Result<()> {
    logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 6 {
        bail!("usage: {} <raw-dump> <format-tag> <width> <height> <output>", args[0]);
    }

    let pixel_format = parse_format(&args[2])?;
    let width: u32 = args[3].parse().context("invalid width")?;
    let height: u32 = args[4].parse().context("invalid height")?;

    let data = std::fs::read(&args[1]).with_context(|| format!("reading {}", args[1]))?;

    info!(
        input = %args[1],
        format = %pixel_format,
        width,
        height,
        "Loaded raw frame dump"
    );

    let pipeline = FrameToBlobPipeline::new(ConversionConfig::default());
    let frame = RawFrame {
        width,
        height,
        pixel_format,
        data: &data,
    };

    pipeline.save_frame(&frame, &args[5])?;

    info!(output = %args[5], "Frame saved");
    Ok(())
}

fn parse_format(tag: &str) -> anyhow::Result<PixelFormat> {
    let format = match tag {
        "Mono8" => PixelFormat::Mono8,
        "Mono10" => PixelFormat::Mono10,
        "Mono12" => PixelFormat::Mono12,
        "Mono16" => PixelFormat::Mono16,
        "RGB8" => PixelFormat::Rgb8Packed,
        "BGR8" => PixelFormat::Bgr8Packed,
        "RGBA8" => PixelFormat::Rgba8Packed,
        "BGRA8" => PixelFormat::Bgra8Packed,
        "YUV422" => PixelFormat::Yuv422Packed,
        "YUYV" => PixelFormat::Yuv422YuyvPacked,
        "BayerGR8" => PixelFormat::BayerGr8,
        "BayerRG8" => PixelFormat::BayerRg8,
        "BayerGB8" => PixelFormat::BayerGb8,
        "BayerBG8" => PixelFormat::BayerBg8,
        other => bail!("unknown pixel format tag: {other}"),
    };
    Ok(format)
}
