use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use camvision_rs::frame_pipeline::{
    ConversionConfig, FrameToBlobPipeline, ImageFormat, PixelFormat, RawFrame,
};

fn generate_bayer_frame(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 256) as u8);
        }
    }
    data
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (128, 128, "128x128"),
        (640, 480, "640x480"),
        (1920, 1080, "1920x1080"),
    ];

    for (width, height, label) in sizes {
        let data = generate_bayer_frame(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &data, |b, data| {
            let pipeline = FrameToBlobPipeline::new(
                ConversionConfig::builder().format(ImageFormat::Bmp).build(),
            );
            let frame = RawFrame {
                width,
                height,
                pixel_format: PixelFormat::BayerRg8,
                data,
            };

            b.iter(|| {
                let _ = pipeline.convert(black_box(&frame));
            });
        });
    }

    group.finish();
}

fn benchmark_output_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_formats");
    let data = generate_bayer_frame(640, 480);

    let formats = vec![
        (ImageFormat::Bmp, "bmp"),
        (ImageFormat::Png, "png"),
        (ImageFormat::Jpeg, "jpeg"),
    ];

    for (format, label) in formats {
        group.bench_with_input(BenchmarkId::from_parameter(label), &data, |b, data| {
            let pipeline =
                FrameToBlobPipeline::new(ConversionConfig::builder().format(format).build());
            let frame = RawFrame {
                width: 640,
                height: 480,
                pixel_format: PixelFormat::BayerRg8,
                data,
            };

            b.iter(|| {
                let _ = pipeline.convert(black_box(&frame));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_conversion_sizes, benchmark_output_formats);
criterion_main!(benches);
