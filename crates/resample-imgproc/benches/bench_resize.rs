use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use resample_image::{Image, ImageSize};
use resample_imgproc::interpolation::{CoordinateMapping, InterpolationMode};
use resample_imgproc::parallel::ExecutionStrategy;
use resample_imgproc::resize::{self, ResizeOptions};

fn gradient_image(size: ImageSize) -> Image<u8> {
    let data = (0..size.area())
        .map(|i| ((i % size.width + i / size.width) % 256) as u8)
        .collect();
    Image::new(size, data).unwrap()
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image = gradient_image([*width, *height].into());

        // output size
        let new_size = ImageSize {
            width: width / 2,
            height: height / 2,
        };

        for interpolation in [InterpolationMode::Nearest, InterpolationMode::Bilinear] {
            for strategy in [ExecutionStrategy::Serial, ExecutionStrategy::ParallelRows] {
                let options = ResizeOptions::default()
                    .with_interpolation(interpolation)
                    .with_strategy(strategy);
                let mut dst = Image::from_size_val(new_size, 0u8).unwrap();

                group.bench_with_input(
                    BenchmarkId::new(format!("{interpolation}_{strategy:?}"), &parameter_string),
                    &image,
                    |b, i| {
                        b.iter(|| {
                            resize::resize_native(black_box(i), black_box(&mut dst), &options)
                        })
                    },
                );
            }
        }

        let options = ResizeOptions::default().with_mapping(CoordinateMapping::Center);
        group.bench_with_input(
            BenchmarkId::new("bilinear_center_alloc", &parameter_string),
            &image,
            |b, i| b.iter(|| resize::resize(black_box(i), black_box(new_size), &options)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
