use criterion::{criterion_group, criterion_main, Criterion};
use libedge::{EdgeImage, EdgeImageMut, ImageChannels, ThreadingPolicy};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width: u32 = 1920;
    let height: u32 = 1080;
    let src_bytes: Vec<u8> = (0..width as usize * height as usize * 4)
        .map(|i| (i * 37 + 13) as u8)
        .collect();

    c.bench_function("libedge: RGBA edge detect", |b| {
        let mut dst_bytes: Vec<u8> = src_bytes.to_vec();

        let mut dst_image =
            EdgeImageMut::borrow(&mut dst_bytes, width, height, ImageChannels::Channels4);

        b.iter(|| {
            libedge::edge_detect(&mut dst_image, 1, ThreadingPolicy::Adaptive).unwrap();
        })
    });

    c.bench_function("libedge: RGBA edge detect single thread", |b| {
        let mut dst_bytes: Vec<u8> = src_bytes.to_vec();

        let mut dst_image =
            EdgeImageMut::borrow(&mut dst_bytes, width, height, ImageChannels::Channels4);

        b.iter(|| {
            libedge::edge_detect(&mut dst_image, 1, ThreadingPolicy::Single).unwrap();
        })
    });

    c.bench_function("libedge: RGB edge detect", |b| {
        let mut dst_bytes: Vec<u8> = src_bytes[..width as usize * height as usize * 3].to_vec();

        let mut dst_image =
            EdgeImageMut::borrow(&mut dst_bytes, width, height, ImageChannels::Channels3);

        b.iter(|| {
            libedge::edge_detect(&mut dst_image, 1, ThreadingPolicy::Adaptive).unwrap();
        })
    });

    c.bench_function("libedge: Plane sobel", |b| {
        let plane_bytes: Vec<u8> = src_bytes[..width as usize * height as usize].to_vec();

        let src_image = EdgeImage::borrow(&plane_bytes, width, height, ImageChannels::Plane);
        let mut dst_image = EdgeImageMut::alloc(width, height, ImageChannels::Plane);

        b.iter(|| {
            libedge::sobel_edge(&src_image, &mut dst_image, ThreadingPolicy::Adaptive).unwrap();
        })
    });

    c.bench_function("libedge: Plane sobel single thread", |b| {
        let plane_bytes: Vec<u8> = src_bytes[..width as usize * height as usize].to_vec();

        let src_image = EdgeImage::borrow(&plane_bytes, width, height, ImageChannels::Plane);
        let mut dst_image = EdgeImageMut::alloc(width, height, ImageChannels::Plane);

        b.iter(|| {
            libedge::sobel_edge(&src_image, &mut dst_image, ThreadingPolicy::Single).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
