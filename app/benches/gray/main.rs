use criterion::{criterion_group, criterion_main, Criterion};
use libedge::{EdgeImageMut, ImageChannels, ThreadingPolicy};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width: u32 = 1920;
    let height: u32 = 1080;
    let src_bytes: Vec<u8> = (0..width as usize * height as usize * 4)
        .map(|i| (i * 31 + 7) as u8)
        .collect();

    c.bench_function("libedge: RGBA grayscale", |b| {
        let mut dst_bytes: Vec<u8> = src_bytes.to_vec();

        let mut dst_image =
            EdgeImageMut::borrow(&mut dst_bytes, width, height, ImageChannels::Channels4);

        b.iter(|| {
            libedge::grayscale(&mut dst_image, ThreadingPolicy::Adaptive).unwrap();
        })
    });

    c.bench_function("libedge: RGBA grayscale single thread", |b| {
        let mut dst_bytes: Vec<u8> = src_bytes.to_vec();

        let mut dst_image =
            EdgeImageMut::borrow(&mut dst_bytes, width, height, ImageChannels::Channels4);

        b.iter(|| {
            libedge::grayscale(&mut dst_image, ThreadingPolicy::Single).unwrap();
        })
    });

    c.bench_function("libedge: RGB grayscale multi pass", |b| {
        let mut dst_bytes: Vec<u8> = src_bytes[..width as usize * height as usize * 3].to_vec();

        let mut dst_image =
            EdgeImageMut::borrow(&mut dst_bytes, width, height, ImageChannels::Channels3);

        b.iter(|| {
            libedge::grayscale_multi_pass(&mut dst_image, 4, ThreadingPolicy::Adaptive).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
