/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use image::{EncodableLayout, GenericImageView, ImageReader};
use libedge::{edge_detect, EdgeImageMut, ImageChannels, ThreadingPolicy};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: {} <input_img> <output_img.png> [kernel_passes]",
            args[0]
        );
        std::process::exit(1);
    }
    let passes = args
        .get(3)
        .map(|v| v.parse::<u32>().unwrap_or(0))
        .unwrap_or(1)
        .max(1);

    let dyn_image = ImageReader::open(&args[1]).unwrap().decode().unwrap();
    let dimensions = dyn_image.dimensions();
    println!("dimensions {:?}", dyn_image.dimensions());
    println!("type {:?}", dyn_image.color());

    let has_alpha = dyn_image.color().has_alpha();
    let mut bytes: Vec<u8> = if has_alpha {
        dyn_image.to_rgba8().as_bytes().to_vec()
    } else {
        dyn_image.to_rgb8().as_bytes().to_vec()
    };
    let channels = ImageChannels::from(if has_alpha { 4 } else { 3 });

    let mut edge_image = EdgeImageMut::borrow(&mut bytes, dimensions.0, dimensions.1, channels);

    let start_time = Instant::now();
    edge_detect(&mut edge_image, passes, ThreadingPolicy::Adaptive).unwrap();
    let elapsed_time = start_time.elapsed();
    println!("Compute kernel (grayscale + sobel) x{passes}: {:.2?}", elapsed_time);

    image::save_buffer(
        &args[2],
        bytes.as_bytes(),
        dimensions.0,
        dimensions.1,
        if has_alpha {
            image::ExtendedColorType::Rgba8
        } else {
            image::ExtendedColorType::Rgb8
        },
    )
    .unwrap();
}
