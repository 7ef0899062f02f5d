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
use crate::{edge_detect, sobel_edge, EdgeImageMut, ImageChannels, ThreadingPolicy};
use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

/// Performs edge detection on the image
///
/// Color images run the full grayscale plus Sobel pipeline, a `Luma8` image is
/// already a plane so only the Sobel stage is repeated per pass. Alpha channels
/// are carried through untouched. Non 8-bit layouts are not supported.
///
/// # Arguments
///
/// * `image`: Dynamic image provided by image crate.
/// * `passes`: How many edge detection rounds to run.
/// * `threading_policy` - Threads usage policy.
///
#[must_use]
pub fn edge_detect_image(
    image: DynamicImage,
    passes: u32,
    threading_policy: ThreadingPolicy,
) -> Option<DynamicImage> {
    match image {
        DynamicImage::ImageLuma8(gray) => {
            let width = gray.width();
            let height = gray.height();
            let mut raw = gray.into_raw();
            let mut working = EdgeImageMut::borrow(&mut raw, width, height, ImageChannels::Plane);
            let mut edge = EdgeImageMut::alloc(width, height, ImageChannels::Plane);
            for _ in 0..passes {
                sobel_edge(&working.to_immutable_ref(), &mut edge, threading_policy).unwrap();
                working
                    .data
                    .borrow_mut()
                    .copy_from_slice(edge.data.borrow());
            }
            let new_gray_image = GrayImage::from_raw(width, height, raw)?;
            Some(DynamicImage::ImageLuma8(new_gray_image))
        }
        DynamicImage::ImageLumaA8(luma_alpha_image) => {
            let width = luma_alpha_image.width();
            let height = luma_alpha_image.height();
            let mut intensity_plane = EdgeImageMut::alloc(width, height, ImageChannels::Plane);
            let mut alpha_plane = vec![0u8; width as usize * height as usize];
            let raw_buffer = luma_alpha_image.as_raw();

            for ((intensity, alpha), raw_buffer) in intensity_plane
                .data
                .borrow_mut()
                .iter_mut()
                .zip(alpha_plane.iter_mut())
                .zip(raw_buffer.chunks_exact(2))
            {
                *intensity = raw_buffer[0];
                *alpha = raw_buffer[1];
            }

            let mut edge = EdgeImageMut::alloc(width, height, ImageChannels::Plane);
            for _ in 0..passes {
                sobel_edge(
                    &intensity_plane.to_immutable_ref(),
                    &mut edge,
                    threading_policy,
                )
                .unwrap();
                intensity_plane
                    .data
                    .borrow_mut()
                    .copy_from_slice(edge.data.borrow());
            }

            let mut new_raw_buffer = vec![0u8; width as usize * height as usize * 2];

            for ((intensity, alpha), raw_buffer) in intensity_plane
                .data
                .borrow()
                .iter()
                .zip(alpha_plane.iter())
                .zip(new_raw_buffer.chunks_exact_mut(2))
            {
                raw_buffer[0] = *intensity;
                raw_buffer[1] = *alpha;
            }

            let new_gray_image = GrayAlphaImage::from_raw(width, height, new_raw_buffer)?;
            Some(DynamicImage::ImageLumaA8(new_gray_image))
        }
        DynamicImage::ImageRgb8(img) => {
            let width = img.width();
            let height = img.height();
            let mut raw = img.into_raw();
            let mut working =
                EdgeImageMut::borrow(&mut raw, width, height, ImageChannels::Channels3);
            edge_detect(&mut working, passes, threading_policy).unwrap();
            let new_rgb_image = RgbImage::from_raw(width, height, raw)?;
            Some(DynamicImage::ImageRgb8(new_rgb_image))
        }
        DynamicImage::ImageRgba8(img) => {
            let width = img.width();
            let height = img.height();
            let mut raw = img.into_raw();
            let mut working =
                EdgeImageMut::borrow(&mut raw, width, height, ImageChannels::Channels4);
            edge_detect(&mut working, passes, threading_policy).unwrap();
            let new_rgba_image = RgbaImage::from_raw(width, height, raw)?;
            Some(DynamicImage::ImageRgba8(new_rgba_image))
        }
        _ => None,
    }
}
