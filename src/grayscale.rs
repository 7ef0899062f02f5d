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
use crate::{EdgeError, EdgeImageMut, ImageChannels, ThreadingPolicy};
use novtb::{ParallelZonedIterator, TbSliceMut};

/// Converts an image to grayscale in place.
///
/// Every pixel is replaced by its BT.601 luminance `0.299*R + 0.587*G + 0.114*B`,
/// accumulated in `f32` and truncated towards zero. All color channels receive the
/// same luminance value, the alpha channel of a 4-channel image is left untouched.
///
/// # Arguments
///
/// * `image`: Image to work in place, see [EdgeImageMut] for more info
/// * `threading_policy`: see [ThreadingPolicy] for more info
///
pub fn grayscale(
    image: &mut EdgeImageMut<u8>,
    threading_policy: ThreadingPolicy,
) -> Result<(), EdgeError> {
    grayscale_multi_pass(image, 1, threading_policy)
}

/// Converts an image to grayscale in place, repeating the conversion `passes` times.
///
/// Even passes (the first, the third and so on) use the BT.601 weights
/// `[0.299, 0.587, 0.114]`, odd passes use the flat weights `[0.333, 0.333, 0.333]`.
/// Since the flat weights sum to slightly below one, a repeated conversion darkens
/// the image a little with each flat pass. `passes = 0` leaves the image unchanged.
///
/// # Arguments
///
/// * `image`: Image to work in place, see [EdgeImageMut] for more info
/// * `passes`: How many conversion passes to run
/// * `threading_policy`: see [ThreadingPolicy] for more info
///
pub fn grayscale_multi_pass(
    image: &mut EdgeImageMut<u8>,
    passes: u32,
    threading_policy: ThreadingPolicy,
) -> Result<(), EdgeError> {
    image.check_layout(None)?;
    let _dispatcher = match image.channels {
        ImageChannels::Plane => return Err(EdgeError::ColorImageExpected),
        ImageChannels::Channels3 => grayscale_rows::<3>,
        ImageChannels::Channels4 => grayscale_rows::<4>,
    };
    let bt601_weights: [f32; 3] = [0.299, 0.587, 0.114];
    let flat_weights: [f32; 3] = [0.333, 0.333, 0.333];
    let width = image.width as usize;
    let height = image.height as usize;
    let stride = image.row_stride() as usize;
    let thread_count = threading_policy.thread_count(image.width, image.height);
    let pool = novtb::ThreadPool::new(thread_count);
    for pass in 0..passes {
        let weights = if pass % 2 == 0 {
            bt601_weights
        } else {
            flat_weights
        };
        _dispatcher(image.data.borrow_mut(), stride, width, height, weights, &pool);
    }
    Ok(())
}

fn grayscale_rows<const CN: usize>(
    data: &mut [u8],
    stride: usize,
    width: usize,
    height: usize,
    weights: [f32; 3],
    pool: &novtb::ThreadPool,
) {
    data.tb_par_chunks_exact_mut(stride)
        .for_each_enumerated(pool, |y, row| {
            if y >= height {
                return;
            }
            grayscale_row::<CN>(&mut row[..width * CN], weights);
        });
    // A buffer holding exactly stride * (height - 1) + width * CN items ends
    // on a row shorter than the stride, which the exact iterator never yields.
    if data.len() < stride * height {
        grayscale_row::<CN>(&mut data[(height - 1) * stride..][..width * CN], weights);
    }
}

#[inline]
fn grayscale_row<const CN: usize>(row: &mut [u8], weights: [f32; 3]) {
    for px in row.chunks_exact_mut(CN) {
        let lum = (weights[0] * px[0] as f32
            + weights[1] * px[1] as f32
            + weights[2] * px[2] as f32) as u8;
        px[0] = lum;
        px[1] = lum;
        px[2] = lum;
    }
}
