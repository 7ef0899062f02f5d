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
use crate::{EdgeError, EdgeImage, EdgeImageMut, ImageChannels, ThreadingPolicy};
use novtb::{ParallelZonedIterator, TbSliceMut};

/// Performs the Sobel operator on a single plane image.
///
/// For every interior pixel the horizontal and vertical gradients are accumulated
/// with the 3x3 Sobel kernels in integer arithmetic, and the magnitude
/// `sqrt(gx*gx + gy*gy)` is truncated and clamped to 255. The one pixel wide
/// border has no full 3x3 neighborhood and is left untouched, callers that need
/// a defined border are expected to pre-fill the destination. Images narrower or
/// shorter than 3 pixels come back with the destination entirely unmodified.
///
/// # Arguments
///
/// * `image`: Source plane image, see [EdgeImage] for more info
/// * `destination`: Destination plane image, see [EdgeImageMut] for more info
/// * `threading_policy`: see [ThreadingPolicy] for more info
///
pub fn sobel_edge(
    image: &EdgeImage<u8>,
    destination: &mut EdgeImageMut<u8>,
    threading_policy: ThreadingPolicy,
) -> Result<(), EdgeError> {
    image.check_layout()?;
    // Checked before the destination layout, a failure here must not resize
    // an owned destination.
    if image.channels != ImageChannels::Plane {
        return Err(EdgeError::PlaneExpected);
    }
    destination.check_layout(Some(image))?;
    image.size_matches_mut(destination)?;
    if destination.channels != ImageChannels::Plane {
        return Err(EdgeError::PlaneExpected);
    }
    let width = image.width as usize;
    let height = image.height as usize;
    let src_stride = image.row_stride() as usize;
    let dst_stride = destination.row_stride() as usize;
    let src = image.data.as_ref();
    let thread_count = threading_policy.thread_count(image.width, image.height);
    let pool = novtb::ThreadPool::new(thread_count);
    destination
        .data
        .borrow_mut()
        .tb_par_chunks_exact_mut(dst_stride)
        .for_each_enumerated(&pool, |y, dst_row| {
            if y == 0 || y + 1 >= height {
                return;
            }
            let dst_row = &mut dst_row[..width];
            sobel_row(src, src_stride, width, y, dst_row);
        });
    Ok(())
}

fn sobel_row(src: &[u8], src_stride: usize, width: usize, y: usize, dst_row: &mut [u8]) {
    let above = &src[(y - 1) * src_stride..(y - 1) * src_stride + width];
    let center = &src[y * src_stride..y * src_stride + width];
    let below = &src[(y + 1) * src_stride..(y + 1) * src_stride + width];
    for x in 1..width.saturating_sub(1) {
        let gx = above[x + 1] as i32 + 2 * center[x + 1] as i32 + below[x + 1] as i32
            - above[x - 1] as i32
            - 2 * center[x - 1] as i32
            - below[x - 1] as i32;
        let gy = above[x - 1] as i32 + 2 * above[x] as i32 + above[x + 1] as i32
            - below[x - 1] as i32
            - 2 * below[x] as i32
            - below[x + 1] as i32;
        let magnitude = ((gx * gx + gy * gy) as f32).sqrt() as i32;
        dst_row[x] = magnitude.min(255) as u8;
    }
}
