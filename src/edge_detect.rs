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
use crate::{
    extract_plane, grayscale, scatter_plane, sobel_edge, EdgeError, EdgeImageMut, ImageChannels,
    ThreadingPolicy,
};

/// Runs the full edge detection pipeline on a color image in place.
///
/// Each pass converts the image to grayscale, extracts channel 0 into a plane,
/// runs the Sobel operator on it and scatters the magnitudes back into the
/// color channels. After the last pass the buffer holds the edge map replicated
/// across the color channels, with a black one pixel border coming from the
/// zero initialized working plane. The alpha channel of a 4-channel image is
/// carried through unchanged.
///
/// The two working planes are sized once before the first pass and reused,
/// `passes = 0` leaves the image untouched.
///
/// # Arguments
///
/// * `image`: Image to work in place, see [EdgeImageMut] for more info
/// * `passes`: How many grayscale plus Sobel rounds to run
/// * `threading_policy`: see [ThreadingPolicy] for more info
///
pub fn edge_detect(
    image: &mut EdgeImageMut<u8>,
    passes: u32,
    threading_policy: ThreadingPolicy,
) -> Result<(), EdgeError> {
    image.check_layout(None)?;
    if image.channels == ImageChannels::Plane {
        return Err(EdgeError::ColorImageExpected);
    }
    let mut gray = EdgeImageMut::alloc(image.width, image.height, ImageChannels::Plane);
    let mut edge = EdgeImageMut::alloc(image.width, image.height, ImageChannels::Plane);
    for _ in 0..passes {
        grayscale(image, threading_policy)?;
        extract_plane(&image.to_immutable_ref(), 0, &mut gray, threading_policy)?;
        sobel_edge(&gray.to_immutable_ref(), &mut edge, threading_policy)?;
        scatter_plane(&edge.to_immutable_ref(), image, threading_policy)?;
    }
    Ok(())
}
