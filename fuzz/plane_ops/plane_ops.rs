/*
 * // Copyright (c) Radzivon Bartoshyk. All rights reserved.
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

#![no_main]

use arbitrary::Arbitrary;
use libedge::{EdgeImage, EdgeImageMut, ImageChannels, ThreadingPolicy};
use libfuzzer_sys::fuzz_target;

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u16,
    pub src_height: u16,
    pub value: u8,
    pub channel: u8,
}

fuzz_target!(|data: SrcImage| {
    if data.src_width > 250 || data.src_height > 250 {
        return;
    }
    fuzz_8bit(
        data.src_width as usize,
        data.src_height as usize,
        data.value,
        data.channel as usize,
        ImageChannels::Channels4,
    );
    fuzz_8bit(
        data.src_width as usize,
        data.src_height as usize,
        data.value,
        data.channel as usize,
        ImageChannels::Channels3,
    );
});

fn fuzz_8bit(width: usize, height: usize, value: u8, channel: usize, channels: ImageChannels) {
    if width == 0 || height == 0 {
        return;
    }
    let arr = vec![value; width * height * channels.channels()];
    let image = EdgeImage::borrow(&arr, width as u32, height as u32, channels);
    let mut plane = EdgeImageMut::default();
    let extracted = libedge::extract_plane(&image, channel, &mut plane, ThreadingPolicy::Single);
    if channel >= channels.channels() {
        assert!(extracted.is_err());
        return;
    }
    extracted.unwrap();

    let mut dst = vec![0u8; width * height * channels.channels()];
    let mut dst_image = EdgeImageMut::borrow(&mut dst, width as u32, height as u32, channels);
    libedge::scatter_plane(
        &plane.to_immutable_ref(),
        &mut dst_image,
        ThreadingPolicy::Single,
    )
    .unwrap();
}
