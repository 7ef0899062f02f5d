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

/// Copies one channel of an interleaved image into a plane.
///
/// # Arguments
///
/// * `image`: Source image, see [EdgeImage] for more info
/// * `channel`: Zero based channel index to extract
/// * `plane`: Destination plane image, see [EdgeImageMut] for more info
/// * `threading_policy`: see [ThreadingPolicy] for more info
///
pub fn extract_plane(
    image: &EdgeImage<u8>,
    channel: usize,
    plane: &mut EdgeImageMut<u8>,
    threading_policy: ThreadingPolicy,
) -> Result<(), EdgeError> {
    image.check_layout()?;
    // Checked before the destination layout, a failure here must not resize
    // an owned destination.
    if channel >= image.channels.channels() {
        return Err(EdgeError::ChannelOutOfBounds(channel));
    }
    plane.check_layout_channels(1, Some(image))?;
    image.only_size_matches_mut(plane)?;
    if plane.channels != ImageChannels::Plane {
        return Err(EdgeError::PlaneExpected);
    }
    let _dispatcher = match image.channels {
        ImageChannels::Plane => extract_plane_rows::<1>,
        ImageChannels::Channels3 => extract_plane_rows::<3>,
        ImageChannels::Channels4 => extract_plane_rows::<4>,
    };
    let width = image.width as usize;
    let height = image.height as usize;
    let src_stride = image.row_stride() as usize;
    let dst_stride = plane.row_stride() as usize;
    let thread_count = threading_policy.thread_count(image.width, image.height);
    let pool = novtb::ThreadPool::new(thread_count);
    _dispatcher(
        image.data.as_ref(),
        src_stride,
        channel,
        width,
        height,
        plane.data.borrow_mut(),
        dst_stride,
        &pool,
    );
    Ok(())
}

/// Broadcasts a plane into the color channels of an interleaved image.
///
/// Every color channel of a pixel receives the plane value at that position,
/// the alpha channel of a 4-channel image is left untouched. The destination
/// must have at least 3 channels, there is nothing to broadcast into on a plane.
///
/// # Arguments
///
/// * `plane`: Source plane image, see [EdgeImage] for more info
/// * `image`: Destination image to work in place, see [EdgeImageMut] for more info
/// * `threading_policy`: see [ThreadingPolicy] for more info
///
pub fn scatter_plane(
    plane: &EdgeImage<u8>,
    image: &mut EdgeImageMut<u8>,
    threading_policy: ThreadingPolicy,
) -> Result<(), EdgeError> {
    plane.check_layout()?;
    image.check_layout(None)?;
    plane.only_size_matches_mut(image)?;
    if plane.channels != ImageChannels::Plane {
        return Err(EdgeError::PlaneExpected);
    }
    let _dispatcher = match image.channels {
        ImageChannels::Plane => return Err(EdgeError::ColorImageExpected),
        ImageChannels::Channels3 => scatter_plane_rows::<3>,
        ImageChannels::Channels4 => scatter_plane_rows::<4>,
    };
    let width = image.width as usize;
    let height = image.height as usize;
    let plane_stride = plane.row_stride() as usize;
    let dst_stride = image.row_stride() as usize;
    let thread_count = threading_policy.thread_count(image.width, image.height);
    let pool = novtb::ThreadPool::new(thread_count);
    _dispatcher(
        plane.data.as_ref(),
        plane_stride,
        width,
        height,
        image.data.borrow_mut(),
        dst_stride,
        &pool,
    );
    Ok(())
}

fn extract_plane_rows<const CN: usize>(
    src: &[u8],
    src_stride: usize,
    channel: usize,
    width: usize,
    height: usize,
    dst: &mut [u8],
    dst_stride: usize,
    pool: &novtb::ThreadPool,
) {
    dst.tb_par_chunks_exact_mut(dst_stride)
        .for_each_enumerated(pool, |y, dst_row| {
            if y >= height {
                return;
            }
            let src_row = &src[y * src_stride..y * src_stride + width * CN];
            extract_row::<CN>(src_row, channel, &mut dst_row[..width]);
        });
    if dst.len() < dst_stride * height {
        let y = height - 1;
        let src_row = &src[y * src_stride..y * src_stride + width * CN];
        extract_row::<CN>(src_row, channel, &mut dst[y * dst_stride..][..width]);
    }
}

#[inline]
fn extract_row<const CN: usize>(src_row: &[u8], channel: usize, dst_row: &mut [u8]) {
    for (dst_px, src_px) in dst_row.iter_mut().zip(src_row.chunks_exact(CN)) {
        *dst_px = src_px[channel];
    }
}

fn scatter_plane_rows<const CN: usize>(
    plane: &[u8],
    plane_stride: usize,
    width: usize,
    height: usize,
    dst: &mut [u8],
    dst_stride: usize,
    pool: &novtb::ThreadPool,
) {
    dst.tb_par_chunks_exact_mut(dst_stride)
        .for_each_enumerated(pool, |y, dst_row| {
            if y >= height {
                return;
            }
            let plane_row = &plane[y * plane_stride..y * plane_stride + width];
            scatter_row::<CN>(plane_row, &mut dst_row[..width * CN]);
        });
    if dst.len() < dst_stride * height {
        let y = height - 1;
        let plane_row = &plane[y * plane_stride..y * plane_stride + width];
        scatter_row::<CN>(plane_row, &mut dst[y * dst_stride..][..width * CN]);
    }
}

#[inline]
fn scatter_row<const CN: usize>(plane_row: &[u8], dst_row: &mut [u8]) {
    for (dst_px, &value) in dst_row.chunks_exact_mut(CN).zip(plane_row.iter()) {
        dst_px[0] = value;
        dst_px[1] = value;
        dst_px[2] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plane_picks_each_channel() {
        let arr = vec![
            1u8, 2, 3, //
            4, 5, 6, //
            7, 8, 9, //
            10, 11, 12,
        ];
        let image = EdgeImage::borrow(&arr, 2, 2, ImageChannels::Channels3);
        for channel in 0..3usize {
            let mut plane = EdgeImageMut::default();
            extract_plane(&image, channel, &mut plane, ThreadingPolicy::Single).unwrap();
            let expected: Vec<u8> = arr.iter().skip(channel).step_by(3).copied().collect();
            assert_eq!(
                plane.data.borrow(),
                expected.as_slice(),
                "Channel {channel} extracted wrong values"
            );
        }
    }

    #[test]
    fn test_extract_plane_reads_alpha_when_asked() {
        let arr = vec![
            10u8, 20, 30, 200, //
            40, 50, 60, 201, //
            70, 80, 90, 202, //
            11, 12, 13, 203,
        ];
        let image = EdgeImage::borrow(&arr, 4, 1, ImageChannels::Channels4);
        let mut plane = EdgeImageMut::default();
        extract_plane(&image, 3, &mut plane, ThreadingPolicy::Single).unwrap();
        assert_eq!(plane.data.borrow(), &[200, 201, 202, 203]);
    }

    #[test]
    fn test_extract_plane_from_plane_is_a_copy() {
        let arr = vec![3u8, 1, 4, 1, 5, 9, 2, 6];
        let image = EdgeImage::borrow(&arr, 4, 2, ImageChannels::Plane);
        let mut plane = EdgeImageMut::default();
        extract_plane(&image, 0, &mut plane, ThreadingPolicy::Single).unwrap();
        assert_eq!(plane.data.borrow(), arr.as_slice());
    }

    #[test]
    fn test_extract_plane_channel_out_of_bounds() {
        let arr = vec![0u8; 4 * 4 * 3];
        let image = EdgeImage::borrow(&arr, 4, 4, ImageChannels::Channels3);
        let mut plane = EdgeImageMut::default();
        let result = extract_plane(&image, 3, &mut plane, ThreadingPolicy::Single);
        assert!(
            matches!(result, Err(EdgeError::ChannelOutOfBounds(3))),
            "Channel 3 of an RGB image must be rejected, got {:?}",
            result
        );
        assert_eq!(plane.width, 0, "Failed call must not reshape the destination");
        assert!(
            plane.data.borrow().is_empty(),
            "Failed call must not allocate the destination"
        );
    }

    #[test]
    fn test_extract_plane_oversized_destination_tail_untouched() {
        let arr = vec![
            1u8, 2, 3, //
            4, 5, 6, //
            7, 8, 9, //
            10, 11, 12,
        ];
        let image = EdgeImage::borrow(&arr, 2, 2, ImageChannels::Channels3);
        let mut dst = vec![0x5Au8; 8];
        let mut plane = EdgeImageMut::borrow(&mut dst, 2, 2, ImageChannels::Plane);
        extract_plane(&image, 0, &mut plane, ThreadingPolicy::Single).unwrap();
        assert_eq!(&dst[..4], &[1, 4, 7, 10], "Channel 0 extracted wrong values");
        assert_eq!(
            &dst[4..],
            &[0x5Au8; 4],
            "Bytes past the plane extent were overwritten"
        );
    }

    #[test]
    fn test_extract_plane_respects_destination_stride() {
        let arr = vec![
            1u8, 2, 3, 4, 5, 6, 7, 8, 9, //
            10, 11, 12, 13, 14, 15, 16, 17, 18,
        ];
        let image = EdgeImage::borrow(&arr, 3, 2, ImageChannels::Channels3);
        let mut dst = vec![0xAAu8; 8];
        let mut plane = EdgeImageMut {
            data: crate::BufferStore::Borrowed(&mut dst),
            width: 3,
            height: 2,
            stride: 5,
            channels: ImageChannels::Plane,
        };
        extract_plane(&image, 1, &mut plane, ThreadingPolicy::Single).unwrap();
        assert_eq!(
            dst,
            vec![2, 5, 8, 0xAA, 0xAA, 11, 14, 17],
            "Padding must stay, the final short row must be written"
        );
    }

    #[test]
    fn test_extract_plane_rejects_color_destination() {
        let arr = vec![0u8; 4 * 4 * 3];
        let image = EdgeImage::borrow(&arr, 4, 4, ImageChannels::Channels3);
        let mut not_a_plane = vec![0u8; 4 * 4 * 3];
        let mut destination =
            EdgeImageMut::borrow(&mut not_a_plane, 4, 4, ImageChannels::Channels3);
        let result = extract_plane(&image, 0, &mut destination, ThreadingPolicy::Single);
        assert!(
            matches!(result, Err(EdgeError::PlaneExpected)),
            "Interleaved destination must be rejected, got {:?}",
            result
        );
    }

    #[test]
    fn test_extract_plane_auto_allocates_destination() {
        let arr = vec![33u8; 7 * 5 * 4];
        let image = EdgeImage::borrow(&arr, 7, 5, ImageChannels::Channels4);
        let mut plane = EdgeImageMut::default();
        extract_plane(&image, 1, &mut plane, ThreadingPolicy::Single).unwrap();
        assert_eq!(plane.width, 7);
        assert_eq!(plane.height, 5);
        assert_eq!(plane.channels, ImageChannels::Plane);
        assert_eq!(plane.data.borrow().len(), 7 * 5);
    }

    #[test]
    fn test_scatter_plane_keeps_alpha() {
        let plane_arr = vec![5u8, 6, 7, 8];
        let plane = EdgeImage::borrow(&plane_arr, 2, 2, ImageChannels::Plane);
        let mut arr = vec![
            1u8, 1, 1, 100, //
            2, 2, 2, 101, //
            3, 3, 3, 102, //
            4, 4, 4, 103,
        ];
        let mut image = EdgeImageMut::borrow(&mut arr, 2, 2, ImageChannels::Channels4);
        scatter_plane(&plane, &mut image, ThreadingPolicy::Single).unwrap();
        let expected = vec![
            5u8, 5, 5, 100, //
            6, 6, 6, 101, //
            7, 7, 7, 102, //
            8, 8, 8, 103,
        ];
        assert_eq!(arr, expected, "Plane must land in color channels only");
    }

    #[test]
    fn test_scatter_plane_rgb() {
        let plane_arr = vec![200u8, 0, 127];
        let plane = EdgeImage::borrow(&plane_arr, 3, 1, ImageChannels::Plane);
        let mut arr = vec![9u8; 3 * 3];
        let mut image = EdgeImageMut::borrow(&mut arr, 3, 1, ImageChannels::Channels3);
        scatter_plane(&plane, &mut image, ThreadingPolicy::Single).unwrap();
        assert_eq!(arr, vec![200, 200, 200, 0, 0, 0, 127, 127, 127]);
    }

    #[test]
    fn test_scatter_plane_rejects_color_source() {
        let not_a_plane = vec![0u8; 2 * 2 * 3];
        let plane = EdgeImage::borrow(&not_a_plane, 2, 2, ImageChannels::Channels3);
        let mut arr = vec![0u8; 2 * 2 * 3];
        let mut image = EdgeImageMut::borrow(&mut arr, 2, 2, ImageChannels::Channels3);
        let result = scatter_plane(&plane, &mut image, ThreadingPolicy::Single);
        assert!(
            matches!(result, Err(EdgeError::PlaneExpected)),
            "Interleaved source must be rejected, got {:?}",
            result
        );
    }

    #[test]
    fn test_scatter_plane_oversized_destination_tail_untouched() {
        let plane_arr = vec![5u8, 6, 7, 8];
        let plane = EdgeImage::borrow(&plane_arr, 2, 2, ImageChannels::Plane);
        let mut arr = vec![0x99u8; 18];
        let mut image = EdgeImageMut::borrow(&mut arr, 2, 2, ImageChannels::Channels3);
        scatter_plane(&plane, &mut image, ThreadingPolicy::Single).unwrap();
        let expected = [
            5u8, 5, 5, 6, 6, 6, //
            7, 7, 7, 8, 8, 8,
        ];
        assert_eq!(&arr[..12], &expected, "Plane must broadcast into both rows");
        assert_eq!(
            &arr[12..],
            &[0x99u8; 6],
            "Bytes past the image extent were overwritten"
        );
    }

    #[test]
    fn test_scatter_plane_respects_destination_stride() {
        let plane_arr = vec![10u8, 20, 30, 40, 50, 60];
        let plane = EdgeImage::borrow(&plane_arr, 3, 2, ImageChannels::Plane);
        let mut arr = vec![0x77u8; 20];
        let mut image = EdgeImageMut {
            data: crate::BufferStore::Borrowed(&mut arr),
            width: 3,
            height: 2,
            stride: 11,
            channels: ImageChannels::Channels3,
        };
        scatter_plane(&plane, &mut image, ThreadingPolicy::Single).unwrap();
        let expected = [
            10u8, 10, 10, 20, 20, 20, 30, 30, 30, 0x77, 0x77, //
            40, 40, 40, 50, 50, 50, 60, 60, 60,
        ];
        assert_eq!(
            arr,
            expected,
            "Padding must stay, the final short row must be written"
        );
    }

    #[test]
    fn test_scatter_plane_rejects_plane_destination() {
        let plane_arr = vec![0u8; 2 * 2];
        let plane = EdgeImage::borrow(&plane_arr, 2, 2, ImageChannels::Plane);
        let mut arr = vec![0u8; 2 * 2];
        let mut image = EdgeImageMut::borrow(&mut arr, 2, 2, ImageChannels::Plane);
        let result = scatter_plane(&plane, &mut image, ThreadingPolicy::Single);
        assert!(
            matches!(result, Err(EdgeError::ColorImageExpected)),
            "A plane has no color channels to broadcast into, got {:?}",
            result
        );
    }

    #[test]
    fn test_extract_scatter_round_trip_restores_gray_image() {
        let width: usize = 7;
        let height: usize = 5;
        let mut arr = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                let ramp = (x * 9 + y * 13) as u8;
                arr.extend_from_slice(&[ramp, ramp, ramp]);
            }
        }
        let reference = arr.clone();
        let mut plane = EdgeImageMut::default();
        {
            let image =
                EdgeImage::borrow(&arr, width as u32, height as u32, ImageChannels::Channels3);
            extract_plane(&image, 0, &mut plane, ThreadingPolicy::Single).unwrap();
        }
        let mut image = EdgeImageMut::borrow(
            &mut arr,
            width as u32,
            height as u32,
            ImageChannels::Channels3,
        );
        scatter_plane(&plane.to_immutable_ref(), &mut image, ThreadingPolicy::Single).unwrap();
        assert_eq!(arr, reference, "Gray image must survive the round trip");
    }

    #[test]
    fn test_scatter_plane_size_mismatch() {
        let plane_arr = vec![0u8; 4 * 4];
        let plane = EdgeImage::borrow(&plane_arr, 4, 4, ImageChannels::Plane);
        let mut arr = vec![0u8; 5 * 4 * 3];
        let mut image = EdgeImageMut::borrow(&mut arr, 5, 4, ImageChannels::Channels3);
        let result = scatter_plane(&plane, &mut image, ThreadingPolicy::Single);
        assert!(
            matches!(result, Err(EdgeError::ImagesMustMatch)),
            "Mismatched sizes must be rejected, got {:?}",
            result
        );
    }
}
