/*
 * Copyright (c) Radzivon Bartoshyk, 11/2024. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::images::{YuvNvFrame, YuvNvFrameMut};
use crate::yuv_error::{check_nv_destination, check_nv_dimensions, check_nv_source};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

#[inline]
fn swap_chroma_row<V: Copy>(src: &[V], dst: &mut [V]) {
    for (dst, src) in dst.chunks_exact_mut(2).zip(src.chunks_exact(2)) {
        dst[0] = src[1];
        dst[1] = src[0];
    }
}

/// Copies luma verbatim and swaps every chroma pair.
///
/// Swapping is its own inverse, so the same routine serves both directions.
fn nv_swap_chroma_impl<V: Copy + Send + Sync>(
    src: &[V],
    dst: &mut [V],
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    let frame_size = check_nv_dimensions(width, height)?;
    check_nv_source(src, frame_size)?;
    check_nv_destination(dst, frame_size)?;

    let luma_size = width as usize * height as usize;
    let (src_y, src_uv) = src[..frame_size].split_at(luma_size);
    let (dst_y, dst_uv) = dst[..frame_size].split_at_mut(luma_size);

    dst_y.copy_from_slice(src_y);

    // One chroma row holds width / 2 pairs
    let chroma_stride = width as usize;

    let src_iter;
    let dst_iter;
    #[cfg(feature = "rayon")]
    {
        src_iter = src_uv.par_chunks_exact(chroma_stride);
        dst_iter = dst_uv.par_chunks_exact_mut(chroma_stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        src_iter = src_uv.chunks_exact(chroma_stride);
        dst_iter = dst_uv.chunks_exact_mut(chroma_stride);
    }

    dst_iter.zip(src_iter).for_each(|(dst, src)| {
        swap_chroma_row(src, dst);
    });

    Ok(())
}

fn nv_swap_chroma_in_place_impl<V: Copy + Send + Sync>(
    frame: &mut [V],
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    let frame_size = check_nv_dimensions(width, height)?;
    check_nv_destination(frame, frame_size)?;

    let luma_size = width as usize * height as usize;
    let uv_plane = &mut frame[luma_size..frame_size];
    let chroma_stride = width as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = uv_plane.par_chunks_exact_mut(chroma_stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = uv_plane.chunks_exact_mut(chroma_stride);
    }

    iter.for_each(|row| {
        for pair in row.chunks_exact_mut(2) {
            pair.swap(0, 1);
        }
    });

    Ok(())
}

/// Converts NV21 to NV12.
///
/// Luma is copied verbatim, every `V,U` chroma pair is written as `U,V`.
/// Nothing is written when validation fails.
///
/// # Arguments
///
/// * `src`: Source NV21 frame, at least `width * height * 3 / 2` bytes
/// * `dst`: Destination NV12 frame, at least `width * height * 3 / 2` bytes
/// * `width`: Image width, must be even
/// * `height`: Image height, must be even
///
/// returns: Result<(), [YuvError]>
///
pub fn nv21_to_nv12(src: &[u8], dst: &mut [u8], width: u32, height: u32) -> Result<(), YuvError> {
    nv_swap_chroma_impl(src, dst, width, height)
}

/// Converts NV12 to NV21.
///
/// # Arguments
///
/// * `src`: Source NV12 frame, at least `width * height * 3 / 2` bytes
/// * `dst`: Destination NV21 frame, at least `width * height * 3 / 2` bytes
/// * `width`: Image width, must be even
/// * `height`: Image height, must be even
///
/// returns: Result<(), [YuvError]>
///
pub fn nv12_to_nv21(src: &[u8], dst: &mut [u8], width: u32, height: u32) -> Result<(), YuvError> {
    nv_swap_chroma_impl(src, dst, width, height)
}

/// Converts 16 bit NV21 to NV12, P010/P016 sample containers.
///
/// returns: Result<(), [YuvError]>
///
pub fn nv21_to_nv12_p16(
    src: &[u16],
    dst: &mut [u16],
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    nv_swap_chroma_impl(src, dst, width, height)
}

/// Converts 16 bit NV12 to NV21, P010/P016 sample containers.
///
/// returns: Result<(), [YuvError]>
///
pub fn nv12_to_nv21_p16(
    src: &[u16],
    dst: &mut [u16],
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    nv_swap_chroma_impl(src, dst, width, height)
}

/// Swaps chroma order of a frame in place, NV21 becomes NV12 and vice versa.
///
/// # Arguments
///
/// * `frame`: NV frame, at least `width * height * 3 / 2` bytes
/// * `width`: Image width, must be even
/// * `height`: Image height, must be even
///
/// returns: Result<(), [YuvError]>
///
pub fn nv_swap_chroma_in_place(frame: &mut [u8], width: u32, height: u32) -> Result<(), YuvError> {
    nv_swap_chroma_in_place_impl(frame, width, height)
}

/// Writes `src` into `dst` using the chroma order declared by `dst`.
///
/// Frames are copied when the orders already match.
///
/// # Arguments
///
/// * `src`: Source frame
/// * `dst`: Destination frame, must have the same dimensions as source
///
/// returns: Result<(), [YuvError]>
///
pub fn convert_nv_frame(src: &YuvNvFrame<u8>, dst: &mut YuvNvFrameMut<u8>) -> Result<(), YuvError> {
    src.check_constraints()?;
    dst.check_constraints()?;
    if src.width != dst.width || src.height != dst.height {
        return Err(YuvError::ImageDimensionsNotMatch);
    }
    if src.order == dst.order {
        let frame_size = check_nv_dimensions(src.width, src.height)?;
        dst.data.as_mut()[..frame_size].copy_from_slice(&src.data[..frame_size]);
        return Ok(());
    }
    nv_swap_chroma_impl(src.data, dst.data.as_mut(), src.width, src.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::BufferStoreMut;
    use crate::{nv_frame_size, ImageDimensions, NV12, NV21};
    use rand::Rng;

    fn random_frame(width: u32, height: u32) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..nv_frame_size(width, height).unwrap())
            .map(|_| rng.random::<u8>())
            .collect()
    }

    #[test]
    fn test_nv21_to_nv12_2x2() {
        let nv21 = [10u8, 11, 12, 13, 200, 100];
        let mut nv12 = [0u8; 6];
        nv21_to_nv12(&nv21, &mut nv12, 2, 2).unwrap();
        assert_eq!(nv12, [10, 11, 12, 13, 100, 200]);
    }

    #[test]
    fn test_swap_involution() {
        for (width, height) in [(2u32, 2u32), (4, 2), (6, 4), (640, 480), (34, 18)] {
            let nv21 = random_frame(width, height);
            let mut nv12 = vec![0u8; nv21.len()];
            let mut restored = vec![0u8; nv21.len()];
            nv21_to_nv12(&nv21, &mut nv12, width, height).unwrap();
            nv12_to_nv21(&nv12, &mut restored, width, height).unwrap();
            assert_eq!(restored, nv21, "Round trip failed on {}x{}", width, height);
        }
    }

    #[test]
    fn test_luma_is_untouched() {
        let (width, height) = (16u32, 8u32);
        let luma_size = (width * height) as usize;
        let nv21 = random_frame(width, height);
        let mut nv12 = vec![0u8; nv21.len()];
        nv21_to_nv12(&nv21, &mut nv12, width, height).unwrap();
        assert_eq!(&nv12[..luma_size], &nv21[..luma_size]);
        for (i, (dst, src)) in nv12[luma_size..]
            .chunks_exact(2)
            .zip(nv21[luma_size..].chunks_exact(2))
            .enumerate()
        {
            assert_eq!(dst, &[src[1], src[0]], "Chroma pair {} is not swapped", i);
        }
    }

    #[test]
    fn test_empty_buffers_are_rejected() {
        let mut dst = vec![42u8; 6];
        let err = nv21_to_nv12(&[], &mut dst, 2, 2).unwrap_err();
        assert!(err.is_invalid_buffer_length());
        assert_eq!(dst, vec![42u8; 6]);

        let src = [1u8; 6];
        let err = nv21_to_nv12(&src, &mut [], 2, 2).unwrap_err();
        assert!(err.is_invalid_buffer_length());
    }

    #[test]
    fn test_short_destination_is_not_written() {
        let src = random_frame(4, 4);
        let mut dst = vec![9u8; src.len() - 1];
        assert!(matches!(
            nv21_to_nv12(&src, &mut dst, 4, 4),
            Err(YuvError::DestinationSizeMismatch(_))
        ));
        assert!(dst.iter().all(|&v| v == 9));
    }

    #[test]
    fn test_odd_dimensions_are_rejected() {
        let src = [0u8; 64];
        let mut dst = [0u8; 64];
        assert_eq!(
            nv21_to_nv12(&src, &mut dst, 3, 2),
            Err(YuvError::OddDimensions(ImageDimensions {
                width: 3,
                height: 2
            }))
        );
        assert_eq!(nv21_to_nv12(&src, &mut dst, 0, 2), Err(YuvError::ZeroBaseSize));
    }

    #[test]
    fn test_oversized_destination_keeps_tail() {
        let src = random_frame(2, 2);
        let mut dst = vec![77u8; 10];
        nv21_to_nv12(&src, &mut dst, 2, 2).unwrap();
        assert_eq!(&dst[6..], &[77, 77, 77, 77]);
    }

    #[test]
    fn test_in_place_matches_copying() {
        let (width, height) = (12u32, 6u32);
        let nv21 = random_frame(width, height);
        let mut nv12 = vec![0u8; nv21.len()];
        nv21_to_nv12(&nv21, &mut nv12, width, height).unwrap();

        let mut in_place = nv21.clone();
        nv_swap_chroma_in_place(&mut in_place, width, height).unwrap();
        assert_eq!(in_place, nv12);
    }

    #[test]
    fn test_p16_swap() {
        let src = [1000u16, 1001, 1002, 1003, 512, 768];
        let mut dst = [0u16; 6];
        nv21_to_nv12_p16(&src, &mut dst, 2, 2).unwrap();
        assert_eq!(dst, [1000, 1001, 1002, 1003, 768, 512]);
        let mut back = [0u16; 6];
        nv12_to_nv21_p16(&dst, &mut back, 2, 2).unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn test_convert_nv_frame() {
        let (width, height) = (8u32, 4u32);
        let data = random_frame(width, height);
        let src = YuvNvFrame {
            data: &data,
            width,
            height,
            order: NV21,
        };

        let mut same = YuvNvFrameMut::<u8>::alloc(width, height, NV21);
        convert_nv_frame(&src, &mut same).unwrap();
        assert_eq!(same.data.borrow(), data.as_slice());

        let mut storage = vec![0u8; data.len()];
        let mut flipped = YuvNvFrameMut {
            data: BufferStoreMut::Borrowed(&mut storage),
            width,
            height,
            order: NV12,
        };
        convert_nv_frame(&src, &mut flipped).unwrap();
        let mut expected = vec![0u8; data.len()];
        nv21_to_nv12(&data, &mut expected, width, height).unwrap();
        assert_eq!(flipped.data.borrow(), expected.as_slice());

        let mut wrong = YuvNvFrameMut::<u8>::alloc(height, width, NV12);
        assert_eq!(
            convert_nv_frame(&src, &mut wrong),
            Err(YuvError::ImageDimensionsNotMatch)
        );
    }
}
